//! A noisy sine wave on a linear trend, synthesized at startup.
//!
//! Checkboxes switch the sine, noise, and trend components of the combined
//! signal on and off; a slider scales the noise level. Built for exploring
//! what "signal" and "noise" look like before any real data is involved.

use crate::controls::ControlDef;
use crate::dataset::{grid, Dataset};
use crate::derive::{AxisSpec, Dashboard, SeriesRule};
use crate::spec::{SeriesLook, XAxisKind};
use crate::transform::{Param, SumTerm, Transform};

use super::css;

// Control identifiers
pub const SHOW_SINE: &str = "show_sine";
pub const SHOW_NOISE: &str = "show_noise";
pub const SHOW_TREND: &str = "show_trend";
pub const NOISE_LEVEL: &str = "noise_level";

// Column names
pub const SINE_COLUMN: &str = "sine";
pub const NOISE_COLUMN: &str = "noise";
pub const TREND_COLUMN: &str = "trend";

const CYCLES: f64 = 10.0;
const STEP: f64 = 0.05;
const TREND_SLOPE: f64 = 0.4;
const TREND_OFFSET: f64 = 0.5;
// Fixed so the derived output is a pure function of the control state.
const NOISE_SEED: u64 = 42;

/// Synthesize the session dataset: one sine cycle per x unit, unit noise,
/// and a linear trend, on an even grid.
pub fn dataset() -> Dataset {
    Dataset::new(grid(0.0, CYCLES, STEP))
        .with_column_fn(SINE_COLUMN, |x| (x * 2.0 * std::f64::consts::PI).sin())
        .with_column_fn(TREND_COLUMN, |x| TREND_SLOPE * x + TREND_OFFSET)
        .with_noise_column(NOISE_COLUMN, NOISE_SEED)
}

/// The signals dashboard definition.
pub fn dashboard() -> Dashboard {
    Dashboard {
        title: "Noisy sine wave on a linear trend".to_string(),
        controls: vec![
            ControlDef::checkbox(SHOW_SINE, "Sine", true),
            ControlDef::checkbox(SHOW_NOISE, "Noise", true),
            ControlDef::checkbox(SHOW_TREND, "Trend", true),
            ControlDef::slider(NOISE_LEVEL, "Noise level", 0.0, 5.0, 0.1, 1.0),
        ],
        rules: vec![SeriesRule::new(
            "signal",
            Transform::Sum {
                terms: vec![
                    SumTerm {
                        source: SINE_COLUMN.to_string(),
                        weight: Param::Fixed(1.0),
                        gate: Some(SHOW_SINE.into()),
                    },
                    SumTerm {
                        source: NOISE_COLUMN.to_string(),
                        weight: Param::Control(NOISE_LEVEL.into()),
                        gate: Some(SHOW_NOISE.into()),
                    },
                    SumTerm {
                        source: TREND_COLUMN.to_string(),
                        weight: Param::Fixed(1.0),
                        gate: Some(SHOW_TREND.into()),
                    },
                ],
            },
            SeriesLook::lines(css("MediumTurquoise")),
        )],
        axes: AxisSpec {
            x_label: "t".to_string(),
            y_label: "sin(t)".to_string(),
            x_range: None,
            y_range: None,
            x_axis: XAxisKind::Numeric,
        },
        title_rules: Vec::new(),
    }
}
