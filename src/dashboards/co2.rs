//! Approximate linear models for monthly CO₂ readings.
//!
//! Scatter the raw or seasonally adjusted signal, then fit the line
//! `slope * (date - min(date)) + intercept` by eye with two sliders. The view
//! is pinned to the first five years so the fit can be judged locally.
//!
//! Expected CSV layout: the Scripps monthly in-situ file — 56 preamble lines,
//! one header line, then comma-separated rows where cell 3 is the date as a
//! fractional year, cell 4 the raw CO₂ reading and cell 5 the seasonally
//! adjusted one. `-99.99` marks missing readings.

use crate::controls::ControlDef;
use crate::dataset::{CsvLayout, XParse};
use crate::derive::{AxisSpec, Dashboard, SeriesRule};
use crate::spec::{SeriesLook, XAxisKind};
use crate::transform::{Param, Transform};

use super::css;

// Control identifiers
pub const SLOPE: &str = "line_slope";
pub const INTERCEPT: &str = "line_intcpt";
pub const SIGNAL: &str = "signal";

// Column names
pub const RAW_COLUMN: &str = "raw_co2";
pub const ADJUSTED_COLUMN: &str = "seasonally_adjusted";

/// Layout of the monthly CO₂ CSV file.
pub fn csv_layout() -> CsvLayout {
    CsvLayout {
        skip_rows: 56,
        has_header: true,
        x_column: 3,
        x_parse: XParse::Number,
        value_columns: vec![
            (4, RAW_COLUMN.to_string()),
            (5, ADJUSTED_COLUMN.to_string()),
        ],
        na_markers: vec!["-99.99".to_string()],
        ..CsvLayout::default()
    }
}

/// The CO₂ linear-models dashboard definition.
pub fn dashboard() -> Dashboard {
    Dashboard {
        title: "CO2 ppm".to_string(),
        controls: vec![
            ControlDef::slider(SLOPE, "Slope", 0.0, 3.0, 0.1, 2.0),
            ControlDef::slider(INTERCEPT, "Intercept", 310.0, 320.0, 0.25, 312.0),
            ControlDef::dropdown(SIGNAL, "Signal type", &["adjusted", "raw"], "adjusted"),
        ],
        rules: vec![
            SeriesRule::new(
                "CO2",
                Transform::Identity,
                SeriesLook::markers(css("MediumTurquoise")),
            )
            .source(ADJUSTED_COLUMN)
            .enabled_when(SIGNAL, "adjusted"),
            SeriesRule::new(
                "CO2",
                Transform::Identity,
                SeriesLook::markers(css("MediumTurquoise")),
            )
            .source(RAW_COLUMN)
            .enabled_when(SIGNAL, "raw"),
            SeriesRule::new(
                "linear fit",
                Transform::Linear {
                    slope: Param::Control(SLOPE.into()),
                    intercept: Param::Control(INTERCEPT.into()),
                },
                SeriesLook::lines(css("SandyBrown")),
            ),
        ],
        axes: AxisSpec {
            x_label: "Time".to_string(),
            y_label: "ppm".to_string(),
            x_range: Some([1958.0, 1963.0]),
            y_range: Some([310.0, 325.0]),
            x_axis: XAxisKind::Numeric,
        },
        title_rules: Vec::new(),
    }
}
