//! Ozone at two monitoring stations, one year of hourly data.
//!
//! Plot any combination of raw data, 7-day centered rolling average, or MDA8
//! (maximum daily 8-hour average) for the two stations. A dropdown selects
//! the draw mode of the second station's series only.
//!
//! Expected CSV layout (one header line):
//!   date_pst,YVR_ppb,Abbotsford_ppb
//!   2017-01-01 01:00,<f64>,<f64>
//! Empty or unparseable cells become missing values and are omitted from the
//! derived series.

use crate::controls::ControlDef;
use crate::dataset::{CsvLayout, XParse};
use crate::derive::{AxisSpec, Dashboard, SeriesRule, TitleRule};
use crate::spec::{SeriesLook, XAxisKind};
use crate::transform::Transform;

use super::css;

// Control identifiers
pub const YVR_RAW: &str = "yvr_raw";
pub const YVR_SMOOTHED: &str = "yvr_smoothed";
pub const YVR_MDA8: &str = "yvr_mda8";
pub const ABB_RAW: &str = "abb_raw";
pub const ABB_SMOOTHED: &str = "abb_smoothed";
pub const ABB_MDA8: &str = "abb_mda8";
pub const LINETYPE: &str = "linetype";

// Column names
pub const YVR_COLUMN: &str = "YVR_ppb";
pub const ABB_COLUMN: &str = "Abbotsford_ppb";

/// Data points are 1 h apart, so a 7-day window spans 168 samples.
const SMOOTH_WINDOW: usize = 24 * 7;
const MDA8_WINDOW: usize = 8;
/// A window emits a point once it holds at least this many valid samples.
const MIN_PERIODS: usize = 6;

/// Layout of the prepared ozone CSV file.
pub fn csv_layout() -> CsvLayout {
    CsvLayout {
        has_header: true,
        x_column: 0,
        x_parse: XParse::DateTime {
            format: "%Y-%m-%d %H:%M".to_string(),
        },
        value_columns: vec![(1, YVR_COLUMN.to_string()), (2, ABB_COLUMN.to_string())],
        ..CsvLayout::default()
    }
}

/// The ozone dashboard definition.
pub fn dashboard() -> Dashboard {
    let yvr_gates: Vec<_> = [YVR_RAW, YVR_SMOOTHED, YVR_MDA8]
        .iter()
        .map(|s| (*s).into())
        .collect();
    let abb_gates: Vec<_> = [ABB_RAW, ABB_SMOOTHED, ABB_MDA8]
        .iter()
        .map(|s| (*s).into())
        .collect();

    Dashboard {
        title: String::new(),
        controls: vec![
            ControlDef::checkbox(YVR_RAW, "YVR raw", true),
            ControlDef::checkbox(YVR_SMOOTHED, "YVR smoothed", false),
            ControlDef::checkbox(YVR_MDA8, "YVR MDA8", false),
            ControlDef::checkbox(ABB_RAW, "Abb raw", false),
            ControlDef::checkbox(ABB_SMOOTHED, "Abb smoothed", false),
            ControlDef::checkbox(ABB_MDA8, "Abb MDA8", false),
            ControlDef::dropdown(
                LINETYPE,
                "Plot type (Abbotsford only)",
                &["lines", "markers", "lines+markers"],
                "lines",
            ),
        ],
        rules: vec![
            SeriesRule::new(
                "YVR raw",
                Transform::Identity,
                SeriesLook::lines(css("MediumTurquoise")),
            )
            .source(YVR_COLUMN)
            .enabled_by(YVR_RAW),
            SeriesRule::new(
                "Abb raw",
                Transform::Identity,
                SeriesLook::lines(css("SandyBrown")),
            )
            .source(ABB_COLUMN)
            .enabled_by(ABB_RAW)
            .mode_from(LINETYPE),
            SeriesRule::new(
                "YVR 7-day average",
                Transform::RollingMean {
                    window: SMOOTH_WINDOW,
                    min_periods: MIN_PERIODS,
                    centered: true,
                },
                SeriesLook::lines(css("green")),
            )
            .source(YVR_COLUMN)
            .enabled_by(YVR_SMOOTHED),
            SeriesRule::new(
                "Abb 7-day average",
                Transform::RollingMean {
                    window: SMOOTH_WINDOW,
                    min_periods: MIN_PERIODS,
                    centered: true,
                },
                SeriesLook::lines(css("red")),
            )
            .source(ABB_COLUMN)
            .enabled_by(ABB_SMOOTHED)
            .mode_from(LINETYPE),
            SeriesRule::new(
                "YVR max daily 8hr avg",
                Transform::DailyMaxOfRolling {
                    window: MDA8_WINDOW,
                    min_periods: MIN_PERIODS,
                },
                SeriesLook::lines(css("blue")).width(2.0),
            )
            .source(YVR_COLUMN)
            .enabled_by(YVR_MDA8),
            SeriesRule::new(
                "Abb max daily 8hr avg",
                Transform::DailyMaxOfRolling {
                    window: MDA8_WINDOW,
                    min_periods: MIN_PERIODS,
                },
                SeriesLook::lines(css("firebrick")).width(2.0),
            )
            .source(ABB_COLUMN)
            .enabled_by(ABB_MDA8)
            .mode_from(LINETYPE),
        ],
        axes: AxisSpec {
            x_label: "Time".to_string(),
            y_label: "ppb".to_string(),
            x_range: None,
            y_range: None,
            x_axis: XAxisKind::DateTime,
        },
        title_rules: vec![
            TitleRule {
                requires: vec![yvr_gates.clone()],
                title: "Vancouver Airport".to_string(),
            },
            TitleRule {
                requires: vec![abb_gates.clone()],
                title: "Abbotsford".to_string(),
            },
            TitleRule {
                requires: vec![yvr_gates, abb_gates],
                title: "Vancouver Airport and Abbotsford".to_string(),
            },
        ],
    }
}
