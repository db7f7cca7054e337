//! The plot specification: renderer-independent plain data.
//!
//! A [`PlotSpec`] fully describes what to draw — named series with points and
//! looks, plus axis labels and optional fixed ranges. It carries no reference
//! to the rendering technology; the bundled egui renderer consumes it, and
//! the JSON form lets any other surface do the same.

use serde::{Deserialize, Serialize};

/// How a series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawMode {
    Lines,
    Markers,
    LinesMarkers,
}

impl DrawMode {
    /// Dropdown labels, matching the original dashboards' choice strings.
    pub const LABELS: [&'static str; 3] = ["lines", "markers", "lines+markers"];

    pub fn label(&self) -> &'static str {
        match self {
            DrawMode::Lines => "lines",
            DrawMode::Markers => "markers",
            DrawMode::LinesMarkers => "lines+markers",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        match s {
            "lines" => Some(DrawMode::Lines),
            "markers" => Some(DrawMode::Markers),
            "lines+markers" => Some(DrawMode::LinesMarkers),
            _ => None,
        }
    }
}

/// Visual style of one series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesLook {
    pub color: [u8; 3],
    pub width: f32,
    pub mode: DrawMode,
}

impl Default for SeriesLook {
    fn default() -> Self {
        Self {
            color: [255, 255, 255],
            width: 1.5,
            mode: DrawMode::Lines,
        }
    }
}

impl SeriesLook {
    pub fn lines(color: [u8; 3]) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    pub fn markers(color: [u8; 3]) -> Self {
        Self {
            color,
            mode: DrawMode::Markers,
            ..Self::default()
        }
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }
}

/// One named series: ordered (x, y) points plus a look.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSpec {
    pub name: String,
    pub points: Vec<[f64; 2]>,
    pub look: SeriesLook,
}

/// Interpretation of the x axis (drives tick formatting only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum XAxisKind {
    #[default]
    Numeric,
    /// x values are epoch seconds; ticks format as calendar dates.
    DateTime,
}

/// The declarative description of what to draw.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlotSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Fixed [min, max] x view, or None to fit to data.
    pub x_range: Option<[f64; 2]>,
    pub y_range: Option<[f64; 2]>,
    pub x_axis: XAxisKind,
    pub series: Vec<SeriesSpec>,
}

impl PlotSpec {
    pub fn series(&self, name: &str) -> Option<&SeriesSpec> {
        self.series.iter().find(|s| s.name == name)
    }

    /// JSON form for external rendering surfaces.
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }
}
