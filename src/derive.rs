//! Dashboard definitions and the derivation function.
//!
//! A [`Dashboard`] is plain data: the declared controls, an ordered list of
//! [`SeriesRule`]s, axis settings, and title rules. [`derive_plot`] is the
//! reactive core — a pure function from (dashboard, dataset, control state)
//! to a [`PlotSpec`]. No hidden state, no history: calling it twice with the
//! same inputs yields the same output.

use serde::{Deserialize, Serialize};

use crate::color;
use crate::controls::{ControlDef, ControlId, ControlState};
use crate::dataset::Dataset;
use crate::spec::{DrawMode, PlotSpec, SeriesLook, SeriesSpec, XAxisKind};
use crate::transform::Transform;

/// One derived series: source column, transform, gating, and look.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesRule {
    pub name: String,
    /// Source column name; `None` for transforms that do not read a column
    /// (`Linear`, `Sum`).
    #[serde(default)]
    pub source: Option<String>,
    pub transform: Transform,
    /// Checkbox that must be on for the series to appear. Rules without a
    /// gate are always included.
    #[serde(default)]
    pub enabled_by: Option<ControlId>,
    /// Dropdown gate: the series appears only while the control holds this
    /// choice (e.g. a raw-vs-adjusted radio selecting one of two series).
    #[serde(default)]
    pub enabled_when: Option<(ControlId, String)>,
    /// Visual style. A look left at its default is assigned a palette color
    /// by rule position at derivation time.
    #[serde(default)]
    pub look: SeriesLook,
    /// Dropdown whose current choice overrides the look's draw mode
    /// (choices are [`DrawMode::LABELS`]).
    #[serde(default)]
    pub mode_from: Option<ControlId>,
}

impl SeriesRule {
    pub fn new<S: Into<String>>(name: S, transform: Transform, look: SeriesLook) -> Self {
        Self {
            name: name.into(),
            source: None,
            transform,
            enabled_by: None,
            enabled_when: None,
            look,
            mode_from: None,
        }
    }

    pub fn source<S: Into<String>>(mut self, column: S) -> Self {
        self.source = Some(column.into());
        self
    }

    pub fn enabled_by<I: Into<ControlId>>(mut self, id: I) -> Self {
        self.enabled_by = Some(id.into());
        self
    }

    pub fn enabled_when<I: Into<ControlId>, S: Into<String>>(mut self, id: I, choice: S) -> Self {
        self.enabled_when = Some((id.into(), choice.into()));
        self
    }

    pub fn mode_from<I: Into<ControlId>>(mut self, id: I) -> Self {
        self.mode_from = Some(id.into());
        self
    }
}

/// Plot title override: applies when every group in `requires` has at least
/// one gate switched on. Rules are evaluated in order; the last match wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleRule {
    pub requires: Vec<Vec<ControlId>>,
    pub title: String,
}

/// Axis labels and optional fixed view ranges.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AxisSpec {
    pub x_label: String,
    pub y_label: String,
    #[serde(default)]
    pub x_range: Option<[f64; 2]>,
    #[serde(default)]
    pub y_range: Option<[f64; 2]>,
    #[serde(default)]
    pub x_axis: XAxisKind,
}

/// A complete dashboard definition: controls, series rules, axes, titles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    pub title: String,
    pub controls: Vec<ControlDef>,
    pub rules: Vec<SeriesRule>,
    pub axes: AxisSpec,
    #[serde(default)]
    pub title_rules: Vec<TitleRule>,
}

impl Dashboard {
    pub fn control(&self, id: &ControlId) -> Option<&ControlDef> {
        self.controls.iter().find(|d| &d.id == id)
    }

    /// Initial control state: every control at its declared default.
    pub fn initial_state(&self) -> ControlState {
        ControlState::from_defs(&self.controls)
    }

    /// Load a dashboard definition from YAML (declarative dashboards).
    pub fn from_yaml_str(s: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(s)
    }

    pub fn to_yaml_string(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

/// The derivation function: compute the plot specification for the current
/// control state. Pure; one call per drained event batch.
///
/// Included series are exactly those whose gate is on (ungated rules always
/// appear). A rule whose transform cannot be computed at all (missing source
/// column, unresolved parameter) is omitted, matching the silent-omission
/// error model.
pub fn derive_plot(dashboard: &Dashboard, dataset: &Dataset, state: &ControlState) -> PlotSpec {
    let mut series = Vec::with_capacity(dashboard.rules.len());
    for (index, rule) in dashboard.rules.iter().enumerate() {
        if let Some(gate) = &rule.enabled_by {
            if !state.flag(gate) {
                continue;
            }
        }
        if let Some((ctl, choice)) = &rule.enabled_when {
            if state.choice(ctl) != Some(choice.as_str()) {
                continue;
            }
        }
        let points = match rule.transform.apply(dataset, rule.source.as_deref(), state) {
            Some(points) => points,
            None => continue,
        };
        let mut look = rule.look;
        // Rules that left the look at its default get a palette color by
        // position, so declarative dashboards need not name colors.
        if look == SeriesLook::default() {
            look.color = color::palette_color(index);
        }
        if let Some(mode_ctl) = &rule.mode_from {
            if let Some(mode) = state.choice(mode_ctl).and_then(DrawMode::from_label) {
                look.mode = mode;
            }
        }
        series.push(SeriesSpec {
            name: rule.name.clone(),
            points,
            look,
        });
    }

    let mut title = dashboard.title.clone();
    for rule in &dashboard.title_rules {
        let satisfied = rule
            .requires
            .iter()
            .all(|group| group.iter().any(|gate| state.flag(gate)));
        if satisfied {
            title = rule.title.clone();
        }
    }

    PlotSpec {
        title,
        x_label: dashboard.axes.x_label.clone(),
        y_label: dashboard.axes.y_label.clone(),
        x_range: dashboard.axes.x_range,
        y_range: dashboard.axes.y_range,
        x_axis: dashboard.axes.x_axis,
        series,
    }
}
