//! Control declarations and their current values.
//!
//! A dashboard declares its inputs as [`ControlDef`]s; the session's current
//! values live in a [`ControlState`]. Writes go through the declaring def and
//! are clamped to its domain, so derivation can rely on every value being
//! in range.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Identifier of a control by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ControlId(pub String);

impl ControlId {
    pub fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }
}

impl From<&str> for ControlId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// The domain of a control.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ControlKind {
    /// Numeric range with a step and default.
    Slider {
        min: f64,
        max: f64,
        step: f64,
        default: f64,
    },
    /// Boolean toggle.
    Checkbox { default: bool },
    /// Enumerated string choices (rendered as a dropdown or radio group).
    Dropdown {
        choices: Vec<String>,
        default: String,
    },
}

/// Declaration of one UI input: identifier, user-facing label, and domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlDef {
    pub id: ControlId,
    pub label: String,
    pub kind: ControlKind,
}

impl ControlDef {
    pub fn slider<I: Into<ControlId>, S: Into<String>>(
        id: I,
        label: S,
        min: f64,
        max: f64,
        step: f64,
        default: f64,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind: ControlKind::Slider {
                min,
                max,
                step,
                default,
            },
        }
    }

    pub fn checkbox<I: Into<ControlId>, S: Into<String>>(id: I, label: S, default: bool) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind: ControlKind::Checkbox { default },
        }
    }

    pub fn dropdown<I: Into<ControlId>, S: Into<String>>(
        id: I,
        label: S,
        choices: &[&str],
        default: &str,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind: ControlKind::Dropdown {
                choices: choices.iter().map(|s| s.to_string()).collect(),
                default: default.to_string(),
            },
        }
    }

    /// The control's default value.
    pub fn default_value(&self) -> ControlValue {
        match &self.kind {
            ControlKind::Slider { default, .. } => ControlValue::Scalar(*default),
            ControlKind::Checkbox { default } => ControlValue::Flag(*default),
            ControlKind::Dropdown { default, .. } => ControlValue::Choice(default.clone()),
        }
    }

    /// Clamp an incoming value to this control's domain.
    ///
    /// Out-of-range scalars clamp to the range, unknown choices fall back to
    /// the declared default, and a value of the wrong shape entirely is
    /// replaced by the default.
    pub fn clamp(&self, value: ControlValue) -> ControlValue {
        match (&self.kind, value) {
            (ControlKind::Slider { min, max, .. }, ControlValue::Scalar(v)) => {
                ControlValue::Scalar(v.clamp(*min, *max))
            }
            (ControlKind::Checkbox { .. }, ControlValue::Flag(b)) => ControlValue::Flag(b),
            (ControlKind::Dropdown { choices, default }, ControlValue::Choice(c)) => {
                if choices.iter().any(|x| *x == c) {
                    ControlValue::Choice(c)
                } else {
                    ControlValue::Choice(default.clone())
                }
            }
            _ => self.default_value(),
        }
    }
}

/// Current value of one control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ControlValue {
    Scalar(f64),
    Flag(bool),
    Choice(String),
}

/// Mapping from control identifier to its current value.
///
/// Fully determined by the declaring defs plus the history of applied events;
/// no other state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlState {
    values: HashMap<ControlId, ControlValue>,
}

impl ControlState {
    /// Initial state: every control at its declared default.
    pub fn from_defs(defs: &[ControlDef]) -> Self {
        let values = defs
            .iter()
            .map(|d| (d.id.clone(), d.default_value()))
            .collect();
        Self { values }
    }

    /// Apply a value to the control declared by `def`, clamping to its domain.
    pub fn apply(&mut self, def: &ControlDef, value: ControlValue) {
        self.values.insert(def.id.clone(), def.clamp(value));
    }

    pub fn get(&self, id: &ControlId) -> Option<&ControlValue> {
        self.values.get(id)
    }

    pub fn scalar(&self, id: &ControlId) -> Option<f64> {
        match self.values.get(id) {
            Some(ControlValue::Scalar(v)) => Some(*v),
            _ => None,
        }
    }

    /// Checkbox value; an unknown id reads as off.
    pub fn flag(&self, id: &ControlId) -> bool {
        matches!(self.values.get(id), Some(ControlValue::Flag(true)))
    }

    pub fn choice(&self, id: &ControlId) -> Option<&str> {
        match self.values.get(id) {
            Some(ControlValue::Choice(c)) => Some(c.as_str()),
            _ => None,
        }
    }
}
