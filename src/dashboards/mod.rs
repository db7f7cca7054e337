//! Built-in teaching dashboards.
//!
//! Each submodule packages one complete dashboard as data: the control
//! declarations, the series rules, and (where the data comes from a file)
//! the CSV layout. The modules contain no logic of their own — everything
//! goes through [`crate::derive::derive_plot`].

pub mod co2;
pub mod ozone;
pub mod signals;

use crate::color;

/// Resolve a CSS color name, falling back to white for unknown names.
pub(crate) fn css(name: &str) -> [u8; 3] {
    color::named(name).unwrap_or([255, 255, 255])
}
