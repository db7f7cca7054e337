//! LearnPlot crate root: re-exports and module wiring.
//!
//! This crate provides small interactive teaching dashboards built on
//! egui/eframe: each dashboard loads a CSV time series (or synthesizes one at
//! startup), derives a handful of transformed series from a few UI controls,
//! and renders the result with egui_plot.
//!
//! The core is a single reactive cell:
//! - `controls`: declared UI inputs and their current values
//! - `derive`: a pure function (dashboard, dataset, control state) → plot spec
//! - `render`/`app`: the egui renderer consuming the plot spec
//!
//! Cohesive modules:
//! - `dataset`: immutable session data, CSV loading, synthetic generation
//! - `controls`: control declarations, domains, and state
//! - `events`: value-changed events and the channel feeding the handler
//! - `transform`: the numeric kernels (rolling mean, linear model, …)
//! - `spec`: the renderer-independent plot specification
//! - `dashboards`: the built-in teaching dashboards

mod render;

pub mod app;
pub mod color;
pub mod config;
pub mod controls;
pub mod dashboards;
pub mod dataset;
pub mod derive;
pub mod events;
pub mod spec;
pub mod transform;

// Public re-exports for a compact external API
pub use app::{run_dashboard, DashboardApp};
pub use config::{DashboardConfig, FeatureFlags};
pub use controls::{ControlDef, ControlId, ControlKind, ControlState, ControlValue};
pub use dataset::{CsvLayout, Dataset, XParse};
pub use derive::{derive_plot, Dashboard, SeriesRule, TitleRule};
pub use events::{channel_controls, ControlEvent, ControlSink};
pub use spec::{DrawMode, PlotSpec, SeriesLook, SeriesSpec, XAxisKind};
pub use transform::{Param, Transform};
