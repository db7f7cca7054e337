//! Configuration types for the dashboard UI.

// ─────────────────────────────────────────────────────────────────────────────
// Feature flags
// ─────────────────────────────────────────────────────────────────────────────

/// Toggle individual UI features on or off.
///
/// All features default to `true` (enabled). Disable features to create a
/// minimal, focused teaching view.
#[derive(Clone, Debug)]
pub struct FeatureFlags {
    /// Show the plot legend.
    pub legend: bool,
    /// Show the plot grid.
    pub grid: bool,
    /// Show X-axis tick labels.
    pub x_tick_labels: bool,
    /// Show Y-axis tick labels.
    pub y_tick_labels: bool,
    /// Show the controls panel above the plot.
    pub controls_panel: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            legend: true,
            grid: true,
            x_tick_labels: true,
            y_tick_labels: true,
            controls_panel: true,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// DashboardConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for a dashboard window.
#[derive(Clone)]
pub struct DashboardConfig {
    /// Native window title.
    pub window_title: String,
    /// Optional headline rendered above the controls.
    pub headline: Option<String>,
    /// Optional subheadline below the headline (purpose / instructions).
    pub subheadline: Option<String>,
    /// Toggle individual UI features on/off.
    pub features: FeatureFlags,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            window_title: "LearnPlot".to_string(),
            headline: None,
            subheadline: None,
            features: FeatureFlags::default(),
            native_options: None,
        }
    }
}
