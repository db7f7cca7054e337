//! Demo: noisy sine wave on a linear trend (synthetic data).
//!
//! What it demonstrates
//! - Synthesizing the session dataset at startup (no input file).
//! - Toggling the components of a combined series and scaling the noise.
//!
//! How to run
//! ```bash
//! cargo run --example signals
//! ```

use learnplot::dashboards::signals;
use learnplot::{run_dashboard, DashboardConfig};

fn main() -> eframe::Result<()> {
    let mut cfg = DashboardConfig::default();
    cfg.window_title = "Signals".to_string();
    cfg.headline = Some("Noisy sine wave on a linear trend".to_string());
    cfg.subheadline = Some("A dashboard to explore signals and noise.".to_string());

    run_dashboard(signals::dashboard(), signals::dataset(), cfg)
}
