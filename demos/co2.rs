//! Demo: approximate linear models for monthly CO₂.
//!
//! What it demonstrates
//! - Binding slider values into a transform (the linear fit's slope and
//!   intercept) and switching series with a radio-style dropdown.
//! - Fixed axis ranges so the fit is judged against the first five years.
//!
//! How to run
//! ```bash
//! cargo run --example co2 -- [path/to/monthly_in_situ_co2_mlo.csv]
//! ```
//! The expected file is the Scripps Mauna Loa monthly in-situ CO₂ record;
//! the layout is documented in `learnplot::dashboards::co2`.

use std::path::PathBuf;

use learnplot::dashboards::co2;
use learnplot::{run_dashboard, DashboardConfig, Dataset};

fn main() -> eframe::Result<()> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/monthly_in_situ_co2_mlo.csv"));

    let dataset = match Dataset::from_csv_path(&path, &co2::csv_layout()) {
        Ok(ds) => ds,
        Err(e) => {
            eprintln!("[co2] Failed to read {:?}: {}", path, e);
            std::process::exit(1);
        }
    };
    eprintln!("[co2] Loaded {} rows from {:?}", dataset.len(), path);

    let mut cfg = DashboardConfig::default();
    cfg.window_title = "CO2 linear models".to_string();
    cfg.headline = Some("Approximate linear models for CO2 at Mauna Loa, Hawaii".to_string());
    cfg.subheadline = Some(
        "Fit a line to the first 5 years of data. How far out would you trust \
         the prediction?"
            .to_string(),
    );

    run_dashboard(co2::dashboard(), dataset, cfg)
}
