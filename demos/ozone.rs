//! Demo: ozone at two monitoring stations for one year.
//!
//! What it demonstrates
//! - Loading an hourly CSV time series once at startup.
//! - Toggling raw / 7-day average / MDA8 series per station with checkboxes;
//!   the dropdown sets the draw mode of the Abbotsford series only.
//!
//! How to run
//! ```bash
//! cargo run --example ozone -- [path/to/ozone.csv]
//! ```
//! The CSV layout is documented in `learnplot::dashboards::ozone`. Hourly
//! ozone for 2017 at YVR and Abbotsford is available from the BC Data
//! Catalogue ("Air Quality Monitoring: Verified Hourly Data").

use std::path::PathBuf;

use learnplot::dashboards::ozone;
use learnplot::{run_dashboard, DashboardConfig, Dataset};

fn main() -> eframe::Result<()> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/YVR and Abbotsford 2017.csv"));

    let dataset = match Dataset::from_csv_path(&path, &ozone::csv_layout()) {
        Ok(ds) => ds,
        Err(e) => {
            eprintln!("[ozone] Failed to read {:?}: {}", path, e);
            std::process::exit(1);
        }
    };
    eprintln!("[ozone] Loaded {} rows from {:?}", dataset.len(), path);

    let mut cfg = DashboardConfig::default();
    cfg.window_title = "Ozone".to_string();
    cfg.headline = Some("Ozone at two locations for all of 2017".to_string());
    cfg.subheadline = Some(
        "Select timeseries to display using checkboxes. The dropdown sets the \
         trace type for Abbotsford's data only. YVR = Vancouver airport, \
         Abb = Abbotsford, MDA8 = maximum daily 8 hour average."
            .to_string(),
    );

    run_dashboard(ozone::dashboard(), dataset, cfg)
}
