//! Demo: a dashboard defined entirely in a YAML file.
//!
//! What it demonstrates
//! - Loading a declarative dashboard definition (controls, rules, axes) from
//!   YAML instead of building it in code.
//!
//! How to run
//! ```bash
//! cargo run --example yaml_dashboard -- [dashboard.yaml] [data.csv]
//! ```
//! Defaults to the bundled `data/sample.yaml` and `data/sample.csv`. The CSV
//! is expected to have a header line and `t,value` columns.

use std::path::PathBuf;

use learnplot::{run_dashboard, CsvLayout, Dashboard, DashboardConfig, Dataset};

fn main() -> eframe::Result<()> {
    let mut args = std::env::args().skip(1);
    let yaml_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/sample.yaml"));
    let csv_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/sample.csv"));

    let yaml = match std::fs::read_to_string(&yaml_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("[yaml_dashboard] Failed to read {:?}: {}", yaml_path, e);
            std::process::exit(1);
        }
    };
    let dashboard = match Dashboard::from_yaml_str(&yaml) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("[yaml_dashboard] Bad dashboard definition: {}", e);
            std::process::exit(1);
        }
    };

    let layout = CsvLayout {
        value_columns: vec![(1, "value".to_string())],
        ..CsvLayout::default()
    };
    let dataset = match Dataset::from_csv_path(&csv_path, &layout) {
        Ok(ds) => ds,
        Err(e) => {
            eprintln!("[yaml_dashboard] Failed to read {:?}: {}", csv_path, e);
            std::process::exit(1);
        }
    };

    let mut cfg = DashboardConfig::default();
    cfg.window_title = dashboard.title.clone();

    run_dashboard(dashboard, dataset, cfg)
}
