//! Session datasets: an ordered x grid plus named value columns.
//!
//! A `Dataset` is loaded (or synthesized) once at startup and stays immutable
//! for the session. Missing or unparseable cells are stored as `f64::NAN` and
//! are omitted from any derived series downstream — malformed input never
//! raises an error past the initial file read.

use std::io;
use std::path::Path;

use chrono::NaiveDateTime;

use crate::transform::unit_noise;

/// A single named value column, aligned with the dataset's x grid.
#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub values: Vec<f64>,
}

/// Ordered (x, value…) data for one session.
///
/// x is `f64` throughout: epoch seconds for dated data, plain numbers
/// otherwise. Columns are padded or truncated to the x grid length on insert.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    xs: Vec<f64>,
    columns: Vec<Column>,
}

impl Dataset {
    pub fn new(xs: Vec<f64>) -> Self {
        Self {
            xs,
            columns: Vec::new(),
        }
    }

    /// Insert a column, padding with NaN or truncating to the x grid length.
    pub fn with_column<S: Into<String>>(mut self, name: S, mut values: Vec<f64>) -> Self {
        values.resize(self.xs.len(), f64::NAN);
        self.columns.push(Column {
            name: name.into(),
            values,
        });
        self
    }

    /// Insert a column computed point-wise from the x grid.
    pub fn with_column_fn<S, F>(self, name: S, f: F) -> Self
    where
        S: Into<String>,
        F: Fn(f64) -> f64,
    {
        let values: Vec<f64> = self.xs.iter().map(|&x| f(x)).collect();
        self.with_column(name, values)
    }

    /// Insert a deterministic unit-noise column (values in [-0.5, 0.5)).
    ///
    /// The seed is fixed by the caller so that derived output stays a pure
    /// function of (dataset, control state).
    pub fn with_noise_column<S: Into<String>>(self, name: S, seed: u64) -> Self {
        let n = self.xs.len();
        self.with_column(name, unit_noise(seed, n))
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Smallest finite x value, if any.
    pub fn x_min(&self) -> Option<f64> {
        self.xs
            .iter()
            .copied()
            .filter(|x| x.is_finite())
            .fold(None, |acc, x| Some(acc.map_or(x, |a: f64| a.min(x))))
    }

    /// Keep only the first `n` rows (all columns are cut to match).
    pub fn head(mut self, n: usize) -> Self {
        self.xs.truncate(n);
        for c in &mut self.columns {
            c.values.truncate(n);
        }
        self
    }

    /// Load a dataset from a CSV file using a fixed layout.
    ///
    /// Only the file read itself can fail; malformed rows are skipped and bad
    /// cells become NaN, per the layout's rules.
    pub fn from_csv_path<P: AsRef<Path>>(path: P, layout: &CsvLayout) -> io::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_csv_str(&text, layout))
    }

    /// Parse CSV text using a fixed layout. Rows whose x cell fails to parse
    /// are silently skipped; value cells that fail to parse (or match an NA
    /// marker) become NaN.
    pub fn from_csv_str(text: &str, layout: &CsvLayout) -> Self {
        let mut xs: Vec<f64> = Vec::new();
        let mut cols: Vec<Vec<f64>> = vec![Vec::new(); layout.value_columns.len()];

        let mut lines = text.lines().skip(layout.skip_rows);
        if layout.has_header {
            let _ = lines.next();
        }

        for line in lines {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let cells: Vec<&str> = line.split(layout.delimiter).map(|s| s.trim()).collect();

            let x = match cells.get(layout.x_column).and_then(|s| layout.x_parse.parse(s)) {
                Some(x) => x,
                None => continue, // malformed row
            };

            xs.push(x);
            for (slot, (idx, _)) in cols.iter_mut().zip(layout.value_columns.iter()) {
                let v = cells
                    .get(*idx)
                    .filter(|s| !layout.na_markers.iter().any(|na| na == *s))
                    .and_then(|s| s.parse::<f64>().ok())
                    .unwrap_or(f64::NAN);
                slot.push(v);
            }
        }

        let mut ds = Dataset::new(xs);
        for (values, (_, name)) in cols.into_iter().zip(layout.value_columns.iter()) {
            ds = ds.with_column(name.clone(), values);
        }
        ds
    }
}

/// Build an evenly spaced grid `[start, stop)` with the given step.
pub fn grid(start: f64, stop: f64, step: f64) -> Vec<f64> {
    let mut xs = Vec::new();
    if step <= 0.0 {
        return xs;
    }
    let mut i = 0u64;
    loop {
        let x = start + (i as f64) * step;
        if x >= stop {
            break;
        }
        xs.push(x);
        i += 1;
    }
    xs
}

// ─────────────────────────────────────────────────────────────────────────────
// CSV layout
// ─────────────────────────────────────────────────────────────────────────────

/// How to interpret the x cell of a CSV row.
#[derive(Debug, Clone)]
pub enum XParse {
    /// Plain `f64` (e.g. a fractional year).
    Number,
    /// chrono `NaiveDateTime` with the given format string; the parsed value
    /// becomes epoch seconds (UTC).
    DateTime { format: String },
}

impl XParse {
    fn parse(&self, cell: &str) -> Option<f64> {
        match self {
            XParse::Number => cell.parse::<f64>().ok(),
            XParse::DateTime { format } => NaiveDateTime::parse_from_str(cell, format)
                .ok()
                .map(|dt| dt.and_utc().timestamp() as f64),
        }
    }
}

/// Fixed, documented column layout of an input CSV file.
#[derive(Debug, Clone)]
pub struct CsvLayout {
    /// Number of leading lines to drop before anything else (file preamble).
    pub skip_rows: usize,
    /// Whether one header line follows the skipped preamble.
    pub has_header: bool,
    pub delimiter: char,
    /// Zero-based index of the x cell.
    pub x_column: usize,
    pub x_parse: XParse,
    /// (zero-based cell index, column name) pairs to load.
    pub value_columns: Vec<(usize, String)>,
    /// Cell contents treated as missing (e.g. "-99.99").
    pub na_markers: Vec<String>,
}

impl Default for CsvLayout {
    fn default() -> Self {
        Self {
            skip_rows: 0,
            has_header: true,
            delimiter: ',',
            x_column: 0,
            x_parse: XParse::Number,
            value_columns: Vec::new(),
            na_markers: Vec::new(),
        }
    }
}
