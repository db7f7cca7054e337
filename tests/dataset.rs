//! CSV loading: fixed layouts, silent omission of malformed input.

use learnplot::transform::identity_points;
use learnplot::{CsvLayout, Dataset, XParse};

const SAMPLE_CSV: &str = include_str!("../data/sample.csv");

fn sample_layout() -> CsvLayout {
    CsvLayout {
        value_columns: vec![(1, "value".to_string())],
        ..CsvLayout::default()
    }
}

#[test]
fn bundled_sample_loads_with_silent_omission() {
    let ds = Dataset::from_csv_str(SAMPLE_CSV, &sample_layout());
    // 30 numeric rows; the "not a row" line is dropped entirely
    assert_eq!(ds.len(), 30);
    let values = ds.column("value").unwrap();
    // the empty cell at t=13 is missing, not an error
    assert!(values[13].is_nan());
    // and identity output omits exactly that point
    let pts = identity_points(ds.xs(), values);
    assert_eq!(pts.len(), 29);
}

#[test]
fn na_markers_become_missing_values() {
    let text = "x,v\n0,1.5\n1,-99.99\n2,2.5\n";
    let layout = CsvLayout {
        value_columns: vec![(1, "v".to_string())],
        na_markers: vec!["-99.99".to_string()],
        ..CsvLayout::default()
    };
    let ds = Dataset::from_csv_str(text, &layout);
    let v = ds.column("v").unwrap();
    assert_eq!(ds.len(), 3);
    assert!(v[1].is_nan(), "NA marker must read as missing");
    assert_eq!(v[2], 2.5);
}

#[test]
fn rows_with_bad_x_are_skipped() {
    let text = "x,v\n0,1.0\nbroken,2.0\n2,3.0\n\n3,4.0\n";
    let ds = Dataset::from_csv_str(text, &sample_layout());
    assert_eq!(ds.xs(), &[0.0, 2.0, 3.0]);
}

#[test]
fn datetime_x_parses_to_epoch_seconds() {
    let text = "date_pst,YVR_ppb,Abbotsford_ppb\n\
                2017-01-01 00:00,10.0,12.0\n\
                2017-01-01 01:00,11.0,13.0\n";
    let layout = CsvLayout {
        x_column: 0,
        x_parse: XParse::DateTime {
            format: "%Y-%m-%d %H:%M".to_string(),
        },
        value_columns: vec![(1, "YVR_ppb".to_string()), (2, "Abbotsford_ppb".to_string())],
        ..CsvLayout::default()
    };
    let ds = Dataset::from_csv_str(text, &layout);
    assert_eq!(ds.xs(), &[1_483_228_800.0, 1_483_232_400.0]);
    assert_eq!(ds.column("YVR_ppb").unwrap(), &[10.0, 11.0]);
}

#[test]
fn preamble_rows_are_skipped_before_the_header() {
    let mut text = String::new();
    for i in 0..3 {
        text.push_str(&format!("\" preamble line {} \"\n", i));
    }
    text.push_str("a,b,c,x,v\n");
    text.push_str("1, 2, 3, 1958.5, 315.2\n");
    text.push_str("1, 2, 3, 1958.6, 316.0\n");
    let layout = CsvLayout {
        skip_rows: 3,
        x_column: 3,
        value_columns: vec![(4, "v".to_string())],
        ..CsvLayout::default()
    };
    let ds = Dataset::from_csv_str(&text, &layout);
    assert_eq!(ds.xs(), &[1958.5, 1958.6]);
    assert_eq!(ds.column("v").unwrap(), &[315.2, 316.0]);
}

#[test]
fn short_rows_pad_values_with_nan() {
    let text = "x,v\n0,1.0\n1\n2,3.0\n";
    let ds = Dataset::from_csv_str(text, &sample_layout());
    let v = ds.column("v").unwrap();
    assert_eq!(ds.len(), 3);
    assert!(v[1].is_nan());
}

#[test]
fn head_truncates_all_columns() {
    let ds = Dataset::from_csv_str(SAMPLE_CSV, &sample_layout()).head(5);
    assert_eq!(ds.len(), 5);
    assert_eq!(ds.column("value").unwrap().len(), 5);
    assert_eq!(ds.x_min(), Some(0.0));
}

#[test]
fn noise_column_is_deterministic() {
    let a = Dataset::new((0..100).map(|i| i as f64).collect()).with_noise_column("n", 7);
    let b = Dataset::new((0..100).map(|i| i as f64).collect()).with_noise_column("n", 7);
    assert_eq!(a.column("n").unwrap(), b.column("n").unwrap());
}
