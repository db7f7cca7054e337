//! Derivation function properties: gating, determinism, parameter binding.

use learnplot::dashboards::{co2, ozone};
use learnplot::{derive_plot, ControlValue, Dataset, DrawMode};

/// 24 hourly samples starting 2017-01-01T00:00:00Z, both station columns.
fn small_ozone_dataset() -> Dataset {
    let day0 = 1_483_228_800.0;
    let xs: Vec<f64> = (0..24).map(|i| day0 + i as f64 * 3600.0).collect();
    let yvr: Vec<f64> = (0..24).map(|i| 10.0 + (i % 7) as f64).collect();
    let abb: Vec<f64> = (0..24).map(|i| 12.0 + (i % 5) as f64).collect();
    Dataset::new(xs)
        .with_column(ozone::YVR_COLUMN, yvr)
        .with_column(ozone::ABB_COLUMN, abb)
}

#[test]
fn series_count_matches_active_toggles() {
    let dashboard = ozone::dashboard();
    let dataset = small_ozone_dataset();
    let gates = [
        ozone::YVR_RAW,
        ozone::ABB_RAW,
        ozone::YVR_SMOOTHED,
        ozone::ABB_SMOOTHED,
        ozone::YVR_MDA8,
        ozone::ABB_MDA8,
    ];

    // every combination of the six toggles
    for mask in 0u32..64 {
        let mut state = dashboard.initial_state();
        for (bit, gate) in gates.iter().enumerate() {
            let def = dashboard.control(&(*gate).into()).unwrap();
            state.apply(def, ControlValue::Flag(mask & (1 << bit) != 0));
        }
        let spec = derive_plot(&dashboard, &dataset, &state);
        assert_eq!(
            spec.series.len(),
            mask.count_ones() as usize,
            "mask {:#08b}: series count must equal the number of active toggles",
            mask
        );
    }
}

#[test]
fn derivation_is_idempotent() {
    let dashboard = ozone::dashboard();
    let dataset = small_ozone_dataset();
    let mut state = dashboard.initial_state();
    for gate in [ozone::YVR_SMOOTHED, ozone::ABB_MDA8] {
        let def = dashboard.control(&gate.into()).unwrap();
        state.apply(def, ControlValue::Flag(true));
    }

    let a = derive_plot(&dashboard, &dataset, &state);
    let b = derive_plot(&dashboard, &dataset, &state);
    assert_eq!(a, b, "same inputs must yield the identical plot spec");
}

#[test]
fn linear_fit_matches_slope_and_intercept_defaults() {
    // Defaults: slope = 2, intercept = 312. Over the first five rows of a
    // known fixture the fit must equal 2*(x - min(x)) + 312 at each x.
    let xs = vec![1958.2027, 1958.2877, 1958.3699, 1958.4548, 1958.5370];
    let co2_vals = vec![315.71, 317.45, 317.50, 317.10, 315.86];
    let dataset = Dataset::new(xs.clone())
        .with_column(co2::RAW_COLUMN, co2_vals.clone())
        .with_column(co2::ADJUSTED_COLUMN, co2_vals);

    let dashboard = co2::dashboard();
    let spec = derive_plot(&dashboard, &dataset, &dashboard.initial_state());

    let fit = spec.series("linear fit").expect("fit series must exist");
    assert_eq!(fit.points.len(), 5);
    for [x, y] in &fit.points {
        let expected = 2.0 * (x - 1958.2027) + 312.0;
        assert!(
            (y - expected).abs() < 1e-9,
            "fit at x={} was {}, expected {}",
            x,
            y,
            expected
        );
    }
}

#[test]
fn slider_events_rebind_the_fit() {
    let xs = vec![0.0, 1.0, 2.0, 3.0];
    let dataset = Dataset::new(xs)
        .with_column(co2::RAW_COLUMN, vec![1.0; 4])
        .with_column(co2::ADJUSTED_COLUMN, vec![1.0; 4]);
    let dashboard = co2::dashboard();
    let mut state = dashboard.initial_state();

    let slope_def = dashboard.control(&co2::SLOPE.into()).unwrap();
    let int_def = dashboard.control(&co2::INTERCEPT.into()).unwrap();
    state.apply(slope_def, ControlValue::Scalar(1.0));
    state.apply(int_def, ControlValue::Scalar(315.0));

    let spec = derive_plot(&dashboard, &dataset, &state);
    let fit = spec.series("linear fit").unwrap();
    assert_eq!(fit.points[3], [3.0, 318.0]);
}

#[test]
fn rolling_average_hides_the_raw_outlier() {
    let dashboard = ozone::dashboard();
    let mut dataset_vals: Vec<f64> = vec![10.0; 24];
    dataset_vals[12] = 500.0; // single outlier
    let day0 = 1_483_228_800.0;
    let xs: Vec<f64> = (0..24).map(|i| day0 + i as f64 * 3600.0).collect();
    let dataset = Dataset::new(xs)
        .with_column(ozone::YVR_COLUMN, dataset_vals)
        .with_column(ozone::ABB_COLUMN, vec![10.0; 24]);

    let mut state = dashboard.initial_state();
    let raw_def = dashboard.control(&ozone::YVR_RAW.into()).unwrap();
    let smooth_def = dashboard.control(&ozone::YVR_SMOOTHED.into()).unwrap();
    state.apply(raw_def, ControlValue::Flag(false));
    state.apply(smooth_def, ControlValue::Flag(true));

    let spec = derive_plot(&dashboard, &dataset, &state);
    let smoothed = spec.series("YVR 7-day average").unwrap();
    assert!(!smoothed.points.is_empty());
    for [_, y] in &smoothed.points {
        assert!(
            (*y - 500.0).abs() > 1e-9,
            "smoothed series must not contain the raw outlier value"
        );
    }
}

#[test]
fn choice_gate_selects_exactly_one_signal_series() {
    let dataset = Dataset::new(vec![0.0, 1.0])
        .with_column(co2::RAW_COLUMN, vec![1.0, 2.0])
        .with_column(co2::ADJUSTED_COLUMN, vec![3.0, 4.0]);
    let dashboard = co2::dashboard();
    let mut state = dashboard.initial_state();

    let spec = derive_plot(&dashboard, &dataset, &state);
    let signals: Vec<_> = spec.series.iter().filter(|s| s.name == "CO2").collect();
    assert_eq!(signals.len(), 1, "only one of raw/adjusted may be visible");
    assert_eq!(signals[0].points[0], [0.0, 3.0]); // adjusted by default

    let def = dashboard.control(&co2::SIGNAL.into()).unwrap();
    state.apply(def, ControlValue::Choice("raw".into()));
    let spec = derive_plot(&dashboard, &dataset, &state);
    let signals: Vec<_> = spec.series.iter().filter(|s| s.name == "CO2").collect();
    assert_eq!(signals.len(), 1);
    assert_eq!(signals[0].points[0], [0.0, 1.0]);
}

#[test]
fn dropdown_overrides_draw_mode_of_bound_series_only() {
    let dashboard = ozone::dashboard();
    let dataset = small_ozone_dataset();
    let mut state = dashboard.initial_state();

    let abb_def = dashboard.control(&ozone::ABB_RAW.into()).unwrap();
    let mode_def = dashboard.control(&ozone::LINETYPE.into()).unwrap();
    state.apply(abb_def, ControlValue::Flag(true));
    state.apply(mode_def, ControlValue::Choice("markers".into()));

    let spec = derive_plot(&dashboard, &dataset, &state);
    assert_eq!(spec.series("Abb raw").unwrap().look.mode, DrawMode::Markers);
    // the YVR series is not bound to the dropdown
    assert_eq!(spec.series("YVR raw").unwrap().look.mode, DrawMode::Lines);
}

#[test]
fn fixed_axis_ranges_pass_through() {
    let dataset = Dataset::new(vec![0.0])
        .with_column(co2::RAW_COLUMN, vec![1.0])
        .with_column(co2::ADJUSTED_COLUMN, vec![1.0]);
    let dashboard = co2::dashboard();
    let spec = derive_plot(&dashboard, &dataset, &dashboard.initial_state());
    assert_eq!(spec.x_range, Some([1958.0, 1963.0]));
    assert_eq!(spec.y_range, Some([310.0, 325.0]));
}
