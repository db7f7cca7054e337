//! Series transforms: the numeric kernels behind the derivation function.
//!
//! This module defines serde-serializable descriptions of the supported
//! transforms and the pure functions that compute an output series from a
//! dataset column. Every kernel omits points it cannot compute (NaN inputs,
//! underfilled windows) instead of raising an error.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::controls::{ControlId, ControlState};
use crate::dataset::Dataset;

/// A numeric parameter of a transform: a fixed value or a slider binding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Param {
    Fixed(f64),
    Control(ControlId),
}

impl Param {
    /// Resolve against the current control state. A binding to a control that
    /// does not hold a scalar resolves to `None` (the series is then omitted).
    pub fn resolve(&self, state: &ControlState) -> Option<f64> {
        match self {
            Param::Fixed(v) => Some(*v),
            Param::Control(id) => state.scalar(id),
        }
    }
}

/// One term of a weighted sum: a source column, a weight, and an optional
/// checkbox gate that removes the term entirely when off.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SumTerm {
    pub source: String,
    pub weight: Param,
    pub gate: Option<ControlId>,
}

/// Transform description. Applied to a rule's source column (except `Linear`,
/// which only uses the x grid, and `Sum`, which names its own sources).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Transform {
    /// Raw column values.
    Identity,
    /// Moving-window mean. A window position holding fewer than `min_periods`
    /// finite samples emits no point.
    RollingMean {
        window: usize,
        min_periods: usize,
        centered: bool,
    },
    /// Trailing rolling mean resampled per UTC calendar day taking the
    /// maximum; the output point sits at midnight of its day.
    DailyMaxOfRolling { window: usize, min_periods: usize },
    /// `y = slope * (x - min(x)) + intercept` over the dataset's x grid.
    Linear { slope: Param, intercept: Param },
    /// Column multiplied by a factor.
    Scale { factor: Param },
    /// Weighted sum of several columns; terms gated off contribute nothing.
    Sum { terms: Vec<SumTerm> },
}

impl Transform {
    /// Compute the output series for this transform.
    ///
    /// `source` is the rule's source column name where one is required.
    /// Returns `None` when the series cannot be computed at all (missing
    /// column, unresolved parameter); individual bad points are just omitted.
    pub fn apply(
        &self,
        dataset: &Dataset,
        source: Option<&str>,
        state: &ControlState,
    ) -> Option<Vec<[f64; 2]>> {
        let xs = dataset.xs();
        match self {
            Transform::Identity => {
                let ys = dataset.column(source?)?;
                Some(identity_points(xs, ys))
            }
            Transform::RollingMean {
                window,
                min_periods,
                centered,
            } => {
                let ys = dataset.column(source?)?;
                Some(rolling_mean(xs, ys, *window, *min_periods, *centered))
            }
            Transform::DailyMaxOfRolling {
                window,
                min_periods,
            } => {
                let ys = dataset.column(source?)?;
                Some(daily_max_of_rolling(xs, ys, *window, *min_periods))
            }
            Transform::Linear { slope, intercept } => {
                let slope = slope.resolve(state)?;
                let intercept = intercept.resolve(state)?;
                Some(linear_model(xs, slope, intercept))
            }
            Transform::Scale { factor } => {
                let ys = dataset.column(source?)?;
                let factor = factor.resolve(state)?;
                Some(scale_points(xs, ys, factor))
            }
            Transform::Sum { terms } => weighted_sum(dataset, terms, state),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Kernels
// ─────────────────────────────────────────────────────────────────────────────

/// Raw (x, y) pairs, omitting positions where either side is not finite.
pub fn identity_points(xs: &[f64], ys: &[f64]) -> Vec<[f64; 2]> {
    xs.iter()
        .zip(ys.iter())
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .map(|(&x, &y)| [x, y])
        .collect()
}

/// Moving-window mean over `ys`.
///
/// Trailing windows cover `[i + 1 - window, i]`; centered windows cover
/// `[i - window/2, i + (window-1)/2]` (label at the window center). Window
/// positions with fewer than `min_periods` finite samples emit no point.
pub fn rolling_mean(
    xs: &[f64],
    ys: &[f64],
    window: usize,
    min_periods: usize,
    centered: bool,
) -> Vec<[f64; 2]> {
    let n = xs.len().min(ys.len());
    if window == 0 {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        if !xs[i].is_finite() {
            continue;
        }
        let (lo, hi) = if centered {
            let half = window / 2;
            (i.saturating_sub(half), (i + (window - 1) / 2).min(n - 1))
        } else {
            (i.saturating_sub(window - 1), i)
        };
        let mut sum = 0.0;
        let mut count = 0usize;
        for &y in &ys[lo..=hi] {
            if y.is_finite() {
                sum += y;
                count += 1;
            }
        }
        if count >= min_periods.max(1) {
            out.push([xs[i], sum / count as f64]);
        }
    }
    out
}

/// Trailing rolling mean resampled per UTC calendar day, taking the maximum.
///
/// x values are epoch seconds; each output point is stamped at midnight UTC
/// of its day. Days without a single valid window emit nothing.
pub fn daily_max_of_rolling(
    xs: &[f64],
    ys: &[f64],
    window: usize,
    min_periods: usize,
) -> Vec<[f64; 2]> {
    let means = rolling_mean(xs, ys, window, min_periods, false);
    let mut per_day: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for [x, y] in means {
        let day = match DateTime::from_timestamp(x as i64, 0) {
            Some(dt) => dt.date_naive(),
            None => continue,
        };
        per_day
            .entry(day)
            .and_modify(|m| *m = m.max(y))
            .or_insert(y);
    }
    per_day
        .into_iter()
        .filter_map(|(day, y)| {
            let midnight = day.and_hms_opt(0, 0, 0)?.and_utc().timestamp() as f64;
            Some([midnight, y])
        })
        .collect()
}

/// `y = slope * (x - min(x)) + intercept` at every finite x.
pub fn linear_model(xs: &[f64], slope: f64, intercept: f64) -> Vec<[f64; 2]> {
    let x_min = xs
        .iter()
        .copied()
        .filter(|x| x.is_finite())
        .fold(f64::INFINITY, f64::min);
    if !x_min.is_finite() {
        return Vec::new();
    }
    xs.iter()
        .filter(|x| x.is_finite())
        .map(|&x| [x, slope * (x - x_min) + intercept])
        .collect()
}

/// Column multiplied point-wise by a factor.
pub fn scale_points(xs: &[f64], ys: &[f64], factor: f64) -> Vec<[f64; 2]> {
    identity_points(xs, ys)
        .into_iter()
        .map(|[x, y]| [x, y * factor])
        .collect()
}

fn weighted_sum(
    dataset: &Dataset,
    terms: &[SumTerm],
    state: &ControlState,
) -> Option<Vec<[f64; 2]>> {
    // Resolve included terms up front; a gated-off term contributes nothing.
    let mut included: Vec<(&[f64], f64)> = Vec::new();
    for term in terms {
        if let Some(gate) = &term.gate {
            if !state.flag(gate) {
                continue;
            }
        }
        let col = dataset.column(&term.source)?;
        let weight = term.weight.resolve(state)?;
        included.push((col, weight));
    }

    let xs = dataset.xs();
    let mut out = Vec::with_capacity(xs.len());
    'rows: for (i, &x) in xs.iter().enumerate() {
        if !x.is_finite() {
            continue;
        }
        let mut acc = 0.0;
        for (col, weight) in &included {
            let y = col.get(i).copied().unwrap_or(f64::NAN);
            if !y.is_finite() {
                continue 'rows; // any included term missing → omit the point
            }
            acc += weight * y;
        }
        out.push([x, acc]);
    }
    Some(out)
}

/// Deterministic unit noise in [-0.5, 0.5), xorshift64*-generated.
///
/// The plot specification must stay a pure function of (dataset, control
/// state), so noise is seeded rather than drawn from an OS source.
pub fn unit_noise(seed: u64, n: usize) -> Vec<f64> {
    let mut s = if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed };
    (0..n)
        .map(|_| {
            s ^= s >> 12;
            s ^= s << 25;
            s ^= s >> 27;
            let r = s.wrapping_mul(0x2545_F491_4F6C_DD1D);
            // top 53 bits → [0, 1), then center on zero
            (r >> 11) as f64 / (1u64 << 53) as f64 - 0.5
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::{ControlDef, ControlState};

    #[test]
    fn identity_skips_nan() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        let ys = [1.0, f64::NAN, 3.0, 4.0];
        let pts = identity_points(&xs, &ys);
        assert_eq!(pts, vec![[0.0, 1.0], [2.0, 3.0], [3.0, 4.0]]);
    }

    #[test]
    fn trailing_rolling_mean_basic() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        let ys = [2.0, 4.0, 6.0, 8.0];
        let pts = rolling_mean(&xs, &ys, 2, 1, false);
        assert_eq!(pts, vec![[0.0, 2.0], [1.0, 3.0], [2.0, 5.0], [3.0, 7.0]]);
    }

    #[test]
    fn centered_rolling_mean_smooths_outlier() {
        // single outlier in a flat series; no smoothed point may equal it
        let xs: Vec<f64> = (0..9).map(|i| i as f64).collect();
        let mut ys = vec![1.0; 9];
        ys[4] = 100.0;
        let pts = rolling_mean(&xs, &ys, 3, 1, true);
        assert_eq!(pts.len(), 9);
        for [_, y] in &pts {
            assert!(
                (*y - 100.0).abs() > 1e-9,
                "smoothed series must not reproduce the raw outlier"
            );
        }
    }

    #[test]
    fn min_periods_suppresses_sparse_windows() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        let ys = [f64::NAN, f64::NAN, f64::NAN, 4.0];
        let pts = rolling_mean(&xs, &ys, 3, 2, false);
        assert!(pts.is_empty(), "no window holds two finite samples");
    }

    #[test]
    fn daily_max_stamps_midnight() {
        // two UTC days of 4 samples each, 6h apart
        let day0 = 1_483_228_800.0; // 2017-01-01T00:00:00Z
        let xs: Vec<f64> = (0..8).map(|i| day0 + i as f64 * 21_600.0).collect();
        let ys = [1.0, 3.0, 2.0, 1.0, 5.0, 4.0, 9.0, 2.0];
        let pts = daily_max_of_rolling(&xs, &ys, 1, 1);
        assert_eq!(pts.len(), 2);
        assert_eq!(pts[0], [day0, 3.0]);
        assert_eq!(pts[1], [day0 + 86_400.0, 9.0]);
    }

    #[test]
    fn linear_model_anchors_at_x_min() {
        let xs = [1958.0, 1959.0, 1960.0];
        let pts = linear_model(&xs, 2.0, 312.0);
        assert_eq!(pts, vec![[1958.0, 312.0], [1959.0, 314.0], [1960.0, 316.0]]);
    }

    #[test]
    fn unit_noise_is_deterministic_and_bounded() {
        let a = unit_noise(42, 256);
        let b = unit_noise(42, 256);
        assert_eq!(a, b);
        assert!(a.iter().all(|v| (-0.5..0.5).contains(v)));
        assert!(a.iter().any(|v| v.abs() > 1e-6), "noise must not be flat");
    }

    #[test]
    fn scale_binds_to_a_slider() {
        let ds = Dataset::new(vec![0.0, 1.0, 2.0]).with_column("n", vec![1.0, f64::NAN, -2.0]);
        let defs = [ControlDef::slider("level", "Level", 0.0, 5.0, 0.1, 3.0)];
        let state = ControlState::from_defs(&defs);

        let t = Transform::Scale {
            factor: Param::Control("level".into()),
        };
        let pts = t.apply(&ds, Some("n"), &state).unwrap();
        assert_eq!(pts, vec![[0.0, 3.0], [2.0, -6.0]]);
    }

    #[test]
    fn sum_gates_terms_and_omits_nan_rows() {
        let ds = Dataset::new(vec![0.0, 1.0, 2.0])
            .with_column("a", vec![1.0, 2.0, 3.0])
            .with_column("b", vec![10.0, f64::NAN, 30.0]);
        let defs = [ControlDef::checkbox("show_b", "B", true)];
        let mut state = ControlState::from_defs(&defs);

        let t = Transform::Sum {
            terms: vec![
                SumTerm {
                    source: "a".into(),
                    weight: Param::Fixed(1.0),
                    gate: None,
                },
                SumTerm {
                    source: "b".into(),
                    weight: Param::Fixed(0.5),
                    gate: Some("show_b".into()),
                },
            ],
        };
        let pts = t.apply(&ds, None, &state).unwrap();
        // row 1 omitted: included term "b" is NaN there
        assert_eq!(pts, vec![[0.0, 6.0], [2.0, 18.0]]);

        state.apply(&defs[0], crate::controls::ControlValue::Flag(false));
        let pts = t.apply(&ds, None, &state).unwrap();
        assert_eq!(pts, vec![[0.0, 1.0], [1.0, 2.0], [2.0, 3.0]]);
    }
}
