//! Baseline statistics: window mean, full-series standard error, and the
//! insufficient-data guards.

use epi_core::baseline::compute;
use epi_model::{MonthKey, MonthlySeries, SeriesPoint, TrendError};

const EPSILON: f64 = 1e-12;

fn series_of(values: &[f64]) -> MonthlySeries {
    // consecutive months starting January 2018
    let points = values
        .iter()
        .enumerate()
        .map(|(idx, value)| SeriesPoint {
            month: MonthKey::new(2018 + idx as i32 / 12, idx as u32 % 12 + 1).unwrap(),
            value: *value,
        })
        .collect();
    MonthlySeries { points }
}

#[test]
fn mean_uses_the_window_only() {
    // wildly different tail values must not move the baseline mean
    let mut values = vec![10.0; 24];
    values.extend([1000.0; 6]);

    let stat = compute(&series_of(&values), 0..24).unwrap();
    assert!((stat.mean - 10.0).abs() < EPSILON);
}

#[test]
fn spread_uses_the_full_series() {
    let mut values = vec![10.0; 24];
    values.extend([1000.0; 6]);
    let flat = compute(&series_of(&[10.0; 30]), 0..24).unwrap();
    let spiked = compute(&series_of(&values), 0..24).unwrap();

    assert!((flat.standard_error).abs() < EPSILON);
    assert!(spiked.standard_error > 0.0);
}

#[test]
fn ci_formula_matches_hand_computation() {
    let values = [1.0, 2.0, 3.0, 4.0];
    let stat = compute(&series_of(&values), 0..2).unwrap();

    // window mean over [1, 2]
    assert!((stat.mean - 1.5).abs() < EPSILON);
    // sample variance of the full series around mean 2.5 is 5/3
    let expected_se = (5.0f64 / 3.0).sqrt() / 4.0f64.sqrt();
    assert!((stat.standard_error - expected_se).abs() < EPSILON);
    assert!((stat.ci95 - 1.96 * expected_se).abs() < EPSILON);
}

#[test]
fn rejects_series_shorter_than_two() {
    let err = compute(&series_of(&[5.0]), 0..1).unwrap_err();
    assert!(matches!(
        err,
        TrendError::InsufficientData { len: 1, required: 2 }
    ));
}

#[test]
fn rejects_window_beyond_series_bounds() {
    let err = compute(&series_of(&[1.0, 2.0, 3.0]), 0..5).unwrap_err();
    assert!(matches!(
        err,
        TrendError::InsufficientData { len: 3, required: 5 }
    ));
}

#[test]
fn rejects_empty_window() {
    let err = compute(&series_of(&[1.0, 2.0, 3.0]), 2..2).unwrap_err();
    assert!(matches!(err, TrendError::InsufficientData { .. }));
}
