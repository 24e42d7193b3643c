use std::ops::Range;

use epi_model::{BaselineStat, MonthlySeries, Result, TrendError};

/// Normal-approximation multiplier for a 95% interval half-width.
const CI95_Z: f64 = 1.96;

/// Baseline mean over `window`, spread over the whole series.
///
/// The mean is taken over the half-open index window (the reference period,
/// typically the first 24 rows). The standard error uses the sample
/// standard deviation of the entire series divided by sqrt(len): the window
/// fixes the reference level, the spread reflects all observed variability.
pub fn compute(series: &MonthlySeries, window: Range<usize>) -> Result<BaselineStat> {
    let len = series.len();
    if len < 2 {
        return Err(TrendError::InsufficientData { len, required: 2 });
    }
    if window.is_empty() || window.end > len {
        return Err(TrendError::InsufficientData {
            len,
            required: window.end,
        });
    }

    let values: Vec<f64> = series.values().collect();
    let window_values = &values[window];
    let mean = window_values.iter().sum::<f64>() / window_values.len() as f64;

    let n = len as f64;
    let full_mean = values.iter().sum::<f64>() / n;
    let variance = values
        .iter()
        .map(|value| (value - full_mean).powi(2))
        .sum::<f64>()
        / (n - 1.0);
    let standard_error = variance.sqrt() / n.sqrt();

    Ok(BaselineStat {
        mean,
        standard_error,
        ci95: CI95_Z * standard_error,
    })
}
