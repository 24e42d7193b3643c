use epi_model::{JoinedSeries, MonthlySeries, Result, SeriesPoint, TrendError};

/// Elementwise left/right ratio over a joined series.
///
/// A zero denominator signals a data-quality problem upstream and aborts
/// the computation; it is never coerced to zero or infinity.
pub fn derive(joined: &JoinedSeries) -> Result<MonthlySeries> {
    let mut points = Vec::with_capacity(joined.len());
    for row in &joined.points {
        if row.right == 0.0 {
            return Err(TrendError::DivisionByZero { month: row.month });
        }
        points.push(SeriesPoint {
            month: row.month,
            value: row.left / row.right,
        });
    }
    Ok(MonthlySeries { points })
}
