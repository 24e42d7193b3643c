use std::cmp::Ordering;

use epi_model::{JoinedPoint, JoinedSeries, MonthlySeries};

/// Inner join of two monthly series on the month key.
///
/// Months present in only one input are dropped entirely, with no
/// forward-fill or zero-fill: a month lacking either observation cannot
/// produce a meaningful ratio.
pub fn inner_join(left: &MonthlySeries, right: &MonthlySeries) -> JoinedSeries {
    let mut points = Vec::new();
    let (mut i, mut j) = (0usize, 0usize);
    while i < left.points.len() && j < right.points.len() {
        let a = &left.points[i];
        let b = &right.points[j];
        match a.month.cmp(&b.month) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                points.push(JoinedPoint {
                    month: a.month,
                    left: a.value,
                    right: b.value,
                });
                i += 1;
                j += 1;
            }
        }
    }

    let joined = JoinedSeries { points };
    let dropped = left.len() + right.len() - 2 * joined.len();
    if dropped > 0 {
        tracing::debug!("inner join dropped {} unmatched months", dropped);
    }
    joined
}
