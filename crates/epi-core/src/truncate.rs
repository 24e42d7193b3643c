use epi_model::MonthlySeries;

/// Drop the most recent month from a series.
///
/// The trailing month is conventionally incomplete (reporting lag), so the
/// orchestrator removes it after bucketing and before statistics. Kept as a
/// named step so its effect stays visible and testable on its own.
pub fn drop_incomplete_trailing_period(mut series: MonthlySeries) -> MonthlySeries {
    if let Some(point) = series.points.pop() {
        tracing::debug!("dropped trailing month {} as incomplete", point.month);
    }
    series
}
