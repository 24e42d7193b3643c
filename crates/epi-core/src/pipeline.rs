//! Orchestration of the two trend pipelines.
//!
//! Each pipeline is a pure function over typed event tables: no I/O, no
//! shared state. Stage order matters and is fixed here rather than inside
//! the stages themselves; in particular the trailing-month truncation is an
//! explicit step between bucketing and statistics.

use chrono::NaiveDate;

use epi_model::{BaselineStat, Event, MonthlySeries, Result, TrendError};

use crate::{baseline, bucket, first_event, join, ratio, truncate};

/// Parameters shared by both pipelines.
#[derive(Debug, Clone)]
pub struct TrendConfig {
    /// Earliest admissible first-event date.
    pub cutoff: NaiveDate,
    /// Number of leading series rows forming the baseline window.
    pub baseline_months: usize,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            cutoff: default_cutoff(),
            baseline_months: 24,
        }
    }
}

fn default_cutoff() -> NaiveDate {
    NaiveDate::from_ymd_opt(2018, 1, 1).expect("valid constant date")
}

/// A produced series with its baseline comparison.
///
/// `baseline` is absent when the series is too short for statistics; the
/// series itself is still renderable without the overlay.
#[derive(Debug, Clone)]
pub struct TrendReport {
    pub series: MonthlySeries,
    pub baseline: Option<BaselineStat>,
}

/// Monthly counts of first diagnoses, from the cutoff onward.
pub fn incidence(diagnoses: &[Event], config: &TrendConfig) -> Result<TrendReport> {
    let first_events = first_event::reduce(diagnoses, config.cutoff)?;
    let series = bucket::count_first_events(&first_events);
    let series = truncate::drop_incomplete_trailing_period(series);
    finish("incidence", series, config)
}

/// Monthly first-diagnosis counts normalized by unique clinical visitors.
///
/// Visit rows before the cutoff are filtered out before bucketing, mirroring
/// the diagnosis side's study window.
pub fn relative_prevalence(
    diagnoses: &[Event],
    visits: &[Event],
    config: &TrendConfig,
) -> Result<TrendReport> {
    let first_events = first_event::reduce(diagnoses, config.cutoff)?;
    let diagnosis_series = bucket::count_first_events(&first_events);

    let in_window: Vec<Event> = visits
        .iter()
        .filter(|visit| visit.date >= config.cutoff)
        .cloned()
        .collect();
    let visitor_series = bucket::count_unique_visitors(&in_window);

    let joined = join::inner_join(&diagnosis_series, &visitor_series);
    let series = ratio::derive(&joined)?;
    let series = truncate::drop_incomplete_trailing_period(series);
    finish("relative prevalence", series, config)
}

fn finish(label: &str, series: MonthlySeries, config: &TrendConfig) -> Result<TrendReport> {
    let baseline = match baseline::compute(&series, 0..config.baseline_months) {
        Ok(stat) => Some(stat),
        Err(TrendError::InsufficientData { len, required }) => {
            tracing::warn!(
                "{}: series too short for baseline statistics ({} points, need {})",
                label,
                len,
                required
            );
            None
        }
        Err(other) => return Err(other),
    };
    tracing::info!("{}: produced {} months", label, series.len());
    Ok(TrendReport { series, baseline })
}
