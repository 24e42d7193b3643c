//! Command implementations: ingest the extracts, run the pipeline, write
//! outputs for the presentation collaborator.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info_span;

use epi_cli::logging::redact_value;
use epi_core::{TrendConfig, incidence, relative_prevalence};
use epi_ingest::{EventColumns, read_events, read_events_concat};
use epi_model::Event;
use epi_report::{write_report_json, write_series_csv};

use crate::cli::{IncidenceArgs, PrevalenceArgs, TrendArgs};
use crate::types::{TrendOutcome, ValueKind};

pub fn run_incidence(args: &IncidenceArgs) -> Result<TrendOutcome> {
    let span = info_span!("incidence");
    let _guard = span.enter();

    let columns = EventColumns::new(&args.trend.person_column, &args.trend.date_column);
    let diagnoses = read_events(&args.conditions, &columns)?;
    trace_sample(&diagnoses);

    let report = incidence(&diagnoses, &trend_config(&args.trend))?;

    let output_dir = output_dir(&args.trend, &args.conditions);
    let written = vec![
        write_series_csv(&output_dir, "incidence", &report.series)?,
        write_report_json(
            &output_dir,
            "incidence",
            &report.series,
            report.baseline.as_ref(),
        )?,
    ];

    Ok(TrendOutcome {
        title: "Monthly first diagnoses",
        value_label: "Diagnoses",
        value_kind: ValueKind::Count,
        series: report.series,
        baseline: report.baseline,
        written,
    })
}

pub fn run_prevalence(args: &PrevalenceArgs) -> Result<TrendOutcome> {
    let span = info_span!("prevalence");
    let _guard = span.enter();

    let diagnosis_columns = EventColumns::new(&args.trend.person_column, &args.trend.date_column);
    let diagnoses = read_events(&args.conditions, &diagnosis_columns)?;
    let visit_columns = EventColumns::new(&args.trend.person_column, &args.visit_date_column);
    let visits = read_events_concat(&args.visits, &visit_columns)?;
    trace_sample(&diagnoses);

    let report = relative_prevalence(&diagnoses, &visits, &trend_config(&args.trend))?;

    let output_dir = output_dir(&args.trend, &args.conditions);
    let written = vec![
        write_series_csv(&output_dir, "prevalence", &report.series)?,
        write_report_json(
            &output_dir,
            "prevalence",
            &report.series,
            report.baseline.as_ref(),
        )?,
    ];

    Ok(TrendOutcome {
        title: "Relative prevalence of first diagnoses",
        value_label: "Prevalence",
        value_kind: ValueKind::Ratio,
        series: report.series,
        baseline: report.baseline,
        written,
    })
}

fn trace_sample(events: &[Event]) {
    if let Some(event) = events.first() {
        tracing::trace!(
            "first row: person={} date={}",
            redact_value(event.person.as_str()),
            event.date
        );
    }
}

fn trend_config(args: &TrendArgs) -> TrendConfig {
    TrendConfig {
        cutoff: args.cutoff,
        baseline_months: args.baseline_months,
    }
}

fn output_dir(args: &TrendArgs, conditions: &Path) -> PathBuf {
    args.output_dir.clone().unwrap_or_else(|| {
        conditions
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default()
            .join("output")
    })
}
