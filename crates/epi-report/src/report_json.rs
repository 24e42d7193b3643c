use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use epi_model::{BaselineStat, MonthlySeries};

#[derive(serde::Serialize)]
struct ReportDocument<'a> {
    series: &'a MonthlySeries,
    baseline: Option<&'a BaselineStat>,
}

/// Write the series and its baseline statistics as one JSON document.
///
/// `baseline` may be absent (series too short for statistics); the field is
/// then `null` rather than omitted, so consumers can distinguish "not
/// computed" from a truncated file.
pub fn write_report_json(
    output_dir: &Path,
    stem: &str,
    series: &MonthlySeries,
    baseline: Option<&BaselineStat>,
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create {}", output_dir.display()))?;
    let path = output_dir.join(format!("{stem}.json"));
    let file =
        std::fs::File::create(&path).with_context(|| format!("write {}", path.display()))?;
    serde_json::to_writer_pretty(file, &ReportDocument { series, baseline })?;
    tracing::info!("wrote report to {}", path.display());
    Ok(path)
}
