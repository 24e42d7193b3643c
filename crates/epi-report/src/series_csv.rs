use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use epi_model::MonthlySeries;

/// Write a monthly series as `month,value` rows.
///
/// The month is rendered as its month-start date so plotting tools can
/// treat the column as a continuous time axis.
pub fn write_series_csv(output_dir: &Path, stem: &str, series: &MonthlySeries) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create {}", output_dir.display()))?;
    let path = output_dir.join(format!("{stem}.csv"));
    let mut writer =
        csv::Writer::from_path(&path).with_context(|| format!("write {}", path.display()))?;
    writer.write_record(["month", "value"])?;
    for point in &series.points {
        writer.write_record([
            point.month.first_day().to_string(),
            point.value.to_string(),
        ])?;
    }
    writer.flush()?;
    tracing::info!("wrote series to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use epi_model::SeriesPoint;

    #[test]
    fn writes_month_start_dates_and_values() {
        let dir = tempfile::tempdir().unwrap();
        let series = MonthlySeries {
            points: vec![
                SeriesPoint {
                    month: "2018-01".parse().unwrap(),
                    value: 244.0,
                },
                SeriesPoint {
                    month: "2018-02".parse().unwrap(),
                    value: 0.25,
                },
            ],
        };

        let path = write_series_csv(dir.path(), "incidence", &series).unwrap();
        let contents = std::fs::read_to_string(path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("month,value"));
        assert_eq!(lines.next(), Some("2018-01-01,244"));
        assert_eq!(lines.next(), Some("2018-02-01,0.25"));
    }
}
