#![deny(unsafe_code)]

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use epi_model::{Event, PersonId, TrendError};

/// Column names locating the person id and event date in a source table.
#[derive(Debug, Clone)]
pub struct EventColumns {
    pub person: String,
    pub date: String,
}

impl EventColumns {
    pub fn new(person: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            person: person.into(),
            date: date.into(),
        }
    }
}

/// Accepted date shapes. The input convention is day-first (`DD/MM/YYYY`);
/// ISO `YYYY-MM-DD` is also accepted. Anything else aborts the run rather
/// than silently skewing the series.
const DATE_FORMATS: [&str; 2] = ["%d/%m/%Y", "%Y-%m-%d"];

fn parse_event_date(value: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}

fn normalize_cell(raw: &str) -> &str {
    raw.trim().trim_matches('\u{feff}')
}

fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Read one source table into typed events.
///
/// Rows with an empty person id or date cell are dropped before any
/// aggregation sees them. An unparseable date fails the whole run with the
/// offending value, file, and record number.
pub fn read_events(path: &Path, columns: &EventColumns) -> Result<Vec<Event>> {
    let source = source_name(path);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("open {}", path.display()))?;
    let headers = reader.headers()?.clone();

    let locate = |name: &str| {
        headers
            .iter()
            .position(|header| normalize_cell(header) == name)
            .with_context(|| format!("column {name:?} not found in {source}"))
    };
    let person_idx = locate(&columns.person)?;
    let date_idx = locate(&columns.date)?;

    let mut events = Vec::new();
    let mut dropped = 0usize;
    for (idx, record) in reader.records().enumerate() {
        let record = record?;
        let record_number = (idx as u64) + 1;
        let person = record.get(person_idx).map(normalize_cell).unwrap_or_default();
        let date = record.get(date_idx).map(normalize_cell).unwrap_or_default();
        if person.is_empty() || date.is_empty() {
            dropped += 1;
            continue;
        }
        let date = parse_event_date(date).ok_or_else(|| TrendError::MalformedTimestamp {
            value: date.to_string(),
            source_name: source.clone(),
            record: record_number,
        })?;
        events.push(Event {
            person: PersonId::new(person)?,
            date,
        });
    }

    if dropped > 0 {
        tracing::debug!("{}: dropped {} rows missing person or date", source, dropped);
    }
    tracing::info!("{}: read {} events", source, events.len());
    Ok(events)
}

/// Read several source tables and concatenate their events.
///
/// The visit extracts arrive as separate files per care setting; order of
/// concatenation does not matter downstream.
pub fn read_events_concat(paths: &[impl AsRef<Path>], columns: &EventColumns) -> Result<Vec<Event>> {
    let mut events = Vec::new();
    for path in paths {
        events.extend(read_events(path.as_ref(), columns)?);
    }
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn columns() -> EventColumns {
        EventColumns::new("PERSON_ID", "CONDITION_START_DATE")
    }

    fn write_csv(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn reads_day_first_dates() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            dir.path(),
            "conditions.csv",
            "PERSON_ID,CONDITION_START_DATE\n1001,05/01/2018\n1002,2018-01-20\n",
        );

        let events = read_events(&path, &columns()).unwrap();
        assert_eq!(events.len(), 2);
        // 05/01/2018 is the 5th of January, not the 1st of May
        assert_eq!(
            events[0].date,
            NaiveDate::from_ymd_opt(2018, 1, 5).unwrap()
        );
        assert_eq!(
            events[1].date,
            NaiveDate::from_ymd_opt(2018, 1, 20).unwrap()
        );
    }

    #[test]
    fn drops_rows_missing_person_or_date() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            dir.path(),
            "conditions.csv",
            "PERSON_ID,CONDITION_START_DATE\n,05/01/2018\n1002,\n1003,06/01/2018\n",
        );

        let events = read_events(&path, &columns()).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].person.as_str(), "1003");
    }

    #[test]
    fn malformed_date_aborts_with_context() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            dir.path(),
            "conditions.csv",
            "PERSON_ID,CONDITION_START_DATE\n1001,05/01/2018\n1002,not-a-date\n",
        );

        let err = read_events(&path, &columns()).unwrap_err();
        let text = err.to_string();
        assert!(text.contains("not-a-date"));
        assert!(text.contains("conditions.csv"));
        assert!(text.contains("record 2"));
    }

    #[test]
    fn missing_column_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(dir.path(), "conditions.csv", "PID,DATE\n1001,05/01/2018\n");

        let err = read_events(&path, &columns()).unwrap_err();
        assert!(err.to_string().contains("PERSON_ID"));
    }

    #[test]
    fn concat_merges_all_sources() {
        let dir = tempfile::tempdir().unwrap();
        let visit_columns = EventColumns::new("PERSON_ID", "VISIT_START_DATE");
        let a = write_csv(
            dir.path(),
            "outpatient.csv",
            "PERSON_ID,VISIT_START_DATE\n1001,05/01/2018\n",
        );
        let b = write_csv(
            dir.path(),
            "telehealth.csv",
            "PERSON_ID,VISIT_START_DATE\n1002,06/01/2018\n1003,07/01/2018\n",
        );

        let events = read_events_concat(&[a, b], &visit_columns).unwrap();
        assert_eq!(events.len(), 3);
    }

    #[test]
    fn header_lookup_survives_bom_and_padding() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            dir.path(),
            "conditions.csv",
            "\u{feff}PERSON_ID, CONDITION_START_DATE \n1001,05/01/2018\n",
        );

        let events = read_events(&path, &columns()).unwrap();
        assert_eq!(events.len(), 1);
    }
}
