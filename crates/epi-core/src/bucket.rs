use std::collections::{BTreeMap, BTreeSet};

use epi_model::{Event, FirstEventRecord, MonthKey, MonthlySeries, PersonId, SeriesPoint};

/// Count first-event records per calendar month.
///
/// Input carries at most one row per person, so the group size is already
/// the unique-person count.
pub fn count_first_events(records: &[FirstEventRecord]) -> MonthlySeries {
    let mut counts: BTreeMap<MonthKey, u64> = BTreeMap::new();
    for record in records {
        *counts.entry(MonthKey::from_date(record.date)).or_insert(0) += 1;
    }
    series_from_counts(counts)
}

/// Count distinct persons per calendar month from raw visit-style events.
///
/// A person seen several times within a month counts once; raw row counts
/// would inflate the denominator.
pub fn count_unique_visitors(events: &[Event]) -> MonthlySeries {
    let mut groups: BTreeMap<MonthKey, BTreeSet<&PersonId>> = BTreeMap::new();
    for event in events {
        groups
            .entry(MonthKey::from_date(event.date))
            .or_default()
            .insert(&event.person);
    }
    let counts = groups
        .into_iter()
        .map(|(month, persons)| (month, persons.len() as u64))
        .collect();
    series_from_counts(counts)
}

// Months with no qualifying events are simply absent; the series is
// gap-preserving, never zero-filled.
fn series_from_counts(counts: BTreeMap<MonthKey, u64>) -> MonthlySeries {
    MonthlySeries {
        points: counts
            .into_iter()
            .map(|(month, count)| SeriesPoint {
                month,
                value: count as f64,
            })
            .collect(),
    }
}
