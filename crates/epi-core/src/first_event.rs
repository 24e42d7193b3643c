use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use epi_model::{Event, FirstEventRecord, PersonId, Result, TrendError};

/// Reduce each person's events to their earliest occurrence, keeping only
/// persons whose earliest event falls on or after the cutoff.
///
/// The cutoff filter runs after the per-person minimum is taken, never
/// before. A person whose true earliest event predates the cutoff is
/// excluded outright; promoting one of their later events to "first" would
/// attribute them to the wrong month.
pub fn reduce(events: &[Event], cutoff: NaiveDate) -> Result<Vec<FirstEventRecord>> {
    let mut earliest: BTreeMap<&PersonId, NaiveDate> = BTreeMap::new();
    for event in events {
        earliest
            .entry(&event.person)
            .and_modify(|date| {
                if event.date < *date {
                    *date = event.date;
                }
            })
            .or_insert(event.date);
    }
    let grouped = earliest.len();

    let mut seen: BTreeSet<&PersonId> = BTreeSet::new();
    let mut records = Vec::new();
    for (person, date) in earliest {
        if date < cutoff {
            continue;
        }
        // one record per person is a hard postcondition
        if !seen.insert(person) {
            return Err(TrendError::DuplicateEntityInvariant {
                person: person.clone(),
            });
        }
        records.push(FirstEventRecord {
            person: person.clone(),
            date,
        });
    }

    tracing::debug!(
        "reduced {} events to {} persons, {} first events on or after {}",
        events.len(),
        grouped,
        records.len(),
        cutoff
    );
    Ok(records)
}
