//! Property tests for the reducer and bucketer invariants.

use chrono::{Duration, NaiveDate};
use epi_core::{bucket, first_event};
use epi_model::{Event, PersonId};
use proptest::prelude::*;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2017, 1, 1).unwrap()
}

fn cutoff() -> NaiveDate {
    NaiveDate::from_ymd_opt(2018, 1, 1).unwrap()
}

fn events_strategy() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec((0u32..40, 0i64..1200), 0..200).prop_map(|raw| {
        raw.into_iter()
            .map(|(person, offset)| Event {
                person: PersonId::new(format!("p{person:03}")).unwrap(),
                date: base_date() + Duration::days(offset),
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn reducer_emits_at_most_one_record_per_person(events in events_strategy()) {
        let records = first_event::reduce(&events, cutoff()).unwrap();
        let mut persons: Vec<_> = records.iter().map(|r| r.person.clone()).collect();
        persons.sort();
        persons.dedup();
        prop_assert_eq!(persons.len(), records.len());
    }

    #[test]
    fn reducer_keeps_true_minimum_or_drops_the_person(events in events_strategy()) {
        let records = first_event::reduce(&events, cutoff()).unwrap();
        for record in &records {
            let min = events
                .iter()
                .filter(|e| e.person == record.person)
                .map(|e| e.date)
                .min()
                .unwrap();
            prop_assert_eq!(record.date, min);
            prop_assert!(record.date >= cutoff());
        }
        for event in &events {
            if records.iter().all(|r| r.person != event.person) {
                let min = events
                    .iter()
                    .filter(|e| e.person == event.person)
                    .map(|e| e.date)
                    .min()
                    .unwrap();
                prop_assert!(min < cutoff());
            }
        }
    }

    #[test]
    fn bucketed_series_is_strictly_increasing(events in events_strategy()) {
        let series = bucket::count_unique_visitors(&events);
        for pair in series.points.windows(2) {
            prop_assert!(pair[0].month < pair[1].month);
        }
    }

    #[test]
    fn monthly_counts_never_exceed_distinct_persons(events in events_strategy()) {
        let series = bucket::count_unique_visitors(&events);
        let mut persons: Vec<_> = events.iter().map(|e| e.person.clone()).collect();
        persons.sort();
        persons.dedup();
        for point in &series.points {
            prop_assert!(point.value <= persons.len() as f64);
        }
    }
}
