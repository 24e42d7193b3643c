#![deny(unsafe_code)]

use chrono::NaiveDate;

use crate::PersonId;

/// One clinical event row: a person seen on a calendar date.
///
/// Day precision only; time of day and timezone are not modeled. Which kind
/// of event this is (diagnosis, visit) is carried by the table it came from.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Event {
    pub person: PersonId,
    pub date: NaiveDate,
}

/// A person's earliest qualifying event.
///
/// Produced by first-event reduction; at most one record per person.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FirstEventRecord {
    pub person: PersonId,
    pub date: NaiveDate,
}
