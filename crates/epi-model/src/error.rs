use thiserror::Error;

use crate::{MonthKey, PersonId};

#[derive(Debug, Error)]
pub enum TrendError {
    #[error("person id is empty")]
    EmptyPersonId,
    #[error("month {month} is out of range (expected 1-12)")]
    InvalidMonth { month: u32 },
    #[error("malformed timestamp {value:?} in {source_name} record {record}")]
    MalformedTimestamp {
        value: String,
        source_name: String,
        record: u64,
    },
    #[error("duplicate person {person} after first-event reduction")]
    DuplicateEntityInvariant { person: PersonId },
    #[error("zero denominator for month {month}; cannot derive ratio")]
    DivisionByZero { month: MonthKey },
    #[error("series has {len} points but baseline statistics need {required}")]
    InsufficientData { len: usize, required: usize },
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, TrendError>;
