//! Data model for the epi-trends engine.
//!
//! Value types shared by every stage of the pipeline: person identifiers,
//! clinical events, calendar-month keys, monthly series, and baseline
//! statistics, plus the error taxonomy. All types are immutable values;
//! stages construct new ones rather than mutating shared state.

pub mod error;
pub mod event;
pub mod ids;
pub mod month;
pub mod series;
pub mod stats;

pub use error::{Result, TrendError};
pub use event::{Event, FirstEventRecord};
pub use ids::PersonId;
pub use month::MonthKey;
pub use series::{JoinedPoint, JoinedSeries, MonthlySeries, SeriesPoint};
pub use stats::BaselineStat;
