//! Time-series aggregation and baseline-comparison engine.
//!
//! The analytic core of epi-trends: first-event reduction, calendar-month
//! bucketing, series joining, ratio derivation, and baseline statistics.
//! Everything here is a synchronous pure function over typed inputs from
//! `epi-model`; ingestion and presentation live in sibling crates.
//!
//! # Stage order
//!
//! 1. [`first_event::reduce`] - earliest qualifying event per person
//! 2. [`bucket`] - counts (or unique-person counts) per calendar month
//! 3. [`join::inner_join`] / [`ratio::derive`] - ratio path only
//! 4. [`truncate::drop_incomplete_trailing_period`]
//! 5. [`baseline::compute`]
//!
//! [`pipeline`] wires these together for the incidence and
//! relative-prevalence runs.

pub mod baseline;
pub mod bucket;
pub mod first_event;
pub mod join;
pub mod pipeline;
pub mod ratio;
pub mod truncate;

pub use pipeline::{TrendConfig, TrendReport, incidence, relative_prevalence};
