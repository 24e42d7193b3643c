//! CSV ingestion for the epi-trends engine.
//!
//! Turns raw clinical extracts into typed event tables. This is the only
//! layer that touches files; everything downstream works on in-memory
//! values. Date parsing is day-first by contract (see [`csv_events`]).

pub mod csv_events;

pub use csv_events::{EventColumns, read_events, read_events_concat};
