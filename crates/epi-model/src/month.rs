#![deny(unsafe_code)]

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::TrendError;

/// A calendar-month bucket, the time axis for every series.
///
/// Ordering is (year, month). Two dates map to the same key iff their year
/// and month match; the day component is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Result<Self, TrendError> {
        if !(1..=12).contains(&month) {
            return Err(TrendError::InvalidMonth { month });
        }
        Ok(Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The month-start date, for presentation on a continuous time axis.
    pub fn first_day(&self) -> NaiveDate {
        // month is range-checked on construction
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("month key holds a valid calendar month")
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = TrendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = s.split_once('-').and_then(|(year, month)| {
            Some((year.parse::<i32>().ok()?, month.parse::<u32>().ok()?))
        });
        match parsed {
            Some((year, month)) => Self::new(year, month),
            None => Err(TrendError::Message(format!("invalid month key {s:?}"))),
        }
    }
}

impl serde::Serialize for MonthKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for MonthKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s: String = serde::Deserialize::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
