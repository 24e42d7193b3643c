#![deny(unsafe_code)]

use crate::MonthKey;

/// One observation on the monthly time axis.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SeriesPoint {
    pub month: MonthKey,
    pub value: f64,
}

/// An ordered monthly series.
///
/// Month keys are strictly increasing. Months with no qualifying events are
/// absent, not zero-filled; consumers needing a continuous axis must fill
/// the gaps themselves.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MonthlySeries {
    pub points: Vec<SeriesPoint>,
}

impl MonthlySeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.value)
    }

    pub fn months(&self) -> impl Iterator<Item = MonthKey> + '_ {
        self.points.iter().map(|p| p.month)
    }
}

/// One row of two series aligned on the same month.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct JoinedPoint {
    pub month: MonthKey,
    pub left: f64,
    pub right: f64,
}

/// The inner join of two monthly series: exactly the months present in
/// both inputs, in increasing order.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct JoinedSeries {
    pub points: Vec<JoinedPoint>,
}

impl JoinedSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_round_trips_through_json() {
        let series = MonthlySeries {
            points: vec![
                SeriesPoint {
                    month: "2018-01".parse().unwrap(),
                    value: 244.0,
                },
                SeriesPoint {
                    month: "2018-03".parse().unwrap(),
                    value: 198.0,
                },
            ],
        };
        let json = serde_json::to_string(&series).unwrap();
        let round: MonthlySeries = serde_json::from_str(&json).unwrap();
        assert_eq!(round, series);
    }
}
