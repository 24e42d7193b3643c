use std::path::PathBuf;

use epi_model::{BaselineStat, MonthlySeries};

/// What the series values represent, for display formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Count,
    Ratio,
}

#[derive(Debug)]
pub struct TrendOutcome {
    pub title: &'static str,
    pub value_label: &'static str,
    pub value_kind: ValueKind,
    pub series: MonthlySeries,
    pub baseline: Option<BaselineStat>,
    pub written: Vec<PathBuf>,
}
