#![deny(unsafe_code)]

/// Baseline comparison statistics for a monthly series.
///
/// `mean` is computed over the designated baseline window; `standard_error`
/// and `ci95` are computed over the full series. The asymmetry is
/// deliberate: the baseline fixes the center, the spread is estimated from
/// all observed variability.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BaselineStat {
    pub mean: f64,
    pub standard_error: f64,
    pub ci95: f64,
}

impl BaselineStat {
    /// Lower and upper bounds of the baseline band (mean ± ci95).
    pub fn band(&self) -> (f64, f64) {
        (self.mean - self.ci95, self.mean + self.ci95)
    }
}
