//! Percentages as fractions.

use serde::{Deserialize, Serialize};

/// A percentage stored as a fraction, so `Percent::new(50.0)` holds 0.5.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Percent(f64);

impl Percent {
    /// Convert from percent, clamping the fraction to `[0, 1]`.
    pub fn new(percent: f64) -> Self {
        Self((percent / 100.0).max(0.0).min(1.0))
    }

    /// Convert from percent without clamping.
    pub fn unclamped(percent: f64) -> Self {
        Self(percent / 100.0)
    }

    /// The fraction, e.g. 0.25 for 25%.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<Percent> for f64 {
    fn from(percent: Percent) -> Self {
        percent.0
    }
}
