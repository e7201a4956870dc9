use rootfind_core::Precision;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One secant step through `(x0, fx0)` and `(x1, fx1)`, landing at `x2`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Record {
    pub iter: usize,
    pub x0: f64,
    pub x1: f64,
    pub fx0: f64,
    pub fx1: f64,
    pub x2: f64,
    /// Absolute step size `|x2 - x1|`.
    pub error: f64,
}

impl Record {
    /// Returns the numeric fields in column order.
    #[must_use]
    pub fn values(&self) -> [f64; 6] {
        [self.x0, self.x1, self.fx0, self.fx1, self.x2, self.error]
    }

    /// Returns a copy with every numeric field rounded to `precision`.
    #[must_use]
    pub fn rounded(&self, precision: Precision) -> Self {
        Self {
            iter: self.iter,
            x0: precision.round(self.x0),
            x1: precision.round(self.x1),
            fx0: precision.round(self.fx0),
            fx1: precision.round(self.fx1),
            x2: precision.round(self.x2),
            error: precision.round(self.error),
        }
    }
}
