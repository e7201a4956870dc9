use rootfind_core::Precision;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One Newton step, `x_next = x - fx / dfx`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Record {
    /// Iteration index (0-based).
    pub iter: usize,

    /// The current iterate `x_n`.
    pub x: f64,

    /// `f(x_n)`.
    pub fx: f64,

    /// `f'(x_n)`.
    pub dfx: f64,

    /// The next iterate `x_{n+1}`.
    pub x_next: f64,

    /// Absolute step size `|x_{n+1} - x_n|`.
    pub error: f64,
}

impl Record {
    /// Returns the numeric fields in column order.
    #[must_use]
    pub fn values(&self) -> [f64; 5] {
        [self.x, self.fx, self.dfx, self.x_next, self.error]
    }

    /// Returns a copy with every numeric field rounded to `precision`.
    #[must_use]
    pub fn rounded(&self, precision: Precision) -> Self {
        Self {
            iter: self.iter,
            x: precision.round(self.x),
            fx: precision.round(self.fx),
            dfx: precision.round(self.dfx),
            x_next: precision.round(self.x_next),
            error: precision.round(self.error),
        }
    }
}
