#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest magnitude below which an `f64` can still carry a fractional part.
const MAX_FRACTIONAL: f64 = 4_503_599_627_370_496.0; // 2^52

/// Number of decimal places used to round iteration trace values.
///
/// The precision follows from the solver tolerance: a tolerance of `10^-k`
/// keeps `k` decimal places. Non-positive (or NaN) tolerances fall back to
/// [`Precision::DEFAULT_DECIMALS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Precision {
    decimals: u32,
}

impl Precision {
    /// Decimal places used when the tolerance cannot drive the precision.
    pub const DEFAULT_DECIMALS: u32 = 6;

    /// Creates a precision with an explicit number of decimal places.
    #[must_use]
    pub const fn new(decimals: u32) -> Self {
        Self { decimals }
    }

    /// Derives the precision as `|floor(log10(tolerance))|`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_tolerance(tolerance: f64) -> Self {
        if tolerance > 0.0 {
            // Saturating cast: an infinite tolerance yields `u32::MAX`.
            Self::new(tolerance.log10().floor().abs() as u32)
        } else {
            Self::new(Self::DEFAULT_DECIMALS)
        }
    }

    /// Returns the number of decimal places.
    #[must_use]
    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    /// Rounds `value` to this many decimal places, sending ties to the even
    /// neighbour.
    ///
    /// Values that an `f64` cannot resolve at this precision (the scaled value
    /// overflows or has no fractional bits left) are returned unchanged, as are
    /// NaN and infinities.
    #[must_use]
    pub fn round(&self, value: f64) -> f64 {
        let exponent = i32::try_from(self.decimals).unwrap_or(i32::MAX);
        let scale = 10_f64.powi(exponent);
        let scaled = value * scale;

        if !scaled.is_finite() || scaled.abs() >= MAX_FRACTIONAL {
            return value;
        }

        scaled.round_ties_even() / scale
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DECIMALS)
    }
}
