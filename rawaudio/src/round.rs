//! Rounding strategies for unit conversions.

/// Rounds the exact non-negative ratio `numer / denom` to an integer.
pub trait Rounding {
    fn round(&self, numer: u128, denom: u128) -> u128;
}

/// Exact integer rounding modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Round {
    /// Toward zero, which is floor for non-negative ratios.
    Truncate,
    /// Toward positive infinity.
    Ceil,
    /// To the nearest integer, halves away from zero.
    Nearest,
}

impl Rounding for Round {
    fn round(&self, numer: u128, denom: u128) -> u128 {
        assert!(denom != 0, "rounding a ratio with zero denominator");
        let (q, r) = (numer / denom, numer % denom);
        match self {
            Round::Truncate => q,
            Round::Ceil => q + u128::from(r != 0),
            Round::Nearest => q + u128::from(r >= denom - r),
        }
    }
}

/// Adapts a real-valued rounding function such as `f64::round`.
///
/// The ratio is evaluated in `f64`, so very large values lose precision.
/// Negative and NaN results clamp to zero.
#[derive(Debug, Clone, Copy)]
pub struct RoundWith<F>(pub F);

impl<F> Rounding for RoundWith<F>
where
    F: Fn(f64) -> f64,
{
    fn round(&self, numer: u128, denom: u128) -> u128 {
        (self.0)(numer as f64 / denom as f64) as u128
    }
}

impl<R: Rounding + ?Sized> Rounding for &R {
    fn round(&self, numer: u128, denom: u128) -> u128 {
        (**self).round(numer, denom)
    }
}
