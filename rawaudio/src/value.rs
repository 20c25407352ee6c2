//! Numeric sample values.

use std::fmt;

/// The numeric value of one decoded sample.
///
/// Integer formats decode to [`SampleValue::Int`], float formats to
/// [`SampleValue::Float`]. Either variant is accepted when encoding.
#[derive(Debug, Clone, Copy)]
pub enum SampleValue {
    Int(i64),
    Float(f64),
}

impl SampleValue {
    /// Returns the value as an integer, truncating floats toward zero.
    ///
    /// Floats outside the `i64` range saturate and NaN maps to 0.
    pub fn as_i64(self) -> i64 {
        match self {
            SampleValue::Int(v) => v,
            SampleValue::Float(v) => v as i64,
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            SampleValue::Int(v) => v as f64,
            SampleValue::Float(v) => v,
        }
    }

    pub fn is_zero(self) -> bool {
        match self {
            SampleValue::Int(v) => v == 0,
            SampleValue::Float(v) => v == 0.0,
        }
    }

    /// Returns true if the value lies within `min..=max`.
    ///
    /// Integers are compared exactly. NaN is never in range.
    pub(crate) fn in_range(self, min: SampleValue, max: SampleValue) -> bool {
        match (self, min, max) {
            (SampleValue::Int(v), SampleValue::Int(lo), SampleValue::Int(hi)) => (lo..=hi).contains(&v),
            _ => {
                let v = self.as_f64();
                v >= min.as_f64() && v <= max.as_f64()
            }
        }
    }
}

/// Values compare numerically across variants, so `Int(1) == Float(1.0)`.
impl PartialEq for SampleValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (SampleValue::Int(a), SampleValue::Int(b)) => a == b,
            _ => self.as_f64() == other.as_f64(),
        }
    }
}

impl fmt::Display for SampleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleValue::Int(v) => write!(f, "{}", v),
            SampleValue::Float(v) => write!(f, "{:?}", v),
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for SampleValue {
                fn from(v: $t) -> Self {
                    SampleValue::Int(i64::from(v))
                }
            }
        )*
    };
}

impl_from_int!(i8, u8, i16, u16, i32, u32, i64);

impl From<f32> for SampleValue {
    fn from(v: f32) -> Self {
        SampleValue::Float(f64::from(v))
    }
}

impl From<f64> for SampleValue {
    fn from(v: f64) -> Self {
        SampleValue::Float(v)
    }
}
