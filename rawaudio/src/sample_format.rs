//! Sample format definitions.
//!
//! Every [`SampleFormat`] decomposes into a numeric [`SampleClass`], a bit
//! width and an [`Endianness`]. All other sample-level queries are derived
//! from that triple.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Numeric class of a sample encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleClass {
    /// Two's complement integer.
    Signed,
    /// Offset-binary integer, mid-scale is analog zero.
    Unsigned,
    /// IEEE-754 floating point, nominal range -1.0..=1.0.
    Float,
}

/// Byte order of a sample encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endianness {
    Little,
    Big,
    /// Single-byte samples, byte order is immaterial.
    Any,
}

/// Encoding of a single sample in a single channel.
///
/// 24-bit formats are packed into three bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleFormat {
    S8,
    U8,
    S16Le,
    S16Be,
    U16Le,
    U16Be,
    S24Le,
    S24Be,
    U24Le,
    U24Be,
    S32Le,
    S32Be,
    U32Le,
    U32Be,
    F32Le,
    F32Be,
    F64Le,
    F64Be,
}

impl SampleFormat {
    /// Every supported sample format.
    pub const ALL: [SampleFormat; 18] = [
        SampleFormat::S8,
        SampleFormat::U8,
        SampleFormat::S16Le,
        SampleFormat::S16Be,
        SampleFormat::U16Le,
        SampleFormat::U16Be,
        SampleFormat::S24Le,
        SampleFormat::S24Be,
        SampleFormat::U24Le,
        SampleFormat::U24Be,
        SampleFormat::S32Le,
        SampleFormat::S32Be,
        SampleFormat::U32Le,
        SampleFormat::U32Be,
        SampleFormat::F32Le,
        SampleFormat::F32Be,
        SampleFormat::F64Le,
        SampleFormat::F64Be,
    ];

    /// Returns the `(class, bits, endianness)` triple of this format.
    pub const fn decompose(self) -> (SampleClass, u32, Endianness) {
        use Endianness::*;
        use SampleClass::*;
        match self {
            SampleFormat::S8 => (Signed, 8, Any),
            SampleFormat::U8 => (Unsigned, 8, Any),
            SampleFormat::S16Le => (Signed, 16, Little),
            SampleFormat::S16Be => (Signed, 16, Big),
            SampleFormat::U16Le => (Unsigned, 16, Little),
            SampleFormat::U16Be => (Unsigned, 16, Big),
            SampleFormat::S24Le => (Signed, 24, Little),
            SampleFormat::S24Be => (Signed, 24, Big),
            SampleFormat::U24Le => (Unsigned, 24, Little),
            SampleFormat::U24Be => (Unsigned, 24, Big),
            SampleFormat::S32Le => (Signed, 32, Little),
            SampleFormat::S32Be => (Signed, 32, Big),
            SampleFormat::U32Le => (Unsigned, 32, Little),
            SampleFormat::U32Be => (Unsigned, 32, Big),
            SampleFormat::F32Le => (Float, 32, Little),
            SampleFormat::F32Be => (Float, 32, Big),
            SampleFormat::F64Le => (Float, 64, Little),
            SampleFormat::F64Be => (Float, 64, Big),
        }
    }

    /// Looks up the format with the given triple.
    ///
    /// Returns `None` for combinations that have no format, such as 16-bit
    /// floats or a multi-byte format without a byte order.
    pub fn from_parts(class: SampleClass, bits: u32, endianness: Endianness) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.decompose() == (class, bits, endianness))
    }

    pub const fn class(self) -> SampleClass {
        self.decompose().0
    }

    /// Returns the sample width in bits.
    pub const fn bits(self) -> u32 {
        self.decompose().1
    }

    pub const fn endianness(self) -> Endianness {
        self.decompose().2
    }

    /// Returns the number of bytes in one sample.
    pub const fn sample_size(self) -> usize {
        (self.bits() / 8) as usize
    }

    pub const fn is_float(self) -> bool {
        matches!(self.class(), SampleClass::Float)
    }

    /// Returns true for integer formats, signed or unsigned.
    pub const fn is_fixed(self) -> bool {
        matches!(self.class(), SampleClass::Signed | SampleClass::Unsigned)
    }

    /// Returns true for signed integer and float formats.
    pub const fn is_signed(self) -> bool {
        matches!(self.class(), SampleClass::Signed | SampleClass::Float)
    }

    pub const fn is_unsigned(self) -> bool {
        matches!(self.class(), SampleClass::Unsigned)
    }

    /// Returns true for little-endian and single-byte formats.
    pub const fn is_little_endian(self) -> bool {
        matches!(self.endianness(), Endianness::Little | Endianness::Any)
    }

    /// Returns true for big-endian and single-byte formats.
    pub const fn is_big_endian(self) -> bool {
        matches!(self.endianness(), Endianness::Big | Endianness::Any)
    }

    /// Returns the canonical name, e.g. `"S16LE"`.
    pub const fn name(self) -> &'static str {
        match self {
            SampleFormat::S8 => "S8",
            SampleFormat::U8 => "U8",
            SampleFormat::S16Le => "S16LE",
            SampleFormat::S16Be => "S16BE",
            SampleFormat::U16Le => "U16LE",
            SampleFormat::U16Be => "U16BE",
            SampleFormat::S24Le => "S24LE",
            SampleFormat::S24Be => "S24BE",
            SampleFormat::U24Le => "U24LE",
            SampleFormat::U24Be => "U24BE",
            SampleFormat::S32Le => "S32LE",
            SampleFormat::S32Be => "S32BE",
            SampleFormat::U32Le => "U32LE",
            SampleFormat::U32Be => "U32BE",
            SampleFormat::F32Le => "F32LE",
            SampleFormat::F32Be => "F32BE",
            SampleFormat::F64Le => "F64LE",
            SampleFormat::F64Be => "F64BE",
        }
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SampleFormat {
    type Err = Error;

    /// Parses a canonical name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownSampleFormat(s.to_string()))
    }
}

impl Serialize for SampleFormat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for SampleFormat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
