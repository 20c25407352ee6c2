//! Sample codec.
//!
//! Converts between [`SampleValue`]s and the bytes of one sample in one
//! channel. Integer samples are two's complement (signed) or offset-binary
//! (unsigned), floats are IEEE-754, and byte order follows the format.
//!
//! # Unsigned samples
//!
//! Unsigned formats keep analog zero at the mid-scale code `2^(bits-1)`.
//! The codec toggles the most significant bit on the way in and out, so
//! numeric `0` encodes to the mid-scale code (`0x80` for `U8`) while every
//! value in `0..=2^bits - 1` still survives an encode/decode round trip.
//!
//! Numeric values of unsigned formats are therefore not ordered by
//! amplitude. Codes below mid-scale decode to the upper half of the range:
//! for `U8`, code `0xFF` (loudest positive) decodes to `127` and code `0x00`
//! (loudest negative) decodes to `128`. To move plain unsigned PCM codes
//! through the codec, toggle the top bit yourself or use a signed format.
//!
//! # Overflow
//!
//! [`RawAudioFormat::encode`] does not check its input. Integers outside the
//! target width currently wrap modulo `2^bits`, but callers must not rely on
//! any particular bit pattern. Use [`RawAudioFormat::encode_checked`] when
//! the value may be out of range.

use tracing::debug;

use crate::error::{Error, Result};
use crate::format::RawAudioFormat;
use crate::sample_format::{Endianness, SampleClass, SampleFormat};
use crate::value::SampleValue;

impl RawAudioFormat {
    /// Decodes one sample.
    ///
    /// # Panics
    ///
    /// Panics if `bytes.len()` differs from [`sample_size`](Self::sample_size).
    pub fn decode(&self, bytes: &[u8]) -> SampleValue {
        decode_sample(self.sample_format(), bytes)
    }

    /// Encodes one sample into exactly `sample_size()` bytes.
    ///
    /// Out-of-range values are not detected; see the module docs.
    pub fn encode(&self, value: impl Into<SampleValue>) -> Vec<u8> {
        encode_sample(self.sample_format(), value.into())
    }

    /// Encodes one sample, failing with [`Error::Overflow`] when the value
    /// lies outside `sample_min()..=sample_max()`.
    pub fn encode_checked(&self, value: impl Into<SampleValue>) -> Result<Vec<u8>> {
        let value = value.into();
        let (min, max) = (self.sample_min(), self.sample_max());
        if !value.in_range(min, max) {
            debug!(%value, %min, %max, format = %self, "sample overflow");
            return Err(Error::Overflow {
                value,
                min,
                max,
                format: *self,
            });
        }
        Ok(encode_sample(self.sample_format(), value))
    }

    /// Returns the smallest encodable value.
    pub fn sample_min(&self) -> SampleValue {
        let bits = self.sample_format().bits();
        match self.sample_format().class() {
            SampleClass::Unsigned => SampleValue::Int(0),
            SampleClass::Signed => SampleValue::Int(-(1i64 << (bits - 1))),
            SampleClass::Float => SampleValue::Float(-1.0),
        }
    }

    /// Returns the largest encodable value.
    pub fn sample_max(&self) -> SampleValue {
        let bits = self.sample_format().bits();
        match self.sample_format().class() {
            SampleClass::Unsigned => SampleValue::Int((1i64 << bits) - 1),
            SampleClass::Signed => SampleValue::Int((1i64 << (bits - 1)) - 1),
            SampleClass::Float => SampleValue::Float(1.0),
        }
    }

    /// Decodes an interleaved buffer sample by sample.
    ///
    /// A trailing partial sample is ignored.
    pub fn decode_samples(&self, data: &[u8]) -> Vec<SampleValue> {
        data.chunks_exact(self.sample_size())
            .map(|c| decode_sample(self.sample_format(), c))
            .collect()
    }

    /// Encodes a sequence of samples into one interleaved buffer.
    pub fn encode_samples<I>(&self, values: I) -> Vec<u8>
    where
        I: IntoIterator,
        I::Item: Into<SampleValue>,
    {
        let values = values.into_iter();
        let mut data = Vec::with_capacity(values.size_hint().0 * self.sample_size());
        for v in values {
            data.extend_from_slice(&encode_sample(self.sample_format(), v.into()));
        }
        data
    }

    /// Like [`encode_samples`](Self::encode_samples), but stops at the first
    /// out-of-range value.
    pub fn encode_samples_checked<I>(&self, values: I) -> Result<Vec<u8>>
    where
        I: IntoIterator,
        I::Item: Into<SampleValue>,
    {
        let values = values.into_iter();
        let mut data = Vec::with_capacity(values.size_hint().0 * self.sample_size());
        for v in values {
            data.extend_from_slice(&self.encode_checked(v)?);
        }
        Ok(data)
    }
}

fn decode_sample(format: SampleFormat, bytes: &[u8]) -> SampleValue {
    assert_eq!(
        bytes.len(),
        format.sample_size(),
        "{} sample must be {} bytes",
        format,
        format.sample_size()
    );
    let (class, bits, endianness) = format.decompose();
    match class {
        SampleClass::Float => {
            let raw = read_raw(bytes, endianness);
            if bits == 32 {
                SampleValue::Float(f64::from(f32::from_bits(raw as u32)))
            } else {
                SampleValue::Float(f64::from_bits(raw))
            }
        }
        SampleClass::Signed => {
            // Sign-extend from the sample width to 64 bits.
            let shift = 64 - bits;
            let raw = read_raw(bytes, endianness);
            SampleValue::Int(((raw << shift) as i64) >> shift)
        }
        SampleClass::Unsigned => {
            let raw = read_raw(bytes, endianness) ^ msb(bits);
            SampleValue::Int(raw as i64)
        }
    }
}

fn encode_sample(format: SampleFormat, value: SampleValue) -> Vec<u8> {
    let (class, bits, endianness) = format.decompose();
    let raw = match class {
        SampleClass::Float if bits == 32 => u64::from((value.as_f64() as f32).to_bits()),
        SampleClass::Float => value.as_f64().to_bits(),
        SampleClass::Signed => value.as_i64() as u64 & mask(bits),
        SampleClass::Unsigned => (value.as_i64() as u64 & mask(bits)) ^ msb(bits),
    };
    write_raw(raw, format.sample_size(), endianness)
}

/// Reads up to 8 bytes as an unsigned integer in the given byte order.
fn read_raw(bytes: &[u8], endianness: Endianness) -> u64 {
    let n = bytes.len();
    let mut buf = [0u8; 8];
    match endianness {
        Endianness::Big => {
            buf[8 - n..].copy_from_slice(bytes);
            u64::from_be_bytes(buf)
        }
        Endianness::Little | Endianness::Any => {
            buf[..n].copy_from_slice(bytes);
            u64::from_le_bytes(buf)
        }
    }
}

/// Writes the low `n` bytes of `raw` in the given byte order.
fn write_raw(raw: u64, n: usize, endianness: Endianness) -> Vec<u8> {
    match endianness {
        Endianness::Big => raw.to_be_bytes()[8 - n..].to_vec(),
        Endianness::Little | Endianness::Any => raw.to_le_bytes()[..n].to_vec(),
    }
}

fn mask(bits: u32) -> u64 {
    u64::MAX >> (64 - bits)
}

fn msb(bits: u32) -> u64 {
    1u64 << (bits - 1)
}
