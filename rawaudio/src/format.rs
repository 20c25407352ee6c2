//! Raw audio format descriptor.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::error::{Error, Result};
use crate::sample_format::SampleFormat;

/// Describes an interleaved raw PCM stream.
///
/// A frame holds one sample for each channel. The descriptor is immutable
/// and always valid: both `channels` and `sample_rate` are positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "FormatConfig", into = "FormatConfig")]
pub struct RawAudioFormat {
    channels: u32,
    sample_rate: u32,
    sample_format: SampleFormat,
}

impl RawAudioFormat {
    /// Creates a format, rejecting zero channels or a zero sample rate.
    pub fn new(channels: u32, sample_rate: u32, sample_format: SampleFormat) -> Result<Self> {
        if channels == 0 {
            debug!(sample_rate, %sample_format, "rejecting format with zero channels");
            return Err(Error::InvalidChannels(channels));
        }
        if sample_rate == 0 {
            debug!(channels, %sample_format, "rejecting format with zero sample rate");
            return Err(Error::InvalidSampleRate(sample_rate));
        }
        Ok(Self {
            channels,
            sample_rate,
            sample_format,
        })
    }

    const fn preset(channels: u32, sample_rate: u32) -> Self {
        Self {
            channels,
            sample_rate,
            sample_format: SampleFormat::S16Le,
        }
    }

    pub const fn channels(&self) -> u32 {
        self.channels
    }

    /// Returns the number of frames per second.
    pub const fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub const fn sample_format(&self) -> SampleFormat {
        self.sample_format
    }

    pub const fn is_float(&self) -> bool {
        self.sample_format.is_float()
    }

    pub const fn is_fixed(&self) -> bool {
        self.sample_format.is_fixed()
    }

    /// Float formats count as signed.
    pub const fn is_signed(&self) -> bool {
        self.sample_format.is_signed()
    }

    pub const fn is_unsigned(&self) -> bool {
        self.sample_format.is_unsigned()
    }

    /// Single-byte formats are both little- and big-endian.
    pub const fn is_little_endian(&self) -> bool {
        self.sample_format.is_little_endian()
    }

    pub const fn is_big_endian(&self) -> bool {
        self.sample_format.is_big_endian()
    }

    /// Returns the number of bytes in one sample of one channel.
    pub const fn sample_size(&self) -> usize {
        self.sample_format.sample_size()
    }

    /// Returns the number of bytes in one frame (all channels).
    ///
    /// # Panics
    ///
    /// Panics if the frame size does not fit in `usize`.
    pub fn frame_size(&self) -> usize {
        self.sample_size()
            .checked_mul(self.channels as usize)
            .unwrap_or_else(|| panic!("frame size of {} does not fit in usize", self))
    }

    /// Returns the number of bytes per second.
    ///
    /// # Panics
    ///
    /// Panics if the rate does not fit in `u64`.
    pub fn bytes_rate(&self) -> u64 {
        let rate = self.frame_size() as u128 * u128::from(self.sample_rate);
        rate_u64(rate, "bytes", self)
    }

    /// Returns the number of bits per second.
    ///
    /// # Panics
    ///
    /// Panics if the rate does not fit in `u64`.
    pub fn bits_rate(&self) -> u64 {
        rate_u64(u128::from(self.bytes_rate()) * 8, "bits", self)
    }
}

fn rate_u64(rate: u128, unit: &str, format: &RawAudioFormat) -> u64 {
    u64::try_from(rate)
        .unwrap_or_else(|_| panic!("{} {} per second for {} does not fit in u64", rate, unit, format))
}

// Common format presets, all 16-bit signed little-endian.
impl RawAudioFormat {
    /// 16kHz mono (common for speech)
    pub const MONO_16K: RawAudioFormat = RawAudioFormat::preset(1, 16000);
    /// 24kHz mono
    pub const MONO_24K: RawAudioFormat = RawAudioFormat::preset(1, 24000);
    /// 48kHz mono
    pub const MONO_48K: RawAudioFormat = RawAudioFormat::preset(1, 48000);
    /// 44.1kHz stereo (CD quality)
    pub const STEREO_44K: RawAudioFormat = RawAudioFormat::preset(2, 44100);
    /// 48kHz stereo
    pub const STEREO_48K: RawAudioFormat = RawAudioFormat::preset(2, 48000);
}

impl fmt::Display for RawAudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}ch {}Hz",
            self.sample_format, self.channels, self.sample_rate
        )
    }
}

/// Serialized shape of a [`RawAudioFormat`], validated on the way in.
#[derive(Serialize, Deserialize)]
struct FormatConfig {
    channels: u32,
    sample_rate: u32,
    sample_format: SampleFormat,
}

impl TryFrom<FormatConfig> for RawAudioFormat {
    type Error = Error;

    fn try_from(c: FormatConfig) -> Result<Self> {
        RawAudioFormat::new(c.channels, c.sample_rate, c.sample_format)
    }
}

impl From<RawAudioFormat> for FormatConfig {
    fn from(f: RawAudioFormat) -> Self {
        Self {
            channels: f.channels,
            sample_rate: f.sample_rate,
            sample_format: f.sample_format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let f = RawAudioFormat::new(2, 48000, SampleFormat::S16Le).unwrap();
        assert_eq!(f.channels(), 2);
        assert_eq!(f.sample_rate(), 48000);
        assert_eq!(f.sample_format(), SampleFormat::S16Le);
    }

    #[test]
    fn test_new_rejects_zero() {
        assert_eq!(
            RawAudioFormat::new(0, 48000, SampleFormat::S16Le),
            Err(Error::InvalidChannels(0))
        );
        assert_eq!(
            RawAudioFormat::new(2, 0, SampleFormat::S16Le),
            Err(Error::InvalidSampleRate(0))
        );
    }

    #[test]
    fn test_sizes() {
        let f = RawAudioFormat::new(2, 48000, SampleFormat::S16Le).unwrap();
        assert_eq!(f.sample_size(), 2);
        assert_eq!(f.frame_size(), 4);

        let f = RawAudioFormat::new(6, 96000, SampleFormat::S24Be).unwrap();
        assert_eq!(f.sample_size(), 3);
        assert_eq!(f.frame_size(), 18);

        for sf in SampleFormat::ALL {
            for ch in 1..=8 {
                let f = RawAudioFormat::new(ch, 8000, sf).unwrap();
                assert_eq!(f.frame_size(), f.sample_size() * ch as usize);
            }
        }
    }

    #[test]
    fn test_rates() {
        let f = RawAudioFormat::MONO_16K;
        assert_eq!(f.bytes_rate(), 32000);
        assert_eq!(f.bits_rate(), 256000);
        assert_eq!(RawAudioFormat::STEREO_44K.bytes_rate(), 176400);
    }

    #[test]
    fn test_rates_at_limits() {
        // (2^32 - 1)^2 bytes/s fits in u64, eight times that does not.
        let f = RawAudioFormat::new(u32::MAX, u32::MAX, SampleFormat::U8).unwrap();
        assert_eq!(f.frame_size(), u32::MAX as usize);
        assert_eq!(
            u128::from(f.bytes_rate()),
            u128::from(u32::MAX) * u128::from(u32::MAX)
        );
    }

    #[test]
    #[should_panic(expected = "bytes per second for F64LE 4294967295ch 4294967295Hz does not fit in u64")]
    fn test_bytes_rate_overflow_panics() {
        RawAudioFormat::new(u32::MAX, u32::MAX, SampleFormat::F64Le)
            .unwrap()
            .bytes_rate();
    }

    #[test]
    #[should_panic(expected = "bits per second for U8 4294967295ch 4294967295Hz does not fit in u64")]
    fn test_bits_rate_overflow_panics() {
        RawAudioFormat::new(u32::MAX, u32::MAX, SampleFormat::U8)
            .unwrap()
            .bits_rate();
    }

    #[test]
    fn test_predicates_follow_sample_format() {
        let f = RawAudioFormat::new(1, 8000, SampleFormat::U8).unwrap();
        assert!(f.is_fixed() && f.is_unsigned() && !f.is_signed() && !f.is_float());
        assert!(f.is_little_endian() && f.is_big_endian());

        let f = RawAudioFormat::new(1, 8000, SampleFormat::F32Be).unwrap();
        assert!(f.is_float() && f.is_signed() && !f.is_fixed() && !f.is_unsigned());
        assert!(f.is_big_endian() && !f.is_little_endian());
    }

    #[test]
    fn test_presets() {
        assert_eq!(RawAudioFormat::MONO_16K.sample_rate(), 16000);
        assert_eq!(RawAudioFormat::MONO_24K.sample_rate(), 24000);
        assert_eq!(RawAudioFormat::MONO_48K.channels(), 1);
        assert_eq!(RawAudioFormat::STEREO_48K.channels(), 2);
        assert_eq!(
            RawAudioFormat::STEREO_48K,
            RawAudioFormat::new(2, 48000, SampleFormat::S16Le).unwrap()
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(RawAudioFormat::STEREO_48K.to_string(), "S16LE 2ch 48000Hz");
    }

    #[test]
    fn test_eq() {
        let a = RawAudioFormat::new(1, 16000, SampleFormat::S16Le).unwrap();
        assert_eq!(a, RawAudioFormat::MONO_16K);
        assert_ne!(a, RawAudioFormat::MONO_24K);
        assert_ne!(a, RawAudioFormat::new(1, 16000, SampleFormat::S16Be).unwrap());
    }
}
