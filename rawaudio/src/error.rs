//! Error types for raw audio operations.

use thiserror::Error;

use crate::{RawAudioFormat, SampleValue};

/// Raw audio error.
///
/// Only construction, parsing and checked encoding report errors. Contract
/// violations such as a wrong-length sample buffer panic instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("rawaudio: channel count must be positive, got {0}")]
    InvalidChannels(u32),

    #[error("rawaudio: sample rate must be positive, got {0}")]
    InvalidSampleRate(u32),

    #[error("rawaudio: unknown sample format {0:?}")]
    UnknownSampleFormat(String),

    #[error("rawaudio: sample {value} out of range [{min}, {max}] for {format}")]
    Overflow {
        value: SampleValue,
        min: SampleValue,
        max: SampleValue,
        format: RawAudioFormat,
    },
}

/// Result type for raw audio operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SampleFormat;

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::InvalidChannels(0).to_string(),
            "rawaudio: channel count must be positive, got 0"
        );
        assert_eq!(
            Error::UnknownSampleFormat("S12LE".into()).to_string(),
            "rawaudio: unknown sample format \"S12LE\""
        );
    }

    #[test]
    fn test_overflow_display() {
        let format = RawAudioFormat::new(1, 8000, SampleFormat::U8).unwrap();
        let err = Error::Overflow {
            value: SampleValue::Int(256),
            min: SampleValue::Int(0),
            max: SampleValue::Int(255),
            format,
        };
        assert_eq!(
            err.to_string(),
            "rawaudio: sample 256 out of range [0, 255] for U8 1ch 8000Hz"
        );
    }
}
