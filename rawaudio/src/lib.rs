//! Raw PCM audio format descriptors.
//!
//! This crate describes interleaved raw audio streams and does the
//! arithmetic pipeline stages need around them:
//!
//! - `sample_format`: the closed set of sample encodings and their
//!   `(class, bits, endianness)` decomposition
//! - `format`: [`RawAudioFormat`], the `{channels, sample_rate,
//!   sample_format}` descriptor with size queries
//! - `codec`: encoding and decoding single samples, numeric ranges and
//!   checked encoding
//! - `silence`: silent samples and buffers
//! - `convert`: conversions between frames, bytes and stream time
//!
//! # Example
//!
//! ```rust
//! use rawaudio::{Micros, RawAudioFormat, SampleFormat};
//!
//! let format = RawAudioFormat::new(2, 48000, SampleFormat::S16Le)?;
//! assert_eq!(format.frame_size(), 4);
//!
//! // 100us at 48kHz is 4.8 frames, rounded up to 5
//! assert_eq!(format.time_to_frames(Micros(100)), 5);
//! assert_eq!(format.silence(Micros(100)), vec![0u8; 20]);
//!
//! // Checked encoding reports out-of-range samples
//! assert!(format.encode_checked(32767).is_ok());
//! assert!(format.encode_checked(32768).is_err());
//! # Ok::<(), rawaudio::Error>(())
//! ```

mod codec;
mod convert;
mod error;
mod format;
mod round;
mod sample_format;
mod silence;
mod time;
mod value;

pub use error::{Error, Result};
pub use format::RawAudioFormat;
pub use round::{Round, RoundWith, Rounding};
pub use sample_format::{Endianness, SampleClass, SampleFormat};
pub use time::{ClockTime, Micros, Ticks};
pub use value::SampleValue;
