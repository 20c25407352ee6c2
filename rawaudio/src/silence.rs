//! Silence generation.
//!
//! The silent sample is whatever the codec produces for numeric zero, so it
//! is mid-scale for unsigned formats and all zero bytes otherwise.

use std::io::{self, Write};
use tracing::trace;

use crate::format::RawAudioFormat;
use crate::round::{Round, Rounding};
use crate::time::Ticks;
use crate::value::SampleValue;

/// Frames written per block by [`RawAudioFormat::write_silence`].
const BLOCK_FRAMES: usize = 1024;

impl RawAudioFormat {
    /// Returns the encoding of one silent sample.
    pub fn silence_sample(&self) -> Vec<u8> {
        self.encode(SampleValue::Int(0))
    }

    /// Returns one silent frame.
    pub fn silence_frame(&self) -> Vec<u8> {
        self.silence_sample().repeat(self.channels() as usize)
    }

    /// Returns enough silent frames to cover `duration`, rounding up.
    pub fn silence<T: Ticks>(&self, duration: T) -> Vec<u8> {
        self.silence_with(duration, Round::Ceil)
    }

    pub fn silence_with<T: Ticks>(&self, duration: T, round: impl Rounding) -> Vec<u8> {
        let frames = self.time_to_frames_with(duration, round);
        trace!(format = %self, frames, "generating silence");
        let frames = usize::try_from(frames)
            .unwrap_or_else(|_| panic!("{} frames of silence exceed addressable memory", frames));
        self.silence_frame().repeat(frames)
    }

    /// Writes enough silent frames to cover `duration` into `w`, rounding up.
    ///
    /// Returns the number of bytes written. Memory use is bounded regardless
    /// of the duration.
    pub fn write_silence<T: Ticks>(&self, w: &mut dyn Write, duration: T) -> io::Result<u64> {
        let mut remaining = self.time_to_bytes(duration);
        trace!(format = %self, bytes = remaining, "writing silence");
        let block = self.silence_frame().repeat(BLOCK_FRAMES);
        let mut written = 0u64;

        while remaining > 0 {
            let to_write = remaining.min(block.len() as u64) as usize;
            w.write_all(&block[..to_write])?;
            written += to_write as u64;
            remaining -= to_write as u64;
        }

        Ok(written)
    }
}
