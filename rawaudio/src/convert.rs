//! Conversions between frames, bytes and stream time.
//!
//! Every conversion has a default rounding mode and a `_with` variant that
//! takes any [`Rounding`]. Durations turn into frame or byte counts with
//! [`Round::Ceil`] by default so a buffer always covers the requested time.
//! Frame or byte counts turn into durations with [`Round::Truncate`] so the
//! reported time never exceeds what has fully elapsed.
//!
//! All arithmetic is exact over `u128`. A result that does not fit in the
//! output type is a caller bug and panics.

use crate::format::RawAudioFormat;
use crate::round::{Round, Rounding};
use crate::time::Ticks;

impl RawAudioFormat {
    /// Returns the byte length of `frames` frames.
    pub fn frames_to_bytes(&self, frames: u64) -> u64 {
        narrow(mul(frames, self.frame_size() as u128))
    }

    /// Returns the number of whole frames in `bytes` bytes.
    pub fn bytes_to_frames(&self, bytes: u64) -> u64 {
        self.bytes_to_frames_with(bytes, Round::Truncate)
    }

    pub fn bytes_to_frames_with(&self, bytes: u64, round: impl Rounding) -> u64 {
        narrow(round.round(u128::from(bytes), self.frame_size() as u128))
    }

    /// Returns the number of frames needed to cover `time`, rounding up.
    pub fn time_to_frames<T: Ticks>(&self, time: T) -> u64 {
        self.time_to_frames_with(time, Round::Ceil)
    }

    pub fn time_to_frames_with<T: Ticks>(&self, time: T, round: impl Rounding) -> u64 {
        let numer = time
            .ticks()
            .checked_mul(u128::from(self.sample_rate()))
            .unwrap_or_else(|| panic!("time_to_frames: {} ticks overflow", time.ticks()));
        narrow(round.round(numer, u128::from(T::TICKS_PER_SECOND)))
    }

    /// Returns the playing time of `frames` frames, rounding down.
    pub fn frames_to_time<T: Ticks>(&self, frames: u64) -> T {
        self.frames_to_time_with(frames, Round::Truncate)
    }

    pub fn frames_to_time_with<T: Ticks>(&self, frames: u64, round: impl Rounding) -> T {
        let numer = mul(frames, u128::from(T::TICKS_PER_SECOND));
        T::from_ticks(round.round(numer, u128::from(self.sample_rate())))
    }

    /// Returns the byte length of the frames covering `time`, rounding up.
    pub fn time_to_bytes<T: Ticks>(&self, time: T) -> u64 {
        self.time_to_bytes_with(time, Round::Ceil)
    }

    pub fn time_to_bytes_with<T: Ticks>(&self, time: T, round: impl Rounding) -> u64 {
        self.frames_to_bytes(self.time_to_frames_with(time, round))
    }

    /// Returns the playing time of the whole frames in `bytes` bytes.
    pub fn bytes_to_time<T: Ticks>(&self, bytes: u64) -> T {
        self.bytes_to_time_with(bytes, Round::Truncate)
    }

    /// Like [`bytes_to_time`](Self::bytes_to_time) with a custom rounding
    /// for the frames-to-time step.
    ///
    /// Partial frames are always dropped first; `round` does not apply to
    /// the bytes-to-frames step.
    pub fn bytes_to_time_with<T: Ticks>(&self, bytes: u64, round: impl Rounding) -> T {
        self.frames_to_time_with(self.bytes_to_frames(bytes), round)
    }
}

fn mul(a: u64, b: u128) -> u128 {
    // a < 2^64 and every caller passes b < 2^64.
    u128::from(a) * b
}

fn narrow(v: u128) -> u64 {
    u64::try_from(v).unwrap_or_else(|_| panic!("conversion result {} does not fit in u64", v))
}
