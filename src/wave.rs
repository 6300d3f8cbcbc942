// melodist -- a generator for random melodies, chords and songs
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! This is the namespace for all parts dealing with data in sampled waves.

use std::iter::FromIterator;
use std::ops::Index;

/// Number of samples per second.
pub const SAMPLE_RATE: u32 = 44100;
/// All generated audio is mono.
pub const CHANNELS: u16 = 1;
/// Samples are stored as signed 16 bit integers.
pub const BITS_PER_SAMPLE: u16 = 16;
/// Largest magnitude a sample may have after any summation step.
/// The range is symmetric, so `i16::MIN` is never produced.
pub const SAMPLE_MAX: i16 = 32767;

/// Information about how audio is sampled and stored.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct AudioFormat {
    /// Number of samples per second.
    pub sample_rate: u32,
    /// Number of interleaved channels.
    pub channels: u16,
    /// Bit depth of a single sample.
    pub bits_per_sample: u16,
}

impl AudioFormat {
    /// The only format the generator produces: 44.1 kHz, mono, 16 bit signed PCM.
    pub const PCM16_MONO: AudioFormat = AudioFormat {
        sample_rate: SAMPLE_RATE,
        channels: CHANNELS,
        bits_per_sample: BITS_PER_SAMPLE,
    };
}

/// Number of samples needed to hold `duration` seconds of audio.
///
/// Negative and NaN durations yield an empty buffer.
///
/// # Examples
///
/// ```
/// use melodist::wave::sample_count;
///
/// assert_eq!(sample_count(1.0), 44100);
/// assert_eq!(sample_count(0.125), 5513);
/// assert_eq!(sample_count(0.0), 0);
/// assert_eq!(sample_count(-1.0), 0);
/// ```
pub fn sample_count(duration: f64) -> usize {
    // float to int casts saturate, which takes care of negative values and NaN
    (f64::from(SAMPLE_RATE) * duration).round() as usize
}

/// Clamp a wide intermediate value into the representable sample range.
pub fn clamp_sample(value: i64) -> i16 {
    value.max(-i64::from(SAMPLE_MAX)).min(i64::from(SAMPLE_MAX)) as i16
}

/// A mono buffer of 16 bit samples at [`SAMPLE_RATE`].
///
/// Every stage of the pipeline produces a fresh buffer; a buffer handed
/// to the next stage is only ever read.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SampleBuffer {
    samples: Vec<i16>,
}

impl SampleBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// The sample at `index`, or silence past the end of the buffer.
    pub fn get_or_silence(&self, index: usize) -> i16 {
        self.samples.get(index).copied().unwrap_or(0)
    }

    /// Append the contents of another buffer at the end of this one.
    pub fn append(&mut self, other: &SampleBuffer) {
        self.samples.extend_from_slice(&other.samples);
    }

    /// Largest absolute sample value in the buffer, zero if empty.
    pub fn peak(&self) -> u16 {
        self.samples
            .iter()
            .map(|s| s.unsigned_abs())
            .max()
            .unwrap_or(0)
    }

    /// Playback length of the buffer in seconds.
    pub fn seconds(&self) -> f64 {
        self.len() as f64 / f64::from(SAMPLE_RATE)
    }
}

impl From<Vec<i16>> for SampleBuffer {
    fn from(samples: Vec<i16>) -> Self {
        Self { samples }
    }
}

impl FromIterator<i16> for SampleBuffer {
    fn from_iter<I: IntoIterator<Item = i16>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for SampleBuffer {
    type Output = i16;

    fn index(&self, index: usize) -> &i16 {
        &self.samples[index]
    }
}
