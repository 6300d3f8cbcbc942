// melodist -- a generator for random melodies, chords and songs
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

use super::envelope::Envelope;
use crate::wave::{SampleBuffer, SAMPLE_MAX, SAMPLE_RATE};

/// Amplitude of a solo tone, leaving headroom for mixing.
pub const TONE_AMPLITUDE: f64 = 0.3;

/// A sine oscillator sampling a fixed frequency at a fixed sample rate.
///
/// Samples are computed from the absolute sample index rather than an
/// accumulated phase, so every tone starts at phase zero.
#[derive(Debug)]
pub struct Oscillator {
    sample_rate: f64,
    frequency: f64,
}

impl Oscillator {
    pub fn new(sample_rate: f64, frequency: f64) -> Self {
        Self {
            sample_rate,
            frequency,
        }
    }

    /// The raw wave in `[-1, 1]` at the given sample index.
    pub fn sample(&self, index: usize) -> f64 {
        use std::f64::consts::PI;
        let t = index as f64 / self.sample_rate;
        (2.0 * PI * self.frequency * t).sin()
    }

    /// Render `duration` seconds of the wave, shaped by `envelope` and quantized to 16 bit.
    ///
    /// Quantization truncates towards zero. Amplitudes above 1.0 saturate.
    pub fn render(&self, duration: f64, amplitude: f64, envelope: &Envelope) -> SampleBuffer {
        let len = (self.sample_rate * duration).round() as usize;
        (0..len)
            .map(|i| {
                let value = amplitude * envelope.gain(i, len) * self.sample(i);
                (value * f64::from(SAMPLE_MAX)) as i16
            })
            .collect()
    }
}

/// Render a single enveloped sine tone at the global sample rate.
///
/// # Examples
///
/// ```
/// use melodist::synth::oscillator::*;
///
/// let tone = render_tone(440.0, 0.5, TONE_AMPLITUDE);
/// assert_eq!(tone.len(), 22050);
/// assert_eq!(tone[0], 0);
/// ```
pub fn render_tone(frequency: f64, duration: f64, amplitude: f64) -> SampleBuffer {
    Oscillator::new(f64::from(SAMPLE_RATE), frequency).render(
        duration,
        amplitude,
        &Envelope::default(),
    )
}
