// melodist -- a generator for random melodies, chords and songs
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Rendering several simultaneous tones into one buffer.

use log::trace;

use super::oscillator::render_tone;
use super::tuning::Tuning;
use crate::scale::ChordType;
use crate::wave::{sample_count, SampleBuffer, SAMPLE_MAX};

/// Amplitude of each chord voice. Lower than a solo tone so that the
/// voices can be summed.
pub const VOICE_AMPLITUDE: f64 = 0.2;

/// Render a chord by summing one tone per interval above `root`.
///
/// The sum is peak normalized if it leaves the 16 bit range.
pub fn render_chord(root: i32, chord: ChordType, octave: i32, duration: f64) -> SampleBuffer {
    let tuning = Tuning::default();
    let mut mixed = vec![0i64; sample_count(duration)];
    for interval in chord.intervals() {
        let frequency = tuning.frequency(root + interval, octave);
        trace!("{} voice {:+} at {:.2} Hz", chord, interval, frequency);
        let voice = render_tone(frequency, duration, VOICE_AMPLITUDE);
        for (acc, sample) in mixed.iter_mut().zip(voice.samples()) {
            *acc += i64::from(*sample);
        }
    }
    normalize_peak(&mixed)
}

/// Render a chord given by name. Unknown names are played as a major triad.
pub fn render_chord_named(root: i32, chord_name: &str, octave: i32, duration: f64) -> SampleBuffer {
    render_chord(root, ChordType::named_or_major(chord_name), octave, duration)
}

/// Convert summed samples to 16 bit, rescaling uniformly if the peak exceeds [`SAMPLE_MAX`].
///
/// # Examples
///
/// ```
/// use melodist::synth::chord::normalize_peak;
///
/// assert_eq!(normalize_peak(&[65534, -32767, 1]).samples(), &[32767, -16383, 0]);
/// assert_eq!(normalize_peak(&[100, -200]).samples(), &[100, -200]);
/// ```
pub fn normalize_peak(mixed: &[i64]) -> SampleBuffer {
    let max = i64::from(SAMPLE_MAX);
    let peak = mixed.iter().map(|s| s.abs()).max().unwrap_or(0);
    if peak > max {
        mixed
            .iter()
            .map(|&s| ((s * max) as f64 / peak as f64) as i16)
            .collect()
    } else {
        // also covers a silent buffer, where the peak is zero
        mixed.iter().map(|&s| s as i16).collect()
    }
}
