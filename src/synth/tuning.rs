// melodist -- a generator for random melodies, chords and songs
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

use crate::note::*;

/// Defines the tuning by assigning a frequency to C4 (semitone offset 0).
/// This defines the frequencies of all other pitches at a standard tuning of 12 half-tones per octave.
///
/// # Examples
///
/// ```
/// use melodist::synth::tuning::*;
/// assert_eq!(Tuning::default().frequency(0, 4), 261.63);
/// assert_eq!(Tuning::default().frequency(0, 5), 523.26);
/// assert_eq!(Tuning::default().frequency(0, 2), 65.4075);
/// ```
#[derive(Debug, Clone)]
pub struct Tuning {
    pub reference_frequency: f64,
}

impl Tuning {
    /// Return the frequency of a semitone offset within an octave.
    ///
    /// Neither argument is bounded; the offset may leave the octave in either direction.
    pub fn frequency(&self, semitone_offset: i32, octave: i32) -> f64 {
        let octave_factor = 2.0f64.powi(octave - REFERENCE_OCTAVE);
        let semitone_factor = 2.0f64.powf(f64::from(semitone_offset) / f64::from(SEMITONES));
        self.reference_frequency * octave_factor * semitone_factor
    }

    /// Frequency of a pitch, split into its octave and pitch class first.
    pub fn pitch_frequency(&self, pitch: Pitch) -> f64 {
        self.frequency(pitch.class(), pitch.octave())
    }
}

/// Middle C at 261.63 Hz.
impl Default for Tuning {
    fn default() -> Self {
        Tuning {
            reference_frequency: 261.63,
        }
    }
}

/// Frequency of a semitone offset and octave in the default tuning.
pub fn frequency_of(semitone_offset: i32, octave: i32) -> f64 {
    Tuning::default().frequency(semitone_offset, octave)
}
