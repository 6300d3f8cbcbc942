// melodist -- a generator for random melodies, chords and songs
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

/// A simplified attack/release envelope whose phases scale with the length of the tone.
///
/// The gain rises linearly from 0.0 to 1.0 over the first `attack` fraction of the samples,
/// holds at 1.0, and falls linearly towards 0.0 over the last `release` fraction.
/// Attack wins where the two regions overlap.
///
/// # Example
///
/// ```
/// use melodist::synth::envelope::*;
/// let e = Envelope::default();
/// // a tone of 100 samples
/// assert_eq!(e.gain(0, 100), 0.0);
/// assert_eq!(e.gain(5, 100), 0.5);
/// assert_eq!(e.gain(10, 100), 1.0);
/// assert_eq!(e.gain(80, 100), 1.0);
/// assert_eq!(e.gain(90, 100), 0.5);
/// assert_eq!(e.gain(99, 100), 0.05);
/// ```
#[derive(Debug, Clone)]
pub struct Envelope {
    /// Fraction of the tone spent rising from 0.0 to 1.0.
    pub attack: f64,
    /// Fraction of the tone spent falling from 1.0 to 0.0.
    pub release: f64,
}

impl Default for Envelope {
    fn default() -> Self {
        Envelope {
            attack: 0.1,
            release: 0.2,
        }
    }
}

impl Envelope {
    /// Evaluate the envelope at sample `index` of a tone lasting `len` samples.
    pub fn gain(&self, index: usize, len: usize) -> f64 {
        let i = index as f64;
        let n = len as f64;
        if i < n * self.attack {
            i / (n * self.attack)
        } else if i > n * (1.0 - self.release) {
            (n - i) / (n * self.release)
        } else {
            1.0
        }
    }
}
