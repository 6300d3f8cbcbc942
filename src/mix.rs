// melodist -- a generator for random melodies, chords and songs
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Combining the melody and chord layers into the master buffer.

use crate::wave::{clamp_sample, SampleBuffer};

/// Fixed-gain mixer for the two layers of a song.
///
/// The result is hard clipped. There is no loudness normalization, so loud
/// passages of both layers together are clipped rather than rescaled.
#[derive(Debug, Clone)]
pub struct Mixer {
    pub melody_gain: f64,
    pub chord_gain: f64,
}

impl Default for Mixer {
    fn default() -> Self {
        Mixer {
            melody_gain: 0.7,
            chord_gain: 0.3,
        }
    }
}

impl Mixer {
    /// Mix both layers sample by sample. The shorter layer is padded with silence.
    pub fn mix(&self, melody: &SampleBuffer, chords: &SampleBuffer) -> SampleBuffer {
        let len = melody.len().max(chords.len());
        (0..len)
            .map(|i| {
                let m = f64::from(melody.get_or_silence(i));
                let c = f64::from(chords.get_or_silence(i));
                clamp_sample((m * self.melody_gain + c * self.chord_gain) as i64)
            })
            .collect()
    }
}

/// Mix with the default gains.
///
/// # Examples
///
/// ```
/// use melodist::mix::mix;
/// use melodist::wave::SampleBuffer;
///
/// let melody = SampleBuffer::from(vec![1000, -1000, 1000]);
/// let chords = SampleBuffer::from(vec![1000]);
/// assert_eq!(mix(&melody, &chords).samples(), &[1000, -700, 700]);
/// ```
pub fn mix(melody: &SampleBuffer, chords: &SampleBuffer) -> SampleBuffer {
    Mixer::default().mix(melody, chords)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn pads_the_shorter_layer() {
        let melody: SampleBuffer = (0..1000).map(|i| (i * 30 - 15000) as i16).collect();
        let chords: SampleBuffer = (0..500).map(|i| (i * 50 - 12000) as i16).collect();
        let out = mix(&melody, &chords);
        assert_eq!(out.len(), 1000);
        for i in 500..1000 {
            assert_eq!(out[i], (f64::from(melody[i]) * 0.7) as i16);
        }
        for i in 0..500 {
            let expected = f64::from(melody[i]) * 0.7 + f64::from(chords[i]) * 0.3;
            assert_eq!(out[i], expected as i16);
        }

        let swapped = mix(&chords, &melody);
        assert_eq!(swapped.len(), 1000);
        assert_eq!(swapped[700], (f64::from(melody[700]) * 0.3) as i16);
    }

    #[test]
    fn clips_hard() {
        let loud = Mixer {
            melody_gain: 1.0,
            chord_gain: 1.0,
        };
        let a = SampleBuffer::from(vec![32767, -32767, 20000, 0]);
        let b = SampleBuffer::from(vec![32767, -32767, 20000]);
        let out = loud.mix(&a, &b);
        assert_eq!(out.samples(), &[32767, -32767, 32767, 0]);

        let extremes = SampleBuffer::from(vec![i16::MIN, i16::MAX]);
        let out = mix(&extremes, &extremes);
        assert!(out.samples().iter().all(|s| (-32767..=32767).contains(s)));
    }

    #[test]
    fn truncates_towards_zero() {
        let out = mix(
            &SampleBuffer::from(vec![1, -1, 3]),
            &SampleBuffer::from(vec![1, -1, -3]),
        );
        // 1.0, -1.0, 1.2 before truncation
        assert_eq!(out[2], 1);
        assert!(mix(&SampleBuffer::new(), &SampleBuffer::new()).is_empty());
    }
}
