// melodist -- a generator for random melodies, chords and songs
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Random composition of melodies and chord progressions.

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::note::Pitch;
use crate::scale::{chord_palette, ChordType, NoteLength, Scale, CHORD_LENGTHS};

/// Octaves a melody is spread over unless requested otherwise.
pub const MELODY_OCTAVES: (i32, i32) = (4, 5);

/// A single melody note.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PitchEvent {
    /// Which pitch is played, relative to C4
    pub pitch: Pitch,
    /// How long the note is held, in seconds
    pub duration: f64,
}

/// A chord held for some time.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ChordEvent {
    /// Semitones of the chord root above C
    pub root: i32,
    pub chord: ChordType,
    /// How long the chord is held, in seconds
    pub duration: f64,
}

/// Draws random musical material from the scale catalog.
///
/// The composer owns its random generator. All randomness of a run flows
/// through it, so a seeded composer produces the same material every time.
///
/// # Examples
///
/// ```
/// use melodist::compose::*;
///
/// let a = Composer::seeded(7).melody("blues", 8, MELODY_OCTAVES);
/// let b = Composer::seeded(7).melody("blues", 8, MELODY_OCTAVES);
/// assert_eq!(a.len(), 8);
/// assert_eq!(a, b);
/// ```
pub struct Composer<R> {
    rng: R,
}

impl Composer<StdRng> {
    /// A composer whose output is fully determined by `seed`.
    pub fn seeded(seed: u64) -> Self {
        Composer::new(StdRng::seed_from_u64(seed))
    }

    /// A composer seeded from the operating system.
    pub fn from_entropy() -> Self {
        Composer::new(StdRng::from_entropy())
    }
}

impl<R: Rng> Composer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Pick any scale of the catalog.
    pub fn random_scale(&mut self) -> Scale {
        Scale::ALL
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(Scale::Major)
    }

    /// Compose `num_notes` random notes of the named scale.
    ///
    /// Each note draws its pitch class from the scale, its octave from the inclusive
    /// range `octaves` and its length from [`NoteLength::ALL`].
    /// Unknown scales are played as major.
    pub fn melody(
        &mut self,
        scale_name: &str,
        num_notes: usize,
        octaves: (i32, i32),
    ) -> Vec<PitchEvent> {
        let scale = Scale::named_or_major(scale_name);
        let (low, high) = (octaves.0.min(octaves.1), octaves.0.max(octaves.1));

        let melody: Vec<PitchEvent> = (0..num_notes)
            .map(|_| {
                let class = scale.offsets().choose(&mut self.rng).copied().unwrap_or(0);
                let octave = self.rng.gen_range(low..=high);
                let duration = NoteLength::ALL
                    .choose(&mut self.rng)
                    .map_or(NoteLength::Quarter.seconds(), |l| l.seconds());
                PitchEvent {
                    pitch: Pitch::from_parts(class, octave),
                    duration,
                }
            })
            .collect();

        debug!(
            "composed {} notes in {} ({:.2} seconds)",
            melody.len(),
            scale,
            melody.iter().map(|e| e.duration).sum::<f64>()
        );
        melody
    }

    /// Compose `num_chords` random chords rooted in the named scale.
    ///
    /// The chord types come from [`chord_palette`], the lengths from [`CHORD_LENGTHS`].
    pub fn chord_progression(&mut self, scale_name: &str, num_chords: usize) -> Vec<ChordEvent> {
        let scale = Scale::named_or_major(scale_name);
        let palette = chord_palette(scale_name);

        let progression: Vec<ChordEvent> = (0..num_chords)
            .map(|_| {
                let root = scale.offsets().choose(&mut self.rng).copied().unwrap_or(0);
                let chord = palette
                    .choose(&mut self.rng)
                    .copied()
                    .unwrap_or(ChordType::Major);
                let duration = CHORD_LENGTHS
                    .choose(&mut self.rng)
                    .copied()
                    .unwrap_or(CHORD_LENGTHS[0]);
                ChordEvent {
                    root,
                    chord,
                    duration,
                }
            })
            .collect();

        debug!(
            "composed {} chords in {}: {}",
            progression.len(),
            scale,
            progression
                .iter()
                .map(|c| format!("{}:{}", c.root, c.chord))
                .collect::<Vec<_>>()
                .join(" ")
        );
        progression
    }
}
