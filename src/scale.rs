// melodist -- a generator for random melodies, chords and songs
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! The fixed catalogs of scales, chord shapes and note lengths.
//!
//! Lookups by name never fail: unknown names fall back to the major
//! scale or the major triad respectively.

use std::fmt;

/// A scale defines which pitch classes are in key.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Scale {
    Major,
    Minor,
    Pentatonic,
    Blues,
    Dorian,
    Mixolydian,
}

impl Scale {
    /// All scales in catalog order.
    pub const ALL: [Scale; 6] = [
        Scale::Major,
        Scale::Minor,
        Scale::Pentatonic,
        Scale::Blues,
        Scale::Dorian,
        Scale::Mixolydian,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Scale::Major => "major",
            Scale::Minor => "minor",
            Scale::Pentatonic => "pentatonic",
            Scale::Blues => "blues",
            Scale::Dorian => "dorian",
            Scale::Mixolydian => "mixolydian",
        }
    }

    /// Semitones above C of the pitch classes in this scale, ascending.
    pub fn offsets(self) -> &'static [i32] {
        match self {
            Scale::Major => &[0, 2, 4, 5, 7, 9, 11],
            Scale::Minor => &[0, 2, 3, 5, 7, 8, 10],
            Scale::Pentatonic => &[0, 2, 4, 7, 9],
            Scale::Blues => &[0, 3, 5, 6, 7, 10],
            Scale::Dorian => &[0, 2, 3, 5, 7, 9, 10],
            Scale::Mixolydian => &[0, 2, 4, 5, 7, 9, 10],
        }
    }

    /// Look up a scale by its exact (lowercase) name.
    pub fn from_name(name: &str) -> Option<Scale> {
        Scale::ALL.iter().copied().find(|s| s.name() == name)
    }

    /// Look up a scale by name, falling back to the major scale.
    ///
    /// # Examples
    ///
    /// ```
    /// use melodist::scale::Scale;
    ///
    /// assert_eq!(Scale::named_or_major("dorian"), Scale::Dorian);
    /// assert_eq!(Scale::named_or_major("lydian"), Scale::Major);
    /// ```
    pub fn named_or_major(name: &str) -> Scale {
        Scale::from_name(name).unwrap_or(Scale::Major)
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The shape of a chord as semitone intervals above its root.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ChordType {
    Major,
    Minor,
    Diminished,
    Augmented,
    Seventh,
    MinorSeventh,
}

impl ChordType {
    pub const ALL: [ChordType; 6] = [
        ChordType::Major,
        ChordType::Minor,
        ChordType::Diminished,
        ChordType::Augmented,
        ChordType::Seventh,
        ChordType::MinorSeventh,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ChordType::Major => "major",
            ChordType::Minor => "minor",
            ChordType::Diminished => "diminished",
            ChordType::Augmented => "augmented",
            ChordType::Seventh => "seventh",
            ChordType::MinorSeventh => "minor_seventh",
        }
    }

    pub fn intervals(self) -> &'static [i32] {
        match self {
            ChordType::Major => &[0, 4, 7],
            ChordType::Minor => &[0, 3, 7],
            ChordType::Diminished => &[0, 3, 6],
            ChordType::Augmented => &[0, 4, 8],
            ChordType::Seventh => &[0, 4, 7, 10],
            ChordType::MinorSeventh => &[0, 3, 7, 10],
        }
    }

    pub fn from_name(name: &str) -> Option<ChordType> {
        ChordType::ALL.iter().copied().find(|c| c.name() == name)
    }

    /// Look up a chord type by name, falling back to the major triad.
    ///
    /// # Examples
    ///
    /// ```
    /// use melodist::scale::ChordType;
    ///
    /// assert_eq!(ChordType::named_or_major("minor_seventh"), ChordType::MinorSeventh);
    /// assert_eq!(ChordType::named_or_major("xyz"), ChordType::Major);
    /// ```
    pub fn named_or_major(name: &str) -> ChordType {
        ChordType::from_name(name).unwrap_or(ChordType::Major)
    }
}

impl fmt::Display for ChordType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Chord types a progression draws from.
///
/// Only a request for the major scale by name gets the major palette.
/// Any other name, including unknown ones that fall back to major
/// offsets, gets the minor-flavoured palette.
pub fn chord_palette(scale_name: &str) -> &'static [ChordType] {
    if scale_name == Scale::Major.name() {
        &[ChordType::Major, ChordType::Minor, ChordType::Seventh]
    } else {
        &[ChordType::Minor, ChordType::Major, ChordType::MinorSeventh]
    }
}

/// Named note lengths. The song has no tempo, so lengths are in seconds.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum NoteLength {
    Whole,
    Half,
    Quarter,
    Eighth,
    Sixteenth,
}

impl NoteLength {
    pub const ALL: [NoteLength; 5] = [
        NoteLength::Whole,
        NoteLength::Half,
        NoteLength::Quarter,
        NoteLength::Eighth,
        NoteLength::Sixteenth,
    ];

    pub fn seconds(self) -> f64 {
        match self {
            NoteLength::Whole => 2.0,
            NoteLength::Half => 1.0,
            NoteLength::Quarter => 0.5,
            NoteLength::Eighth => 0.25,
            NoteLength::Sixteenth => 0.125,
        }
    }
}

/// Chords are held longer than melody notes.
pub const CHORD_LENGTHS: [f64; 2] = [2.0, 4.0];

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn names_round_trip() {
        for scale in Scale::ALL.iter() {
            assert_eq!(Scale::from_name(scale.name()), Some(*scale));
        }
        for chord in ChordType::ALL.iter() {
            assert_eq!(ChordType::from_name(chord.name()), Some(*chord));
        }
        assert_eq!(Scale::from_name("Major"), None);
    }

    #[test]
    fn offsets_are_pitch_classes() {
        for scale in Scale::ALL.iter() {
            let offsets = scale.offsets();
            assert_eq!(offsets[0], 0);
            assert!(offsets.windows(2).all(|w| w[0] < w[1]));
            assert!(offsets.iter().all(|o| (0..12).contains(o)));
        }
    }

    #[test]
    fn palettes() {
        assert_eq!(
            chord_palette("major"),
            &[ChordType::Major, ChordType::Minor, ChordType::Seventh]
        );
        assert_eq!(
            chord_palette("blues"),
            &[ChordType::Minor, ChordType::Major, ChordType::MinorSeventh]
        );
        // unknown scales play major offsets over the non-major palette
        assert_eq!(Scale::named_or_major("xyz"), Scale::Major);
        assert_eq!(chord_palette("xyz"), chord_palette("minor"));
    }

    #[test]
    fn lengths() {
        let secs: Vec<f64> = NoteLength::ALL.iter().map(|l| l.seconds()).collect();
        assert_eq!(secs, vec![2.0, 1.0, 0.5, 0.25, 0.125]);
    }
}
