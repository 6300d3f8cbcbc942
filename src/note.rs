// melodist -- a generator for random melodies, chords and songs
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Definitions of what a pitch is.

use std::fmt;

/// The octave in which a pitch offset of zero lies. Pitch 0 is middle C.
pub const REFERENCE_OCTAVE: i32 = 4;

/// Number of semitones per octave.
pub const SEMITONES: i32 = 12;

/// A pitch measured in semitones relative to C4.
///
/// Unlike MIDI notes, pitches are unbounded in both directions:
/// negative offsets lie below middle C.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Pitch(pub i32);

impl Pitch {
    /// Build a pitch from a pitch class (semitones above C) and an octave.
    ///
    /// # Examples
    ///
    /// ```
    /// use melodist::note::Pitch;
    ///
    /// assert_eq!(Pitch::from_parts(0, 4), Pitch(0));
    /// assert_eq!(Pitch::from_parts(7, 5), Pitch(19));
    /// assert_eq!(Pitch::from_parts(11, 3), Pitch(-1));
    /// ```
    pub fn from_parts(class: i32, octave: i32) -> Pitch {
        Pitch(class + (octave - REFERENCE_OCTAVE) * SEMITONES)
    }

    pub fn offset(self) -> i32 {
        self.0
    }

    /// The octave this pitch lies in. Rounds towards negative infinity,
    /// so B3 (offset -1) is in octave 3.
    pub fn octave(self) -> i32 {
        REFERENCE_OCTAVE + self.0.div_euclid(SEMITONES)
    }

    /// Semitones above the C of this pitch's octave, always in `0..12`.
    pub fn class(self) -> i32 {
        self.0.rem_euclid(SEMITONES)
    }
}

/// The name of a pitch class in standard notation, spelled with sharps.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ClassName(i32);

const CLASS_NAMES: [&str; 12] = [
    "C", "C♯", "D", "D♯", "E", "F", "F♯", "G", "G♯", "A", "A♯", "B",
];

impl ClassName {
    /// Name of the pitch class of any semitone offset.
    pub fn of(semitones: i32) -> ClassName {
        ClassName(semitones.rem_euclid(SEMITONES))
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(CLASS_NAMES[self.0 as usize])
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", ClassName::of(self.0), self.octave())
    }
}
