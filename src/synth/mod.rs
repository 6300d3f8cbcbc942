// melodist -- a generator for random melodies, chords and songs
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! This namespace contains all the parts converting from pitches to wave data.

pub mod chord;
pub mod envelope;
pub mod oscillator;
pub mod tuning;

pub use chord::{render_chord, render_chord_named};
pub use oscillator::render_tone;
pub use tuning::frequency_of;
