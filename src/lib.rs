// melodist -- a generator for random melodies, chords and songs
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Procedural generation of melodies, chord progressions and songs,
//! rendered as 16 bit mono PCM and saved as WAV files.
//!
//! The pipeline runs from [`compose`] through [`render`] and [`mix`] to [`output`].

pub mod app;
pub mod compose;
pub mod mix;
pub mod note;
pub mod output;
pub mod render;
pub mod scale;
pub mod song;
pub mod synth;
pub mod wave;
