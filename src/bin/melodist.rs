// melodist -- a generator for random melodies, chords and songs
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! `melodist` - writes random melodies, chord progressions and songs to wav files.

use std::process;

use melodist::app;

fn main() {
    if let Err(err) = app::main() {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
