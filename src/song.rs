// melodist -- a generator for random melodies, chords and songs
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! High-level description of a song that can be turned into audio.

use log::info;
use rand::Rng;

use crate::compose::{ChordEvent, Composer, PitchEvent, MELODY_OCTAVES};
use crate::mix::Mixer;
use crate::render::{render_chords, render_melody};
use crate::wave::SampleBuffer;

/// Number of melody notes in a song unless requested otherwise.
pub const DEFAULT_SONG_LENGTH: usize = 32;

/// Melody notes per chord of the accompanying progression.
pub const NOTES_PER_CHORD: usize = 4;

/// A description of a complete song: a melody over a chord progression.
#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    /// Name of the scale as requested. Unknown names are played as major.
    pub scale: String,
    pub melody: Vec<PitchEvent>,
    pub progression: Vec<ChordEvent>,
}

impl Song {
    /// Compose a song of `length` melody notes and `length / 4` chords.
    /// Without a scale name, a random scale of the catalog is used.
    pub fn compose<R: Rng>(composer: &mut Composer<R>, scale: Option<&str>, length: usize) -> Song {
        let scale = match scale {
            Some(name) => name.to_string(),
            None => composer.random_scale().name().to_string(),
        };
        info!("composing song in {} scale", scale);

        let melody = composer.melody(&scale, length, MELODY_OCTAVES);
        let progression = composer.chord_progression(&scale, length / NOTES_PER_CHORD);
        info!(
            "{} melody notes, {} chords",
            melody.len(),
            progression.len()
        );

        Song {
            scale,
            melody,
            progression,
        }
    }

    /// Render both layers and mix them into the master buffer.
    pub fn render(&self) -> SampleBuffer {
        let melody = render_melody(&self.melody);
        let chords = render_chords(&self.progression);
        let master = Mixer::default().mix(&melody, &chords);
        info!(
            "total length {} samples ({:.2} seconds)",
            master.len(),
            master.seconds()
        );
        master
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::scale::Scale;
    use crate::wave::sample_count;

    #[test]
    fn shape_of_a_song() {
        let mut comp = Composer::seeded(11);
        let song = Song::compose(&mut comp, Some("dorian"), 10);
        assert_eq!(song.scale, "dorian");
        assert_eq!(song.melody.len(), 10);
        assert_eq!(song.progression.len(), 2);

        let audio = song.render();
        let melody_len: usize = song.melody.iter().map(|n| sample_count(n.duration)).sum();
        let chord_len: usize = song
            .progression
            .iter()
            .map(|c| sample_count(c.duration))
            .sum();
        assert_eq!(audio.len(), melody_len.max(chord_len));
        assert!(audio.peak() <= 32767);
    }

    #[test]
    fn random_scale_comes_from_catalog() {
        let mut comp = Composer::seeded(12);
        for _ in 0..10 {
            let song = Song::compose(&mut comp, None, 4);
            assert!(Scale::from_name(&song.scale).is_some());
            assert_eq!(song.progression.len(), 1);
        }
    }

    #[test]
    fn short_songs_have_no_chords() {
        let mut comp = Composer::seeded(13);
        let song = Song::compose(&mut comp, Some("blues"), 3);
        assert!(song.progression.is_empty());
        let melody = render_melody(&song.melody);
        assert_eq!(song.render(), Mixer::default().mix(&melody, &SampleBuffer::new()));
    }

    #[test]
    fn seeded_songs_are_identical() {
        let render = |seed| Song::compose(&mut Composer::seeded(seed), None, 8).render();
        assert_eq!(render(99), render(99));
    }
}
