// melodist -- a generator for random melodies, chords and songs
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Generation requests as offered to the user: compose, render, save.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use log::debug;
use rand::Rng;
use snafu::{ensure, ResultExt};

use super::{CreateOutputDir, Error, SaveAudio, TooMany, WriteOutput};
use crate::compose::{Composer, MELODY_OCTAVES};
use crate::note::ClassName;
use crate::output::write_wav;
use crate::render::{render_chords, render_melody};
use crate::scale::Scale;
use crate::song::Song;
use crate::wave::{AudioFormat, SampleBuffer};

/// Most melody notes a single request may ask for. Also bounds song lengths.
pub const MAX_NOTES: usize = 2048;
/// Most chords a single progression may have.
pub const MAX_CHORDS: usize = 512;
/// Most songs a single batch may produce.
pub const MAX_SONGS: usize = 64;

fn check_count(what: &'static str, count: usize, max: usize) -> Result<(), Error> {
    ensure!(count <= max, TooMany { what, count, max });
    Ok(())
}

/// Everything a run of the generator shares: the composer and where files go.
pub struct Session<R> {
    composer: Composer<R>,
    output_dir: PathBuf,
}

impl<R: Rng> Session<R> {
    pub fn new<P: Into<PathBuf>>(composer: Composer<R>, output_dir: P) -> Self {
        Self {
            composer,
            output_dir: output_dir.into(),
        }
    }

    fn scale_or_random(&mut self, scale: Option<&str>) -> String {
        match scale {
            Some(name) => name.to_string(),
            None => self.composer.random_scale().name().to_string(),
        }
    }

    /// Compose and save a melody. Returns the path of the written file.
    pub fn melody(&mut self, scale: Option<&str>, notes: usize) -> Result<PathBuf, Error> {
        check_count("notes", notes, MAX_NOTES)?;
        let scale = self.scale_or_random(scale);
        let melody = self.composer.melody(&scale, notes, MELODY_OCTAVES);
        let audio = render_melody(&melody);
        self.save(&file_name("melody", &scale, unix_time()), &audio)
    }

    /// Compose and save a chord progression. Returns the path of the written file.
    pub fn chords(&mut self, scale: Option<&str>, chords: usize) -> Result<PathBuf, Error> {
        check_count("chords", chords, MAX_CHORDS)?;
        let scale = self.scale_or_random(scale);
        let progression = self.composer.chord_progression(&scale, chords);
        let audio = render_chords(&progression);
        self.save(&file_name("chords", &scale, unix_time()), &audio)
    }

    /// Compose and save a full song. Returns the written file and the scale that was used.
    pub fn song(&mut self, scale: Option<&str>, length: usize) -> Result<(PathBuf, String), Error> {
        check_count("notes", length, MAX_NOTES)?;
        let song = Song::compose(&mut self.composer, scale, length);
        let path = self.save(&file_name("song", &song.scale, unix_time()), &song.render())?;
        Ok((path, song.scale))
    }

    /// Compose and save `count` songs in random scales, calling `saved` after each one
    /// with its 1-based number, file and scale.
    pub fn batch<F>(&mut self, count: usize, length: usize, mut saved: F) -> Result<(), Error>
    where
        F: FnMut(usize, &Path, &str) -> Result<(), Error>,
    {
        check_count("songs", count, MAX_SONGS)?;
        check_count("notes", length, MAX_NOTES)?;
        for n in 1..=count {
            let song = Song::compose(&mut self.composer, None, length);
            let kind = format!("random_song_{}", n);
            let path = self.save(&file_name(&kind, &song.scale, unix_time()), &song.render())?;
            saved(n, &path, &song.scale)?;
        }
        Ok(())
    }

    fn save(&self, name: &str, audio: &SampleBuffer) -> Result<PathBuf, Error> {
        fs::create_dir_all(&self.output_dir).context(CreateOutputDir {
            path: &self.output_dir,
        })?;
        let path = unique_path(&self.output_dir, name);
        debug!("saving {} samples to {}", audio.len(), path.display());
        write_wav(&path, AudioFormat::PCM16_MONO, audio).context(SaveAudio { path: &path })?;
        Ok(path)
    }
}

/// `dir/name`, or `dir/<stem>_<k>.wav` with the smallest free `k` if that file exists.
fn unique_path(dir: &Path, name: &str) -> PathBuf {
    let stem = Path::new(name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut path = dir.join(name);
    let mut k = 1;
    while path.exists() {
        path = dir.join(format!("{}_{}.wav", stem, k));
        k += 1;
    }
    path
}

/// Seconds since the epoch, used to keep file names apart.
pub fn unix_time() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Build `<kind>_<scale>_<timestamp>.wav`.
///
/// The scale is user input, so everything except ASCII letters, digits,
/// `_` and `-` is replaced to keep the file inside the output directory.
///
/// # Examples
///
/// ```
/// use melodist::app::jobs::file_name;
///
/// assert_eq!(file_name("melody", "blues", 1600000000), "melody_blues_1600000000.wav");
/// assert_eq!(file_name("song", "../up", 7), "song____up_7.wav");
/// ```
pub fn file_name(kind: &str, scale: &str, timestamp: u64) -> String {
    let scale: String = scale
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' {
                ch
            } else {
                '_'
            }
        })
        .collect();
    format!("{}_{}_{}.wav", kind, scale, timestamp)
}

/// Parse a count typed by the user. Anything but plain digits gives `default`.
///
/// # Examples
///
/// ```
/// use melodist::app::jobs::parse_count;
///
/// assert_eq!(parse_count("12", 16), 12);
/// assert_eq!(parse_count(" 0 ", 16), 0);
/// assert_eq!(parse_count("", 16), 16);
/// assert_eq!(parse_count("-3", 16), 16);
/// assert_eq!(parse_count("ten", 16), 16);
/// ```
pub fn parse_count(input: &str, default: usize) -> usize {
    let input = input.trim();
    if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) {
        input.parse().unwrap_or(default)
    } else {
        default
    }
}

/// Human readable table of the scale catalog.
pub fn scale_listing() -> String {
    let rule = "=".repeat(40);
    let mut listing = format!("Available scales:\n{}\n", rule);
    for scale in Scale::ALL.iter() {
        let name = scale.name();
        let names: Vec<String> = scale
            .offsets()
            .iter()
            .map(|&o| ClassName::of(o).to_string())
            .collect();
        listing += &format!(
            "{}{}: {:?} ({})\n",
            name[..1].to_ascii_uppercase(),
            &name[1..],
            scale.offsets(),
            names.join(" ")
        );
    }
    listing += &rule;
    listing += "\nThe numbers are semitones above C.";
    listing
}

/// Print a line for the user.
pub fn announce<W: Write>(out: &mut W, message: &str) -> Result<(), Error> {
    writeln!(out, "{}", message).context(WriteOutput)
}

#[cfg(test)]
mod test {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("melodist-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn wav_len(path: &Path) -> u32 {
        hound::WavReader::open(path).unwrap().len()
    }

    #[test]
    fn files_land_in_the_output_dir() {
        let dir = scratch_dir("jobs-files");
        let mut session = Session::new(Composer::seeded(1), &dir);

        let melody = session.melody(Some("minor"), 4).unwrap();
        assert_eq!(melody.parent(), Some(dir.as_path()));
        let name = melody.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("melody_minor_") && name.ends_with(".wav"));
        assert!(wav_len(&melody) > 0);

        let chords = session.chords(None, 1).unwrap();
        let name = chords.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("chords_"));
        let len = wav_len(&chords);
        assert!(len == 2 * 44100 || len == 4 * 44100);

        let (song, scale) = session.song(None, 4).unwrap();
        assert!(Scale::from_name(&scale).is_some());
        assert!(song.exists());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn batch_numbers_its_songs() {
        let dir = scratch_dir("jobs-batch");
        let mut session = Session::new(Composer::seeded(2), &dir);
        let mut seen = Vec::new();
        session
            .batch(3, 4, |n, path, scale| {
                let name = path.file_name().unwrap().to_string_lossy().into_owned();
                assert!(name.starts_with(&format!("random_song_{}_{}_", n, scale)));
                seen.push(n);
                Ok(())
            })
            .unwrap();
        assert_eq!(seen, vec![1, 2, 3]);
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 3);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn seeded_sessions_write_identical_audio() {
        let a = scratch_dir("jobs-seed-a");
        let b = scratch_dir("jobs-seed-b");
        let (path_a, _) = Session::new(Composer::seeded(5), &a).song(None, 8).unwrap();
        let (path_b, _) = Session::new(Composer::seeded(5), &b).song(None, 8).unwrap();
        assert_eq!(fs::read(&path_a).unwrap(), fs::read(&path_b).unwrap());
        fs::remove_dir_all(&a).unwrap();
        fs::remove_dir_all(&b).unwrap();
    }

    #[test]
    fn unusable_output_dir() {
        let blocker = scratch_dir("jobs-blocker");
        fs::write(&blocker, b"not a directory").unwrap();
        let mut session = Session::new(Composer::seeded(3), blocker.join("out"));
        match session.melody(Some("major"), 1) {
            Err(Error::CreateOutputDir { .. }) => {}
            other => panic!("unexpected result {:?}", other),
        }
        fs::remove_file(&blocker).unwrap();
    }

    #[test]
    fn repeated_requests_keep_earlier_files() {
        let dir = scratch_dir("jobs-repeat");
        let mut session = Session::new(Composer::seeded(4), &dir);
        let first = session.melody(Some("minor"), 2).unwrap();
        let second = session.melody(Some("minor"), 2).unwrap();
        let third = session.melody(Some("minor"), 2).unwrap();
        assert_ne!(first, second);
        assert_ne!(second, third);
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 3);
        assert!(wav_len(&first) > 0);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn counts_are_limited() {
        let dir = scratch_dir("jobs-limits");
        let mut session = Session::new(Composer::seeded(6), &dir);
        match session.melody(Some("minor"), usize::MAX) {
            Err(Error::TooMany { what: "notes", max, .. }) => assert_eq!(max, MAX_NOTES),
            other => panic!("unexpected result {:?}", other),
        }
        assert!(session.chords(None, MAX_CHORDS + 1).is_err());
        assert!(session.song(None, MAX_NOTES + 1).is_err());
        assert!(session.batch(MAX_SONGS + 1, 4, |_, _, _| Ok(())).is_err());
        assert!(session.batch(1, MAX_NOTES + 1, |_, _, _| Ok(())).is_err());
        // nothing was written
        assert!(!dir.exists());
    }

    #[test]
    fn listing_names_every_scale() {
        let listing = scale_listing();
        assert!(listing.contains("Major: [0, 2, 4, 5, 7, 9, 11] (C D E F G A B)"));
        assert!(listing.contains("Blues: [0, 3, 5, 6, 7, 10] (C D♯ F F♯ G A♯)"));
        assert_eq!(listing.lines().filter(|l| l.contains(": [")).count(), 6);
    }
}
