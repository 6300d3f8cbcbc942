// melodist -- a generator for random melodies, chords and songs
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! The interactive text menu.
//!
//! Generation failures are shown to the user and the menu keeps running.
//! Only failures of the terminal itself end the session.

use std::io::{BufRead, Write};

use log::error;
use rand::Rng;
use snafu::ResultExt;

use super::jobs::{announce, parse_count, scale_listing, Session};
use super::{Error, ReadInput, WriteOutput};
use crate::scale::Scale;
use crate::song::DEFAULT_SONG_LENGTH;

const DEFAULT_MELODY_NOTES: usize = 16;
const DEFAULT_CHORDS: usize = 4;
const DEFAULT_BATCH_SONGS: usize = 3;

/// Run the menu until the user exits or the input ends.
pub fn run<R: Rng, I: BufRead, O: Write>(
    session: &mut Session<R>,
    input: I,
    output: O,
) -> Result<(), Error> {
    Menu {
        session,
        input,
        output,
    }
    .run()
}

struct Menu<'s, R, I, O> {
    session: &'s mut Session<R>,
    input: I,
    output: O,
}

impl<'s, R: Rng, I: BufRead, O: Write> Menu<'s, R, I, O> {
    fn run(&mut self) -> Result<(), Error> {
        loop {
            self.print_menu()?;
            let choice = match self.prompt("Choose an option (1-6): ")? {
                Some(choice) => choice,
                None => return Ok(()),
            };
            match choice.as_str() {
                "1" => self.melody()?,
                "2" => self.chords()?,
                "3" => self.song()?,
                "4" => self.batch()?,
                "5" => announce(&mut self.output, &format!("\n{}", scale_listing()))?,
                "6" => return announce(&mut self.output, "\nGoodbye!"),
                _ => announce(
                    &mut self.output,
                    "Invalid option. Please choose a number from 1 to 6.",
                )?,
            }
            if self.prompt("\nPress Enter to continue...")?.is_none() {
                return Ok(());
            }
        }
    }

    fn print_menu(&mut self) -> Result<(), Error> {
        let rule = "=".repeat(50);
        announce(
            &mut self.output,
            &format!(
                "\n{rule}\nRANDOM MUSIC GENERATOR\n{rule}\n\
                 1. Generate a melody\n\
                 2. Generate a chord progression\n\
                 3. Generate a full song\n\
                 4. Generate several songs\n\
                 5. Show available scales\n\
                 6. Exit\n{rule}",
                rule = rule
            ),
        )
    }

    /// Show `text` and read one line. `None` at the end of the input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>, Error> {
        write!(self.output, "{}", text).context(WriteOutput)?;
        self.output.flush().context(WriteOutput)?;
        let mut line = String::new();
        let read = self.input.read_line(&mut line).context(ReadInput)?;
        if read == 0 {
            Ok(None)
        } else {
            Ok(Some(line.trim().to_string()))
        }
    }

    /// Ask for a scale name. Empty input means a random scale.
    fn prompt_scale(&mut self) -> Result<Option<String>, Error> {
        let names: Vec<&str> = Scale::ALL.iter().map(|s| s.name()).collect();
        let text = format!("Scale ({}) [Enter for random]: ", names.join("/"));
        Ok(self.prompt(&text)?.filter(|s| !s.is_empty()))
    }

    fn prompt_count(&mut self, text: &str, default: usize) -> Result<usize, Error> {
        let text = format!("{} [{}]: ", text, default);
        Ok(self
            .prompt(&text)?
            .map_or(default, |input| parse_count(&input, default)))
    }

    /// Tell the user how a generation request went.
    fn report<T, F: FnOnce(T) -> String>(
        &mut self,
        outcome: Result<T, Error>,
        describe: F,
    ) -> Result<(), Error> {
        match outcome {
            Ok(done) => announce(&mut self.output, &describe(done)),
            Err(err) => {
                error!("{}", err);
                announce(&mut self.output, &format!("Error: {}", err))
            }
        }
    }

    fn melody(&mut self) -> Result<(), Error> {
        announce(&mut self.output, "\nGenerating a melody...")?;
        let scale = self.prompt_scale()?;
        let notes = self.prompt_count("Number of notes", DEFAULT_MELODY_NOTES)?;
        let outcome = self.session.melody(scale.as_deref(), notes);
        self.report(outcome, |path| format!("Melody saved as: {}", path.display()))
    }

    fn chords(&mut self) -> Result<(), Error> {
        announce(&mut self.output, "\nGenerating a chord progression...")?;
        let scale = self.prompt_scale()?;
        let chords = self.prompt_count("Number of chords", DEFAULT_CHORDS)?;
        let outcome = self.session.chords(scale.as_deref(), chords);
        self.report(outcome, |path| format!("Chords saved as: {}", path.display()))
    }

    fn song(&mut self) -> Result<(), Error> {
        announce(&mut self.output, "\nGenerating a full song...")?;
        let scale = self.prompt_scale()?;
        let length = self.prompt_count("Song length in notes", DEFAULT_SONG_LENGTH)?;
        let outcome = self.session.song(scale.as_deref(), length);
        self.report(outcome, |(path, scale)| {
            format!("Song saved as: {}\nScale used: {}", path.display(), scale)
        })
    }

    fn batch(&mut self) -> Result<(), Error> {
        announce(&mut self.output, "\nGenerating several songs...")?;
        let count = self.prompt_count("How many songs", DEFAULT_BATCH_SONGS)?;
        announce(&mut self.output, &format!("Generating {} songs...", count))?;

        let Menu {
            session, output, ..
        } = &mut *self;
        let outcome = session.batch(count, DEFAULT_SONG_LENGTH, |n, path, scale| {
            announce(
                &mut *output,
                &format!("Song {} saved: {} (scale: {})", n, path.display(), scale),
            )
        });
        self.report(outcome, |()| "Done.".to_string())
    }
}
