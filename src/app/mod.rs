// melodist -- a generator for random melodies, chords and songs
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! The command line front-end: one-shot subcommands and the interactive menu.

pub mod jobs;
pub mod menu;

use std::io;
use std::path::PathBuf;

use log::info;
use snafu::{ResultExt, Snafu};
use structopt::StructOpt;

use crate::compose::Composer;
use crate::output::WavError;

pub use jobs::Session;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Could not create output directory {}: {}", path.display(), source))]
    CreateOutputDir { path: PathBuf, source: io::Error },
    #[snafu(display("Could not save {}: {}", path.display(), source))]
    SaveAudio { path: PathBuf, source: WavError },
    #[snafu(display("Cannot generate {} {}, the limit is {}", count, what, max))]
    TooMany {
        what: &'static str,
        count: usize,
        max: usize,
    },
    #[snafu(display("Could not read input: {}", source))]
    ReadInput { source: io::Error },
    #[snafu(display("Could not write to the terminal: {}", source))]
    WriteOutput { source: io::Error },
    #[snafu(display("Could not set up logging: {}", source))]
    InitLogger { source: log::SetLoggerError },
}

#[derive(Debug, StructOpt)]
#[structopt(name = "melodist", about = "Generating random music")]
struct Opt {
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    verbose: usize,

    /// Seed of the random generator. Runs with the same seed and arguments produce identical audio.
    #[structopt(long)]
    seed: Option<u64>,

    /// Directory the generated WAV files are written to.
    #[structopt(short, long, parse(from_os_str), default_value = ".")]
    output_dir: PathBuf,

    #[structopt(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Generate a random melody.
    Melody {
        /// Scale to draw notes from. Random if not given.
        #[structopt(short, long)]
        scale: Option<String>,
        /// Number of notes, at most 2048.
        #[structopt(short, long, default_value = "16")]
        notes: usize,
    },
    /// Generate a random chord progression.
    Chords {
        /// Scale to root the chords in. Random if not given.
        #[structopt(short, long)]
        scale: Option<String>,
        /// Number of chords, at most 512.
        #[structopt(short, long, default_value = "4")]
        chords: usize,
    },
    /// Generate a song: a melody over a chord progression.
    Song {
        /// Scale of the song. Random if not given.
        #[structopt(short, long)]
        scale: Option<String>,
        /// Number of melody notes, at most 2048. The progression has a quarter as many chords.
        #[structopt(short, long, default_value = "32")]
        length: usize,
    },
    /// Generate several songs, each in a random scale.
    Batch {
        /// Number of songs, at most 64.
        #[structopt(short, long, default_value = "3")]
        count: usize,
        /// Melody notes per song, at most 2048.
        #[structopt(short, long, default_value = "32")]
        length: usize,
    },
    /// List the available scales.
    Scales,
    /// Interactive menu. This is the default.
    Menu,
}

/// Entry point of the `melodist` binary.
pub fn main() -> Result<(), Error> {
    let opt = Opt::from_args();

    let level = match opt.verbose {
        0 => log::Level::Info,
        1 => log::Level::Debug,
        _ => log::Level::Trace,
    };
    simple_logger::init_with_level(level).context(InitLogger)?;

    let composer = match opt.seed {
        Some(seed) => {
            info!("using seed {}", seed);
            Composer::seeded(seed)
        }
        None => Composer::from_entropy(),
    };
    let mut session = Session::new(composer, opt.output_dir);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match opt.command.unwrap_or(Command::Menu) {
        Command::Melody { scale, notes } => {
            let path = session.melody(scale.as_deref(), notes)?;
            jobs::announce(&mut out, &format!("Melody saved as: {}", path.display()))
        }
        Command::Chords { scale, chords } => {
            let path = session.chords(scale.as_deref(), chords)?;
            jobs::announce(&mut out, &format!("Chords saved as: {}", path.display()))
        }
        Command::Song { scale, length } => {
            let (path, scale) = session.song(scale.as_deref(), length)?;
            jobs::announce(
                &mut out,
                &format!("Song saved as: {} (scale: {})", path.display(), scale),
            )
        }
        Command::Batch { count, length } => {
            session.batch(count, length, |n, path, scale| {
                jobs::announce(
                    &mut out,
                    &format!("Song {} saved: {} (scale: {})", n, path.display(), scale),
                )
            })
        }
        Command::Scales => jobs::announce(&mut out, &jobs::scale_listing()),
        Command::Menu => {
            let stdin = io::stdin();
            let input = stdin.lock();
            menu::run(&mut session, input, out)
        }
    }
}
