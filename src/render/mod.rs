// melodist -- a generator for random melodies, chords and songs
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! The glue responsible for turning composed sequences into actual waveforms.

use log::trace;

use crate::compose::{ChordEvent, PitchEvent};
use crate::synth::chord::render_chord;
use crate::synth::oscillator::{render_tone, TONE_AMPLITUDE};
use crate::synth::tuning::Tuning;
use crate::wave::{sample_count, SampleBuffer};

/// Octave the harmony is played in, one below the melody.
pub const CHORD_OCTAVE: i32 = 3;

/// Something that occupies a stretch of a track and can be turned into sound.
pub trait RenderEvent {
    /// Length of the event in seconds.
    fn duration(&self) -> f64;

    /// Render the event on its own, starting at sample zero.
    fn render(&self) -> SampleBuffer;
}

impl RenderEvent for PitchEvent {
    fn duration(&self) -> f64 {
        self.duration
    }

    fn render(&self) -> SampleBuffer {
        let frequency = Tuning::default().pitch_frequency(self.pitch);
        trace!("note {} at {:.2} Hz for {}s", self.pitch, frequency, self.duration);
        render_tone(frequency, self.duration, TONE_AMPLITUDE)
    }
}

impl RenderEvent for ChordEvent {
    fn duration(&self) -> f64 {
        self.duration
    }

    fn render(&self) -> SampleBuffer {
        trace!("chord {} on {} for {}s", self.chord, self.root, self.duration);
        render_chord(self.root, self.chord, CHORD_OCTAVE, self.duration)
    }
}

/// Play the events one after the other, without overlap.
pub fn render_track<E: RenderEvent>(events: &[E]) -> SampleBuffer {
    let total = events.iter().map(|e| sample_count(e.duration())).sum();
    let mut track = SampleBuffer::with_capacity(total);
    for event in events {
        track.append(&event.render());
    }
    track
}

pub fn render_melody(melody: &[PitchEvent]) -> SampleBuffer {
    render_track(melody)
}

pub fn render_chords(progression: &[ChordEvent]) -> SampleBuffer {
    render_track(progression)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::note::Pitch;
    use crate::scale::ChordType;
    use crate::synth::tuning::frequency_of;

    fn note(offset: i32, duration: f64) -> PitchEvent {
        PitchEvent {
            pitch: Pitch(offset),
            duration,
        }
    }

    #[test]
    fn melody_concatenates() {
        let melody = vec![note(0, 0.5), note(16, 0.125), note(-1, 0.25)];
        let track = render_melody(&melody);
        assert_eq!(track.len(), 22050 + 5513 + 11025);

        let e5 = render_tone(frequency_of(4, 5), 0.125, TONE_AMPLITUDE);
        assert_eq!(&track.samples()[22050..22050 + 5513], e5.samples());
    }

    #[test]
    fn negative_offsets_wrap_into_lower_octave() {
        let b3 = render_melody(&[note(-1, 0.25)]);
        assert_eq!(b3, render_tone(frequency_of(11, 3), 0.25, TONE_AMPLITUDE));
        let a2 = render_melody(&[note(-15, 0.25)]);
        assert_eq!(a2, render_tone(frequency_of(9, 2), 0.25, TONE_AMPLITUDE));
    }

    #[test]
    fn chords_sit_an_octave_lower() {
        let progression = vec![
            ChordEvent {
                root: 9,
                chord: ChordType::Minor,
                duration: 2.0,
            },
            ChordEvent {
                root: 5,
                chord: ChordType::Seventh,
                duration: 4.0,
            },
        ];
        let track = render_chords(&progression);
        assert_eq!(track.len(), 6 * 44100);
        let second = render_chord(5, ChordType::Seventh, 3, 4.0);
        assert_eq!(&track.samples()[2 * 44100..], second.samples());
    }

    #[test]
    fn empty_tracks() {
        assert!(render_melody(&[]).is_empty());
        assert!(render_chords(&[]).is_empty());
        assert!(render_melody(&[note(3, 0.0)]).is_empty());
    }
}
