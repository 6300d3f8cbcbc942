// melodist -- a generator for random melodies, chords and songs
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Writing sample buffers as uncompressed PCM WAV files.

use std::io::{Seek, Write};
use std::path::{Path, PathBuf};

use hound::{SampleFormat, WavSpec, WavWriter};
use log::info;
use snafu::{ResultExt, Snafu};

use crate::wave::{AudioFormat, SampleBuffer};

#[derive(Debug, Snafu)]
pub enum WavError {
    #[snafu(display("Could not create {}: {}", path.display(), source))]
    CreateFile { path: PathBuf, source: hound::Error },
    #[snafu(display("Could not write the WAV header: {}", source))]
    WriteHeader { source: hound::Error },
    #[snafu(display("Could not write samples: {}", source))]
    WriteSamples { source: hound::Error },
    #[snafu(display("Could not finish the WAV header: {}", source))]
    FinalizeFile { source: hound::Error },
}

/// The WAV header describing integer PCM samples of the given format.
pub fn wav_spec(format: AudioFormat) -> WavSpec {
    WavSpec {
        channels: format.channels,
        sample_rate: format.sample_rate,
        bits_per_sample: format.bits_per_sample,
        sample_format: SampleFormat::Int,
    }
}

fn write_samples<W: Write + Seek>(
    mut writer: WavWriter<W>,
    samples: &SampleBuffer,
) -> Result<(), WavError> {
    for &sample in samples.samples() {
        writer.write_sample(sample).context(WriteSamples)?;
    }
    writer.finalize().context(FinalizeFile)
}

/// Write a WAV stream to any seekable writer, e.g. an in-memory cursor.
pub fn write_wav_to<W: Write + Seek>(
    writer: W,
    format: AudioFormat,
    samples: &SampleBuffer,
) -> Result<(), WavError> {
    let wav = WavWriter::new(writer, wav_spec(format)).context(WriteHeader)?;
    write_samples(wav, samples)
}

/// Create (or truncate) the file at `path` and write the samples to it.
pub fn write_wav(path: &Path, format: AudioFormat, samples: &SampleBuffer) -> Result<(), WavError> {
    let wav = WavWriter::create(path, wav_spec(format)).context(CreateFile { path })?;
    write_samples(wav, samples)?;
    info!(
        "wrote {} samples ({:.2} seconds) to {}",
        samples.len(),
        samples.seconds(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::{self, Cursor, SeekFrom};

    struct Unwritable;

    impl Write for Unwritable {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Seek for Unwritable {
        fn seek(&mut self, _: SeekFrom) -> io::Result<u64> {
            Ok(0)
        }
    }

    fn encode(samples: &SampleBuffer) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        write_wav_to(&mut cursor, AudioFormat::PCM16_MONO, samples).unwrap();
        cursor.into_inner()
    }

    #[test]
    fn header_and_payload() {
        let samples = SampleBuffer::from(vec![0, 1, -1, 32767, -32767]);
        let bytes = encode(&samples);
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WAVE");
        // little endian 16 bit payload at the end of the file
        let payload = &bytes[bytes.len() - 10..];
        assert_eq!(payload, &[0, 0, 1, 0, 0xff, 0xff, 0xff, 0x7f, 0x01, 0x80]);

        let reader = hound::WavReader::new(Cursor::new(bytes)).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 44100);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(spec.sample_format, SampleFormat::Int);
        let read: Vec<i16> = reader.into_samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(read, samples.samples());
    }

    #[test]
    fn empty_buffers_still_have_a_header() {
        let bytes = encode(&SampleBuffer::new());
        let reader = hound::WavReader::new(Cursor::new(bytes)).unwrap();
        assert_eq!(reader.len(), 0);
    }

    #[test]
    fn missing_directory() {
        let path = std::env::temp_dir()
            .join("melodist-no-such-dir")
            .join("nested")
            .join("out.wav");
        match write_wav(&path, AudioFormat::PCM16_MONO, &SampleBuffer::new()) {
            Err(WavError::CreateFile { path: p, .. }) => assert_eq!(p, path),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn header_failures_are_reported_as_such() {
        match write_wav_to(Unwritable, AudioFormat::PCM16_MONO, &SampleBuffer::new()) {
            Err(WavError::WriteHeader { .. }) => {}
            other => panic!("unexpected result {:?}", other),
        }
    }
}
