//! Audio file input and output.
//!
//! Two paths in and out of a [`Block`]: WAV files are handled in-process
//! through `hound` (feature `wav`, enabled by default), and everything else
//! goes through an external `ffmpeg` subprocess exchanging raw little-endian
//! `f32` mono PCM on stdin/stdout. The subprocess is the whole integration:
//! its failures are surfaced unmodified and never retried.

use std::fs;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;

use log::{debug, warn};

use crate::block::Block;
use crate::error::{Error, Result};

/// Decodes any audio file `ffmpeg` understands into a mono block at
/// `sample_rate`.
///
/// Multi-channel input is downmixed and resampled by `ffmpeg` itself; the
/// returned block holds its output verbatim.
///
/// # Errors
///
/// Returns [`Error::Io`] when the `ffmpeg` binary cannot be spawned (most
/// commonly because it is not installed) and [`Error::Transcoder`] with the
/// captured stderr when it rejects the file.
pub fn from_file(path: impl AsRef<Path>, sample_rate: u32) -> Result<Block> {
    let path = path.as_ref();
    debug!("decoding {} at {} Hz via ffmpeg", path.display(), sample_rate);
    let output = Command::new("ffmpeg")
        .args(["-loglevel", "error", "-i"])
        .arg(path)
        .args(["-f", "f32le", "-acodec", "pcm_f32le", "-ac", "1", "-ar"])
        .arg(sample_rate.to_string())
        .arg("-")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()?;
    if !output.status.success() {
        return Err(transcoder_error(&output.status, &output.stderr));
    }
    Ok(Block::from_samples_with_rate(
        bytes_to_samples(&output.stdout),
        sample_rate,
    ))
}

/// Encodes a block into whatever container and codec the output path's
/// extension selects, via `ffmpeg`.
///
/// Missing parent directories are created. An existing file is overwritten
/// with a logged warning.
///
/// # Errors
///
/// Same as [`from_file`].
pub fn write(block: &Block, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    create_parent_dirs(path)?;
    warn_on_overwrite(path);
    debug!(
        "encoding {} samples at {} Hz to {} via ffmpeg",
        block.len(),
        block.sample_rate(),
        path.display()
    );
    let mut child = Command::new("ffmpeg")
        .args(["-loglevel", "error", "-y"])
        .args(["-f", "f32le", "-acodec", "pcm_f32le", "-ac", "1", "-ar"])
        .arg(block.sample_rate().to_string())
        .args(["-i", "-"])
        .arg(path)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;
    // Feed stdin from its own thread while this one drains stdout and
    // stderr; a one-sided write can stall against a chatty child once a
    // pipe buffer fills.
    let bytes = samples_to_bytes(block.samples());
    let feeder = child
        .stdin
        .take()
        .map(|stdin| thread::spawn(move || feed_stdin(stdin, &bytes)));
    let output = child.wait_with_output()?;
    let fed = match feeder {
        Some(handle) => handle
            .join()
            .unwrap_or_else(|_| Err(io::Error::other("sample feeder thread panicked"))),
        None => Ok(()),
    };
    if !output.status.success() {
        return Err(transcoder_error(&output.status, &output.stderr));
    }
    fed?;
    Ok(())
}

/// Streams the raw sample bytes into the child's stdin.
///
/// A broken pipe means ffmpeg already exited; its stderr and exit status
/// tell the story, so it is not reported from here.
fn feed_stdin(mut sink: impl io::Write, bytes: &[u8]) -> io::Result<()> {
    match sink.write_all(bytes) {
        Err(e) if e.kind() != io::ErrorKind::BrokenPipe => Err(e),
        _ => Ok(()),
    }
}

/// Reads a WAV file into a mono block at the file's own sample rate.
///
/// Integer WAVs are scaled to [-1, 1] floats; multi-channel files are
/// downmixed by averaging each frame.
#[cfg(feature = "wav")]
pub fn read_wav(path: impl AsRef<Path>) -> Result<Block> {
    decode_wav(hound::WavReader::open(path)?)
}

/// Writes a block as a 32-bit float mono WAV file.
///
/// Missing parent directories are created. An existing file is overwritten
/// with a logged warning.
#[cfg(feature = "wav")]
pub fn write_wav(block: &Block, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    create_parent_dirs(path)?;
    warn_on_overwrite(path);
    let writer = hound::WavWriter::create(path, wav_spec(block.sample_rate()))?;
    encode_wav(block, writer)
}

#[cfg(feature = "wav")]
fn wav_spec(sample_rate: u32) -> hound::WavSpec {
    hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    }
}

#[cfg(feature = "wav")]
fn decode_wav<R: io::Read>(mut reader: hound::WavReader<R>) -> Result<Block> {
    let spec = reader.spec();
    let interleaved: Vec<f32> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .samples::<f32>()
            .collect::<std::result::Result<_, _>>()?,
        hound::SampleFormat::Int => {
            let scale = (1_i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / scale))
                .collect::<std::result::Result<_, _>>()?
        }
    };
    Ok(Block::from_samples_with_rate(
        downmix(interleaved, spec.channels as usize),
        spec.sample_rate,
    ))
}

#[cfg(feature = "wav")]
fn encode_wav<W: io::Write + io::Seek>(
    block: &Block,
    mut writer: hound::WavWriter<W>,
) -> Result<()> {
    for sample in block.samples() {
        writer.write_sample(*sample)?;
    }
    writer.finalize()?;
    Ok(())
}

/// Averages interleaved frames down to one channel.
#[cfg(feature = "wav")]
fn downmix(interleaved: Vec<f32>, channels: usize) -> Vec<f32> {
    if channels <= 1 {
        return interleaved;
    }
    interleaved
        .chunks(channels)
        .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
        .collect()
}

fn create_parent_dirs(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

fn warn_on_overwrite(path: &Path) {
    if path.exists() {
        warn!("{} already exists and will be overwritten", path.display());
    }
}

fn transcoder_error(status: &std::process::ExitStatus, stderr: &[u8]) -> Error {
    Error::Transcoder {
        status: status.code(),
        stderr: String::from_utf8_lossy(stderr).into_owned(),
    }
}

/// Interprets a raw little-endian `f32` stream; a trailing partial value is
/// dropped.
fn bytes_to_samples(bytes: &[u8]) -> Vec<f32> {
    bytes
        .chunks_exact(4)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}

fn samples_to_bytes(samples: &[f32]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(samples.len() * 4);
    for sample in samples {
        bytes.extend_from_slice(&sample.to_le_bytes());
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSink {
        accepted: usize,
        kind: io::ErrorKind,
    }

    impl io::Write for FailingSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.accepted == 0 {
                return Err(io::Error::new(self.kind, "sink failed"));
            }
            let n = buf.len().min(self.accepted);
            self.accepted -= n;
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_byte_stream_round_trip() {
        let samples = vec![0.0, 1.0, -1.0, 0.5, f32::MIN_POSITIVE];
        let bytes = samples_to_bytes(&samples);
        assert_eq!(bytes.len(), samples.len() * 4);
        assert_eq!(bytes_to_samples(&bytes), samples);
    }

    #[test]
    fn test_partial_trailing_bytes_are_dropped() {
        let mut bytes = samples_to_bytes(&[0.25, 0.75]);
        bytes.push(0xFF);
        assert_eq!(bytes_to_samples(&bytes), vec![0.25, 0.75]);
    }

    #[test]
    fn test_missing_input_surfaces_an_error() {
        let result = from_file("/nonexistent/input.opus", 44_100);
        // Io when the binary is absent, Transcoder when it runs and rejects
        // the input.
        assert!(matches!(result, Err(Error::Io(_) | Error::Transcoder { .. })));
    }

    #[test]
    fn test_feeding_a_closed_pipe_is_not_an_error() {
        let sink = FailingSink {
            accepted: 4,
            kind: io::ErrorKind::BrokenPipe,
        };
        assert!(feed_stdin(sink, &samples_to_bytes(&[0.5; 8])).is_ok());
    }

    #[test]
    fn test_other_feed_failures_propagate() {
        let sink = FailingSink {
            accepted: 0,
            kind: io::ErrorKind::PermissionDenied,
        };
        let result = feed_stdin(sink, &samples_to_bytes(&[0.5; 2]));
        assert!(matches!(result, Err(e) if e.kind() == io::ErrorKind::PermissionDenied));
    }

    #[cfg(feature = "wav")]
    #[test]
    fn test_wav_round_trip_is_byte_faithful() {
        let block = Block::from_samples_with_rate(vec![0.0, 0.25, -0.5, 1.0, -1.0], 22_050);
        let mut cursor = io::Cursor::new(Vec::new());
        let writer = hound::WavWriter::new(&mut cursor, wav_spec(block.sample_rate())).unwrap();
        encode_wav(&block, writer).unwrap();

        cursor.set_position(0);
        let decoded = decode_wav(hound::WavReader::new(cursor).unwrap()).unwrap();
        assert_eq!(decoded.samples(), block.samples());
        assert_eq!(decoded.sample_rate(), 22_050);
    }

    #[cfg(feature = "wav")]
    #[test]
    fn test_int_wav_scales_to_unit_floats() {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: 8_000,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut cursor = io::Cursor::new(Vec::new());
        let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
        for v in [0_i16, i16::MAX, i16::MIN, 16_384] {
            writer.write_sample(v).unwrap();
        }
        writer.finalize().unwrap();

        cursor.set_position(0);
        let decoded = decode_wav(hound::WavReader::new(cursor).unwrap()).unwrap();
        let samples = decoded.samples();
        assert_eq!(samples[0], 0.0);
        assert!((samples[1] - 1.0).abs() < 1e-4);
        assert_eq!(samples[2], -1.0);
        assert!((samples[3] - 0.5).abs() < 1e-4);
    }

    #[cfg(feature = "wav")]
    #[test]
    fn test_stereo_wav_downmixes_by_averaging() {
        let spec = hound::WavSpec {
            channels: 2,
            sample_rate: 44_100,
            bits_per_sample: 32,
            sample_format: hound::SampleFormat::Float,
        };
        let mut cursor = io::Cursor::new(Vec::new());
        let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
        for v in [1.0_f32, 0.0, 0.5, -0.5, -1.0, -1.0] {
            writer.write_sample(v).unwrap();
        }
        writer.finalize().unwrap();

        cursor.set_position(0);
        let decoded = decode_wav(hound::WavReader::new(cursor).unwrap()).unwrap();
        assert_eq!(decoded.samples(), &[0.5, 0.0, -1.0]);
    }

    #[cfg(feature = "wav")]
    #[test]
    fn test_downmix_mono_is_untouched() {
        let samples = vec![0.1, 0.2, 0.3];
        assert_eq!(downmix(samples.clone(), 1), samples);
    }
}
