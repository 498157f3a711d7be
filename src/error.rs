//! Error type shared across the crate.
//!
//! Construction errors are reported eagerly from `new` constructors; I/O and
//! transcoder errors come from the [`transcode`](crate::transcode) gateway.
//! All fallible operations return [`Result`].

use std::fmt;
use std::io;

/// Convenience alias used by every fallible function in the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for buffer operations, generator construction, and file I/O.
#[derive(Debug)]
pub enum Error {
    /// A curve needs at least two control points
    TooFewControlPoints(usize),
    /// Control point x-coordinates must be strictly increasing
    ControlPointsNotIncreasing { index: usize, x: f32 },
    /// Control point x-coordinates must lie within [0, 1]
    ControlPointOutOfRange { index: usize, x: f32 },
    /// A scalar parameter fell outside its documented range
    ValueOutOfRange {
        /// Parameter name, e.g. `"decay"`
        name: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
    /// An echo delay of zero samples would feed a sample back into itself
    ZeroDelay,
    /// `repeat` was asked for zero copies
    ZeroRepeat,
    /// An underlying I/O operation failed (includes a missing `ffmpeg` binary)
    Io(io::Error),
    /// The `ffmpeg` subprocess exited with a failure status
    Transcoder {
        /// Exit code if the process returned one
        status: Option<i32>,
        /// Captured standard error, passed through unmodified
        stderr: String,
    },
    /// WAV encoding or decoding failed
    #[cfg(feature = "wav")]
    Wav(hound::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::TooFewControlPoints(n) => {
                write!(f, "curve needs at least 2 control points, got {}", n)
            }
            Error::ControlPointsNotIncreasing { index, x } => {
                write!(f, "control point {} breaks strictly increasing x order (x = {})", index, x)
            }
            Error::ControlPointOutOfRange { index, x } => {
                write!(f, "control point {} has x = {} outside [0, 1]", index, x)
            }
            Error::ValueOutOfRange { name, value, min, max } => {
                write!(f, "{} = {} is outside the allowed range [{}, {}]", name, value, min, max)
            }
            Error::ZeroDelay => write!(f, "echo delay must be at least 1 sample"),
            Error::ZeroRepeat => write!(f, "repeat count must be at least 1"),
            Error::Io(e) => write!(f, "i/o error: {}", e),
            Error::Transcoder { status, stderr } => {
                let stderr = stderr.trim_end();
                match status {
                    Some(code) => write!(f, "ffmpeg exited with status {}: {}", code, stderr),
                    None => write!(f, "ffmpeg terminated by signal: {}", stderr),
                }
            }
            #[cfg(feature = "wav")]
            Error::Wav(e) => write!(f, "wav error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            #[cfg(feature = "wav")]
            Error::Wav(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

#[cfg(feature = "wav")]
impl From<hound::Error> for Error {
    fn from(e: hound::Error) -> Self {
        Error::Wav(e)
    }
}
