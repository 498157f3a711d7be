//! Feedback echo.

use crate::block::Block;
use crate::error::{Error, Result};
use crate::source::Source;
use crate::wave::Wave;

/// A feedback delay line over the host buffer.
///
/// `generate` returns the echo *tail*: zero until `delay` samples in, then
/// each sample feeds back the host plus the tail so far, scaled by `decay`.
/// Adding the tail to the host gives the recurrence
/// `out[i] = in[i] + out[i - delay] * decay[i]`, where every repetition of a
/// sound carries its own echoes with it.
///
/// A decay of 0 produces an all-zero tail, so applying the echo leaves the
/// host unchanged; a delay longer than the buffer never fires.
///
/// # Examples
///
/// ```
/// use ditty::{Block, effects::Echo};
///
/// let hit = Block::from_samples(vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0]);
/// let echoed = hit.add(&Echo::new(2, 0.5)?);
/// assert_eq!(echoed.samples(), &[1.0, 0.0, 0.5, 0.0, 1.25, 0.0, 0.625, 0.0]);
/// # Ok::<(), ditty::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Echo<'a> {
    delay: usize,
    decay: Source<'a>,
}

impl<'a> Echo<'a> {
    /// Creates an echo with the given delay in samples and decay factor.
    ///
    /// The decay can be modulated by any [`Source`]; modulated values are
    /// clamped to [0, 1] per sample.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroDelay`] for a delay of zero samples and
    /// [`Error::ValueOutOfRange`] when a fixed decay lies outside [0, 1].
    pub fn new(delay: usize, decay: impl Into<Source<'a>>) -> Result<Self> {
        if delay == 0 {
            return Err(Error::ZeroDelay);
        }
        let decay = decay.into();
        if let Some(d) = decay.as_value() {
            if !(0.0..=1.0).contains(&d) {
                return Err(Error::ValueOutOfRange {
                    name: "decay",
                    value: d,
                    min: 0.0,
                    max: 1.0,
                });
            }
        }
        Ok(Echo { delay, decay })
    }
}

impl Wave for Echo<'_> {
    fn generate(&self, target: &Block) -> Vec<f32> {
        let decay = self.decay.resolve(target);
        let input = target.samples();
        let mut tail = vec![0.0; target.len()];
        // Strictly sequential: each sample depends on the tail one delay
        // earlier.
        for i in self.delay..target.len() {
            tail[i] = (input[i - self.delay] + tail[i - self.delay]) * decay[i].clamp(0.0, 1.0);
        }
        tail
    }
}
