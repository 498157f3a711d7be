//! The generator capability and the shared time bases built on it.
//!
//! Everything that can produce samples on demand (oscillators, envelopes,
//! effects, noise) implements [`Wave`]. A wave never owns a buffer; it is
//! asked to generate against a target [`Block`] and must answer with exactly
//! that many samples. Periodic waves derive their timing from the helpers at
//! the bottom of this module so that scalar and modulated parameters stay
//! sample-for-sample consistent.

use crate::block::{Block, DEFAULT_SAMPLE_RATE};
use crate::source::Source;

/// Common interface for anything that produces audio samples on demand.
///
/// `generate` is the single required method; the `render` helpers allocate a
/// silent target of the requested length and realize the wave into a fresh
/// [`Block`]. Implementations read the target for its length, and effects
/// like [`Echo`](crate::effects::Echo) also read its samples.
///
/// # Length contract
///
/// `generate(target)` must return exactly `target.len()` samples. The
/// composition methods assert this; a violation is a bug in the wave, not a
/// recoverable error.
///
/// # Examples
///
/// ```
/// use ditty::{Wave, oscillators::Sine};
///
/// let tone = Sine::new(100.0).render(400);
/// assert_eq!(tone.len(), 400);
/// ```
pub trait Wave {
    /// Produces one sample per sample of `target`.
    fn generate(&self, target: &Block) -> Vec<f32>;

    /// Renders `len` samples into a new block at the
    /// [`DEFAULT_SAMPLE_RATE`].
    fn render(&self, len: usize) -> Block {
        self.render_at(len, DEFAULT_SAMPLE_RATE)
    }

    /// Renders `len` samples into a new block at an explicit rate.
    fn render_at(&self, len: usize, sample_rate: u32) -> Block {
        let target = Block::with_rate(len, sample_rate);
        let samples = self.generate(&target);
        assert_eq!(
            samples.len(),
            len,
            "generator returned the wrong number of samples"
        );
        Block::from_samples_with_rate(samples, sample_rate)
    }
}

/// Cycle positions for a period-driven wave, one per target sample.
///
/// A fixed period yields the running sum of `1/period`; a modulated period
/// resolves per sample first and integrates `1/period[i]` the same way. The
/// sum is exclusive (position `i` covers samples before `i`), which keeps a
/// constant-filled modulation buffer bit-identical to the scalar path and
/// keeps frequency sweeps phase-continuous. Accumulation runs in `f64`.
pub(crate) fn cycles_from_periods(period: Source<'_>, target: &Block) -> Vec<f64> {
    match period.as_value() {
        Some(p) => {
            let step = 1.0 / p as f64;
            exclusive_scan((0..target.len()).map(|_| step))
        }
        None => {
            let periods = period.resolve(target);
            exclusive_scan(periods.into_iter().map(|p| 1.0 / p as f64))
        }
    }
}

/// Cycle positions for a frequency-driven wave (cycles per sample).
///
/// Same exclusive integration as [`cycles_from_periods`], with the resolved
/// frequency used directly as the per-sample increment.
pub(crate) fn cycles_from_frequencies(frequency: Source<'_>, target: &Block) -> Vec<f64> {
    match frequency.as_value() {
        Some(f) => {
            let step = f as f64;
            exclusive_scan((0..target.len()).map(|_| step))
        }
        None => {
            let freqs = frequency.resolve(target);
            exclusive_scan(freqs.into_iter().map(|f| f as f64))
        }
    }
}

/// Running sum with the increment applied after each position is emitted.
fn exclusive_scan(increments: impl Iterator<Item = f64>) -> Vec<f64> {
    let mut acc = 0.0;
    increments
        .map(|inc| {
            let position = acc;
            acc += inc;
            position
        })
        .collect()
}
