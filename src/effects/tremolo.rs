//! Tremolo gain wave.

use std::f64::consts::TAU;

use crate::block::Block;
use crate::error::{Error, Result};
use crate::source::Source;
use crate::wave::{Wave, cycles_from_frequencies};

/// A low-frequency gain wave for amplitude modulation.
///
/// The LFO is a sine mapped into [0, 1]; `depth` blends it with unity gain:
/// `1 - depth + depth * lfo`. At depth 0 the output is constant 1 (no
/// effect), at depth 1 the gain swings all the way from 1 down to 0.
/// Multiply the wave into a host with [`Block::mul`](crate::Block::mul).
///
/// The frequency is in cycles per sample (use
/// [`units::cycles_per_sample`](crate::units::cycles_per_sample) to derive
/// it from Hz) and may be modulated by any [`Source`], as may the depth.
///
/// # Examples
///
/// ```
/// use ditty::{Wave, effects::Tremolo, oscillators::Sine};
///
/// let tone = Sine::new(100.0).render(44_100);
/// let pulsed = tone.mul(&Tremolo::new(0.0001, 0.8)?);
/// assert_eq!(pulsed.len(), tone.len());
/// # Ok::<(), ditty::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Tremolo<'a> {
    frequency: Source<'a>,
    depth: Source<'a>,
}

impl<'a> Tremolo<'a> {
    /// Creates a tremolo wave with the given frequency in cycles per sample
    /// and depth.
    ///
    /// Modulated depth values are clamped to [0, 1] per sample.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValueOutOfRange`] when a fixed depth lies outside
    /// [0, 1].
    pub fn new(frequency: impl Into<Source<'a>>, depth: impl Into<Source<'a>>) -> Result<Self> {
        let depth = depth.into();
        if let Some(d) = depth.as_value() {
            if !(0.0..=1.0).contains(&d) {
                return Err(Error::ValueOutOfRange {
                    name: "depth",
                    value: d,
                    min: 0.0,
                    max: 1.0,
                });
            }
        }
        Ok(Tremolo {
            frequency: frequency.into(),
            depth,
        })
    }

    /// Full-depth tremolo: the gain swings between 1 and 0.
    pub fn full(frequency: impl Into<Source<'a>>) -> Self {
        Tremolo {
            frequency: frequency.into(),
            depth: Source::Value(1.0),
        }
    }
}

impl Wave for Tremolo<'_> {
    fn generate(&self, target: &Block) -> Vec<f32> {
        let cycles = cycles_from_frequencies(self.frequency, target);
        let depth = self.depth.resolve(target);
        cycles
            .into_iter()
            .zip(depth)
            .map(|(c, d)| {
                let d = d.clamp(0.0, 1.0) as f64;
                let lfo = 0.5 * (1.0 + (TAU * c).sin());
                (1.0 - d + d * lfo) as f32
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_zero_depth_is_unity_gain() {
        let gain = Tremolo::new(0.1, 0.0).unwrap().render(64);
        assert!(gain.samples().iter().all(|s| *s == 1.0));
    }

    #[test]
    fn test_full_depth_traces_the_lfo() {
        // Quarter-cycle-per-sample LFO hits its landmarks exactly.
        let gain = Tremolo::full(0.25).render(4);
        let samples = gain.samples();
        assert!((samples[0] - 0.5).abs() < EPSILON);
        assert!((samples[1] - 1.0).abs() < EPSILON);
        assert!((samples[2] - 0.5).abs() < EPSILON);
        assert!(samples[3].abs() < EPSILON);
    }

    #[test]
    fn test_gain_stays_within_depth_band() {
        let depth = 0.3;
        let gain = Tremolo::new(0.01, depth).unwrap().render(512);
        for s in gain.samples() {
            assert!(*s <= 1.0 + EPSILON);
            assert!(*s >= 1.0 - depth - EPSILON);
        }
    }

    #[test]
    fn test_fixed_depth_out_of_range_rejected() {
        assert!(matches!(
            Tremolo::new(0.01, 2.0),
            Err(Error::ValueOutOfRange { name: "depth", .. })
        ));
    }

    #[test]
    fn test_modulated_depth_fades_the_effect_in() {
        // Depth 0 at the start, 1 at the end: the first sample must be
        // unity no matter where the LFO sits.
        let depth = Block::from_samples(vec![0.0, 0.5, 1.0, 1.0]);
        let gain = Tremolo::new(0.25, &depth).unwrap().render(4);
        let samples = gain.samples();
        assert_eq!(samples[0], 1.0);
        // Sample 1: lfo = 1.0, depth 0.5 -> 1 - 0.5 + 0.5 = 1.0
        assert!((samples[1] - 1.0).abs() < EPSILON);
        // Sample 3: lfo = 0.0, depth 1 -> 0.0
        assert!(samples[3].abs() < EPSILON);
    }

    #[test]
    fn test_constant_block_frequency_matches_scalar() {
        let modulation = Block::from_samples(vec![0.05; 128]);
        let scalar = Tremolo::full(0.05).render(128);
        let modulated = Tremolo::full(&modulation).render(128);
        assert_eq!(scalar.samples(), modulated.samples());
    }
}
