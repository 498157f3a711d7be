//! Sine wave generator.

use std::f64::consts::TAU;

use crate::block::Block;
use crate::source::Source;
use crate::wave::{Wave, cycles_from_periods};

/// A sine wave with a given period in samples.
///
/// The period can be a fixed scalar or any [`Source`]; a modulated period is
/// integrated per sample, so pitch sweeps and vibrato stay phase-continuous
/// instead of jumping at each period change.
///
/// # Examples
///
/// ```
/// use ditty::{Wave, oscillators::Sine};
///
/// // One cycle every 8 samples; the peak lands a quarter period in.
/// let tone = Sine::new(8.0).render(8);
/// assert!(tone.samples()[0].abs() < 1e-6);
/// assert!((tone.samples()[2] - 1.0).abs() < 1e-6);
/// ```
///
/// Driving the period with an envelope gives a pitch sweep:
///
/// ```
/// use ditty::{Wave, envelopes::LinearRamp, oscillators::Sine};
///
/// let falling = LinearRamp::new(200.0, 100.0);
/// let sweep = Sine::new(&falling).render(4_410);
/// assert_eq!(sweep.len(), 4_410);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Sine<'a> {
    period: Source<'a>,
    phase: f32,
}

impl<'a> Sine<'a> {
    /// Creates a sine wave with the given period in samples, starting at
    /// phase zero.
    pub fn new(period: impl Into<Source<'a>>) -> Self {
        Sine {
            period: period.into(),
            phase: 0.0,
        }
    }

    /// Creates a sine wave with an initial phase offset in radians.
    pub fn with_phase(period: impl Into<Source<'a>>, phase: f32) -> Self {
        Sine {
            period: period.into(),
            phase,
        }
    }
}

impl Wave for Sine<'_> {
    fn generate(&self, target: &Block) -> Vec<f32> {
        let phase = self.phase as f64;
        cycles_from_periods(self.period, target)
            .into_iter()
            .map(|c| (TAU * c + phase).sin() as f32)
            .collect()
    }
}
