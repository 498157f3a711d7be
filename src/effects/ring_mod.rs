//! Ring modulation carrier.

use std::f64::consts::TAU;

use crate::block::Block;
use crate::source::Source;
use crate::wave::{Wave, cycles_from_frequencies};

/// A sine carrier for ring modulation.
///
/// Multiplying a host buffer by the carrier shifts its spectrum to the sum
/// and difference of the host and carrier frequencies, the classic metallic
/// bell sound. The carrier frequency is in cycles per sample.
///
/// # Examples
///
/// ```
/// use ditty::{Wave, effects::RingMod, oscillators::Sine};
///
/// let tone = Sine::new(100.0).render(4_410);
/// let bells = tone.mul(&RingMod::new(0.005));
/// assert_eq!(bells.len(), tone.len());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RingMod {
    frequency: f32,
}

impl RingMod {
    /// Creates a carrier with the given frequency in cycles per sample.
    pub fn new(frequency: f32) -> Self {
        RingMod { frequency }
    }
}

impl Wave for RingMod {
    fn generate(&self, target: &Block) -> Vec<f32> {
        cycles_from_frequencies(Source::Value(self.frequency), target)
            .into_iter()
            .map(|c| (TAU * c).sin() as f32)
            .collect()
    }
}
