//! Linear interpolation envelope.

use crate::block::Block;
use crate::wave::Wave;

/// A straight line from `start` towards `end` over the target length.
///
/// The end value is exclusive: over `n` samples the ramp covers
/// `start + (end - start) * i / n`, so the final sample sits one step short
/// of `end`. Two ramps rendered back to back therefore chain without a
/// duplicated boundary value.
///
/// # Examples
///
/// ```
/// use ditty::{Wave, envelopes::LinearRamp};
///
/// let ramp = LinearRamp::new(0.0, 1.0).render(4);
/// assert_eq!(ramp.samples(), &[0.0, 0.25, 0.5, 0.75]);
/// ```
///
/// Fading out a tone:
///
/// ```
/// use ditty::{Wave, envelopes::LinearRamp, oscillators::Sine};
///
/// let tone = Sine::new(100.0).render(44_100);
/// let faded = tone.mul(&LinearRamp::new(1.0, 0.0));
/// assert_eq!(faded.samples()[0], 0.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LinearRamp {
    start: f32,
    end: f32,
}

impl LinearRamp {
    /// Creates a ramp from `start` to (exclusively) `end`.
    pub fn new(start: f32, end: f32) -> Self {
        LinearRamp { start, end }
    }
}

impl Wave for LinearRamp {
    fn generate(&self, target: &Block) -> Vec<f32> {
        let n = target.len();
        let start = self.start as f64;
        let span = self.end as f64 - start;
        (0..n)
            .map(|i| (start + span * (i as f64 / n as f64)) as f32)
            .collect()
    }
}
