//! Triangle wave generator.

use super::{cycle_fraction, ramp};
use crate::block::Block;
use crate::source::Source;
use crate::wave::{Wave, cycles_from_periods};

/// A triangle wave: a sawtooth with the ramp width pinned to 0.5.
///
/// Rises linearly from -1 to 1 over the first half of each period, then
/// falls back over the second half.
///
/// # Examples
///
/// ```
/// use ditty::{Wave, oscillators::Triangle};
///
/// let wave = Triangle::new(4.0).render(4);
/// assert_eq!(wave.samples(), &[-1.0, 0.0, 1.0, 0.0]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Triangle<'a> {
    period: Source<'a>,
}

impl<'a> Triangle<'a> {
    /// Creates a triangle wave with the given period in samples.
    pub fn new(period: impl Into<Source<'a>>) -> Self {
        Triangle {
            period: period.into(),
        }
    }
}

impl Wave for Triangle<'_> {
    fn generate(&self, target: &Block) -> Vec<f32> {
        cycles_from_periods(self.period, target)
            .into_iter()
            .map(|c| ramp(cycle_fraction(c), 0.5))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oscillators::Sawtooth;

    #[test]
    fn test_symmetric_rise_and_fall() {
        let wave = Triangle::new(8.0).render(8);
        assert_eq!(wave.samples(), &[-1.0, -0.5, 0.0, 0.5, 1.0, 0.5, 0.0, -0.5]);
    }

    #[test]
    fn test_matches_half_width_sawtooth() {
        let triangle = Triangle::new(6.0).render(24);
        let sawtooth = Sawtooth::new(6.0, 0.5).unwrap().render(24);
        assert_eq!(triangle.samples(), sawtooth.samples());
    }

    #[test]
    fn test_modulated_period() {
        let periods = Block::from_samples(vec![4.0; 16]);
        let modulated = Triangle::new(&periods).render(16);
        let scalar = Triangle::new(4.0).render(16);
        assert_eq!(modulated.samples(), scalar.samples());
    }
}
