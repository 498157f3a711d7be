//! Square wave generator.

use std::f64::consts::TAU;

use super::cycle_fraction;
use crate::block::Block;
use crate::source::Source;
use crate::wave::{Wave, cycles_from_periods};

/// A unit square wave with 50% duty cycle.
///
/// High (+1) for the first half of each period, low (-1) for the second.
/// The period accepts any [`Source`], like the other oscillators.
///
/// # Examples
///
/// ```
/// use ditty::{Wave, oscillators::Square};
///
/// let wave = Square::new(4.0).render(4);
/// assert_eq!(wave.samples(), &[1.0, 1.0, -1.0, -1.0]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Square<'a> {
    period: Source<'a>,
    phase: f32,
}

impl<'a> Square<'a> {
    /// Creates a square wave with the given period in samples.
    pub fn new(period: impl Into<Source<'a>>) -> Self {
        Square {
            period: period.into(),
            phase: 0.0,
        }
    }

    /// Creates a square wave with an initial phase offset in radians.
    pub fn with_phase(period: impl Into<Source<'a>>, phase: f32) -> Self {
        Square {
            period: period.into(),
            phase,
        }
    }
}

impl Wave for Square<'_> {
    fn generate(&self, target: &Block) -> Vec<f32> {
        let shift = self.phase as f64 / TAU;
        cycles_from_periods(self.period, target)
            .into_iter()
            .map(|c| {
                if cycle_fraction(c + shift) < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            })
            .collect()
    }
}
