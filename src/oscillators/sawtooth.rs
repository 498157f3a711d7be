//! Sawtooth wave generator with adjustable ramp width.

use std::f64::consts::TAU;

use super::{cycle_fraction, ramp};
use crate::block::Block;
use crate::error::{Error, Result};
use crate::source::Source;
use crate::wave::{Wave, cycles_from_periods};

/// A sawtooth wave whose rising segment covers `width` of each period.
///
/// Width 1 gives the classic rising ramp, width 0 a falling ramp, and
/// anything between splits the period into a rise and a fall. The width can
/// itself be modulated by a [`Source`]; modulated width values are clamped
/// to [0, 1] per sample, while a fixed out-of-range width is rejected at
/// construction.
///
/// # Examples
///
/// ```
/// use ditty::{Wave, oscillators::Sawtooth};
///
/// let wave = Sawtooth::new(4.0, 1.0)?.render(4);
/// assert_eq!(wave.samples(), &[-1.0, -0.5, 0.0, 0.5]);
/// # Ok::<(), ditty::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Sawtooth<'a> {
    period: Source<'a>,
    width: Source<'a>,
    phase: f32,
}

impl<'a> Sawtooth<'a> {
    /// Creates a sawtooth wave with the given period in samples and ramp
    /// width.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValueOutOfRange`] when a fixed `width` lies outside
    /// [0, 1].
    pub fn new(period: impl Into<Source<'a>>, width: impl Into<Source<'a>>) -> Result<Self> {
        Self::with_phase(period, width, 0.0)
    }

    /// Creates a sawtooth wave with an initial phase offset in radians.
    ///
    /// # Errors
    ///
    /// Same as [`Sawtooth::new`].
    pub fn with_phase(
        period: impl Into<Source<'a>>,
        width: impl Into<Source<'a>>,
        phase: f32,
    ) -> Result<Self> {
        let width = width.into();
        if let Some(w) = width.as_value() {
            if !(0.0..=1.0).contains(&w) {
                return Err(Error::ValueOutOfRange {
                    name: "width",
                    value: w,
                    min: 0.0,
                    max: 1.0,
                });
            }
        }
        Ok(Sawtooth {
            period: period.into(),
            width,
            phase,
        })
    }

    /// The classic rising ramp (width 1).
    pub fn rising(period: impl Into<Source<'a>>) -> Self {
        Sawtooth {
            period: period.into(),
            width: Source::Value(1.0),
            phase: 0.0,
        }
    }
}

impl Wave for Sawtooth<'_> {
    fn generate(&self, target: &Block) -> Vec<f32> {
        let shift = self.phase as f64 / TAU;
        let cycles = cycles_from_periods(self.period, target);
        match self.width.as_value() {
            // Fixed widths were range-checked at construction.
            Some(w) => cycles
                .into_iter()
                .map(|c| ramp(cycle_fraction(c + shift), w as f64))
                .collect(),
            None => {
                let widths = self.width.resolve(target);
                cycles
                    .into_iter()
                    .zip(widths)
                    .map(|(c, w)| ramp(cycle_fraction(c + shift), w.clamp(0.0, 1.0) as f64))
                    .collect()
            }
        }
    }
}
