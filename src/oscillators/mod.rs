//! Periodic waveform generators.
//!
//! Oscillators are parameterized by their period in samples rather than a
//! frequency in Hz, which keeps a waveform independent of the rate it will
//! eventually play back at; [`units::period`](crate::units::period) converts
//! a frequency into a period. Every period parameter accepts a
//! [`Source`](crate::Source), which is how frequency modulation works: a
//! buffer or another generator supplies the period per sample and the
//! oscillator integrates it into a continuous phase.

mod sawtooth;
mod sine;
mod square;
mod triangle;

pub use sawtooth::Sawtooth;
pub use sine::Sine;
pub use square::Square;
pub use triangle::Triangle;

/// Position within the current cycle, in [0, 1).
pub(crate) fn cycle_fraction(cycles: f64) -> f64 {
    cycles.rem_euclid(1.0)
}

/// Two-segment ramp over one cycle: rises from -1 to 1 while the cycle
/// fraction is below `width`, then falls back towards -1. Width 1 is a pure
/// rising sawtooth, 0 a pure falling one, 0.5 a triangle.
pub(crate) fn ramp(x: f64, width: f64) -> f32 {
    debug_assert!((0.0..1.0).contains(&x), "cycle fraction out of range");
    if x < width {
        (2.0 * x / width - 1.0) as f32
    } else {
        ((width + 1.0 - 2.0 * x) / (1.0 - width)) as f32
    }
}
