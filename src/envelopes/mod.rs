//! Amplitude envelopes and control curves.
//!
//! Envelopes are ordinary generators, so the usual way to apply one is to
//! multiply it into a tone with [`Block::mul`](crate::Block::mul), or to use
//! it as a modulation source for another generator's parameter.

mod bezier;
mod linear_ramp;

pub use bezier::Bezier;
pub use linear_ramp::LinearRamp;
