//! Effects that shape or react to a host buffer.
//!
//! Effects are generators like any other; what sets them apart is that their
//! output is meant to be combined with the buffer they were generated
//! against. [`Echo`] reads the host's samples to build its tail,
//! [`Tremolo`] and [`RingMod`] produce gain and carrier waves for
//! multiplication.

mod echo;
mod ring_mod;
mod tremolo;

pub use echo::Echo;
pub use ring_mod::RingMod;
pub use tremolo::Tremolo;
