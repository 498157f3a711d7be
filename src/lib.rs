//! Ditty - a compositional audio synthesis library
//!
//! Sounds are built by combining sample buffers ([`Block`]) with generators
//! ([`Wave`] implementations) through named algebra methods. Generator
//! parameters accept a [`Source`], so a buffer or another generator can
//! modulate them per sample.

pub mod block;
pub mod effects;
pub mod envelopes;
pub mod error;
pub mod noise;
pub mod oscillators;
pub mod source;
pub mod transcode;
pub mod units;
pub mod wave;

// Re-export the core types at the crate root
pub use block::{Block, DEFAULT_SAMPLE_RATE};
pub use error::{Error, Result};
pub use source::Source;
pub use wave::Wave;
