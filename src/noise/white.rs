//! White noise generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::block::Block;
use crate::wave::Wave;

/// Uniform white noise, one random value in [-1, 1] per sample.
///
/// An unseeded generator draws fresh entropy on every render; a seeded one
/// renders the same samples every time, which keeps compositions
/// reproducible and tests deterministic.
///
/// # Examples
///
/// ```
/// use ditty::{Wave, noise::WhiteNoise};
///
/// let hiss = WhiteNoise::seeded(7).render(1_000);
/// let again = WhiteNoise::seeded(7).render(1_000);
/// assert_eq!(hiss.samples(), again.samples());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct WhiteNoise {
    seed: Option<u64>,
}

impl WhiteNoise {
    /// Creates a noise generator drawing fresh entropy per render.
    pub fn new() -> Self {
        WhiteNoise { seed: None }
    }

    /// Creates a reproducible noise generator.
    pub fn seeded(seed: u64) -> Self {
        WhiteNoise { seed: Some(seed) }
    }
}

impl Wave for WhiteNoise {
    fn generate(&self, target: &Block) -> Vec<f32> {
        match self.seed {
            Some(seed) => fill(StdRng::seed_from_u64(seed), target.len()),
            None => fill(rand::thread_rng(), target.len()),
        }
    }
}

fn fill(mut rng: impl Rng, len: usize) -> Vec<f32> {
    (0..len).map(|_| rng.gen_range(-1.0..=1.0)).collect()
}
