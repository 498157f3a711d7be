//! Polymorphic modulation sources for generator parameters.
//!
//! Anywhere a generator takes a per-sample control value (an oscillator
//! period, an echo decay, a tremolo depth) it accepts a [`Source`]: a fixed
//! scalar, a borrowed buffer or slice, or another generator. Using one enum
//! instead of generics keeps constructor signatures flat and lets a single
//! parameter slot hold any of the four shapes, at the cost of a match per
//! resolution.

use std::fmt;

use crate::block::Block;
use crate::wave::Wave;

/// A per-sample control value: scalar, buffer, slice, or generator.
///
/// Sources borrow their referents, so a generator can read a buffer it does
/// not own and parameter chains (a generator modulating a generator
/// modulating a generator) cost nothing to build. The borrows also make
/// cyclic modulation unrepresentable; there is no runtime cycle guard
/// because none is needed.
///
/// # Examples
///
/// ```
/// use ditty::{Block, Source};
///
/// let target = Block::new(5);
///
/// // A scalar fills the whole target.
/// assert_eq!(Source::value(0.5).resolve(&target), vec![0.5; 5]);
///
/// // A shorter slice tiles cyclically.
/// let pattern = [1.0, 2.0];
/// let tiled = Source::from(&pattern[..]).resolve(&target);
/// assert_eq!(tiled, vec![1.0, 2.0, 1.0, 2.0, 1.0]);
/// ```
#[derive(Clone, Copy)]
pub enum Source<'a> {
    /// A fixed value, the same at every sample
    Value(f32),
    /// A borrowed buffer, tiled or truncated to the target length
    Block(&'a Block),
    /// A borrowed raw sample slice, tiled or truncated to the target length
    Slice(&'a [f32]),
    /// A borrowed generator, rendered against the target
    Wave(&'a dyn Wave),
}

impl<'a> Source<'a> {
    /// Creates a fixed-value source.
    pub fn value(value: f32) -> Self {
        Source::Value(value)
    }

    /// Creates a source driven by a generator.
    ///
    /// Concrete generators also convert through `From`; a `&dyn Wave` trait
    /// object goes through this constructor.
    ///
    /// # Examples
    ///
    /// ```
    /// use ditty::{Block, Source, Wave, oscillators::Sine};
    ///
    /// let tone = Sine::new(8.0);
    /// let picked: &dyn Wave = &tone;
    /// let resolved = Source::wave(picked).resolve(&Block::new(8));
    /// assert!((resolved[2] - 1.0).abs() < 1e-6);
    /// ```
    pub fn wave(wave: &'a dyn Wave) -> Self {
        Source::Wave(wave)
    }

    /// Returns the fixed value if this source is a scalar.
    ///
    /// Generators use this to pick a cheaper closed-form path when a
    /// parameter is not modulated.
    pub fn as_value(&self) -> Option<f32> {
        match self {
            Source::Value(v) => Some(*v),
            _ => None,
        }
    }

    /// Resolves this source to exactly `target.len()` samples.
    ///
    /// Scalars fill; buffers and slices are resized by cyclic tiling when
    /// shorter than the target and truncation when longer (a wrap-or-cut
    /// resize, not interpolation). An empty buffer or slice resolves to
    /// zeros. A generator renders against `target`, which recursively
    /// resolves its own parameters the same way.
    ///
    /// # Panics
    ///
    /// Panics if a generator breaks the length contract of
    /// [`Wave::generate`]; that is an invariant violation in the generator,
    /// not a recoverable condition.
    pub fn resolve(&self, target: &Block) -> Vec<f32> {
        match self {
            Source::Value(v) => vec![*v; target.len()],
            Source::Block(b) => tile_to(b.samples(), target.len()),
            Source::Slice(s) => tile_to(s, target.len()),
            Source::Wave(w) => {
                let out = w.generate(target);
                assert_eq!(
                    out.len(),
                    target.len(),
                    "generator returned the wrong number of samples"
                );
                out
            }
        }
    }
}

impl fmt::Debug for Source<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Source::Block(b) => f.debug_tuple("Block").field(b).finish(),
            Source::Slice(s) => f.debug_tuple("Slice").field(s).finish(),
            Source::Wave(_) => f.write_str("Wave(..)"),
        }
    }
}

/// Wrap-or-cut resize: cycle `source` until `len` samples are written.
fn tile_to(source: &[f32], len: usize) -> Vec<f32> {
    if source.is_empty() {
        return vec![0.0; len];
    }
    (0..len).map(|i| source[i % source.len()]).collect()
}

impl From<f32> for Source<'_> {
    fn from(value: f32) -> Self {
        Source::Value(value)
    }
}

impl<'a> From<&'a Block> for Source<'a> {
    fn from(block: &'a Block) -> Self {
        Source::Block(block)
    }
}

impl<'a> From<&'a [f32]> for Source<'a> {
    fn from(slice: &'a [f32]) -> Self {
        Source::Slice(slice)
    }
}

impl<'a, W: Wave> From<&'a W> for Source<'a> {
    fn from(wave: &'a W) -> Self {
        Source::Wave(wave)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct IndexWave;

    impl Wave for IndexWave {
        fn generate(&self, target: &Block) -> Vec<f32> {
            (0..target.len()).map(|i| i as f32).collect()
        }
    }

    #[test]
    fn test_value_fills_target() {
        let target = Block::new(4);
        assert_eq!(Source::value(0.25).resolve(&target), vec![0.25; 4]);
    }

    #[test]
    fn test_short_block_tiles() {
        let target = Block::new(5);
        let source = Block::from_samples(vec![1.0, 2.0]);
        let resolved = Source::from(&source).resolve(&target);
        assert_eq!(resolved, vec![1.0, 2.0, 1.0, 2.0, 1.0]);
    }

    #[test]
    fn test_long_slice_truncates() {
        let target = Block::new(3);
        let long = [9.0, 8.0, 7.0, 6.0, 5.0];
        let resolved = Source::from(&long[..]).resolve(&target);
        assert_eq!(resolved, vec![9.0, 8.0, 7.0]);
    }

    #[test]
    fn test_exact_length_passes_through() {
        let target = Block::new(3);
        let exact = [1.0, 2.0, 3.0];
        assert_eq!(Source::from(&exact[..]).resolve(&target), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_empty_source_resolves_to_zeros() {
        let target = Block::new(4);
        let empty = Block::new(0);
        assert_eq!(Source::from(&empty).resolve(&target), vec![0.0; 4]);
    }

    #[test]
    fn test_wave_source_renders_against_target() {
        let target = Block::new(4);
        let wave = IndexWave;
        let resolved = Source::from(&wave).resolve(&target);
        assert_eq!(resolved, vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_wave_reference_converts_via_into() {
        let target = Block::new(3);
        let wave = IndexWave;
        let source: Source = (&wave).into();
        assert_eq!(source.resolve(&target), vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_as_value_only_for_scalars() {
        let block = Block::new(1);
        assert_eq!(Source::value(2.0).as_value(), Some(2.0));
        assert_eq!(Source::from(&block).as_value(), None);
    }

    #[test]
    fn test_f32_converts_to_value() {
        let source: Source = 1.5.into();
        assert!(matches!(source, Source::Value(v) if v == 1.5));
    }
}
