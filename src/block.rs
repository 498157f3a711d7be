//! The audio sample buffer and its composition algebra.
//!
//! A [`Block`] is a fixed-length run of mono `f32` samples plus the rate it
//! was rendered at. All composition goes through named methods: [`Block::add`]
//! and [`Block::mul`] accept anything convertible to a
//! [`Source`](crate::source::Source), while [`Block::mount`],
//! [`Block::concat`], [`Block::reverse`], [`Block::repeat`], and
//! [`Block::add_aligned`] place whole buffers relative to each other.
//! Every operator returns a fresh buffer except [`Block::mount`], which
//! mutates its receiver in place.

use crate::error::{Error, Result};
use crate::source::Source;

/// Default sampling rate in samples per second (CD quality).
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

/// A fixed-length buffer of mono audio samples.
///
/// The buffer's duration is always `samples().len()`; it is never tracked
/// separately. Blocks start zero-filled and are shaped by generators and the
/// composition methods below.
///
/// # Examples
///
/// ```
/// use ditty::Block;
///
/// let block = Block::new(4);
/// assert_eq!(block.len(), 4);
/// assert_eq!(block.samples(), &[0.0, 0.0, 0.0, 0.0]);
///
/// let louder = block.add(0.5);
/// assert_eq!(louder.samples(), &[0.5, 0.5, 0.5, 0.5]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    samples: Vec<f32>,
    sample_rate: u32,
    offset: Option<i64>,
}

impl Block {
    /// Creates a zero-filled block of `len` samples at the
    /// [`DEFAULT_SAMPLE_RATE`].
    pub fn new(len: usize) -> Self {
        Self::with_rate(len, DEFAULT_SAMPLE_RATE)
    }

    /// Creates a zero-filled block of `len` samples at an explicit rate.
    pub fn with_rate(len: usize, sample_rate: u32) -> Self {
        Block {
            samples: vec![0.0; len],
            sample_rate,
            offset: None,
        }
    }

    /// Wraps an existing sample vector at the [`DEFAULT_SAMPLE_RATE`].
    pub fn from_samples(samples: Vec<f32>) -> Self {
        Self::from_samples_with_rate(samples, DEFAULT_SAMPLE_RATE)
    }

    /// Wraps an existing sample vector at an explicit rate.
    pub fn from_samples_with_rate(samples: Vec<f32>, sample_rate: u32) -> Self {
        Block {
            samples,
            sample_rate,
            offset: None,
        }
    }

    /// Sets the block's origin-time offset in samples, consuming and
    /// returning it.
    ///
    /// The offset only matters to [`Block::add_aligned`]; every other
    /// operator ignores it and carries it through unchanged.
    pub fn at_offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Number of samples in the block.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` when the block holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The rate this block is meant to be played back at, in samples per
    /// second.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// The origin-time offset in samples, if one was assigned.
    pub fn offset(&self) -> Option<i64> {
        self.offset
    }

    /// Read-only view of the samples.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Mutable view of the samples, for callers that want to shape the
    /// buffer directly.
    pub fn samples_mut(&mut self) -> &mut [f32] {
        &mut self.samples
    }

    /// Consumes the block, returning its sample vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use ditty::Block;
    ///
    /// let samples = Block::from_samples(vec![0.1, 0.2]).into_samples();
    /// assert_eq!(samples, vec![0.1, 0.2]);
    /// ```
    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }

    /// Returns a new block with `source` added element-wise.
    ///
    /// The source is resolved to this block's length first: scalars fill,
    /// shorter buffers tile cyclically, longer buffers truncate, and
    /// generators render against this block (so an effect like
    /// [`Echo`](crate::effects::Echo) sees the host samples it needs).
    ///
    /// # Examples
    ///
    /// ```
    /// use ditty::Block;
    ///
    /// let base = Block::from_samples(vec![1.0, 2.0, 3.0, 4.0]);
    /// let synced = base.add(&[10.0, 20.0][..]);
    /// assert_eq!(synced.samples(), &[11.0, 22.0, 13.0, 24.0]);
    /// ```
    pub fn add<'a>(&self, source: impl Into<Source<'a>>) -> Block {
        let resolved = source.into().resolve(self);
        self.zip_with(&resolved, |a, b| a + b)
    }

    /// Returns a new block with `source` multiplied in element-wise.
    ///
    /// Resolution follows the same rules as [`Block::add`]. Multiplying by
    /// an envelope generator is the usual way to shape a tone's amplitude.
    ///
    /// # Examples
    ///
    /// ```
    /// use ditty::Block;
    ///
    /// let base = Block::from_samples(vec![1.0, 2.0, 3.0]);
    /// let halved = base.mul(0.5);
    /// assert_eq!(halved.samples(), &[0.5, 1.0, 1.5]);
    /// ```
    pub fn mul<'a>(&self, source: impl Into<Source<'a>>) -> Block {
        let resolved = source.into().resolve(self);
        self.zip_with(&resolved, |a, b| a * b)
    }

    /// Returns a new block with every sample negated.
    pub fn negate(&self) -> Block {
        Block {
            samples: self.samples.iter().map(|s| -s).collect(),
            sample_rate: self.sample_rate,
            offset: self.offset,
        }
    }

    /// Additively overlays `other` into this block starting at
    /// `mount_point`, in place.
    ///
    /// If the overlay extends past the current end, the block grows with
    /// zero padding to exactly `mount_point + other.len()` samples first.
    /// Durations only ever grow; mounting never shrinks a block.
    ///
    /// # Examples
    ///
    /// ```
    /// use ditty::Block;
    ///
    /// let mut song = Block::new(2);
    /// let hit = Block::from_samples(vec![1.0, 1.0]);
    /// song.mount(&hit, 3);
    /// assert_eq!(song.samples(), &[0.0, 0.0, 0.0, 1.0, 1.0]);
    /// ```
    pub fn mount(&mut self, other: &Block, mount_point: usize) {
        let required = mount_point + other.len();
        if required > self.samples.len() {
            self.samples.resize(required, 0.0);
        }
        for (dst, src) in self.samples[mount_point..required]
            .iter_mut()
            .zip(&other.samples)
        {
            *dst += src;
        }
    }

    /// Returns a new block holding this block's samples followed by
    /// `other`'s.
    pub fn concat(&self, other: &Block) -> Block {
        let mut samples = Vec::with_capacity(self.len() + other.len());
        samples.extend_from_slice(&self.samples);
        samples.extend_from_slice(&other.samples);
        Block {
            samples,
            sample_rate: self.sample_rate,
            offset: self.offset,
        }
    }

    /// Returns a new block with the sample order flipped.
    pub fn reverse(&self) -> Block {
        Block {
            samples: self.samples.iter().rev().copied().collect(),
            sample_rate: self.sample_rate,
            offset: self.offset,
        }
    }

    /// Returns a new block tiling this block's samples `times` times.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroRepeat`] when `times` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use ditty::Block;
    ///
    /// let bar = Block::from_samples(vec![1.0, -1.0]);
    /// let phrase = bar.repeat(3)?;
    /// assert_eq!(phrase.samples(), &[1.0, -1.0, 1.0, -1.0, 1.0, -1.0]);
    /// # Ok::<(), ditty::Error>(())
    /// ```
    pub fn repeat(&self, times: usize) -> Result<Block> {
        if times == 0 {
            return Err(Error::ZeroRepeat);
        }
        let mut samples = Vec::with_capacity(self.len() * times);
        for _ in 0..times {
            samples.extend_from_slice(&self.samples);
        }
        Ok(Block {
            samples,
            sample_rate: self.sample_rate,
            offset: self.offset,
        })
    }

    /// Adds two blocks respecting their origin-time offsets.
    ///
    /// The result spans the union of the two windows: its offset is the
    /// smaller of the operands' offsets (a missing offset counts as zero)
    /// and its length runs to the later of the two ends. Each operand is
    /// added in at its own position. The result carries the receiver's
    /// sample rate and the computed offset.
    ///
    /// # Examples
    ///
    /// ```
    /// use ditty::Block;
    ///
    /// let early = Block::from_samples(vec![1.0, 1.0]);
    /// let late = Block::from_samples(vec![2.0, 2.0]).at_offset(3);
    /// let mixed = early.add_aligned(&late);
    /// assert_eq!(mixed.offset(), Some(0));
    /// assert_eq!(mixed.samples(), &[1.0, 1.0, 0.0, 2.0, 2.0]);
    /// ```
    pub fn add_aligned(&self, other: &Block) -> Block {
        let a_off = self.offset.unwrap_or(0);
        let b_off = other.offset.unwrap_or(0);
        let start = a_off.min(b_off);
        let end = (a_off + self.len() as i64).max(b_off + other.len() as i64);
        let mut samples = vec![0.0; (end - start) as usize];
        for (i, s) in self.samples.iter().enumerate() {
            samples[(a_off - start) as usize + i] += s;
        }
        for (i, s) in other.samples.iter().enumerate() {
            samples[(b_off - start) as usize + i] += s;
        }
        Block {
            samples,
            sample_rate: self.sample_rate,
            offset: Some(start),
        }
    }

    /// Element-wise combination with an already-resolved operand.
    ///
    /// Panics if the operand length does not match; resolution guarantees
    /// it does, so a mismatch is an internal invariant violation.
    fn zip_with(&self, resolved: &[f32], f: impl Fn(f32, f32) -> f32) -> Block {
        assert_eq!(
            resolved.len(),
            self.samples.len(),
            "resolved operand length must match the target block"
        );
        Block {
            samples: self
                .samples
                .iter()
                .zip(resolved)
                .map(|(a, b)| f(*a, *b))
                .collect(),
            sample_rate: self.sample_rate,
            offset: self.offset,
        }
    }
}

impl Default for Block {
    /// An empty block at the default rate. Useful as a mount target that
    /// grows to fit whatever is placed on it.
    fn default() -> Self {
        Block::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_block_is_zero_filled() {
        let block = Block::new(8);
        assert_eq!(block.len(), 8);
        assert!(block.samples().iter().all(|s| *s == 0.0));
        assert_eq!(block.sample_rate(), DEFAULT_SAMPLE_RATE);
        assert_eq!(block.offset(), None);
    }

    #[test]
    fn test_with_rate_keeps_rate() {
        let block = Block::with_rate(4, 22_050);
        assert_eq!(block.sample_rate(), 22_050);
    }

    #[test]
    fn test_add_scalar() {
        let block = Block::from_samples(vec![1.0, -1.0, 0.5]);
        let shifted = block.add(2.0);
        assert_eq!(shifted.samples(), &[3.0, 1.0, 2.5]);
        // the receiver is untouched
        assert_eq!(block.samples(), &[1.0, -1.0, 0.5]);
    }

    #[test]
    fn test_mul_block_tiles_shorter_operand() {
        let base = Block::from_samples(vec![1.0, 1.0, 1.0, 1.0]);
        let gain = Block::from_samples(vec![2.0, 3.0]);
        let out = base.mul(&gain);
        assert_eq!(out.samples(), &[2.0, 3.0, 2.0, 3.0]);
    }

    #[test]
    fn test_add_truncates_longer_operand() {
        let base = Block::from_samples(vec![1.0, 1.0]);
        let long = Block::from_samples(vec![10.0, 20.0, 30.0, 40.0]);
        let out = base.add(&long);
        assert_eq!(out.samples(), &[11.0, 21.0]);
    }

    #[test]
    fn test_negate() {
        let block = Block::from_samples(vec![1.0, -2.0, 0.0]);
        let negated = block.negate();
        assert_eq!(negated.samples(), &[-1.0, 2.0, -0.0]);
    }

    #[test]
    fn test_mount_within_bounds_keeps_length() {
        let mut base = Block::from_samples(vec![1.0, 1.0, 1.0, 1.0]);
        let overlay = Block::from_samples(vec![0.5, 0.5]);
        base.mount(&overlay, 1);
        assert_eq!(base.len(), 4);
        assert_eq!(base.samples(), &[1.0, 1.5, 1.5, 1.0]);
    }

    #[test]
    fn test_mount_grows_with_zero_padding() {
        let mut base = Block::from_samples(vec![1.0, 1.0]);
        let overlay = Block::from_samples(vec![0.25, 0.25]);
        base.mount(&overlay, 4);
        assert_eq!(base.len(), 6);
        assert_eq!(base.samples(), &[1.0, 1.0, 0.0, 0.0, 0.25, 0.25]);
    }

    #[test]
    fn test_mount_onto_empty_block() {
        let mut base = Block::new(0);
        let overlay = Block::from_samples(vec![1.0, 2.0]);
        base.mount(&overlay, 2);
        assert_eq!(base.samples(), &[0.0, 0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_concat_lengths_and_order() {
        let a = Block::from_samples(vec![1.0, 2.0]);
        let b = Block::from_samples(vec![3.0]);
        let joined = a.concat(&b);
        assert_eq!(joined.len(), 3);
        assert_eq!(joined.samples(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_reverse_twice_is_identity() {
        let block = Block::from_samples(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(block.reverse().reverse(), block);
    }

    #[test]
    fn test_repeat_tiles_samples() {
        let block = Block::from_samples(vec![1.0, 2.0]);
        let tiled = block.repeat(3).unwrap();
        assert_eq!(tiled.len(), 6);
        for k in 0..3 {
            assert_eq!(&tiled.samples()[k * 2..(k + 1) * 2], block.samples());
        }
    }

    #[test]
    fn test_repeat_zero_is_an_error() {
        let block = Block::from_samples(vec![1.0]);
        assert!(matches!(block.repeat(0), Err(Error::ZeroRepeat)));
    }

    #[test]
    fn test_add_aligned_union_window() {
        let a = Block::from_samples(vec![1.0, 1.0, 1.0]).at_offset(2);
        let b = Block::from_samples(vec![2.0, 2.0, 2.0]).at_offset(4);
        let mixed = a.add_aligned(&b);
        assert_eq!(mixed.offset(), Some(2));
        assert_eq!(mixed.len(), 5);
        assert_eq!(mixed.samples(), &[1.0, 1.0, 3.0, 2.0, 2.0]);
    }

    #[test]
    fn test_add_aligned_negative_offset() {
        let a = Block::from_samples(vec![1.0, 1.0]).at_offset(-2);
        let b = Block::from_samples(vec![2.0, 2.0]);
        let mixed = a.add_aligned(&b);
        assert_eq!(mixed.offset(), Some(-2));
        assert_eq!(mixed.samples(), &[1.0, 1.0, 2.0, 2.0]);
    }

    #[test]
    fn test_add_aligned_missing_offset_counts_as_zero() {
        let a = Block::from_samples(vec![1.0, 1.0, 1.0, 1.0]);
        let b = Block::from_samples(vec![2.0, 2.0]).at_offset(1);
        let mixed = a.add_aligned(&b);
        assert_eq!(mixed.offset(), Some(0));
        assert_eq!(mixed.samples(), &[1.0, 3.0, 3.0, 1.0]);
    }

    #[test]
    fn test_results_keep_receiver_rate() {
        let a = Block::with_rate(4, 48_000);
        let b = Block::from_samples(vec![1.0, 1.0]);
        assert_eq!(a.add(&b).sample_rate(), 48_000);
        assert_eq!(a.concat(&b).sample_rate(), 48_000);
        assert_eq!(a.reverse().sample_rate(), 48_000);
        assert_eq!(a.repeat(2).unwrap().sample_rate(), 48_000);
    }
}
