//! Incremental hashing trait.
//!
//! Every hash in this workspace folds one byte at a time into a single word,
//! so splitting the input across several [`update`](StreamingHash::update)
//! calls never changes the result.

use core::fmt::Debug;

/// Incremental non-cryptographic hash.
///
/// # Usage
///
/// ```rust,ignore
/// use hashes::fast::Fnv1a64;
/// use traits::StreamingHash;
///
/// // One-shot
/// let h = Fnv1a64::hash_all(b"hello world");
///
/// // Streaming
/// let mut hasher = Fnv1a64::new();
/// hasher.update(b"hello ");
/// hasher.update(b"world");
/// assert_eq!(hasher.finalize(), h);
/// ```
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `finalize()` must be idempotent (calling multiple times returns same value)
/// - `reset()` must restore the hasher to its initial state
pub trait StreamingHash: Clone + Default {
  /// Output size in bytes.
  ///
  /// - 32-bit variants: 4
  /// - 64-bit variants: 8
  const OUTPUT_SIZE: usize;

  /// The hash output type.
  type Output: Copy + Eq + Debug + Default;

  /// Create a new hasher seeded with the published initial value.
  #[must_use]
  fn new() -> Self;

  /// Create a new hasher with a custom accumulator.
  ///
  /// Passing a previous [`finalize`](Self::finalize) result resumes hashing
  /// where it left off.
  #[must_use]
  fn with_initial(initial: Self::Output) -> Self;

  /// Fold `data` into the hasher.
  fn update(&mut self, data: &[u8]);

  /// Fold several non-contiguous buffers into the hasher, in order.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Update the hasher with `std::io::IoSlice` buffers.
  #[cfg(feature = "std")]
  #[inline]
  fn update_io_slices(&mut self, bufs: &[std::io::IoSlice<'_>]) {
    for buf in bufs {
      self.update(buf);
    }
  }

  /// Return the current hash value without consuming the hasher.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Reset the hasher to its initial state.
  fn reset(&mut self);

  /// Hash `data` in one shot.
  #[inline]
  #[must_use]
  fn hash_all(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }

  /// Hash several buffers in one shot, as if they were concatenated.
  #[inline]
  #[must_use]
  fn hash_vectored(bufs: &[&[u8]]) -> Self::Output {
    let mut h = Self::new();
    h.update_vectored(bufs);
    h.finalize()
  }
}
