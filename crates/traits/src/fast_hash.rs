//! Fast non-cryptographic hash traits (**NOT CRYPTO**).

use core::fmt::Debug;

/// A fast non-cryptographic hash.
///
/// These hashes are suitable for hash tables, sharding, fingerprints, and other
/// non-adversarial settings. They are **not** suitable for signatures, MACs,
/// password hashing, or untrusted inputs where collision attacks matter.
///
/// The seed is the algorithm's initial accumulator. For FNV that is the offset
/// basis, for djb2 it is `5381`. [`DEFAULT_SEED`](Self::DEFAULT_SEED) carries
/// the published value, so [`hash`](Self::hash) always reproduces the
/// reference vectors.
pub trait FastHash {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// Hash output type.
  type Output: Copy + Eq + Debug + Default;

  /// Seed type (the accumulator word).
  type Seed: Copy + Debug;

  /// Seed used by [`hash`](Self::hash).
  const DEFAULT_SEED: Self::Seed;

  /// Compute the hash of `data` using the published seed.
  #[inline]
  #[must_use]
  fn hash(data: &[u8]) -> Self::Output {
    Self::hash_with_seed(Self::DEFAULT_SEED, data)
  }

  /// Compute the hash of `data` starting from `seed`.
  #[must_use]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output;
}
