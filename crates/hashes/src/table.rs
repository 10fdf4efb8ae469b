//! Fixed-size chained bucket table.
//!
//! `2^bits` buckets, each an independently owned chain. Entries are placed by
//! folding a caller-supplied 64-bit key hash with
//! [`hash_64`](crate::fast::golden::hash_64). The table never resizes and has
//! no per-entry removal; pick `bits` for the expected population up front.
//!
//! ```
//! use hashes::{fast::fnv::fnv1a_64, table::BucketTable};
//!
//! let mut table = BucketTable::new(4)?;
//! table.insert(fnv1a_64(b"alpha"), ("alpha", 1));
//! table.insert(fnv1a_64(b"beta"), ("beta", 2));
//!
//! let hit = table.find(fnv1a_64(b"beta"), |(k, _)| *k == "beta");
//! assert_eq!(hit, Some(&("beta", 2)));
//! # Ok::<(), hashes::BucketBitsError>(())
//! ```

use alloc::{boxed::Box, vec::Vec};

use traits::BucketBitsError;

use crate::fast::golden::hash_64;

/// Largest accepted `bits` (16M buckets).
pub const MAX_BUCKET_BITS: u32 = 24;

#[derive(Clone, Debug)]
pub struct BucketTable<T> {
  buckets: Box<[Vec<T>]>,
  bits: u32,
  len: usize,
}

impl<T> BucketTable<T> {
  /// Allocate `2^bits` empty buckets.
  ///
  /// # Errors
  ///
  /// Returns [`BucketBitsError`] unless `1 <= bits <= MAX_BUCKET_BITS`.
  pub fn new(bits: u32) -> Result<Self, BucketBitsError> {
    if bits == 0 || bits > MAX_BUCKET_BITS {
      return Err(BucketBitsError::new(bits, MAX_BUCKET_BITS));
    }
    let buckets = (0..1usize << bits).map(|_| Vec::new()).collect();
    Ok(Self { buckets, bits, len: 0 })
  }

  #[inline]
  #[must_use]
  pub const fn bits(&self) -> u32 {
    self.bits
  }

  #[inline]
  #[must_use]
  pub fn bucket_count(&self) -> usize {
    self.buckets.len()
  }

  /// Number of stored entries across all chains.
  #[inline]
  #[must_use]
  pub const fn len(&self) -> usize {
    self.len
  }

  #[inline]
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Bucket that `key_hash` lands in. Always `< bucket_count()`.
  #[inline]
  #[must_use]
  pub const fn bucket_index(&self, key_hash: u64) -> usize {
    hash_64(key_hash, self.bits) as usize
  }

  /// Append `value` to the chain for `key_hash`. Newest entries go last.
  pub fn insert(&mut self, key_hash: u64, value: T) {
    let idx = self.bucket_index(key_hash);
    if let Some(chain) = self.buckets.get_mut(idx) {
      chain.push(value);
      self.len += 1;
    }
  }

  /// The whole chain `key_hash` lands in, including unrelated colliding entries.
  #[must_use]
  pub fn bucket(&self, key_hash: u64) -> &[T] {
    self.buckets.get(self.bucket_index(key_hash)).map_or(&[][..], Vec::as_slice)
  }

  /// First entry in `key_hash`'s chain that satisfies `pred`.
  pub fn find<F>(&self, key_hash: u64, mut pred: F) -> Option<&T>
  where
    F: FnMut(&T) -> bool,
  {
    self.bucket(key_hash).iter().find(|v| pred(v))
  }

  /// Mutable variant of [`find`](Self::find).
  pub fn find_mut<F>(&mut self, key_hash: u64, mut pred: F) -> Option<&mut T>
  where
    F: FnMut(&T) -> bool,
  {
    let idx = self.bucket_index(key_hash);
    self.buckets.get_mut(idx)?.iter_mut().find(|v| pred(v))
  }

  /// Every entry, bucket by bucket.
  pub fn iter(&self) -> impl Iterator<Item = &T> {
    self.buckets.iter().flatten()
  }

  /// Empty every chain. Bucket storage is kept.
  pub fn clear(&mut self) {
    for chain in self.buckets.iter_mut() {
      chain.clear();
    }
    self.len = 0;
  }
}
