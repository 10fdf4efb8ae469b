//! Fowler–Noll–Vo hashes (**NOT CRYPTO**).
//!
//! | Type | Width | Step |
//! |------|-------|------|
//! | [`Fnv1a32`] | 32 | `acc ^= b; acc *= P32` |
//! | [`Fnv1a64`] | 64 | `acc ^= b; acc *= P64` |
//! | [`Fnv1_32`] | 32 | `acc *= P32; acc ^= b` |
//! | [`Fnv1_64`] | 64 | `acc *= P64; acc ^= b` |
//!
//! FNV-1a and FNV-1 disagree on every non-empty input; they are not
//! interchangeable. All multiplies wrap at the output width.
//!
//! References:
//! - <http://www.isthe.com/chongo/tech/comp/fnv/>
//! - <https://datatracker.ietf.org/doc/html/draft-eastlake-fnv-03>

#![allow(clippy::indexing_slicing)] // const fn loops index directly

use core::hash::{BuildHasherDefault, Hasher};

use traits::{FastHash, StreamingHash};

pub const FNV_OFFSET_BASIS_32: u32 = 0x811c_9dc5;
pub const FNV_PRIME_32: u32 = 0x0100_0193;
pub const FNV_OFFSET_BASIS_64: u64 = 0xcbf2_9ce4_8422_2325;
pub const FNV_PRIME_64: u64 = 0x0000_0100_0000_01b3;

macro_rules! fnv_kernels {
  ($a:ident, $one:ident, $word:ty, $prime:expr) => {
    /// FNV-1a starting from `basis`.
    #[inline]
    #[must_use]
    pub const fn $a(basis: $word, data: &[u8]) -> $word {
      let mut acc = basis;
      let mut i = 0;
      while i < data.len() {
        acc ^= data[i] as $word;
        acc = acc.wrapping_mul($prime);
        i += 1;
      }
      acc
    }

    /// FNV-1 starting from `basis`.
    #[inline]
    #[must_use]
    pub const fn $one(basis: $word, data: &[u8]) -> $word {
      let mut acc = basis;
      let mut i = 0;
      while i < data.len() {
        acc = acc.wrapping_mul($prime);
        acc ^= data[i] as $word;
        i += 1;
      }
      acc
    }
  };
}

fnv_kernels!(fnv1a_32_with_basis, fnv1_32_with_basis, u32, FNV_PRIME_32);
fnv_kernels!(fnv1a_64_with_basis, fnv1_64_with_basis, u64, FNV_PRIME_64);

/// FNV-1a, 32-bit.
///
/// ```
/// use hashes::fast::fnv::fnv1a_32;
///
/// assert_eq!(fnv1a_32(b""), 0x811c_9dc5);
/// assert_eq!(fnv1a_32(b"foobar"), 0xbf9c_f968);
/// ```
#[inline]
#[must_use]
pub const fn fnv1a_32(data: &[u8]) -> u32 {
  fnv1a_32_with_basis(FNV_OFFSET_BASIS_32, data)
}

/// FNV-1a, 64-bit.
///
/// ```
/// use hashes::fast::fnv::fnv1a_64;
///
/// assert_eq!(fnv1a_64(b""), 0xcbf2_9ce4_8422_2325);
/// assert_eq!(fnv1a_64(b"foobar"), 0x8594_4171_f739_67e8);
/// ```
#[inline]
#[must_use]
pub const fn fnv1a_64(data: &[u8]) -> u64 {
  fnv1a_64_with_basis(FNV_OFFSET_BASIS_64, data)
}

/// FNV-1, 32-bit.
#[inline]
#[must_use]
pub const fn fnv1_32(data: &[u8]) -> u32 {
  fnv1_32_with_basis(FNV_OFFSET_BASIS_32, data)
}

/// FNV-1, 64-bit.
#[inline]
#[must_use]
pub const fn fnv1_64(data: &[u8]) -> u64 {
  fnv1_64_with_basis(FNV_OFFSET_BASIS_64, data)
}

/// Generate an FNV variant type with `FastHash` and `StreamingHash` impls.
///
/// - `$name`: The type name (e.g., `Fnv1a32`)
/// - `$basis`: The published offset basis
/// - `$kernel`: The `(basis, data) -> word` loop
macro_rules! define_fnv_type {
  (
    $(#[$outer:meta])*
    $vis:vis struct $name:ident($word:ty) {
      bytes: $bytes:expr,
      basis: $basis:expr,
      kernel: $kernel:path,
    }
  ) => {
    $(#[$outer])*
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    $vis struct $name {
      state: $word,
    }

    impl $name {
      /// Create a hasher starting from a non-standard offset basis.
      #[inline]
      #[must_use]
      pub const fn with_offset_basis(basis: $word) -> Self {
        Self { state: basis }
      }

      /// Hash `data` with the published offset basis.
      #[inline]
      #[must_use]
      pub const fn hash_bytes(data: &[u8]) -> $word {
        $kernel($basis, data)
      }
    }

    impl Default for $name {
      #[inline]
      fn default() -> Self {
        Self { state: $basis }
      }
    }

    impl FastHash for $name {
      const OUTPUT_SIZE: usize = $bytes;
      type Output = $word;
      type Seed = $word;
      const DEFAULT_SEED: $word = $basis;

      #[inline]
      fn hash_with_seed(seed: $word, data: &[u8]) -> $word {
        $kernel(seed, data)
      }
    }

    impl StreamingHash for $name {
      const OUTPUT_SIZE: usize = $bytes;
      type Output = $word;

      #[inline]
      fn new() -> Self {
        Self::default()
      }

      #[inline]
      fn with_initial(initial: $word) -> Self {
        Self::with_offset_basis(initial)
      }

      #[inline]
      fn update(&mut self, data: &[u8]) {
        self.state = $kernel(self.state, data);
      }

      #[inline]
      fn finalize(&self) -> $word {
        self.state
      }

      #[inline]
      fn reset(&mut self) {
        *self = Self::default();
      }
    }
  };
}

define_fnv_type! {
  /// FNV-1a with 32-bit output.
  pub struct Fnv1a32(u32) {
    bytes: 4,
    basis: FNV_OFFSET_BASIS_32,
    kernel: fnv1a_32_with_basis,
  }
}

define_fnv_type! {
  /// FNV-1a with 64-bit output.
  ///
  /// Also a [`Hasher`], so it can back a `HashMap` through [`BuildFnv1a64`].
  pub struct Fnv1a64(u64) {
    bytes: 8,
    basis: FNV_OFFSET_BASIS_64,
    kernel: fnv1a_64_with_basis,
  }
}

define_fnv_type! {
  /// FNV-1 (multiply before XOR) with 32-bit output.
  pub struct Fnv1_32(u32) {
    bytes: 4,
    basis: FNV_OFFSET_BASIS_32,
    kernel: fnv1_32_with_basis,
  }
}

define_fnv_type! {
  /// FNV-1 (multiply before XOR) with 64-bit output.
  pub struct Fnv1_64(u64) {
    bytes: 8,
    basis: FNV_OFFSET_BASIS_64,
    kernel: fnv1_64_with_basis,
  }
}

impl Hasher for Fnv1a64 {
  #[inline]
  fn finish(&self) -> u64 {
    self.state
  }

  #[inline]
  fn write(&mut self, bytes: &[u8]) {
    self.state = fnv1a_64_with_basis(self.state, bytes);
  }
}

/// The 32-bit state is zero-extended into `finish()`.
impl Hasher for Fnv1a32 {
  #[inline]
  fn finish(&self) -> u64 {
    u64::from(self.state)
  }

  #[inline]
  fn write(&mut self, bytes: &[u8]) {
    self.state = fnv1a_32_with_basis(self.state, bytes);
  }
}

#[cfg(feature = "hash32")]
impl hash32::Hasher for Fnv1a32 {
  #[inline]
  fn finish32(&self) -> u32 {
    self.state
  }
}

/// `BuildHasher` for [`Fnv1a64`]. Deterministic: no per-process random seed.
pub type BuildFnv1a64 = BuildHasherDefault<Fnv1a64>;

/// `BuildHasher` for [`Fnv1a32`].
pub type BuildFnv1a32 = BuildHasherDefault<Fnv1a32>;
