//! djb2 (**NOT CRYPTO**).
//!
//! Bernstein's string hash: start at `5381`, then `acc = acc * 33 + byte` for
//! every byte, wrapping at the word width. The multiply is spelled
//! `(acc << 5) + acc`.
//!
//! Two families live here:
//!
//! - [`djb2`], [`djb2_bytes`], [`djb2_ptr`] work on C strings and return the
//!   machine word (`usize`). They stop at the first NUL byte.
//! - [`Djb2_32`] and [`Djb2_64`] are fixed-width and hash every byte of the
//!   buffer, embedded NULs included.
//!
//! Bytes are added as unsigned values (`0..=255`). A C `char` loop on a target
//! with signed `char` adds bytes at or above `0x80` as negative numbers and so
//! gives different results for non-ASCII input.

#![allow(clippy::indexing_slicing)] // const fn loops index directly

use core::ffi::{CStr, c_char};

use traits::{FastHash, NullInputError, StreamingHash};

/// Initial accumulator.
pub const DJB2_SEED: u32 = 5381;

macro_rules! djb2_step {
  ($acc:expr, $byte:expr, $ty:ty) => {
    ($acc << 5).wrapping_add($acc).wrapping_add($byte as $ty)
  };
}

/// djb2 over `data` in `u32` arithmetic, starting from `seed`.
#[inline]
#[must_use]
pub const fn djb2_32_with_seed(seed: u32, data: &[u8]) -> u32 {
  let mut acc = seed;
  let mut i = 0;
  while i < data.len() {
    acc = djb2_step!(acc, data[i], u32);
    i += 1;
  }
  acc
}

/// djb2 over `data` in `u64` arithmetic, starting from `seed`.
#[inline]
#[must_use]
pub const fn djb2_64_with_seed(seed: u64, data: &[u8]) -> u64 {
  let mut acc = seed;
  let mut i = 0;
  while i < data.len() {
    acc = djb2_step!(acc, data[i], u64);
    i += 1;
  }
  acc
}

/// djb2 of a byte string, in machine-word arithmetic.
///
/// Hashing stops at the first NUL byte, so a buffer holding a C string with its
/// terminator gives the same value as [`djb2`].
///
/// ```
/// use hashes::fast::djb2::djb2_bytes;
///
/// assert_eq!(djb2_bytes(b"hello"), djb2_bytes(b"hello\0ignored"));
/// ```
#[inline]
#[must_use]
pub const fn djb2_bytes(data: &[u8]) -> usize {
  let mut acc = DJB2_SEED as usize;
  let mut i = 0;
  while i < data.len() {
    let c = data[i];
    if c == 0 {
      break;
    }
    acc = djb2_step!(acc, c, usize);
    i += 1;
  }
  acc
}

/// djb2 of a C string, in machine-word arithmetic.
///
/// ```
/// use hashes::fast::djb2::djb2;
///
/// # #[cfg(target_pointer_width = "64")]
/// assert_eq!(djb2(c"hello"), 210_714_636_441);
/// ```
#[inline]
#[must_use]
pub fn djb2(input: &CStr) -> usize {
  djb2_bytes(input.to_bytes())
}

/// djb2 of a raw C string pointer.
///
/// A null pointer is reported as [`NullInputError`] rather than hashed or
/// treated as fatal.
///
/// # Errors
///
/// Returns [`NullInputError`] if `ptr` is null.
///
/// # Safety
///
/// If `ptr` is non-null it must satisfy the requirements of
/// [`CStr::from_ptr`]: it points to a NUL-terminated string that stays valid
/// and unmodified for the duration of the call.
#[inline]
pub unsafe fn djb2_ptr(ptr: *const c_char) -> Result<usize, NullInputError> {
  if ptr.is_null() {
    return Err(NullInputError::new());
  }
  // SAFETY: non-null checked above; the remaining requirements are the caller's.
  let input = unsafe { CStr::from_ptr(ptr) };
  Ok(djb2(input))
}

macro_rules! define_djb2_type {
  (
    $(#[$outer:meta])*
    $vis:vis struct $name:ident($word:ty) {
      bytes: $bytes:expr,
      oneshot: $oneshot:path,
    }
  ) => {
    $(#[$outer])*
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    $vis struct $name {
      state: $word,
    }

    impl $name {
      /// Hash `data` with the published seed.
      #[inline]
      #[must_use]
      pub const fn hash_bytes(data: &[u8]) -> $word {
        $oneshot(DJB2_SEED as $word, data)
      }
    }

    impl Default for $name {
      #[inline]
      fn default() -> Self {
        Self { state: DJB2_SEED as $word }
      }
    }

    impl FastHash for $name {
      const OUTPUT_SIZE: usize = $bytes;
      type Output = $word;
      type Seed = $word;
      const DEFAULT_SEED: $word = DJB2_SEED as $word;

      #[inline]
      fn hash_with_seed(seed: $word, data: &[u8]) -> $word {
        $oneshot(seed, data)
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
        Self { state: initial }
      }

      #[inline]
      fn update(&mut self, data: &[u8]) {
        self.state = $oneshot(self.state, data);
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

define_djb2_type! {
  /// djb2 with 32-bit wraparound. Hashes the full buffer.
  pub struct Djb2_32(u32) {
    bytes: 4,
    oneshot: djb2_32_with_seed,
  }
}

define_djb2_type! {
  /// djb2 with 64-bit wraparound. Hashes the full buffer.
  pub struct Djb2_64(u64) {
    bytes: 8,
    oneshot: djb2_64_with_seed,
  }
}
