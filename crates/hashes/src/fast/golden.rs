//! Golden-ratio multiplicative folding (**NOT CRYPTO**).
//!
//! Multiply by a constant derived from the golden ratio and keep the top `bits`
//! bits of the product. This maps a word onto `0..2^bits` without a modulo,
//! and spreads nearby inputs across the whole range. Table sizes must be
//! powers of two for the shift to be a valid index.
//!
//! `bits` must be at most 32. `bits == 0` folds everything to `0`.

/// `2^32 / phi`, rounded to odd.
pub const GOLDEN_RATIO_32: u32 = 0x61c8_8647;
/// `2^64 / phi`, rounded to odd.
pub const GOLDEN_RATIO_64: u64 = 0x61c8_8646_80b5_83eb;

/// Multiply by [`GOLDEN_RATIO_32`] without folding.
#[inline(always)]
#[must_use]
pub const fn mix_32(val: u32) -> u32 {
  val.wrapping_mul(GOLDEN_RATIO_32)
}

/// Fold a 32-bit value onto `bits` bits.
///
/// ```
/// use hashes::fast::golden::hash_32;
///
/// assert!(hash_32(0xdead_beef, 10) < 1 << 10);
/// assert_eq!(hash_32(12345, 0), 0);
/// ```
#[inline]
#[must_use]
pub const fn hash_32(val: u32, bits: u32) -> u32 {
  debug_assert!(bits <= 32, "hash_32: bits must be <= 32");
  match mix_32(val).checked_shr(32u32.saturating_sub(bits)) {
    Some(h) => h,
    None => 0,
  }
}

/// Fold a 64-bit value onto `bits` bits with one 64x64 multiply.
///
/// ```
/// use hashes::fast::golden::hash_64;
///
/// assert_eq!(hash_64(0, 16), 0);
/// assert!(hash_64(u64::MAX, 16) < 1 << 16);
/// ```
#[inline]
#[must_use]
pub const fn hash_64(val: u64, bits: u32) -> u32 {
  debug_assert!(bits <= 32, "hash_64: bits must be <= 32");
  let bits = if bits > 32 { 32 } else { bits };
  match val.wrapping_mul(GOLDEN_RATIO_64).checked_shr(64 - bits) {
    Some(h) => h as u32,
    None => 0,
  }
}

/// Fold a 64-bit value onto `bits` bits using only 32x32 multiplies.
///
/// This is the path for targets without a cheap 64-bit multiply. It does not
/// produce the same values as [`hash_64`].
#[inline]
#[must_use]
pub const fn hash_64_narrow(val: u64, bits: u32) -> u32 {
  hash_32((val as u32) ^ mix_32((val >> 32) as u32), bits)
}

/// Fold a 64-bit value using whichever path suits the target's word size.
#[cfg(target_pointer_width = "64")]
#[inline]
#[must_use]
pub const fn hash_64_native(val: u64, bits: u32) -> u32 {
  hash_64(val, bits)
}

/// Fold a 64-bit value using whichever path suits the target's word size.
#[cfg(not(target_pointer_width = "64"))]
#[inline]
#[must_use]
pub const fn hash_64_native(val: u64, bits: u32) -> u32 {
  hash_64_narrow(val, bits)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn reference_values() {
    assert_eq!(hash_64(1, 10), 391);
    assert_eq!(hash_64(0xdead_beef, 16), 65312);
    assert_eq!(hash_64(12345, 8), 94);
    assert_eq!(hash_32(1, 10), 391);
    assert_eq!(hash_32(0xdead_beef, 16), 28121);
  }

  #[test]
  fn zero_bits_is_single_bucket() {
    assert_eq!(hash_32(u32::MAX, 0), 0);
    assert_eq!(hash_64(u64::MAX, 0), 0);
    assert_eq!(hash_64_narrow(u64::MAX, 0), 0);
  }

  #[test]
  fn full_width_keeps_top_word() {
    assert_eq!(hash_32(7, 32), mix_32(7));
    assert_eq!(hash_64(7, 32), (7u64.wrapping_mul(GOLDEN_RATIO_64) >> 32) as u32);
  }

  #[test]
  fn output_below_bucket_count() {
    for bits in 1..=32u32 {
      let limit = 1u64 << bits;
      for val in [0u64, 1, 2, 0xffff, 0xdead_beef_cafe_f00d, u64::MAX] {
        assert!(u64::from(hash_64(val, bits)) < limit, "hash_64 val={val:#x} bits={bits}");
        assert!(u64::from(hash_64_narrow(val, bits)) < limit, "narrow val={val:#x} bits={bits}");
        assert!(u64::from(hash_32(val as u32, bits)) < limit, "hash_32 val={val:#x} bits={bits}");
      }
    }
  }

  #[test]
  fn native_path_follows_word_size() {
    for val in [0u64, 1, 0xdead_beef, 0xdead_beef_cafe_f00d, u64::MAX] {
      for bits in [1u32, 10, 16, 32] {
        #[cfg(target_pointer_width = "64")]
        assert_eq!(hash_64_native(val, bits), hash_64(val, bits));
        #[cfg(not(target_pointer_width = "64"))]
        assert_eq!(hash_64_native(val, bits), hash_64_narrow(val, bits));
      }
    }
  }

  #[test]
  fn narrow_path_mixes_high_word() {
    assert_ne!(hash_64_narrow(1, 16), hash_64_narrow(1 | (1 << 32), 16));
  }

  #[test]
  fn sequential_keys_spread() {
    let bits = 6;
    let mut seen = [false; 64];
    for k in 0..64u64 {
      seen[hash_64(k, bits) as usize] = true;
    }
    let used = seen.iter().filter(|&&b| b).count();
    assert!(used > 32, "only {used} of 64 buckets used");
  }
}
