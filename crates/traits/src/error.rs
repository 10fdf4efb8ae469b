//! Error types for hashing operations.
//!
//! Hash functions themselves cannot fail. Errors only arise at the edges: a
//! null C string handed to a pointer-based entry point, or a bucket table asked
//! for an unsupported size.

use core::fmt;

/// A null pointer was passed where a C string was expected.
///
/// Returned instead of aborting the process, so the caller decides how to
/// react.
///
/// # Examples
///
/// ```
/// use traits::NullInputError;
///
/// fn hash_name(name: Option<&[u8]>) -> Result<usize, NullInputError> {
///   let name = name.ok_or(NullInputError::new())?;
///   Ok(name.len())
/// }
///
/// assert_eq!(hash_name(None), Err(NullInputError::new()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct NullInputError;

impl NullInputError {
  /// Create a new null-input error.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Default for NullInputError {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for NullInputError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("null string passed to hash function")
  }
}

impl core::error::Error for NullInputError {}

/// A bucket table was requested with an unsupported number of index bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct BucketBitsError {
  /// The rejected bit count.
  pub bits: u32,
  /// Largest accepted bit count.
  pub max: u32,
}

impl BucketBitsError {
  #[inline]
  #[must_use]
  pub const fn new(bits: u32, max: u32) -> Self {
    Self { bits, max }
  }
}

impl fmt::Display for BucketBitsError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "bucket bits out of range: {} (expected 1..={})", self.bits, self.max)
  }
}

impl core::error::Error for BucketBitsError {}
