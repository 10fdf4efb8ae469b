//! Small, deterministic, non-cryptographic hashes.
//!
//! `nchash` re-exports djb2, FNV-1, FNV-1a and golden-ratio folding from one
//! place. Everything is `no_std` compatible and allocation-free; the bucket
//! table needs `alloc`.
//!
//! **None of these are cryptographic.** Use them for hash tables, sharding and
//! fingerprints over trusted data only.
//!
//! # Quick Start
//!
//! ```
//! use nchash::{FastHash, Fnv1a32, StreamingHash};
//!
//! // One-shot computation
//! let h = Fnv1a32::hash(b"foobar");
//! assert_eq!(h, 0xbf9c_f968);
//!
//! // Streaming computation
//! let mut hasher = Fnv1a32::new();
//! hasher.update(b"foo");
//! hasher.update(b"bar");
//! assert_eq!(hasher.finalize(), h);
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | `IoSlice` helpers and the `nchash` CLI |
//! | `alloc` | Yes | [`BucketTable`] (implied by `std`) |
//! | `hash32` | No | `hash32::Hasher` for [`Fnv1a32`] |
//!
//! ## `no_std` Usage
//!
//! ```toml
//! [dependencies]
//! nchash = { version = "0.1", default-features = false }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

// =============================================================================
// Traits & errors
// =============================================================================

pub use traits::{BucketBitsError, FastHash, NullInputError, StreamingHash};

// =============================================================================
// Hashes
// =============================================================================

pub use hashes::fast::{
  // djb2
  Djb2_32,
  Djb2_64,
  djb2,
  djb2_bytes,
  djb2_ptr,
  // FNV
  BuildFnv1a32,
  BuildFnv1a64,
  Fnv1_32,
  Fnv1_64,
  Fnv1a32,
  Fnv1a64,
  fnv1_32,
  fnv1_64,
  fnv1a_32,
  fnv1a_64,
  // Golden-ratio folding
  hash_32,
  hash_64,
  hash_64_narrow,
  hash_64_native,
};

/// Algorithm modules, for constants and seeded kernels.
pub mod fast {
  pub use hashes::fast::{djb2, fnv, golden};
}

#[cfg(feature = "alloc")]
pub use hashes::table::{BucketTable, MAX_BUCKET_BITS};

#[cfg(feature = "std")]
pub mod cli;
