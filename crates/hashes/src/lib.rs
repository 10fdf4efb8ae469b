//! Small non-cryptographic hashes.
//!
//! This crate is `no_std` compatible and has no library dependencies outside
//! the workspace (the optional `hash32` interop aside). Dev-only dependencies
//! are used for oracle testing and benchmarking.
//!
//! # Modules
//!
//! - [`fast`] - djb2, FNV-1, FNV-1a and golden-ratio folding (**NOT CRYPTO**).
//! - [`table`] - Fixed-size chained bucket table (requires `alloc`).
//!
//! # Example
//!
//! ```rust
//! use hashes::{FastHash, StreamingHash, fast::Fnv1a64};
//!
//! let h = Fnv1a64::hash(b"foobar");
//! assert_eq!(h, 0x8594_4171_f739_67e8);
//!
//! let mut s = Fnv1a64::new();
//! s.update(b"foo");
//! s.update(b"bar");
//! assert_eq!(s.finalize(), h);
//! ```
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod fast;
#[cfg(feature = "alloc")]
pub mod table;

pub use traits::{BucketBitsError, FastHash, NullInputError, StreamingHash};
