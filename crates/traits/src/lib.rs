//! Core hashing traits for nchash.
//!
//! This crate provides the traits every nchash algorithm conforms to. It is
//! `no_std` compatible and has zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`FastHash`] | One-shot, seeded hashing | djb2, FNV-1a |
//! | [`StreamingHash`] | Incremental hashing | djb2, FNV-1, FNV-1a |
//!
//! None of these hashes are cryptographic. They are meant for hash tables,
//! sharding and fingerprints over trusted input.
//!
//! With `std`, [`io::HashReader`] and [`io::HashWriter`] hash bytes as they
//! stream through a reader or writer.
//!
//! # Error Types
//!
//! - [`NullInputError`] - A C string pointer was null
//! - [`BucketBitsError`] - A bucket table was sized out of range
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod error;
mod fast_hash;
#[cfg(feature = "std")]
pub mod io;
mod streaming;

pub use error::{BucketBitsError, NullInputError};
pub use fast_hash::FastHash;
pub use streaming::StreamingHash;
