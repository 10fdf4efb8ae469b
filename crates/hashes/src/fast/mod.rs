//! Fast non-cryptographic hashes (**NOT CRYPTO**).
//!
//! Do not use these hashes for signatures, MACs, key derivation, or anything
//! that needs collision or preimage resistance against an adversary.

pub mod djb2;
pub mod fnv;
pub mod golden;

pub use djb2::{Djb2_32, Djb2_64, djb2, djb2_bytes, djb2_ptr};
pub use fnv::{BuildFnv1a32, BuildFnv1a64, Fnv1_32, Fnv1_64, Fnv1a32, Fnv1a64, fnv1_32, fnv1_64, fnv1a_32, fnv1a_64};
pub use golden::{hash_32, hash_64, hash_64_narrow, hash_64_native};
