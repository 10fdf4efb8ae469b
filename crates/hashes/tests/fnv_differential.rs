use core::hash::Hasher as _;

use hashes::fast::{Fnv1a32, Fnv1a64};
use proptest::prelude::*;
use traits::FastHash as _;

fn fnv_crate_ref(data: &[u8]) -> u64 {
  let mut h = fnv::FnvHasher::default();
  h.write(data);
  h.finish()
}

fn fnv_crate_with_key_ref(key: u64, data: &[u8]) -> u64 {
  let mut h = fnv::FnvHasher::with_key(key);
  h.write(data);
  h.finish()
}

fn hash32_ref(data: &[u8]) -> u32 {
  use hash32::Hasher as _;
  let mut h = hash32::FnvHasher::default();
  h.write(data);
  h.finish32()
}

proptest! {
  #[test]
  fn fnv1a_64_matches_fnv_crate(data in proptest::collection::vec(any::<u8>(), 0..4096)) {
    prop_assert_eq!(Fnv1a64::hash(&data), fnv_crate_ref(&data));
  }

  #[test]
  fn fnv1a_64_seeded_matches_fnv_crate(key in any::<u64>(), data in proptest::collection::vec(any::<u8>(), 0..4096)) {
    prop_assert_eq!(Fnv1a64::hash_with_seed(key, &data), fnv_crate_with_key_ref(key, &data));
  }

  #[test]
  fn fnv1a_32_matches_hash32(data in proptest::collection::vec(any::<u8>(), 0..4096)) {
    prop_assert_eq!(Fnv1a32::hash(&data), hash32_ref(&data));
  }

  #[test]
  fn fnv1a_64_hasher_matches_fnv_crate(chunks in proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..64), 0..16)) {
    let mut ours = Fnv1a64::default();
    let mut theirs = fnv::FnvHasher::default();
    for chunk in &chunks {
      ours.write(chunk);
      theirs.write(chunk);
    }
    prop_assert_eq!(ours.finish(), theirs.finish());
  }
}
