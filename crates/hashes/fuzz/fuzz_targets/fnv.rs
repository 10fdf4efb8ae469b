#![no_main]

use hashes::fast::{Fnv1_32, Fnv1_64, Fnv1a32, Fnv1a64};
use libfuzzer_sys::fuzz_target;
use traits::{FastHash as _, StreamingHash as _};

fuzz_target!(|input: &[u8]| {
  let ours64 = Fnv1a64::hash(input);
  let ours32 = Fnv1a32::hash(input);

  use core::hash::Hasher as _;
  let mut h64 = fnv::FnvHasher::default();
  h64.write(input);
  let exp64 = h64.finish();

  use hash32::Hasher as _;
  let mut h32 = hash32::FnvHasher::default();
  h32.write(input);
  let exp32 = h32.finish32();

  assert_eq!(ours64, exp64);
  assert_eq!(ours32, exp32);

  // Split at an input-derived point; streaming must match one-shot.
  let split = input.first().map_or(0, |&b| usize::from(b)).min(input.len());
  let (a, b) = input.split_at(split);
  let mut s = Fnv1_64::new();
  s.update(a);
  s.update(b);
  assert_eq!(s.finalize(), Fnv1_64::hash(input));

  let mut s = Fnv1_32::new();
  s.update_vectored(&[a, b]);
  assert_eq!(s.finalize(), Fnv1_32::hash(input));
});
