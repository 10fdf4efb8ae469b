#![no_main]

use std::ffi::CString;

use hashes::fast::{Djb2_32, Djb2_64, djb2, djb2_bytes, djb2_ptr};
use libfuzzer_sys::fuzz_target;
use traits::FastHash as _;

fuzz_target!(|input: &[u8]| {
  let mut acc32 = 5381u32;
  let mut acc64 = 5381u64;
  for &b in input {
    acc32 = acc32.wrapping_mul(33).wrapping_add(u32::from(b));
    acc64 = acc64.wrapping_mul(33).wrapping_add(u64::from(b));
  }
  assert_eq!(Djb2_32::hash(input), acc32);
  assert_eq!(Djb2_64::hash(input), acc64);

  // The C-string paths see everything up to the first NUL.
  let head = input.split(|&b| b == 0).next().unwrap_or_default();
  let Ok(owned) = CString::new(head) else {
    return;
  };
  assert_eq!(djb2(&owned), djb2_bytes(input));
  // SAFETY: `owned` is NUL-terminated and outlives the call.
  assert_eq!(unsafe { djb2_ptr(owned.as_ptr()) }, Ok(djb2(&owned)));
});
