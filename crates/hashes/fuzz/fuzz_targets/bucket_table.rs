#![no_main]

use hashes::{fast::fnv1a_64, table::BucketTable};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: &[u8]| {
  let Some((&bits, rest)) = input.split_first() else {
    return;
  };
  let Ok(mut table) = BucketTable::new(u32::from(bits % 12)) else {
    assert_eq!(bits % 12, 0);
    return;
  };

  for key in rest.chunks(4) {
    let h = fnv1a_64(key);
    assert!(table.bucket_index(h) < table.bucket_count());
    table.insert(h, key);
  }
  assert_eq!(table.len(), rest.chunks(4).count());

  for key in rest.chunks(4) {
    assert!(table.find(fnv1a_64(key), |k| *k == key).is_some());
  }
});
