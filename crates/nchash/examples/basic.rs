//! Basic usage: one-shot, streaming, and bucket placement.
//!
//! Run with: `cargo run --example basic -p nchash`

use std::collections::HashMap;

use nchash::{BucketTable, BuildFnv1a64, Djb2_64, FastHash, Fnv1_64, Fnv1a32, Fnv1a64, StreamingHash, djb2, hash_64};

fn main() {
  println!("=== nchash Basic Examples ===\n");

  one_shot_examples();
  streaming_examples();
  table_examples();
}

/// One-shot computation over data already in memory.
fn one_shot_examples() {
  println!("--- One-Shot Computation ---\n");

  let word = djb2(c"hello");
  println!("djb2 (word):     {word}");

  let d64 = Djb2_64::hash(b"hello");
  println!("djb2-64:         {d64}");
  assert_eq!(d64, 210_714_636_441);

  let a32 = Fnv1a32::hash(b"foobar");
  println!("FNV-1a 32:       0x{a32:08x}");
  assert_eq!(a32, 0xbf9c_f968);

  let a64 = Fnv1a64::hash(b"foobar");
  println!("FNV-1a 64:       0x{a64:016x}");
  assert_eq!(a64, 0x8594_4171_f739_67e8);

  // FNV-1 multiplies before XOR; it is a different hash.
  let legacy = Fnv1_64::hash(b"foobar");
  println!("FNV-1 64:        0x{legacy:016x}");
  assert_ne!(legacy, a64);

  println!();
}

/// Streaming computation: process data in chunks.
fn streaming_examples() {
  println!("--- Streaming Computation ---\n");

  let mut h = Fnv1a64::new();
  for chunk in [&b"foo"[..], b"ba", b"r"] {
    h.update(chunk);
  }
  println!("FNV-1a 64 (3 chunks): 0x{:016x}", h.finalize());
  assert_eq!(h.finalize(), Fnv1a64::hash(b"foobar"));

  let mut map: HashMap<&str, u32, BuildFnv1a64> = HashMap::default();
  map.insert("alpha", 1);
  map.insert("beta", 2);
  println!("HashMap with FNV-1a: {} entries", map.len());

  println!();
}

/// Fold key hashes into a fixed number of buckets.
fn table_examples() {
  println!("--- Bucket Table ---\n");

  let bits = 4;
  for key in ["alpha", "beta", "gamma", "delta"] {
    let bucket = hash_64(Fnv1a64::hash(key.as_bytes()), bits);
    println!("{key:>6} -> bucket {bucket:2} of {}", 1u32 << bits);
  }

  let mut table = match BucketTable::new(bits) {
    Ok(table) => table,
    Err(e) => {
      eprintln!("{e}");
      return;
    }
  };
  for (i, key) in ["alpha", "beta", "gamma", "delta"].into_iter().enumerate() {
    table.insert(Fnv1a64::hash(key.as_bytes()), (key, i));
  }
  let hit = table.find(Fnv1a64::hash(b"gamma"), |(k, _)| *k == "gamma");
  println!("lookup gamma: {hit:?}");
  assert_eq!(hit, Some(&("gamma", 2)));
}
