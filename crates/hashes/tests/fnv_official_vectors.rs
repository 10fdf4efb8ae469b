use hashes::fast::{Fnv1_32, Fnv1_64, Fnv1a32, Fnv1a64};
use traits::FastHash as _;

/// (input, fnv1a-32, fnv1a-64, fnv1-32, fnv1-64), from the FNV reference test suite.
const VECTORS: &[(&[u8], u32, u64, u32, u64)] = &[
  (b"", 0x811c_9dc5, 0xcbf2_9ce4_8422_2325, 0x811c_9dc5, 0xcbf2_9ce4_8422_2325),
  (b"a", 0xe40c_292c, 0xaf63_dc4c_8601_ec8c, 0x050c_5d7e, 0xaf63_bd4c_8601_b7be),
  (b"b", 0xe70c_2de5, 0xaf63_df4c_8601_f1a5, 0x050c_5d7d, 0xaf63_bd4c_8601_b7bd),
  (b"c", 0xe60c_2c52, 0xaf63_de4c_8601_eff2, 0x050c_5d7c, 0xaf63_bd4c_8601_b7bc),
  (b"d", 0xe10c_2473, 0xaf63_d94c_8601_e773, 0x050c_5d7b, 0xaf63_bd4c_8601_b7bb),
  (b"e", 0xe00c_22e0, 0xaf63_d84c_8601_e5c0, 0x050c_5d7a, 0xaf63_bd4c_8601_b7ba),
  (b"f", 0xe30c_2799, 0xaf63_db4c_8601_ead9, 0x050c_5d79, 0xaf63_bd4c_8601_b7b9),
  (b"fo", 0x6222_e842, 0x0898_5907_b541_d342, 0x6b77_2514, 0x0832_6207_b4eb_2f34),
  (b"foo", 0xa9f3_7ed7, 0xdcb2_7518_fed9_d577, 0x408f_5e13, 0xd8cb_c718_6ba1_3533),
  (b"foob", 0x3f50_76ef, 0xdd12_0e79_0c25_12af, 0xb4b1_178b, 0x0378_817e_e2ed_65cb),
  (b"fooba", 0x39aa_a18a, 0xcac1_65af_a2fe_f40a, 0xfdc8_0fb0, 0xd329_d59b_9963_f790),
  (b"foobar", 0xbf9c_f968, 0x8594_4171_f739_67e8, 0x31f0_b262, 0x340d_8765_a4dd_a9c2),
  (b"\0", 0x050c_5d1f, 0xaf63_bd4c_8601_b7df, 0x050c_5d1f, 0xaf63_bd4c_8601_b7df),
  (b"a\0", 0x2b24_d044, 0x089b_e207_b544_f1e4, 0x7077_2d5a, 0x0832_6707_b4eb_37da),
  (b"foobar\0", 0x0c1c_9eb8, 0x3453_1ca7_168b_8f38, 0xffe8_d046, 0x50a6_d3b7_24a7_74a6),
  (b"chongo was here!\n", 0xd499_30d5, 0x4681_0940_eff5_f915, 0xdd00_2f35, 0xe0ac_a20b_624e_4235),
  (b"127.0.0.1", 0x08a3_d11e, 0xaaba_fe71_04d9_14be, 0x0a3c_ffd8, 0x34ad_3b10_4120_4318),
];

#[test]
fn fnv1a_32_official_vectors() {
  for (i, &(input, expected, _, _, _)) in VECTORS.iter().enumerate() {
    assert_eq!(Fnv1a32::hash(input), expected, "fnv1a-32 mismatch at case {i} ({input:?})");
  }
}

#[test]
fn fnv1a_64_official_vectors() {
  for (i, &(input, _, expected, _, _)) in VECTORS.iter().enumerate() {
    assert_eq!(Fnv1a64::hash(input), expected, "fnv1a-64 mismatch at case {i} ({input:?})");
  }
}

#[test]
fn fnv1_32_official_vectors() {
  for (i, &(input, _, _, expected, _)) in VECTORS.iter().enumerate() {
    assert_eq!(Fnv1_32::hash(input), expected, "fnv1-32 mismatch at case {i} ({input:?})");
  }
}

#[test]
fn fnv1_64_official_vectors() {
  for (i, &(input, _, _, _, expected)) in VECTORS.iter().enumerate() {
    assert_eq!(Fnv1_64::hash(input), expected, "fnv1-64 mismatch at case {i} ({input:?})");
  }
}

#[test]
fn orderings_disagree_on_nonzero_input() {
  // A lone NUL byte is the one input where XOR is a no-op and both orderings agree.
  let mut disagreements = 0usize;
  for &(input, a32, a64, o32, o64) in VECTORS {
    if input.iter().any(|&b| b != 0) {
      assert_ne!(a32, o32, "32-bit orderings agree on {input:?}");
      assert_ne!(a64, o64, "64-bit orderings agree on {input:?}");
      disagreements += 1;
    }
  }
  assert!(disagreements > 0);
}
