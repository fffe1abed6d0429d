#![no_main]

use hashes::{Digest as _, crypto::Sha256};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  let ours = Sha256::digest(data);

  use sha2::Digest as _;
  let ref_out = sha2::Sha256::digest(data);
  let mut expected = [0u8; 32];
  expected.copy_from_slice(&ref_out);

  assert_eq!(ours, expected);

  let hex = Sha256::digest_hex(data);
  assert_eq!(hex.as_str().len(), 64);
  assert_eq!(hashes::crypto::sha256::pad(data).len(), hashes::crypto::sha256::padded_len(data.len()));
});
