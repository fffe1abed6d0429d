//! Cross-kernel equivalence fuzzing.
//!
//! Verifies that every SHA-256 compression kernel produces identical digests
//! for any input.

#![no_main]

use hashes::__internal::kernel_test::verify_sha256_kernels;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  verify_sha256_kernels(data).expect("sha256 kernels should agree");
});
