//! FIPS 180-4 §4.2.2 and §5.3.3 tables.

/// Compression block size in bytes.
pub const BLOCK_LEN: usize = 64;

/// Digest size in bytes.
pub const OUTPUT_LEN: usize = 32;

/// Size of the trailing big-endian bit-length field.
pub const LENGTH_FIELD_LEN: usize = 8;

/// Offset of the length field within the final block.
pub const LENGTH_FIELD_OFFSET: usize = BLOCK_LEN - LENGTH_FIELD_LEN;

/// Initial hash value: first 32 bits of the fractional parts of the square
/// roots of the first eight primes.
pub const H0: [u32; 8] = [
  0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
];

/// Round constants: first 32 bits of the fractional parts of the cube roots of
/// the first sixty-four primes.
pub const K: [u32; 64] = [
  0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5, 0xd807aa98,
  0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174, 0xe49b69c1, 0xefbe4786,
  0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da, 0x983e5152, 0xa831c66d, 0xb00327c8,
  0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967, 0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13,
  0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85, 0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819,
  0xd6990624, 0xf40e3585, 0x106aa070, 0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a,
  0x5b9cca4f, 0x682e6ff3, 0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7,
  0xc67178f2,
];

#[cfg(test)]
mod tests {
  use super::*;

  /// Integer cube root of `n << 96`, i.e. `floor(cbrt(n) * 2^32)`.
  fn cbrt_fixed(n: u128) -> u128 {
    let target = n << 96;
    let (mut lo, mut hi) = (0u128, 1u128 << 40);
    while lo < hi {
      let mid = (lo + hi).div_ceil(2);
      if mid * mid * mid <= target { lo = mid } else { hi = mid - 1 }
    }
    lo
  }

  /// Integer square root of `n << 64`, i.e. `floor(sqrt(n) * 2^32)`.
  fn sqrt_fixed(n: u128) -> u128 {
    let target = n << 64;
    let (mut lo, mut hi) = (0u128, 1u128 << 40);
    while lo < hi {
      let mid = (lo + hi).div_ceil(2);
      if mid * mid <= target { lo = mid } else { hi = mid - 1 }
    }
    lo
  }

  fn first_primes(count: usize) -> [u128; 64] {
    let mut out = [0u128; 64];
    let mut found = 0;
    let mut n = 2u128;
    while found < count {
      if (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0) {
        out[found] = n;
        found += 1;
      }
      n += 1;
    }
    out
  }

  #[test]
  fn initial_state_is_fractional_square_roots() {
    let primes = first_primes(8);
    for (i, &h) in H0.iter().enumerate() {
      assert_eq!(sqrt_fixed(primes[i]) as u32, h, "H0[{i}]");
    }
  }

  #[test]
  fn round_constants_are_fractional_cube_roots() {
    let primes = first_primes(64);
    for (i, &k) in K.iter().enumerate() {
      assert_eq!(cbrt_fixed(primes[i]) as u32, k, "K[{i}]");
    }
  }

  #[test]
  fn layout() {
    assert_eq!(LENGTH_FIELD_OFFSET, 56);
    assert_eq!(OUTPUT_LEN, H0.len() * 4);
  }
}
