//! SHA-256 digests.
//!
//! Used for the mnemonic checksum: the first byte of `SHA-256(entropy)`
//! supplies the 8 bits that extend 256 entropy bits to 264 = 24 × 11.

use sha2::{Digest, Sha256};
use timeslug_types::Entropy;

/// Computes the SHA-256 hash of arbitrary data.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let result = Sha256::digest(data);
    let mut out = [0u8; 32];
    out.copy_from_slice(&result);
    out
}

/// Returns the mnemonic checksum byte: `SHA-256(entropy)[0]`.
pub fn checksum_byte(entropy: &Entropy) -> u8 {
    sha256(entropy.as_bytes())[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    /// FIPS 180-2 SHA-256 test vector: empty input.
    #[test]
    fn sha256_empty_input() {
        let expected = [
            0xe3, 0xb0, 0xc4, 0x42, 0x98, 0xfc, 0x1c, 0x14,
            0x9a, 0xfb, 0xf4, 0xc8, 0x99, 0x6f, 0xb9, 0x24,
            0x27, 0xae, 0x41, 0xe4, 0x64, 0x9b, 0x93, 0x4c,
            0xa4, 0x95, 0x99, 0x1b, 0x78, 0x52, 0xb8, 0x55,
        ];
        assert_eq!(sha256(b""), expected);
    }

    /// FIPS 180-2 SHA-256 test vector: "abc".
    #[test]
    fn sha256_abc() {
        let expected = [
            0xba, 0x78, 0x16, 0xbf, 0x8f, 0x01, 0xcf, 0xea,
            0x41, 0x41, 0x40, 0xde, 0x5d, 0xae, 0x22, 0x23,
            0xb0, 0x03, 0x61, 0xa3, 0x96, 0x17, 0x7a, 0x9c,
            0xb4, 0x10, 0xff, 0x61, 0xf2, 0x00, 0x15, 0xad,
        ];
        assert_eq!(sha256(b"abc"), expected);
    }

    #[test]
    fn checksum_of_zero_entropy() {
        // SHA-256 of 32 zero bytes starts with 0x66; its top 8 bits
        // produce the "art" tail of the all-"abandon" mnemonic.
        assert_eq!(checksum_byte(&Entropy::new([0u8; 32])), 0x66);
    }
}
