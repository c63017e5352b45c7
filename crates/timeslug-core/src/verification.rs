//! Verification hash lengths and encoding.
//!
//! The hash published next to a slug is a lowercase hex prefix of an
//! entropy buffer. Its length depends on the mode:
//!
//! * mnemonic: `ceil(words * 11 / 8)` bytes of the primary entropy, so the
//!   hash covers exactly the bits the words encode;
//! * obfuscated: `(length + 1) / 2` bytes of the auxiliary entropy, capped
//!   at 16 bytes and floored at zero.

use timeslug_crypto::mnemonic::BITS_PER_WORD;
use timeslug_types::Entropy;

/// Largest obfuscated hash, in bytes.
pub const MAX_OBFUSCATED_HASH_BYTES: usize = 16;

/// Bytes of primary entropy covered by `words` mnemonic words.
pub fn mnemonic_hash_len(words: usize) -> usize {
    (words * BITS_PER_WORD + 7) / 8
}

/// Bytes of auxiliary entropy for a requested obfuscated `length`.
pub fn obfuscated_hash_len(length: i64) -> usize {
    let half = length.saturating_add(1) / 2;
    usize::try_from(half.max(0))
        .unwrap_or(MAX_OBFUSCATED_HASH_BYTES)
        .min(MAX_OBFUSCATED_HASH_BYTES)
}

/// Lowercase hex of the first `len` bytes of `entropy` (at most 32).
pub fn hex_prefix(entropy: &Entropy, len: usize) -> String {
    let bytes = entropy.as_bytes();
    hex::encode(&bytes[..len.min(bytes.len())])
}
