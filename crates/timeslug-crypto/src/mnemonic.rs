//! Mnemonic encoding of entropy into dictionary words.
//!
//! Follows the BIP39 layout for 256-bit entropy:
//!
//! 1. `SHA-256(entropy)`; its first byte is the 8-bit checksum.
//! 2. 256 entropy bits followed by 8 checksum bits = 264 bits, MSB first.
//! 3. 24 groups of 11 bits, big-endian within each group.
//! 4. Each group indexes the 2048-word [`Dictionary`].
//!
//! A slug is the first `n` of those 24 words concatenated without
//! separators.

use timeslug_types::{Entropy, Result, TimeslugError};

use crate::hash::checksum_byte;
use crate::wordlist::Dictionary;

/// Number of words 264 bits encode.
pub const WORD_COUNT: usize = 24;

/// Bits consumed per word.
pub const BITS_PER_WORD: usize = 11;

/// Total bits: 256 entropy + 8 checksum.
const TOTAL_BITS: usize = WORD_COUNT * BITS_PER_WORD;

/// Clamps a requested word count into `1..=24`.
pub fn clamp_word_count(requested: i64) -> usize {
    // 1..=24 always fits in usize.
    requested.clamp(1, WORD_COUNT as i64) as usize
}

/// Slices `entropy ∥ checksum` into 24 eleven-bit word indices.
pub fn word_indices(entropy: &Entropy) -> [u16; WORD_COUNT] {
    let checksum = checksum_byte(entropy);

    let mut bits = Vec::with_capacity(TOTAL_BITS);

    // Entropy bits (256).
    for byte in entropy.as_bytes() {
        for j in (0..8).rev() {
            bits.push((byte >> j) & 1);
        }
    }

    // Checksum bits (8).
    for j in (0..8).rev() {
        bits.push((checksum >> j) & 1);
    }

    let mut indices = [0u16; WORD_COUNT];
    for (i, idx) in indices.iter_mut().enumerate() {
        for j in 0..BITS_PER_WORD {
            *idx = (*idx << 1) | u16::from(bits[i * BITS_PER_WORD + j]);
        }
    }
    indices
}

/// Maps entropy to its full 24-word sequence.
///
/// # Errors
///
/// Returns [`TimeslugError::DictionaryError`] if an index has no word,
/// which only happens with an unvalidated dictionary.
pub fn entropy_to_words<'d>(entropy: &Entropy, dictionary: &'d Dictionary) -> Result<Vec<&'d str>> {
    word_indices(entropy)
        .iter()
        .map(|&idx| {
            dictionary
                .word(idx)
                .ok_or_else(|| TimeslugError::DictionaryError {
                    reason: format!("word index {idx} out of range"),
                })
        })
        .collect()
}

/// Concatenates the first `word_count` words (clamped into `1..=24`).
pub fn mnemonic_slug(entropy: &Entropy, word_count: i64, dictionary: &Dictionary) -> Result<String> {
    let words = entropy_to_words(entropy, dictionary)?;
    Ok(words[..clamp_word_count(word_count)].concat())
}
