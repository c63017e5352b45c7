//! Obfuscated-mode slug synthesis.
//!
//! A small generative grammar reads decision bytes from a cursor over the
//! entropy and assembles a brand-like name:
//!
//! ```text
//! [prefix] word1 [infix] word2 ending
//! ```
//!
//! The raw result is then padded to [`MIN_LEN`], cleared of blocklist
//! entries (bounded), cut down to [`MAX_LEN`] and stripped of triple
//! letters. Output is usually 10 to 18 characters; run cleanup or a
//! residual blocklist match can rarely push it outside that range.
//!
//! [`MIN_LEN`]: crate::normalize::MIN_LEN
//! [`MAX_LEN`]: crate::normalize::MAX_LEN

use timeslug_types::{BlocklistStatus, Entropy};

use crate::blocklist::{remediate, status_of};
use crate::cursor::EntropyCursor;
use crate::grammar::{ending_for, infix_for, shorten_word, shortens, syllable, takes_prefix, Ending, Infix};
use crate::normalize::{pad_to_min_length, remove_triple_runs, truncate_to_max_length};
use crate::tables::{NUMERIC_TOKENS, PREFIX_WORDS, SUFFIX_WORDS, WORD_BANK};

/// Maximum draws for a second word distinct from the first.
pub const SECOND_WORD_ATTEMPTS: usize = 5;

/// A synthesized slug and its blocklist outcome.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SynthSlug {
    /// The final slug.
    pub value: String,
    /// Whether a blocked substring survived.
    pub blocklist: BlocklistStatus,
}

/// Runs the full grammar over `entropy`.
pub fn build_obfuscated_slug(entropy: &Entropy) -> SynthSlug {
    let mut cursor = EntropyCursor::new(entropy);
    let mut slug = String::with_capacity(24);

    append_prefix(&mut cursor, &mut slug);

    let first = first_word(&mut cursor);
    slug.push_str(&first);

    append_infix(&mut cursor, &mut slug);

    let second = second_word(&mut cursor, &first);
    slug.push_str(&second);

    append_ending(&mut cursor, &mut slug);

    let slug = pad_to_min_length(slug, entropy);
    let (slug, _) = remediate(slug, entropy);
    let slug = truncate_to_max_length(slug);
    let value = remove_triple_runs(&slug);

    // Truncation and run cleanup run after remediation, so the final
    // string is classified again.
    let blocklist = status_of(&value);
    SynthSlug { value, blocklist }
}

// ---------------------------------------------------------------------------
// Grammar stages
// ---------------------------------------------------------------------------

/// Stage 1: one gate byte, then a prefix word on a 1-in-4 draw.
pub fn append_prefix(cursor: &mut EntropyCursor<'_>, out: &mut String) {
    let gate = cursor.next_byte();
    if takes_prefix(gate) {
        out.push_str(cursor.pick(PREFIX_WORDS));
    }
}

/// Stage 2: a word-bank draw followed by its shortening gate.
pub fn first_word(cursor: &mut EntropyCursor<'_>) -> String {
    let word = cursor.pick(WORD_BANK);
    maybe_shorten(cursor, word)
}

/// Stage 3: one gate byte; on a hit, a syllable or a hyphen.
pub fn append_infix(cursor: &mut EntropyCursor<'_>, out: &mut String) {
    let gate = cursor.next_byte();
    match infix_for(gate) {
        Some(Infix::Syllable) => out.push_str(&syllable(cursor)),
        Some(Infix::Hyphen) => out.push('-'),
        None => {}
    }
}

/// Stage 4: redraws up to [`SECOND_WORD_ATTEMPTS`] times to avoid
/// repeating `first`, then applies its own shortening gate.
pub fn second_word(cursor: &mut EntropyCursor<'_>, first: &str) -> String {
    let mut word = cursor.pick(WORD_BANK);
    for _ in 1..SECOND_WORD_ATTEMPTS {
        if word != first {
            break;
        }
        word = cursor.pick(WORD_BANK);
    }
    maybe_shorten(cursor, word)
}

/// Stage 5: one gate byte selects the ending shape.
pub fn append_ending(cursor: &mut EntropyCursor<'_>, out: &mut String) {
    match ending_for(cursor.next_byte()) {
        Ending::Syllable => out.push_str(&syllable(cursor)),
        Ending::Numeric => out.push_str(cursor.pick(NUMERIC_TOKENS)),
        Ending::DoubleSyllable => {
            out.push_str(&syllable(cursor));
            out.push_str(&syllable(cursor));
        }
        Ending::Suffix => out.push_str(cursor.pick(SUFFIX_WORDS)),
    }
}

fn maybe_shorten(cursor: &mut EntropyCursor<'_>, word: &str) -> String {
    if shortens(cursor.next_byte()) {
        shorten_word(word)
    } else {
        word.to_owned()
    }
}
