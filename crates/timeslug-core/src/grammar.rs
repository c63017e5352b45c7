//! Decision gates and word-level transforms of the synthesis grammar.
//!
//! Every probabilistic branch is a pure function of one decision byte,
//! so each branch can be exercised in isolation.

use crate::cursor::EntropyCursor;
use crate::tables::{CODAS, CONSONANTS, VOWELS, VOWEL_LETTERS};

/// Middle element between the two main words.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Infix {
    /// A synthesized consonant-vowel-coda syllable.
    Syllable,
    /// A literal `-`.
    Hyphen,
}

/// Element that closes the slug.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Ending {
    /// One syllable (3 in 8).
    Syllable,
    /// A numeric token (2 in 8).
    Numeric,
    /// Two syllables (2 in 8).
    DoubleSyllable,
    /// A suffix word (1 in 8).
    Suffix,
}

/// A prefix word is prepended when `gate % 4 == 0`.
pub fn takes_prefix(gate: u8) -> bool {
    gate % 4 == 0
}

/// A main word is shortened when `gate % 5 == 0`.
pub fn shortens(gate: u8) -> bool {
    gate % 5 == 0
}

/// An infix is inserted when `gate % 7 < 2`; the low bit of the same
/// byte chooses between syllable (even) and hyphen (odd).
pub fn infix_for(gate: u8) -> Option<Infix> {
    if gate % 7 >= 2 {
        return None;
    }
    if gate % 2 == 0 {
        Some(Infix::Syllable)
    } else {
        Some(Infix::Hyphen)
    }
}

/// Maps `gate % 8` onto the four ending shapes.
pub fn ending_for(gate: u8) -> Ending {
    match gate % 8 {
        0..=2 => Ending::Syllable,
        3 | 4 => Ending::Numeric,
        5 | 6 => Ending::DoubleSyllable,
        _ => Ending::Suffix,
    }
}

/// Builds a consonant + vowel + coda syllable, consuming three bytes.
pub fn syllable(cursor: &mut EntropyCursor<'_>) -> String {
    let onset = cursor.pick(CONSONANTS);
    let nucleus = cursor.pick(VOWELS);
    let coda = cursor.pick(CODAS);
    let mut out = String::with_capacity(3);
    out.push_str(onset);
    out.push_str(nucleus);
    out.push_str(coda);
    out
}

fn is_vowel(b: u8) -> bool {
    VOWEL_LETTERS.as_bytes().contains(&b)
}

/// Startup-style shortening: `tiger` → `tigr`, `purple` → `purpl`,
/// `delta` → `delt`.
///
/// Words under four characters are returned unchanged.
pub fn shorten_word(word: &str) -> String {
    let bytes = word.as_bytes();
    let n = bytes.len();
    if n < 4 {
        return word.to_owned();
    }

    // -ar / -er / -or → -r
    if matches!(bytes[n - 2], b'a' | b'e' | b'o') && bytes[n - 1] == b'r' {
        let mut out = String::with_capacity(n - 1);
        out.push_str(&word[..n - 2]);
        out.push('r');
        return out;
    }

    // -le → -l
    if word.ends_with("le") {
        return word[..n - 1].to_owned();
    }

    if is_vowel(bytes[n - 1]) && n > 4 {
        return word[..n - 1].to_owned();
    }

    word.to_owned()
}
