//! Length normalisation and run cleanup for synthesized slugs.

use timeslug_types::Entropy;

use crate::cursor::EntropyCursor;
use crate::grammar::syllable;
use crate::tables::VOWEL_LETTERS;

/// Shortest slug the grammar aims for.
pub const MIN_LEN: usize = 10;

/// Longest slug the grammar aims for.
pub const MAX_LEN: usize = 18;

/// Cursor position padding syllables start reading from.
pub const PAD_CHECKPOINT: usize = 20;

/// Appends syllables until `s` reaches [`MIN_LEN`].
///
/// The first syllable reads from [`PAD_CHECKPOINT`]; each following one
/// continues where the previous stopped.
pub fn pad_to_min_length(mut s: String, entropy: &Entropy) -> String {
    let mut cursor = EntropyCursor::at(entropy, PAD_CHECKPOINT);
    while s.len() < MIN_LEN {
        let syl = syllable(&mut cursor);
        s.push_str(&syl);
    }
    s
}

/// Cuts `s` down to at most [`MAX_LEN`] characters.
///
/// Prefers to end right after a vowel found scanning back from
/// [`MAX_LEN`] to [`MIN_LEN`]; otherwise hard-truncates at [`MAX_LEN`].
pub fn truncate_to_max_length(mut s: String) -> String {
    if s.len() <= MAX_LEN {
        return s;
    }
    let bytes = s.as_bytes();
    let cut = (MIN_LEN..=MAX_LEN)
        .rev()
        .find(|&i| VOWEL_LETTERS.as_bytes().contains(&bytes[i - 1]))
        .unwrap_or(MAX_LEN);
    s.truncate(cut);
    s
}

/// Drops every character that would extend a run of identical
/// characters beyond two.
pub fn remove_triple_runs(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    chars
        .iter()
        .enumerate()
        .filter(|&(i, &c)| i < 2 || !(chars[i - 1] == c && chars[i - 2] == c))
        .map(|(_, &c)| c)
        .collect()
}
