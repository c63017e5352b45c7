//! Fixed lexical and phonotactic tables for the synthesis grammar.
//!
//! All tables are immutable statics shared by every derivation. Table
//! order is part of the output format: reordering any entry changes
//! every slug derived from it.

/// Syllable onsets.
pub const CONSONANTS: &[&str] = &[
    "b", "c", "d", "f", "g", "k", "l", "m", "n", "p", "r", "s", "t", "v", "z",
];

/// Syllable nuclei. Repeats weight the distribution towards a, e, i, o.
pub const VOWELS: &[&str] = &["a", "a", "e", "e", "i", "i", "o", "o", "u"];

/// Syllable codas. Six of ten draws leave the syllable open.
pub const CODAS: &[&str] = &["", "", "", "", "", "", "n", "m", "r", "x"];

/// Leading words, used on roughly a quarter of slugs.
pub const PREFIX_WORDS: &[&str] = &["get", "try", "go", "my", "pro", "on", "up", "hi"];

/// Trailing words for the suffix ending.
pub const SUFFIX_WORDS: &[&str] = &["ly", "fy", "io", "co", "go", "up", "hq", "ai"];

/// Numeric endings.
pub const NUMERIC_TOKENS: &[&str] = &[
    "1", "2", "3", "4", "5", "7", "8", "9", "11", "22", "24", "42", "99", "101", "123", "247",
    "360", "365",
];

/// Word bank for the two main words.
pub const WORD_BANK: &[&str] = &[
    "cloud", "data", "tech", "sync", "fast", "smart", "link", "soft", "core", "base",
    "meta", "flux", "grid", "node", "edge", "wave", "pixel", "cyber", "logic", "delta",
    "sigma", "alpha", "beta", "gamma", "nova", "nexus", "pulse", "spark", "beam", "volt",
    "zero", "next", "snap", "dash", "rush", "bolt", "jump", "flip", "spin", "zoom",
    "push", "pull", "grab", "drop", "lift", "kick", "click", "swipe", "pure", "bold",
    "keen", "swift", "prime", "peak", "true", "safe", "bright", "clear", "clean", "fresh",
    "sharp", "super", "ultra", "mega", "rock", "star", "moon", "sand", "leaf", "pine",
    "oak", "wolf", "lake", "river", "wind", "fire", "ice", "snow", "rain", "sun",
    "fox", "bear", "hawk", "crow", "elk", "owl", "lion", "tiger", "blue", "red",
    "gray", "gold", "jade", "mint", "rust", "onyx", "amber", "coral", "ivory", "slate",
    "steel", "silver", "copper", "box", "hub", "lab", "bit", "dot", "max", "zen",
    "arc", "top", "pop", "cup", "cap", "pin", "pen", "pad", "pod",
];

/// Substrings a slug must not contain, matched case-insensitively.
///
/// Scanned in this order; the first entry found is remediated first.
pub const BLOCKLIST: &[&str] = &[
    "shit", "fuck", "damn", "hell", "crap", "piss", "cock", "dick", "cunt", "ass",
    "fag", "nig", "sex", "xxx", "porn", "anal", "rape", "kill", "nazi", "hate",
    "dead", "die", "hack", "crack",
];

/// Letters treated as vowels by shortening and truncation.
pub const VOWEL_LETTERS: &str = "aeiou";
