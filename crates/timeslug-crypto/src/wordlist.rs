//! The 2048-word dictionary behind mnemonic mode.
//!
//! Word order is significant: position `i` is the word for the 11-bit
//! index `i`. A list of any other size is rejected at construction so
//! the encoder can never index out of range or silently remap words.

use std::path::Path;
use std::sync::OnceLock;

use timeslug_types::{Result, TimeslugError};

/// Number of words a dictionary must contain (2^11).
pub const DICTIONARY_SIZE: usize = 2048;

/// The BIP39 English word list, one word per line.
const ENGLISH_WORDLIST: &str = include_str!("../data/bip39_english.txt");

static ENGLISH: OnceLock<Dictionary> = OnceLock::new();

/// An ordered, immutable list of exactly [`DICTIONARY_SIZE`] words.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Returns the embedded BIP39 English dictionary.
    ///
    /// Built on first use and shared read-only afterwards.
    pub fn english() -> &'static Dictionary {
        ENGLISH.get_or_init(|| Dictionary {
            words: split_words(ENGLISH_WORDLIST),
        })
    }

    /// Parses a newline-delimited word list.
    ///
    /// Surrounding whitespace is trimmed and blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`TimeslugError::DictionaryError`] unless exactly
    /// [`DICTIONARY_SIZE`] words remain.
    pub fn from_text(text: &str) -> Result<Self> {
        Self::from_words(split_words(text))
    }

    /// Builds a dictionary from an ordered word sequence.
    ///
    /// # Errors
    ///
    /// Returns [`TimeslugError::DictionaryError`] if the count is not
    /// [`DICTIONARY_SIZE`] or a word is empty.
    pub fn from_words(words: Vec<String>) -> Result<Self> {
        if words.len() != DICTIONARY_SIZE {
            return Err(TimeslugError::DictionaryError {
                reason: format!(
                    "expected {DICTIONARY_SIZE} words, got {}",
                    words.len()
                ),
            });
        }
        if let Some(pos) = words.iter().position(|w| w.is_empty()) {
            return Err(TimeslugError::DictionaryError {
                reason: format!("empty word at index {pos}"),
            });
        }
        Ok(Self { words })
    }

    /// Reads and validates a word list file.
    ///
    /// # Errors
    ///
    /// Returns [`TimeslugError::DictionaryError`] if the file cannot be
    /// read or fails validation.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| TimeslugError::DictionaryError {
            reason: format!("failed to read {}: {e}", path.display()),
        })?;
        Self::from_text(&text)
    }

    /// Returns the word at `index`, or `None` if `index >= 2048`.
    pub fn word(&self, index: u16) -> Option<&str> {
        self.words.get(usize::from(index)).map(String::as_str)
    }

    /// Returns the index of `word`, if present.
    pub fn index_of(&self, word: &str) -> Option<u16> {
        self.words
            .iter()
            .position(|w| w == word)
            .and_then(|pos| u16::try_from(pos).ok())
    }

    /// Number of words (always [`DICTIONARY_SIZE`] for validated lists).
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false` for a constructed dictionary.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn split_words(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}
