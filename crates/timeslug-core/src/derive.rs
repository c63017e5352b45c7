//! Derivation orchestrator.
//!
//! Wires [`EntropySource`] into one of the two encoders and attaches the
//! verification hash:
//!
//! | mode       | slug from          | hash from | hash bytes                 |
//! |------------|--------------------|-----------|----------------------------|
//! | mnemonic   | primary entropy    | primary   | `ceil(words * 11 / 8)`     |
//! | obfuscated | primary entropy    | auxiliary | `min((length + 1) / 2, 16)` |
//!
//! Auxiliary entropy is only computed on the obfuscated path, so the
//! published hash never correlates with the visible slug there.

use timeslug_crypto::entropy::{EntropySource, SecretSeed};
use timeslug_crypto::mnemonic::{clamp_word_count, mnemonic_slug};
use timeslug_crypto::wordlist::Dictionary;
use timeslug_types::{BlocklistStatus, DerivedSlug, Result, SlugMode};

use crate::blocklist::status_of;
use crate::synth::build_obfuscated_slug;
use crate::verification::{hex_prefix, mnemonic_hash_len, obfuscated_hash_len};

/// Derives slugs against a fixed dictionary.
///
/// Holds only a shared reference, so one `Deriver` can serve any number
/// of threads.
#[derive(Clone, Copy, Debug)]
pub struct Deriver<'d> {
    dictionary: &'d Dictionary,
}

impl Deriver<'static> {
    /// A deriver over the embedded English word list.
    pub fn english() -> Self {
        Self::new(Dictionary::english())
    }
}

impl<'d> Deriver<'d> {
    /// A deriver over `dictionary`.
    pub fn new(dictionary: &'d Dictionary) -> Self {
        Self { dictionary }
    }

    /// The dictionary used in mnemonic mode.
    pub fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }

    /// Derives the slug and verification hash for `(seed, period)`.
    ///
    /// `length` is a word count in mnemonic mode (clamped to 1..=24) and
    /// sizes the verification hash in obfuscated mode.
    pub fn derive(
        &self,
        seed: &SecretSeed,
        period: &str,
        length: i64,
        mode: SlugMode,
    ) -> Result<DerivedSlug> {
        let source = EntropySource::new(seed);
        let primary = source.primary(period)?;

        let (value, hash, blocklist) = match mode {
            SlugMode::Obfuscated => {
                let slug = build_obfuscated_slug(&primary);
                let auxiliary = source.auxiliary(period)?;
                let hash = hex_prefix(&auxiliary, obfuscated_hash_len(length));

                if let BlocklistStatus::Residual { pattern } = &slug.blocklist {
                    tracing::warn!(
                        period,
                        pattern = %pattern,
                        "blocklist remediation exhausted, residual match kept"
                    );
                }
                (slug.value, hash, slug.blocklist)
            }
            SlugMode::Mnemonic => {
                let words = clamp_word_count(length);
                let value = mnemonic_slug(&primary, length, self.dictionary)?;
                let hash = hex_prefix(&primary, mnemonic_hash_len(words));
                let blocklist = status_of(&value);
                (value, hash, blocklist)
            }
        };

        tracing::debug!(
            %mode,
            period,
            slug_len = value.len(),
            hash_len = hash.len(),
            "slug derived"
        );

        Ok(DerivedSlug {
            value,
            period: period.to_owned(),
            hash,
            mode,
            blocklist,
        })
    }
}

/// Derives with the embedded English word list.
pub fn derive(seed: &SecretSeed, period: &str, length: i64, mode: SlugMode) -> Result<DerivedSlug> {
    Deriver::english().derive(seed, period, length, mode)
}
