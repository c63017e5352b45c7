//! Secret seeds and per-period entropy.
//!
//! Two independent digests are derived from the same seed:
//!
//! - **primary** = `HMAC-SHA256(seed, seed ":" period)` drives the slug.
//! - **auxiliary** = `HMAC-SHA256(seed, seed ":skid:" period)` drives the
//!   obfuscated-mode verification hash, so the published hash does not
//!   correlate with the visible slug.

use std::fmt;

use timeslug_types::{Entropy, Result};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::mac::hmac_sha256;

/// Separator between seed and period in the primary message.
const PRIMARY_SEPARATOR: &[u8] = b":";

/// Separator between seed and period in the auxiliary message.
const AUXILIARY_SEPARATOR: &[u8] = b":skid:";

// ---------------------------------------------------------------------------
// SecretSeed
// ---------------------------------------------------------------------------

/// The caller's secret seed.
///
/// Zeroized on drop. `Debug` is redacted and there is no `Display`.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretSeed(Vec<u8>);

impl SecretSeed {
    /// Wraps raw seed bytes.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /// Returns the raw seed bytes.
    pub fn expose(&self) -> &[u8] {
        &self.0
    }
}

impl From<&str> for SecretSeed {
    fn from(seed: &str) -> Self {
        Self(seed.as_bytes().to_vec())
    }
}

impl From<String> for SecretSeed {
    fn from(seed: String) -> Self {
        Self(seed.into_bytes())
    }
}

impl fmt::Debug for SecretSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretSeed(<redacted>)")
    }
}

// ---------------------------------------------------------------------------
// EntropySource
// ---------------------------------------------------------------------------

/// Derives entropy for any period from one borrowed seed.
pub struct EntropySource<'a> {
    seed: &'a SecretSeed,
}

impl<'a> EntropySource<'a> {
    /// Creates a source bound to `seed`.
    pub fn new(seed: &'a SecretSeed) -> Self {
        Self { seed }
    }

    /// `HMAC-SHA256(seed, seed ":" period)`.
    pub fn primary(&self, period: &str) -> Result<Entropy> {
        self.derive(PRIMARY_SEPARATOR, period)
    }

    /// `HMAC-SHA256(seed, seed ":skid:" period)`.
    pub fn auxiliary(&self, period: &str) -> Result<Entropy> {
        self.derive(AUXILIARY_SEPARATOR, period)
    }

    fn derive(&self, separator: &[u8], period: &str) -> Result<Entropy> {
        let key = self.seed.expose();

        // The message embeds the seed, so it is wiped like the seed itself.
        let mut message = Vec::with_capacity(key.len() + separator.len() + period.len());
        message.extend_from_slice(key);
        message.extend_from_slice(separator);
        message.extend_from_slice(period.as_bytes());

        let digest = hmac_sha256(key, &message);
        message.zeroize();

        Ok(Entropy::new(digest?))
    }
}
