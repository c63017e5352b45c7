//! Core shared types for the timeslug workspace.
//!
//! Every crate in the workspace takes its domain types and its error
//! surface from here, so the encoders, the orchestrator and the CLI all
//! agree on what a mode, an interval and a derived slug look like.

pub mod config;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Entropy
// ---------------------------------------------------------------------------

/// 32 bytes of keyed-hash output: the only source of randomness for a
/// derivation.
///
/// Identical `(seed, message)` pairs always produce identical entropy.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Entropy([u8; 32]);

impl Entropy {
    /// The fixed byte length of an entropy buffer.
    pub const LEN: usize = 32;

    /// Creates a new `Entropy` from raw bytes.
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns the byte at `position`, wrapping modulo 32.
    pub fn byte_at(&self, position: usize) -> u8 {
        self.0[position % Self::LEN]
    }
}

impl From<[u8; 32]> for Entropy {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Entropy {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for Entropy {
    type Err = TimeslugError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let bytes = hex::decode(s).map_err(|_| TimeslugError::CryptoError {
            reason: "invalid hex encoding for entropy".into(),
        })?;
        if bytes.len() != Self::LEN {
            return Err(TimeslugError::CryptoError {
                reason: format!("expected 32 bytes of entropy, got {}", bytes.len()),
            });
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

// ---------------------------------------------------------------------------
// SlugMode
// ---------------------------------------------------------------------------

/// Selects how entropy is rendered into a slug.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlugMode {
    /// Concatenated BIP39 dictionary words.
    #[serde(rename = "bip39", alias = "mnemonic")]
    Mnemonic,
    /// Pronounceable synthetic word built by the synthesis grammar.
    Obfuscated,
}

impl fmt::Display for SlugMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mnemonic => write!(f, "bip39"),
            Self::Obfuscated => write!(f, "obfuscated"),
        }
    }
}

impl FromStr for SlugMode {
    type Err = TimeslugError;

    /// Parses a mode name, ignoring ASCII case.
    ///
    /// `bip39` and `mnemonic` select [`SlugMode::Mnemonic`]. Anything other
    /// than those and `obfuscated` is rejected.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "obfuscated" => Ok(Self::Obfuscated),
            "bip39" | "mnemonic" => Ok(Self::Mnemonic),
            _ => Err(TimeslugError::InvalidMode {
                reason: format!("unknown mode '{s}' (expected bip39 or obfuscated)"),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Interval
// ---------------------------------------------------------------------------

/// Rotation interval of a time window, and the label format of its periods.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    /// One-second periods.
    Second,
    /// One-minute periods.
    Minute,
    /// One-hour periods.
    Hour,
    /// Calendar-day periods.
    Day,
    /// Seven-day periods labelled by ISO week.
    Week,
}

impl Interval {
    /// Length of one period in seconds.
    pub fn seconds(&self) -> i64 {
        match self {
            Self::Second => 1,
            Self::Minute => 60,
            Self::Hour => 60 * 60,
            Self::Day => 24 * 60 * 60,
            Self::Week => 7 * 24 * 60 * 60,
        }
    }

    /// `strftime` pattern used to label a period.
    ///
    /// Weeks use the ISO week-numbering year and week (`2026-W06`). Week
    /// labels are not compatible with the legacy `YYYY-Wdd` layout, which
    /// rendered the day of the month, so weekly slugs differ from it.
    pub fn label_format(&self) -> &'static str {
        match self {
            Self::Second => "%Y-%m-%dT%H:%M:%S",
            Self::Minute => "%Y-%m-%dT%H:%M",
            Self::Hour => "%Y-%m-%dT%H",
            Self::Day => "%Y-%m-%d",
            Self::Week => "%G-W%V",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Second => write!(f, "second"),
            Self::Minute => write!(f, "minute"),
            Self::Hour => write!(f, "hour"),
            Self::Day => write!(f, "day"),
            Self::Week => write!(f, "week"),
        }
    }
}

impl FromStr for Interval {
    type Err = TimeslugError;

    /// Accepts singular, plural and one-letter forms. The empty string
    /// means a day.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "s" | "second" | "seconds" => Ok(Self::Second),
            "m" | "minute" | "minutes" => Ok(Self::Minute),
            "h" | "hour" | "hours" => Ok(Self::Hour),
            "" | "d" | "day" | "days" => Ok(Self::Day),
            "w" | "week" | "weeks" => Ok(Self::Week),
            _ => Err(TimeslugError::InvalidInterval {
                reason: format!("unknown interval '{s}'"),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// BlocklistStatus
// ---------------------------------------------------------------------------

/// Blocklist classification of a finished slug.
///
/// Obfuscated slugs go through bounded remediation, so a blocked substring
/// can survive it. Mnemonic slugs are only classified. Callers that need a
/// hard guarantee must check for [`BlocklistStatus::Residual`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum BlocklistStatus {
    /// No blocked substring remains.
    Clean,
    /// A blocked substring is still present in the final slug.
    Residual {
        /// The first blocked entry still present.
        pattern: String,
    },
}

impl BlocklistStatus {
    /// Returns `true` for [`BlocklistStatus::Clean`].
    pub fn is_clean(&self) -> bool {
        matches!(self, Self::Clean)
    }
}

// ---------------------------------------------------------------------------
// DerivedSlug
// ---------------------------------------------------------------------------

/// A slug together with its verification hash and the period it belongs to.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DerivedSlug {
    /// The human-facing slug.
    pub value: String,
    /// Period label the slug was derived for.
    pub period: String,
    /// Lowercase hex verification hash.
    pub hash: String,
    /// Encoding that produced `value`.
    pub mode: SlugMode,
    /// Blocklist outcome. Mnemonic slugs are classified but never
    /// remediated.
    pub blocklist: BlocklistStatus,
}

impl DerivedSlug {
    /// Returns `true` when no blocked substring survived remediation.
    pub fn is_clean(&self) -> bool {
        self.blocklist.is_clean()
    }
}

// ---------------------------------------------------------------------------
// TimeslugError
// ---------------------------------------------------------------------------

/// Central error type for the timeslug workspace.
#[derive(Debug, Error)]
pub enum TimeslugError {
    /// The requested slug mode is not recognised.
    #[error("invalid mode: {reason}")]
    InvalidMode {
        /// Human-readable description of the rejected mode.
        reason: String,
    },

    /// An anchor time could not be parsed.
    #[error("invalid time: {reason}")]
    InvalidTime {
        /// Human-readable description of the parse failure.
        reason: String,
    },

    /// A rotation interval is not recognised.
    #[error("invalid interval: {reason}")]
    InvalidInterval {
        /// Human-readable description of the rejected interval.
        reason: String,
    },

    /// The word list is malformed (wrong size, unreadable).
    #[error("dictionary error: {reason}")]
    DictionaryError {
        /// Human-readable description of the dictionary problem.
        reason: String,
    },

    /// A hashing primitive failed.
    #[error("crypto error: {reason}")]
    CryptoError {
        /// Human-readable description of the cryptographic failure.
        reason: String,
    },

    /// A configuration value is invalid or missing.
    #[error("config error: {reason}")]
    ConfigError {
        /// Human-readable description of the configuration problem.
        reason: String,
    },
}

// ---------------------------------------------------------------------------
// Result alias
// ---------------------------------------------------------------------------

/// Convenience result type using [`TimeslugError`].
pub type Result<T> = std::result::Result<T, TimeslugError>;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
