//! Derivation defaults with validation.
//!
//! The same struct backs library callers and the CLI's `--config` JSON
//! file. Every value has a documented default.

use serde::{Deserialize, Serialize};

use crate::{Interval, Result, SlugMode, TimeslugError};

/// Parameters of a slug derivation that are not secret.
///
/// The seed is deliberately absent: it never lives in a config value.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SlugConfig {
    /// Word count in mnemonic mode, verification-hash sizing in obfuscated
    /// mode. Out-of-range values are clamped at derivation time.
    pub length: i64,

    /// Number of consecutive periods generated around an anchor.
    pub window: i64,

    /// Rotation interval name (`second`, `minute`, `hour`, `day`, `week`).
    pub interval: String,

    /// Mode name (`bip39` or `obfuscated`).
    pub mode: String,
}

impl Default for SlugConfig {
    fn default() -> Self {
        Self {
            length: 3,
            window: 7,
            interval: "day".into(),
            mode: "bip39".into(),
        }
    }
}

impl SlugConfig {
    /// Validates all configuration values.
    ///
    /// `length` is not checked here; it is clamped, never rejected.
    pub fn validate(&self) -> Result<()> {
        if self.window < 1 {
            return Err(TimeslugError::ConfigError {
                reason: format!("window must be at least 1, got {}", self.window),
            });
        }

        self.interval().map_err(|e| TimeslugError::ConfigError {
            reason: e.to_string(),
        })?;

        self.mode().map_err(|e| TimeslugError::ConfigError {
            reason: e.to_string(),
        })?;

        Ok(())
    }

    /// Parses the configured interval.
    pub fn interval(&self) -> Result<Interval> {
        self.interval.parse()
    }

    /// Parses the configured mode.
    pub fn mode(&self) -> Result<SlugMode> {
        self.mode.parse()
    }
}
