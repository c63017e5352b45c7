//! Settings resolution for the CLI.
//!
//! Values come from positional arguments and flags, then the optional
//! JSON config file, then built-in defaults (CLI overrides config file).

use std::path::{Path, PathBuf};

use timeslug_crypto::entropy::SecretSeed;
use timeslug_types::config::SlugConfig;
use timeslug_types::{Interval, Result, SlugMode, TimeslugError};

use crate::Cli;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

const DEFAULT_SEED: &str = "seedphrase";
const DEFAULT_PERIOD: &str = "2026-02-03";
const DEFAULT_MODE: &str = "obfuscated";
const DEFAULT_LENGTH: i64 = 16;

// ---------------------------------------------------------------------------
// Config file (JSON)
// ---------------------------------------------------------------------------

/// Loads and validates a [`SlugConfig`] JSON file.
///
/// Example `timeslug.json`:
/// ```json
/// {
///   "length": 3,
///   "window": 7,
///   "interval": "day",
///   "mode": "bip39"
/// }
/// ```
/// Missing fields take their [`SlugConfig::default`] values.
pub fn load_config(path: &Path) -> Result<SlugConfig> {
    let text = std::fs::read_to_string(path).map_err(|e| TimeslugError::ConfigError {
        reason: format!("failed to read config file {}: {e}", path.display()),
    })?;

    let config: SlugConfig = serde_json::from_str(&text).map_err(|e| TimeslugError::ConfigError {
        reason: format!("invalid config JSON: {e}"),
    })?;

    config.validate()?;
    Ok(config)
}

// ---------------------------------------------------------------------------
// Resolved settings
// ---------------------------------------------------------------------------

/// Window parameters, present only in window mode.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WindowSettings {
    pub size: i64,
    pub interval: Interval,
}

/// Fully resolved run settings.
#[derive(Debug)]
pub struct Settings {
    pub seed: SecretSeed,
    pub period: String,
    pub mode: SlugMode,
    pub length: i64,
    pub window: Option<WindowSettings>,
    pub dictionary: Option<PathBuf>,
    pub json: bool,
}

impl Settings {
    /// Resolves `cli` against its config file (if any) and the defaults.
    ///
    /// Window mode is selected by `--window` or `--interval`; the other
    /// window parameter then comes from the config file or
    /// [`SlugConfig::default`].
    pub fn resolve(cli: Cli) -> Result<Self> {
        let file = cli.config.as_deref().map(load_config).transpose()?;

        let mode = match (&cli.mode, &file) {
            (Some(mode), _) => mode.parse()?,
            (None, Some(file)) => file.mode()?,
            (None, None) => DEFAULT_MODE.parse()?,
        };

        let length = cli
            .length
            .or_else(|| file.as_ref().map(|f| f.length))
            .unwrap_or(DEFAULT_LENGTH);

        let window = if cli.window.is_some() || cli.interval.is_some() {
            let base = file.unwrap_or_default();
            let interval = match &cli.interval {
                Some(name) => name.parse()?,
                None => base.interval()?,
            };
            Some(WindowSettings {
                size: cli.window.unwrap_or(base.window),
                interval,
            })
        } else {
            None
        };

        Ok(Self {
            seed: SecretSeed::from(cli.seed.unwrap_or_else(|| DEFAULT_SEED.into())),
            period: cli.period.unwrap_or_else(|| DEFAULT_PERIOD.into()),
            mode,
            length,
            window,
            dictionary: cli.dictionary,
            json: cli.json,
        })
    }
}
