//! timeslug command-line front end.
//!
//! Usage:
//!
//!   timeslug [SEED] [PERIOD] [MODE] [LENGTH] [OPTIONS]
//!
//! Derives one slug for `PERIOD`, or with `--window` / `--interval` a
//! window of slugs centred on `PERIOD`. Logs go to stderr and are
//! controlled with `RUST_LOG` (default `warn`).

mod config;
mod output;

use std::path::PathBuf;

use clap::Parser;
use timeslug_core::window::window_id;
use timeslug_core::Deriver;
use timeslug_crypto::wordlist::Dictionary;
use timeslug_types::Result;

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

/// Deterministic, time-bucketed slugs from a secret seed.
#[derive(Parser, Debug)]
#[command(name = "timeslug", version, about)]
pub struct Cli {
    /// Secret seed [default: seedphrase]
    pub seed: Option<String>,

    /// Period label; the anchor time in window mode [default: 2026-02-03]
    pub period: Option<String>,

    /// `obfuscated` or `bip39` [default: obfuscated]
    pub mode: Option<String>,

    /// Word count (bip39) or verification hash sizing (obfuscated) [default: 16]
    #[arg(allow_negative_numbers = true)]
    pub length: Option<i64>,

    /// Number of periods to generate around PERIOD.
    #[arg(long)]
    pub window: Option<i64>,

    /// Window step: second, minute, hour, day or week.
    #[arg(long)]
    pub interval: Option<String>,

    /// Newline-delimited 2048-word list to use instead of BIP39 English.
    #[arg(long, value_name = "PATH")]
    pub dictionary: Option<PathBuf>,

    /// JSON file with length, window, interval and mode defaults.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output in JSON format (no colors, machine-readable).
    #[arg(long)]
    pub json: bool,
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let json = cli.json;

    if let Err(e) = run(cli) {
        output::print_error(&e.to_string(), json);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = config::Settings::resolve(cli)?;

    let loaded;
    let dictionary = match &settings.dictionary {
        Some(path) => {
            loaded = Dictionary::load(path)?;
            tracing::info!(path = %path.display(), "dictionary loaded");
            &loaded
        }
        None => Dictionary::english(),
    };
    let deriver = Deriver::new(dictionary);

    match settings.window {
        None => {
            let slug = deriver.derive(&settings.seed, &settings.period, settings.length, settings.mode)?;
            output::print_slug(&slug, settings.json);
        }
        Some(window) => {
            let slugs = deriver.generate(
                &settings.seed,
                &settings.period,
                settings.length,
                window.size,
                window.interval,
                settings.mode,
            )?;
            let id = window_id(
                &settings.period,
                settings.mode,
                window.interval,
                settings.length,
                window.size,
            );
            output::print_window(&id, &slugs, settings.json);
        }
    }
    Ok(())
}
