//! Slug derivation for timeslug.
//!
//! Turns a secret seed and a period label into a deterministic slug and
//! verification hash. Two encodings are available:
//!
//! - **mnemonic**: the primary entropy sliced into dictionary words (see
//!   [`timeslug_crypto::mnemonic`]);
//! - **obfuscated**: a pronounceable synthetic word built by a small
//!   entropy-driven grammar ([`synth`]).
//!
//! # Modules
//!
//! - [`tables`]: fixed lexical tables and the blocklist
//! - [`cursor`]: per-derivation read position into entropy
//! - [`grammar`]: decision gates, syllables and word shortening
//! - [`blocklist`]: detection and bounded remediation
//! - [`normalize`]: padding, truncation and run cleanup
//! - [`synth`]: the obfuscated-mode pipeline
//! - [`verification`]: verification hash lengths
//! - [`derive`](mod@derive): mode dispatch ([`Deriver`])
//! - [`window`]: periods around an anchor time
//!
//! # Example
//!
//! ```
//! use timeslug_core::derive;
//! use timeslug_crypto::entropy::SecretSeed;
//! use timeslug_types::SlugMode;
//!
//! let seed = SecretSeed::from("seedphrase");
//! let slug = derive(&seed, "2026-02-03", 16, SlugMode::Obfuscated)?;
//! assert_eq!(slug.value, "trybeambold8");
//! assert_eq!(slug.hash, "5d3bf0d55db67ea2");
//! # Ok::<(), timeslug_types::TimeslugError>(())
//! ```

pub mod blocklist;
pub mod cursor;
pub mod derive;
pub mod grammar;
pub mod normalize;
pub mod synth;
pub mod tables;
pub mod verification;
pub mod window;

pub use derive::{derive, Deriver};
pub use window::generate;
