//! Hashing primitives and entropy derivation for timeslug.
//!
//! This crate is the only place in the workspace that touches HMAC or
//! SHA-256 directly. Everything downstream works on [`Entropy`] values.
//!
//! # Modules
//!
//! - [`mac`]: HMAC-SHA256 keyed hashing
//! - [`hash`]: SHA-256 digests and the mnemonic checksum byte
//! - [`entropy`]: secret seeds and primary / auxiliary entropy per period
//! - [`wordlist`]: the 2048-word dictionary
//! - [`mnemonic`]: 264-bit slicing of entropy into dictionary words
//!
//! [`Entropy`]: timeslug_types::Entropy

pub mod entropy;
pub mod hash;
pub mod mac;
pub mod mnemonic;
pub mod wordlist;
