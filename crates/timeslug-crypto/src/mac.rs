//! HMAC-SHA256 keyed hashing.
//!
//! The keyed hasher behind every derivation: `(secret key, message)` in,
//! 32 deterministic bytes out.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use timeslug_types::{Result, TimeslugError};

/// HMAC-SHA256 type alias.
type HmacSha256 = Hmac<Sha256>;

/// Fixed output length of HMAC-SHA256 in bytes.
pub const HMAC_SHA256_LEN: usize = 32;

/// Computes HMAC-SHA256 over `data` using `key`.
///
/// # Errors
///
/// Returns [`TimeslugError::CryptoError`] if HMAC key initialisation fails.
pub fn hmac_sha256(key: &[u8], data: &[u8]) -> Result<[u8; HMAC_SHA256_LEN]> {
    let mut mac = HmacSha256::new_from_slice(key).map_err(|e| TimeslugError::CryptoError {
        reason: format!("HMAC-SHA256 key init failed: {e}"),
    })?;
    mac.update(data);
    let result = mac.finalize().into_bytes();

    let mut output = [0u8; HMAC_SHA256_LEN];
    output.copy_from_slice(&result);
    Ok(output)
}
