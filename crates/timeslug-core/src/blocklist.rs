//! Blocklist detection and bounded remediation.
//!
//! Remediation splits a blocked substring by inserting a syllable at its
//! midpoint, then rescans. It gives up after [`MAX_REMEDIATION_PASSES`],
//! so the outcome is reported as a [`BlocklistStatus`] rather than
//! assumed clean.

use timeslug_types::{BlocklistStatus, Entropy};

use crate::cursor::EntropyCursor;
use crate::grammar::syllable;
use crate::tables::BLOCKLIST;

/// Upper bound on remediation passes.
pub const MAX_REMEDIATION_PASSES: usize = 10;

/// Cursor position for the first pass; pass `i` starts at `base + i`.
pub const REMEDIATION_CHECKPOINT: usize = 25;

/// A blocked entry located in a slug.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BlockedMatch {
    /// The blocklist entry.
    pub pattern: &'static str,
    /// Byte offset of the match in the slug.
    pub index: usize,
}

/// Finds the first blocklist entry (in table order) present in `s`,
/// ignoring ASCII case.
pub fn find_blocked(s: &str) -> Option<BlockedMatch> {
    let lower = s.to_ascii_lowercase();
    BLOCKLIST.iter().find_map(|&pattern| {
        lower
            .find(pattern)
            .map(|index| BlockedMatch { pattern, index })
    })
}

/// Returns `true` if any blocklist entry occurs in `s`.
pub fn contains_blocked(s: &str) -> bool {
    find_blocked(s).is_some()
}

/// Classifies `s` against the blocklist.
pub fn status_of(s: &str) -> BlocklistStatus {
    match find_blocked(s) {
        None => BlocklistStatus::Clean,
        Some(m) => BlocklistStatus::Residual {
            pattern: m.pattern.to_owned(),
        },
    }
}

/// Breaks up blocked substrings, at most [`MAX_REMEDIATION_PASSES`] times.
///
/// Pass `i` reads its syllable from cursor position
/// `REMEDIATION_CHECKPOINT + i` and inserts it at the midpoint of the
/// first blocked entry found.
pub fn remediate(mut s: String, entropy: &Entropy) -> (String, BlocklistStatus) {
    for pass in 0..MAX_REMEDIATION_PASSES {
        let Some(found) = find_blocked(&s) else {
            return (s, BlocklistStatus::Clean);
        };
        let insert_at = found.index + found.pattern.len() / 2;
        let mut cursor = EntropyCursor::at(entropy, REMEDIATION_CHECKPOINT + pass);
        let syl = syllable(&mut cursor);
        s.insert_str(insert_at, &syl);
    }

    let status = status_of(&s);
    (s, status)
}
