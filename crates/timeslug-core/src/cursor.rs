//! Deterministic read cursor over a 32-byte entropy buffer.
//!
//! The synthesis grammar treats entropy as a stream of decision bytes.
//! Each derivation owns its own cursor, so concurrent derivations share
//! nothing mutable. Positions past 31 wrap around and reuse earlier bytes
//! against different choice tables.

use timeslug_types::Entropy;

/// A per-derivation read position into an [`Entropy`] buffer.
#[derive(Clone, Debug)]
pub struct EntropyCursor<'a> {
    entropy: &'a Entropy,
    position: usize,
}

impl<'a> EntropyCursor<'a> {
    /// Creates a cursor at position 0.
    pub fn new(entropy: &'a Entropy) -> Self {
        Self::at(entropy, 0)
    }

    /// Creates a cursor at `position`.
    pub fn at(entropy: &'a Entropy, position: usize) -> Self {
        Self { entropy, position }
    }

    /// Current position (not reduced modulo 32).
    pub fn position(&self) -> usize {
        self.position
    }

    /// Moves the cursor to `position`.
    pub fn seek(&mut self, position: usize) {
        self.position = position;
    }

    /// Reads the byte at the current position and advances by one.
    pub fn next_byte(&mut self) -> u8 {
        let byte = self.entropy.byte_at(self.position);
        self.position += 1;
        byte
    }

    /// Selects `choices[byte % len]` using the next byte.
    ///
    /// `choices` must be non-empty; every grammar table is.
    pub fn pick<'t>(&mut self, choices: &[&'t str]) -> &'t str {
        debug_assert!(!choices.is_empty(), "pick from an empty table");
        let byte = self.next_byte();
        choices[usize::from(byte) % choices.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting_entropy() -> Entropy {
        let mut bytes = [0u8; 32];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = i as u8;
        }
        Entropy::new(bytes)
    }

    #[test]
    fn next_byte_advances() {
        let entropy = counting_entropy();
        let mut cursor = EntropyCursor::new(&entropy);
        assert_eq!(cursor.next_byte(), 0);
        assert_eq!(cursor.next_byte(), 1);
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn positions_wrap_modulo_32() {
        let entropy = counting_entropy();
        let mut cursor = EntropyCursor::at(&entropy, 31);
        assert_eq!(cursor.next_byte(), 31);
        assert_eq!(cursor.next_byte(), 0);
        assert_eq!(cursor.position(), 33);
    }

    #[test]
    fn pick_uses_byte_modulo_len() {
        let entropy = counting_entropy();
        let mut cursor = EntropyCursor::at(&entropy, 7);
        assert_eq!(cursor.pick(&["a", "b", "c"]), "b");
        assert_eq!(cursor.pick(&["a", "b", "c"]), "c");
        assert_eq!(cursor.position(), 9);
    }

    #[test]
    fn seek_repositions() {
        let entropy = counting_entropy();
        let mut cursor = EntropyCursor::new(&entropy);
        cursor.seek(20);
        assert_eq!(cursor.next_byte(), 20);
    }

    #[test]
    fn cursors_are_independent() {
        let entropy = counting_entropy();
        let mut a = EntropyCursor::new(&entropy);
        let mut b = EntropyCursor::new(&entropy);
        a.next_byte();
        a.next_byte();
        assert_eq!(b.next_byte(), 0);
        assert_eq!(a.position(), 2);
    }
}
