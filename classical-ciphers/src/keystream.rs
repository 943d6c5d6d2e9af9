//! Stream keying
//!
//! Expands a short repeating key into a per-position stream of key symbols.
//! Vigenère consumes a stream of characters, Gronsfeld a stream of digits.
//! The cursor advances only when the caller takes a symbol, so the alignment
//! policy (skip pass-through characters) lives with the cipher, not here.

use crate::error::{CipherError, Result};

/// Cyclic cursor over the symbols of a key.
#[derive(Debug, Clone)]
pub struct KeyStream<T> {
    symbols: Vec<T>,
    cursor: usize,
}

impl<T: Copy> KeyStream<T> {
    /// Creates a stream over `symbols`. An empty key is a degenerate key.
    pub fn new(symbols: Vec<T>) -> Result<Self> {
        if symbols.is_empty() {
            return Err(CipherError::EmptyKey);
        }
        Ok(Self { symbols, cursor: 0 })
    }

    /// Takes the next key symbol and moves the cursor, wrapping cyclically.
    pub fn advance(&mut self) -> T {
        let symbol = self.symbols[self.cursor];
        self.cursor = (self.cursor + 1) % self.symbols.len();
        symbol
    }

    /// Length of one key period.
    pub fn period(&self) -> usize {
        self.symbols.len()
    }
}
