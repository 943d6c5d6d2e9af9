//! Magic-square transposition
//!
//! The key is a caller-supplied n×n matrix of distinct integers 1..=n²
//! (classically a magic square); character i of the plaintext lands in the
//! cell holding i+1. A pure transposition, so unlike the alphabet-scanning
//! ciphers it does not fold case.

use crate::error::{CipherError, Result};
use crate::square::IntSquare;

use super::Cipher;

impl Cipher {
    /// Magic-square encryption: scatter the text through the key matrix and
    /// read the grid row-major, filler in the unused cells.
    pub fn encrypt_magic_square(&self, text: &str, key: &IntSquare) -> Result<String> {
        let chars: Vec<char> = text.chars().collect();
        let capacity = key.capacity();
        if chars.len() > capacity {
            return Err(CipherError::TextTooLong {
                len: chars.len(),
                capacity,
            });
        }
        let mut grid = vec![self.alphabet.filler(); capacity];
        for (i, &c) in chars.iter().enumerate() {
            grid[key.position_of(i + 1)] = c;
        }
        Ok(grid.into_iter().collect())
    }

    /// Magic-square decryption: read the ciphertext into the grid row-major
    /// and emit the cells in key-value order. Padding is not stripped.
    pub fn decrypt_magic_square(&self, text: &str, key: &IntSquare) -> Result<String> {
        let mut chars: Vec<char> = text.chars().collect();
        let capacity = key.capacity();
        if chars.len() > capacity {
            return Err(CipherError::TextTooLong {
                len: chars.len(),
                capacity,
            });
        }
        chars.resize(capacity, self.alphabet.filler());
        let mut result = String::with_capacity(capacity);
        for value in 1..=capacity {
            result.push(chars[key.position_of(value)]);
        }
        Ok(result)
    }
}
