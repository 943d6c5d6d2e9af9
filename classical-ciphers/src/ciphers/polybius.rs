//! Polybius square cipher
//!
//! Substitutes each character with the one directly below it in a keyword
//! square. Trailing cells of the square are blank; the wrap rules skip them
//! so that decryption is the exact inverse even for partially filled columns.

use crate::alphabet::fold;
use crate::error::{CipherError, Result};
use crate::square::{CharSquare, Fill};

use super::Cipher;

impl Cipher {
    /// Polybius encryption: each character moves one row down its column,
    /// wrapping past blank cells to row 0.
    pub fn encrypt_polybius(&self, text: &str, keyword: &str) -> Result<String> {
        let square = CharSquare::keyed(&self.alphabet, keyword, Fill::Blank)?;
        let n = square.size();
        let mut result = String::with_capacity(text.len());
        for c in fold(text).chars() {
            let (row, col) = square
                .position(c)
                .ok_or(CipherError::CharNotInSquare(c))?;
            let below = if row + 1 == n || square.is_blank(row + 1, col) {
                0
            } else {
                row + 1
            };
            result.push(square.at(below, col));
        }
        Ok(result)
    }

    /// Polybius decryption: one row up, wrapping from row 0 to the last
    /// occupied row of the column.
    pub fn decrypt_polybius(&self, text: &str, keyword: &str) -> Result<String> {
        let square = CharSquare::keyed(&self.alphabet, keyword, Fill::Blank)?;
        let mut result = String::with_capacity(text.len());
        for c in fold(text).chars() {
            let (row, col) = square
                .position(c)
                .ok_or(CipherError::CharNotInSquare(c))?;
            let above = if row == 0 {
                square.last_occupied_row(col)
            } else {
                row - 1
            };
            result.push(square.at(above, col));
        }
        Ok(result)
    }
}
