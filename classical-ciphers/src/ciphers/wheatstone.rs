//! Wheatstone two-square bigram cipher
//!
//! Two keyword squares; each plaintext bigram is replaced through the
//! classic row/column swap across them. The squares are digit-filled so
//! every in-alphabet character resolves to a cell.

use crate::alphabet::fold;
use crate::error::{CipherError, Result};
use crate::square::{CharSquare, Fill};

use super::Cipher;

impl Cipher {
    /// Wheatstone encryption with two space-delimited keywords.
    pub fn encrypt_wheatstone(&self, text: &str, key: &str) -> Result<String> {
        let (first, second) = self.wheatstone_squares(key)?;
        self.two_square(text, &first, &second)
    }

    /// Wheatstone decryption with two space-delimited keywords.
    pub fn decrypt_wheatstone(&self, text: &str, key: &str) -> Result<String> {
        let (first, second) = self.wheatstone_squares(key)?;
        self.two_square(text, &second, &first)
    }

    /// Wheatstone encryption over pre-built squares of equal size.
    pub fn encrypt_wheatstone_squares(
        &self,
        text: &str,
        first: &CharSquare,
        second: &CharSquare,
    ) -> Result<String> {
        self.two_square(text, first, second)
    }

    /// Wheatstone decryption over pre-built squares of equal size.
    pub fn decrypt_wheatstone_squares(
        &self,
        text: &str,
        first: &CharSquare,
        second: &CharSquare,
    ) -> Result<String> {
        self.two_square(text, second, first)
    }

    fn wheatstone_squares(&self, key: &str) -> Result<(CharSquare, CharSquare)> {
        let keywords: Vec<&str> = key.split_whitespace().collect();
        let [first, second] = keywords[..] else {
            return Err(CipherError::SubKeyMismatch(format!(
                "expected two space-delimited keywords, found {}",
                keywords.len()
            )));
        };
        Ok((
            CharSquare::keyed(&self.alphabet, first, Fill::Digits)?,
            CharSquare::keyed(&self.alphabet, second, Fill::Digits)?,
        ))
    }

    /// The two-square rule: for each bigram, the first character is located
    /// in `first` at (r1, c1) and the second in `second` at (r2, c2); the
    /// output bigram is (second[r1][c2], first[r2][c1]). Decryption is the
    /// same rule with the squares' roles swapped.
    fn two_square(
        &self,
        text: &str,
        first: &CharSquare,
        second: &CharSquare,
    ) -> Result<String> {
        if first.size() != second.size() {
            return Err(CipherError::InvalidSquare(format!(
                "square sizes differ ({} vs {})",
                first.size(),
                second.size()
            )));
        }
        let mut chars: Vec<char> = fold(text).chars().collect();
        if chars.len() % 2 != 0 {
            chars.push(self.alphabet.filler());
        }
        let mut result = String::with_capacity(chars.len());
        for bigram in chars.chunks(2) {
            let (r1, c1) = first
                .position(bigram[0])
                .ok_or(CipherError::CharNotInSquare(bigram[0]))?;
            let (r2, c2) = second
                .position(bigram[1])
                .ok_or(CipherError::CharNotInSquare(bigram[1]))?;
            result.push(second.at(r1, c2));
            result.push(first.at(r2, c1));
        }
        Ok(result)
    }
}
