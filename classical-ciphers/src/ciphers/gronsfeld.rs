//! Gronsfeld cipher
//!
//! Vigenère with a numeric key: each decimal digit of the key is used
//! directly as a shift amount instead of being looked up in the alphabet.

use crate::alphabet::fold;
use crate::error::{CipherError, Result};
use crate::keystream::KeyStream;

use super::Cipher;

impl Cipher {
    /// Gronsfeld encryption with a repeating digit-string key.
    pub fn encrypt_gronsfeld(&self, text: &str, key: &str) -> Result<String> {
        self.gronsfeld(text, key, 1)
    }

    /// Gronsfeld decryption.
    pub fn decrypt_gronsfeld(&self, text: &str, key: &str) -> Result<String> {
        self.gronsfeld(text, key, -1)
    }

    fn gronsfeld(&self, text: &str, key: &str, sign: i64) -> Result<String> {
        let digits: Vec<u32> = key
            .chars()
            .map(|c| c.to_digit(10).ok_or(CipherError::NonDigitKey(c)))
            .collect::<Result<_>>()?;
        let mut stream = KeyStream::new(digits)?;
        let n = self.alphabet.len() as i64;
        let mut result = String::with_capacity(text.len());
        for c in fold(text).chars() {
            match self.alphabet.index_of(c) {
                Some(pi) => {
                    let shift = stream.advance() as i64;
                    let index = (pi as i64 + sign * shift).rem_euclid(n);
                    result.push(self.alphabet.char_at(index as usize));
                }
                None => result.push(c),
            }
        }
        Ok(result)
    }
}
