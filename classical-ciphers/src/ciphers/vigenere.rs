//! Vigenère polyalphabetic cipher

use crate::alphabet::fold;
use crate::error::Result;
use crate::keystream::KeyStream;

use super::Cipher;

impl Cipher {
    /// Vigenère encryption with a repeating alphabetic key.
    ///
    /// The key cursor advances only when the plaintext character is in the
    /// alphabet; pass-through characters do not consume a key symbol, so
    /// encryption and decryption stay aligned regardless of punctuation.
    pub fn encrypt_vigenere(&self, text: &str, key: &str) -> Result<String> {
        self.vigenere(text, key, 1)
    }

    /// Vigenère decryption.
    pub fn decrypt_vigenere(&self, text: &str, key: &str) -> Result<String> {
        self.vigenere(text, key, -1)
    }

    fn vigenere(&self, text: &str, key: &str, sign: i64) -> Result<String> {
        let mut stream = KeyStream::new(fold(key).chars().collect())?;
        let n = self.alphabet.len() as i64;
        let mut result = String::with_capacity(text.len());
        for c in fold(text).chars() {
            let Some(pi) = self.alphabet.index_of(c) else {
                result.push(c);
                continue;
            };
            match self.alphabet.index_of(stream.advance()) {
                Some(ki) => {
                    let index = (pi as i64 + sign * ki as i64).rem_euclid(n);
                    result.push(self.alphabet.char_at(index as usize));
                }
                // key symbol outside the alphabet: defined pass-through
                None => result.push(c),
            }
        }
        Ok(result)
    }
}
