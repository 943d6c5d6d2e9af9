//! Columnar table transposition
//!
//! The key is a digit string forming a permutation of 1..=k; each block of k
//! characters is reordered by it.

use crate::alphabet::fold;
use crate::error::Result;
use crate::key::digit_targets;

use super::Cipher;

impl Cipher {
    /// Table transposition encryption: within each block, the character at
    /// source index `j` is scattered to position `key[j] - 1`.
    pub fn encrypt_table_transposition(&self, text: &str, key: &str) -> Result<String> {
        let targets = digit_targets(key)?;
        let k = targets.len();
        let mut chars: Vec<char> = fold(text).chars().collect();
        self.pad_to_multiple(&mut chars, k);
        let mut result = vec![self.alphabet.filler(); chars.len()];
        for (b, block) in chars.chunks(k).enumerate() {
            for (j, &c) in block.iter().enumerate() {
                result[b * k + targets[j]] = c;
            }
        }
        Ok(result.into_iter().collect())
    }

    /// Table transposition decryption: gathers position `key[j] - 1` back to
    /// output index `j`.
    pub fn decrypt_table_transposition(&self, text: &str, key: &str) -> Result<String> {
        let targets = digit_targets(key)?;
        let k = targets.len();
        let mut chars: Vec<char> = fold(text).chars().collect();
        self.pad_to_multiple(&mut chars, k);
        let mut result = String::with_capacity(chars.len());
        for block in chars.chunks(k) {
            for &t in &targets {
                result.push(block[t]);
            }
        }
        Ok(result)
    }
}
