//! Scytale rail transposition

use crate::alphabet::fold;
use crate::error::{CipherError, Result};

use super::Cipher;

impl Cipher {
    /// Scytale encryption with `rails` rows.
    ///
    /// The lowercased text is padded with the filler to a multiple of
    /// `rails`, laid out column-major and read off row by row.
    pub fn encrypt_scytale(&self, text: &str, rails: usize) -> Result<String> {
        let mut chars: Vec<char> = fold(text).chars().collect();
        self.check_rails(rails, chars.len())?;
        self.pad_to_multiple(&mut chars, rails);
        let columns = chars.len() / rails;
        let mut result = String::with_capacity(chars.len());
        for i in 0..columns {
            for j in 0..rails {
                result.push(chars[i + columns * j]);
            }
        }
        Ok(result)
    }

    /// Scytale decryption: scatters the ciphertext back into the
    /// column-major layout and reads it in natural order.
    pub fn decrypt_scytale(&self, text: &str, rails: usize) -> Result<String> {
        let chars: Vec<char> = fold(text).chars().collect();
        self.check_rails(rails, chars.len())?;
        if chars.len() % rails != 0 {
            return Err(CipherError::RaggedCiphertext {
                len: chars.len(),
                rails,
            });
        }
        let columns = chars.len() / rails;
        let mut buffer = vec![self.alphabet.filler(); chars.len()];
        let mut index = 0;
        for i in 0..columns {
            for j in 0..rails {
                buffer[i + columns * j] = chars[index];
                index += 1;
            }
        }
        Ok(buffer.into_iter().collect())
    }

    fn check_rails(&self, rails: usize, len: usize) -> Result<()> {
        if rails == 0 || rails > len {
            return Err(CipherError::InvalidRails { rails, len });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::CipherError;
    use crate::{Alphabet, Cipher};

    #[test]
    fn encrypt_russian() {
        let cipher = Cipher::new(Alphabet::russian());
        assert_eq!(
            cipher.encrypt_scytale("Приезжаю_восьмого", 5).unwrap(),
            "пз_ьоржвм_иаоо_еюсг_"
        );
        assert_eq!(
            cipher.encrypt_scytale("Чу_я_слышу_пушек_гром", 3).unwrap(),
            "чыеушк_у_я_г_прсуолшм"
        );
    }

    #[test]
    fn decrypt_russian() {
        let cipher = Cipher::new(Alphabet::russian());
        assert_eq!(
            cipher.decrypt_scytale("пз_ьоржвм_иаоо_еюсг_", 5).unwrap(),
            "приезжаю_восьмого___"
        );
        assert_eq!(
            cipher.decrypt_scytale("чыеушк_у_я_г_прсуолшм", 3).unwrap(),
            "чу_я_слышу_пушек_гром"
        );
    }

    #[test]
    fn round_trip_pads_to_rail_multiple() {
        let cipher = Cipher::new(Alphabet::latin());
        let encrypted = cipher.encrypt_scytale("scytale", 3).unwrap();
        assert_eq!(cipher.decrypt_scytale(&encrypted, 3).unwrap(), "scytale__");
    }

    #[test]
    fn degenerate_rails_are_rejected() {
        let cipher = Cipher::new(Alphabet::latin());
        assert_eq!(
            cipher.encrypt_scytale("abc", 0).unwrap_err(),
            CipherError::InvalidRails { rails: 0, len: 3 }
        );
        assert_eq!(
            cipher.encrypt_scytale("abc", 4).unwrap_err(),
            CipherError::InvalidRails { rails: 4, len: 3 }
        );
    }

    #[test]
    fn ragged_ciphertext_is_rejected() {
        let cipher = Cipher::new(Alphabet::latin());
        assert_eq!(
            cipher.decrypt_scytale("abcde", 2).unwrap_err(),
            CipherError::RaggedCiphertext { len: 5, rails: 2 }
        );
    }
}
