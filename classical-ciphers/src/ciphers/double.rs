//! Double transposition
//!
//! A keyed double permutation of a k×k grid. The key is two space-delimited
//! sub-keys of equal length: the first orders the columns, the second the
//! rows, both through the character rank table in [`crate::key`].

use crate::alphabet::fold;
use crate::error::{CipherError, Result};
use crate::key::rank_permutation;

use super::Cipher;

impl Cipher {
    /// Double transposition encryption: fill the grid row-major, permute
    /// rows and columns, read column-major.
    pub fn encrypt_double_transposition(&self, text: &str, key: &str) -> Result<String> {
        let (col_perm, row_perm) = self.double_permutations(key)?;
        let k = col_perm.len();
        let grid = self.square_grid(text, k)?;
        let mut result = String::with_capacity(k * k);
        for j in 0..k {
            for i in 0..k {
                result.push(grid[row_perm[i] * k + col_perm[j]]);
            }
        }
        Ok(result)
    }

    /// Double transposition decryption: fill the grid column-major, scatter
    /// back through the same permutations, read row-major.
    pub fn decrypt_double_transposition(&self, text: &str, key: &str) -> Result<String> {
        let (col_perm, row_perm) = self.double_permutations(key)?;
        let k = col_perm.len();
        let chars = self.square_grid(text, k)?;
        let mut grid = vec![self.alphabet.filler(); k * k];
        let mut index = 0;
        for j in 0..k {
            for i in 0..k {
                grid[i * k + j] = chars[index];
                index += 1;
            }
        }
        let mut result = vec![self.alphabet.filler(); k * k];
        for i in 0..k {
            for j in 0..k {
                result[row_perm[i] * k + col_perm[j]] = grid[i * k + j];
            }
        }
        Ok(result.into_iter().collect())
    }

    fn double_permutations(&self, key: &str) -> Result<(Vec<usize>, Vec<usize>)> {
        let sub_keys: Vec<&str> = key.split_whitespace().collect();
        let [column_key, row_key] = sub_keys[..] else {
            return Err(CipherError::SubKeyMismatch(format!(
                "expected two space-delimited sub-keys, found {}",
                sub_keys.len()
            )));
        };
        if column_key.chars().count() != row_key.chars().count() {
            return Err(CipherError::SubKeyMismatch(format!(
                "sub-key lengths differ ({} vs {})",
                column_key.chars().count(),
                row_key.chars().count()
            )));
        }
        Ok((rank_permutation(column_key)?, rank_permutation(row_key)?))
    }

    /// Lowercases `text` and pads it with the filler into a k×k row-major
    /// grid; text longer than k² does not fit.
    fn square_grid(&self, text: &str, k: usize) -> Result<Vec<char>> {
        let mut chars: Vec<char> = fold(text).chars().collect();
        if chars.len() > k * k {
            return Err(CipherError::TextTooLong {
                len: chars.len(),
                capacity: k * k,
            });
        }
        chars.resize(k * k, self.alphabet.filler());
        Ok(chars)
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
            cipher
                .encrypt_double_transposition("Приезжаю_восьмого", "21435 пакет")
                .unwrap(),
            "аоср_жгоп___ме_ю_ьи_в_оз_"
        );
        assert_eq!(
            cipher
                .encrypt_double_transposition("Чу_я_слышу_пушек_гром", "21435 пакет")
                .unwrap(),
            "л_пу_ск_чмшршя_ыгу__уое__"
        );
    }

    #[test]
    fn decrypt_russian() {
        let cipher = Cipher::new(Alphabet::russian());
        assert_eq!(
            cipher
                .decrypt_double_transposition("аоср_жгоп___ме_ю_ьи_в_оз_", "21435 пакет")
                .unwrap(),
            "приезжаю_восьмого________"
        );
        assert_eq!(
            cipher
                .decrypt_double_transposition("л_пу_ск_чмшршя_ыгу__уое__", "21435 пакет")
                .unwrap(),
            "чу_я_слышу_пушек_гром____"
        );
    }

    #[test]
    fn round_trip_restores_padded_text() {
        let cipher = Cipher::new(Alphabet::latin());
        let encrypted = cipher
            .encrypt_double_transposition("meet_me", "231 bca")
            .unwrap();
        assert_eq!(
            cipher
                .decrypt_double_transposition(&encrypted, "231 bca")
                .unwrap(),
            "meet_me__"
        );
    }

    #[test]
    fn sub_key_shape_is_validated() {
        let cipher = Cipher::new(Alphabet::latin());
        assert!(matches!(
            cipher.encrypt_double_transposition("abc", "213"),
            Err(CipherError::SubKeyMismatch(_))
        ));
        assert!(matches!(
            cipher.encrypt_double_transposition("abc", "213 ab"),
            Err(CipherError::SubKeyMismatch(_))
        ));
        assert!(matches!(
            cipher.encrypt_double_transposition("abc", "2_3 abc"),
            Err(CipherError::UnrankableChar('_'))
        ));
    }

    #[test]
    fn oversized_text_is_rejected() {
        let cipher = Cipher::new(Alphabet::latin());
        assert_eq!(
            cipher
                .encrypt_double_transposition("ten__chars", "21 ab")
                .unwrap_err(),
            CipherError::TextTooLong {
                len: 10,
                capacity: 4
            }
        );
    }
}
