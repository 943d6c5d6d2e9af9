//! Alphabet profiles and character classification
//!
//! Every transform is bound to one [`Alphabet`]: an ordered, duplicate-free
//! character sequence with zero-based index lookup. The built-in profiles end
//! in `_`, the space placeholder the transposition ciphers also use as their
//! padding filler.

use crate::error::{CipherError, Result};

/// Russian lowercase alphabet with `ё` and the trailing space placeholder.
pub const RUSSIAN_LOWER: &str = "абвгдеёжзийклмнопрстуфхцчшщъыьэюя_";

/// Latin lowercase alphabet with the trailing space placeholder.
pub const LATIN_LOWER: &str = "abcdefghijklmnopqrstuvwxyz_";

/// An ordered sequence of unique characters.
///
/// Chosen once per [`Cipher`](crate::Cipher) instance and never mutated.
/// Index lookup is a total order over the contained characters; anything
/// else is reported as `None` and handled per algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// The 34-character Russian profile.
    pub fn russian() -> Self {
        Self {
            chars: RUSSIAN_LOWER.chars().collect(),
        }
    }

    /// The 27-character Latin profile.
    pub fn latin() -> Self {
        Self {
            chars: LATIN_LOWER.chars().collect(),
        }
    }

    /// Builds an alphabet from an arbitrary character sequence.
    ///
    /// The sequence must be non-empty and free of duplicates. The last
    /// character becomes the padding filler.
    pub fn custom(letters: &str) -> Result<Self> {
        let chars: Vec<char> = letters.chars().collect();
        if chars.is_empty() {
            return Err(CipherError::InvalidAlphabet(
                "alphabet must not be empty".to_string(),
            ));
        }
        for (i, c) in chars.iter().enumerate() {
            if chars[..i].contains(c) {
                return Err(CipherError::InvalidAlphabet(format!(
                    "duplicate character '{c}'"
                )));
            }
        }
        Ok(Self { chars })
    }

    /// Number of characters in the alphabet.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Zero-based index of `c`, or `None` if `c` is not in the alphabet.
    pub fn index_of(&self, c: char) -> Option<usize> {
        self.chars.iter().position(|&a| a == c)
    }

    pub fn contains(&self, c: char) -> bool {
        self.index_of(c).is_some()
    }

    /// Character at `index`. Callers pass indices already reduced modulo
    /// [`len`](Self::len).
    pub(crate) fn char_at(&self, index: usize) -> char {
        self.chars[index]
    }

    /// The padding filler: the alphabet's last character (`_` for the
    /// built-in profiles).
    pub fn filler(&self) -> char {
        self.chars[self.chars.len() - 1]
    }

    pub(crate) fn chars(&self) -> &[char] {
        &self.chars
    }
}

/// Folds text to lowercase. Casing is never preserved by the transforms.
pub(crate) fn fold(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_have_expected_sizes() {
        assert_eq!(Alphabet::russian().len(), 34);
        assert_eq!(Alphabet::latin().len(), 27);
    }

    #[test]
    fn filler_is_trailing_placeholder() {
        assert_eq!(Alphabet::russian().filler(), '_');
        assert_eq!(Alphabet::latin().filler(), '_');
    }

    #[test]
    fn index_lookup() {
        let ru = Alphabet::russian();
        assert_eq!(ru.index_of('а'), Some(0));
        assert_eq!(ru.index_of('ё'), Some(6));
        assert_eq!(ru.index_of('_'), Some(33));
        assert_eq!(ru.index_of('q'), None);
    }

    #[test]
    fn custom_rejects_duplicates() {
        assert!(matches!(
            Alphabet::custom("abca"),
            Err(CipherError::InvalidAlphabet(_))
        ));
        assert!(matches!(
            Alphabet::custom(""),
            Err(CipherError::InvalidAlphabet(_))
        ));
        assert!(Alphabet::custom("abc_").is_ok());
    }

    #[test]
    fn fold_lowercases_mixed_scripts() {
        assert_eq!(fold("Чу_Я HeLLo"), "чу_я hello");
    }
}
