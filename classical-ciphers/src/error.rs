//! Error types for cipher operations

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("Key must not be empty")]
    EmptyKey,

    #[error("Key must contain only decimal digits, found '{0}'")]
    NonDigitKey(char),

    #[error("Duplicate character '{0}' in key")]
    DuplicateKeyChar(char),

    #[error("Key character '{0}' is not in the alphabet")]
    KeyCharNotInAlphabet(char),

    #[error("Invalid permutation key: {0}")]
    InvalidPermutationKey(String),

    #[error("Invalid sub-keys: {0}")]
    SubKeyMismatch(String),

    #[error("Character '{0}' has no rank (only digits 1-9, Cyrillic and Latin letters are ranked)")]
    UnrankableChar(char),

    #[error("Character '{0}' not found in the cipher square")]
    CharNotInSquare(char),

    #[error("Invalid rail count {rails} for text of length {len}")]
    InvalidRails { rails: usize, len: usize },

    #[error("Ciphertext length {len} is not a multiple of {rails} rails")]
    RaggedCiphertext { len: usize, rails: usize },

    #[error("Text of length {len} does not fit the square (capacity {capacity})")]
    TextTooLong { len: usize, capacity: usize },

    #[error("Invalid square: {0}")]
    InvalidSquare(String),

    #[error("Invalid alphabet: {0}")]
    InvalidAlphabet(String),
}

pub type Result<T> = std::result::Result<T, CipherError>;
