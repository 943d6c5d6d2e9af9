//! # Classical Ciphers Library
//!
//! This library implements classical (pre-modern) cipher transforms over a
//! configurable alphabet.
//!
//! ## Supported Transforms
//!
//! - **Caesar** - fixed alphabet shift
//! - **Vigenère** - polyalphabetic substitution with a repeating key
//! - **Gronsfeld** - Vigenère with a numeric key
//! - **Polybius** - keyword-square column substitution
//! - **Scytale** - rail transposition
//! - **Table Transposition** - keyed columnar block transposition
//! - **Double Transposition** - keyed row+column grid permutation
//! - **Magic Square** - transposition through an integer square
//! - **Wheatstone** - two-square bigram substitution
//!
//! ## Usage
//!
//! ```rust
//! use classical_ciphers::{Alphabet, Cipher};
//!
//! let cipher = Cipher::new(Alphabet::latin());
//!
//! let encrypted = cipher.encrypt_caesar("hello world", 3);
//! assert_eq!(encrypted, "khoor zruog");
//!
//! let decrypted = cipher.decrypt_caesar(&encrypted, 3);
//! assert_eq!(decrypted, "hello world");
//!
//! let encrypted = cipher.encrypt_vigenere("attack at dawn", "lemon")?;
//! assert_eq!(cipher.decrypt_vigenere(&encrypted, "lemon")?, "attack at dawn");
//! # Ok::<(), classical_ciphers::CipherError>(())
//! ```
//!
//! ## Design
//!
//! - All transforms are pure functions of their inputs plus the immutable
//!   alphabet chosen at construction; no state survives a call
//! - Text is folded to lowercase; characters outside the alphabet pass
//!   through the substitution ciphers unchanged
//! - Keys are validated up front and every failure is a typed error
//! - This is classical-cipher arithmetic, **not** a secure cryptosystem

// Public modules
pub mod alphabet;
pub mod ciphers;
pub mod error;
pub mod key;
pub mod keystream;
pub mod square;

// Re-exports for easy access
pub use alphabet::Alphabet;
pub use ciphers::Cipher;
pub use error::{CipherError, Result};
pub use key::char_rank;
pub use keystream::KeyStream;
pub use square::{CharSquare, Fill, IntSquare};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

impl Cipher {
    /// Get version information
    pub fn version() -> &'static str {
        VERSION
    }

    /// List all supported transforms
    pub fn supported_algorithms() -> Vec<&'static str> {
        vec![
            "Caesar",
            "Vigenere",
            "Gronsfeld",
            "Polybius",
            "Scytale",
            "TableTransposition",
            "DoubleTransposition",
            "MagicSquare",
            "Wheatstone",
        ]
    }
}
