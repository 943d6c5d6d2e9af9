//! Cipher transforms
//!
//! Nine encrypt/decrypt pairs, each an `impl Cipher` block in its own file.

pub mod caesar;
pub mod double;
pub mod gronsfeld;
pub mod magic_square;
pub mod polybius;
pub mod scytale;
pub mod table;
pub mod vigenere;
pub mod wheatstone;

use crate::alphabet::Alphabet;

/// A cipher core bound to one alphabet.
///
/// Every transform is a pure function of its inputs plus the immutable
/// alphabet chosen at construction; instances hold no other state and are
/// safe to share across threads.
#[derive(Debug, Clone)]
pub struct Cipher {
    pub(crate) alphabet: Alphabet,
}

impl Cipher {
    pub fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Pads `chars` with the alphabet filler up to a multiple of `block`.
    pub(crate) fn pad_to_multiple(&self, chars: &mut Vec<char>, block: usize) {
        let remainder = chars.len() % block;
        if remainder != 0 {
            chars.resize(chars.len() + block - remainder, self.alphabet.filler());
        }
    }
}
