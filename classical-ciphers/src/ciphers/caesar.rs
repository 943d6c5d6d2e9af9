//! Caesar shift cipher

use crate::alphabet::fold;

use super::Cipher;

impl Cipher {
    /// Caesar encryption: shift every alphabet character by `shift`.
    ///
    /// Any integer shift is valid; it is normalized modulo the alphabet
    /// length first. Characters outside the alphabet pass through verbatim.
    pub fn encrypt_caesar(&self, text: &str, shift: i64) -> String {
        self.shift_by(text, shift)
    }

    /// Caesar decryption: the inverse shift.
    pub fn decrypt_caesar(&self, text: &str, shift: i64) -> String {
        self.shift_by(text, -shift)
    }

    fn shift_by(&self, text: &str, shift: i64) -> String {
        let n = self.alphabet.len();
        let k = shift.rem_euclid(n as i64) as usize;
        let mut result = String::with_capacity(text.len());
        for c in fold(text).chars() {
            match self.alphabet.index_of(c) {
                Some(i) => result.push(self.alphabet.char_at((i + k) % n)),
                None => result.push(c),
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use crate::{Alphabet, Cipher};

    #[test]
    fn encrypt_russian() {
        let cipher = Cipher::new(Alphabet::russian());
        assert_eq!(
            cipher.encrypt_caesar("Чу_я_слышу_пушек_гром", 6),
            "эщедечсающехщюкреицфт"
        );
        assert_eq!(
            cipher.encrypt_caesar("Чу_я_слышу_пушек_гром", 31),
            "фрэьэоишхрэмрхвзэанлй"
        );
    }

    #[test]
    fn decrypt_russian() {
        let cipher = Cipher::new(Alphabet::russian());
        assert_eq!(
            cipher.decrypt_caesar("Чу_я_слышу_пушек_гром", 6),
            "снъщълёхтнъйнт_еъюкиж"
        );
        assert_eq!(
            cipher.decrypt_caesar("Чу_я_слышу_пушек_гром", 31),
            "ъцвбвфоюыцвтцызнвёусп"
        );
    }

    #[test]
    fn encrypt_latin() {
        let cipher = Cipher::new(Alphabet::latin());
        assert_eq!(cipher.encrypt_caesar("hello world", 3), "khoor zruog");
        assert_eq!(cipher.decrypt_caesar("khoor zruog", 3), "hello world");
    }

    #[test]
    fn shift_normalizes_modulo_alphabet() {
        let cipher = Cipher::new(Alphabet::russian());
        let text = "чу_я_слышу_пушек_гром";
        assert_eq!(
            cipher.encrypt_caesar(text, 6),
            cipher.encrypt_caesar(text, 6 + 34 * 5)
        );
        assert_eq!(
            cipher.encrypt_caesar(text, -28),
            cipher.encrypt_caesar(text, 6)
        );
    }

    #[test]
    fn non_alphabet_characters_pass_through() {
        let cipher = Cipher::new(Alphabet::latin());
        assert_eq!(cipher.encrypt_caesar("a.b,c!9", 1), "b.c,d!9");
    }
}
