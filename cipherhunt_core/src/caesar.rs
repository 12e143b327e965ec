use crate::alphabet;
use crate::cipher::Cipher;

/// Caesar cipher: every mapped character moves `shift` positions along
/// the alphabet, wrapping at the end.
#[derive(Clone, Copy, Debug)]
pub struct CaesarCipher {
    shift: usize,
}

impl CaesarCipher {
    pub fn new(shift: usize) -> Self {
        Self {
            shift: shift % alphabet::size(),
        }
    }

    pub fn shift(&self) -> usize {
        self.shift
    }

    fn shift_by(text: &str, shift: usize) -> String {
        let size = alphabet::size();
        text.chars()
            .map(|c| match alphabet::index_of(c) {
                Some(index) => alphabet::char_at((index + shift) % size),
                None => c,
            })
            .collect()
    }
}

impl Cipher for CaesarCipher {
    fn encrypt(&self, plaintext: &str) -> String {
        Self::shift_by(plaintext, self.shift)
    }

    fn decrypt(&self, ciphertext: &str) -> String {
        // Decrypt is encrypt with the negated shift, kept non-negative.
        Self::shift_by(ciphertext, alphabet::size() - self.shift)
    }

    fn name(&self) -> &'static str {
        "Caesar"
    }

    fn key_descriptor(&self) -> String {
        format!("shift={}", self.shift)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn shift_7_roundtrips_the_pangram() {
        let text = "the quick brown fox jumps over thirteen lazy dogs...";
        let cipher = CaesarCipher::new(7);
        let encrypted = cipher.encrypt(text);
        assert_ne!(encrypted, text);
        assert_eq!(cipher.decrypt(&encrypted), text);
    }

    #[test]
    fn spaces_pass_through_and_punctuation_shifts() {
        let cipher = CaesarCipher::new(7);
        let encrypted = cipher.encrypt("ab cd.");
        assert_eq!(encrypted.chars().nth(2), Some(' '));
        // '.' is a mapped symbol, so it does shift.
        assert_ne!(encrypted.chars().last(), Some('.'));
    }

    #[test]
    fn unmapped_characters_survive_unchanged() {
        let cipher = CaesarCipher::new(13);
        let encrypted = cipher.encrypt("a@b,c d");
        assert_eq!(encrypted.chars().nth(1), Some('@'));
        assert_eq!(encrypted.chars().nth(3), Some(','));
        assert_eq!(encrypted.chars().nth(5), Some(' '));
    }

    #[test]
    fn shift_wraps_at_alphabet_end() {
        let cipher = CaesarCipher::new(1);
        let last = alphabet::char_at(alphabet::size() - 1);
        let first = alphabet::char_at(0);
        assert_eq!(cipher.encrypt(&last.to_string()), first.to_string());
    }

    proptest! {
        #[test]
        fn every_shift_roundtrips(shift in 1usize..68, text in "[ -~]{0,80}") {
            let cipher = CaesarCipher::new(shift);
            let encrypted = cipher.encrypt(&text);
            prop_assert_eq!(cipher.decrypt(&encrypted), text);
        }
    }
}
