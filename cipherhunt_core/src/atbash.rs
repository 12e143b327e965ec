use crate::alphabet;
use crate::cipher::Cipher;

/// Atbash cipher: each mapped character reflects to the opposite end of
/// the alphabet. Keyless and self-inverse.
#[derive(Clone, Copy, Debug, Default)]
pub struct AtbashCipher;

impl AtbashCipher {
    pub fn new() -> Self {
        Self
    }
}

impl Cipher for AtbashCipher {
    fn encrypt(&self, plaintext: &str) -> String {
        let size = alphabet::size();
        plaintext
            .chars()
            .map(|c| match alphabet::index_of(c) {
                Some(index) => alphabet::char_at(size - 1 - index),
                None => c,
            })
            .collect()
    }

    fn decrypt(&self, ciphertext: &str) -> String {
        self.encrypt(ciphertext)
    }

    fn name(&self) -> &'static str {
        "Atbash"
    }

    fn key_descriptor(&self) -> String {
        "atbash".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_encryption_is_the_identity() {
        let cipher = AtbashCipher::new();
        let text = "the quick brown fox jumps over thirteen lazy dogs...";
        assert_eq!(cipher.encrypt(&cipher.encrypt(text)), text);
    }

    #[test]
    fn decrypt_equals_encrypt() {
        let cipher = AtbashCipher::new();
        let text = "hello world";
        assert_eq!(cipher.encrypt(text), cipher.decrypt(text));
    }

    #[test]
    fn first_and_last_symbols_swap() {
        let cipher = AtbashCipher::new();
        assert_eq!(cipher.encrypt("a"), "?");
        assert_eq!(cipher.encrypt("?"), "a");
    }

    #[test]
    fn unmapped_characters_pass_through() {
        let cipher = AtbashCipher::new();
        let encrypted = cipher.encrypt("a b@c");
        assert_eq!(encrypted.chars().nth(1), Some(' '));
        assert_eq!(encrypted.chars().nth(3), Some('@'));
    }
}
