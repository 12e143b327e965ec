use crate::alphabet;
use crate::cipher::Cipher;

/// Vigenère cipher: a repeating key string shifts each mapped character
/// by the alphabet index of the current key character.
///
/// The key cursor advances only when an input character is mapped, so
/// pass-through characters never desynchronize encryption from
/// decryption. A key character that is itself unmapped contributes no
/// shift at its cycle position; the cursor still advances past it.
#[derive(Clone, Debug)]
pub struct VigenereCipher {
    key: String,
}

impl VigenereCipher {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    fn shift_by_key(&self, text: &str, decrypt: bool) -> String {
        let key: Vec<char> = self.key.chars().collect();
        if key.is_empty() {
            return text.to_string();
        }
        let size = alphabet::size();
        let mut cursor = 0usize;
        text.chars()
            .map(|c| match alphabet::index_of(c) {
                Some(index) => {
                    let key_char = key[cursor % key.len()];
                    cursor += 1;
                    match alphabet::index_of(key_char) {
                        Some(shift) => {
                            let new_index = if decrypt {
                                (index + size - shift) % size
                            } else {
                                (index + shift) % size
                            };
                            alphabet::char_at(new_index)
                        }
                        None => c,
                    }
                }
                None => c,
            })
            .collect()
    }
}

impl Cipher for VigenereCipher {
    fn encrypt(&self, plaintext: &str) -> String {
        self.shift_by_key(plaintext, false)
    }

    fn decrypt(&self, ciphertext: &str) -> String {
        self.shift_by_key(ciphertext, true)
    }

    fn name(&self) -> &'static str {
        "Vigenère"
    }

    fn key_descriptor(&self) -> String {
        format!("key={}", self.key)
    }
}
