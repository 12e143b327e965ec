use thiserror::Error;

/// Common contract shared by the classical cipher implementations.
///
/// Characters without an alphabet index pass through `encrypt` and
/// `decrypt` unchanged; this is the transparency rule, not an error.
pub trait Cipher {
    /// Encrypts `plaintext` under this cipher's key.
    fn encrypt(&self, plaintext: &str) -> String;

    /// Decrypts `ciphertext` under this cipher's key.
    fn decrypt(&self, ciphertext: &str) -> String;

    /// Display name of the cipher variant.
    fn name(&self) -> &'static str;

    /// Human-readable description of the key, e.g. `shift=7` or `(a, b)`.
    fn key_descriptor(&self) -> String;
}

#[derive(Debug, Error)]
pub enum CipherError {
    #[error("multiplicative key {a} is not coprime with alphabet size {modulus}")]
    InvalidKey { a: usize, modulus: usize },
}
