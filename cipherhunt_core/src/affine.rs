use crate::alphabet;
use crate::cipher::{Cipher, CipherError};

/// Affine cipher: `E(x) = (a*x + b) mod m`, `D(y) = a_inv*(y - b) mod m`.
///
/// Construction fails unless `a` is coprime with the alphabet size, since
/// the modular inverse of `a` must exist for decryption.
#[derive(Clone, Copy, Debug)]
pub struct AffineCipher {
    a: usize,
    b: usize,
    a_inverse: usize,
    modulus: usize,
}

impl AffineCipher {
    pub fn new(a: usize, b: usize) -> Result<Self, CipherError> {
        let modulus = alphabet::size();
        let a = a % modulus;
        let b = b % modulus;
        let a_inverse = modular_inverse(a as i64, modulus as i64)
            .ok_or(CipherError::InvalidKey { a, modulus })? as usize;
        Ok(Self {
            a,
            b,
            a_inverse,
            modulus,
        })
    }

    pub fn multiplicative_key(&self) -> usize {
        self.a
    }

    pub fn additive_key(&self) -> usize {
        self.b
    }

    /// All `a` values coprime with the alphabet size, in ascending order.
    pub fn valid_multiplicative_keys() -> Vec<usize> {
        let modulus = alphabet::size();
        (1..modulus).filter(|&a| gcd(a, modulus) == 1).collect()
    }
}

impl Cipher for AffineCipher {
    fn encrypt(&self, plaintext: &str) -> String {
        plaintext
            .chars()
            .map(|c| match alphabet::index_of(c) {
                Some(index) => alphabet::char_at((self.a * index + self.b) % self.modulus),
                None => c,
            })
            .collect()
    }

    fn decrypt(&self, ciphertext: &str) -> String {
        ciphertext
            .chars()
            .map(|c| match alphabet::index_of(c) {
                Some(index) => {
                    let shifted = (index + self.modulus - self.b) % self.modulus;
                    alphabet::char_at(self.a_inverse * shifted % self.modulus)
                }
                None => c,
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "Affine"
    }

    fn key_descriptor(&self) -> String {
        format!("({}, {})", self.a, self.b)
    }
}

fn gcd(a: usize, b: usize) -> usize {
    if b == 0 { a } else { gcd(b, a % b) }
}

/// Modular multiplicative inverse of `a` mod `m` via extended Euclid.
fn modular_inverse(a: i64, m: i64) -> Option<i64> {
    let (g, x, _) = extended_gcd(a, m);
    if g != 1 { None } else { Some(x.rem_euclid(m)) }
}

fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    if b == 0 {
        (a, 1, 0)
    } else {
        let (g, x, y) = extended_gcd(b, a % b);
        (g, y, x - (a / b) * y)
    }
}
