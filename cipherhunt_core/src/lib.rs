//! Core library for automated cryptanalysis of classical substitution
//! ciphers.
//!
//! Given a ciphertext with unknown cipher and key, the search walks the
//! bounded key spaces of the Caesar, Vigenère, and Affine ciphers,
//! decrypts under every key, and scores each result's plausibility as
//! English with independent heuristics. Atbash and Playfair are provided
//! as encrypt/decrypt capabilities; Playfair's open-ended key space
//! keeps it out of the brute-force search.
//!
//! The crate performs no I/O: file discovery, report formatting, and
//! progress display belong to the consuming binary.

pub mod affine;
pub mod alphabet;
pub mod atbash;
pub mod caesar;
pub mod candidate;
pub mod cipher;
pub mod dictionary;
pub mod grapheme;
pub mod heuristic;
pub mod letter_freq;
pub mod ngram;
pub mod playfair;
pub mod search;
pub mod vigenere;

pub use crate::affine::AffineCipher;
pub use crate::atbash::AtbashCipher;
pub use crate::caesar::CaesarCipher;
pub use crate::candidate::Candidate;
pub use crate::cipher::{Cipher, CipherError};
pub use crate::dictionary::DictionaryHeuristic;
pub use crate::grapheme::GraphemeHeuristic;
pub use crate::heuristic::{Evaluation, Heuristic};
pub use crate::letter_freq::LetterFrequencyHeuristic;
pub use crate::ngram::NgramHeuristic;
pub use crate::playfair::PlayfairCipher;
pub use crate::search::{
    DEFAULT_WORKERS, NoProgress, ProgressObserver, SearchError, SearchOptions, TOP_K, rank,
    search, search_affine, search_all, search_caesar, search_vigenere, vigenere_key_space_size,
};
pub use crate::vigenere::VigenereCipher;
