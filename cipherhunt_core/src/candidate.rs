use serde::Serialize;

use crate::cipher::Cipher;
use crate::dictionary::DictionaryHeuristic;
use crate::grapheme::GraphemeHeuristic;
use crate::heuristic::Heuristic;
use crate::letter_freq::LetterFrequencyHeuristic;

/// One decryption trial: a (cipher, key) pair applied to a source text,
/// scored by every default heuristic. Immutable once built.
#[derive(Clone, Debug, Serialize)]
pub struct Candidate {
    cipher: &'static str,
    key: String,
    source: String,
    ciphertext: String,
    decrypted: String,
    letter_frequency_score: f64,
    dictionary_score: f64,
    grapheme_score: f64,
    combined_score: f64,
    summary: String,
}

impl Candidate {
    /// Decrypts `ciphertext` under `cipher` and scores the result with
    /// the three default heuristics. The combined score is their
    /// arithmetic mean.
    pub fn score(cipher: &dyn Cipher, source: &str, ciphertext: &str) -> Self {
        let decrypted = cipher.decrypt(ciphertext);

        let letter = LetterFrequencyHeuristic::new().analyze(&decrypted);
        let dictionary = DictionaryHeuristic::new().analyze(&decrypted);
        let grapheme = GraphemeHeuristic::new().analyze(&decrypted);
        let combined = (letter.score() + dictionary.score() + grapheme.score()) / 3.0;

        let summary = format!(
            "Letter frequency: {:.3} ({}), Dictionary: {:.3} ({}), Grapheme: {:.3} ({})",
            letter.score(),
            letter.summary(),
            dictionary.score(),
            dictionary.summary(),
            grapheme.score(),
            grapheme.summary()
        );

        Self {
            cipher: cipher.name(),
            key: cipher.key_descriptor(),
            source: source.to_string(),
            ciphertext: ciphertext.to_string(),
            decrypted,
            letter_frequency_score: letter.score(),
            dictionary_score: dictionary.score(),
            grapheme_score: grapheme.score(),
            combined_score: combined,
            summary,
        }
    }

    pub fn cipher_name(&self) -> &'static str {
        self.cipher
    }

    pub fn key_descriptor(&self) -> &str {
        &self.key
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn ciphertext(&self) -> &str {
        &self.ciphertext
    }

    pub fn decrypted_text(&self) -> &str {
        &self.decrypted
    }

    pub fn letter_frequency_score(&self) -> f64 {
        self.letter_frequency_score
    }

    pub fn dictionary_score(&self) -> f64 {
        self.dictionary_score
    }

    pub fn grapheme_score(&self) -> f64 {
        self.grapheme_score
    }

    pub fn combined_score(&self) -> f64 {
        self.combined_score
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}: {:.3}",
            self.cipher, self.key, self.source, self.combined_score
        )
    }
}
