use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

use crate::heuristic::{Evaluation, Heuristic};

const LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";

/// Common English digraphs.
const DIGRAPHS: &[&str] = &[
    "th", "he", "in", "er", "an", "re", "ed", "nd", "on", "en", "at", "ou", "ea", "ha", "es",
    "or", "ti", "to", "it", "st", "ar", "hi", "as", "te", "et", "ng", "of", "al", "de", "se",
    "le", "sa", "si", "ve", "ra", "ld", "ur", "ch", "sh", "wh", "ph", "gh", "ck", "qu", "oo",
    "ee", "ll", "ss", "ff", "pp", "tt", "nn", "mm", "dd", "bb", "cc", "gg", "rr", "zz", "ai",
    "ay", "ei", "ey", "ie", "oe", "ue", "ui", "au", "aw", "ew", "ow", "oy", "oi",
];

/// Common English trigraphs.
const TRIGRAPHS: &[&str] = &[
    "the", "and", "ing", "ion", "tio", "ent", "ous", "all", "are", "ere", "her", "his", "ate",
    "est", "for", "ght", "cha", "che", "chi", "tch", "dge", "sch",
];

/// Additional four-letter patterns used only by the extended variant.
const TETRAGRAPHS: &[&str] = &[
    "tion", "atio", "that", "ther", "with", "ment", "ions", "able",
];

/// Rough expected frequency weights for the most common graphemes;
/// everything else weighs 1.0.
static WEIGHTS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("e", 12.0),
        ("t", 9.1),
        ("a", 8.1),
        ("o", 7.5),
        ("i", 7.0),
        ("n", 6.7),
        ("s", 6.3),
        ("h", 6.1),
        ("r", 6.0),
        ("th", 3.5),
        ("he", 3.0),
        ("in", 2.5),
        ("er", 2.0),
        ("an", 1.8),
        ("ing", 1.5),
        ("the", 1.2),
    ])
});

static VOCABULARY: Lazy<HashSet<&'static str>> = Lazy::new(|| base_vocabulary().collect());

static EXTENDED_VOCABULARY: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    base_vocabulary()
        .chain(TETRAGRAPHS.iter().copied())
        .collect()
});

fn base_vocabulary() -> impl Iterator<Item = &'static str> {
    (0..LETTERS.len())
        .map(|i| &LETTERS[i..i + 1])
        .chain(DIGRAPHS.iter().copied())
        .chain(TRIGRAPHS.iter().copied())
}

/// Scores text by grapheme coverage: a greedy left-to-right scan takes
/// the longest vocabulary match at each position (non-overlapping), then
/// the frequency weights of the distinct grapheme types found are summed
/// and divided by `vocabulary size * 5`.
///
/// The divisor is an arbitrary scale constant; the score rewards type
/// coverage rather than token-frequency fidelity, so only relative
/// ordering between texts is meaningful.
#[derive(Clone, Copy, Debug)]
pub struct GraphemeHeuristic {
    max_len: usize,
}

impl GraphemeHeuristic {
    /// Standard variant: matches up to three characters.
    pub fn new() -> Self {
        Self { max_len: 3 }
    }

    /// Extended variant: also matches four-character patterns.
    pub fn extended() -> Self {
        Self { max_len: 4 }
    }

    fn vocabulary(&self) -> &'static HashSet<&'static str> {
        if self.max_len >= 4 {
            &EXTENDED_VOCABULARY
        } else {
            &VOCABULARY
        }
    }
}

impl Default for GraphemeHeuristic {
    fn default() -> Self {
        Self::new()
    }
}

impl Heuristic for GraphemeHeuristic {
    fn name(&self) -> &'static str {
        "Grapheme Analysis"
    }

    fn analyze(&self, text: &str) -> Evaluation {
        if text.trim().is_empty() {
            return Evaluation::new(0.0, "No text to analyze");
        }

        let vocabulary = self.vocabulary();
        let lower = text.to_lowercase();
        let bytes = lower.as_bytes();

        let mut found: HashSet<&'static str> = HashSet::new();
        let mut total_matches = 0usize;
        let mut i = 0;
        while i < bytes.len() {
            let mut advance = 1;
            for len in (1..=self.max_len).rev() {
                if i + len > bytes.len() {
                    continue;
                }
                if !bytes[i..i + len].iter().all(u8::is_ascii_lowercase) {
                    continue;
                }
                if let Some(&grapheme) = vocabulary.get(&lower[i..i + len]) {
                    found.insert(grapheme);
                    total_matches += 1;
                    advance = len;
                    break;
                }
            }
            i += advance;
        }

        if total_matches == 0 {
            return Evaluation::new(0.0, "No valid graphemes found");
        }

        let weight_sum: f64 = found
            .iter()
            .map(|g| WEIGHTS.get(g).copied().unwrap_or(1.0))
            .sum();
        let score = (weight_sum / (vocabulary.len() as f64 * 5.0)).min(1.0);
        Evaluation::new(
            score,
            format!(
                "Found {} common graphemes out of {} total graphemes",
                found.len(),
                total_matches
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_scores_zero_with_summary() {
        let evaluation = GraphemeHeuristic::new().analyze("   ");
        assert_eq!(evaluation.score(), 0.0);
        assert!(!evaluation.summary().is_empty());
    }

    #[test]
    fn digits_have_no_graphemes() {
        let evaluation = GraphemeHeuristic::new().analyze("0123 456.");
        assert_eq!(evaluation.score(), 0.0);
        assert_eq!(evaluation.summary(), "No valid graphemes found");
    }

    #[test]
    fn english_orders_above_consonant_noise() {
        let heuristic = GraphemeHeuristic::new();
        let english = heuristic.analyze("the weather in the north changed during the night");
        let noise = heuristic.analyze("zqx vkj pbd gfw zzq xkv jpb");
        assert!(english.score() > noise.score());
    }

    #[test]
    fn longest_match_wins() {
        // "the" must consume all three characters as one trigraph rather
        // than splitting into "th" + "e".
        let evaluation = GraphemeHeuristic::new().analyze("the");
        assert!(evaluation.summary().starts_with("Found 1 common graphemes"));
    }

    #[test]
    fn distinct_types_count_once() {
        let heuristic = GraphemeHeuristic::new();
        let once = heuristic.analyze("the");
        let thrice = heuristic.analyze("the the the");
        // Repetition adds matches but no new types, so the score is flat.
        assert_eq!(once.score(), thrice.score());
    }

    #[test]
    fn extended_variant_matches_four_letter_patterns() {
        let standard = GraphemeHeuristic::new().analyze("tion");
        let extended = GraphemeHeuristic::extended().analyze("tion");
        assert!(standard.summary().starts_with("Found 2"));
        assert!(extended.summary().starts_with("Found 1"));
    }
}
