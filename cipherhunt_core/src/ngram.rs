use std::collections::HashSet;

use crate::heuristic::{Evaluation, Heuristic};

/// N-gram diversity scorer.
///
/// Counts distinct letter n-grams against the total and maps the
/// diversity ratio to [0, 1]: natural English sits in a middle band,
/// while highly repetitive text (low diversity) and near-random text
/// (high diversity) both score down. Not part of the default candidate
/// combination; offered as an independent scorer.
#[derive(Clone, Copy, Debug)]
pub struct NgramHeuristic {
    n: usize,
}

const LOW_DIVERSITY: f64 = 0.3;
const HIGH_DIVERSITY: f64 = 0.8;

impl NgramHeuristic {
    pub fn new(n: usize) -> Self {
        Self { n: n.max(1) }
    }

    pub fn ngram_size(&self) -> usize {
        self.n
    }
}

impl Default for NgramHeuristic {
    fn default() -> Self {
        Self::new(3)
    }
}

impl Heuristic for NgramHeuristic {
    fn name(&self) -> &'static str {
        "N-gram Analysis"
    }

    fn analyze(&self, text: &str) -> Evaluation {
        if text.trim().is_empty() {
            return Evaluation::new(0.0, "No text to analyze");
        }

        let letters: Vec<Vec<char>> = text
            .to_lowercase()
            .split(|c: char| !c.is_ascii_lowercase())
            .filter(|word| !word.is_empty())
            .map(|word| word.chars().collect())
            .collect();

        let mut unique: HashSet<String> = HashSet::new();
        let mut total = 0usize;
        for word in &letters {
            for window in word.windows(self.n) {
                unique.insert(window.iter().collect());
                total += 1;
            }
        }

        if total == 0 {
            return Evaluation::new(0.0, format!("No valid {}-grams found", self.n));
        }

        let diversity = unique.len() as f64 / total as f64;
        let score = if diversity < LOW_DIVERSITY {
            diversity / LOW_DIVERSITY
        } else if diversity > HIGH_DIVERSITY {
            (1.0 - diversity) / (1.0 - HIGH_DIVERSITY)
        } else {
            1.0
        };

        Evaluation::new(
            score,
            format!(
                "Found {} unique {}-grams out of {} total (diversity: {diversity:.2})",
                unique.len(),
                self.n,
                total
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_scores_zero_with_summary() {
        let evaluation = NgramHeuristic::default().analyze("");
        assert_eq!(evaluation.score(), 0.0);
        assert!(!evaluation.summary().is_empty());
    }

    #[test]
    fn short_words_yield_no_ngrams() {
        let evaluation = NgramHeuristic::new(3).analyze("a an to");
        assert_eq!(evaluation.score(), 0.0);
        assert_eq!(evaluation.summary(), "No valid 3-grams found");
    }

    #[test]
    fn repetitive_text_scores_below_prose() {
        let heuristic = NgramHeuristic::new(3);
        let prose = heuristic.analyze("the weather changed during the night and morning");
        let repetitive = heuristic.analyze("aaaaaaaa aaaaaaaa aaaaaaaa aaaaaaaa");
        assert!(prose.score() > repetitive.score());
    }

    #[test]
    fn size_is_clamped_to_at_least_one() {
        assert_eq!(NgramHeuristic::new(0).ngram_size(), 1);
    }
}
