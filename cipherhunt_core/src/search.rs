//! Brute-force search across the bounded cipher key spaces.
//!
//! Caesar and Affine key spaces are small enough to walk sequentially.
//! The Vigenère key space dominates, so it is split into contiguous
//! index ranges handed to a bounded pool of worker threads; each worker
//! decodes indices back into keys with mixed-radix arithmetic, decrypts,
//! scores, and publishes finished candidates. Workers are always joined
//! before ranking.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::thread;

use log::debug;
use thiserror::Error;

use crate::affine::AffineCipher;
use crate::alphabet;
use crate::caesar::CaesarCipher;
use crate::candidate::Candidate;
use crate::cipher::Cipher;
use crate::vigenere::VigenereCipher;

/// Number of candidates retained per input text.
pub const TOP_K: usize = 5;

/// Default size of the Vigenère worker pool.
pub const DEFAULT_WORKERS: usize = 4;

// Letter sets for the bounded Vigenère key space. Exhaustive enumeration
// over the full alphabet is intractable beyond length 1 (68^4 keys for
// length 4 alone), so the key space is deliberately restricted: length 1
// covers the full alphabet, length 2 the 26 English letters in frequency
// order, length 3 the 6 most frequent of those, length 4 the top 3. This
// is a precision/tractability trade-off, not a bug: keys outside these
// sets are never recovered, which bounds recall.
const COMMON_LETTERS: &str = "etaoinshrdlcumwfgypbvkjxqz";
const VERY_COMMON_LETTERS: &str = "etaoin";
const TOP_LETTERS: &str = "eta";

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("worker count must be at least 1, got {0}")]
    InvalidWorkerCount(usize),

    #[error("{failed} search worker(s) panicked")]
    WorkerPanicked { failed: usize },
}

/// Search configuration. Validated up front so a bad worker count is
/// reported before any search runs.
#[derive(Clone, Copy, Debug)]
pub struct SearchOptions {
    workers: usize,
}

impl SearchOptions {
    pub fn new(workers: usize) -> Result<Self, SearchError> {
        if workers < 1 {
            return Err(SearchError::InvalidWorkerCount(workers));
        }
        Ok(Self { workers })
    }

    pub fn workers(&self) -> usize {
        self.workers
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
        }
    }
}

/// Receives tested-key counts while the Vigenère search runs. Calls
/// arrive concurrently from worker threads.
pub trait ProgressObserver: Sync {
    fn on_progress(&self, tested: usize, total: usize);
}

/// Observer that ignores all progress updates.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_progress(&self, _tested: usize, _total: usize) {}
}

/// One Vigenère key-length group: every key of `length` characters over
/// `letters`.
#[derive(Clone, Copy, Debug)]
struct KeyGroup {
    letters: &'static str,
    length: usize,
}

impl KeyGroup {
    fn total(&self) -> usize {
        self.letters.len().pow(self.length as u32)
    }

    /// Mixed-radix decode of a key-space index into a key string, most
    /// significant character first.
    fn key_at(&self, mut index: usize) -> String {
        let letters = self.letters.as_bytes();
        let base = letters.len();
        let mut digits = [0usize; 4];
        for slot in (0..self.length).rev() {
            digits[slot] = index % base;
            index /= base;
        }
        digits[..self.length]
            .iter()
            .map(|&digit| letters[digit] as char)
            .collect()
    }
}

fn key_groups() -> [KeyGroup; 4] {
    [
        KeyGroup {
            letters: alphabet::ALPHABET,
            length: 1,
        },
        KeyGroup {
            letters: COMMON_LETTERS,
            length: 2,
        },
        KeyGroup {
            letters: VERY_COMMON_LETTERS,
            length: 3,
        },
        KeyGroup {
            letters: TOP_LETTERS,
            length: 4,
        },
    ]
}

/// Size of the bounded Vigenère key space across all length groups.
pub fn vigenere_key_space_size() -> usize {
    key_groups().iter().map(KeyGroup::total).sum()
}

/// Tries every nonzero Caesar shift.
pub fn search_caesar(source: &str, ciphertext: &str) -> Vec<Candidate> {
    let mut candidates = Vec::with_capacity(alphabet::size() - 1);
    for shift in 1..alphabet::size() {
        let cipher = CaesarCipher::new(shift);
        candidates.push(Candidate::score(&cipher, source, ciphertext));
    }
    debug!("caesar search: {} candidates", candidates.len());
    candidates
}

/// Tries every (a, b) pair with `a` pre-filtered for coprimality. A pair
/// that still fails construction is skipped, never fatal.
pub fn search_affine(source: &str, ciphertext: &str) -> Vec<Candidate> {
    let valid_a = AffineCipher::valid_multiplicative_keys();
    let mut candidates = Vec::with_capacity(valid_a.len() * alphabet::size());
    for a in valid_a {
        for b in 0..alphabet::size() {
            let Ok(cipher) = AffineCipher::new(a, b) else {
                continue;
            };
            candidates.push(Candidate::score(&cipher, source, ciphertext));
        }
    }
    debug!("affine search: {} candidates", candidates.len());
    candidates
}

/// Walks the bounded Vigenère key space with `options.workers()` threads
/// per key-length group.
///
/// Workers buffer candidates locally and publish a (range offset, batch)
/// pair after finishing their range, so candidates from healthy workers
/// survive a sibling's panic. Panics are counted at join and surfaced as
/// a single [`SearchError::WorkerPanicked`] once every worker has
/// stopped.
pub fn search_vigenere(
    source: &str,
    ciphertext: &str,
    options: &SearchOptions,
    progress: &dyn ProgressObserver,
) -> Result<Vec<Candidate>, SearchError> {
    let total = vigenere_key_space_size();
    let tested = AtomicUsize::new(0);
    let published: Mutex<Vec<(usize, Vec<Candidate>)>> = Mutex::new(Vec::new());
    let mut panicked = 0usize;
    let mut group_base = 0usize;

    for group in key_groups() {
        let group_total = group.total();
        let workers = options.workers().min(group_total);
        let chunk = group_total.div_ceil(workers);

        thread::scope(|scope| {
            let mut handles = Vec::with_capacity(workers);
            for worker in 0..workers {
                let start = worker * chunk;
                let end = group_total.min(start + chunk);
                if start >= end {
                    break;
                }
                let tested = &tested;
                let published = &published;
                handles.push(scope.spawn(move || {
                    let mut batch = Vec::with_capacity(end - start);
                    for index in start..end {
                        let cipher = VigenereCipher::new(group.key_at(index));
                        batch.push(Candidate::score(&cipher, source, ciphertext));
                        let seen = tested.fetch_add(1, Ordering::Relaxed) + 1;
                        progress.on_progress(seen, total);
                    }
                    published
                        .lock()
                        .unwrap_or_else(PoisonError::into_inner)
                        .push((group_base + start, batch));
                }));
            }
            for handle in handles {
                if handle.join().is_err() {
                    panicked += 1;
                }
            }
        });
        group_base += group_total;
    }

    if panicked > 0 {
        return Err(SearchError::WorkerPanicked { failed: panicked });
    }

    let mut batches = published
        .into_inner()
        .unwrap_or_else(PoisonError::into_inner);
    // Restore enumeration order so score ties keep discovery order no
    // matter how workers interleaved.
    batches.sort_by_key(|(offset, _)| *offset);
    let candidates: Vec<Candidate> = batches.into_iter().flat_map(|(_, batch)| batch).collect();
    debug!(
        "vigenere search: {} candidates across {} key-length groups",
        candidates.len(),
        key_groups().len()
    );
    Ok(candidates)
}

/// Runs every bounded cipher search against one input text and returns
/// the full candidate list, ranked. Playfair is excluded: its key space
/// is open-ended.
pub fn search_all(
    text: &str,
    source: &str,
    options: &SearchOptions,
    progress: &dyn ProgressObserver,
) -> Result<Vec<Candidate>, SearchError> {
    let mut candidates = search_caesar(source, text);
    candidates.extend(search_vigenere(source, text, options, progress)?);
    candidates.extend(search_affine(source, text));
    rank(&mut candidates);
    debug!("search of {source}: {} total candidates", candidates.len());
    Ok(candidates)
}

/// Ranked top-[`TOP_K`] candidates for one input text.
pub fn search(
    text: &str,
    source: &str,
    options: &SearchOptions,
) -> Result<Vec<Candidate>, SearchError> {
    let mut candidates = search_all(text, source, options, &NoProgress)?;
    candidates.truncate(TOP_K);
    Ok(candidates)
}

/// Stable descending sort by combined score; ties keep discovery order.
pub fn rank(candidates: &mut [Candidate]) {
    candidates.sort_by(|a, b| b.combined_score().total_cmp(&a.combined_score()));
}
