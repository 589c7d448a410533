//! Punctuation + silence-gap boundary heuristic.
//!
//! ## Rule (triggers ORed together)
//!
//! 1. The just-appended word ends with sentence-terminating punctuation.
//! 2. The silence gap to the next word exceeds `pause_threshold_secs`.
//! 3. There is no next word (end of stream).

use super::BoundaryDetector;
use crate::word::Word;

/// Punctuation marks that end a sentence, unless overridden.
pub const DEFAULT_SENTENCE_ENDERS: &[char] = &['.', '?', '!'];

/// Silence gap (seconds) treated as a speech pause, unless overridden.
pub const DEFAULT_PAUSE_THRESHOLD_SECS: f64 = 0.5;

/// The default natural-boundary heuristic: sentence-ending punctuation or a
/// long enough pause before the next word.
#[derive(Debug, Clone)]
pub struct SentencePauseDetector {
    /// Characters that mark a sentence end when a word's text ends with one.
    sentence_enders: Vec<char>,
    /// Minimum silence gap (seconds) between consecutive words to count as
    /// a pause. Typical range: 0.3–1.0.
    pause_threshold_secs: f64,
}

impl SentencePauseDetector {
    /// Create a detector with an explicit punctuation set and pause threshold.
    pub fn new(sentence_enders: Vec<char>, pause_threshold_secs: f64) -> Self {
        Self {
            sentence_enders,
            pause_threshold_secs,
        }
    }

    fn ends_sentence(&self, text: &str) -> bool {
        text.chars()
            .last()
            .is_some_and(|c| self.sentence_enders.contains(&c))
    }
}

impl Default for SentencePauseDetector {
    fn default() -> Self {
        Self::new(
            DEFAULT_SENTENCE_ENDERS.to_vec(),
            DEFAULT_PAUSE_THRESHOLD_SECS,
        )
    }
}

impl BoundaryDetector for SentencePauseDetector {
    fn is_boundary(&self, word: &Word, next: Option<&Word>) -> bool {
        if self.ends_sentence(&word.text) {
            return true;
        }
        match next {
            Some(next) => word.gap_to(next) > self.pause_threshold_secs,
            // Last word in the stream is always a boundary.
            None => true,
        }
    }
}
