//! Natural-boundary detection abstraction.
//!
//! The `BoundaryDetector` trait is the primary extensibility point: swap in
//! `SentencePauseDetector` (default) or any future heuristic (prosody,
//! punctuation-model output, …) without touching the segmenter.

pub mod sentence;

pub use sentence::SentencePauseDetector;

use crate::word::Word;

/// Trait for all natural-boundary heuristics.
///
/// Called by the segmenter after each word is appended, with a one-word
/// lookahead. `next` is `None` exactly when `word` is the last word in the
/// stream.
pub trait BoundaryDetector: Send + 'static {
    /// Returns true when ending a subtitle after `word` is preferable.
    fn is_boundary(&self, word: &Word, next: Option<&Word>) -> bool;
}
