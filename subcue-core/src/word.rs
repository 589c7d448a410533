//! Typed word record passed from the recognizer to the segmenter.

use serde::{Deserialize, Serialize};

/// A single recognized token with its time-aligned boundaries.
///
/// Produced by the external recognizer; consumed exactly once by the
/// segmenter. `start <= end` holds for any well-formed recognizer output,
/// and words arrive in non-decreasing `start` order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    /// Recognized text, verbatim (casing and punctuation preserved).
    /// Plain-whisper documents key this as `word`; whisper-timestamped
    /// uses `text`.
    #[serde(alias = "word")]
    pub text: String,
    /// Start of the word in seconds from the beginning of the audio.
    pub start: f64,
    /// End of the word in seconds.
    pub end: f64,
}

impl Word {
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }

    /// Returns how long this word is spoken, in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.end - self.start
    }

    /// Returns the silence gap between this word and `next`, in seconds.
    ///
    /// Negative when the recognizer reports overlapping words.
    pub fn gap_to(&self, next: &Word) -> f64 {
        next.start - self.end
    }

    /// Text length in Unicode scalar values (what `min_chars` counts).
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}
