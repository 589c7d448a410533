//! Word-stream segmentation.
//!
//! ## Algorithm (per word, with one-word lookahead)
//!
//! ```text
//! 1. Pull the next word from the producer (a producer error aborts the run)
//! 2. Append it to the open segment, adding its length + 1 separator space
//! 3. Close the segment when BOTH hold:
//!      char_count >= min_chars
//!      the boundary detector fires for (word, lookahead)
//! 4. At end of stream, flush any non-empty open segment regardless of the
//!    threshold — trailing words are never dropped
//! ```
//!
//! When the threshold is met mid-sentence the segment stays open until a
//! boundary appears: strict minimum-length adherence is traded for never
//! cutting between related words.

use tracing::{debug, info};

use crate::{
    boundary::{BoundaryDetector, SentencePauseDetector},
    error::{Result, SubcueError},
    word::Word,
};

/// Configuration for `Segmenter`.
///
/// There is no default: `min_chars` is a display-side readability choice the
/// caller must make (the reference CLI uses 10).
#[derive(Debug, Clone)]
pub struct SegmenterConfig {
    /// Minimum joined-text length (Unicode scalars) a segment must reach
    /// before it may close at a natural boundary.
    pub min_chars: usize,
}

impl SegmenterConfig {
    /// Rejects configurations the segmenter cannot honor.
    ///
    /// # Errors
    /// `SubcueError::InvalidConfiguration` when `min_chars` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.min_chars == 0 {
            return Err(SubcueError::InvalidConfiguration(
                "min_chars must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// An in-progress grouping of consecutive words.
///
/// Owned exclusively by the segmenter while open; immutable once emitted.
#[derive(Debug, Clone, Default)]
pub struct Segment {
    words: Vec<Word>,
    char_count: usize,
}

impl Segment {
    /// Build a segment from an already-ordered word list.
    pub fn from_words(words: Vec<Word>) -> Self {
        let mut segment = Self::default();
        for word in words {
            segment.push(word);
        }
        segment
    }

    /// Append a word, accounting for the separator space that will join it.
    fn push(&mut self, word: Word) {
        self.char_count += word.char_count();
        if !self.words.is_empty() {
            self.char_count += 1;
        }
        self.words.push(word);
    }

    /// The accumulated words, in stream order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Consume the segment, yielding its words.
    pub fn into_words(self) -> Vec<Word> {
        self.words
    }

    /// Length of the space-joined text, in Unicode scalar values.
    pub fn char_count(&self) -> usize {
        self.char_count
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Partitions an ordered word stream into segments.
///
/// Pure and deterministic: the same stream and configuration always yield
/// the same segments. The input iterator is consumed exactly once.
pub struct Segmenter {
    config: SegmenterConfig,
    boundary: Box<dyn BoundaryDetector>,
}

impl std::fmt::Debug for Segmenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Segmenter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Segmenter {
    /// Create a segmenter with an explicit boundary heuristic.
    ///
    /// # Errors
    /// `SubcueError::InvalidConfiguration` before any processing begins when
    /// the configuration is rejected (fail fast).
    pub fn new(config: SegmenterConfig, boundary: Box<dyn BoundaryDetector>) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, boundary })
    }

    /// Create a segmenter with the default punctuation + pause heuristic.
    pub fn with_default_boundary(config: SegmenterConfig) -> Result<Self> {
        Self::new(config, Box::new(SentencePauseDetector::default()))
    }

    /// Segment a fallible word stream.
    ///
    /// An empty stream yields an empty segment sequence. A producer error
    /// aborts the run and discards segments built so far — all-or-nothing,
    /// so a truncated run is never presented as complete.
    ///
    /// # Errors
    /// `SubcueError::Producer` wrapping the producer's failure, unchanged.
    pub fn segment<I, E>(&self, words: I) -> Result<Vec<Segment>>
    where
        I: IntoIterator<Item = std::result::Result<Word, E>>,
        E: Into<anyhow::Error>,
    {
        let mut iter = words.into_iter();
        let mut segments = Vec::new();
        let mut open = Segment::default();
        let mut total_words = 0usize;

        let mut current = next_word(&mut iter)?;
        while let Some(word) = current {
            let next = next_word(&mut iter)?;
            let at_boundary = self.boundary.is_boundary(&word, next.as_ref());

            open.push(word);
            total_words += 1;

            if open.char_count() >= self.config.min_chars && at_boundary {
                debug!(
                    words = open.len(),
                    chars = open.char_count(),
                    "segment closed at boundary"
                );
                segments.push(std::mem::take(&mut open));
            }

            current = next;
        }

        // End-of-stream flush: the open segment is emitted even when it is
        // under min_chars, so no word is ever lost.
        if !open.is_empty() {
            debug!(
                words = open.len(),
                chars = open.char_count(),
                "flushed trailing segment"
            );
            segments.push(open);
        }

        info!(
            words = total_words,
            segments = segments.len(),
            "segmentation complete"
        );
        Ok(segments)
    }

    /// Segment an infallible, already-materialized word sequence.
    pub fn segment_words<I>(&self, words: I) -> Result<Vec<Segment>>
    where
        I: IntoIterator<Item = Word>,
    {
        self.segment(words.into_iter().map(Ok::<Word, std::convert::Infallible>))
    }
}

fn next_word<I, E>(iter: &mut I) -> Result<Option<Word>>
where
    I: Iterator<Item = std::result::Result<Word, E>>,
    E: Into<anyhow::Error>,
{
    match iter.next() {
        Some(Ok(word)) => Ok(Some(word)),
        Some(Err(e)) => Err(SubcueError::Producer(e.into())),
        None => Ok(None),
    }
}
