//! Recognizer transcript documents.
//!
//! Adapts the word-timestamped JSON a recognizer emits (whisper-timestamped
//! shape: `{text, segments: [{start, end, text, words: [...]}]}`) into the
//! ordered word stream the segmenter consumes. Parsing only — reading the
//! file from disk is the host's job.

use serde::Deserialize;
use tracing::debug;

use crate::{error::Result, word::Word};

/// A full recognition result document.
#[derive(Debug, Clone, Deserialize)]
pub struct Transcript {
    /// Whole-transcript text, when the recognizer includes it. Not used for
    /// segmentation; exposed for hosts that want the raw text.
    #[serde(default)]
    pub text: String,
    /// Recognizer-level segments, in time order.
    #[serde(default)]
    pub segments: Vec<RecognizedSegment>,
}

/// One recognizer-level segment (a rough utterance, not a subtitle cue).
#[derive(Debug, Clone, Deserialize)]
pub struct RecognizedSegment {
    pub start: f64,
    pub end: f64,
    #[serde(default)]
    pub text: String,
    /// Word-level timing. Older recognizers omit this for some segments.
    #[serde(default)]
    pub words: Option<Vec<Word>>,
}

impl Transcript {
    /// Parse a recognizer JSON document.
    ///
    /// # Errors
    /// `SubcueError::MalformedTranscript` when the document does not match
    /// the expected shape.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Flatten the document into the ordered word stream.
    ///
    /// Words whose trimmed text is empty are skipped (some recognizers emit
    /// blank filler tokens). A segment without word-level timing becomes a
    /// single word spanning the whole segment, so its text still flows
    /// through the same segmentation path.
    pub fn words(&self) -> Vec<Word> {
        let mut out = Vec::new();
        for segment in &self.segments {
            match &segment.words {
                Some(words) => {
                    for word in words {
                        let text = word.text.trim();
                        if text.is_empty() {
                            continue;
                        }
                        out.push(Word::new(text, word.start, word.end));
                    }
                }
                None => {
                    let text = segment.text.trim();
                    if text.is_empty() {
                        continue;
                    }
                    debug!(
                        start = segment.start,
                        end = segment.end,
                        "segment without word timing — spanning it as one word"
                    );
                    out.push(Word::new(text, segment.start, segment.end));
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_word_timestamped_document() {
        let json = r#"{
            "text": "Hello world.",
            "segments": [{
                "start": 0.0,
                "end": 0.8,
                "text": "Hello world.",
                "words": [
                    {"text": "Hello", "start": 0.0, "end": 0.3},
                    {"text": "world.", "start": 0.3, "end": 0.8}
                ]
            }]
        }"#;

        let transcript = Transcript::from_json(json).unwrap();
        let words = transcript.words();
        assert_eq!(words.len(), 2);
        assert_eq!(words[0], Word::new("Hello", 0.0, 0.3));
        assert_eq!(words[1], Word::new("world.", 0.3, 0.8));
    }

    #[test]
    fn accepts_plain_whisper_word_key() {
        let json = r#"{
            "segments": [{
                "start": 0.0,
                "end": 0.4,
                "words": [{"word": "Hi.", "start": 0.0, "end": 0.4}]
            }]
        }"#;

        let words = Transcript::from_json(json).unwrap().words();
        assert_eq!(words, vec![Word::new("Hi.", 0.0, 0.4)]);
    }

    #[test]
    fn skips_blank_word_tokens_and_trims_padding() {
        let json = r#"{
            "segments": [{
                "start": 0.0,
                "end": 1.0,
                "words": [
                    {"text": "  ", "start": 0.0, "end": 0.1},
                    {"text": " padded ", "start": 0.1, "end": 0.6}
                ]
            }]
        }"#;

        let words = Transcript::from_json(json).unwrap().words();
        assert_eq!(words, vec![Word::new("padded", 0.1, 0.6)]);
    }

    #[test]
    fn segment_without_word_timing_becomes_one_spanning_word() {
        let json = r#"{
            "segments": [
                {"start": 0.0, "end": 2.1, "text": " No word marks here. "},
                {
                    "start": 3.0,
                    "end": 3.5,
                    "text": "Fine.",
                    "words": [{"text": "Fine.", "start": 3.0, "end": 3.5}]
                }
            ]
        }"#;

        let words = Transcript::from_json(json).unwrap().words();
        assert_eq!(
            words,
            vec![
                Word::new("No word marks here.", 0.0, 2.1),
                Word::new("Fine.", 3.0, 3.5),
            ]
        );
    }

    #[test]
    fn empty_document_yields_no_words() {
        let transcript = Transcript::from_json("{}").unwrap();
        assert!(transcript.words().is_empty());
        assert!(transcript.text.is_empty());
    }

    #[test]
    fn malformed_json_is_reported_as_such() {
        let err = Transcript::from_json("{not json").expect_err("must reject");
        assert!(matches!(
            err,
            crate::error::SubcueError::MalformedTranscript(_)
        ));
    }
}
