//! Finalized subtitle cues.

use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, SubcueError},
    segmenter::Segment,
};

/// A finalized, immutable subtitle entry.
///
/// Display timing comes straight from the constituent words: no padding, no
/// rounding (output precision is the formatter's concern).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cue {
    /// First word's start, in seconds.
    pub start: f64,
    /// Last word's end, in seconds.
    pub end: f64,
    /// Words joined with single ASCII spaces, verbatim.
    pub text: String,
}

impl Cue {
    /// Build a cue from a closed segment.
    ///
    /// # Errors
    /// `SubcueError::InvalidSegment` when the segment holds no words. The
    /// segmenter never emits empty segments, so this indicates a bug in the
    /// caller, not a runtime condition to recover from.
    pub fn from_segment(segment: &Segment) -> Result<Self> {
        let first = segment.words().first().ok_or(SubcueError::InvalidSegment)?;
        let last = segment.words().last().ok_or(SubcueError::InvalidSegment)?;

        let text = segment
            .words()
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        Ok(Self {
            start: first.start,
            end: last.end,
            text,
        })
    }

    /// Returns how long this cue is displayed, in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.end - self.start
    }
}

/// Map a whole run of segments to cues, preserving order.
pub fn build_cues(segments: &[Segment]) -> Result<Vec<Cue>> {
    segments.iter().map(Cue::from_segment).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::word::Word;
    use approx::assert_relative_eq;

    fn segment(words: &[(&str, f64, f64)]) -> Segment {
        let mut out = Vec::new();
        for (text, start, end) in words {
            out.push(Word::new(*text, *start, *end));
        }
        Segment::from_words(out)
    }

    #[test]
    fn cue_spans_first_start_to_last_end() {
        let cue = Cue::from_segment(&segment(&[
            ("Hello", 0.0, 0.3),
            ("world.", 0.3, 0.8),
        ]))
        .unwrap();

        assert_relative_eq!(cue.start, 0.0);
        assert_relative_eq!(cue.end, 0.8);
        assert_relative_eq!(cue.duration_secs(), 0.8);
        assert_eq!(cue.text, "Hello world.");
    }

    #[test]
    fn text_is_joined_verbatim_with_single_spaces() {
        let cue = Cue::from_segment(&segment(&[
            ("DON'T", 0.0, 0.2),
            ("re-Case,", 0.2, 0.5),
            ("ever!", 0.5, 0.9),
        ]))
        .unwrap();
        assert_eq!(cue.text, "DON'T re-Case, ever!");
    }

    #[test]
    fn single_word_cue_keeps_word_timing() {
        let cue = Cue::from_segment(&segment(&[("Hi.", 1.5, 1.9)])).unwrap();
        assert_relative_eq!(cue.start, 1.5);
        assert_relative_eq!(cue.end, 1.9);
        assert_eq!(cue.text, "Hi.");
    }

    #[test]
    fn empty_segment_is_a_contract_violation() {
        let err = Cue::from_segment(&Segment::default()).expect_err("must reject empty segment");
        assert!(matches!(err, SubcueError::InvalidSegment));
    }

    #[test]
    fn cue_serializes_with_plain_field_names() {
        let cue = Cue {
            start: 0.0,
            end: 0.8,
            text: "Hello world.".into(),
        };
        let json = serde_json::to_value(&cue).expect("serialize cue");
        assert_eq!(json["text"], "Hello world.");
        let round_trip: Cue = serde_json::from_value(json).expect("deserialize cue");
        assert_eq!(round_trip, cue);
    }
}
