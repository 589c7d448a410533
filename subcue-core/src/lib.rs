//! # subcue-core
//!
//! Subtitle cue segmentation engine SDK.
//!
//! ## Architecture
//!
//! ```text
//! Recognizer JSON → Transcript::words() → Segmenter → Cue::from_segment
//!                                             │
//!                                     BoundaryDetector
//!                                  (punctuation + pause)
//! ```
//!
//! One synchronous forward pass over a finite word stream: each word joins
//! the open segment, and the segment closes once it is long enough to read
//! (`min_chars`) *and* a natural boundary occurs. Trailing words are flushed
//! at end of stream so nothing is ever dropped. Rendering cues into a
//! concrete subtitle syntax is the host's job.

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod boundary;
pub mod cue;
pub mod error;
pub mod segmenter;
pub mod transcript;
pub mod word;

// Convenience re-exports for downstream crates
pub use boundary::{BoundaryDetector, SentencePauseDetector};
pub use cue::{build_cues, Cue};
pub use error::SubcueError;
pub use segmenter::{Segment, Segmenter, SegmenterConfig};
pub use transcript::Transcript;
pub use word::Word;
