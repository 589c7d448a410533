//! SRT rendering.
//!
//! Owns everything the core deliberately does not know about the target
//! syntax: 1-based index numbering, `HH:MM:SS,mmm` timecodes, and blank-line
//! block separation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use subcue_core::Cue;

/// Render seconds as an SRT timecode (`HH:MM:SS,mmm`).
fn format_timestamp(seconds: f64) -> String {
    let total_ms = (seconds.max(0.0) * 1000.0).round() as u64;
    let ms = total_ms % 1000;
    let total_secs = total_ms / 1000;
    let secs = total_secs % 60;
    let total_mins = total_secs / 60;
    let mins = total_mins % 60;
    let hours = total_mins / 60;

    format!("{hours:02}:{mins:02}:{secs:02},{ms:03}")
}

/// Render an ordered cue sequence as SRT file content.
pub fn compose(cues: &[Cue]) -> String {
    let mut out = String::new();
    for (index, cue) in (1..).zip(cues) {
        out.push_str(&format!(
            "{index}\n{} --> {}\n{}\n\n",
            format_timestamp(cue.start),
            format_timestamp(cue.end),
            cue.text
        ));
    }
    out
}

/// Compose and write an SRT file.
pub fn save(cues: &[Cue], path: &Path) -> Result<()> {
    fs::write(path, compose(cues))
        .with_context(|| format!("failed to write subtitles to {}", path.display()))
}
