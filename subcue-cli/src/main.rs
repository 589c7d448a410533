//! Subcue command-line entry point.
//!
//! Reads a word-timestamped transcript JSON, segments it into subtitle cues
//! with `subcue-core`, and writes an SRT file. All file I/O and syntax
//! rendering lives here; the core stays pure.

mod srt;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use subcue_core::{build_cues, Segmenter, SegmenterConfig, SentencePauseDetector, Transcript};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Turn a word-timestamped transcript into SRT subtitles.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the recognizer's transcript JSON
    input: PathBuf,

    /// Path for the output subtitle file
    output: PathBuf,

    /// Minimum characters per subtitle block
    #[arg(long, default_value_t = 10)]
    min_chars: usize,

    /// Silence gap in seconds treated as a natural boundary
    #[arg(long, default_value_t = 0.5)]
    pause: f64,

    /// Characters that end a sentence
    #[arg(long, default_value = ".?!")]
    sentence_enders: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    // Configuration errors are reported before any file is touched.
    let boundary = SentencePauseDetector::new(cli.sentence_enders.chars().collect(), cli.pause);
    let segmenter = Segmenter::new(
        SegmenterConfig {
            min_chars: cli.min_chars,
        },
        Box::new(boundary),
    )?;

    let json = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read transcript {}", cli.input.display()))?;
    let transcript = Transcript::from_json(&json)?;
    let words = transcript.words();
    info!(words = words.len(), "transcript loaded");

    let segments = segmenter.segment_words(words)?;
    let cues = build_cues(&segments)?;

    srt::save(&cues, &cli.output)?;
    info!(
        cues = cues.len(),
        output = %cli.output.display(),
        "subtitles saved"
    );
    Ok(())
}
