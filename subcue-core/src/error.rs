use thiserror::Error;

/// All errors produced by subcue-core.
#[derive(Debug, Error)]
pub enum SubcueError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("empty segment reached the cue builder — segmenter invariant violated")]
    InvalidSegment,

    #[error("word stream producer failed: {0}")]
    Producer(#[source] anyhow::Error),

    #[error("malformed transcript document: {0}")]
    MalformedTranscript(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, SubcueError>;
