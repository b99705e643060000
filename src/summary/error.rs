use std::path::PathBuf;
use thiserror::Error;

/// Failure categories of a summarization run. Local I/O, transcript
/// parsing, network transport, and the remote API each get their own kind
/// so callers (and exit paths) can tell them apart.
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("input file not found: {0}")]
    InputNotFound(PathBuf),

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed transcript line {line}: {reason}")]
    Transcript { line: usize, reason: String },

    #[error("request to summarization service failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("summarization service returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("unexpected response from summarization service: {0}")]
    Parse(String),
}
