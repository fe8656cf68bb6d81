use std::fmt;

/// Error type returned by mecab-rs public APIs.
#[derive(Debug)]
pub enum MeCabError {
    /// User-provided arguments were invalid.
    InvalidArgument(String),
    /// The external `mecab` process could not be run, or exited non-zero.
    ///
    /// The message carries the captured standard-error stream when it is
    /// non-empty, otherwise the captured standard output, otherwise the raw
    /// exit status.
    RunFailure(String),
    /// Analyzer output did not match the expected line/field grammar.
    MalformedOutput(String),
}

impl fmt::Display for MeCabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeCabError::InvalidArgument(message) => write!(f, "invalid argument: {message}"),
            MeCabError::RunFailure(message) => {
                write!(f, "Failed to run MeCab correctly: {message}")
            }
            MeCabError::MalformedOutput(message) => {
                write!(f, "malformed analyzer output: {message}")
            }
        }
    }
}

impl std::error::Error for MeCabError {}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MeCabError>;
