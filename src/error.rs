//! Crate error types.

use thiserror::Error;

/// Result type for the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Requested password length is outside the supported range.
    #[error("password length {0} is outside the supported range {1}..={2}")]
    LengthOutOfRange(usize, usize, usize),

    /// No character classes were enabled.
    #[error("no character classes enabled - select at least one")]
    NoClassesEnabled,

    /// An enabled class has no characters left after ambiguous filtering.
    #[error("character class '{0}' has no usable characters after filtering")]
    EmptyClassAlphabet(&'static str),

    /// The combined alphabet is empty.
    #[error("effective alphabet is empty")]
    EmptyAlphabet,

    /// Retry budget exhausted without satisfying every enabled class.
    #[error("failed to satisfy character class constraints after {0} attempts")]
    GenerationFailed(usize),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
