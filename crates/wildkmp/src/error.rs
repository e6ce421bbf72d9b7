// third-party imports
use thiserror::Error;

/// Error is an error which may occur when validating search inputs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("pattern is empty")]
    EmptyPattern,
    #[error("pattern length {pattern} exceeds text length {text}")]
    PatternExceedsText { pattern: usize, text: usize },
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
