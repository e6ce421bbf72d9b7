// std imports
use std::io;

// third-party imports
use thiserror::Error;

// workspace imports
use wildkmp::Occurrences;

/// Error is an error which may occur in the benchmark harness.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Match(#[from] wildkmp::Error),
    #[error("algorithm {algorithm} diverged from the naive oracle: expected {oracle}, got {candidate}")]
    Divergence {
        algorithm: &'static str,
        oracle: Occurrences,
        candidate: Occurrences,
    },
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
