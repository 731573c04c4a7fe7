//! Error types for the calsieve ecosystem.

use thiserror::Error;

/// Errors that can occur around the sieve. The transformation itself is
/// infallible; these cover the config, parse, and persistence edges.
#[derive(Error, Debug)]
pub enum SieveError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("ICS parse error: {0}")]
    IcsParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for calsieve operations.
pub type SieveResult<T> = Result<T, SieveError>;
