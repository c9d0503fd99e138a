//! Error types.

use thiserror::Error;

/// Errors raised by draws, shuffles and samples.
///
/// Every variant is produced before the generator is touched, so a failed
/// call never consumes randomness.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A distribution parameter is outside its valid domain.
    #[error("invalid {distribution} parameter: {reason}")]
    InvalidParameter {
        distribution: &'static str,
        reason: &'static str,
    },

    /// `r` distinct items cannot be selected from a population of `n`.
    #[error("cannot select {r} distinct items from a population of {n}")]
    InvalidRange { n: i128, r: i128 },

    /// Output buffer length does not match the requested sample size.
    #[error("output buffer holds {actual} items, expected {expected}")]
    BufferLength { expected: usize, actual: usize },
}

impl Error {
    pub(crate) fn invalid(distribution: &'static str, reason: &'static str) -> Self {
        Self::InvalidParameter {
            distribution,
            reason,
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid seed: {0}. Must be an unsigned 64-bit integer")]
    InvalidSeed(String),

    #[error("invalid seed source: {0}. Must be one of: entropy, clock")]
    InvalidSource(String),

    #[error("configuration parse error: {0}")]
    Parse(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
