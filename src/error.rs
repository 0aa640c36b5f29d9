//! Error types.
//!
//! Generation itself cannot fail; every error is a configuration value that
//! falls outside the closed option lists.

use thiserror::Error;

/// A rejected configuration value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("quantity must be greater than zero")]
    ZeroQuantity,

    #[error("quantity {0} is not one of the supported quantities")]
    UnsupportedQuantity(usize),

    #[error("CVV must contain only digits, got {0:?}")]
    NonDigitCvv(String),

    #[error("CVV must be at most {max} digits, got {len}")]
    CvvTooLong { len: usize, max: usize },

    #[error("unknown network: {0}")]
    UnknownNetwork(String),

    #[error("unknown output format: {0}")]
    UnknownFormat(String),

    #[error("unknown month: {0}")]
    UnknownMonth(String),

    #[error("expiration year must be four digits or \"Random\", got {0:?}")]
    InvalidYear(String),
}

/// Crate-level error.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
