//! Error types for tenk.
//!
//! Only infrastructure failures live here. Rejected user actions (blank
//! names, non-positive hours, unknown skills) are not errors; see
//! [`crate::core::store::Rejected`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TenkError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("missing configuration: {0}")]
    MissingConfig(String),

    #[error("validation failed: {0}")]
    ValidationFailed(String),

    #[error("terminal error: {0}")]
    Terminal(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TenkError {
    /// Stable machine-readable code used in robot output.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::MissingConfig(_) => "config_error",
            Self::ValidationFailed(_) => "validation_failed",
            Self::Terminal(_) => "terminal_error",
            Self::Io(_) => "io_error",
            Self::Serialization(_) => "serialization_error",
        }
    }
}

pub type Result<T> = std::result::Result<T, TenkError>;
