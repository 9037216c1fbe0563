//! Unified error types for the garden budget core.
//!
//! Every public operation validates before mutating, so any error here means
//! the budget state is unchanged. Errors are reported to the caller as a
//! rejected operation; none of them are fatal to the process.

use thiserror::Error;

/// Unified error type for all ledger, rewards, and storage operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the configuration problem
        message: String,
    },

    /// A pot name failed validation (empty or whitespace-only)
    #[error("Invalid name: {message}")]
    InvalidName {
        /// Human-readable description of the name problem
        message: String,
    },

    /// A monetary amount failed validation (non-positive where a positive
    /// value is required, negative, or not finite)
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: f64,
    },

    /// A pot id did not resolve to an existing pot
    #[error("Pot not found: {id}")]
    PotNotFound {
        /// The unresolved pot id
        id: i64,
    },

    /// The operation is structurally forbidden (reserve deletion, duplicate
    /// reserve, upgrading the reserve or a max-stage plant)
    #[error("Operation not allowed: {message}")]
    NotAllowed {
        /// Human-readable description of the rejected operation
        message: String,
    },

    /// The global point balance cannot cover an upgrade cost
    #[error("Insufficient points: need {required}, have {available}")]
    InsufficientPoints {
        /// Points the upgrade would cost
        required: i64,
        /// Points currently available
        available: i64,
    },

    /// The persisted budget document failed to parse
    #[error("Stored budget is corrupt: {message}")]
    StateCorrupt {
        /// Underlying parse failure
        message: String,
    },

    /// I/O error while reading or writing the budget document
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error while writing the budget document
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
