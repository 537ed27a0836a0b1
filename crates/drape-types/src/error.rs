//! Error types for the drape engine.
//!
//! All crates return `DrapeResult<T>` from fallible operations.

use thiserror::Error;

/// Unified error type for the drape engine.
#[derive(Debug, Error)]
pub enum DrapeError {
    /// Mesh data is malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// A constraint references invalid particles.
    #[error("Invalid constraint: {0}")]
    InvalidConstraint(String),

    /// Configuration or construction parameter is out of valid range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A per-step input (timestep, index, range) is invalid.
    #[error("Invalid step input: {0}")]
    InvalidStep(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, DrapeError>`.
pub type DrapeResult<T> = Result<T, DrapeError>;
