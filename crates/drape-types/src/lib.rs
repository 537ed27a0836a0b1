//! # drape-types
//!
//! Shared types, identifiers, error types, and solver constants for the
//! drape cloth-surface simulation engine.
//!
//! This crate has zero domain logic — it defines the vocabulary that all
//! other drape crates share.

pub mod constants;
pub mod error;
pub mod ids;
pub mod scalar;

pub use error::{DrapeError, DrapeResult};
pub use ids::ParticleId;
pub use scalar::Scalar;
