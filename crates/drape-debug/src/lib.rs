//! # drape-debug
//!
//! Binary state snapshots for inspecting and replaying simulation runs.

pub mod snapshot;

pub use snapshot::StateSnapshot;
