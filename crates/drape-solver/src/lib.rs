//! # drape-solver
//!
//! Position-based dynamics for a deformable grid surface.
//!
//! ## Key Types
//!
//! - [`SurfaceState`] — SoA buffers for positions, velocities, normals,
//!   masses, and anchoring flags
//! - [`ConstraintGraph`] — immutable distance constraints in relaxation
//!   order, with per-edge rest lengths measured at construction
//! - [`PbdSolver`] — one frame: predict → relax → restore anchored →
//!   reconstruct velocities → recompute normals
//! - [`SolverConfig`] — relaxation pass count, stiffness, damping
//! - [`transform`] — rigid affine repositioning of all or a range of
//!   particles, without injecting velocity

pub mod config;
pub mod constraint;
pub mod pbd;
pub mod state;
pub mod transform;

pub use config::SolverConfig;
pub use constraint::{solve_distance, ConstraintGraph, DistanceConstraint};
pub use pbd::{PbdSolver, StepStats};
pub use state::SurfaceState;
