//! Scalar type alias for the simulation.
//!
//! `f32` matches the render-buffer contract (vertex attributes are
//! uploaded as 32-bit floats). The alias makes it easy to experiment
//! with `f64` precision in a CPU-only validation build.

/// The floating-point type used throughout the simulation.
pub type Scalar = f32;
