//! Solver constants and simulation defaults.

use crate::scalar::Scalar;

/// Gravitational acceleration (m/s²).
pub const GRAVITY: Scalar = 9.8;

/// Default simulation timestep (seconds). 1/60th of a second.
pub const DEFAULT_DT: Scalar = 1.0 / 60.0;

/// Distance-constraint stiffness: fraction of the constraint error
/// corrected per solver visit.
pub const DEFAULT_STIFFNESS: Scalar = 0.01;

/// Default number of constraint-relaxation passes per timestep.
pub const DEFAULT_SUBSTEPS: u32 = 4;

/// Velocity retention factor applied after velocity reconstruction.
/// Slightly below 1 to bleed off energy injected by the constraint
/// solver, which is not energy-conserving.
pub const DEFAULT_DAMPING: Scalar = 0.999;

/// Epsilon below which an accumulated normal is considered degenerate
/// and left unnormalized.
pub const NORMAL_EPSILON: Scalar = 1.0e-10;
