//! Solver configuration.

use serde::{Deserialize, Serialize};

use drape_types::constants::{DEFAULT_DAMPING, DEFAULT_STIFFNESS, DEFAULT_SUBSTEPS};
use drape_types::{DrapeError, DrapeResult};

/// Configuration for the PBD solver.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Number of constraint-relaxation passes per timestep.
    pub substeps: u32,

    /// Fraction of the constraint error corrected per solver visit
    /// (0 < stiffness <= 1).
    pub stiffness: f32,

    /// Velocity retention multiplier applied after velocity
    /// reconstruction (0 < damping <= 1). Slightly below 1 bleeds off
    /// the energy the relaxation passes inject.
    pub damping: f32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            substeps: DEFAULT_SUBSTEPS,
            stiffness: DEFAULT_STIFFNESS,
            damping: DEFAULT_DAMPING,
        }
    }
}

impl SolverConfig {
    /// Validates configuration values.
    pub fn validate(&self) -> DrapeResult<()> {
        if self.substeps == 0 {
            return Err(DrapeError::InvalidConfig(
                "Substep count must be at least 1".into(),
            ));
        }
        if !(self.stiffness > 0.0 && self.stiffness <= 1.0) {
            return Err(DrapeError::InvalidConfig(format!(
                "Stiffness must be in (0, 1], got {}",
                self.stiffness
            )));
        }
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(DrapeError::InvalidConfig(format!(
                "Damping must be in (0, 1], got {}",
                self.damping
            )));
        }
        Ok(())
    }
}
