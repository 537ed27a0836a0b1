//! Scenario parameters — the simulation input boundary.
//!
//! Loaded from TOML and validated before anything is constructed, so
//! data-level mistakes surface with clear diagnostics instead of
//! corrupting frames.

use serde::{Deserialize, Serialize};

use drape_solver::SolverConfig;
use drape_types::constants::{DEFAULT_DT, GRAVITY};
use drape_types::{DrapeError, DrapeResult};

/// Complete parameters for a headless simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    /// Grid width before resolution scaling (particles per row).
    pub width: usize,
    /// Grid length before resolution scaling (rows).
    pub length: usize,
    /// Resolution multiplier applied to both dimensions.
    pub resolution: usize,
    /// Uniform mass for every particle.
    pub particle_mass: f32,

    /// Timestep per frame.
    pub dt: f32,
    /// Number of frames to simulate.
    pub steps: u32,
    /// External acceleration applied every frame.
    pub gravity: [f32; 3],

    /// Solver configuration (substeps, stiffness, damping).
    pub solver: SolverConfig,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            width: 60,
            length: 60,
            resolution: 1,
            particle_mass: 100.0,
            dt: DEFAULT_DT,
            steps: 600,
            gravity: [0.0, -GRAVITY, 0.0],
            solver: SolverConfig::default(),
        }
    }
}

impl SimulationParams {
    /// Loads parameters from a TOML file.
    pub fn from_toml_file(path: &str) -> DrapeResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let params: Self = toml::from_str(&text)
            .map_err(|e| DrapeError::Serialization(format!("{path}: {e}")))?;
        params.validate()?;
        Ok(params)
    }

    /// Validates every parameter.
    pub fn validate(&self) -> DrapeResult<()> {
        if self.resolution == 0 {
            return Err(DrapeError::InvalidConfig(
                "Resolution multiplier must be at least 1".into(),
            ));
        }
        if self.width * self.resolution < 2 || self.length * self.resolution < 2 {
            return Err(DrapeError::InvalidConfig(
                "Grid must be at least 2×2 particles after scaling".into(),
            ));
        }
        if !(self.particle_mass.is_finite() && self.particle_mass > 0.0) {
            return Err(DrapeError::InvalidConfig(format!(
                "Particle mass must be positive and finite, got {}",
                self.particle_mass
            )));
        }
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(DrapeError::InvalidConfig(format!(
                "Timestep must be positive and finite, got {}",
                self.dt
            )));
        }
        if self.steps == 0 {
            return Err(DrapeError::InvalidConfig(
                "Step count must be at least 1".into(),
            ));
        }
        if self.gravity.iter().any(|g| !g.is_finite()) {
            return Err(DrapeError::InvalidConfig(
                "Gravity components must be finite".into(),
            ));
        }
        self.solver.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(SimulationParams::default().validate().is_ok());
    }

    #[test]
    fn parses_partial_toml() {
        let params: SimulationParams = toml::from_str(
            r#"
            width = 10
            length = 8
            dt = 0.005

            [solver]
            substeps = 8
            "#,
        )
        .unwrap();
        assert_eq!(params.width, 10);
        assert_eq!(params.length, 8);
        assert_eq!(params.solver.substeps, 8);
        // Unspecified fields keep their defaults
        assert_eq!(params.resolution, 1);
        assert!((params.solver.stiffness - 0.01).abs() < 1e-9);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_values() {
        let mut params = SimulationParams::default();
        params.resolution = 0;
        assert!(params.validate().is_err());

        let mut params = SimulationParams::default();
        params.particle_mass = -1.0;
        assert!(params.validate().is_err());

        let mut params = SimulationParams::default();
        params.dt = 0.0;
        assert!(params.validate().is_err());

        let mut params = SimulationParams::default();
        params.gravity[1] = f32::INFINITY;
        assert!(params.validate().is_err());

        let mut params = SimulationParams::default();
        params.steps = 0;
        assert!(params.validate().is_err());
    }
}
