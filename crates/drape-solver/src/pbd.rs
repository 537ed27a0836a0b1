//! The per-frame PBD step.
//!
//! One step runs, in order:
//! 1. **Predict** — snapshot previous positions, integrate velocity and
//!    position (semi-implicit Euler)
//! 2. **Relax** — N Gauss-Seidel passes over the constraint graph
//! 3. **Restore anchored** — anchored particles snap back to their
//!    pre-step positions
//! 4. **Reconstruct velocity** — from the net positional change, damped
//! 5. **Recompute normals**

use glam::Vec3;

use drape_mesh::GridMesh;
use drape_types::{DrapeError, DrapeResult};

use crate::config::SolverConfig;
use crate::constraint::{solve_distance, ConstraintGraph};
use crate::state::SurfaceState;

/// Diagnostics from one solver step.
#[derive(Debug, Clone, Copy)]
pub struct StepStats {
    /// Relaxation passes performed.
    pub relax_passes: u32,
    /// Largest single correction magnitude applied during relaxation.
    pub max_correction: f32,
}

/// The position-based dynamics solver.
///
/// Owns the constraint graph and configuration; all mutable simulation
/// data lives in [`SurfaceState`]. One instance drives one surface.
pub struct PbdSolver {
    config: SolverConfig,
    graph: ConstraintGraph,
}

impl PbdSolver {
    /// Creates a solver with the default configuration.
    pub fn new(graph: ConstraintGraph) -> Self {
        Self {
            config: SolverConfig::default(),
            graph,
        }
    }

    /// Creates a solver with an explicit configuration.
    pub fn with_config(graph: ConstraintGraph, config: SolverConfig) -> DrapeResult<Self> {
        config.validate()?;
        Ok(Self { config, graph })
    }

    /// Returns the solver configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Returns the constraint graph.
    pub fn graph(&self) -> &ConstraintGraph {
        &self.graph
    }

    /// Advances the surface by one timestep under the external
    /// acceleration `f` (e.g. gravity).
    ///
    /// `dt` is any positive time unit, as long as it is consistent
    /// across calls. Rejects a non-positive or non-finite `dt` — a zero
    /// timestep would make velocity reconstruction divide by zero and
    /// silently poison every later frame.
    pub fn step(
        &self,
        state: &mut SurfaceState,
        mesh: &GridMesh,
        dt: f32,
        f: Vec3,
    ) -> DrapeResult<StepStats> {
        if !(dt.is_finite() && dt > 0.0) {
            return Err(DrapeError::InvalidStep(format!(
                "Timestep must be positive and finite, got {}",
                dt
            )));
        }

        // 1. Predict: integrate velocity, then position
        state.save_previous();
        for i in 0..state.particle_count {
            state.vel_x[i] += f.x * dt;
            state.vel_y[i] += f.y * dt;
            state.vel_z[i] += f.z * dt;
            state.pos_x[i] += state.vel_x[i] * dt;
            state.pos_y[i] += state.vel_y[i] * dt;
            state.pos_z[i] += state.vel_z[i] * dt;
        }

        // 2. Relax: Gauss-Seidel, in place — later constraints in the
        //    same pass see the corrections of earlier ones. Visit order
        //    is the graph's construction order.
        let mut max_sq = 0.0f32;
        for _ in 0..self.config.substeps {
            for c in self.graph.constraints() {
                let (a, b) = (c.a.index(), c.b.index());
                let correction = solve_distance(
                    state.position(a),
                    state.position(b),
                    state.inv_mass[a],
                    state.inv_mass[b],
                    c.rest_length,
                    self.config.stiffness,
                );
                state.add_position(a, correction);
                state.add_position(b, -correction);
                max_sq = max_sq.max(correction.length_squared());
            }
        }

        // 3. Anchored particles snap back to their pre-step positions.
        //    They participated in relaxation above, so their neighbors
        //    were corrected as if they were free.
        state.restore_anchored();

        // 4. Velocity from net positional change, damped toward
        //    convergence (relaxation is not energy-conserving)
        state.update_velocities(dt);
        state.damp_velocities(self.config.damping);

        // 5. Shading normals follow the moved surface
        state.refresh_normals(mesh);

        let stats = StepStats {
            relax_passes: self.config.substeps,
            max_correction: max_sq.sqrt(),
        };
        tracing::debug!(
            relax_passes = stats.relax_passes,
            max_correction = stats.max_correction,
            "solver step complete"
        );
        Ok(stats)
    }
}
