//! State snapshot serialization.
//!
//! Snapshots capture particle positions and velocities at a point in
//! time, serialized with `bincode` for compact binary output. The CLI
//! `inspect` command reads them back for offline diagnosis.

use serde::{Deserialize, Serialize};

use drape_solver::SurfaceState;
use drape_types::{DrapeError, DrapeResult};

/// A captured simulation state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Timestep index when this snapshot was taken.
    pub timestep: u32,
    /// Simulation time at capture.
    pub sim_time: f64,
    /// Number of particles.
    pub particle_count: usize,
    /// Particle positions, flat: `[x0, y0, z0, x1, y1, z1, ...]`.
    pub positions: Vec<f32>,
    /// Particle velocities, flat: `[vx0, vy0, vz0, ...]`.
    pub velocities: Vec<f32>,
}

impl StateSnapshot {
    /// Captures the current surface state.
    pub fn from_state(timestep: u32, sim_time: f64, state: &SurfaceState) -> Self {
        let n = state.particle_count;
        let mut positions = Vec::with_capacity(n * 3);
        let mut velocities = Vec::with_capacity(n * 3);

        for i in 0..n {
            positions.push(state.pos_x[i]);
            positions.push(state.pos_y[i]);
            positions.push(state.pos_z[i]);
            velocities.push(state.vel_x[i]);
            velocities.push(state.vel_y[i]);
            velocities.push(state.vel_z[i]);
        }

        Self {
            timestep,
            sim_time,
            particle_count: n,
            positions,
            velocities,
        }
    }

    /// Point query: position of particle `i`, if in range.
    pub fn position_of(&self, i: usize) -> Option<[f32; 3]> {
        if i >= self.particle_count {
            return None;
        }
        Some([
            self.positions[i * 3],
            self.positions[i * 3 + 1],
            self.positions[i * 3 + 2],
        ])
    }

    /// Point query: velocity of particle `i`, if in range.
    pub fn velocity_of(&self, i: usize) -> Option<[f32; 3]> {
        if i >= self.particle_count {
            return None;
        }
        Some([
            self.velocities[i * 3],
            self.velocities[i * 3 + 1],
            self.velocities[i * 3 + 2],
        ])
    }

    /// Minimum and maximum Y coordinate across all particles.
    pub fn y_range(&self) -> Option<(f32, f32)> {
        if self.particle_count == 0 {
            return None;
        }
        let mut min_y = f32::INFINITY;
        let mut max_y = f32::NEG_INFINITY;
        for i in 0..self.particle_count {
            let y = self.positions[i * 3 + 1];
            min_y = min_y.min(y);
            max_y = max_y.max(y);
        }
        Some((min_y, max_y))
    }

    /// Serializes to compact binary format.
    pub fn to_bytes(&self) -> DrapeResult<Vec<u8>> {
        bincode::serialize(self).map_err(|e| DrapeError::Serialization(e.to_string()))
    }

    /// Deserializes from binary format.
    pub fn from_bytes(data: &[u8]) -> DrapeResult<Self> {
        bincode::deserialize(data).map_err(|e| DrapeError::Serialization(e.to_string()))
    }
}
