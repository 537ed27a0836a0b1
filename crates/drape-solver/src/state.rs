//! Surface state — SoA buffers for all per-particle data.
//!
//! This is the primary mutable data structure during simulation.
//! The solver reads and writes these buffers each timestep; the
//! transform applicator mutates positions between steps.

use glam::Vec3;

use drape_mesh::{normals, GridMesh};
use drape_types::{DrapeError, DrapeResult};

/// SoA per-particle simulation buffers.
///
/// All arrays have length `particle_count`. Separate from the mesh
/// topology, which is immutable after construction.
///
/// Anchored particles keep their finite mass and participate in
/// constraint relaxation like any other particle; the solver restores
/// their previous position after relaxation. This is deliberately NOT
/// the infinite-mass pinning convention — an infinite-mass particle
/// would absorb no correction and its neighbors would take the full
/// share, changing the drape of the rows next to the anchor.
pub struct SurfaceState {
    /// Number of particles.
    pub particle_count: usize,

    // ─── Position (current) ───
    pub pos_x: Vec<f32>,
    pub pos_y: Vec<f32>,
    pub pos_z: Vec<f32>,

    // ─── Previous position (pre-step snapshot) ───
    pub prev_x: Vec<f32>,
    pub prev_y: Vec<f32>,
    pub prev_z: Vec<f32>,

    // ─── Velocity ───
    pub vel_x: Vec<f32>,
    pub vel_y: Vec<f32>,
    pub vel_z: Vec<f32>,

    // ─── Smooth shading normal ───
    pub normal_x: Vec<f32>,
    pub normal_y: Vec<f32>,
    pub normal_z: Vec<f32>,

    // ─── Mass (strictly positive; inverse cached) ───
    pub mass: Vec<f32>,
    pub inv_mass: Vec<f32>,

    /// Anchored particles are restored to their previous position at
    /// the end of every step.
    pub anchored: Vec<bool>,
}

impl SurfaceState {
    /// Initialize state from a mesh, a uniform particle mass, and
    /// per-particle anchoring flags.
    ///
    /// Positions are copied from the mesh layout; velocities start at
    /// zero. Rejects non-positive or non-finite mass and a flag array
    /// that does not match the particle count.
    pub fn from_mesh(
        mesh: &GridMesh,
        particle_mass: f32,
        anchored: Vec<bool>,
    ) -> DrapeResult<Self> {
        let n = mesh.vertex_count();

        if !(particle_mass.is_finite() && particle_mass > 0.0) {
            return Err(DrapeError::InvalidConfig(format!(
                "Particle mass must be positive and finite, got {}",
                particle_mass
            )));
        }
        if anchored.len() != n {
            return Err(DrapeError::InvalidMesh(format!(
                "Anchored array length ({}) != particle count ({})",
                anchored.len(),
                n
            )));
        }

        Ok(Self {
            particle_count: n,
            pos_x: mesh.pos_x.clone(),
            pos_y: mesh.pos_y.clone(),
            pos_z: mesh.pos_z.clone(),
            prev_x: mesh.pos_x.clone(),
            prev_y: mesh.pos_y.clone(),
            prev_z: mesh.pos_z.clone(),
            vel_x: vec![0.0; n],
            vel_y: vec![0.0; n],
            vel_z: vec![0.0; n],
            normal_x: vec![0.0; n],
            normal_y: vec![0.0; n],
            normal_z: vec![0.0; n],
            mass: vec![particle_mass; n],
            inv_mass: vec![1.0 / particle_mass; n],
            anchored,
        })
    }

    /// Returns the position of particle `i`.
    #[inline]
    pub fn position(&self, i: usize) -> Vec3 {
        Vec3::new(self.pos_x[i], self.pos_y[i], self.pos_z[i])
    }

    /// Returns the velocity of particle `i`.
    #[inline]
    pub fn velocity(&self, i: usize) -> Vec3 {
        Vec3::new(self.vel_x[i], self.vel_y[i], self.vel_z[i])
    }

    /// Returns the normal of particle `i`.
    #[inline]
    pub fn normal(&self, i: usize) -> Vec3 {
        Vec3::new(self.normal_x[i], self.normal_y[i], self.normal_z[i])
    }

    /// Sets the position of particle `i`.
    #[inline]
    pub fn set_position(&mut self, i: usize, p: Vec3) {
        self.pos_x[i] = p.x;
        self.pos_y[i] = p.y;
        self.pos_z[i] = p.z;
    }

    /// Displaces particle `i` by `dp`.
    #[inline]
    pub fn add_position(&mut self, i: usize, dp: Vec3) {
        self.pos_x[i] += dp.x;
        self.pos_y[i] += dp.y;
        self.pos_z[i] += dp.z;
    }

    /// Save current positions as "previous" for this step.
    pub fn save_previous(&mut self) {
        self.prev_x.copy_from_slice(&self.pos_x);
        self.prev_y.copy_from_slice(&self.pos_y);
        self.prev_z.copy_from_slice(&self.pos_z);
    }

    /// Restore every anchored particle to its previous position.
    pub fn restore_anchored(&mut self) {
        for i in 0..self.particle_count {
            if self.anchored[i] {
                self.pos_x[i] = self.prev_x[i];
                self.pos_y[i] = self.prev_y[i];
                self.pos_z[i] = self.prev_z[i];
            }
        }
    }

    /// Reconstruct velocities from position change:
    /// `v = (p - p_prev) / dt`.
    pub fn update_velocities(&mut self, dt: f32) {
        let inv_dt = 1.0 / dt;
        for i in 0..self.particle_count {
            self.vel_x[i] = (self.pos_x[i] - self.prev_x[i]) * inv_dt;
            self.vel_y[i] = (self.pos_y[i] - self.prev_y[i]) * inv_dt;
            self.vel_z[i] = (self.pos_z[i] - self.prev_z[i]) * inv_dt;
        }
    }

    /// Multiply every velocity by `factor`.
    pub fn damp_velocities(&mut self, factor: f32) {
        for i in 0..self.particle_count {
            self.vel_x[i] *= factor;
            self.vel_y[i] *= factor;
            self.vel_z[i] *= factor;
        }
    }

    /// Recompute smooth shading normals from current positions and the
    /// mesh's faces.
    pub fn refresh_normals(&mut self, mesh: &GridMesh) {
        normals::compute_vertex_normals(
            &mesh.indices,
            &self.pos_x,
            &self.pos_y,
            &self.pos_z,
            &mut self.normal_x,
            &mut self.normal_y,
            &mut self.normal_z,
        );
    }

    /// Total kinetic energy: `0.5 * Σ m_i * ||v_i||²`.
    pub fn kinetic_energy(&self) -> f64 {
        let mut energy = 0.0f64;
        for i in 0..self.particle_count {
            let vx = self.vel_x[i] as f64;
            let vy = self.vel_y[i] as f64;
            let vz = self.vel_z[i] as f64;
            energy += 0.5 * self.mass[i] as f64 * (vx * vx + vy * vy + vz * vz);
        }
        energy
    }
}
