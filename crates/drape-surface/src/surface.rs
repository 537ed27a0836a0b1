//! The simulated cloth surface.

use glam::{Mat4, Vec3};

use drape_mesh::GridMesh;
use drape_render::{buffer, RenderableMesh};
use drape_solver::{ConstraintGraph, PbdSolver, SolverConfig, StepStats, SurfaceState};
use drape_types::{DrapeError, DrapeResult};

/// A deformable grid surface driven by position-based dynamics.
///
/// Owns the mesh topology, the particle state, and the solver. The
/// first particle row is anchored at construction: it participates in
/// relaxation but is restored to its pre-step position at the end of
/// every step, so the surface hangs from that row. Rigid transforms
/// applied between steps (e.g. to the anchored row) move the cloth
/// without injecting velocity.
pub struct SimulatedSurface {
    mesh: GridMesh,
    state: SurfaceState,
    solver: PbdSolver,
}

impl SimulatedSurface {
    /// Builds a `width × length` surface scaled by `resolution`, with a
    /// uniform particle mass, using the default solver configuration.
    pub fn new(
        width: usize,
        length: usize,
        resolution: usize,
        particle_mass: f32,
    ) -> DrapeResult<Self> {
        Self::with_config(width, length, resolution, particle_mass, SolverConfig::default())
    }

    /// Builds a surface with an explicit solver configuration.
    pub fn with_config(
        width: usize,
        length: usize,
        resolution: usize,
        particle_mass: f32,
        config: SolverConfig,
    ) -> DrapeResult<Self> {
        let mesh = GridMesh::grid(width, length, resolution)?;

        let mut anchored = vec![false; mesh.vertex_count()];
        for flag in anchored.iter_mut().take(mesh.width) {
            *flag = true;
        }

        let mut state = SurfaceState::from_mesh(&mesh, particle_mass, anchored)?;
        state.refresh_normals(&mesh);

        let graph = ConstraintGraph::from_mesh(&mesh)?;
        let solver = PbdSolver::with_config(graph, config)?;

        Ok(Self { mesh, state, solver })
    }

    /// Advances the surface by one timestep under acceleration `f`.
    pub fn step(&mut self, dt: f32, f: Vec3) -> DrapeResult<StepStats> {
        self.solver.step(&mut self.state, &self.mesh, dt, f)
    }

    /// Particles per row.
    pub fn width(&self) -> usize {
        self.mesh.width
    }

    /// Number of rows.
    pub fn length(&self) -> usize {
        self.mesh.length
    }

    /// The mesh topology.
    pub fn mesh(&self) -> &GridMesh {
        &self.mesh
    }

    /// The particle state.
    pub fn state(&self) -> &SurfaceState {
        &self.state
    }

    /// The solver (configuration and constraint graph).
    pub fn solver(&self) -> &PbdSolver {
        &self.solver
    }

    /// Raw position of the reference particle (index 0), for
    /// diagnostic inspection.
    pub fn reference_position(&self) -> Vec3 {
        self.state.position(0)
    }

    /// Overwrites the velocity of one particle, for diagnostics and
    /// solver experiments.
    pub fn set_velocity(&mut self, index: usize, velocity: Vec3) -> DrapeResult<()> {
        if index >= self.state.particle_count {
            return Err(DrapeError::InvalidStep(format!(
                "Particle index {} out of range ({} particles)",
                index, self.state.particle_count
            )));
        }
        self.state.vel_x[index] = velocity.x;
        self.state.vel_y[index] = velocity.y;
        self.state.vel_z[index] = velocity.z;
        Ok(())
    }
}

impl RenderableMesh for SimulatedSurface {
    fn vertex_count(&self) -> usize {
        self.state.particle_count
    }

    fn fill_vertex_buffer(&self, out: &mut Vec<f32>) {
        let s = &self.state;
        for i in 0..s.particle_count {
            buffer::push_vertex(
                out,
                [s.pos_x[i], s.pos_y[i], s.pos_z[i]],
                [s.normal_x[i], s.normal_y[i], s.normal_z[i]],
                [s.vel_x[i], s.vel_y[i], s.vel_z[i]],
            );
        }
    }

    fn indices(&self) -> &[u32] {
        &self.mesh.indices
    }

    fn apply_transform(&mut self, matrix: &Mat4) {
        drape_solver::transform::apply_to_all(&mut self.state, matrix);
    }

    fn apply_transform_range(
        &mut self,
        start: usize,
        end: usize,
        matrix: &Mat4,
    ) -> DrapeResult<()> {
        drape_solver::transform::apply_to_range(&mut self.state, start, end, matrix)
    }
}
