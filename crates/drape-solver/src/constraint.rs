//! Distance constraints and the pairwise correction solver.

use glam::Vec3;

use drape_mesh::GridMesh;
use drape_types::{DrapeError, DrapeResult, ParticleId};

/// Computes the corrective displacement pulling a particle pair toward
/// its rest distance.
///
/// The return value is the displacement to ADD to particle A; the caller
/// subtracts the same vector from particle B. The correction is a pure
/// positional Gauss-Seidel relaxation — it takes no timestep and is not
/// a force:
///
/// `(|b - a| - rest) * stiffness * normalize(b - a) / (w_a + w_b)`
///
/// Coincident positions return the zero vector (no direction to correct
/// along). Exactly-at-rest pairs return exactly zero.
#[inline]
pub fn solve_distance(
    pos_a: Vec3,
    pos_b: Vec3,
    inv_mass_a: f32,
    inv_mass_b: f32,
    rest_length: f32,
    stiffness: f32,
) -> Vec3 {
    if pos_a == pos_b {
        return Vec3::ZERO;
    }

    let delta = pos_b - pos_a;
    let distance = delta.length();
    let error = distance - rest_length;
    let total_inv_mass = inv_mass_a + inv_mass_b;

    error * stiffness * (delta / distance) / total_inv_mass
}

/// A single distance constraint between two particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceConstraint {
    /// First particle (receives the correction).
    pub a: ParticleId,
    /// Second particle (receives the negated correction).
    pub b: ParticleId,
    /// Rest length, measured from the initial layout at construction.
    pub rest_length: f32,
}

/// The immutable set of structural distance constraints, in relaxation
/// order.
#[derive(Debug, Clone)]
pub struct ConstraintGraph {
    constraints: Vec<DistanceConstraint>,
}

impl ConstraintGraph {
    /// Builds the graph from the mesh's structural edges, measuring each
    /// constraint's rest length from the initial particle layout.
    ///
    /// Edge validity (in-range, distinct, unique) is established here
    /// once, so the relaxation loop needs no per-pair index guards.
    pub fn from_mesh(mesh: &GridMesh) -> DrapeResult<Self> {
        let n = mesh.vertex_count();
        let mut constraints = Vec::with_capacity(mesh.edges.len());

        for &[a, b] in &mesh.edges {
            if a as usize >= n || b as usize >= n {
                return Err(DrapeError::InvalidConstraint(format!(
                    "Edge ({}, {}) references out-of-range particle",
                    a, b
                )));
            }
            if a == b {
                return Err(DrapeError::InvalidConstraint(format!(
                    "Edge ({}, {}) is self-referential",
                    a, b
                )));
            }

            let (ia, ib) = (a as usize, b as usize);
            let dx = mesh.pos_x[ib] - mesh.pos_x[ia];
            let dy = mesh.pos_y[ib] - mesh.pos_y[ia];
            let dz = mesh.pos_z[ib] - mesh.pos_z[ia];
            let rest_length = (dx * dx + dy * dy + dz * dz).sqrt();
            if rest_length <= 0.0 {
                return Err(DrapeError::InvalidConstraint(format!(
                    "Edge ({}, {}) has coincident endpoints in the initial layout",
                    a, b
                )));
            }

            constraints.push(DistanceConstraint {
                a: ParticleId(a),
                b: ParticleId(b),
                rest_length,
            });
        }

        Ok(Self { constraints })
    }

    /// Returns the constraints in relaxation order.
    #[inline]
    pub fn constraints(&self) -> &[DistanceConstraint] {
        &self.constraints
    }

    /// Returns the number of constraints.
    #[inline]
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// Returns true if the graph has no constraints.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }
}
