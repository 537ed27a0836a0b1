//! The grid mesh type: particle layout plus immutable topology.

use std::collections::HashSet;

use drape_types::{DrapeError, DrapeResult};

use crate::topology;

/// A regular grid of particles with triangle topology and structural
/// edges, stored in SoA layout.
///
/// `pos_{x,y,z}` hold the initial (rest) particle layout; the solver
/// copies them into its own state buffers at construction and mutates
/// those, never the mesh. Particles are indexed row-major:
/// `index = y * width + x`.
///
/// Topology (`indices`, `edges`) is built once and never changes —
/// no re-meshing, no fracture.
#[derive(Debug, Clone)]
pub struct GridMesh {
    /// Particles per row (after resolution scaling).
    pub width: usize,
    /// Number of rows (after resolution scaling).
    pub length: usize,

    /// X coordinates of the initial particle layout.
    pub pos_x: Vec<f32>,
    /// Y coordinates of the initial particle layout.
    pub pos_y: Vec<f32>,
    /// Z coordinates of the initial particle layout.
    pub pos_z: Vec<f32>,

    /// Triangle indices, flat: `[t0a, t0b, t0c, t1a, ...]`.
    pub indices: Vec<u32>,

    /// Structural edges in relaxation order.
    pub edges: Vec<[u32; 2]>,
}

impl GridMesh {
    /// Builds a grid of `width × length` cells scaled by `resolution`
    /// (both dimensions are multiplied by it).
    ///
    /// Particles are laid out with unit spacing in the XY plane,
    /// centered on the origin, matching row-major indexing: x grows
    /// leftward along a row, y grows downward across rows.
    pub fn grid(width: usize, length: usize, resolution: usize) -> DrapeResult<Self> {
        if resolution == 0 {
            return Err(DrapeError::InvalidConfig(
                "Resolution multiplier must be at least 1".into(),
            ));
        }
        let width = width * resolution;
        let length = length * resolution;
        if width < 2 || length < 2 {
            return Err(DrapeError::InvalidConfig(format!(
                "Grid must be at least 2×2 particles after scaling, got {}×{}",
                width, length
            )));
        }

        let n = width * length;
        let mut pos_x = Vec::with_capacity(n);
        let mut pos_y = Vec::with_capacity(n);
        let mut pos_z = Vec::with_capacity(n);

        let half_w = (width / 2) as f32;
        let half_l = (length / 2) as f32;
        for y in 0..length {
            for x in 0..width {
                pos_x.push(half_w - x as f32);
                pos_y.push(half_l - y as f32);
                pos_z.push(0.0);
            }
        }

        let mesh = Self {
            width,
            length,
            pos_x,
            pos_y,
            pos_z,
            indices: topology::grid_indices(width, length),
            edges: topology::structural_edges(width, length),
        };
        mesh.validate()?;
        Ok(mesh)
    }

    /// Returns the number of particles.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos_x.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns the three vertex indices of triangle `t`.
    #[inline]
    pub fn triangle(&self, t: usize) -> [u32; 3] {
        let base = t * 3;
        [self.indices[base], self.indices[base + 1], self.indices[base + 2]]
    }

    /// Returns the flat particle index at grid coordinate `(x, y)`.
    #[inline]
    pub fn index_at(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Validates mesh integrity.
    ///
    /// Checks:
    /// - SoA arrays match `width * length`
    /// - Triangle indices are in range, no degenerate triangles
    /// - Edges are in range, endpoints distinct, no duplicates
    pub fn validate(&self) -> DrapeResult<()> {
        let n = self.width * self.length;

        if self.pos_x.len() != n || self.pos_y.len() != n || self.pos_z.len() != n {
            return Err(DrapeError::InvalidMesh(
                "Position arrays do not match grid dimensions".into(),
            ));
        }

        if self.indices.len() % 3 != 0 {
            return Err(DrapeError::InvalidMesh(
                "Index count is not divisible by 3".into(),
            ));
        }

        for (i, &idx) in self.indices.iter().enumerate() {
            if idx as usize >= n {
                return Err(DrapeError::InvalidMesh(format!(
                    "Index {} at position {} is out of range (particle count: {})",
                    idx, i, n
                )));
            }
        }

        for t in 0..self.triangle_count() {
            let [a, b, c] = self.triangle(t);
            if a == b || b == c || a == c {
                return Err(DrapeError::InvalidMesh(format!(
                    "Triangle {} has repeated vertex indices: [{}, {}, {}]",
                    t, a, b, c
                )));
            }
        }

        let mut seen = HashSet::with_capacity(self.edges.len());
        for (i, &[a, b]) in self.edges.iter().enumerate() {
            if a as usize >= n || b as usize >= n {
                return Err(DrapeError::InvalidMesh(format!(
                    "Edge {} references out-of-range particle ({}, {})",
                    i, a, b
                )));
            }
            if a == b {
                return Err(DrapeError::InvalidMesh(format!(
                    "Edge {} is self-referential (particle {})",
                    i, a
                )));
            }
            let key = if a < b { (a, b) } else { (b, a) };
            if !seen.insert(key) {
                return Err(DrapeError::InvalidMesh(format!(
                    "Duplicate edge ({}, {})",
                    a, b
                )));
            }
        }

        Ok(())
    }
}
