//! A rigid reference plane.

use glam::{Mat4, Vec3};

use drape_mesh::normals;
use drape_render::{buffer, RenderableMesh};
use drape_types::{DrapeError, DrapeResult};

/// Triangle indices of the unit quad.
const QUAD_INDICES: [u32; 6] = [0, 1, 2, 1, 3, 2];

/// A static unit quad — typically the ground or a debug reference.
///
/// No physics: positions only move through rigid transforms, velocity
/// is always zero, and normals are recomputed after each transform.
pub struct StaticPlane {
    pos_x: Vec<f32>,
    pos_y: Vec<f32>,
    pos_z: Vec<f32>,
    normal_x: Vec<f32>,
    normal_y: Vec<f32>,
    normal_z: Vec<f32>,
    indices: Vec<u32>,
}

impl StaticPlane {
    /// Creates a unit quad in the XZ plane centered at `origin`.
    pub fn new(origin: Vec3) -> Self {
        let corners = [
            origin + Vec3::new(-0.5, 0.0, -0.5),
            origin + Vec3::new(0.5, 0.0, -0.5),
            origin + Vec3::new(-0.5, 0.0, 0.5),
            origin + Vec3::new(0.5, 0.0, 0.5),
        ];

        let mut plane = Self {
            pos_x: corners.iter().map(|c| c.x).collect(),
            pos_y: corners.iter().map(|c| c.y).collect(),
            pos_z: corners.iter().map(|c| c.z).collect(),
            normal_x: vec![0.0; 4],
            normal_y: vec![0.0; 4],
            normal_z: vec![0.0; 4],
            indices: QUAD_INDICES.to_vec(),
        };
        plane.refresh_normals();
        plane
    }

    /// The centroid of the quad.
    pub fn center(&self) -> Vec3 {
        let mut sum = Vec3::ZERO;
        for i in 0..4 {
            sum += Vec3::new(self.pos_x[i], self.pos_y[i], self.pos_z[i]);
        }
        sum / 4.0
    }

    fn refresh_normals(&mut self) {
        normals::compute_vertex_normals(
            &self.indices,
            &self.pos_x,
            &self.pos_y,
            &self.pos_z,
            &mut self.normal_x,
            &mut self.normal_y,
            &mut self.normal_z,
        );
    }

    fn transform_range(&mut self, start: usize, end: usize, matrix: &Mat4) {
        for i in start..end {
            let p = matrix
                .transform_point3(Vec3::new(self.pos_x[i], self.pos_y[i], self.pos_z[i]));
            self.pos_x[i] = p.x;
            self.pos_y[i] = p.y;
            self.pos_z[i] = p.z;
        }
        self.refresh_normals();
    }
}

impl RenderableMesh for StaticPlane {
    fn vertex_count(&self) -> usize {
        4
    }

    fn fill_vertex_buffer(&self, out: &mut Vec<f32>) {
        for i in 0..4 {
            buffer::push_vertex(
                out,
                [self.pos_x[i], self.pos_y[i], self.pos_z[i]],
                [self.normal_x[i], self.normal_y[i], self.normal_z[i]],
                [0.0, 0.0, 0.0],
            );
        }
    }

    fn indices(&self) -> &[u32] {
        &self.indices
    }

    fn apply_transform(&mut self, matrix: &Mat4) {
        self.transform_range(0, 4, matrix);
    }

    fn apply_transform_range(
        &mut self,
        start: usize,
        end: usize,
        matrix: &Mat4,
    ) -> DrapeResult<()> {
        if start > end || end > 4 {
            return Err(DrapeError::InvalidStep(format!(
                "Transform range [{}, {}) out of bounds for 4 vertices",
                start, end
            )));
        }
        self.transform_range(start, end, matrix);
        Ok(())
    }
}
