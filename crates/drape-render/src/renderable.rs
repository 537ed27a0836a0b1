//! The capability trait for drawable meshes.

use glam::Mat4;

use drape_types::DrapeResult;

/// A mesh the renderer can draw.
///
/// Two narrow interfaces, implemented independently by each drawable
/// type (no shared base state):
///
/// 1. buffer exposure — an interleaved vertex buffer (see
///    [`crate::buffer`]) and a triangle index buffer;
/// 2. rigid repositioning — affine transforms over all vertices or a
///    contiguous index range.
pub trait RenderableMesh {
    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Appends all vertex records to `out` in the interleaved layout.
    /// `out` is not cleared — the caller owns the buffer lifecycle.
    fn fill_vertex_buffer(&self, out: &mut Vec<f32>);

    /// The triangle index buffer (3 indices per triangle).
    fn indices(&self) -> &[u32];

    /// Number of triangles.
    fn triangle_count(&self) -> usize {
        self.indices().len() / 3
    }

    /// Applies an affine transform to every vertex.
    fn apply_transform(&mut self, matrix: &Mat4);

    /// Applies an affine transform to the half-open vertex range
    /// `[start, end)`. Rejects out-of-bounds ranges.
    fn apply_transform_range(&mut self, start: usize, end: usize, matrix: &Mat4)
        -> DrapeResult<()>;
}
