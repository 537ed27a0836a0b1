//! Vertex normal computation from triangle geometry.
//!
//! Computes area-weighted smooth normals by accumulating unnormalized
//! face normals at each vertex, then normalizing.

use drape_types::constants::NORMAL_EPSILON;

/// Recompute smooth vertex normals from current particle positions.
///
/// For each face `(a, b, c)` the face normal is
/// `cross(pos[a] - pos[b], pos[c] - pos[b])` — unnormalized, so larger
/// triangles contribute proportionally more. Accumulators are zeroed at
/// the start of the pass and normalized at the end, which makes the
/// pass idempotent for unchanged positions.
///
/// A vertex whose accumulator stays below epsilon (no incident face,
/// or exactly cancelling faces) keeps a zero normal instead of
/// producing NaN. Grid topology never produces such a vertex.
pub fn compute_vertex_normals(
    indices: &[u32],
    pos_x: &[f32],
    pos_y: &[f32],
    pos_z: &[f32],
    normal_x: &mut [f32],
    normal_y: &mut [f32],
    normal_z: &mut [f32],
) {
    let n = pos_x.len();

    for i in 0..n {
        normal_x[i] = 0.0;
        normal_y[i] = 0.0;
        normal_z[i] = 0.0;
    }

    for tri in indices.chunks_exact(3) {
        let a = tri[0] as usize;
        let b = tri[1] as usize;
        let c = tri[2] as usize;

        // Edges around vertex b
        let e1x = pos_x[a] - pos_x[b];
        let e1y = pos_y[a] - pos_y[b];
        let e1z = pos_z[a] - pos_z[b];

        let e2x = pos_x[c] - pos_x[b];
        let e2y = pos_y[c] - pos_y[b];
        let e2z = pos_z[c] - pos_z[b];

        // Cross product, magnitude = 2 × triangle area
        let nx = e1y * e2z - e1z * e2y;
        let ny = e1z * e2x - e1x * e2z;
        let nz = e1x * e2y - e1y * e2x;

        normal_x[a] += nx;
        normal_y[a] += ny;
        normal_z[a] += nz;

        normal_x[b] += nx;
        normal_y[b] += ny;
        normal_z[b] += nz;

        normal_x[c] += nx;
        normal_y[c] += ny;
        normal_z[c] += nz;
    }

    for i in 0..n {
        let x = normal_x[i];
        let y = normal_y[i];
        let z = normal_z[i];
        let len = (x * x + y * y + z * z).sqrt();
        if len > NORMAL_EPSILON {
            let inv = 1.0 / len;
            normal_x[i] = x * inv;
            normal_y[i] = y * inv;
            normal_z[i] = z * inv;
        }
    }
}
