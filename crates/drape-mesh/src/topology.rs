//! Grid topology derivation.
//!
//! Builds the triangle index buffer and the structural edge list from
//! grid dimensions. Both are derived once at mesh construction and are
//! immutable afterwards.

/// Triangle index buffer for a `width × length` particle grid.
///
/// Two triangles per interior quad cell. For the cell whose bottom-right
/// particle is `i = y*width + x` (with `x, y >= 1`), the triangles are
/// `(i-width-1, i-width, i-1)` and `(i-1, i-width, i)`.
pub fn grid_indices(width: usize, length: usize) -> Vec<u32> {
    let w = width as u32;
    let mut indices =
        Vec::with_capacity(width.saturating_sub(1) * length.saturating_sub(1) * 6);

    for y in 1..length {
        for x in 1..width {
            let i = (y * width + x) as u32;
            indices.extend_from_slice(&[i - w - 1, i - w, i - 1]);
            indices.extend_from_slice(&[i - 1, i - w, i]);
        }
    }

    indices
}

/// Structural constraint edges for a `width × length` particle grid.
///
/// One edge per horizontal neighbor pair (skipped on the right boundary)
/// and one per vertical neighbor pair (skipped on the bottom boundary),
/// emitted row-major, horizontal before vertical per cell. The emission
/// order is the relaxation order: the Gauss-Seidel solver visits edges
/// in exactly this sequence, so it is part of the observable behavior.
pub fn structural_edges(width: usize, length: usize) -> Vec<[u32; 2]> {
    let w = width as u32;
    let mut edges =
        Vec::with_capacity((2 * width * length).saturating_sub(width + length));

    for y in 0..length {
        for x in 0..width {
            let i = (y * width + x) as u32;
            if x + 1 < width {
                edges.push([i, i + 1]);
            }
            if y + 1 < length {
                edges.push([i, i + w]);
            }
        }
    }

    edges
}
