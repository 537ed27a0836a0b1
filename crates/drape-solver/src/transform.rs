//! Rigid affine repositioning of particles.
//!
//! Transforms replace positions AND previous positions together, so a
//! rigid move is never read as motion: the next velocity reconstruction
//! sees `position == previous` for every transformed particle.

use glam::Mat4;

use drape_types::{DrapeError, DrapeResult};

use crate::state::SurfaceState;

/// Applies `matrix` to every particle.
pub fn apply_to_all(state: &mut SurfaceState, matrix: &Mat4) {
    transform_unchecked(state, 0, state.particle_count, matrix);
}

/// Applies `matrix` to the half-open particle range `[start, end)`.
///
/// Rejects an inverted or out-of-bounds range.
pub fn apply_to_range(
    state: &mut SurfaceState,
    start: usize,
    end: usize,
    matrix: &Mat4,
) -> DrapeResult<()> {
    if start > end || end > state.particle_count {
        return Err(DrapeError::InvalidStep(format!(
            "Transform range [{}, {}) out of bounds for {} particles",
            start, end, state.particle_count
        )));
    }
    transform_unchecked(state, start, end, matrix);
    Ok(())
}

fn transform_unchecked(state: &mut SurfaceState, start: usize, end: usize, matrix: &Mat4) {
    for i in start..end {
        let p = matrix.transform_point3(state.position(i));
        state.pos_x[i] = p.x;
        state.pos_y[i] = p.y;
        state.pos_z[i] = p.z;
        state.prev_x[i] = p.x;
        state.prev_y[i] = p.y;
        state.prev_z[i] = p.z;
    }
}
