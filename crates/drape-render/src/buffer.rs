//! Interleaved vertex-buffer layout.
//!
//! Each vertex record is 9 floats in a fixed order: position, normal,
//! velocity. The whole buffer is re-packed and re-uploaded in full every
//! frame, since the simulation step mutates every channel.

/// Floats per vertex record.
pub const FLOATS_PER_VERTEX: usize = 9;

/// Offset (in floats) of the position attribute within a record.
pub const POSITION_OFFSET: usize = 0;

/// Offset (in floats) of the normal attribute within a record.
pub const NORMAL_OFFSET: usize = 3;

/// Offset (in floats) of the velocity attribute within a record.
pub const VELOCITY_OFFSET: usize = 6;

/// Byte stride between consecutive vertex records.
pub const VERTEX_STRIDE_BYTES: usize = FLOATS_PER_VERTEX * std::mem::size_of::<f32>();

/// Appends one vertex record to an interleaved buffer.
#[inline]
pub fn push_vertex(out: &mut Vec<f32>, position: [f32; 3], normal: [f32; 3], velocity: [f32; 3]) {
    out.extend_from_slice(&position);
    out.extend_from_slice(&normal);
    out.extend_from_slice(&velocity);
}
