//! JSON frame exporter — writes per-frame vertex data for offline
//! inspection.
//!
//! Implements the [`Renderer`] trait. Captures interleaved vertex
//! buffers at each submitted frame, then serializes the entire animation
//! to a JSON file on `finalize()`.

use serde::Serialize;

use drape_types::{DrapeError, DrapeResult};

use crate::buffer::FLOATS_PER_VERTEX;
use crate::renderable::RenderableMesh;
use crate::renderer::{RenderFrame, Renderer};

/// A single exported frame.
#[derive(Serialize)]
struct FrameData {
    timestep: u32,
    /// Interleaved records: position, normal, velocity per vertex.
    vertices: Vec<f32>,
}

/// Complete animation for JSON export.
#[derive(Serialize)]
struct AnimationData {
    vertex_count: usize,
    triangle_count: usize,
    floats_per_vertex: usize,
    indices: Vec<u32>,
    frames: Vec<FrameData>,
}

/// Exports submitted frames to a JSON file.
pub struct JsonFrameExporter {
    output_path: String,
    vertex_count: usize,
    indices: Vec<u32>,
    frames: Vec<FrameData>,
    submitted: u32,
}

impl JsonFrameExporter {
    /// Creates an exporter that will write to `output_path`.
    pub fn new(output_path: &str) -> Self {
        Self {
            output_path: output_path.to_string(),
            vertex_count: 0,
            indices: Vec::new(),
            frames: Vec::new(),
            submitted: 0,
        }
    }
}

impl Renderer for JsonFrameExporter {
    fn init(&mut self, mesh: &dyn RenderableMesh) -> DrapeResult<()> {
        self.vertex_count = mesh.vertex_count();
        self.indices = mesh.indices().to_vec();
        Ok(())
    }

    fn submit_frame(&mut self, frame: &RenderFrame) -> DrapeResult<()> {
        self.frames.push(FrameData {
            timestep: frame.timestep,
            vertices: frame.vertices.clone(),
        });
        self.submitted += 1;
        Ok(())
    }

    fn finalize(&mut self) -> DrapeResult<()> {
        let animation = AnimationData {
            vertex_count: self.vertex_count,
            triangle_count: self.indices.len() / 3,
            floats_per_vertex: FLOATS_PER_VERTEX,
            indices: std::mem::take(&mut self.indices),
            frames: std::mem::take(&mut self.frames),
        };
        let json = serde_json::to_string(&animation)
            .map_err(|e| DrapeError::Serialization(e.to_string()))?;
        std::fs::write(&self.output_path, json)?;
        Ok(())
    }

    fn name(&self) -> &str {
        "json_exporter"
    }

    fn frame_count(&self) -> u32 {
        self.submitted
    }
}
