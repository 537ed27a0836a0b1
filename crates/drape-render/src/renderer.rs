//! Renderer trait and the headless stub.
//!
//! The renderer is called once per frame to present the current surface
//! state. The headless renderer discards all frames, serving as a no-op
//! sink for benchmarks and CI.

use drape_types::DrapeResult;

use crate::renderable::RenderableMesh;

/// A single captured render frame.
pub struct RenderFrame {
    /// Timestep this frame corresponds to.
    pub timestep: u32,
    /// Interleaved vertex records (see [`crate::buffer`]).
    pub vertices: Vec<f32>,
}

impl RenderFrame {
    /// Captures the current state of a drawable mesh.
    pub fn capture(timestep: u32, mesh: &dyn RenderableMesh) -> Self {
        let mut vertices =
            Vec::with_capacity(mesh.vertex_count() * crate::buffer::FLOATS_PER_VERTEX);
        mesh.fill_vertex_buffer(&mut vertices);
        Self { timestep, vertices }
    }
}

/// Trait for per-frame rendering sinks.
pub trait Renderer {
    /// Initialize with the mesh topology (index buffer, counts).
    fn init(&mut self, mesh: &dyn RenderableMesh) -> DrapeResult<()>;

    /// Submit a frame.
    fn submit_frame(&mut self, frame: &RenderFrame) -> DrapeResult<()>;

    /// Finalize (flush buffers, close files).
    fn finalize(&mut self) -> DrapeResult<()>;

    /// Returns the renderer name.
    fn name(&self) -> &str;

    /// Returns the number of frames submitted.
    fn frame_count(&self) -> u32;
}

/// Headless renderer — discards all frames.
#[derive(Default)]
pub struct HeadlessRenderer {
    frames: u32,
}

impl HeadlessRenderer {
    /// Creates a new headless renderer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for HeadlessRenderer {
    fn init(&mut self, _mesh: &dyn RenderableMesh) -> DrapeResult<()> {
        Ok(())
    }

    fn submit_frame(&mut self, _frame: &RenderFrame) -> DrapeResult<()> {
        self.frames += 1;
        Ok(())
    }

    fn finalize(&mut self) -> DrapeResult<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "headless"
    }

    fn frame_count(&self) -> u32 {
        self.frames
    }
}
