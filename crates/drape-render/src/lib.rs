//! # drape-render
//!
//! The rendering boundary of the drape engine.
//!
//! Rasterization itself is an external collaborator; this crate defines
//! what it consumes:
//!
//! - [`buffer`] — the interleaved vertex-record layout (position,
//!   normal, velocity) and packing helpers
//! - [`RenderableMesh`] — the capability trait a drawable type
//!   implements: buffer exposure plus rigid transform application
//! - [`Renderer`] — per-frame sink trait, with [`HeadlessRenderer`]
//!   for benchmarks/CI and [`JsonFrameExporter`] for offline viewers

pub mod buffer;
pub mod json_exporter;
pub mod renderable;
pub mod renderer;

pub use json_exporter::JsonFrameExporter;
pub use renderable::RenderableMesh;
pub use renderer::{HeadlessRenderer, RenderFrame, Renderer};
