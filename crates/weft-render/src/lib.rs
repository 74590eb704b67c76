//! # weft-render
//!
//! Consumers of exported cloth meshes.
//!
//! Provides a `Renderer` trait with a `HeadlessRenderer` that only counts
//! frames and a `JsonFrameExporter` that writes the whole animation as JSON.

pub mod json_exporter;
pub mod renderer;

pub use json_exporter::JsonFrameExporter;
pub use renderer::{HeadlessRenderer, RenderFrame, Renderer};
