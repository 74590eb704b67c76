//! JSON frame exporter.
//!
//! Captures topology, UVs and shading at `init`, vertex positions at each
//! frame, and writes the whole animation to one JSON file on `finalize()`.

use std::path::PathBuf;

use serde::Serialize;
use weft_mesh::{SurfaceShading, TriangleMesh};
use weft_types::{WeftError, WeftResult};

use crate::renderer::{RenderFrame, Renderer};

#[derive(Serialize)]
struct FrameData {
    tick: u64,
    positions: Vec<f32>, // Interleaved [x0,y0,z0, x1,y1,z1, ...]
}

#[derive(Serialize)]
struct AnimationData {
    vertex_count: usize,
    triangle_count: usize,
    indices: Vec<u32>,
    uvs: Vec<[f32; 2]>,
    shading: SurfaceShading,
    frames: Vec<FrameData>,
}

/// Writes submitted frames to a JSON file.
///
/// ```text
/// let mut exporter = JsonFrameExporter::new("frames.json");
/// exporter.init(&mesh)?;
/// exporter.submit_frame(&frame)?;   // once per tick
/// exporter.finalize()?;             // writes the file
/// ```
pub struct JsonFrameExporter {
    output_path: PathBuf,
    indices: Vec<u32>,
    uvs: Vec<[f32; 2]>,
    shading: SurfaceShading,
    vertex_count: usize,
    triangle_count: usize,
    frames: Vec<FrameData>,
}

impl JsonFrameExporter {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            indices: Vec::new(),
            uvs: Vec::new(),
            shading: SurfaceShading::default(),
            vertex_count: 0,
            triangle_count: 0,
            frames: Vec::new(),
        }
    }

    pub fn output_path(&self) -> &std::path::Path {
        &self.output_path
    }
}

impl Renderer for JsonFrameExporter {
    fn init(&mut self, mesh: &TriangleMesh) -> WeftResult<()> {
        mesh.validate()?;
        self.vertex_count = mesh.vertex_count();
        self.triangle_count = mesh.triangle_count();
        self.indices = mesh.indices.clone();
        self.uvs = (0..mesh.vertex_count()).map(|i| mesh.uv(i)).collect();
        self.shading = mesh.shading;
        Ok(())
    }

    fn submit_frame(&mut self, frame: &RenderFrame) -> WeftResult<()> {
        self.frames.push(FrameData {
            tick: frame.tick,
            positions: frame.interleaved(),
        });
        Ok(())
    }

    fn finalize(&mut self) -> WeftResult<()> {
        let data = AnimationData {
            vertex_count: self.vertex_count,
            triangle_count: self.triangle_count,
            indices: self.indices.clone(),
            uvs: self.uvs.clone(),
            shading: self.shading,
            frames: std::mem::take(&mut self.frames),
        };
        let json = serde_json::to_string(&data)
            .map_err(|e| WeftError::Serialization(format!("JSON serialization failed: {e}")))?;
        std::fs::write(&self.output_path, json)?;
        Ok(())
    }

    fn name(&self) -> &str {
        "json_exporter"
    }

    fn frame_count(&self) -> usize {
        self.frames.len()
    }
}
