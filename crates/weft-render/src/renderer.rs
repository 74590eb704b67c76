//! Renderer trait and HeadlessRenderer.
//!
//! The scene runner calls a renderer once per tick with the freshly
//! exported mesh. Topology is fixed after `init`, so frames carry only
//! vertex positions.

use weft_mesh::TriangleMesh;
use weft_types::WeftResult;

/// Vertex positions of one exported mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    /// Clock tick this frame corresponds to.
    pub tick: u64,
    pub pos_x: Vec<f32>,
    pub pos_y: Vec<f32>,
    pub pos_z: Vec<f32>,
}

impl RenderFrame {
    /// Copies the position buffers of `mesh`.
    pub fn from_mesh(tick: u64, mesh: &TriangleMesh) -> Self {
        Self {
            tick,
            pos_x: mesh.pos_x.clone(),
            pos_y: mesh.pos_y.clone(),
            pos_z: mesh.pos_z.clone(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.pos_x.len()
    }

    /// Positions interleaved as `[x0, y0, z0, x1, ...]`.
    pub fn interleaved(&self) -> Vec<f32> {
        let n = self.vertex_count();
        let mut out = Vec::with_capacity(n * 3);
        for i in 0..n {
            out.extend_from_slice(&[self.pos_x[i], self.pos_y[i], self.pos_z[i]]);
        }
        out
    }
}

/// Trait for consumers of simulation output.
///
/// # Implementations
/// - [`HeadlessRenderer`]: counts frames
/// - [`JsonFrameExporter`](crate::JsonFrameExporter): writes frames to a JSON file
pub trait Renderer: Send {
    /// Receives the mesh topology and shading once, before any frame.
    fn init(&mut self, mesh: &TriangleMesh) -> WeftResult<()>;

    /// Submit a frame for rendering.
    fn submit_frame(&mut self, frame: &RenderFrame) -> WeftResult<()>;

    /// Flush buffers, write files.
    fn finalize(&mut self) -> WeftResult<()>;

    fn name(&self) -> &str;

    /// Returns the number of frames submitted.
    fn frame_count(&self) -> usize;
}

/// Discards frames. Used for runs without visual output.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    vertex_count: usize,
    frames: usize,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for HeadlessRenderer {
    fn init(&mut self, mesh: &TriangleMesh) -> WeftResult<()> {
        mesh.validate()?;
        self.vertex_count = mesh.vertex_count();
        Ok(())
    }

    fn submit_frame(&mut self, frame: &RenderFrame) -> WeftResult<()> {
        if frame.vertex_count() != self.vertex_count {
            return Err(weft_types::WeftError::InvalidMesh(format!(
                "frame has {} vertices, renderer was initialised with {}",
                frame.vertex_count(),
                self.vertex_count
            )));
        }
        self.frames += 1;
        Ok(())
    }

    fn finalize(&mut self) -> WeftResult<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "headless"
    }

    fn frame_count(&self) -> usize {
        self.frames
    }
}
