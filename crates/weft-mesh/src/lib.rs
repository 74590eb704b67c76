//! # weft-mesh
//!
//! Renderable triangle mesh produced from the cloth node network.
//!
//! ## Key Types
//!
//! - [`TriangleMesh`]: positions, normals, UVs and indices in contiguous
//!   SoA buffers, plus one [`SurfaceShading`] applied to every triangle.

pub mod mesh;

pub use mesh::{SurfaceShading, TriangleMesh};
