//! # weft-math
//!
//! Geometric primitives for the weft cloth simulation.
//!
//! Provides:
//! - [`Vector`]: a directed magnitude (displacement, velocity, force, acceleration)
//! - [`Point`]: a position in space
//! - [`Color`]: an RGB surface color used by mesh export
//!
//! Both `Vector` and `Point` wrap `glam::Vec3`; keeping them as separate
//! types stops a force from being added to a node location by accident.

pub mod color;
pub mod point;
pub mod vector;

pub use color::Color;
pub use point::Point;
pub use vector::Vector;

// Re-export glam for callers that need raw SIMD vectors.
pub use glam::Vec3;
