//! # weft-types
//!
//! Shared types, identifiers, error types, and physical constants
//! for the weft cloth simulation workspace.
//!
//! This crate has zero domain logic; it defines the vocabulary
//! that all other weft crates share.

pub mod constants;
pub mod error;
pub mod ids;

pub use error::{WeftError, WeftResult};
pub use ids::{NodeId, SpringId};

/// The floating-point type used throughout the simulation.
pub type Scalar = f32;
