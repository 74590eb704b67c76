//! # weft-cloth
//!
//! Mass-spring cloth: point masses on a grid, Hookean springs between
//! them, pluggable external forces and explicit Euler integration.
//!
//! ## Key Types
//!
//! - [`ClothNodeNetwork`]: owns the node and spring arenas, drives a tick
//! - [`NetworkConfig`]: grid shape, stiffnesses, time quantum, shading
//! - [`PhysicalNode`] / [`ClothNode`]: point mass, and point mass with springs
//! - [`SpringLink`]: spring addressed by [`NodeId`](weft_types::NodeId)s
//! - [`ExternalForce`] / [`ExternalForceCollection`]: gravity, wind, drag

pub mod cloth_node;
pub mod config;
pub mod force;
pub mod generators;
pub mod network;
pub mod node;
pub mod noise;
pub mod spring;

pub use cloth_node::ClothNode;
pub use config::{FlexionSource, IntegrationScheme, NetworkConfig};
pub use force::{ExternalForce, ExternalForceCollection};
pub use generators::{GravityForce, ViscousForce, WindForce};
pub use network::{ClothNodeNetwork, StepReport};
pub use node::PhysicalNode;
pub use spring::{SpringKind, SpringLink};
