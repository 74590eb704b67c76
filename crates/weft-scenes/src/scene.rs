//! A built scene: a cloth network plus the forces acting on it.

use weft_cloth::{
    ClothNodeNetwork, ExternalForceCollection, GravityForce, StepReport, ViscousForce, WindForce,
};
use weft_math::Vector;
use weft_mesh::TriangleMesh;
use weft_types::WeftResult;

use crate::presets::{SceneConfig, ScenePreset};

/// Cloth network with its external forces (gravity, wind, viscous, in that order).
#[derive(Debug)]
pub struct Scene {
    name: String,
    network: ClothNodeNetwork,
    forces: ExternalForceCollection,
}

impl Scene {
    /// Validates `config`, builds the network, anchors it and registers the forces.
    pub fn build(config: &SceneConfig) -> WeftResult<Self> {
        config.validate()?;

        let mut network = ClothNodeNetwork::build(&config.network)?;
        for (column, row) in config.anchors.cells(network.columns(), network.rows()) {
            network.set_anchor_node(column, row, true)?;
        }

        let f = &config.forces;
        let mut forces = ExternalForceCollection::new();
        forces.add_force(Box::new(GravityForce::new(
            f.gravity,
            Vector::from(f.gravity_direction),
        )))?;
        forces.add_force(Box::new(WindForce::new(
            Vector::from(f.wind_direction),
            f.wind_magnitude,
        )))?;
        forces.add_force(Box::new(ViscousForce::new(f.viscous_coefficient)))?;

        tracing::info!(
            scene = %config.name,
            nodes = network.node_count(),
            springs = network.spring_count(),
            forces = ?forces.names(),
            "scene built"
        );

        Ok(Self {
            name: config.name.clone(),
            network,
            forces,
        })
    }

    pub fn from_preset(preset: ScenePreset) -> WeftResult<Self> {
        Self::build(&preset.config())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn network(&self) -> &ClothNodeNetwork {
        &self.network
    }

    /// Mutable access for the post-build setters (anchors, time quantum, shading).
    pub fn network_mut(&mut self) -> &mut ClothNodeNetwork {
        &mut self.network
    }

    pub fn forces(&self) -> &ExternalForceCollection {
        &self.forces
    }

    /// Feeds `clock_tick` to the clock-driven generators, then runs one network tick.
    pub fn step(&mut self, clock_tick: u64) -> WeftResult<StepReport> {
        self.forces.advance_clock(clock_tick);
        self.network.evaluate_forces(&self.forces)
    }

    /// Current cloth surface.
    pub fn mesh(&self) -> WeftResult<TriangleMesh> {
        self.network.generate_mesh()
    }
}
