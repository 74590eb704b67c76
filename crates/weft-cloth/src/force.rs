//! External force generators and their collection.
//!
//! A generator produces one force per node from the node's current state.
//! The collection owns an ordered list of generators and sums their output;
//! generators that decline to produce a force are skipped.

use weft_math::Vector;
use weft_types::{Scalar, WeftError, WeftResult};

use crate::node::PhysicalNode;

/// A source of external force on a node.
///
/// # Implementations
///
/// - [`GravityForce`](crate::generators::GravityForce)
/// - [`WindForce`](crate::generators::WindForce)
/// - [`ViscousForce`](crate::generators::ViscousForce)
pub trait ExternalForce: Send {
    /// Force on `node` for a step of length `dt`, or `None` if this
    /// generator cannot produce one.
    fn generate_force(&self, node: &PhysicalNode, dt: Scalar) -> Option<Vector>;

    /// Whether the generator may be registered in a collection.
    fn is_valid(&self) -> bool;

    /// Short identifier for logs.
    fn name(&self) -> &str;

    /// Receives the external clock before a tick. Most generators ignore it.
    fn advance_clock(&mut self, _tick: u64) {}
}

/// Ordered set of external force generators.
#[derive(Default)]
pub struct ExternalForceCollection {
    generators: Vec<Box<dyn ExternalForce>>,
}

impl ExternalForceCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a generator. Invalid generators are rejected.
    pub fn add_force(&mut self, generator: Box<dyn ExternalForce>) -> WeftResult<()> {
        if !generator.is_valid() {
            tracing::warn!(generator = generator.name(), "rejected invalid force generator");
            return Err(WeftError::InvalidForce(format!(
                "{} generator failed validation",
                generator.name()
            )));
        }
        self.generators.push(generator);
        Ok(())
    }

    /// Convenience wrapper around [`add_force`](Self::add_force).
    pub fn with<F: ExternalForce + 'static>(mut self, generator: F) -> WeftResult<Self> {
        self.add_force(Box::new(generator))?;
        Ok(self)
    }

    /// Sums every generator's force on `node`, in registration order.
    ///
    /// Returns `None` if no generator produced a force.
    pub fn evaluate(&self, node: &PhysicalNode, dt: Scalar) -> Option<Vector> {
        let mut total: Option<Vector> = None;
        for generator in &self.generators {
            if let Some(force) = generator.generate_force(node, dt) {
                *total.get_or_insert(Vector::ZERO) += force;
            }
        }
        total
    }

    /// Forwards the external clock to every generator.
    pub fn advance_clock(&mut self, tick: u64) {
        for generator in &mut self.generators {
            generator.advance_clock(tick);
        }
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Names of the registered generators, in evaluation order.
    pub fn names(&self) -> Vec<&str> {
        self.generators.iter().map(|g| g.name()).collect()
    }
}

impl std::fmt::Debug for ExternalForceCollection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExternalForceCollection")
            .field("generators", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weft_math::Point;

    struct Constant(Option<Vector>);

    impl ExternalForce for Constant {
        fn generate_force(&self, _node: &PhysicalNode, _dt: Scalar) -> Option<Vector> {
            self.0
        }
        fn is_valid(&self) -> bool {
            true
        }
        fn name(&self) -> &str {
            "constant"
        }
    }

    #[test]
    fn empty_collection_yields_none() {
        let node = PhysicalNode::new(Point::ORIGIN, 1.0, false);
        assert!(ExternalForceCollection::new().evaluate(&node, 0.01).is_none());
    }

    #[test]
    fn failing_generators_are_skipped() {
        let mut forces = ExternalForceCollection::new();
        forces.add_force(Box::new(Constant(None))).unwrap();
        forces.add_force(Box::new(Constant(Some(Vector::new(1.0, 2.0, 3.0))))).unwrap();
        forces.add_force(Box::new(Constant(None))).unwrap();
        let node = PhysicalNode::new(Point::ORIGIN, 1.0, false);
        assert_eq!(forces.evaluate(&node, 0.01), Some(Vector::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn all_failing_yields_none() {
        let mut forces = ExternalForceCollection::new();
        forces.add_force(Box::new(Constant(None))).unwrap();
        let node = PhysicalNode::new(Point::ORIGIN, 1.0, false);
        assert!(forces.evaluate(&node, 0.01).is_none());
    }
}
