//! Point mass with explicit integration.
//!
//! Anchors are enforced at the mutation boundary: forces are still
//! accumulated for anchored nodes, but [`PhysicalNode::set_position`] and
//! [`PhysicalNode::set_velocity`] refuse to change them.

use serde::{Deserialize, Serialize};
use weft_math::{Point, Vector};
use weft_types::Scalar;

use crate::config::IntegrationScheme;

/// A point mass with position, velocity and a pending force.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicalNode {
    position: Point,
    velocity: Vector,
    mass: Scalar,
    pending_force: Vector,
    anchor: bool,
}

impl PhysicalNode {
    /// Creates a node at rest.
    pub fn new(position: Point, mass: Scalar, anchor: bool) -> Self {
        Self {
            position,
            velocity: Vector::ZERO,
            mass,
            pending_force: Vector::ZERO,
            anchor,
        }
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> Vector {
        self.velocity
    }

    #[inline]
    pub fn mass(&self) -> Scalar {
        self.mass
    }

    /// Force accumulated for the current tick.
    #[inline]
    pub fn pending_force(&self) -> Vector {
        self.pending_force
    }

    #[inline]
    pub fn is_anchor(&self) -> bool {
        self.anchor
    }

    /// A node needs positive mass to be integrated.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.mass > 0.0
    }

    /// Overwrites the pending force.
    pub fn set_force(&mut self, force: Vector) {
        self.pending_force = force;
    }

    /// Adds to the pending force.
    pub fn add_force(&mut self, force: Vector) {
        self.pending_force += force;
    }

    /// Moves the node. Silently ignored for anchors and invalid nodes.
    pub fn set_position(&mut self, position: Point) {
        if self.is_movable() {
            self.position = position;
        }
    }

    /// Sets the velocity. Silently ignored for anchors and invalid nodes.
    pub fn set_velocity(&mut self, velocity: Vector) {
        if self.is_movable() {
            self.velocity = velocity;
        }
    }

    /// Toggles the anchor flag. Existing velocity is kept.
    pub fn set_anchor(&mut self, anchor: bool) {
        self.anchor = anchor;
    }

    #[inline]
    fn is_movable(&self) -> bool {
        self.is_valid() && !self.anchor
    }

    /// Integrates the pending force over `dt` and clears it.
    ///
    /// With `a = F / m`:
    ///
    /// ```text
    /// Δx = v·dt + c·a·dt²     (c = 1 for Legacy, ½ for Kinematic)
    /// Δv = a·dt
    /// ```
    ///
    /// Does nothing when `dt <= 0` or the pending force is exactly zero.
    /// Returns `true` if the node actually moved.
    pub fn apply_force(&mut self, dt: Scalar, scheme: IntegrationScheme) -> bool {
        if !(dt > 0.0) || !(self.pending_force.magnitude() > 0.0) {
            return false;
        }

        let acceleration = self.pending_force / self.mass;
        let delta_velocity = acceleration * dt;
        let displacement =
            self.velocity * dt + acceleration * (scheme.acceleration_factor() * dt * dt);

        let moved = self.is_movable();
        self.set_position(self.position + displacement);
        self.set_velocity(self.velocity + delta_velocity);
        self.pending_force = Vector::ZERO;
        moved
    }

    /// Kinetic energy `½·m·|v|²`.
    pub fn kinetic_energy(&self) -> Scalar {
        let speed = self.velocity.magnitude();
        0.5 * self.mass * speed * speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_step_uses_full_dt_squared() {
        let mut node = PhysicalNode::new(Point::ORIGIN, 2.0, false);
        node.set_force(Vector::new(4.0, 0.0, 0.0));
        assert!(node.apply_force(0.5, IntegrationScheme::Legacy));
        // a = 2, Δx = 0 + 2·0.25 = 0.5, Δv = 1
        assert!((node.position().x() - 0.5).abs() < 1e-6);
        assert!((node.velocity().x() - 1.0).abs() < 1e-6);
        assert_eq!(node.pending_force(), Vector::ZERO);
    }

    #[test]
    fn kinematic_step_halves_acceleration_term() {
        let mut node = PhysicalNode::new(Point::ORIGIN, 2.0, false);
        node.set_force(Vector::new(4.0, 0.0, 0.0));
        node.apply_force(0.5, IntegrationScheme::Kinematic);
        assert!((node.position().x() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn zero_dt_keeps_pending_force() {
        let mut node = PhysicalNode::new(Point::ORIGIN, 1.0, false);
        node.set_force(Vector::new(1.0, 0.0, 0.0));
        assert!(!node.apply_force(0.0, IntegrationScheme::Legacy));
        assert_eq!(node.pending_force(), Vector::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn anchor_ignores_setters_and_clears_force() {
        let start = Point::new(1.0, 2.0, 3.0);
        let mut node = PhysicalNode::new(start, 1.0, true);
        node.set_position(Point::ORIGIN);
        node.set_velocity(Vector::new(5.0, 0.0, 0.0));
        node.set_force(Vector::new(0.0, -10.0, 0.0));
        assert!(!node.apply_force(0.1, IntegrationScheme::Legacy));
        assert_eq!(node.position(), start);
        assert_eq!(node.velocity(), Vector::ZERO);
        assert_eq!(node.pending_force(), Vector::ZERO);
    }

    #[test]
    fn massless_node_is_invalid_and_immovable() {
        let mut node = PhysicalNode::new(Point::ORIGIN, 0.0, false);
        assert!(!node.is_valid());
        node.set_position(Point::new(1.0, 0.0, 0.0));
        assert_eq!(node.position(), Point::ORIGIN);
    }

    #[test]
    fn anchor_toggle_keeps_velocity() {
        let mut node = PhysicalNode::new(Point::ORIGIN, 1.0, false);
        node.set_velocity(Vector::new(0.0, 1.0, 0.0));
        node.set_anchor(true);
        assert_eq!(node.velocity(), Vector::new(0.0, 1.0, 0.0));
    }
}
