//! Gravity, wind and viscous drag.

use serde::{Deserialize, Serialize};
use weft_math::Vector;
use weft_types::constants::GRAVITY;
use weft_types::Scalar;

use crate::force::ExternalForce;
use crate::node::PhysicalNode;
use crate::noise::position_noise;

/// Uniform gravitational field: `F = dir · (m · g)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GravityForce {
    acceleration: Scalar,
    direction: Vector,
}

impl GravityForce {
    /// `direction` is normalized once here; a zero vector is kept as-is.
    pub fn new(acceleration: Scalar, direction: Vector) -> Self {
        Self {
            acceleration,
            direction: direction.normalized(),
        }
    }

    /// 9.8 m/s² along −y.
    pub fn earth() -> Self {
        Self::new(GRAVITY, Vector::new(0.0, -1.0, 0.0))
    }

    pub fn direction(&self) -> Vector {
        self.direction
    }
}

impl ExternalForce for GravityForce {
    fn generate_force(&self, node: &PhysicalNode, _dt: Scalar) -> Option<Vector> {
        Some(self.direction * (node.mass() * self.acceleration))
    }

    fn is_valid(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "gravity"
    }
}

/// Wind along a base direction, perturbed per node by position noise.
///
/// ```text
/// n = noise(position)
/// F = normalize(dir + (n, n, n)) · (cos(n · t) + 1) / 2 · max_magnitude
/// ```
///
/// `t` is the alteration constant, fed from the scene clock.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindForce {
    direction: Vector,
    max_magnitude: Scalar,
    alteration: u64,
}

impl WindForce {
    pub fn new(direction: Vector, max_magnitude: Scalar) -> Self {
        Self {
            direction,
            max_magnitude,
            alteration: 0,
        }
    }

    /// Sets the noise phase, normally the current clock tick.
    pub fn set_alteration_constant(&mut self, constant: u64) {
        self.alteration = constant;
    }

    pub fn alteration_constant(&self) -> u64 {
        self.alteration
    }

    pub fn max_magnitude(&self) -> Scalar {
        self.max_magnitude
    }
}

impl ExternalForce for WindForce {
    fn generate_force(&self, node: &PhysicalNode, _dt: Scalar) -> Option<Vector> {
        if !self.is_valid() {
            return None;
        }
        let noise = position_noise(node.position());
        let n = noise as Scalar;
        let envelope = ((noise * self.alteration as f64).cos() + 1.0) / 2.0;
        let force = (self.direction + Vector::new(n, n, n)).normalized();
        Some(force * (envelope as Scalar) * self.max_magnitude)
    }

    fn is_valid(&self) -> bool {
        self.max_magnitude >= 0.0
    }

    fn name(&self) -> &str {
        "wind"
    }

    fn advance_clock(&mut self, tick: u64) {
        self.set_alteration_constant(tick);
    }
}

/// Linear drag: `F = −c · v`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViscousForce {
    coefficient: Scalar,
}

impl ViscousForce {
    pub fn new(coefficient: Scalar) -> Self {
        Self { coefficient }
    }

    pub fn coefficient(&self) -> Scalar {
        self.coefficient
    }
}

impl ExternalForce for ViscousForce {
    fn generate_force(&self, node: &PhysicalNode, _dt: Scalar) -> Option<Vector> {
        self.is_valid().then(|| node.velocity() * -self.coefficient)
    }

    /// A negative coefficient would accelerate instead of damp.
    fn is_valid(&self) -> bool {
        self.coefficient >= 0.0
    }

    fn name(&self) -> &str {
        "viscous"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weft_math::Point;

    #[test]
    fn gravity_magnitude_is_mass_times_g() {
        let gravity = GravityForce::new(9.8, Vector::new(0.0, -3.0, 4.0));
        let node = PhysicalNode::new(Point::ORIGIN, 0.5, false);
        let force = gravity.generate_force(&node, 0.01).unwrap();
        assert!((force.magnitude() - 4.9).abs() < 1e-5);
        assert!((force.y() + 4.9 * 0.6).abs() < 1e-5);
    }

    #[test]
    fn gravity_zero_direction_stays_zero() {
        let gravity = GravityForce::new(9.8, Vector::ZERO);
        let node = PhysicalNode::new(Point::ORIGIN, 1.0, false);
        assert_eq!(gravity.generate_force(&node, 0.01), Some(Vector::ZERO));
    }

    #[test]
    fn negative_wind_is_invalid() {
        let wind = WindForce::new(Vector::new(1.0, 0.0, 0.0), -1.0);
        let node = PhysicalNode::new(Point::ORIGIN, 1.0, false);
        assert!(!wind.is_valid());
        assert!(wind.generate_force(&node, 0.01).is_none());
    }

    #[test]
    fn wind_at_tick_zero_has_full_magnitude() {
        // cos(0) = 1, so the envelope is 1
        let wind = WindForce::new(Vector::new(1.0, 0.0, 0.0), 2.0);
        let node = PhysicalNode::new(Point::new(0.3, 0.7, 0.0), 1.0, false);
        let force = wind.generate_force(&node, 0.01).unwrap();
        assert!((force.magnitude() - 2.0).abs() < 1e-5);
    }

    #[test]
    fn wind_never_exceeds_max_magnitude() {
        let mut wind = WindForce::new(Vector::new(0.0, 1.0, 1.0), 0.8);
        for tick in 0..50 {
            wind.advance_clock(tick);
            let node = PhysicalNode::new(Point::new(tick as f32 * 0.1, 1.0, 0.0), 1.0, false);
            let force = wind.generate_force(&node, 0.01).unwrap();
            assert!(force.magnitude() <= 0.8 + 1e-5);
        }
        assert_eq!(wind.alteration_constant(), 49);
    }

    #[test]
    fn viscous_opposes_velocity() {
        let drag = ViscousForce::new(0.5);
        let mut node = PhysicalNode::new(Point::ORIGIN, 1.0, false);
        node.set_velocity(Vector::new(2.0, 0.0, -4.0));
        assert_eq!(drag.generate_force(&node, 0.01), Some(Vector::new(-1.0, 0.0, 2.0)));
        assert!(!ViscousForce::new(-0.1).is_valid());
    }
}
