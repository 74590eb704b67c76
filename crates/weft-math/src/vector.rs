//! Directed magnitudes: displacement, velocity, force, acceleration.

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

use glam::Vec3;
use serde::{Deserialize, Serialize};
use weft_types::Scalar;

use crate::point::Point;

/// A three-component vector.
///
/// Division by zero is guarded: dividing by `0.0` returns the vector
/// unscaled instead of producing NaN or infinity.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector(Vec3);

impl Vector {
    /// The zero vector.
    pub const ZERO: Self = Self(Vec3::ZERO);

    /// Creates a vector from its components.
    #[inline]
    pub const fn new(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self(Vec3::new(x, y, z))
    }

    /// Creates the displacement vector pointing from `tail` to `head`
    /// (`head − tail`).
    #[inline]
    pub fn displacement(head: Point, tail: Point) -> Self {
        Self(head.as_vec3() - tail.as_vec3())
    }

    #[inline]
    pub fn x(self) -> Scalar {
        self.0.x
    }

    #[inline]
    pub fn y(self) -> Scalar {
        self.0.y
    }

    #[inline]
    pub fn z(self) -> Scalar {
        self.0.z
    }

    /// Euclidean length: `sqrt(x² + y² + z²)`.
    #[inline]
    pub fn magnitude(self) -> Scalar {
        self.0.length()
    }

    /// Returns true when every component is exactly zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == Vec3::ZERO
    }

    /// Returns the unit vector in the same direction.
    ///
    /// A vector whose magnitude is exactly zero is returned unchanged.
    pub fn normalized(self) -> Self {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            self
        } else {
            Self(self.0 / magnitude)
        }
    }

    /// Normalizes in place (no-op for the zero vector).
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Scales every component by `s`.
    #[inline]
    pub fn scale(self, s: Scalar) -> Self {
        Self(self.0 * s)
    }

    /// Returns the underlying `glam` vector.
    #[inline]
    pub fn as_vec3(self) -> Vec3 {
        self.0
    }

    /// Components as `[x, y, z]`.
    #[inline]
    pub fn to_array(self) -> [Scalar; 3] {
        self.0.to_array()
    }
}

impl From<Vec3> for Vector {
    fn from(v: Vec3) -> Self {
        Self(v)
    }
}

impl From<[Scalar; 3]> for Vector {
    fn from(v: [Scalar; 3]) -> Self {
        Self(Vec3::from_array(v))
    }
}

impl Add for Vector {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Vector {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Vector {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul<Scalar> for Vector {
    type Output = Self;
    fn mul(self, rhs: Scalar) -> Self {
        self.scale(rhs)
    }
}

impl Div<Scalar> for Vector {
    type Output = Self;

    /// Scales by the reciprocal of `rhs`; a zero divisor leaves the vector unscaled.
    fn div(self, rhs: Scalar) -> Self {
        if rhs == 0.0 {
            self
        } else {
            self.scale(1.0 / rhs)
        }
    }
}
