//! Positions in space.

use std::ops::{Add, Sub};

use glam::Vec3;
use serde::{Deserialize, Serialize};
use weft_types::Scalar;

use crate::vector::Vector;

/// A location in three-dimensional space.
///
/// Points translate by vectors and subtract to vectors; there is no
/// `Point * Scalar`, since scaling a location has no physical meaning.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point(Vec3);

impl Point {
    /// The origin.
    pub const ORIGIN: Self = Self(Vec3::ZERO);

    #[inline]
    pub const fn new(x: Scalar, y: Scalar, z: Scalar) -> Self {
        Self(Vec3::new(x, y, z))
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

    /// Distance to `other`: the magnitude of their difference.
    #[inline]
    pub fn distance(self, other: Point) -> Scalar {
        (self - other).magnitude()
    }

    #[inline]
    pub fn as_vec3(self) -> Vec3 {
        self.0
    }

    /// Coordinates as `[x, y, z]`.
    #[inline]
    pub fn to_array(self) -> [Scalar; 3] {
        self.0.to_array()
    }
}

impl From<[Scalar; 3]> for Point {
    fn from(p: [Scalar; 3]) -> Self {
        Self(Vec3::from_array(p))
    }
}

impl Add<Vector> for Point {
    type Output = Point;
    fn add(self, rhs: Vector) -> Point {
        Point(self.0 + rhs.as_vec3())
    }
}

impl Sub<Vector> for Point {
    type Output = Point;
    fn sub(self, rhs: Vector) -> Point {
        Point(self.0 - rhs.as_vec3())
    }
}

impl Sub for Point {
    type Output = Vector;
    fn sub(self, rhs: Point) -> Vector {
        Vector::displacement(self, rhs)
    }
}
