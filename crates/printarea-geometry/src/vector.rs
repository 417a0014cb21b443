//! 2D vector value type.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// A point or displacement in map coordinates.
///
/// Serializes as a two-element array `[x, y]`, matching the coordinate
/// layout hosts exchange with the map surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Unit vector pointing north (+y).
    pub const NORTH: Vec2 = Vec2 { x: 0.0, y: 1.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn dot(self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product.
    pub fn cross(self, other: Vec2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    pub fn length_squared(self) -> f64 {
        self.dot(self)
    }

    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    pub fn distance_to(self, other: Vec2) -> f64 {
        (other - self).length()
    }

    /// Linear interpolation: `t = 0` yields `self`, `t = 1` yields `other`.
    pub fn lerp(self, other: Vec2, t: f64) -> Vec2 {
        self + (other - self) * t
    }

    pub fn midpoint(self, other: Vec2) -> Vec2 {
        self.lerp(other, 0.5)
    }

    /// Rotates counter-clockwise by `angle` radians around the origin.
    pub fn rotate(self, angle: f64) -> Vec2 {
        let (sin, cos) = angle.sin_cos();
        Vec2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Rotates counter-clockwise by `angle` radians around `center`.
    ///
    /// Results are not snapped: rotating by π leaves residues around 1e-16
    /// where an exact zero would be expected.
    pub fn rotate_about(self, center: Vec2, angle: f64) -> Vec2 {
        center + (self - center).rotate(angle)
    }

    /// Returns `true` when both components are within `epsilon`.
    pub fn approx_eq(self, other: Vec2, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f64) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl From<[f64; 2]> for Vec2 {
    fn from(value: [f64; 2]) -> Self {
        Vec2::new(value[0], value[1])
    }
}

impl From<Vec2> for [f64; 2] {
    fn from(value: Vec2) -> Self {
        [value.x, value.y]
    }
}

impl From<(f64, f64)> for Vec2 {
    fn from(value: (f64, f64)) -> Self {
        Vec2::new(value.0, value.1)
    }
}

impl From<Vec2> for Point2<f64> {
    fn from(value: Vec2) -> Self {
        Point2::new(value.x, value.y)
    }
}

impl From<Point2<f64>> for Vec2 {
    fn from(value: Point2<f64>) -> Self {
        Vec2::new(value.x, value.y)
    }
}

impl From<Vec2> for Vector2<f64> {
    fn from(value: Vec2) -> Self {
        Vector2::new(value.x, value.y)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}
