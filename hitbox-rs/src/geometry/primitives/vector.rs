use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::geometry::Transformation;
use crate::geometry::geo_traits::Transformable;
use crate::util::FPA;

/// 2D point or displacement
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    /// Direction used whenever a direction is needed but the input vector has none
    pub const UNIT_X: Vector = Vector { x: 1.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Vector { x, y }
    }

    /// Vector of length `magnitude` pointing in direction `angle` (radians, counterclockwise from +x)
    pub fn from_polar(angle: f64, magnitude: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Vector::new(cos * magnitude, sin * magnitude)
    }

    /// Returns `(angle, magnitude)`, the inverse of [`Vector::from_polar`]
    pub fn to_polar(&self) -> (f64, f64) {
        (self.angle(), self.length())
    }

    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    pub fn dot(&self, other: &Vector) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn length(&self) -> f64 {
        self.sq_length().sqrt()
    }

    pub fn sq_length(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    pub fn distance(&self, other: &Vector) -> f64 {
        self.sq_distance(other).sqrt()
    }

    pub fn sq_distance(&self, other: &Vector) -> f64 {
        (self.x - other.x).powi(2) + (self.y - other.y).powi(2)
    }

    /// Unit vector in the same direction, or `fallback` if `self` is exactly zero
    pub fn normalize_or(&self, fallback: Vector) -> Vector {
        let length = self.length();
        if length > 0.0 {
            *self / length
        } else {
            fallback
        }
    }

    /// Unit vector in the same direction, [`Vector::UNIT_X`] for a zero vector
    pub fn normalize(&self) -> Vector {
        self.normalize_or(Vector::UNIT_X)
    }

    /// Rotates counterclockwise around the origin by `angle` radians
    pub fn rotate(&self, angle: f64) -> Vector {
        let (sin, cos) = angle.sin_cos();
        Vector::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    pub fn abs(&self) -> Vector {
        Vector::new(self.x.abs(), self.y.abs())
    }

    /// Component-wise comparison with a floating point tolerance
    pub fn almost_eq(&self, other: &Vector) -> bool {
        FPA(self.x) == FPA(other.x) && FPA(self.y) == FPA(other.y)
    }
}

/// Tolerance for deciding whether two boundaries touch
pub(crate) const EPSILON: f64 = 1e-5;

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, rhs: Vector) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vector {
    fn sub_assign(&mut self, rhs: Vector) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        Vector::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Vector {
    type Output = Vector;

    fn div(self, rhs: f64) -> Vector {
        Vector::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

impl From<Vector> for (f64, f64) {
    fn from(v: Vector) -> Self {
        (v.x, v.y)
    }
}

impl From<(f64, f64)> for Vector {
    fn from((x, y): (f64, f64)) -> Self {
        Vector::new(x, y)
    }
}

impl Transformable for Vector {
    fn transform(&mut self, t: &Transformation) -> &mut Self {
        *self = t.apply(self);
        self
    }
}
