use std::f64::consts::TAU;

use anyhow::{Result, ensure};
use rand::Rng;

use crate::geometry::Transformation;
use crate::geometry::collision::{self, CollisionRecord};
use crate::geometry::geo_traits::{
    CollidesWith, DistanceTo, IntersectsLine, Penetration, Shape, Transformable,
};
use crate::geometry::primitives::{Rect, Vector};
use crate::geometry::raycast::{self, LineIntersection};
use crate::util::assertions;

/// Geometric primitive representing a circle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub position: Vector,
    pub radius: f64,
}

impl Circle {
    pub fn new(position: Vector, radius: f64) -> Self {
        let circle = Self { position, radius };
        debug_assert!(assertions::circle_is_valid(&circle));
        circle
    }

    pub fn try_new(position: Vector, radius: f64) -> Result<Self> {
        ensure!(
            radius.is_finite() && radius >= 0.0,
            "invalid circle radius: {radius}"
        );
        ensure!(
            assertions::vector_is_finite(&position),
            "invalid circle position: {position:?}"
        );
        Ok(Self { position, radius })
    }

    pub fn scale(&mut self, factor: f64) {
        debug_assert!(factor >= 0.0, "negative scale factor: {factor}");
        self.radius *= factor;
    }

    /// Uniformly distributed over the area of the disk
    pub fn random_point(&self, rng: &mut impl Rng) -> Vector {
        //sqrt compensates for the area growing quadratically with the distance to the center
        let r = self.radius * rng.random::<f64>().sqrt();
        let angle = rng.random::<f64>() * TAU;
        self.position + Vector::from_polar(angle, r)
    }
}

impl Transformable for Circle {
    fn transform(&mut self, t: &Transformation) -> &mut Self {
        let Circle { position, radius } = self;
        position.transform(t);
        *radius *= t.scale;
        self
    }
}

impl Shape for Circle {
    fn center(&self) -> Vector {
        self.position
    }

    fn bbox(&self) -> Rect {
        let r = Vector::new(self.radius, self.radius);
        Rect::new(self.position - r, self.position + r)
    }

    fn contains_point(&self, point: &Vector) -> bool {
        point.sq_distance(&self.position) < self.radius.powi(2)
    }
}

impl CollidesWith<Circle> for Circle {
    fn collides_with(&self, other: &Circle) -> bool {
        collision::circle_circle_collision(self, other)
    }
}

impl CollidesWith<Rect> for Circle {
    fn collides_with(&self, rect: &Rect) -> bool {
        collision::rect_circle_collision(rect, self)
    }
}

impl Penetration<Circle> for Circle {
    fn penetration(&self, other: &Circle) -> Option<Vector> {
        collision::circle_circle_penetration(self, other)
    }
}

impl Penetration<Rect> for Circle {
    fn penetration(&self, rect: &Rect) -> Option<Vector> {
        collision::circle_rect_penetration(self, rect)
    }
}

impl DistanceTo<Circle> for Circle {
    fn distance_to(&self, other: &Circle) -> CollisionRecord {
        collision::circle_circle_distance(self, other)
    }
}

impl DistanceTo<Rect> for Circle {
    fn distance_to(&self, rect: &Rect) -> CollisionRecord {
        collision::circle_rect_distance(self, rect)
    }
}

impl IntersectsLine for Circle {
    fn intersects_line(&self, a: &Vector, b: &Vector) -> Option<LineIntersection> {
        raycast::line_intersects_circle(a, b, self)
    }
}
