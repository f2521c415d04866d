use anyhow::{Result, ensure};
use rand::Rng;

use crate::geometry::Transformation;
use crate::geometry::collision::{self, CollisionRecord};
use crate::geometry::geo_traits::{
    CollidesWith, DistanceTo, IntersectsLine, Penetration, Shape, Transformable,
};
use crate::geometry::primitives::{Circle, Edge, Polygon, Vector};
use crate::geometry::raycast::{self, LineIntersection};
use crate::util::assertions;

///Axis-aligned rectangle
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub min: Vector,
    pub max: Vector,
}

impl Rect {
    pub fn new(min: Vector, max: Vector) -> Self {
        let rect = Rect { min, max };
        debug_assert!(assertions::rect_is_valid(&rect));
        rect
    }

    pub fn try_new(min: Vector, max: Vector) -> Result<Self> {
        ensure!(
            min.x <= max.x && min.y <= max.y,
            "invalid rectangle, min: {min:?}, max: {max:?}"
        );
        ensure!(
            assertions::vector_is_finite(&min) && assertions::vector_is_finite(&max),
            "non-finite rectangle, min: {min:?}, max: {max:?}"
        );
        Ok(Rect { min, max })
    }

    /// Rectangle spanned by two opposite corners, in any order
    pub fn from_corners(c1: &Vector, c2: &Vector) -> Self {
        let min = Vector::new(f64::min(c1.x, c2.x), f64::min(c1.y, c2.y));
        let max = Vector::new(f64::max(c1.x, c2.x), f64::max(c1.y, c2.y));
        Rect::new(min, max)
    }

    /// Bounding rectangle of the segment `a → b`
    pub fn from_line(a: &Vector, b: &Vector) -> Self {
        Rect::from_corners(a, b)
    }

    /// Rectangle of the given size, centered on `center`
    pub fn from_size(width: f64, height: f64, center: Vector) -> Self {
        let half = Vector::new(width / 2.0, height / 2.0);
        Rect::new(center - half, center + half)
    }

    /// Returns the smallest rectangle that contains both `a` and `b`.
    pub fn bounding_rect(a: &Rect, b: &Rect) -> Rect {
        Rect {
            min: Vector::new(f64::min(a.min.x, b.min.x), f64::min(a.min.y, b.min.y)),
            max: Vector::new(f64::max(a.max.x, b.max.x), f64::max(a.max.y, b.max.y)),
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Returns the four corners of `self`, counterclockwise starting at `min`.
    pub fn corners(&self) -> [Vector; 4] {
        [
            self.min,
            Vector::new(self.max.x, self.min.y),
            self.max,
            Vector::new(self.min.x, self.max.y),
        ]
    }

    /// Returns the four edges that make up `self`, in the same order as [Rect::corners].
    /// Bottom, right, top, left.
    pub fn edges(&self) -> [Edge; 4] {
        let c = self.corners();
        [
            Edge::new(c[0], c[1]),
            Edge::new(c[1], c[2]),
            Edge::new(c[2], c[3]),
            Edge::new(c[3], c[0]),
        ]
    }

    /// Outward normals of the edges returned by [Rect::edges]
    pub const EDGE_NORMALS: [Vector; 4] = [
        Vector::new(0.0, -1.0),
        Vector::new(1.0, 0.0),
        Vector::new(0.0, 1.0),
        Vector::new(-1.0, 0.0),
    ];

    /// Point of `self` (interior included) closest to `point`
    pub fn closest_point(&self, point: &Vector) -> Vector {
        Vector::new(
            point.x.clamp(self.min.x, self.max.x),
            point.y.clamp(self.min.y, self.max.y),
        )
    }

    /// Whether `self` lies entirely within `other`, touching borders allowed
    pub fn is_fully_within(&self, other: &Rect) -> bool {
        self.min.x >= other.min.x
            && self.min.y >= other.min.y
            && self.max.x <= other.max.x
            && self.max.y <= other.max.y
    }

    /// Scales `self` around its own center
    pub fn scale(&mut self, factor: f64) {
        debug_assert!(factor >= 0.0, "negative scale factor: {factor}");
        let center = self.center();
        let half = (self.max - self.min) * (factor / 2.0);
        self.min = center - half;
        self.max = center + half;
    }

    pub fn translate(&mut self, offset: Vector) {
        self.min += offset;
        self.max += offset;
    }

    /// Independent uniform x and y within the bounds
    pub fn random_point(&self, rng: &mut impl Rng) -> Vector {
        Vector::new(
            self.min.x + rng.random::<f64>() * self.width(),
            self.min.y + rng.random::<f64>() * self.height(),
        )
    }
}

impl Transformable for Rect {
    fn transform(&mut self, t: &Transformation) -> &mut Self {
        //rotation can swap which corner is the minimum
        *self = Rect::from_corners(&t.apply(&self.min), &t.apply(&self.max));
        self
    }
}

impl Shape for Rect {
    fn center(&self) -> Vector {
        (self.min + self.max) / 2.0
    }

    fn bbox(&self) -> Rect {
        *self
    }

    /// Strict on all four sides, points on the border are not inside
    fn contains_point(&self, point: &Vector) -> bool {
        point.x > self.min.x && point.x < self.max.x && point.y > self.min.y && point.y < self.max.y
    }
}

impl CollidesWith<Rect> for Rect {
    #[inline(always)]
    fn collides_with(&self, other: &Rect) -> bool {
        collision::rect_rect_collision(self, other)
    }
}

impl CollidesWith<Circle> for Rect {
    fn collides_with(&self, circle: &Circle) -> bool {
        collision::rect_circle_collision(self, circle)
    }
}

impl CollidesWith<Polygon> for Rect {
    fn collides_with(&self, polygon: &Polygon) -> bool {
        polygon.collides_with(self)
    }
}

/// Inclusive, unlike [Shape::contains_point]
impl CollidesWith<Vector> for Rect {
    #[inline(always)]
    fn collides_with(&self, point: &Vector) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

impl Penetration<Rect> for Rect {
    fn penetration(&self, other: &Rect) -> Option<Vector> {
        collision::rect_rect_penetration(self, other)
    }
}

impl Penetration<Circle> for Rect {
    fn penetration(&self, circle: &Circle) -> Option<Vector> {
        collision::rect_circle_penetration(self, circle)
    }
}

impl DistanceTo<Rect> for Rect {
    fn distance_to(&self, other: &Rect) -> CollisionRecord {
        collision::rect_rect_distance(self, other)
    }
}

impl DistanceTo<Circle> for Rect {
    fn distance_to(&self, circle: &Circle) -> CollisionRecord {
        collision::circle_rect_distance(circle, self)
    }
}

impl IntersectsLine for Rect {
    fn intersects_line(&self, a: &Vector, b: &Vector) -> Option<LineIntersection> {
        raycast::line_intersects_rect(a, b, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f64, y: f64) -> Vector {
        Vector::new(x, y)
    }

    #[test]
    fn from_line_spans_the_segment() {
        let r = Rect::from_line(&v(4.0, -1.0), &v(1.0, 3.0));
        assert_eq!(r, Rect::new(v(1.0, -1.0), v(4.0, 3.0)));
        assert_eq!(Rect::from_size(3.0, 4.0, v(2.5, 1.0)), r);
    }

    #[test]
    fn fully_within_allows_shared_borders() {
        let outer = Rect::new(v(0.0, 0.0), v(10.0, 10.0));
        assert!(Rect::new(v(2.0, 2.0), v(3.0, 3.0)).is_fully_within(&outer));
        assert!(Rect::new(v(0.0, 5.0), v(10.0, 10.0)).is_fully_within(&outer));
        assert!(outer.is_fully_within(&outer));
        assert!(!Rect::new(v(9.0, 9.0), v(11.0, 10.0)).is_fully_within(&outer));
        assert!(!outer.is_fully_within(&Rect::new(v(2.0, 2.0), v(3.0, 3.0))));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "negative scale factor")]
    fn negative_scale_is_rejected() {
        let mut r = Rect::new(v(0.0, 0.0), v(2.0, 2.0));
        r.scale(-1.0);
    }
}
