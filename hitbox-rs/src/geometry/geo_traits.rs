use crate::geometry::Transformation;
use crate::geometry::collision::CollisionRecord;
use crate::geometry::primitives::{Rect, Vector};
use crate::geometry::raycast::LineIntersection;

/// Trait for types that can detect collisions between `Self` and `T`.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}

/// Trait for types that can compute the distance between their boundary and the boundary of `T`.
pub trait DistanceTo<T> {
    /// Separation distance if disjoint, a negative overlap depth if colliding.
    fn distance_to(&self, other: &T) -> CollisionRecord;
}

/// Trait for types that can compute how to push `Self` out of `T`.
pub trait Penetration<T> {
    /// Displacement to apply to `self` so both just touch. `None` when they do not collide.
    fn penetration(&self, other: &T) -> Option<Vector>;
}

/// Trait for types whose boundary can be intersected by a line segment.
pub trait IntersectsLine {
    /// First crossing of the segment `a → b` with the boundary, nearest to `a`.
    fn intersects_line(&self, a: &Vector, b: &Vector) -> Option<LineIntersection>;
}

/// Trait for shared properties of geometric primitives.
pub trait Shape {
    /// Geometric center of the shape
    fn center(&self) -> Vector;

    /// Tightest axis-aligned rectangle containing the shape
    fn bbox(&self) -> Rect;

    /// Whether `point` lies strictly inside the shape
    fn contains_point(&self, point: &Vector) -> bool;
}

/// Trait for types that can be modified by a [`Transformation`].
pub trait Transformable: Clone {
    /// Applies a transformation to `self`.
    fn transform(&mut self, t: &Transformation) -> &mut Self;

    /// Applies a transformation to a clone.
    fn transform_clone(&self, t: &Transformation) -> Self {
        let mut clone = self.clone();
        clone.transform(t);
        clone
    }
}
