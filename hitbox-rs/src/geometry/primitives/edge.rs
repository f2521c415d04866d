use crate::geometry::primitives::Vector;
use crate::geometry::raycast;

/// Line segment between two [`Vector`]s
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Edge {
    pub start: Vector,
    pub end: Vector,
}

impl Edge {
    pub fn new(start: Vector, end: Vector) -> Self {
        Edge { start, end }
    }

    /// Returns the point where `self` and `other` cross, if they do
    pub fn collides_at(&self, other: &Edge) -> Option<Vector> {
        raycast::segment_intersection(self, other)
    }

    pub fn x_min(&self) -> f64 {
        f64::min(self.start.x, self.end.x)
    }

    pub fn y_min(&self) -> f64 {
        f64::min(self.start.y, self.end.y)
    }

    pub fn x_max(&self) -> f64 {
        f64::max(self.start.x, self.end.x)
    }

    pub fn y_max(&self) -> f64 {
        f64::max(self.start.y, self.end.y)
    }
}
