use anyhow::{Result, ensure};
use itertools::Itertools;
use log::{trace, warn};
use rand::Rng;

use crate::error::HitboxError;
use crate::geometry::Transformation;
use crate::geometry::geo_traits::{CollidesWith, Shape, Transformable};
use crate::geometry::primitives::{Edge, Rect, Vector};
use crate::geometry::raycast;
use crate::util::assertions;

/// Arbitrary polygon, closed by an implicit edge from the last point back to the first.
/// No convexity is required and the winding only matters for point containment.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    points: Vec<Vector>,
    /// Bounding box, regenerated whenever the points change
    bbox: Rect,
}

impl Polygon {
    pub fn try_new(points: Vec<Vector>) -> Result<Self> {
        ensure!(
            points.len() >= 3,
            "polygon must have at least 3 points: {points:?}"
        );
        ensure!(
            points.iter().all(assertions::vector_is_finite),
            "polygon contains non-finite points: {points:?}"
        );
        let bbox = Polygon::generate_bounding_box(&points);
        Ok(Polygon { points, bbox })
    }

    pub fn points(&self) -> &[Vector] {
        &self.points
    }

    /// All edges, including the closing one
    pub fn edge_iter(&self) -> impl Iterator<Item = Edge> + '_ {
        self.points
            .iter()
            .circular_tuple_windows()
            .map(|(start, end)| Edge::new(*start, *end))
    }

    pub fn generate_bounding_box(points: &[Vector]) -> Rect {
        let (mut x_min, mut y_min) = (f64::MAX, f64::MAX);
        let (mut x_max, mut y_max) = (f64::MIN, f64::MIN);

        for point in points.iter() {
            x_min = x_min.min(point.x);
            y_min = y_min.min(point.y);
            x_max = x_max.max(point.x);
            y_max = y_max.max(point.y);
        }
        Rect::new(Vector::new(x_min, y_min), Vector::new(x_max, y_max))
    }

    /// Scales every point around the origin, not around the polygon's own center.
    pub fn scale(&mut self, factor: f64) {
        debug_assert!(factor >= 0.0, "negative scale factor: {factor}");
        self.points.iter_mut().for_each(|p| *p = *p * factor);
        self.bbox = Polygon::generate_bounding_box(&self.points);
    }

    pub fn translate(&mut self, offset: Vector) {
        self.points.iter_mut().for_each(|p| *p += offset);
        self.bbox.translate(offset);
    }

    /// Rejection sampling within the bounding box.
    /// Gives up after `max_attempts` candidates, which can only happen for (near) degenerate polygons.
    pub fn random_point(
        &self,
        rng: &mut impl Rng,
        max_attempts: usize,
    ) -> Result<Vector, HitboxError> {
        let mut attempts = 0;
        while attempts < max_attempts {
            attempts += 1;
            let candidate = self.bbox.random_point(rng);
            if self.contains_point(&candidate) {
                trace!("[RS] polygon sample accepted after {attempts} attempts");
                return Ok(candidate);
            }
        }
        warn!(
            "[RS] no point sampled inside polygon after {attempts} attempts, bbox: {:?}",
            self.bbox
        );
        Err(HitboxError::SamplingExhausted { attempts })
    }
}

impl Transformable for Polygon {
    fn transform(&mut self, t: &Transformation) -> &mut Self {
        //destructuring pattern to ensure that the code is updated when the struct changes
        let Polygon { points, bbox } = self;

        points.iter_mut().for_each(|p| {
            p.transform(t);
        });
        *bbox = Polygon::generate_bounding_box(points);
        debug_assert!(assertions::polygon_is_valid(points));

        self
    }
}

impl Shape for Polygon {
    /// Center of the bounding box, not the centroid
    fn center(&self) -> Vector {
        self.bbox.center()
    }

    fn bbox(&self) -> Rect {
        self.bbox
    }

    fn contains_point(&self, point: &Vector) -> bool {
        //even-odd rule: https://en.wikipedia.org/wiki/Point_in_polygon#Ray_casting_algorithm
        if !self.bbox.collides_with(point) {
            return false;
        }
        let mut inside = false;
        for Edge { start: pi, end: pj } in self.edge_iter() {
            //count crossings of a horizontal ray shot to the right
            if (pi.y > point.y) != (pj.y > point.y)
                && point.x < (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x
            {
                inside = !inside;
            }
        }
        inside
    }
}

impl CollidesWith<Rect> for Polygon {
    fn collides_with(&self, rect: &Rect) -> bool {
        if !self.bbox.collides_with(rect) {
            return false;
        }
        //a corner of the rectangle is inside the polygon
        if rect.corners().iter().any(|c| self.contains_point(c)) {
            return true;
        }
        //a vertex of the polygon is inside the rectangle
        if self.points.iter().any(|p| rect.collides_with(p)) {
            return true;
        }
        //an edge of the polygon crosses an edge of the rectangle
        self.edge_iter()
            .any(|e| raycast::line_intersects_rect_edges(&e.start, &e.end, rect).is_some())
    }
}
