//! Intersections between a line segment and the boundary of a primitive.

use ordered_float::OrderedFloat;

use crate::geometry::geo_traits::Shape;
use crate::geometry::primitives::{Circle, Edge, Rect, Vector};
use crate::util::assertions;

/// First point where a segment crosses the boundary of a shape, with the outward normal there.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineIntersection {
    pub point: Vector,
    pub normal: Vector,
}

/// Intersection of the segment `a → b` with `circle`, nearest to `a`.
/// A segment starting inside the circle reports the point where it exits.
pub fn line_intersects_circle(a: &Vector, b: &Vector, circle: &Circle) -> Option<LineIntersection> {
    let delta = *b - *a;
    //avoid dividing by zero for degenerate segments
    let len = f64::max(delta.length(), 1e-6);
    let dir = delta / len;

    //project the center on the (infinite) line: a + dir * t
    let to_a = *a - circle.position;
    let proj = to_a.dot(&dir);
    let c = to_a.sq_length() - circle.radius.powi(2);
    if c > 0.0 && proj > 0.0 {
        //starts outside and points away
        return None;
    }
    let disc_sq = proj * proj - c;
    if disc_sq < 0.0 {
        return None;
    }
    let disc = disc_sq.sqrt();
    let mut t = -proj - disc;
    if t < 0.0 {
        t = -proj + disc;
    }
    if t < 0.0 || t > len {
        return None;
    }
    let point = *a + dir * t;
    let normal = (point - circle.position).normalize();
    debug_assert!(assertions::is_unit(&normal));
    Some(LineIntersection { point, normal })
}

/// Intersection of the segment `a → b` with `rect` using the slab test, nearest to `a`.
/// A segment starting inside the rectangle reports `a` itself, with the normal of the closest side.
pub fn line_intersects_rect(a: &Vector, b: &Vector, rect: &Rect) -> Option<LineIntersection> {
    let delta = *b - *a;
    let len = delta.length();
    let dir = if len > 0.0 { delta / len } else { Vector::ZERO };

    //the segment is inside both slabs for t in [t_min, t_max]
    let mut t_min: f64 = 0.0;
    let mut t_max: f64 = len;
    let slabs = [
        (a.x, dir.x, rect.min.x, rect.max.x),
        (a.y, dir.y, rect.min.y, rect.max.y),
    ];
    for (origin, d, lo, hi) in slabs {
        if d == 0.0 {
            //parallel to this slab
            if origin < lo || origin > hi {
                return None;
            }
        } else {
            let t1 = (lo - origin) / d;
            let t2 = (hi - origin) / d;
            t_min = t_min.max(t1.min(t2));
            t_max = t_max.min(t1.max(t2));
            if t_min > t_max {
                return None;
            }
        }
    }

    let point = *a + dir * t_min;
    Some(LineIntersection {
        point,
        normal: rect_normal_at(rect, &point),
    })
}

/// Outward normal of the side of `rect` closest to `point`.
/// Corners resolve to the horizontal side.
fn rect_normal_at(rect: &Rect, point: &Vector) -> Vector {
    let half = (rect.max - rect.min) / 2.0;
    let p = *point - rect.center();
    let d = p.abs() - half;
    let sign = |v: f64| if v < 0.0 { -1.0 } else { 1.0 };
    if d.x > d.y {
        Vector::new(sign(p.x), 0.0)
    } else {
        Vector::new(0.0, sign(p.y))
    }
}

/// Tests the segment `a → b` against each of the four sides of `rect` separately
/// and returns the crossing nearest to `a`.
/// Unlike [line_intersects_rect], a segment entirely inside `rect` does not intersect.
pub fn line_intersects_rect_edges(
    a: &Vector,
    b: &Vector,
    rect: &Rect,
) -> Option<LineIntersection> {
    let line = Edge::new(*a, *b);
    rect.edges()
        .iter()
        .zip(Rect::EDGE_NORMALS)
        .filter_map(|(side, normal)| {
            line.collides_at(side)
                .map(|point| LineIntersection { point, normal })
        })
        .min_by_key(|i| OrderedFloat(i.point.sq_distance(a)))
}

/// Crossing point of two segments, `None` if they do not cross or are parallel
pub fn segment_intersection(e1: &Edge, e2: &Edge) -> Option<Vector> {
    if f64::max(e1.x_min(), e2.x_min()) > f64::min(e1.x_max(), e2.x_max())
        || f64::max(e1.y_min(), e2.y_min()) > f64::min(e1.y_max(), e2.y_max())
    {
        //bounding boxes do not overlap
        return None;
    }

    //based on: https://en.wikipedia.org/wiki/Line%E2%80%93line_intersection#Given_two_points_on_each_line_segment
    let Vector { x: x1, y: y1 } = e1.start;
    let Vector { x: x2, y: y2 } = e1.end;
    let Vector { x: x3, y: y3 } = e2.start;
    let Vector { x: x4, y: y4 } = e2.end;

    let t_nom = (x2 - x4) * (y4 - y3) - (y2 - y4) * (x4 - x3);
    let u_nom = (x2 - x4) * (y2 - y1) - (y2 - y4) * (x2 - x1);
    let denom = (x2 - x1) * (y4 - y3) - (y2 - y1) * (x4 - x3);

    if denom == 0.0 {
        //parallel edges
        return None;
    }
    let t = t_nom / denom;
    let u = u_nom / denom;
    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(Vector::new(x2 + t * (x1 - x2), y2 + t * (y1 - y2)))
    } else {
        None
    }
}
