use log::error;

use crate::geometry::primitives::{Circle, Rect, Vector};
use crate::util::FPA;

//Various checks to verify correctness of the geometry
//Used in debug_assert!() blocks

pub fn vector_is_finite(v: &Vector) -> bool {
    v.x.is_finite() && v.y.is_finite()
}

pub fn circle_is_valid(circle: &Circle) -> bool {
    let valid = vector_is_finite(&circle.position)
        && circle.radius.is_finite()
        && circle.radius >= 0.0;
    if !valid {
        error!("invalid circle: {circle:?}");
    }
    valid
}

pub fn rect_is_valid(rect: &Rect) -> bool {
    let valid = vector_is_finite(&rect.min)
        && vector_is_finite(&rect.max)
        && rect.min.x <= rect.max.x
        && rect.min.y <= rect.max.y;
    if !valid {
        error!("invalid rectangle: {rect:?}");
    }
    valid
}

pub fn polygon_is_valid(points: &[Vector]) -> bool {
    let valid = points.len() >= 3 && points.iter().all(vector_is_finite);
    if !valid {
        error!("invalid polygon: {points:?}");
    }
    valid
}

/// Normals handed out by line intersections have unit length
pub fn is_unit(v: &Vector) -> bool {
    FPA(v.length()) == FPA(1.0)
}
