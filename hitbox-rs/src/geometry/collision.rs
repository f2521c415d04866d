//! Pure routines for every supported pair of primitives.
//!
//! Penetration vectors are expressed as the displacement to apply to the *first* argument
//! so that both primitives end up just touching.

use crate::geometry::geo_traits::{CollidesWith, Shape};
use crate::geometry::primitives::{Circle, EPSILON, Rect, Vector};

/// Result of a distance query between the boundaries of two shapes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CollisionRecord {
    /// Separation distance if disjoint, negative overlap depth if collided
    pub distance: f64,
    pub collided: bool,
}

pub fn circle_circle_collision(a: &Circle, b: &Circle) -> bool {
    let r = a.radius + b.radius;
    a.position.sq_distance(&b.position) < r * r
}

/// Pushes `a` away from `b` along the line through both centers.
/// Coinciding centers push `a` towards +x.
pub fn circle_circle_penetration(a: &Circle, b: &Circle) -> Option<Vector> {
    if !circle_circle_collision(a, b) {
        return None;
    }
    let r = a.radius + b.radius;
    let to_a = a.position - b.position;
    let dir = to_a.normalize_or(Vector::UNIT_X);
    Some(dir * (r - to_a.length()))
}

pub fn circle_circle_distance(a: &Circle, b: &Circle) -> CollisionRecord {
    CollisionRecord {
        distance: a.position.distance(&b.position) - (a.radius + b.radius),
        collided: circle_circle_collision(a, b),
    }
}

pub fn rect_circle_collision(rect: &Rect, circle: &Circle) -> bool {
    //Based on: https://yal.cc/rectangle-circle-intersection-test/
    let closest = rect.closest_point(&circle.position);
    closest == circle.position || closest.sq_distance(&circle.position) < circle.radius.powi(2)
}

/// Pushes `circle` out of `rect`.
/// If the center lies outside, along the direction from the closest point of `rect` to the center.
/// Otherwise (center inside or on the border), along the axis requiring the smallest push (x on ties).
pub fn circle_rect_penetration(circle: &Circle, rect: &Rect) -> Option<Vector> {
    let from_rect = circle.position - rect.closest_point(&circle.position);
    let sq_d = from_rect.sq_length();
    if sq_d > 0.0 {
        if sq_d < circle.radius.powi(2) {
            let d = sq_d.sqrt();
            Some(from_rect / d * (circle.radius - d))
        } else {
            None
        }
    } else {
        let half = (rect.max - rect.min) / 2.0;
        let p = circle.position - rect.center();
        let push_x = half.x + circle.radius - p.x.abs();
        let push_y = half.y + circle.radius - p.y.abs();
        if push_x <= push_y {
            Some(Vector::new(sign(p.x) * push_x, 0.0))
        } else {
            Some(Vector::new(0.0, sign(p.y) * push_y))
        }
    }
}

/// Pushes `rect` out of `circle`, the mirror of [circle_rect_penetration]
pub fn rect_circle_penetration(rect: &Rect, circle: &Circle) -> Option<Vector> {
    circle_rect_penetration(circle, rect).map(|p| -p)
}

pub fn circle_rect_distance(circle: &Circle, rect: &Rect) -> CollisionRecord {
    let collided = rect_circle_collision(rect, circle);
    let Vector { x, y } = circle.position;
    let distance = match rect.collides_with(&circle.position) {
        true => {
            //center inside the rectangle: depth to the nearest side, plus the radius
            let depth = [
                x - rect.min.x,
                rect.max.x - x,
                y - rect.min.y,
                rect.max.y - y,
            ]
            .into_iter()
            .fold(f64::INFINITY, f64::min);
            -(depth + circle.radius)
        }
        false => rect.closest_point(&circle.position).distance(&circle.position) - circle.radius,
    };
    CollisionRecord { distance, collided }
}

/// Inclusive interval overlap on both axes, so every rectangle collides with itself
pub fn rect_rect_collision(a: &Rect, b: &Rect) -> bool {
    f64::max(a.min.x, b.min.x) <= f64::min(a.max.x, b.max.x)
        && f64::max(a.min.y, b.min.y) <= f64::min(a.max.y, b.max.y)
}

/// Pushes `a` out of `b` along the axis with the smallest overlap (x on ties).
/// Coinciding centers on the chosen axis push towards +.
pub fn rect_rect_penetration(a: &Rect, b: &Rect) -> Option<Vector> {
    if !rect_rect_collision(a, b) {
        return None;
    }
    let (half_a, half_b) = ((a.max - a.min) / 2.0, (b.max - b.min) / 2.0);
    let n = a.center() - b.center();
    let overlap_x = half_a.x + half_b.x - n.x.abs();
    let overlap_y = half_a.y + half_b.y - n.y.abs();
    if overlap_x <= overlap_y {
        Some(Vector::new(sign(n.x) * overlap_x, 0.0))
    } else {
        Some(Vector::new(0.0, sign(n.y) * overlap_y))
    }
}

pub fn rect_rect_distance(a: &Rect, b: &Rect) -> CollisionRecord {
    //signed gaps per axis, negative when the intervals overlap
    let dx = f64::max(a.min.x - b.max.x, b.min.x - a.max.x);
    let dy = f64::max(a.min.y - b.max.y, b.min.y - a.max.y);
    let collided = rect_rect_collision(a, b);
    let distance = match collided {
        true => f64::max(dx, dy),
        false => f64::hypot(dx.max(0.0), dy.max(0.0)),
    };
    CollisionRecord { distance, collided }
}

/// -1 for negative values, 1 otherwise
fn sign(v: f64) -> f64 {
    if v < 0.0 { -1.0 } else { 1.0 }
}

/// Whether the boundaries described by `record` are less than [`EPSILON`] apart
pub fn just_touching(record: &CollisionRecord) -> bool {
    record.distance.abs() < EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn circle(x: f64, y: f64, r: f64) -> Circle {
        Circle::new(Vector::new(x, y), r)
    }

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Rect {
        Rect::new(Vector::new(x0, y0), Vector::new(x1, y1))
    }

    #[test_case(6.0, true; "overlapping")]
    #[test_case(10.0, false; "touching")]
    #[test_case(11.0, false; "apart")]
    fn circle_circle(x: f64, expected: bool) {
        let a = circle(0.0, 0.0, 5.0);
        let b = circle(x, 0.0, 5.0);
        assert_eq!(circle_circle_collision(&a, &b), expected);
        assert_eq!(circle_circle_collision(&b, &a), expected);
    }

    #[test]
    fn circle_circle_penetration_points_away_from_argument() {
        let a = circle(0.0, 0.0, 5.0);
        let b = circle(6.0, 0.0, 5.0);
        let p = circle_circle_penetration(&a, &b).unwrap();
        assert!(p.almost_eq(&Vector::new(-4.0, 0.0)));

        let mut moved = a;
        moved.position += p;
        assert!(just_touching(&circle_circle_distance(&moved, &b)));
    }

    #[test]
    fn coinciding_circles_push_along_x() {
        let a = circle(1.0, 1.0, 1.0);
        let b = circle(1.0, 1.0, 2.0);
        let p = circle_circle_penetration(&a, &b).unwrap();
        assert!(p.almost_eq(&Vector::new(3.0, 0.0)));
    }

    #[test]
    fn circle_circle_distance_between_boundaries() {
        let r = circle_circle_distance(&circle(0.0, 0.0, 1.0), &circle(0.0, 3.0, 1.0));
        assert!(!r.collided);
        assert!((r.distance - 1.0).abs() < 1e-12);
    }

    #[test_case(5.0, 5.0, 1.0, true; "center inside")]
    #[test_case(10.5, 5.0, 1.0, true; "overlapping side")]
    #[test_case(11.0, 5.0, 1.0, false; "touching side")]
    #[test_case(10.6, 10.6, 1.0, true; "overlapping corner")]
    #[test_case(10.8, 10.8, 1.0, false; "near corner")]
    fn rect_circle(x: f64, y: f64, r: f64, expected: bool) {
        assert_eq!(
            rect_circle_collision(&rect(0.0, 0.0, 10.0, 10.0), &circle(x, y, r)),
            expected
        );
    }

    #[test]
    fn circle_pushed_out_of_rect_side() {
        let r = rect(0.0, 0.0, 10.0, 10.0);
        let c = circle(10.5, 5.0, 1.0);
        let p = circle_rect_penetration(&c, &r).unwrap();
        assert!(p.almost_eq(&Vector::new(0.5, 0.0)));
        assert!(rect_circle_penetration(&r, &c).unwrap().almost_eq(&Vector::new(-0.5, 0.0)));
    }

    #[test]
    fn circle_center_inside_rect_takes_shortest_axis() {
        let r = rect(0.0, 0.0, 10.0, 4.0);
        let c = circle(5.0, 3.0, 1.0);
        //closest to the top side: 1 unit away, plus radius
        let p = circle_rect_penetration(&c, &r).unwrap();
        assert!(p.almost_eq(&Vector::new(0.0, 2.0)));
        let d = circle_rect_distance(&c, &r);
        assert!(d.collided);
        assert!((d.distance + 2.0).abs() < 1e-12);
    }

    #[test]
    fn rect_rect_is_reflexive_and_symmetric() {
        let a = rect(0.0, 0.0, 2.0, 2.0);
        let b = rect(1.0, 1.5, 4.0, 3.0);
        let c = rect(0.0, 0.0, 0.0, 0.0);
        assert!(rect_rect_collision(&a, &a));
        assert!(rect_rect_collision(&c, &c));
        assert_eq!(rect_rect_collision(&a, &b), rect_rect_collision(&b, &a));
    }

    #[test]
    fn rect_rect_penetration_prefers_smaller_axis() {
        let a = rect(0.0, 0.0, 2.0, 2.0);
        let b = rect(1.0, 1.5, 4.0, 3.0);
        //x overlap 1, y overlap 0.5
        let p = rect_rect_penetration(&a, &b).unwrap();
        assert!(p.almost_eq(&Vector::new(0.0, -0.5)));
    }

    #[test]
    fn rect_rect_penetration_ties_go_to_x() {
        let a = rect(0.0, 0.0, 2.0, 2.0);
        let b = rect(1.0, 1.0, 3.0, 3.0);
        let p = rect_rect_penetration(&a, &b).unwrap();
        assert!(p.almost_eq(&Vector::new(-1.0, 0.0)));
    }

    #[test]
    fn circle_just_outside_rect_is_pushed_away_from_the_side() {
        let r = rect(0.0, 0.0, 10.0, 10.0);
        let mut c = circle(5.0, 10.000001, 1.0);
        let p = circle_rect_penetration(&c, &r).unwrap();
        assert_eq!(p.x, 0.0);
        assert!(p.y > 0.0);

        c.position += p;
        assert!(just_touching(&circle_rect_distance(&c, &r)));
    }

    #[test]
    fn nearly_coinciding_circles_keep_their_direction() {
        let mut a = circle(0.0, 0.0, 1.0);
        let b = circle(0.0, 5e-6, 1.0);
        let p = circle_circle_penetration(&a, &b).unwrap();
        assert_eq!(p.x, 0.0);
        assert!(p.y < 0.0);

        a.position += p;
        assert!(just_touching(&circle_circle_distance(&a, &b)));
    }

    #[test]
    fn rect_rect_distance_overlapping_is_negative_depth() {
        let d = rect_rect_distance(&rect(0.0, 0.0, 4.0, 4.0), &rect(3.0, 1.0, 6.0, 2.0));
        assert!(d.collided);
        assert_eq!(d.distance, -1.0);
    }

    #[test]
    fn rect_rect_distance_diagonal() {
        let d = rect_rect_distance(&rect(0.0, 0.0, 1.0, 1.0), &rect(4.0, 5.0, 6.0, 6.0));
        assert!(!d.collided);
        assert!((d.distance - 5.0).abs() < 1e-12);
    }
}
