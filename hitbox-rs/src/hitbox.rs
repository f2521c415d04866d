use std::fmt::{Display, Formatter};

use log::trace;
use rand::Rng;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::{HitboxError, Operation, Result};
use crate::geometry::Transformation;
use crate::geometry::collision::CollisionRecord;
use crate::geometry::geo_traits::{
    CollidesWith, DistanceTo, IntersectsLine, Penetration, Shape, Transformable,
};
use crate::geometry::primitives::{Circle, Group, GroupMember, Polygon, Rect, Vector};
use crate::geometry::raycast::LineIntersection;
use crate::io::export::export_hitbox;
use crate::io::ext_repr::ExtHitbox;
use crate::io::import::import_hitbox;
use crate::util::SamplingConfig;

/// The closed set of hitbox kinds, with their serialized codes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HitboxKind {
    Circle = 0,
    Rect = 1,
    Group = 2,
    Polygon = 3,
}

impl HitboxKind {
    pub fn code(&self) -> u64 {
        *self as u64
    }
}

impl TryFrom<u64> for HitboxKind {
    type Error = HitboxError;

    fn try_from(code: u64) -> Result<Self> {
        match code {
            0 => Ok(HitboxKind::Circle),
            1 => Ok(HitboxKind::Rect),
            2 => Ok(HitboxKind::Group),
            3 => Ok(HitboxKind::Polygon),
            _ => Err(HitboxError::UnrecognizedKind(code.to_string())),
        }
    }
}

impl Display for HitboxKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            HitboxKind::Circle => "circle",
            HitboxKind::Rect => "rectangle",
            HitboxKind::Group => "group",
            HitboxKind::Polygon => "polygon",
        };
        f.write_str(name)
    }
}

/// A shape used for collision and spatial queries.
///
/// Queries take `&self`. Only [`Hitbox::resolve_collision`], [`Hitbox::scale`],
/// [`Hitbox::translate`] and [`Hitbox::transform`] (which records a group's anchor) take `&mut self`.
///
/// Polygons only support collision against rectangles (and groups made of rectangles),
/// containment, sampling and transforms. Everything else returns [`HitboxError::Unsupported`].
#[derive(Clone, Debug, PartialEq)]
pub enum Hitbox {
    Circle(Circle),
    Rect(Rect),
    Group(Group),
    Polygon(Polygon),
}

impl Hitbox {
    pub fn kind(&self) -> HitboxKind {
        match self {
            Hitbox::Circle(_) => HitboxKind::Circle,
            Hitbox::Rect(_) => HitboxKind::Rect,
            Hitbox::Group(_) => HitboxKind::Group,
            Hitbox::Polygon(_) => HitboxKind::Polygon,
        }
    }

    /// Whether the interiors or boundaries of `self` and `other` overlap
    pub fn collides_with(&self, other: &Hitbox) -> Result<bool> {
        use Hitbox as H;
        match (self, other) {
            (H::Circle(a), H::Circle(b)) => Ok(a.collides_with(b)),
            (H::Circle(a), H::Rect(b)) => Ok(a.collides_with(b)),
            (H::Rect(a), H::Circle(b)) => Ok(a.collides_with(b)),
            (H::Rect(a), H::Rect(b)) => Ok(a.collides_with(b)),
            (H::Rect(a), H::Polygon(b)) => Ok(a.collides_with(b)),
            (H::Polygon(a), H::Rect(b)) => Ok(a.collides_with(b)),
            (H::Group(g), _) => any_member(g, |m| m.collides_with(other)),
            (_, H::Group(g)) => any_member(g, |m| self.collides_with(m)),
            (H::Circle(_), H::Polygon(_))
            | (H::Polygon(_), H::Circle(_))
            | (H::Polygon(_), H::Polygon(_)) => Err(HitboxError::unsupported(
                Operation::CollidesWith,
                self.kind(),
                other.kind(),
            )),
        }
    }

    /// Displacement [`Hitbox::resolve_collision`] would apply to `self`, `None` if not colliding.
    ///
    /// Against a group, this is the sum of pushing `self` out of every overlapping member,
    /// one member at a time in member order. A later push can reintroduce overlap with an
    /// earlier member; there is no second pass.
    pub fn penetration(&self, other: &Hitbox) -> Result<Option<Vector>> {
        use Hitbox as H;
        match (self, other) {
            (H::Circle(a), H::Circle(b)) => Ok(a.penetration(b)),
            (H::Circle(a), H::Rect(b)) => Ok(a.penetration(b)),
            (H::Rect(a), H::Circle(b)) => Ok(a.penetration(b)),
            (H::Rect(a), H::Rect(b)) => Ok(a.penetration(b)),
            (H::Circle(_) | H::Rect(_), H::Group(g)) => {
                let mut moved = self.clone();
                let mut total: Option<Vector> = None;
                for (i, member) in g.members().iter().enumerate() {
                    if let Some(push) = moved.penetration(&Hitbox::from(*member))? {
                        trace!("[RC] pushed out of group member {i} by {push:?}");
                        moved.translate(push);
                        *total.get_or_insert(Vector::ZERO) += push;
                    }
                }
                Ok(total)
            }
            (H::Circle(_) | H::Rect(_), H::Polygon(_)) | (H::Group(_) | H::Polygon(_), _) => {
                Err(HitboxError::unsupported(
                    Operation::ResolveCollision,
                    self.kind(),
                    other.kind(),
                ))
            }
        }
    }

    /// If colliding, moves `self` so that it just touches `other`. Only circles and rectangles can be moved.
    pub fn resolve_collision(&mut self, other: &Hitbox) -> Result<()> {
        if let Some(push) = self.penetration(other)? {
            self.translate(push);
        }
        Ok(())
    }

    /// Distance between the boundaries of `self` and `other`.
    /// Against a group, the member with the smallest distance wins, the first one on ties.
    pub fn distance_to(&self, other: &Hitbox) -> Result<CollisionRecord> {
        use Hitbox as H;
        match (self, other) {
            (H::Polygon(_), _) | (_, H::Polygon(_)) => Err(HitboxError::unsupported(
                Operation::DistanceTo,
                self.kind(),
                other.kind(),
            )),
            (H::Circle(a), H::Circle(b)) => Ok(a.distance_to(b)),
            (H::Circle(a), H::Rect(b)) => Ok(a.distance_to(b)),
            (H::Rect(a), H::Circle(b)) => Ok(a.distance_to(b)),
            (H::Rect(a), H::Rect(b)) => Ok(a.distance_to(b)),
            (H::Group(g), _) => closest_member(g, |m| m.distance_to(other)),
            (_, H::Group(g)) => closest_member(g, |m| self.distance_to(m)),
        }
    }

    /// First crossing of the segment `a → b` with the boundary of `self`, nearest to `a`.
    ///
    /// Segments starting inside differ per kind: a circle reports the point where the
    /// segment exits, a rectangle reports `a` itself with the normal of its closest side.
    /// Groups inherit this from whichever member is hit first.
    pub fn intersects_line(&self, a: &Vector, b: &Vector) -> Result<Option<LineIntersection>> {
        match self {
            Hitbox::Circle(c) => Ok(c.intersects_line(a, b)),
            Hitbox::Rect(r) => Ok(r.intersects_line(a, b)),
            Hitbox::Group(g) => Ok(g.intersects_line(a, b)),
            Hitbox::Polygon(_) => Err(HitboxError::unsupported_for(
                Operation::IntersectsLine,
                HitboxKind::Polygon,
            )),
        }
    }

    /// Whether `point` lies strictly inside `self`, points on the boundary are not inside.
    pub fn is_point_inside(&self, point: &Vector) -> bool {
        match self {
            Hitbox::Circle(c) => c.contains_point(point),
            Hitbox::Rect(r) => r.contains_point(point),
            Hitbox::Group(g) => g.contains_point(point),
            Hitbox::Polygon(p) => p.contains_point(point),
        }
    }

    /// Random point inside `self`, see [`Hitbox::random_point_with`]
    pub fn random_point(&self, rng: &mut impl Rng) -> Result<Vector> {
        self.random_point_with(rng, &SamplingConfig::default())
    }

    /// Random point inside `self`.
    ///
    /// Uniform over the area for circles and rectangles. Groups first pick a member uniformly.
    /// Polygons use rejection sampling and fail after `config.max_polygon_attempts` misses.
    pub fn random_point_with(&self, rng: &mut impl Rng, config: &SamplingConfig) -> Result<Vector> {
        match self {
            Hitbox::Circle(c) => Ok(c.random_point(rng)),
            Hitbox::Rect(r) => Ok(r.random_point(rng)),
            Hitbox::Group(g) => Ok(g.random_point(rng)),
            Hitbox::Polygon(p) => p.random_point(rng, config.max_polygon_attempts),
        }
    }

    /// Tightest axis-aligned rectangle containing `self`
    pub fn to_rect(&self) -> Rect {
        match self {
            Hitbox::Circle(c) => c.bbox(),
            Hitbox::Rect(r) => *r,
            Hitbox::Group(g) => g.bbox(),
            Hitbox::Polygon(p) => p.bbox(),
        }
    }

    /// Position of a circle, midpoint of a rectangle, center of the bounding rectangle otherwise
    pub fn center(&self) -> Vector {
        match self {
            Hitbox::Circle(c) => c.center(),
            Hitbox::Rect(r) => r.center(),
            Hitbox::Group(g) => g.center(),
            Hitbox::Polygon(p) => p.center(),
        }
    }

    /// Scales in place.
    /// Circles scale their radius, rectangles scale around their own center,
    /// groups scale every member around that member's center,
    /// and polygons scale every point around the *origin*.
    pub fn scale(&mut self, factor: f64) {
        match self {
            Hitbox::Circle(c) => c.scale(factor),
            Hitbox::Rect(r) => r.scale(factor),
            Hitbox::Group(g) => g.scale(factor),
            Hitbox::Polygon(p) => p.scale(factor),
        }
    }

    pub fn translate(&mut self, offset: Vector) {
        match self {
            Hitbox::Circle(c) => c.position += offset,
            Hitbox::Rect(r) => r.translate(offset),
            Hitbox::Group(g) => g.translate(offset),
            Hitbox::Polygon(p) => p.translate(offset),
        }
    }

    /// Returns a transformed copy of `self`, leaving `self` untouched.
    /// A returned group has the translation of `t` as its anchor.
    pub fn transformed(&self, t: &Transformation) -> Hitbox {
        match self {
            Hitbox::Circle(c) => Hitbox::Circle(c.transform_clone(t)),
            Hitbox::Rect(r) => Hitbox::Rect(r.transform_clone(t)),
            Hitbox::Group(g) => Hitbox::Group(g.transform_clone(t)),
            Hitbox::Polygon(p) => Hitbox::Polygon(p.transform_clone(t)),
        }
    }

    /// Tagged record, see [`ExtHitbox`](crate::io::ext_repr::ExtHitbox)
    pub fn to_json(&self) -> Value {
        export_hitbox(self).to_value()
    }

    /// Decodes a tagged record, failing with [`HitboxError::UnrecognizedKind`] for unknown tags
    pub fn from_json(value: &Value) -> Result<Hitbox> {
        import_hitbox(&ExtHitbox::from_value(value)?)
    }

    pub fn from_json_str(json: &str) -> Result<Hitbox> {
        let value: Value = serde_json::from_str(json)?;
        Hitbox::from_json(&value)
    }

    /// Returns a transformed copy of `self`.
    /// A group also records the translation of `t` as its own anchor, see [`Group::anchor`].
    /// Other kinds are left untouched.
    pub fn transform(&mut self, t: &Transformation) -> Hitbox {
        match self {
            Hitbox::Group(g) => Hitbox::Group(g.transform_anchored(t)),
            _ => self.transformed(t),
        }
    }
}

impl Serialize for Hitbox {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        export_hitbox(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Hitbox {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let ext = ExtHitbox::deserialize(deserializer)?;
        import_hitbox(&ext).map_err(D::Error::custom)
    }
}

/// Short-circuits on the first member that collides. A member for which the
/// operation is unsupported fails the whole query, unless an earlier member already collided.
fn any_member(g: &Group, mut f: impl FnMut(&Hitbox) -> Result<bool>) -> Result<bool> {
    for member in g.members() {
        if f(&Hitbox::from(*member))? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// First member with the smallest distance, stays at infinity for an empty group
fn closest_member(
    g: &Group,
    mut f: impl FnMut(&Hitbox) -> Result<CollisionRecord>,
) -> Result<CollisionRecord> {
    let mut closest = CollisionRecord {
        distance: f64::INFINITY,
        collided: false,
    };
    for member in g.members() {
        let record = f(&Hitbox::from(*member))?;
        if record.distance < closest.distance {
            closest = record;
        }
    }
    Ok(closest)
}

impl From<Circle> for Hitbox {
    fn from(c: Circle) -> Self {
        Hitbox::Circle(c)
    }
}

impl From<Rect> for Hitbox {
    fn from(r: Rect) -> Self {
        Hitbox::Rect(r)
    }
}

impl From<Group> for Hitbox {
    fn from(g: Group) -> Self {
        Hitbox::Group(g)
    }
}

impl From<Polygon> for Hitbox {
    fn from(p: Polygon) -> Self {
        Hitbox::Polygon(p)
    }
}

impl From<GroupMember> for Hitbox {
    fn from(m: GroupMember) -> Self {
        match m {
            GroupMember::Circle(c) => Hitbox::Circle(c),
            GroupMember::Rect(r) => Hitbox::Rect(r),
        }
    }
}
