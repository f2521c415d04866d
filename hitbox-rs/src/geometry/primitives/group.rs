use anyhow::{Result, ensure};
use ordered_float::OrderedFloat;
use rand::Rng;

use crate::geometry::Transformation;
use crate::geometry::geo_traits::{IntersectsLine, Shape, Transformable};
use crate::geometry::primitives::{Circle, Rect, Vector};
use crate::geometry::raycast::LineIntersection;

/// Primitive that can be part of a [`Group`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GroupMember {
    Circle(Circle),
    Rect(Rect),
}

impl GroupMember {
    pub fn scale(&mut self, factor: f64) {
        match self {
            GroupMember::Circle(c) => c.scale(factor),
            GroupMember::Rect(r) => r.scale(factor),
        }
    }

    pub fn translate(&mut self, offset: Vector) {
        match self {
            GroupMember::Circle(c) => c.position += offset,
            GroupMember::Rect(r) => r.translate(offset),
        }
    }

    pub fn random_point(&self, rng: &mut impl Rng) -> Vector {
        match self {
            GroupMember::Circle(c) => c.random_point(rng),
            GroupMember::Rect(r) => r.random_point(rng),
        }
    }
}

impl Transformable for GroupMember {
    fn transform(&mut self, t: &Transformation) -> &mut Self {
        match self {
            GroupMember::Circle(c) => {
                c.transform(t);
            }
            GroupMember::Rect(r) => {
                r.transform(t);
            }
        };
        self
    }
}

impl Shape for GroupMember {
    fn center(&self) -> Vector {
        match self {
            GroupMember::Circle(c) => c.center(),
            GroupMember::Rect(r) => r.center(),
        }
    }

    fn bbox(&self) -> Rect {
        match self {
            GroupMember::Circle(c) => c.bbox(),
            GroupMember::Rect(r) => r.bbox(),
        }
    }

    fn contains_point(&self, point: &Vector) -> bool {
        match self {
            GroupMember::Circle(c) => c.contains_point(point),
            GroupMember::Rect(r) => r.contains_point(point),
        }
    }
}

impl IntersectsLine for GroupMember {
    fn intersects_line(&self, a: &Vector, b: &Vector) -> Option<LineIntersection> {
        match self {
            GroupMember::Circle(c) => c.intersects_line(a, b),
            GroupMember::Rect(r) => r.intersects_line(a, b),
        }
    }
}

impl From<Circle> for GroupMember {
    fn from(c: Circle) -> Self {
        GroupMember::Circle(c)
    }
}

impl From<Rect> for GroupMember {
    fn from(r: Rect) -> Self {
        GroupMember::Rect(r)
    }
}

/// Compound shape: the union of its circles and rectangles.
///
/// A group has no geometry of its own, every query is answered by its members.
/// The anchor is the translation of the last [`Group::transform_anchored`] call
/// and is only kept so callers can read it back.
#[derive(Clone, Debug, PartialEq)]
pub struct Group {
    anchor: Vector,
    members: Vec<GroupMember>,
}

impl Group {
    pub fn try_new(members: Vec<GroupMember>) -> Result<Self> {
        ensure!(!members.is_empty(), "group must have at least one member");
        Ok(Group {
            anchor: Vector::ZERO,
            members,
        })
    }

    pub fn with_anchor(mut self, anchor: Vector) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn members(&self) -> &[GroupMember] {
        &self.members
    }

    /// Translation of the last anchored transform, the origin if there was none
    pub fn anchor(&self) -> Vector {
        self.anchor
    }

    /// Returns the transformed group and records the translation as the anchor of `self`.
    pub fn transform_anchored(&mut self, t: &Transformation) -> Group {
        self.anchor = t.translation;
        self.transform_clone(t)
    }

    /// Scales every member around its own center
    pub fn scale(&mut self, factor: f64) {
        self.members.iter_mut().for_each(|m| m.scale(factor));
    }

    pub fn translate(&mut self, offset: Vector) {
        self.members.iter_mut().for_each(|m| m.translate(offset));
    }

    /// Picks a member uniformly, then samples within it.
    /// Small members are therefore oversampled compared to an area-uniform distribution.
    pub fn random_point(&self, rng: &mut impl Rng) -> Vector {
        let i = rng.random_range(0..self.members.len());
        self.members[i].random_point(rng)
    }
}

impl Transformable for Group {
    fn transform(&mut self, t: &Transformation) -> &mut Self {
        let Group { anchor, members } = self;
        members.iter_mut().for_each(|m| {
            m.transform(t);
        });
        *anchor = t.translation;
        self
    }
}

impl Shape for Group {
    /// Center of the bounding box, not the centroid
    fn center(&self) -> Vector {
        self.bbox().center()
    }

    fn bbox(&self) -> Rect {
        self.members
            .iter()
            .map(|m| m.bbox())
            .reduce(|a, b| Rect::bounding_rect(&a, &b))
            .unwrap_or(Rect::new(self.anchor, self.anchor))
    }

    fn contains_point(&self, point: &Vector) -> bool {
        self.members.iter().any(|m| m.contains_point(point))
    }
}

impl IntersectsLine for Group {
    /// Intersection closest to `a` over all members, the first member wins ties
    fn intersects_line(&self, a: &Vector, b: &Vector) -> Option<LineIntersection> {
        self.members
            .iter()
            .filter_map(|m| m.intersects_line(a, b))
            .min_by_key(|i| OrderedFloat(i.point.sq_distance(a)))
    }
}
