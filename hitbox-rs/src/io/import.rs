use log::debug;

use crate::error::{HitboxError, Result};
use crate::geometry::primitives::{Circle, Group, GroupMember, Polygon, Rect};
use crate::hitbox::Hitbox;
use crate::io::ext_repr::{ExtCircle, ExtHitbox, ExtRect};

/// Converts an external representation into a [`Hitbox`], validating every shape invariant.
pub fn import_hitbox(ext: &ExtHitbox) -> Result<Hitbox> {
    let hitbox = match ext {
        ExtHitbox::Circle(c) => Hitbox::Circle(import_circle(c)?),
        ExtHitbox::Rect(r) => Hitbox::Rect(import_rect(r)?),
        ExtHitbox::Group(g) => {
            let members = g
                .hitboxes
                .iter()
                .map(|h| -> Result<GroupMember> {
                    match h {
                        ExtHitbox::Circle(c) => Ok(GroupMember::Circle(import_circle(c)?)),
                        ExtHitbox::Rect(r) => Ok(GroupMember::Rect(import_rect(r)?)),
                        other => Err(HitboxError::InvalidGroupMember(other.kind())),
                    }
                })
                .collect::<Result<Vec<_>>>()?;
            let group = Group::try_new(members)?;
            match g.position {
                Some(anchor) => Hitbox::Group(group.with_anchor(anchor)),
                None => Hitbox::Group(group),
            }
        }
        ExtHitbox::Polygon(p) => Hitbox::Polygon(Polygon::try_new(p.points.clone())?),
    };
    debug!("[IO] imported {} hitbox", hitbox.kind());
    Ok(hitbox)
}

fn import_circle(c: &ExtCircle) -> Result<Circle> {
    Ok(Circle::try_new(c.position, c.radius)?)
}

fn import_rect(r: &ExtRect) -> Result<Rect> {
    Ok(Rect::try_new(r.min, r.max)?)
}
