use crate::geometry::primitives::{Circle, GroupMember, Rect, Vector};
use crate::hitbox::Hitbox;
use crate::io::ext_repr::{ExtCircle, ExtGroup, ExtHitbox, ExtPolygon, ExtRect};

pub fn export_hitbox(hitbox: &Hitbox) -> ExtHitbox {
    match hitbox {
        Hitbox::Circle(c) => ExtHitbox::Circle(export_circle(c)),
        Hitbox::Rect(r) => ExtHitbox::Rect(export_rect(r)),
        Hitbox::Group(g) => {
            let hitboxes = g
                .members()
                .iter()
                .map(|m| match m {
                    GroupMember::Circle(c) => ExtHitbox::Circle(export_circle(c)),
                    GroupMember::Rect(r) => ExtHitbox::Rect(export_rect(r)),
                })
                .collect();
            let anchor = g.anchor();
            let position = (anchor != Vector::ZERO).then_some(anchor);
            ExtHitbox::Group(ExtGroup { hitboxes, position })
        }
        Hitbox::Polygon(p) => ExtHitbox::Polygon(ExtPolygon {
            points: p.points().to_vec(),
        }),
    }
}

fn export_circle(c: &Circle) -> ExtCircle {
    ExtCircle {
        radius: c.radius,
        position: c.position,
    }
}

fn export_rect(r: &Rect) -> ExtRect {
    ExtRect {
        min: r.min,
        max: r.max,
    }
}
