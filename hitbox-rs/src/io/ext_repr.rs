//! Every record is tagged with its kind code: `{"type": 0, "radius": 2.0, "position": {"x": 0.0, "y": 0.0}}`.
//! See [`HitboxKind`] for the codes.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Value, json};

use crate::error::{HitboxError, Result};
use crate::geometry::primitives::Vector;
use crate::hitbox::HitboxKind;

/// External representation of a [`Circle`](crate::geometry::primitives::Circle)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtCircle {
    pub radius: f64,
    pub position: Vector,
}

/// External representation of a [`Rect`](crate::geometry::primitives::Rect)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtRect {
    pub min: Vector,
    pub max: Vector,
}

/// External representation of a [`Group`](crate::geometry::primitives::Group).
/// Only circles and rectangles are valid members.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtGroup {
    pub hitboxes: Vec<ExtHitbox>,
    /// Anchor of the group, omitted when never transformed
    pub position: Option<Vector>,
}

/// External representation of a [`Polygon`](crate::geometry::primitives::Polygon)
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPolygon {
    pub points: Vec<Vector>,
}

/// Tagged union of all external representations
#[derive(Clone, Debug, PartialEq)]
pub enum ExtHitbox {
    Circle(ExtCircle),
    Rect(ExtRect),
    Group(ExtGroup),
    Polygon(ExtPolygon),
}

impl ExtHitbox {
    pub fn kind(&self) -> HitboxKind {
        match self {
            ExtHitbox::Circle(_) => HitboxKind::Circle,
            ExtHitbox::Rect(_) => HitboxKind::Rect,
            ExtHitbox::Group(_) => HitboxKind::Group,
            ExtHitbox::Polygon(_) => HitboxKind::Polygon,
        }
    }

    pub fn to_value(&self) -> Value {
        let mut value = match self {
            ExtHitbox::Circle(c) => json!({
                "radius": c.radius,
                "position": vector_value(&c.position),
            }),
            ExtHitbox::Rect(r) => json!({
                "min": vector_value(&r.min),
                "max": vector_value(&r.max),
            }),
            ExtHitbox::Group(g) => {
                let mut value = json!({
                    "hitboxes": g.hitboxes.iter().map(ExtHitbox::to_value).collect::<Vec<_>>(),
                });
                if let Some(position) = &g.position {
                    value["position"] = vector_value(position);
                }
                value
            }
            ExtHitbox::Polygon(p) => json!({
                "points": p.points.iter().map(vector_value).collect::<Vec<_>>(),
            }),
        };
        value["type"] = json!(self.kind().code());
        value
    }

    /// Checks the `type` tag before decoding the rest of the record.
    pub fn from_value(value: &Value) -> Result<Self> {
        let code = match value.get("type") {
            Some(Value::Number(n)) => n
                .as_u64()
                .ok_or_else(|| HitboxError::UnrecognizedKind(n.to_string()))?,
            Some(other) => return Err(HitboxError::UnrecognizedKind(other.to_string())),
            None => return Err(malformed("missing field `type`")),
        };

        let ext = match HitboxKind::try_from(code)? {
            HitboxKind::Circle => ExtHitbox::Circle(ExtCircle::deserialize(value)?),
            HitboxKind::Rect => ExtHitbox::Rect(ExtRect::deserialize(value)?),
            HitboxKind::Polygon => ExtHitbox::Polygon(ExtPolygon::deserialize(value)?),
            HitboxKind::Group => {
                let hitboxes = value
                    .get("hitboxes")
                    .and_then(Value::as_array)
                    .ok_or_else(|| malformed("missing or invalid field `hitboxes`"))?
                    .iter()
                    .map(ExtHitbox::from_value)
                    .collect::<Result<Vec<_>>>()?;
                let position = value
                    .get("position")
                    .map(Vector::deserialize)
                    .transpose()?;
                ExtHitbox::Group(ExtGroup { hitboxes, position })
            }
        };
        Ok(ext)
    }
}

impl Serialize for ExtHitbox {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ExtHitbox {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        ExtHitbox::from_value(&value).map_err(D::Error::custom)
    }
}

fn vector_value(v: &Vector) -> Value {
    json!({ "x": v.x, "y": v.y })
}

fn malformed(msg: &str) -> HitboxError {
    HitboxError::Malformed(serde_json::Error::custom(msg))
}
