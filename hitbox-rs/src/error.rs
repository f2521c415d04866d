use std::fmt::{Display, Formatter};

use crate::hitbox::HitboxKind;

/// Contract operations that can be refused for a given combination of hitbox kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    CollidesWith,
    ResolveCollision,
    DistanceTo,
    IntersectsLine,
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Operation::CollidesWith => "collides_with",
            Operation::ResolveCollision => "resolve_collision",
            Operation::DistanceTo => "distance_to",
            Operation::IntersectsLine => "intersects_line",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum HitboxError {
    /// The operation has no defined meaning for this kind (or pair of kinds).
    #[error("unsupported operation {operation} for {kind}{}", fmt_other(.other))]
    Unsupported {
        operation: Operation,
        kind: HitboxKind,
        other: Option<HitboxKind>,
    },

    /// The `type` tag of a serialized hitbox is outside the closed set of kinds.
    #[error("unrecognized hitbox kind: {0}")]
    UnrecognizedKind(String),

    #[error("a group can only contain circles and rectangles, found {0}")]
    InvalidGroupMember(HitboxKind),

    #[error("no point inside the polygon was sampled after {attempts} attempts")]
    SamplingExhausted { attempts: usize },

    #[error("malformed hitbox record: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A decoded record violates a shape invariant (negative radius, inverted rectangle, ...).
    #[error(transparent)]
    InvalidGeometry(#[from] anyhow::Error),
}

impl HitboxError {
    pub fn unsupported(operation: Operation, kind: HitboxKind, other: HitboxKind) -> Self {
        HitboxError::Unsupported {
            operation,
            kind,
            other: Some(other),
        }
    }

    pub fn unsupported_for(operation: Operation, kind: HitboxKind) -> Self {
        HitboxError::Unsupported {
            operation,
            kind,
            other: None,
        }
    }

    /// Whether this error is the refusal of an operation for some kind pair.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, HitboxError::Unsupported { .. })
    }
}

fn fmt_other(other: &Option<HitboxKind>) -> String {
    match other {
        Some(k) => format!(" against {k}"),
        None => String::new(),
    }
}

pub type Result<T, E = HitboxError> = std::result::Result<T, E>;
