use crate::geometry::Orientation;
use crate::geometry::primitives::Vector;

/// Placement of a shape's local geometry: a quarter-turn rotation about the local origin,
/// followed by a uniform scale, followed by a translation.
///
/// `apply(p) = translation + orientation.rotate(p) * scale`.
/// The order is fixed; shapes whose local geometry is not centered at the origin
/// end up somewhere else if it is changed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transformation {
    pub translation: Vector,
    pub scale: f64,
    pub orientation: Orientation,
}

impl Transformation {
    pub fn new(translation: Vector, scale: f64, orientation: Orientation) -> Self {
        debug_assert!(
            scale.is_finite() && scale >= 0.0,
            "invalid scale: {scale}"
        );
        Self {
            translation,
            scale,
            orientation,
        }
    }

    pub const fn empty() -> Self {
        Self {
            translation: Vector::ZERO,
            scale: 1.0,
            orientation: Orientation::Deg0,
        }
    }

    pub fn from_translation(translation: Vector) -> Self {
        Self {
            translation,
            ..Self::empty()
        }
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        debug_assert!(scale.is_finite() && scale >= 0.0, "invalid scale: {scale}");
        self.scale = scale;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn apply(&self, p: &Vector) -> Vector {
        self.translation + self.orientation.rotate(p) * self.scale
    }
}

impl Default for Transformation {
    fn default() -> Self {
        Self::empty()
    }
}
