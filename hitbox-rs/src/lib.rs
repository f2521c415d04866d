//! 2D hitbox geometry: collision tests, penetration resolution, distance queries,
//! line intersections, point containment, random sampling, quarter-turn transforms
//! and serialization for circles, axis-aligned rectangles, groups and polygons.

/// Errors produced by hitbox operations
pub mod error;

/// Geometric primitives, pair routines and the traits tying them together
pub mod geometry;

/// The [`Hitbox`](hitbox::Hitbox) tagged union and its shape contract
pub mod hitbox;

/// Encoding hitboxes into and decoding them out of their serialized form
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

#[doc(inline)]
pub use error::{HitboxError, Operation, Result};
#[doc(inline)]
pub use hitbox::{Hitbox, HitboxKind};
