/// Pairwise collision, penetration and distance routines between primitives
pub mod collision;

/// Set of traits representing the geometric queries & operations of the shape contract
pub mod geo_traits;

mod orientation;

/// Set of geometric primitives - atomic building blocks for the geometry module
pub mod primitives;

/// Segment intersection routines between a line and the primitives
pub mod raycast;

mod transformation;

#[doc(inline)]
pub use orientation::Orientation;

#[doc(inline)]
pub use transformation::Transformation;
