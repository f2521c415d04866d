mod circle;
mod edge;
mod group;
mod polygon;
mod rect;
mod vector;

#[doc(inline)]
pub use circle::Circle;
#[doc(inline)]
pub use edge::Edge;
#[doc(inline)]
pub use group::{Group, GroupMember};
#[doc(inline)]
pub use polygon::Polygon;
#[doc(inline)]
pub use rect::Rect;
#[doc(inline)]
pub use vector::Vector;

pub(crate) use vector::EPSILON;
