//! Floating-point geometric primitives.

mod circle2;
mod edge2;
mod point2;
mod segment2;
mod slope;
mod vec2;

pub use circle2::Circle2;
pub use edge2::{make_edge, Edge2, EdgeKey};
pub use point2::{Point2, PointKey};
pub use segment2::Segment2;
pub use slope::Slope;
pub use vec2::Vec2;
