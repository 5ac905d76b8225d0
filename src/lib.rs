//! tessellum - Delaunay triangulation and bounded Voronoi diagrams
//!
//! Builds a Delaunay triangulation of a static 2D point set with the
//! Bowyer-Watson algorithm and derives the Voronoi edges from it, clipping the
//! unbounded ones to a rectangle.
//!
//! ```
//! use tessellum::bounds::Aabb2;
//! use tessellum::{triangulate, voronoi, Point2};
//!
//! let points = [
//!     Point2::new(2.0_f64, 2.0),
//!     Point2::new(4.0, 5.0),
//!     Point2::new(9.0, 4.0),
//!     Point2::new(3.0, 8.0),
//! ];
//! let triangulation = triangulate(&points)?;
//! let edges = voronoi(&triangulation, &Aabb2::from_bounds(0.0, 0.0, 12.0, 12.0))?;
//! assert!(!edges.is_empty());
//! # Ok::<(), tessellum::GeometryError>(())
//! ```

pub mod bounds;
pub mod error;
pub mod io;
pub mod primitives;
pub mod tolerance;
pub mod triangulation;

pub use error::{GeometryError, Result};
pub use primitives::{make_edge, Circle2, Edge2, Point2, Segment2, Slope, Vec2};
pub use triangulation::{
    triangulate, triangulate_with, voronoi, voronoi_from_points, DelaunayOptions, Triangle,
    Triangulation, VoronoiEdge,
};
