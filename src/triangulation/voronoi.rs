//! Bounded Voronoi edges from a Delaunay triangulation.
//!
//! The Voronoi diagram is the dual of the Delaunay triangulation:
//! - Each Delaunay triangle's circumcenter becomes a Voronoi vertex
//! - Each Delaunay edge shared by two triangles becomes a Voronoi edge
//!   between their circumcenters
//! - Each hull edge becomes a ray from its triangle's circumcenter,
//!   perpendicular to the edge and pointing away from the triangle
//!
//! Everything is clipped to a caller-supplied rectangle, so the output is a
//! flat list of finite segments.
//!
//! Each interior Voronoi edge is emitted once: the extractor walks the
//! distinct Delaunay edges, not the three sides of every triangle.
//!
//! # Example
//!
//! ```
//! use tessellum::bounds::Aabb2;
//! use tessellum::triangulation::{triangulate, voronoi};
//! use tessellum::Point2;
//!
//! let sites: Vec<Point2<f64>> = vec![
//!     Point2::new(2.0, 2.0),
//!     Point2::new(4.0, 5.0),
//!     Point2::new(6.0, 6.0),
//!     Point2::new(3.0, 8.0),
//!     Point2::new(9.0, 4.0),
//!     Point2::new(5.0, 8.0),
//! ];
//! let bounds = Aabb2::from_bounds(0.0, 0.0, 12.0, 12.0);
//!
//! let triangulation = triangulate(&sites).unwrap();
//! let edges = voronoi(&triangulation, &bounds).unwrap();
//!
//! assert!(!edges.is_empty());
//! for e in &edges {
//!     assert!(bounds.contains_point(e.start()) && bounds.contains_point(e.end()));
//! }
//! ```

use super::delaunay::{triangulate, Triangulation};
use super::triangle::Triangle;
use crate::bounds::Aabb2;
use crate::error::Result;
use crate::primitives::{Edge2, Point2, Segment2, Slope, Vec2};
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// A clipped Voronoi edge, serialised as `{x1, y1, x2, y2}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoronoiEdge<F> {
    pub x1: F,
    pub y1: F,
    pub x2: F,
    pub y2: F,
}

impl<F: Float> VoronoiEdge<F> {
    #[inline]
    pub fn new(start: Point2<F>, end: Point2<F>) -> Self {
        Self {
            x1: start.x,
            y1: start.y,
            x2: end.x,
            y2: end.y,
        }
    }

    #[inline]
    pub fn start(&self) -> Point2<F> {
        Point2::new(self.x1, self.y1)
    }

    #[inline]
    pub fn end(&self) -> Point2<F> {
        Point2::new(self.x2, self.y2)
    }

    #[inline]
    pub fn to_segment(&self) -> Segment2<F> {
        Segment2::new(self.start(), self.end())
    }
}

impl<F: Float> From<Segment2<F>> for VoronoiEdge<F> {
    fn from(s: Segment2<F>) -> Self {
        Self::new(s.start, s.end)
    }
}

/// Extracts the Voronoi edges of a triangulation, clipped to `bounds`.
///
/// Interior edges that fall entirely outside `bounds` are dropped, as are
/// zero-length edges (for example between two triangles of a cocircular
/// quadrilateral, which share a circumcenter).
///
/// # Errors
///
/// - [`GeometryError::InvalidBoundingBox`](crate::GeometryError::InvalidBoundingBox)
///   if `bounds` is empty, inverted or not finite
/// - [`GeometryError::DegenerateGeometry`](crate::GeometryError::DegenerateGeometry)
///   if a triangle's circumcenter cannot be solved
pub fn voronoi<F: Float>(
    triangulation: &Triangulation<F>,
    bounds: &Aabb2<F>,
) -> Result<Vec<VoronoiEdge<F>>> {
    bounds.validate()?;
    let triangles = triangulation.triangles();
    let mut edges = Vec::new();
    let mut rays = 0usize;

    for adj in triangulation.edge_adjacency() {
        let t1 = &triangles[adj.first];
        let c1 = t1.circumcenter()?;

        let clipped = match adj.second {
            Some(other) => {
                let c2 = triangles[other].circumcenter()?;
                bounds.clip_segment(c1, c2)
            }
            None => {
                rays += 1;
                hull_ray_direction(t1, &adj.edge).and_then(|dir| bounds.clip_ray(c1, dir))
            }
        };

        match clipped {
            Some(seg) if !seg.is_degenerate(F::zero()) => edges.push(VoronoiEdge::from(seg)),
            _ => {}
        }
    }

    tracing::debug!(
        triangles = triangles.len(),
        hull_rays = rays,
        edges = edges.len(),
        "extracted voronoi edges"
    );

    Ok(edges)
}

/// Triangulates `points` and extracts their Voronoi edges in one call.
///
/// # Example
///
/// ```
/// use tessellum::bounds::Aabb2;
/// use tessellum::triangulation::voronoi_from_points;
/// use tessellum::Point2;
///
/// let sites = [
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(10.0, 0.0),
///     Point2::new(5.0, 10.0),
/// ];
/// let edges = voronoi_from_points(&sites, &Aabb2::from_bounds(-20.0, -20.0, 30.0, 30.0)).unwrap();
///
/// // One triangle: three hull rays from its circumcenter.
/// assert_eq!(edges.len(), 3);
/// ```
pub fn voronoi_from_points<F: Float>(
    points: &[Point2<F>],
    bounds: &Aabb2<F>,
) -> Result<Vec<VoronoiEdge<F>>> {
    let triangulation = triangulate(points)?;
    voronoi(&triangulation, bounds)
}

/// Direction of the Voronoi ray for a hull edge of `tri`.
///
/// The ray follows the edge's perpendicular bisector and points to the side
/// of the edge opposite the triangle's third vertex.
fn hull_ray_direction<F: Float>(tri: &Triangle<F>, edge: &Edge2<F>) -> Option<Vec2<F>> {
    let third = tri.opposite_vertex(edge)?;
    let dir = match edge.perp_slope() {
        Slope::Vertical => Vec2::new(F::zero(), F::one()),
        Slope::Finite(m) => Vec2::new(F::one(), m),
    };
    if dir.dot(third - edge.midpoint()) > F::zero() {
        Some(-dir)
    } else {
        Some(dir)
    }
}
