//! Triangles with a cached circumcenter.

use crate::error::{GeometryError, Result};
use crate::primitives::{Circle2, Edge2, Point2, PointKey, Slope};
use num_traits::Float;
use std::cell::OnceCell;
use std::hash::{Hash, Hasher};

/// Hashable identity of a [`Triangle`]: its vertex keys in sorted order.
pub type TriangleKey = [PointKey; 3];

/// A triangle given by three points.
///
/// The circumcenter is computed on first request and cached, so repeated
/// queries on the same triangle always return the identical point.
///
/// Equality and hashing use the sorted vertex triple, which is the same as
/// comparing the three canonical edges.
#[derive(Debug, Clone)]
pub struct Triangle<F> {
    vertices: [Point2<F>; 3],
    edges: [Edge2<F>; 3],
    center: OnceCell<Point2<F>>,
}

impl<F: Float> Triangle<F> {
    /// Creates a triangle from three points.
    pub fn new(p1: Point2<F>, p2: Point2<F>, p3: Point2<F>) -> Self {
        Self {
            vertices: [p1, p2, p3],
            edges: [Edge2::new(p1, p2), Edge2::new(p1, p3), Edge2::new(p2, p3)],
            center: OnceCell::new(),
        }
    }

    /// The vertices in construction order.
    #[inline]
    pub fn vertices(&self) -> [Point2<F>; 3] {
        self.vertices
    }

    /// The three canonical edges: `p1p2`, `p1p3`, `p2p3`.
    #[inline]
    pub fn edges(&self) -> &[Edge2<F>; 3] {
        &self.edges
    }

    /// Returns `true` if `p` is one of the vertices.
    #[inline]
    pub fn contains_vertex(&self, p: Point2<F>) -> bool {
        let k = p.key();
        self.vertices.iter().any(|v| v.key() == k)
    }

    /// The vertex that is not an endpoint of `edge`.
    ///
    /// Returns `None` if `edge` is not an edge of this triangle.
    pub fn opposite_vertex(&self, edge: &Edge2<F>) -> Option<Point2<F>> {
        if !self.edges.contains(edge) {
            return None;
        }
        edge.opposite(self.vertices)
    }

    /// Returns the canonical key of this triangle.
    pub fn key(&self) -> TriangleKey {
        let mut keys = self.vertices.map(|v| v.key());
        keys.sort_unstable();
        keys
    }

    /// Intersection of the perpendicular bisectors of `p1p2` and `p1p3`.
    ///
    /// # Errors
    ///
    /// [`GeometryError::DegenerateGeometry`] if the two bisectors are
    /// parallel, which means the vertices are collinear or repeated.
    ///
    /// # Example
    ///
    /// ```
    /// use tessellum::primitives::Point2;
    /// use tessellum::triangulation::Triangle;
    ///
    /// let t = Triangle::new(
    ///     Point2::new(0.0_f64, 0.0),
    ///     Point2::new(10.0, 0.0),
    ///     Point2::new(5.0, 10.0),
    /// );
    /// assert_eq!(t.circumcenter().unwrap(), Point2::new(5.0, 3.75));
    /// ```
    pub fn circumcenter(&self) -> Result<Point2<F>> {
        if let Some(&center) = self.center.get() {
            return Ok(center);
        }
        let center = bisector_intersection(&self.edges[0], &self.edges[1])
            .ok_or_else(|| self.degenerate())?;
        Ok(*self.center.get_or_init(|| center))
    }

    /// The circle through all three vertices.
    pub fn circumcircle(&self) -> Result<Circle2<F>> {
        let center = self.circumcenter()?;
        Ok(Circle2::new(center, center.distance(self.vertices[0])))
    }

    fn degenerate(&self) -> GeometryError {
        GeometryError::DegenerateGeometry {
            vertices: self.vertices.map(|v| v.to_f64_pair()),
        }
    }
}

impl<F: Float> PartialEq for Triangle<F> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<F: Float> Eq for Triangle<F> {}

impl<F: Float> Hash for Triangle<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

/// Solves for the point where the perpendicular bisectors of two edges meet.
///
/// Axis-aligned bisectors are handled directly so the general solve never
/// divides by a zero or missing slope. Returns `None` when the bisectors are
/// parallel or the solution is not finite.
fn bisector_intersection<F: Float>(e1: &Edge2<F>, e2: &Edge2<F>) -> Option<Point2<F>> {
    let (m1, m2) = (e1.midpoint(), e2.midpoint());
    let (s1, s2) = (e1.perp_slope(), e2.perp_slope());
    if s1 == s2 {
        return None;
    }

    let zero = F::zero();
    let (x, y) = match (s1, s2) {
        (Slope::Vertical, Slope::Vertical) => return None,
        (Slope::Vertical, Slope::Finite(k2)) => {
            let x = m1.x;
            (x, k2 * (x - m2.x) + m2.y)
        }
        (Slope::Finite(k1), Slope::Vertical) => {
            let x = m2.x;
            (x, k1 * (x - m1.x) + m1.y)
        }
        (Slope::Finite(k1), Slope::Finite(k2)) if k1 == zero => {
            let y = m1.y;
            ((y - m2.y) / k2 + m2.x, y)
        }
        (Slope::Finite(k1), Slope::Finite(k2)) if k2 == zero => {
            let y = m2.y;
            ((y - m1.y) / k1 + m1.x, y)
        }
        (Slope::Finite(k1), Slope::Finite(k2)) => {
            let x = (k1 * m1.x - m1.y - k2 * m2.x + m2.y) / (k1 - k2);
            (x, k1 * (x - m1.x) + m1.y)
        }
    };

    let center = Point2::new(x, y);
    center.is_finite().then_some(center)
}
