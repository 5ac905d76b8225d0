//! Canonical undirected edge between two points.

use super::{Point2, PointKey, Segment2, Slope, Vec2};
use num_traits::Float;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// An unordered pair of points with its perpendicular-bisector data.
///
/// Endpoints are stored in lexicographic order (x, then y), so `Edge2::new(a, b)`
/// and `Edge2::new(b, a)` are equal and hash identically. Midpoint, slope and
/// perpendicular slope are computed once at construction.
///
/// The endpoints must differ. A zero-length edge has no bisector; this is
/// not checked here.
///
/// # Example
///
/// ```
/// use tessellum::primitives::{Edge2, Point2, Slope};
///
/// let e = Edge2::new(Point2::new(4.0_f64, 0.0), Point2::new(0.0, 0.0));
/// assert_eq!(e.p1(), Point2::new(0.0, 0.0));
/// assert_eq!(e.midpoint(), Point2::new(2.0, 0.0));
/// assert_eq!(e.perp_slope(), Slope::Vertical);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Edge2<F> {
    p1: Point2<F>,
    p2: Point2<F>,
    midpoint: Point2<F>,
    slope: Slope<F>,
    perp_slope: Slope<F>,
}

/// Hashable identity of an [`Edge2`]: its canonical endpoint keys.
pub type EdgeKey = (PointKey, PointKey);

/// Builds the canonical edge between `p1` and `p2`.
#[inline]
pub fn make_edge<F: Float>(p1: Point2<F>, p2: Point2<F>) -> Edge2<F> {
    Edge2::new(p1, p2)
}

impl<F: Float> Edge2<F> {
    /// Creates a canonical edge.
    pub fn new(a: Point2<F>, b: Point2<F>) -> Self {
        let (p1, p2) = match a.lex_cmp(&b) {
            Ordering::Greater => (b, a),
            _ => (a, b),
        };
        let slope = Slope::between(p1, p2);
        Self {
            p1,
            p2,
            midpoint: p1.midpoint(p2),
            slope,
            perp_slope: slope.perpendicular(),
        }
    }

    /// The lexicographically smaller endpoint.
    #[inline]
    pub fn p1(&self) -> Point2<F> {
        self.p1
    }

    /// The lexicographically larger endpoint.
    #[inline]
    pub fn p2(&self) -> Point2<F> {
        self.p2
    }

    #[inline]
    pub fn midpoint(&self) -> Point2<F> {
        self.midpoint
    }

    #[inline]
    pub fn slope(&self) -> Slope<F> {
        self.slope
    }

    /// Slope of the perpendicular bisector.
    #[inline]
    pub fn perp_slope(&self) -> Slope<F> {
        self.perp_slope
    }

    /// Vector from `p1` to `p2`.
    #[inline]
    pub fn direction(&self) -> Vec2<F> {
        self.p2 - self.p1
    }

    /// Returns `true` if `p` is one of the endpoints.
    #[inline]
    pub fn contains(&self, p: Point2<F>) -> bool {
        let k = p.key();
        self.p1.key() == k || self.p2.key() == k
    }

    /// The vertex of a triangle with this edge that is not on the edge.
    ///
    /// Returns `None` unless exactly one of `vertices` lies off the edge.
    pub fn opposite(&self, vertices: [Point2<F>; 3]) -> Option<Point2<F>> {
        let mut off = vertices.into_iter().filter(|&v| !self.contains(v));
        match (off.next(), off.next()) {
            (Some(v), None) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn key(&self) -> EdgeKey {
        (self.p1.key(), self.p2.key())
    }

    #[inline]
    pub fn to_segment(&self) -> Segment2<F> {
        Segment2::new(self.p1, self.p2)
    }
}

impl<F: Float> PartialEq for Edge2<F> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<F: Float> Eq for Edge2<F> {}

impl<F: Float> Hash for Edge2<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}
