//! Orientation predicates.

use crate::primitives::Point2;
use num_traits::Float;

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Points are counter-clockwise (positive area).
    CounterClockwise,
    /// Points are clockwise (negative area).
    Clockwise,
    /// Points are collinear (within tolerance).
    Collinear,
}

/// Computes the orientation of three points with tolerance.
///
/// The test is the sign of the cross product `(b - a) x (c - a)`, twice the
/// signed area of the triangle. Magnitudes of at most `eps` count as
/// collinear; `eps = 0` gives the exact floating-point sign.
#[inline]
pub fn orient2d<F: Float>(a: Point2<F>, b: Point2<F>, c: Point2<F>, eps: F) -> Orientation {
    let cross = (b - a).cross(c - a);

    if cross > eps {
        Orientation::CounterClockwise
    } else if cross < -eps {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Returns `true` if every point lies on one line, within `eps`.
///
/// Point sets with fewer than three distinct points are collinear.
pub fn all_collinear<F: Float>(points: &[Point2<F>], eps: F) -> bool {
    let Some(&a) = points.first() else {
        return true;
    };
    let Some(&b) = points.iter().find(|p| p.key() != a.key()) else {
        return true;
    };
    points
        .iter()
        .all(|&c| orient2d(a, b, c, eps) == Orientation::Collinear)
}
