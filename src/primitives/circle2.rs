//! 2D circle type.

use super::Point2;
use num_traits::Float;

/// A circle defined by center and radius.
///
/// In this crate circles only arise as triangle circumcircles.
///
/// # Example
///
/// ```
/// use tessellum::primitives::{Circle2, Point2};
///
/// let circle: Circle2<f64> = Circle2::new(Point2::new(0.0, 0.0), 1.0);
/// assert!(circle.contains_strict(Point2::new(0.5, 0.0)));
/// assert!(!circle.contains_strict(Point2::new(1.0, 0.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle2<F> {
    pub center: Point2<F>,
    pub radius: F,
}

impl<F: Float> Circle2<F> {
    /// Creates a new circle from center and radius.
    #[inline]
    pub fn new(center: Point2<F>, radius: F) -> Self {
        Self { center, radius }
    }

    /// Checks if a point is inside the circle, boundary included.
    #[inline]
    pub fn contains(&self, point: Point2<F>) -> bool {
        self.center.distance(point) <= self.radius
    }

    /// Checks if a point is strictly inside the circle.
    ///
    /// Compares Euclidean distances rather than squares, so a point whose
    /// squared distance equals the one the radius was derived from is on the
    /// boundary, never inside.
    #[inline]
    pub fn contains_strict(&self, point: Point2<F>) -> bool {
        self.center.distance(point) < self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let c: Circle2<f64> = Circle2::new(Point2::origin(), 1.0);
        assert!(c.contains(Point2::new(0.0, 0.0)));
        assert!(c.contains(Point2::new(1.0, 0.0)));
        assert!(!c.contains(Point2::new(1.0, 1.0)));
    }

    #[test]
    fn test_contains_strict_excludes_boundary() {
        let center = Point2::new(0.5_f64, 0.5);
        let radius = center.distance(Point2::new(0.0, 0.0));
        let c = Circle2::new(center, radius);

        // The other three corners of the unit square are cocircular.
        assert!(!c.contains_strict(Point2::new(1.0, 1.0)));
        assert!(!c.contains_strict(Point2::new(1.0, 0.0)));
        assert!(c.contains_strict(Point2::new(0.6, 0.6)));
    }
}
