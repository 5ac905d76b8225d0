//! The super-triangle that seeds Bowyer-Watson insertion.
//!
//! Its vertices sit at `center + d * u` for three fixed directions `u`. The
//! concrete coordinates only give the vertices an identity. Circumcircle
//! tests for triangles that touch them are evaluated as polynomials in `d`
//! and decided by the leading non-zero term, which is the answer for an
//! arbitrarily large seed. A finite seed would otherwise place its own
//! vertices inside the wide circumcircles of thin triangles along the convex
//! hull, and those triangles would be lost when the seed is stripped.

use super::triangle::Triangle;
use crate::bounds::Aabb2;
use crate::error::{GeometryError, Result};
use crate::primitives::{Point2, PointKey, Vec2};
use num_traits::Float;
use std::cmp::Ordering;
use std::ops::{Add, Mul, Sub};

/// Seed triangle with vertices `(cx - d, cy - d)`, `(cx, cy + d)` and
/// `(cx + d, cy - d)`, where `d = scale * max(width, height)`.
#[derive(Debug, Clone)]
pub(crate) struct SuperTriangle<F> {
    center: Point2<F>,
    vertices: [Point2<F>; 3],
    keys: [PointKey; 3],
}

fn directions<F: Float>() -> [Vec2<F>; 3] {
    let (zero, one) = (F::zero(), F::one());
    [Vec2::new(-one, -one), Vec2::new(zero, one), Vec2::new(one, -one)]
}

impl<F: Float> SuperTriangle<F> {
    /// Builds the seed around `bounds`.
    ///
    /// # Errors
    ///
    /// [`GeometryError::InvalidSuperTriangleScale`] if `scale` is below 2 or
    /// not finite, or if the resulting vertices overflow. From 2 upwards the
    /// seed strictly encloses `bounds` whatever its aspect ratio.
    pub(crate) fn new(bounds: Aabb2<F>, scale: F) -> Result<Self> {
        let two = F::one() + F::one();
        let invalid = || GeometryError::InvalidSuperTriangleScale {
            scale: scale.to_f64().unwrap_or(f64::NAN),
        };
        if !scale.is_finite() || scale < two {
            return Err(invalid());
        }

        let center = bounds.center();
        let d = bounds.width().max(bounds.height()) * scale;
        let vertices = directions().map(|u| center + u * d);
        if !vertices.iter().all(|v| v.is_finite()) {
            return Err(invalid());
        }

        Ok(Self {
            center,
            vertices,
            keys: vertices.map(|v| v.key()),
        })
    }

    #[inline]
    pub(crate) fn vertices(&self) -> [Point2<F>; 3] {
        self.vertices
    }

    pub(crate) fn triangle(&self) -> Triangle<F> {
        let [a, b, c] = self.vertices();
        Triangle::new(a, b, c)
    }

    /// Returns `true` if `tri` uses at least one seed vertex.
    pub(crate) fn touches(&self, tri: &Triangle<F>) -> bool {
        tri.vertices().iter().any(|v| self.keys.contains(&v.key()))
    }

    fn direction_of(&self, p: Point2<F>) -> Option<Vec2<F>> {
        let k = p.key();
        let i = self.keys.iter().position(|&s| s == k)?;
        Some(directions()[i])
    }

    /// Returns `true` if `p` lies strictly inside the circumcircle of `tri`,
    /// with the seed vertices pushed out to infinity.
    ///
    /// This is the sign of the in-circle determinant times the sign of the
    /// orientation, both taken as `d` grows without bound. A zero determinant
    /// means `p` is on the circle and is not inside.
    ///
    /// # Errors
    ///
    /// [`GeometryError::DegenerateGeometry`] if `tri` has no orientation.
    pub(crate) fn in_circumcircle(&self, tri: &Triangle<F>, p: Point2<F>) -> Result<bool> {
        let [a, b, c] = tri.vertices().map(|v| match self.direction_of(v) {
            Some(u) => (
                Poly::linear(self.center.x - p.x, u.x),
                Poly::linear(self.center.y - p.y, u.y),
            ),
            None => (Poly::constant(v.x - p.x), Poly::constant(v.y - p.y)),
        });

        let orientation = ((b.0 - a.0) * (c.1 - a.1) - (b.1 - a.1) * (c.0 - a.0)).leading_sign();
        if orientation == Ordering::Equal {
            return Err(GeometryError::DegenerateGeometry {
                vertices: tri.vertices().map(|v| v.to_f64_pair()),
            });
        }

        let lift = |(x, y): (Poly<F>, Poly<F>)| x * x + y * y;
        let (wa, wb, wc) = (lift(a), lift(b), lift(c));
        let det = a.0 * (b.1 * wc - wb * c.1) - a.1 * (b.0 * wc - wb * c.0)
            + wa * (b.0 * c.1 - b.1 * c.0);

        Ok(det.leading_sign() == orientation)
    }
}

const TERMS: usize = 5;

/// Polynomial in the seed size `d`, lowest degree first.
///
/// The in-circle determinant is at most quartic in `d`. Products drop terms
/// above that degree.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Poly<F>([F; TERMS]);

impl<F: Float> Poly<F> {
    fn constant(c: F) -> Self {
        Self::linear(c, F::zero())
    }

    fn linear(c0: F, c1: F) -> Self {
        let mut coeffs = [F::zero(); TERMS];
        coeffs[0] = c0;
        coeffs[1] = c1;
        Self(coeffs)
    }

    /// Sign of the polynomial for arbitrarily large `d`.
    fn leading_sign(&self) -> Ordering {
        self.0
            .iter()
            .rev()
            .find(|&&c| c != F::zero())
            .and_then(|c| c.partial_cmp(&F::zero()))
            .unwrap_or(Ordering::Equal)
    }
}

impl<F: Float> Add for Poly<F> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        for (a, b) in self.0.iter_mut().zip(rhs.0) {
            *a = *a + b;
        }
        self
    }
}

impl<F: Float> Sub for Poly<F> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        for (a, b) in self.0.iter_mut().zip(rhs.0) {
            *a = *a - b;
        }
        self
    }
}

impl<F: Float> Mul for Poly<F> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let mut out = [F::zero(); TERMS];
        for (i, &a) in self.0.iter().enumerate() {
            for (j, &b) in rhs.0.iter().take(TERMS - i).enumerate() {
                out[i + j] = out[i + j] + a * b;
            }
        }
        Self(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed() -> SuperTriangle<f64> {
        SuperTriangle::new(Aabb2::from_bounds(0.0, 0.0, 100.0, 60.0), 5.0).unwrap()
    }

    #[test]
    fn test_vertices() {
        let s = seed();
        assert_eq!(
            s.vertices(),
            [
                Point2::new(-450.0, -470.0),
                Point2::new(50.0, 530.0),
                Point2::new(550.0, -470.0),
            ]
        );
    }

    #[test]
    fn test_encloses_bounds_at_minimum_scale() {
        for (w, h) in [(10.0, 10.0), (10.0, 1.0), (1.0, 10.0)] {
            let bounds = Aabb2::from_bounds(0.0_f64, 0.0, w, h);
            let s = SuperTriangle::new(bounds, 2.0).unwrap();
            let circle = s.triangle().circumcircle().unwrap();
            let [a, b, c] = s.vertices();
            for corner in [
                bounds.min,
                bounds.max,
                Point2::new(bounds.min.x, bounds.max.y),
                Point2::new(bounds.max.x, bounds.min.y),
            ] {
                assert!(circle.contains_strict(corner));
                // Clockwise seed: every corner is strictly right of each side.
                for (p, q) in [(a, b), (b, c), (c, a)] {
                    assert!((q - p).cross(corner - p) < 0.0, "{:?} outside seed", corner);
                }
            }
        }
    }

    #[test]
    fn test_rejects_bad_scale() {
        let bounds = Aabb2::from_bounds(0.0_f64, 0.0, 10.0, 10.0);
        for scale in [0.1, 1.0, 1.99, -5.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                SuperTriangle::new(bounds, scale),
                Err(GeometryError::InvalidSuperTriangleScale { .. })
            ));
        }
        assert!(SuperTriangle::new(bounds, 2.0).is_ok());
    }

    #[test]
    fn test_touches() {
        let s = seed();
        let [top, ..] = s.vertices();
        let real = Triangle::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        );
        let mixed = Triangle::new(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), top);
        assert!(!s.touches(&real));
        assert!(s.touches(&mixed));
        assert!(s.touches(&s.triangle()));
    }

    #[test]
    fn test_seed_contains_every_point() {
        let s = seed();
        let tri = s.triangle();
        for p in [(0.0, 0.0), (100.0, 60.0), (50.0, 30.0), (-30.0, 200.0)] {
            assert!(s.in_circumcircle(&tri, p.into()).unwrap());
        }
    }

    #[test]
    fn test_one_seed_vertex_is_a_half_plane() {
        let s = seed();
        let [_, top, _] = s.vertices();
        let tri = Triangle::new(Point2::new(0.0, 0.0), Point2::new(100.0, 0.0), top);

        // Anything on the seed vertex's side of the edge is inside.
        assert!(s.in_circumcircle(&tri, Point2::new(50.0, 1e-3)).unwrap());
        assert!(s.in_circumcircle(&tri, Point2::new(5000.0, 1.0)).unwrap());
        assert!(!s.in_circumcircle(&tri, Point2::new(50.0, -1e-3)).unwrap());

        // On the edge's line: inside only between the endpoints.
        assert!(s.in_circumcircle(&tri, Point2::new(40.0, 0.0)).unwrap());
        assert!(!s.in_circumcircle(&tri, Point2::new(140.0, 0.0)).unwrap());
    }

    #[test]
    fn test_far_seed_vertex_is_outside_thin_circle() {
        // A finite seed vertex at (-450, -470) falls inside this circle.
        let s = seed();
        let thin = Triangle::new(
            Point2::new(0.0, 0.0),
            Point2::new(100.0, 0.0),
            Point2::new(50.0, 1.0),
        );
        let circle = thin.circumcircle().unwrap();
        assert!(circle.contains_strict(s.vertices()[0]));

        let [bottom_left, _, bottom_right] = s.vertices();
        let mixed = Triangle::new(Point2::new(0.0, 0.0), Point2::new(100.0, 0.0), bottom_left);
        // Same edge, seed vertex below: (50, 1) is on the other side.
        assert!(!s.in_circumcircle(&mixed, Point2::new(50.0, 1.0)).unwrap());
        let mixed = Triangle::new(Point2::new(0.0, 0.0), Point2::new(100.0, 0.0), bottom_right);
        assert!(!s.in_circumcircle(&mixed, Point2::new(50.0, 1.0)).unwrap());
    }

    #[test]
    fn test_two_seed_vertices_tie_on_shared_row() {
        let s = seed();
        let [left, _, right] = s.vertices();
        let tri = Triangle::new(Point2::new(20.0, 10.0), left, right);

        assert!(s.in_circumcircle(&tri, Point2::new(20.0, 9.0)).unwrap());
        assert!(!s.in_circumcircle(&tri, Point2::new(20.0, 11.0)).unwrap());
        // Same row as the real vertex: inside between it and its mirror
        // image about the seed's axis (x = 50).
        assert!(s.in_circumcircle(&tri, Point2::new(60.0, 10.0)).unwrap());
        assert!(!s.in_circumcircle(&tri, Point2::new(90.0, 10.0)).unwrap());
        assert!(!s.in_circumcircle(&tri, Point2::new(80.0, 10.0)).unwrap());
    }

    #[test]
    fn test_poly_leading_sign() {
        let p = Poly::linear(5.0_f64, -1.0);
        assert_eq!(p.leading_sign(), Ordering::Less);
        assert_eq!((p * p).leading_sign(), Ordering::Greater);
        assert_eq!(Poly::constant(0.0_f64).leading_sign(), Ordering::Equal);
        assert_eq!((p - p).leading_sign(), Ordering::Equal);
        assert_eq!((p * p).0[..3], [25.0, -10.0, 1.0]);
    }
}
