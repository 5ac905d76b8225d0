//! Axis-aligned clip rectangle with segment and ray clipping.

use crate::error::{GeometryError, Result};
use crate::primitives::{Point2, Segment2, Vec2};
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// A 2D axis-aligned bounding box.
///
/// Defined by minimum and maximum corners. Used as the clip rectangle for
/// Voronoi edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb2<F> {
    /// Minimum corner (smallest x and y values).
    pub min: Point2<F>,
    /// Maximum corner (largest x and y values).
    pub max: Point2<F>,
}

impl<F: Float> Aabb2<F> {
    /// Creates a new AABB from min and max corners.
    ///
    /// Does not validate that min < max; see [`Aabb2::validate`].
    #[inline]
    pub fn new(min: Point2<F>, max: Point2<F>) -> Self {
        Self { min, max }
    }

    /// Creates an AABB from `(min_x, min_y, max_x, max_y)`.
    #[inline]
    pub fn from_bounds(min_x: F, min_y: F, max_x: F, max_y: F) -> Self {
        Self::new(Point2::new(min_x, min_y), Point2::new(max_x, max_y))
    }

    /// Creates an AABB from two arbitrary corners.
    #[inline]
    pub fn from_corners(a: Point2<F>, b: Point2<F>) -> Self {
        Self {
            min: Point2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Creates the tightest AABB around an iterator of points.
    ///
    /// Returns `None` if the iterator is empty.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2<F>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        Some(iter.fold(Self::new(first, first), |aabb, p| aabb.expand_to_include(p)))
    }

    #[inline]
    pub fn width(self) -> F {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> F {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn center(self) -> Point2<F> {
        self.min.midpoint(self.max)
    }

    /// Returns a new AABB expanded to include the given point.
    #[inline]
    pub fn expand_to_include(self, p: Point2<F>) -> Self {
        Self {
            min: Point2::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Point2::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }

    /// Returns `true` if the point lies inside or on the boundary.
    #[inline]
    pub fn contains_point(self, p: Point2<F>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Checks that the rectangle is finite and has positive area.
    pub fn validate(self) -> Result<()> {
        let ok = self.min.is_finite()
            && self.max.is_finite()
            && self.min.x < self.max.x
            && self.min.y < self.max.y;
        if ok {
            Ok(())
        } else {
            let (min_x, min_y) = self.min.to_f64_pair();
            let (max_x, max_y) = self.max.to_f64_pair();
            Err(GeometryError::InvalidBoundingBox {
                min_x,
                min_y,
                max_x,
                max_y,
            })
        }
    }

    /// Clips the segment `start -> end` to the rectangle.
    ///
    /// Returns `None` if no part of the segment lies inside.
    pub fn clip_segment(self, start: Point2<F>, end: Point2<F>) -> Option<Segment2<F>> {
        let dir = end - start;
        let (t0, t1) = self.clip_parametric(start, dir, F::one())?;
        let clipped_start = if t0 == F::zero() { start } else { self.clamp(start + dir * t0) };
        let clipped_end = if t1 == F::one() { end } else { self.clamp(start + dir * t1) };
        Some(Segment2::new(clipped_start, clipped_end))
    }

    /// Clips the ray from `origin` along `dir` to the rectangle.
    ///
    /// The ray starts at `origin` (which may lie outside the rectangle) and
    /// is unbounded in the direction of `dir`. Returns `None` if the ray
    /// misses the rectangle or `dir` is zero.
    pub fn clip_ray(self, origin: Point2<F>, dir: Vec2<F>) -> Option<Segment2<F>> {
        let (t0, t1) = self.clip_parametric(origin, dir, F::infinity())?;
        if !t1.is_finite() {
            return None;
        }
        let start = if t0 == F::zero() { origin } else { self.clamp(origin + dir * t0) };
        Some(Segment2::new(start, self.clamp(origin + dir * t1)))
    }

    /// Liang-Barsky clipping of `origin + t * dir` for `t` in `[0, t_max]`.
    ///
    /// Returns the parameter range that lies inside the rectangle.
    fn clip_parametric(self, origin: Point2<F>, dir: Vec2<F>, t_max: F) -> Option<(F, F)> {
        let mut t0 = F::zero();
        let mut t1 = t_max;

        let slabs = [
            (-dir.x, origin.x - self.min.x),
            (dir.x, self.max.x - origin.x),
            (-dir.y, origin.y - self.min.y),
            (dir.y, self.max.y - origin.y),
        ];

        for (p, q) in slabs {
            if p == F::zero() {
                if q < F::zero() {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < F::zero() {
                t0 = t0.max(r);
            } else {
                t1 = t1.min(r);
            }
            if t0 > t1 {
                return None;
            }
        }

        Some((t0, t1))
    }

    /// Snaps a point that is outside only by rounding back onto the boundary.
    #[inline]
    fn clamp(self, p: Point2<F>) -> Point2<F> {
        Point2::new(
            p.x.max(self.min.x).min(self.max.x),
            p.y.max(self.min.y).min(self.max.y),
        )
    }
}
