//! Line slopes without IEEE infinities.

use super::Point2;
use num_traits::Float;

/// Slope of a line, either a finite rise-over-run or vertical.
///
/// A horizontal line has slope `Finite(0)`. Keeping vertical lines out of
/// the float domain means no `inf`/`NaN` ever reaches a linear solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slope<F> {
    /// Finite slope `dy / dx`.
    Finite(F),
    /// Vertical line (`dx == 0`).
    Vertical,
}

impl<F: Float> Slope<F> {
    /// Slope of the line through `p1` and `p2`.
    #[inline]
    pub fn between(p1: Point2<F>, p2: Point2<F>) -> Self {
        let dx = p1.x - p2.x;
        if dx == F::zero() {
            Slope::Vertical
        } else {
            Slope::Finite((p1.y - p2.y) / dx)
        }
    }

    /// Slope of any line perpendicular to this one.
    #[inline]
    pub fn perpendicular(self) -> Self {
        match self {
            Slope::Vertical => Slope::Finite(F::zero()),
            Slope::Finite(m) if m == F::zero() => Slope::Vertical,
            Slope::Finite(m) => Slope::Finite(-F::one() / m),
        }
    }

    /// Returns `true` for a vertical line.
    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Slope::Vertical)
    }

    /// Returns `true` for a horizontal line.
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Slope::Finite(m) if m == F::zero())
    }

    /// The finite slope value, if any.
    #[inline]
    pub fn value(self) -> Option<F> {
        match self {
            Slope::Finite(m) => Some(m),
            Slope::Vertical => None,
        }
    }
}
