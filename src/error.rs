//! Error types for triangulation and Voronoi extraction.

use thiserror::Error;

/// Errors that can occur while building a triangulation or its dual.
///
/// Every variant is terminal for the current call: no partial triangulation
/// or edge list is returned alongside an error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Fewer than three distinct input points.
    #[error("insufficient points: need at least 3 distinct points, found {found}")]
    InsufficientPoints {
        /// Number of distinct points supplied.
        found: usize,
    },

    /// A collinear or duplicate point triple was met while solving for a
    /// circumcenter, or the whole input is collinear.
    #[error("cannot compute circumcenter: collinear or duplicate points {vertices:?}")]
    DegenerateGeometry {
        /// The offending triple, as `(x, y)` pairs.
        vertices: [(f64, f64); 3],
    },

    /// The clip rectangle is empty, inverted, or not finite.
    #[error("invalid bounding box: ({min_x}, {min_y}) - ({max_x}, {max_y})")]
    InvalidBoundingBox {
        /// Minimum x of the rejected rectangle.
        min_x: f64,
        /// Minimum y of the rejected rectangle.
        min_y: f64,
        /// Maximum x of the rejected rectangle.
        max_x: f64,
        /// Maximum y of the rejected rectangle.
        max_y: f64,
    },

    /// The super-triangle scale is not finite or too small for the seed to
    /// strictly enclose the input.
    #[error("invalid super-triangle scale {scale}: must be finite and at least 2")]
    InvalidSuperTriangleScale {
        /// The rejected scale.
        scale: f64,
    },

    /// An input point fell in no circumcircle during insertion, so it could
    /// not be added to the triangulation.
    #[error("point {point:?} violates no circumcircle and cannot be inserted")]
    UnplacedPoint {
        /// The point, as an `(x, y)` pair.
        point: (f64, f64),
    },

    /// An input point has a NaN or infinite coordinate.
    #[error("non-finite coordinate in input point {index}")]
    NonFiniteCoordinate {
        /// Position of the point in the input slice.
        index: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GeometryError>;
