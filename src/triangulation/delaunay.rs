//! Delaunay triangulation using the Bowyer-Watson algorithm.
//!
//! A Delaunay triangulation has the property that no input point lies
//! strictly inside the circumcircle of any triangle.
//!
//! # Algorithm
//!
//! 1. Start with a super-triangle containing all points
//! 2. For each point, remove every triangle whose circumcircle strictly
//!    contains it and re-triangulate the cavity from the point
//! 3. Remove triangles connected to the super-triangle vertices
//!
//! Triangles that touch a super-triangle vertex are tested as if that
//! vertex were infinitely far away, so the result always covers the convex
//! hull of the input.
//!
//! Triangles are held in a map keyed by their sorted vertex triple, so
//! membership and removal are O(1).
//!
//! # Complexity
//!
//! - Time: O(n²) worst case, each insertion scans the current triangles
//! - Space: O(n)
//!
//! # Example
//!
//! ```
//! use tessellum::triangulation::triangulate;
//! use tessellum::Point2;
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//!     Point2::new(0.5, 0.5),
//! ];
//!
//! let triangulation = triangulate(&points).unwrap();
//! assert_eq!(triangulation.len(), 4);
//! ```

use super::super_triangle::SuperTriangle;
use super::triangle::{Triangle, TriangleKey};
use crate::bounds::Aabb2;
use crate::error::{GeometryError, Result};
use crate::primitives::{Edge2, EdgeKey, Point2};
use crate::tolerance::all_collinear;
use num_traits::Float;
use rustc_hash::{FxHashMap, FxHashSet};

/// Options for [`triangulate_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DelaunayOptions<F> {
    /// Half-size of the super-triangle, as a multiple of the larger side of
    /// the input bounding box. Must be finite and at least 2.
    pub super_triangle_scale: F,
}

impl<F: Float> DelaunayOptions<F> {
    /// Sets the super-triangle scale.
    pub fn with_super_triangle_scale(mut self, scale: F) -> Self {
        self.super_triangle_scale = scale;
        self
    }
}

impl<F: Float> Default for DelaunayOptions<F> {
    fn default() -> Self {
        Self {
            super_triangle_scale: F::from(5.0).unwrap_or_else(F::one),
        }
    }
}

/// How a Delaunay edge is shared between triangles.
#[derive(Debug, Clone)]
pub struct EdgeAdjacency<F> {
    /// The canonical edge.
    pub edge: Edge2<F>,
    /// Index of the first triangle containing the edge.
    pub first: usize,
    /// Index of the triangle across the edge, `None` on the convex hull.
    pub second: Option<usize>,
}

impl<F> EdgeAdjacency<F> {
    /// Returns `true` if only one triangle uses this edge.
    #[inline]
    pub fn is_hull(&self) -> bool {
        self.second.is_none()
    }
}

/// A finished Delaunay triangulation.
///
/// Triangles are ordered by their canonical key, so two triangulations of
/// the same point set list their triangles in the same order.
#[derive(Debug, Clone)]
pub struct Triangulation<F> {
    sites: Vec<Point2<F>>,
    triangles: Vec<Triangle<F>>,
}

impl<F: Float> Triangulation<F> {
    /// The distinct input points, in first-seen order.
    #[inline]
    pub fn sites(&self) -> &[Point2<F>] {
        &self.sites
    }

    #[inline]
    pub fn triangles(&self) -> &[Triangle<F>] {
        &self.triangles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Triangle<F>> {
        self.triangles.iter()
    }

    /// Every distinct edge with the triangles on either side of it.
    ///
    /// Sorted by canonical edge key.
    pub fn edge_adjacency(&self) -> Vec<EdgeAdjacency<F>> {
        let mut by_edge: FxHashMap<EdgeKey, EdgeAdjacency<F>> = FxHashMap::default();

        for (index, tri) in self.triangles.iter().enumerate() {
            for edge in tri.edges() {
                match by_edge.get_mut(&edge.key()) {
                    Some(adj) if adj.second.is_none() => adj.second = Some(index),
                    Some(_) => {
                        tracing::warn!(edge = ?edge.key(), "edge shared by more than two triangles");
                    }
                    None => {
                        by_edge.insert(
                            edge.key(),
                            EdgeAdjacency {
                                edge: *edge,
                                first: index,
                                second: None,
                            },
                        );
                    }
                }
            }
        }

        let mut adjacency: Vec<_> = by_edge.into_values().collect();
        adjacency.sort_unstable_by_key(|adj| adj.edge.key());
        adjacency
    }

    /// Edges used by exactly one triangle.
    pub fn hull_edges(&self) -> Vec<Edge2<F>> {
        self.edge_adjacency()
            .into_iter()
            .filter(EdgeAdjacency::is_hull)
            .map(|adj| adj.edge)
            .collect()
    }

    /// Number of edges shared by two triangles.
    pub fn interior_edge_count(&self) -> usize {
        self.edge_adjacency().iter().filter(|adj| !adj.is_hull()).count()
    }
}

impl<'a, F: Float> IntoIterator for &'a Triangulation<F> {
    type Item = &'a Triangle<F>;
    type IntoIter = std::slice::Iter<'a, Triangle<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.iter()
    }
}

/// Computes the Delaunay triangulation of a set of points.
///
/// Equivalent to [`triangulate_with`] with default options.
///
/// # Errors
///
/// - [`GeometryError::NonFiniteCoordinate`] for NaN or infinite input
/// - [`GeometryError::InsufficientPoints`] for fewer than 3 distinct points
/// - [`GeometryError::DegenerateGeometry`] if all points are collinear, or
///   if a circumcenter cannot be solved during insertion
///
/// # Example
///
/// ```
/// use tessellum::triangulation::triangulate;
/// use tessellum::{GeometryError, Point2};
///
/// let collinear = [
///     Point2::new(0.0_f64, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(2.0, 2.0),
/// ];
/// assert!(matches!(
///     triangulate(&collinear),
///     Err(GeometryError::DegenerateGeometry { .. })
/// ));
/// ```
pub fn triangulate<F: Float>(points: &[Point2<F>]) -> Result<Triangulation<F>> {
    triangulate_with(points, &DelaunayOptions::default())
}

/// Computes the Delaunay triangulation with explicit options.
///
/// Points are inserted in input order. Exact duplicates are inserted once.
///
/// # Errors
///
/// As [`triangulate`], plus
/// [`GeometryError::InvalidSuperTriangleScale`] for a scale below 2 or not
/// finite, and [`GeometryError::UnplacedPoint`] if a site could not be
/// inserted.
pub fn triangulate_with<F: Float>(
    points: &[Point2<F>],
    options: &DelaunayOptions<F>,
) -> Result<Triangulation<F>> {
    let sites = distinct_sites(points)?;
    if sites.len() < 3 {
        return Err(GeometryError::InsufficientPoints { found: sites.len() });
    }
    if all_collinear(&sites, F::zero()) {
        return Err(GeometryError::DegenerateGeometry {
            vertices: [sites[0], sites[1], sites[2]].map(|p| p.to_f64_pair()),
        });
    }

    let bounds = Aabb2::from_points(sites.iter().copied())
        .ok_or(GeometryError::InsufficientPoints { found: 0 })?;
    let seed = SuperTriangle::new(bounds, options.super_triangle_scale)?;

    tracing::debug!(
        sites = sites.len(),
        duplicates = points.len() - sites.len(),
        "starting Bowyer-Watson triangulation"
    );

    let mut mesh: FxHashMap<TriangleKey, Triangle<F>> = FxHashMap::default();
    let first = seed.triangle();
    mesh.insert(first.key(), first);

    for &p in &sites {
        insert_point(&mut mesh, &seed, p)?;
    }

    let mut triangles: Vec<Triangle<F>> = mesh
        .into_values()
        .filter(|tri| !seed.touches(tri))
        .collect();
    triangles.sort_unstable_by_key(Triangle::key);

    tracing::debug!(triangles = triangles.len(), "triangulation complete");

    Ok(Triangulation { sites, triangles })
}

/// Rejects non-finite input and drops exact duplicates, keeping the first.
fn distinct_sites<F: Float>(points: &[Point2<F>]) -> Result<Vec<Point2<F>>> {
    let mut seen = FxHashSet::default();
    let mut sites = Vec::with_capacity(points.len());

    for (index, &p) in points.iter().enumerate() {
        if !p.is_finite() {
            return Err(GeometryError::NonFiniteCoordinate { index });
        }
        if seen.insert(p.key()) {
            sites.push(p);
        } else {
            tracing::warn!(index, "skipping duplicate input point");
        }
    }

    Ok(sites)
}

/// Inserts one point, replacing the cavity of violated triangles.
fn insert_point<F: Float>(
    mesh: &mut FxHashMap<TriangleKey, Triangle<F>>,
    seed: &SuperTriangle<F>,
    p: Point2<F>,
) -> Result<()> {
    let mut bad = Vec::new();
    for (key, tri) in mesh.iter() {
        let inside = if seed.touches(tri) {
            seed.in_circumcircle(tri, p)
        } else {
            tri.circumcircle().map(|circle| circle.contains_strict(p))
        };
        if inside.inspect_err(|err| tracing::warn!(%err, "circumcircle test failed"))? {
            bad.push(*key);
        }
    }

    if bad.is_empty() {
        return Err(GeometryError::UnplacedPoint {
            point: p.to_f64_pair(),
        });
    }

    // Edges seen once bound the cavity; edges seen twice are inside it.
    let mut edge_count: FxHashMap<EdgeKey, (Edge2<F>, usize)> = FxHashMap::default();
    for key in &bad {
        if let Some(tri) = mesh.remove(key) {
            for edge in tri.edges() {
                edge_count.entry(edge.key()).or_insert((*edge, 0)).1 += 1;
            }
        }
    }

    for (edge, count) in edge_count.into_values() {
        if count == 1 {
            let tri = Triangle::new(p, edge.p1(), edge.p2());
            mesh.insert(tri.key(), tri);
        }
    }

    Ok(())
}
