//! Delaunay triangulation and its Voronoi dual.
//!
//! [`triangulate`] builds the triangulation with the Bowyer-Watson algorithm;
//! [`voronoi`] turns it into a list of Voronoi edges clipped to a rectangle.

mod delaunay;
mod super_triangle;
mod triangle;
mod voronoi;

pub use delaunay::{triangulate, triangulate_with, DelaunayOptions, EdgeAdjacency, Triangulation};
pub use triangle::{Triangle, TriangleKey};
pub use voronoi::{voronoi, voronoi_from_points, VoronoiEdge};
