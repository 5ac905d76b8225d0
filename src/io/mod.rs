//! Export utilities for debugging output.

mod svg;

pub use svg::{triangulation_to_svg_path, voronoi_to_svg};
