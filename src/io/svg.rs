//! SVG export of triangulations and Voronoi diagrams.
//!
//! Output is meant for eyeballing results, not as an interchange format.
//! The y axis is flipped so that larger y values are drawn higher up.
//!
//! # Example
//!
//! ```
//! use tessellum::bounds::Aabb2;
//! use tessellum::io::voronoi_to_svg;
//! use tessellum::triangulation::voronoi_from_points;
//! use tessellum::Point2;
//!
//! let sites = [
//!     Point2::new(0.0_f64, 0.0),
//!     Point2::new(10.0, 0.0),
//!     Point2::new(5.0, 10.0),
//! ];
//! let bounds = Aabb2::from_bounds(-5.0, -5.0, 15.0, 15.0);
//! let edges = voronoi_from_points(&sites, &bounds).unwrap();
//!
//! let svg = voronoi_to_svg(&edges, &sites, &bounds);
//! assert!(svg.starts_with("<svg"));
//! assert_eq!(svg.matches("<line").count(), 3);
//! ```

use crate::bounds::Aabb2;
use crate::primitives::Point2;
use crate::triangulation::{Triangulation, VoronoiEdge};
use num_traits::Float;
use std::fmt;

/// Converts a triangulation to SVG path data, one closed subpath per triangle.
pub fn triangulation_to_svg_path<F: Float + fmt::Display>(triangulation: &Triangulation<F>) -> String {
    let mut result = String::new();

    for tri in triangulation {
        let [a, b, c] = tri.vertices();
        if !result.is_empty() {
            result.push(' ');
        }
        result.push_str(&format!(
            "M {} {} L {} {} L {} {} Z",
            a.x, a.y, b.x, b.y, c.x, c.y
        ));
    }

    result
}

/// Renders Voronoi edges and their sites as a standalone SVG document.
///
/// The view box is `bounds`; edges become `<line>` elements and sites small
/// `<circle>` markers.
pub fn voronoi_to_svg<F: Float + fmt::Display>(
    edges: &[VoronoiEdge<F>],
    sites: &[Point2<F>],
    bounds: &Aabb2<F>,
) -> String {
    let (min, w, h) = (bounds.min, bounds.width(), bounds.height());
    let marker = w.max(h) / F::from(200.0).unwrap_or_else(F::one);

    let mut result = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{} {} {} {}\">\n",
        min.x, min.y, w, h
    );
    result.push_str(&format!(
        "<g transform=\"matrix(1 0 0 -1 0 {})\" stroke-width=\"{}\">\n",
        min.y + min.y + h,
        marker / (F::one() + F::one())
    ));

    for e in edges {
        result.push_str(&format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"black\"/>\n",
            e.x1, e.y1, e.x2, e.y2
        ));
    }
    for p in sites {
        result.push_str(&format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"red\"/>\n",
            p.x, p.y, marker
        ));
    }

    result.push_str("</g>\n</svg>\n");
    result
}
