//! Prints the clipped Voronoi diagram of a point set as SVG.
//!
//! Run with: cargo run --example voronoi_svg -- "2,2;4,5;6,6;3,8;9,4;5,8" > voronoi.svg

use std::error::Error;

use tessellum::bounds::Aabb2;
use tessellum::io::voronoi_to_svg;
use tessellum::{triangulate, voronoi, Point2};

const DEFAULT_SITES: &str = "2,2;4,5;6,6;3,8;9,4;5,8";

fn parse_sites(input: &str) -> Result<Vec<Point2<f64>>, Box<dyn Error>> {
    input
        .split(';')
        .filter(|pair| !pair.trim().is_empty())
        .map(|pair| -> Result<Point2<f64>, Box<dyn Error>> {
            let (x, y) = pair
                .split_once(',')
                .ok_or_else(|| format!("expected x,y but got {pair:?}"))?;
            Ok(Point2::new(x.trim().parse()?, y.trim().parse()?))
        })
        .collect()
}

fn main() -> Result<(), Box<dyn Error>> {
    let input = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_SITES.to_string());
    let sites = parse_sites(&input)?;

    let triangulation = triangulate(&sites)?;

    // Pad the site bounds so hull rays are visible.
    let hull = Aabb2::from_points(sites.iter().copied()).ok_or("no sites")?;
    let pad = hull.width().max(hull.height()) * 0.25;
    let bounds = Aabb2::from_bounds(
        hull.min.x - pad,
        hull.min.y - pad,
        hull.max.x + pad,
        hull.max.y + pad,
    );

    let edges = voronoi(&triangulation, &bounds)?;
    print!("{}", voronoi_to_svg(&edges, triangulation.sites(), &bounds));
    eprintln!(
        "{} sites, {} triangles, {} voronoi edges",
        sites.len(),
        triangulation.len(),
        edges.len()
    );

    Ok(())
}
