//! Property-based tests for triangulation and Voronoi extraction.
//!
//! Coordinates are drawn from a continuous range, so inputs are in general
//! position with overwhelming probability. Inputs that still turn out
//! degenerate are skipped with `prop_assume!`.

use proptest::prelude::*;
use rustc_hash::FxHashMap;
use tessellum::bounds::Aabb2;
use tessellum::{make_edge, triangulate, voronoi, Point2};

fn finite_coordinate() -> impl Strategy<Value = f64> {
    (-100.0..100.0).prop_filter("must be finite", |x: &f64| x.is_finite())
}

fn point_set(max: usize) -> impl Strategy<Value = Vec<Point2<f64>>> {
    prop::collection::vec(
        (finite_coordinate(), finite_coordinate()).prop_map(Point2::from),
        3..max,
    )
}

/// Andrew's monotone chain, counter-clockwise, collinear boundary points
/// dropped.
fn convex_hull(sites: &[Point2<f64>]) -> Vec<Point2<f64>> {
    let mut sorted = sites.to_vec();
    sorted.sort_by(|a, b| a.lex_cmp(b));

    let cross = |o: Point2<f64>, a: Point2<f64>, b: Point2<f64>| (a - o).cross(b - o);
    let mut hull: Vec<Point2<f64>> = Vec::with_capacity(2 * sorted.len());
    for pass in [sorted.clone(), sorted.into_iter().rev().collect()] {
        let floor = hull.len();
        for p in pass {
            while hull.len() >= floor + 2
                && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0
            {
                hull.pop();
            }
            hull.push(p);
        }
        hull.pop();
    }
    hull
}

#[test]
fn convex_hull_of_square_with_center() {
    let sites: Vec<Point2<f64>> = [
        (0.0, 0.0),
        (2.0, 0.0),
        (1.0, 1.0),
        (2.0, 2.0),
        (0.0, 2.0),
        (1.0, 0.0),
    ]
    .into_iter()
    .map(Point2::from)
    .collect();
    let hull = convex_hull(&sites);
    assert_eq!(
        hull,
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
        ]
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// No site lies strictly inside any triangle's circumcircle.
    #[test]
    fn prop_empty_circumcircles(points in point_set(40)) {
        let tri = triangulate(&points);
        prop_assume!(tri.is_ok());
        let tri = tri.unwrap();

        for t in &tri {
            let circle = t.circumcircle().unwrap();
            let slack = circle.radius * 1e-9;
            for &p in tri.sites() {
                if !t.contains_vertex(p) {
                    prop_assert!(
                        circle.center.distance(p) >= circle.radius - slack,
                        "{:?} inside circumcircle of {:?}",
                        p,
                        t.vertices()
                    );
                }
            }
        }
    }

    /// Every edge borders one or two triangles and the counts agree with Euler.
    #[test]
    fn prop_edge_sharing_and_count(points in point_set(40)) {
        let tri = triangulate(&points);
        prop_assume!(tri.is_ok());
        let tri = tri.unwrap();

        let mut uses: FxHashMap<_, usize> = FxHashMap::default();
        for t in &tri {
            for e in t.edges() {
                *uses.entry(e.key()).or_default() += 1;
            }
        }
        prop_assert!(uses.values().all(|&n| n == 1 || n == 2));

        let hull = convex_hull(tri.sites());
        let n = tri.sites().len();
        let h = hull.len();
        prop_assert_eq!(tri.len(), 2 * n - 2 - h);
        for &p in tri.sites() {
            prop_assert!(tri.iter().any(|t| t.contains_vertex(p)));
        }
    }

    /// The triangulation's boundary is exactly the convex hull.
    #[test]
    fn prop_hull_edges_match_convex_hull(points in point_set(40)) {
        let tri = triangulate(&points);
        prop_assume!(tri.is_ok());
        let tri = tri.unwrap();

        let hull = convex_hull(tri.sites());
        let mut expected: Vec<_> = (0..hull.len())
            .map(|i| make_edge(hull[i], hull[(i + 1) % hull.len()]).key())
            .collect();
        expected.sort_unstable();
        let actual: Vec<_> = tri.hull_edges().iter().map(|e| e.key()).collect();
        prop_assert_eq!(actual, expected);
    }

    /// Any insertion order yields the same triangles.
    #[test]
    fn prop_insertion_order_independent(
        (points, shuffled) in point_set(30)
            .prop_flat_map(|points| (Just(points.clone()), Just(points).prop_shuffle()))
    ) {
        let forward = triangulate(&points);
        prop_assume!(forward.is_ok());
        let shuffled = triangulate(&shuffled);
        prop_assume!(shuffled.is_ok());

        let keys = |t: &tessellum::Triangulation<f64>| {
            t.iter().map(|tri| tri.key()).collect::<Vec<_>>()
        };
        prop_assert_eq!(keys(&forward.unwrap()), keys(&shuffled.unwrap()));
    }

    /// Clipped Voronoi edges stay inside the rectangle and never outnumber
    /// the Delaunay edges.
    #[test]
    fn prop_voronoi_inside_bounds(points in point_set(30)) {
        let tri = triangulate(&points);
        prop_assume!(tri.is_ok());
        let tri = tri.unwrap();

        let bounds = Aabb2::from_bounds(-150.0, -150.0, 150.0, 150.0);
        let edges = voronoi(&tri, &bounds).unwrap();

        prop_assert!(edges.len() <= tri.edge_adjacency().len());
        for e in &edges {
            prop_assert!(bounds.contains_point(e.start()));
            prop_assert!(bounds.contains_point(e.end()));
        }
    }
}
