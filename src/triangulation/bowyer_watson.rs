//! Delaunay triangulation using the Bowyer-Watson algorithm.
//!
//! Delaunay triangulation maximizes the minimum angle of all triangles,
//! avoiding skinny triangles when possible. It has the property that no
//! point lies inside the circumcircle of any triangle.
//!
//! # Algorithm
//!
//! The Bowyer-Watson algorithm is an incremental insertion algorithm:
//! 1. Sort points by x and start with a super-triangle containing them all
//! 2. For each point, remove every triangle whose circumcircle contains it,
//!    then fan the boundary of the resulting cavity to the new point
//! 3. Remove triangles connected to the super-triangle vertices
//!
//! Because points arrive in x order, a triangle whose circumcircle lies
//! entirely to the left of the current point can never be disturbed again.
//! Such triangles are marked completed and skipped by later insertions.
//!
//! # Complexity
//!
//! - Time: O(n²) worst case
//! - Space: O(n)
//!
//! # Example
//!
//! ```
//! use bowyer_watson::triangulate;
//! use bowyer_watson::Point;
//!
//! let points: Vec<Point<f64>> = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(0.5, 1.0),
//!     Point::new(0.5, 0.3),
//! ];
//!
//! let triangles = triangulate(&points).unwrap();
//! assert_eq!(triangles.len(), 3);
//!
//! // Each triangle refers back to the caller's points by index
//! for tri in &triangles {
//!     assert!(tri.vertices().iter().all(|&v| v < points.len()));
//! }
//! ```

use super::circumcircle::{circumcircle, in_circumcircle};
use super::config::{ExtentPolicy, TriangulationConfig};
use super::triangle::{Edge, Triangle};
use crate::bounds::Aabb;
use crate::error::{Result, TriangulationError};
use crate::primitives::Point;
use num_traits::Float;
use std::cmp::Ordering;

/// Counters collected while inserting points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InsertionStats {
    /// Circumcircle tests performed.
    pub circumcircle_tests: usize,
    /// Tests skipped because the triangle had no usable circumcircle.
    pub degenerate_tests: usize,
    /// Triangles retired from testing by the sweep.
    pub completed: usize,
    /// Zero-area output triangles removed in the final pass.
    pub slivers_dropped: usize,
}

/// Result of [`triangulate_with`].
#[derive(Debug, Clone, PartialEq)]
pub struct Triangulation {
    triangles: Vec<Triangle>,
    stats: InsertionStats,
}

impl Triangulation {
    /// Output triangles, indexing into the input point slice.
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    #[inline]
    pub fn stats(&self) -> InsertionStats {
        self.stats
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    #[inline]
    pub fn into_triangles(self) -> Vec<Triangle> {
        self.triangles
    }
}

/// A live triangle in the working mesh.
#[derive(Debug, Clone, Copy)]
struct Face {
    triangle: Triangle,
    complete: bool,
}

impl Face {
    #[inline]
    fn new(triangle: Triangle) -> Self {
        Self {
            triangle,
            complete: false,
        }
    }
}

/// Computes the Delaunay triangulation of a set of points with the default
/// [`TriangulationConfig`].
///
/// # Errors
///
/// See [`triangulate_with`].
///
/// # Example
///
/// ```
/// use bowyer_watson::{triangulate, Point, TriangulationError};
///
/// // Square with center point
/// let points: Vec<Point<f64>> = vec![
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(0.0, 1.0),
///     Point::new(0.5, 0.5),
/// ];
/// assert_eq!(triangulate(&points).unwrap().len(), 4);
///
/// let empty: Vec<Point<f64>> = Vec::new();
/// assert_eq!(triangulate(&empty), Err(TriangulationError::EmptyInput));
/// ```
pub fn triangulate<F: Float>(points: &[Point<F>]) -> Result<Vec<Triangle>> {
    triangulate_with(points, &TriangulationConfig::default()).map(Triangulation::into_triangles)
}

/// Computes the Delaunay triangulation of a set of points.
///
/// Uses the Bowyer-Watson incremental insertion algorithm. The caller's
/// slice is not reordered; points are visited through a sorted index
/// permutation. Every output triangle holds three indices into `points`.
///
/// A point on the circumcircle of a triangle counts as inside it.
///
/// A triangle without a usable circumcircle is logged, counted in
/// [`InsertionStats::degenerate_tests`] and treated as not containing the
/// point being inserted. It does not abort the triangulation.
///
/// Distinct points with the same coordinates keep their own indices. The
/// sweep can join such a pair into a zero-area triangle; any output
/// triangle without a circumcircle is dropped and counted in
/// [`InsertionStats::slivers_dropped`].
///
/// # Errors
///
/// - [`TriangulationError::EmptyInput`] if `points` is empty
/// - [`TriangulationError::NonFiniteCoordinate`] if any x or y is NaN or
///   infinite
/// - [`TriangulationError::DegenerateBoundingBox`] if all points are
///   coincident and the config's [`ExtentPolicy`] is `Reject`
/// - [`TriangulationError::SuperTriangleOverflow`] if the super-triangle
///   vertices are not representable in `F`
pub fn triangulate_with<F: Float>(
    points: &[Point<F>],
    config: &TriangulationConfig<F>,
) -> Result<Triangulation> {
    if points.is_empty() {
        return Err(TriangulationError::EmptyInput);
    }
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(TriangulationError::NonFiniteCoordinate { index });
    }

    let n = points.len();
    let super_points = super_triangle(points, config)?;
    let super_tri = Triangle::new(n, n + 1, n + 2);
    let vertex = |i: usize| if i < n { points[i] } else { super_points[i - n] };

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&i, &j| {
        points[i]
            .x
            .partial_cmp(&points[j].x)
            .unwrap_or(Ordering::Equal)
    });

    let eps = config.degeneracy_epsilon;
    let mut faces: Vec<Face> = vec![Face::new(super_tri)];
    let mut edges: Vec<Option<Edge>> = Vec::new();
    let mut stats = InsertionStats::default();

    for &i in &order {
        let p = points[i];
        edges.clear();

        // Walk backwards so swap_remove only moves already-visited faces
        for j in (0..faces.len()).rev() {
            let face = faces[j];
            if face.complete {
                continue;
            }

            let t = face.triangle;
            stats.circumcircle_tests += 1;
            let tested = in_circumcircle(p, vertex(t.a), vertex(t.b), vertex(t.c), eps);
            let (inside, circle) = match tested {
                Ok(result) => result,
                Err(err) => {
                    stats.degenerate_tests += 1;
                    log::warn!("skipping triangle {:?} while inserting point {}: {}", t, i, err);
                    continue;
                }
            };

            if config.prune_completed && circle.max_x() < p.x {
                faces[j].complete = true;
                stats.completed += 1;
            }

            if inside {
                edges.extend(t.edges().into_iter().map(Some));
                faces.swap_remove(j);
            }
        }

        remove_shared_edges(&mut edges);

        let before = faces.len();
        faces.extend(
            edges
                .iter()
                .flatten()
                .map(|e| Face::new(Triangle::new(e.a, e.b, i))),
        );
        log::trace!(
            "inserted point {} ({} new triangles, {} live)",
            i,
            faces.len() - before,
            faces.len()
        );
    }

    let mut triangles: Vec<Triangle> = faces
        .into_iter()
        .map(|f| f.triangle)
        .filter(|t| !t.shares_vertex(&super_tri))
        .collect();

    let before = triangles.len();
    triangles.retain(|t| circumcircle(points[t.a], points[t.b], points[t.c], eps).is_ok());
    stats.slivers_dropped = before - triangles.len();
    if stats.slivers_dropped > 0 {
        log::warn!(
            "dropped {} zero-area triangles built on coincident points",
            stats.slivers_dropped
        );
    }

    log::debug!(
        "triangulated {} points into {} triangles ({} circumcircle tests, {} degenerate, {} completed)",
        n,
        triangles.len(),
        stats.circumcircle_tests,
        stats.degenerate_tests,
        stats.completed
    );

    Ok(Triangulation { triangles, stats })
}

/// Builds the three super-triangle vertices around the input's bounding box.
fn super_triangle<F: Float>(
    points: &[Point<F>],
    config: &TriangulationConfig<F>,
) -> Result<[Point<F>; 3]> {
    let bounds =
        Aabb::from_points(points.iter().copied()).ok_or(TriangulationError::EmptyInput)?;

    let mut extent = bounds.max_extent();
    if extent <= F::zero() {
        if let ExtentPolicy::Inflate(min_extent) = config.extent_policy {
            extent = min_extent;
        }
    }
    if !(extent > F::zero()) {
        return Err(TriangulationError::DegenerateBoundingBox {
            width: bounds.width().to_f64().unwrap_or(0.0),
            height: bounds.height().to_f64().unwrap_or(0.0),
        });
    }

    let mid = bounds.center();
    let k = config.super_triangle_margin;
    let vertices = [
        Point::new(mid.x - k * extent, mid.y - extent),
        Point::new(mid.x, mid.y + k * extent),
        Point::new(mid.x + k * extent, mid.y - extent),
    ];
    if !vertices.iter().all(|v| v.is_finite()) {
        return Err(TriangulationError::SuperTriangleOverflow {
            extent: extent.to_f64().unwrap_or(f64::INFINITY),
        });
    }
    Ok(vertices)
}

/// Clears every pair of edges joining the same two vertices.
///
/// An edge reported by two removed triangles lies inside the cavity, not on
/// its boundary.
fn remove_shared_edges(edges: &mut [Option<Edge>]) {
    for j in 0..edges.len() {
        for k in (j + 1)..edges.len() {
            if let (Some(e1), Some(e2)) = (edges[j], edges[k]) {
                if e1.connects(&e2) {
                    edges[j] = None;
                    edges[k] = None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hull::{convex_hull_indices, hull_area};
    use crate::triangulation::circumcircle;
    use approx::assert_relative_eq;
    use std::collections::HashSet;

    /// Generates a deterministic point cloud in [0, 100)².
    fn random_points(count: usize, seed: u64) -> Vec<Point<f64>> {
        let mut state = seed;
        let mut next = || {
            // xorshift for deterministic random
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state as f64 / u64::MAX as f64) * 100.0
        };
        (0..count)
            .map(|_| {
                let x = next();
                let y = next();
                Point::new(x, y)
            })
            .collect()
    }

    /// Fisher-Yates permutation of `0..count`.
    fn permutation(count: usize, seed: u64) -> Vec<usize> {
        let mut perm: Vec<usize> = (0..count).collect();
        let mut state = seed;
        for i in (1..count).rev() {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let j = (state % (i as u64 + 1)) as usize;
            perm.swap(i, j);
        }
        perm
    }

    fn triangle_area(points: &[Point<f64>], t: &Triangle) -> f64 {
        let (a, b, c) = (points[t.a], points[t.b], points[t.c]);
        ((b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)).abs() / 2.0
    }

    fn vertex_sets(triangles: &[Triangle]) -> HashSet<[usize; 3]> {
        triangles.iter().map(Triangle::sorted_vertices).collect()
    }

    /// Asserts no input point lies strictly inside any output circumcircle.
    ///
    /// Triangles without a circumcircle have no interior to check.
    fn assert_empty_circles(points: &[Point<f64>], triangles: &[Triangle]) {
        for tri in triangles {
            let Ok(circle) = circumcircle(points[tri.a], points[tri.b], points[tri.c], f64::EPSILON)
            else {
                continue;
            };
            let limit = circle.radius_squared * (1.0 - 1e-9);
            for (i, &p) in points.iter().enumerate() {
                if tri.contains_vertex(i) {
                    continue;
                }
                assert!(
                    circle.center.distance_squared(p) >= limit,
                    "Point {} is inside circumcircle of triangle ({}, {}, {})",
                    i,
                    tri.a,
                    tri.b,
                    tri.c
                );
            }
        }
    }

    #[test]
    fn test_three_points() {
        let points = vec![
            Point::new(0.0_f64, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.5, 1.0),
        ];
        let triangles = triangulate(&points).unwrap();
        assert_eq!(triangles.len(), 1);
        assert_eq!(triangles[0].sorted_vertices(), [0, 1, 2]);
    }

    #[test]
    fn test_indices_refer_to_unsorted_input() {
        // Descending x, so the sweep order differs from input order
        let points = vec![
            Point::with_z(3.0_f64, 0.0, 7.0),
            Point::with_z(2.0, 2.0, 8.0),
            Point::with_z(0.0, 1.5, 9.0),
            Point::with_z(0.0, 0.0, 10.0),
        ];
        let triangles = triangulate(&points).unwrap();
        assert_eq!(triangles.len(), 2);

        let used: HashSet<usize> = triangles.iter().flat_map(|t| t.vertices()).collect();
        assert_eq!(used, (0..4).collect());
        assert_eq!(points[3].z, 10.0);
    }

    #[test]
    fn test_square() {
        let points = vec![
            Point::new(0.0_f64, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ];
        let triangles = triangulate(&points).unwrap();
        assert_eq!(triangles.len(), 2);

        let shared: Vec<Edge> = triangles[0]
            .edges()
            .into_iter()
            .filter(|e| triangles[1].edges().iter().any(|o| e.connects(o)))
            .collect();
        assert_eq!(shared.len(), 1);
        let diagonal = shared[0];
        assert!(diagonal.connects(&Edge::new(0, 2)) || diagonal.connects(&Edge::new(1, 3)));

        assert_empty_circles(&points, &triangles);
    }

    #[test]
    fn test_cocircular_point_is_absorbed() {
        // (1, 1) lies exactly on the circumcircle of the first three points
        let points = vec![
            Point::new(0.0_f64, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
        ];
        let triangles = triangulate(&points).unwrap();
        assert_eq!(triangles.len(), 2);

        let area: f64 = triangles.iter().map(|t| triangle_area(&points, t)).sum();
        assert_relative_eq!(area, 1.0, epsilon = 1e-12);

        // Absorbing (1, 1) replaces the 1-2 diagonal with 0-3
        for tri in &triangles {
            assert!(tri.contains_vertex(0) && tri.contains_vertex(3));
            assert!(!(tri.contains_vertex(1) && tri.contains_vertex(2)));
        }
    }

    #[test]
    fn test_duplicate_coordinates_stay_distinct() {
        // Points 2 and 4 share coordinates
        let points = vec![
            Point::new(0.0_f64, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
        ];
        let result = triangulate_with(&points, &TriangulationConfig::default()).unwrap();

        assert_eq!(
            vertex_sets(result.triangles()),
            HashSet::from([[0, 1, 4], [0, 3, 4]])
        );
        assert_eq!(result.stats().slivers_dropped, 1);
        for tri in result.triangles() {
            assert!(circumcircle(points[tri.a], points[tri.b], points[tri.c], f64::EPSILON).is_ok());
        }

        let area: f64 = result.triangles().iter().map(|t| triangle_area(&points, t)).sum();
        assert_relative_eq!(area, 1.0, epsilon = 1e-12);
        assert_empty_circles(&points, result.triangles());
    }

    #[test]
    fn test_duplicate_interior_point() {
        let points = vec![
            Point::new(0.0_f64, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
            Point::new(0.5, 0.5),
            Point::new(0.5, 0.5),
        ];
        let result = triangulate_with(&points, &TriangulationConfig::default()).unwrap();

        assert_eq!(result.len(), 4);
        assert!(result.triangles().iter().all(|t| t.contains_vertex(5)));
        assert!(result.triangles().iter().all(|t| !t.contains_vertex(4)));
        assert_eq!(result.stats().slivers_dropped, 0);
    }

    #[test]
    fn test_square_with_center() {
        let points = vec![
            Point::new(0.0_f64, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
            Point::new(0.5, 0.5),
        ];
        let triangles = triangulate(&points).unwrap();
        assert_eq!(triangles.len(), 4);
        assert!(triangles.iter().all(|t| t.contains_vertex(4)));
    }

    #[test]
    fn test_grid() {
        let mut points: Vec<Point<f64>> = Vec::new();
        for i in 0..4 {
            for j in 0..4 {
                points.push(Point::new(i as f64, j as f64));
            }
        }

        let triangles = triangulate(&points).unwrap();

        // 3x3 squares, each split into 2 triangles
        assert_eq!(triangles.len(), 18);
        assert_empty_circles(&points, &triangles);
    }

    #[test]
    fn test_empty_input() {
        let points: Vec<Point<f64>> = vec![];
        assert_eq!(triangulate(&points), Err(TriangulationError::EmptyInput));
    }

    #[test]
    fn test_single_point_rejected() {
        let points = vec![Point::new(3.0_f64, 4.0)];
        assert_eq!(
            triangulate(&points),
            Err(TriangulationError::DegenerateBoundingBox {
                width: 0.0,
                height: 0.0
            })
        );
    }

    #[test]
    fn test_coincident_points_rejected() {
        let points = vec![Point::new(1.0_f64, 1.0); 3];
        assert!(matches!(
            triangulate(&points),
            Err(TriangulationError::DegenerateBoundingBox { .. })
        ));
    }

    #[test]
    fn test_single_point_inflated() {
        let points = vec![Point::new(3.0_f64, 4.0)];
        let config = TriangulationConfig::default().with_extent_policy(ExtentPolicy::Inflate(1.0));
        let result = triangulate_with(&points, &config).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_inflate_must_be_positive() {
        let points = vec![Point::new(3.0_f64, 4.0)];
        let config = TriangulationConfig::default().with_extent_policy(ExtentPolicy::Inflate(0.0));
        assert!(triangulate_with(&points, &config).is_err());
    }

    #[test]
    fn test_super_triangle_overflow_rejected() {
        let points = vec![
            Point::new(0.0_f64, 0.0),
            Point::new(1e308, 0.0),
            Point::new(0.0, 1e308),
        ];
        assert!(matches!(
            triangulate(&points),
            Err(TriangulationError::SuperTriangleOverflow { .. })
        ));

        let smaller = vec![
            Point::new(0.0_f64, 0.0),
            Point::new(1e100, 0.0),
            Point::new(0.0, 1e100),
        ];
        assert_eq!(triangulate(&smaller).unwrap().len(), 1);
    }

    #[test]
    fn test_super_triangle_encloses_input() {
        let points = random_points(50, 12345);
        let config = TriangulationConfig::default();
        let [a, b, c] = super_triangle(&points, &config).unwrap();
        let circle = circumcircle(a, b, c, config.degeneracy_epsilon).unwrap();
        assert!(points.iter().all(|&p| circle.contains(p)));
    }

    #[test]
    fn test_two_points() {
        let points = vec![Point::new(0.0_f64, 0.0), Point::new(1.0, 0.0)];
        assert!(triangulate(&points).unwrap().is_empty());
    }

    #[test]
    fn test_collinear() {
        let horizontal = vec![
            Point::new(0.0_f64, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
        ];
        assert!(triangulate(&horizontal).unwrap().is_empty());

        let vertical = vec![
            Point::new(0.0_f64, 0.0),
            Point::new(0.0, 1.0),
            Point::new(0.0, 2.0),
        ];
        assert!(triangulate(&vertical).unwrap().is_empty());
    }

    #[test]
    fn test_non_finite_rejected() {
        let points = vec![
            Point::new(0.0_f64, 0.0),
            Point::new(f64::NAN, 1.0),
            Point::new(1.0, 0.0),
        ];
        assert_eq!(
            triangulate(&points),
            Err(TriangulationError::NonFiniteCoordinate { index: 1 })
        );
    }

    #[test]
    fn test_degenerate_triangles_are_skipped() {
        // A tolerance wider than the super-triangle makes every test degenerate
        let points = vec![
            Point::new(0.0_f64, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.5, 1.0),
        ];
        let config = TriangulationConfig::default().with_degeneracy_epsilon(100.0);
        let result = triangulate_with(&points, &config).unwrap();

        assert!(result.is_empty());
        assert_eq!(result.stats().circumcircle_tests, 3);
        assert_eq!(result.stats().degenerate_tests, 3);
    }

    #[test]
    fn test_random_empty_circle() {
        for (count, seed) in [(20, 7), (50, 12345), (200, 42)] {
            let points = random_points(count, seed);
            let triangles = triangulate(&points).unwrap();
            assert!(!triangles.is_empty());
            assert_empty_circles(&points, &triangles);
        }
    }

    #[test]
    fn test_random_covers_hull() {
        let config = TriangulationConfig::default().with_super_triangle_margin(1000.0);
        for (count, seed) in [(20, 7), (50, 12345), (100, 99), (200, 42)] {
            let points = random_points(count, seed);
            let triangles = triangulate_with(&points, &config).unwrap().into_triangles();

            let hull = convex_hull_indices(&points);
            assert_eq!(triangles.len(), 2 * count - hull.len() - 2);

            let area: f64 = triangles.iter().map(|t| triangle_area(&points, t)).sum();
            assert_relative_eq!(area, hull_area(&points, &hull), max_relative = 1e-9);
        }
    }

    #[test]
    fn test_permutation_invariance() {
        for (count, seed) in [(20, 7), (50, 12345), (200, 42)] {
            let points = random_points(count, seed);
            let perm = permutation(count, seed);
            let shuffled: Vec<Point<f64>> = perm.iter().map(|&i| points[i]).collect();

            let original = vertex_sets(&triangulate(&points).unwrap());
            let remapped: Vec<Triangle> = triangulate(&shuffled)
                .unwrap()
                .iter()
                .map(|t| Triangle::new(perm[t.a], perm[t.b], perm[t.c]))
                .collect();

            assert_eq!(original, vertex_sets(&remapped));
        }
    }

    #[test]
    fn test_pruning_does_not_change_result() {
        let points = random_points(200, 42);
        let pruned = triangulate_with(&points, &TriangulationConfig::default()).unwrap();
        let full =
            triangulate_with(&points, &TriangulationConfig::default().with_pruning(false)).unwrap();

        assert_eq!(vertex_sets(pruned.triangles()), vertex_sets(full.triangles()));
        assert!(pruned.stats().completed > 0);
        assert_eq!(full.stats().completed, 0);
        assert!(pruned.stats().circumcircle_tests < full.stats().circumcircle_tests);
    }

    #[test]
    fn test_vertex_closure() {
        let points = random_points(50, 3);
        let triangles = triangulate(&points).unwrap();
        for tri in &triangles {
            assert!(tri.vertices().iter().all(|&v| v < points.len()));
            assert_ne!(tri.a, tri.b);
            assert_ne!(tri.b, tri.c);
            assert_ne!(tri.a, tri.c);
        }
    }

    #[test]
    fn test_f32() {
        let points: Vec<Point<f32>> = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.5, 1.0),
        ];
        let triangles = triangulate(&points).unwrap();
        assert_eq!(triangles.len(), 1);
    }

    #[test]
    fn test_remove_shared_edges() {
        let mut edges = vec![
            Some(Edge::new(0, 1)),
            Some(Edge::new(1, 2)),
            Some(Edge::new(2, 1)),
            Some(Edge::new(3, 0)),
        ];
        remove_shared_edges(&mut edges);
        assert_eq!(
            edges,
            vec![Some(Edge::new(0, 1)), None, None, Some(Edge::new(3, 0))]
        );
    }
}
