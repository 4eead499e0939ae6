//! Convex hull of a point set.
//!
//! A Delaunay triangulation covers exactly the convex hull of its input, and
//! a triangulation of `n` points with `h` of them on the hull has
//! `2n - h - 2` triangles. The helpers here give callers both numbers.
//!
//! # Example
//!
//! ```
//! use bowyer_watson::hull::{convex_hull_indices, hull_area};
//! use bowyer_watson::Point;
//!
//! let points: Vec<Point<f64>> = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(0.5, 0.5), // Interior point
//!     Point::new(1.0, 1.0),
//!     Point::new(0.0, 1.0),
//! ];
//!
//! let hull = convex_hull_indices(&points);
//! assert_eq!(hull.len(), 4);
//! assert!(!hull.contains(&2));
//! assert!((hull_area(&points, &hull) - 1.0).abs() < 1e-12);
//! ```

use crate::primitives::Point;
use num_traits::Float;
use std::cmp::Ordering;

/// Computes the convex hull using Andrew's monotone chain algorithm and
/// returns the indices of the hull vertices.
///
/// Indices are in counter-clockwise order, starting from the lowest-x
/// point. Points lying on a hull edge are not reported. The first index
/// is not repeated at the end.
///
/// # Complexity
///
/// - Time: O(n log n) due to sorting
/// - Space: O(n)
pub fn convex_hull_indices<F: Float>(points: &[Point<F>]) -> Vec<usize> {
    if points.len() < 3 {
        return (0..points.len()).collect();
    }

    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&i, &j| {
        let (a, b) = (points[i], points[j]);
        a.x.partial_cmp(&b.x)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
    });

    let mut lower: Vec<usize> = Vec::new();
    for &i in &order {
        while lower.len() >= 2
            && cross(
                points[lower[lower.len() - 2]],
                points[lower[lower.len() - 1]],
                points[i],
            ) <= F::zero()
        {
            lower.pop();
        }
        lower.push(i);
    }

    let mut upper: Vec<usize> = Vec::new();
    for &i in order.iter().rev() {
        while upper.len() >= 2
            && cross(
                points[upper[upper.len() - 2]],
                points[upper[upper.len() - 1]],
                points[i],
            ) <= F::zero()
        {
            upper.pop();
        }
        upper.push(i);
    }

    // Each chain ends where the other begins
    lower.pop();
    upper.pop();

    lower.extend(upper);
    lower
}

/// Area of the polygon visiting `points` in the order given by `hull`.
///
/// Uses the shoelace formula. Returns 0 for fewer than 3 vertices.
pub fn hull_area<F: Float>(points: &[Point<F>], hull: &[usize]) -> F {
    if hull.len() < 3 {
        return F::zero();
    }

    let n = hull.len();
    let mut area = F::zero();
    for i in 0..n {
        let a = points[hull[i]];
        let b = points[hull[(i + 1) % n]];
        area = area + a.x * b.y - b.x * a.y;
    }

    area.abs() / (F::one() + F::one())
}

/// Cross product of vectors OA and OB.
/// Positive if counter-clockwise, negative if clockwise, zero if collinear.
#[inline]
fn cross<F: Float>(o: Point<F>, a: Point<F>, b: Point<F>) -> F {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}
