//! Circumcircle construction and the boundary-inclusive containment test.
//!
//! The circumcenter is found by intersecting the perpendicular bisectors of
//! two triangle edges, using their slopes. Slopes blow up on horizontal
//! edges, so the bisector pair is chosen to avoid any edge whose endpoints
//! share a y coordinate within the tolerance.

use crate::error::{Result, TriangulationError};
use crate::primitives::{Circle, Point};
use num_traits::Float;

/// The circumscribed circle of a triangle.
///
/// The squared radius is kept as computed so that containment compares
/// squared distances without a round trip through `sqrt`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circumcircle<F> {
    /// Circumcenter. Its `z` is always zero.
    pub center: Point<F>,
    /// Squared circumradius.
    pub radius_squared: F,
}

impl<F: Float> Circumcircle<F> {
    /// Circumradius.
    #[inline]
    pub fn radius(&self) -> F {
        self.radius_squared.sqrt()
    }

    /// True if `p` lies inside the circle or exactly on its boundary.
    #[inline]
    pub fn contains(&self, p: Point<F>) -> bool {
        self.center.distance_squared(p) <= self.radius_squared
    }

    /// Largest x coordinate reached by the circle.
    ///
    /// Once the insertion sweep has moved past this value, no later point
    /// can fall inside the circle.
    #[inline]
    pub fn max_x(&self) -> F {
        self.center.x + self.radius()
    }

    /// Converts to a plain [`Circle`].
    #[inline]
    pub fn to_circle(&self) -> Circle<F> {
        Circle::new(self.center, self.radius())
    }
}

/// Computes the circumcircle of the triangle `a`, `b`, `c`.
///
/// `eps` is the tolerance under which two y coordinates count as equal.
///
/// # Errors
///
/// Returns [`TriangulationError::DegenerateTriangle`] if all three vertices
/// share a y coordinate within `eps`, or if the vertices are otherwise
/// collinear so that the bisectors never meet.
///
/// # Example
///
/// ```
/// use bowyer_watson::triangulation::circumcircle;
/// use bowyer_watson::Point;
///
/// let circle = circumcircle(
///     Point::new(0.0_f64, 0.0),
///     Point::new(4.0, 0.0),
///     Point::new(2.0, 2.0),
///     f64::EPSILON,
/// )
/// .unwrap();
///
/// assert_eq!(circle.center, Point::new(2.0, 0.0));
/// assert_eq!(circle.radius(), 2.0);
/// ```
pub fn circumcircle<F: Float>(
    a: Point<F>,
    b: Point<F>,
    c: Point<F>,
    eps: F,
) -> Result<Circumcircle<F>> {
    let two = F::one() + F::one();

    if (a.y - b.y).abs() < eps && (b.y - c.y).abs() < eps {
        return Err(TriangulationError::DegenerateTriangle);
    }

    let (cx, cy) = if (b.y - a.y).abs() < eps {
        // a-b is horizontal: its bisector is the vertical line through its midpoint
        let m2 = -(c.x - b.x) / (c.y - b.y);
        let mx2 = (b.x + c.x) / two;
        let my2 = (b.y + c.y) / two;
        let cx = (b.x + a.x) / two;
        (cx, m2 * (cx - mx2) + my2)
    } else if (c.y - b.y).abs() < eps {
        // b-c is horizontal
        let m1 = -(b.x - a.x) / (b.y - a.y);
        let mx1 = (a.x + b.x) / two;
        let my1 = (a.y + b.y) / two;
        let cx = (c.x + b.x) / two;
        (cx, m1 * (cx - mx1) + my1)
    } else {
        let m1 = -(b.x - a.x) / (b.y - a.y);
        let m2 = -(c.x - b.x) / (c.y - b.y);
        let mx1 = (a.x + b.x) / two;
        let mx2 = (b.x + c.x) / two;
        let my1 = (a.y + b.y) / two;
        let my2 = (b.y + c.y) / two;
        let cx = (m1 * mx1 - m2 * mx2 + my2 - my1) / (m1 - m2);
        (cx, m1 * (cx - mx1) + my1)
    };

    // Parallel bisectors put the center at infinity
    if !cx.is_finite() || !cy.is_finite() {
        return Err(TriangulationError::DegenerateTriangle);
    }

    let center = Point::new(cx, cy);
    Ok(Circumcircle {
        center,
        radius_squared: center.distance_squared(b),
    })
}

/// Tests whether `p` lies inside or on the circumcircle of `a`, `b`, `c`.
///
/// Returns the containment result together with the circle, which the
/// insertion sweep needs for pruning.
///
/// # Errors
///
/// Propagates [`TriangulationError::DegenerateTriangle`] from
/// [`circumcircle`].
///
/// # Example
///
/// ```
/// use bowyer_watson::triangulation::in_circumcircle;
/// use bowyer_watson::Point;
///
/// let a = Point::new(0.0_f64, 0.0);
/// let b = Point::new(1.0, 0.0);
/// let c = Point::new(0.0, 1.0);
///
/// // The fourth corner of the unit square is on the circle and counts as inside
/// let (inside, _) = in_circumcircle(Point::new(1.0, 1.0), a, b, c, f64::EPSILON).unwrap();
/// assert!(inside);
///
/// let (inside, _) = in_circumcircle(Point::new(2.0, 2.0), a, b, c, f64::EPSILON).unwrap();
/// assert!(!inside);
/// ```
#[inline]
pub fn in_circumcircle<F: Float>(
    p: Point<F>,
    a: Point<F>,
    b: Point<F>,
    c: Point<F>,
    eps: F,
) -> Result<(bool, Circumcircle<F>)> {
    let circle = circumcircle(a, b, c, eps)?;
    Ok((circle.contains(p), circle))
}
