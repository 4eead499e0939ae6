//! Circle type.

use super::Point;
use num_traits::Float;

/// A circle defined by center and radius.
///
/// # Example
///
/// ```
/// use bowyer_watson::primitives::{Circle, Point};
///
/// let circle: Circle<f64> = Circle::new(Point::new(0.0, 0.0), 1.0);
/// assert!(circle.contains(Point::new(1.0, 0.0)));
/// assert!(!circle.contains(Point::new(1.0, 0.5)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle<F> {
    /// Center point of the circle
    pub center: Point<F>,
    /// Radius of the circle (must be non-negative)
    pub radius: F,
}

impl<F: Float> Circle<F> {
    /// Creates a new circle from center and radius.
    #[inline]
    pub fn new(center: Point<F>, radius: F) -> Self {
        Self { center, radius }
    }

    /// Checks if a point is inside the circle (including boundary).
    #[inline]
    pub fn contains(&self, point: Point<F>) -> bool {
        self.center.distance_squared(point) <= self.radius * self.radius
    }

    /// Largest x coordinate reached by the circle.
    #[inline]
    pub fn max_x(&self) -> F {
        self.center.x + self.radius
    }
}
