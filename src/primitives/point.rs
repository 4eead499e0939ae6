//! Planar point type with a carried z value.

use num_traits::Float;

/// A point in the plane.
///
/// `z` rides along with the point but is ignored by every planar
/// computation in this crate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<F> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Point<F> {
    /// Creates a new point with `z = 0`.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y, z: F::zero() }
    }

    /// Creates a new point carrying a z value.
    #[inline]
    pub fn with_z(x: F, y: F, z: F) -> Self {
        Self { x, y, z }
    }

    /// Creates a point at the origin.
    #[inline]
    pub fn origin() -> Self {
        Self::new(F::zero(), F::zero())
    }

    /// Squared planar distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Planar distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        self.distance_squared(other).sqrt()
    }

    /// Planar midpoint. The result has `z = 0`.
    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        let two = F::one() + F::one();
        Self::new((self.x + other.x) / two, (self.y + other.y) / two)
    }

    /// Returns true if both planar coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<F: Float> Default for Point<F> {
    fn default() -> Self {
        Self::origin()
    }
}
