//! Axis-aligned bounding box.

use crate::primitives::Point;
use num_traits::Float;

/// A 2D axis-aligned bounding box.
///
/// Defined by minimum and maximum corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb<F> {
    /// Minimum corner (smallest x and y values).
    pub min: Point<F>,
    /// Maximum corner (largest x and y values).
    pub max: Point<F>,
}

impl<F: Float> Aabb<F> {
    /// Creates a new AABB from min and max corners.
    ///
    /// Does not validate that min <= max.
    #[inline]
    pub fn new(min: Point<F>, max: Point<F>) -> Self {
        Self { min, max }
    }

    /// Creates an AABB containing a single point.
    #[inline]
    pub fn from_point(p: Point<F>) -> Self {
        Self {
            min: Point::new(p.x, p.y),
            max: Point::new(p.x, p.y),
        }
    }

    /// Creates an AABB from an iterator of points.
    ///
    /// Returns `None` if the iterator is empty.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point<F>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;

        let mut aabb = Self::from_point(first);
        for p in iter {
            aabb = aabb.expand_to_include(p);
        }
        Some(aabb)
    }

    /// Returns the width of the AABB.
    #[inline]
    pub fn width(self) -> F {
        self.max.x - self.min.x
    }

    /// Returns the height of the AABB.
    #[inline]
    pub fn height(self) -> F {
        self.max.y - self.min.y
    }

    /// Returns the larger of width and height.
    #[inline]
    pub fn max_extent(self) -> F {
        let (w, h) = (self.width(), self.height());
        if w > h {
            w
        } else {
            h
        }
    }

    /// Returns the center point of the AABB.
    #[inline]
    pub fn center(self) -> Point<F> {
        self.min.midpoint(self.max)
    }

    /// Returns a new AABB expanded to include the given point.
    #[inline]
    pub fn expand_to_include(self, p: Point<F>) -> Self {
        Self {
            min: Point::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Point::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }
}
