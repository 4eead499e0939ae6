//! Append-only point collection that keeps its triangulation current.

use super::bowyer_watson::{triangulate_with, InsertionStats};
use super::config::TriangulationConfig;
use super::triangle::Triangle;
use crate::error::{Result, TriangulationError};
use crate::primitives::Point;
use num_traits::Float;

/// A growing point set and its Delaunay triangulation.
///
/// Every [`push`](Self::push) re-triangulates the whole set, so triangle
/// indices always refer to [`points`](Self::points). Until the points span
/// a non-zero extent the triangle list is simply empty.
///
/// # Example
///
/// ```
/// use bowyer_watson::triangulation::IncrementalTriangulation;
/// use bowyer_watson::Point;
///
/// let mut mesh: IncrementalTriangulation<f64> = IncrementalTriangulation::new();
/// mesh.push(Point::new(0.0, 0.0)).unwrap();
/// mesh.push(Point::new(4.0, 0.0)).unwrap();
/// assert!(mesh.triangles().is_empty());
///
/// mesh.push(Point::new(2.0, 3.0)).unwrap();
/// assert_eq!(mesh.triangles().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct IncrementalTriangulation<F> {
    points: Vec<Point<F>>,
    triangles: Vec<Triangle>,
    stats: InsertionStats,
    config: TriangulationConfig<F>,
}

impl<F: Float> IncrementalTriangulation<F> {
    pub fn new() -> Self {
        Self::with_config(TriangulationConfig::default())
    }

    pub fn with_config(config: TriangulationConfig<F>) -> Self {
        Self {
            points: Vec::new(),
            triangles: Vec::new(),
            stats: InsertionStats::default(),
            config,
        }
    }

    /// Adds a point and returns the updated triangulation.
    ///
    /// # Errors
    ///
    /// Returns [`TriangulationError::NonFiniteCoordinate`] for a NaN or
    /// infinite coordinate, and [`TriangulationError::SuperTriangleOverflow`]
    /// if the grown set is too large to enclose. The point is not added in
    /// either case.
    pub fn push(&mut self, point: Point<F>) -> Result<&[Triangle]> {
        if !point.is_finite() {
            return Err(TriangulationError::NonFiniteCoordinate {
                index: self.points.len(),
            });
        }
        self.points.push(point);
        if let Err(err) = self.rebuild() {
            // rebuild leaves the previous triangles in place on error
            self.points.pop();
            return Err(err);
        }
        Ok(&self.triangles)
    }

    /// Adds several points, triangulating once at the end.
    ///
    /// # Errors
    ///
    /// Same as [`push`](Self::push). Points before the offending one are
    /// kept.
    pub fn extend<I>(&mut self, points: I) -> Result<&[Triangle]>
    where
        I: IntoIterator<Item = Point<F>>,
    {
        let mut failure = None;
        for point in points {
            if !point.is_finite() {
                failure = Some(TriangulationError::NonFiniteCoordinate {
                    index: self.points.len(),
                });
                break;
            }
            self.points.push(point);
        }
        self.rebuild()?;
        match failure {
            Some(err) => Err(err),
            None => Ok(&self.triangles),
        }
    }

    /// Removes all points and triangles.
    pub fn clear(&mut self) {
        self.points.clear();
        self.triangles.clear();
        self.stats = InsertionStats::default();
    }

    #[inline]
    pub fn points(&self) -> &[Point<F>] {
        &self.points
    }

    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Counters from the most recent triangulation.
    #[inline]
    pub fn stats(&self) -> InsertionStats {
        self.stats
    }

    #[inline]
    pub fn config(&self) -> &TriangulationConfig<F> {
        &self.config
    }

    fn rebuild(&mut self) -> Result<()> {
        if self.points.is_empty() {
            self.triangles.clear();
            self.stats = InsertionStats::default();
            return Ok(());
        }

        match triangulate_with(&self.points, &self.config) {
            Ok(result) => {
                self.stats = result.stats();
                self.triangles = result.into_triangles();
                Ok(())
            }
            // Coincident points cannot form a triangle yet
            Err(TriangulationError::DegenerateBoundingBox { .. }) => {
                self.triangles.clear();
                self.stats = InsertionStats::default();
                Ok(())
            }
            Err(err) => Err(err),
        }
    }
}

impl<F: Float> Default for IncrementalTriangulation<F> {
    fn default() -> Self {
        Self::new()
    }
}
