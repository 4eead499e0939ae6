//! Tunable parameters for the triangulator.

use num_traits::Float;

/// What to do when the input's bounding box has no extent, i.e. every point
/// is coincident.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExtentPolicy<F> {
    /// Fail with [`TriangulationError::DegenerateBoundingBox`].
    ///
    /// [`TriangulationError::DegenerateBoundingBox`]: crate::TriangulationError::DegenerateBoundingBox
    Reject,
    /// Build the super-triangle as if the bounding box had this extent.
    Inflate(F),
}

/// Parameters for [`triangulate_with`](super::triangulate_with).
///
/// Every tolerance is explicit. The defaults reproduce the classic
/// Bowyer-Watson setup: machine epsilon for the horizontal-edge checks and
/// a super-triangle reaching twice the bounding box extent from its center.
///
/// # Example
///
/// ```
/// use bowyer_watson::triangulation::{ExtentPolicy, TriangulationConfig};
///
/// let config: TriangulationConfig<f64> = TriangulationConfig::default()
///     .with_super_triangle_margin(100.0)
///     .with_extent_policy(ExtentPolicy::Inflate(1.0));
///
/// assert_eq!(config.super_triangle_margin, 100.0);
/// assert_eq!(config.degeneracy_epsilon, f64::EPSILON);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangulationConfig<F> {
    /// Two y coordinates closer than this are treated as equal when choosing
    /// circumcircle bisectors. Not scaled by the input's magnitude.
    pub degeneracy_epsilon: F,
    /// Super-triangle vertices sit this many bounding-box extents from the
    /// box center. Small margins can lose triangles along the convex hull.
    pub super_triangle_margin: F,
    /// Handling of an input whose points are all coincident.
    pub extent_policy: ExtentPolicy<F>,
    /// Skip circumcircle tests for triangles the sweep has already passed.
    pub prune_completed: bool,
}

impl<F: Float> TriangulationConfig<F> {
    pub fn with_degeneracy_epsilon(mut self, eps: F) -> Self {
        self.degeneracy_epsilon = eps;
        self
    }

    pub fn with_super_triangle_margin(mut self, margin: F) -> Self {
        self.super_triangle_margin = margin;
        self
    }

    pub fn with_extent_policy(mut self, policy: ExtentPolicy<F>) -> Self {
        self.extent_policy = policy;
        self
    }

    pub fn with_pruning(mut self, prune_completed: bool) -> Self {
        self.prune_completed = prune_completed;
        self
    }
}

impl<F: Float> Default for TriangulationConfig<F> {
    fn default() -> Self {
        Self {
            degeneracy_epsilon: F::epsilon(),
            super_triangle_margin: F::one() + F::one(),
            extent_policy: ExtentPolicy::Reject,
            prune_completed: true,
        }
    }
}
