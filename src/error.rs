//! Error types for triangulation.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TriangulationError>;

/// Errors that can occur while building a triangulation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TriangulationError {
    /// The input point sequence was empty.
    #[error("cannot triangulate an empty point set")]
    EmptyInput,

    /// All input points are coincident, so the bounding box has no extent.
    #[error("degenerate bounding box ({width} x {height}): points are coincident")]
    DegenerateBoundingBox {
        /// Bounding box width.
        width: f64,
        /// Bounding box height.
        height: f64,
    },

    /// The super-triangle built around the input does not fit in the float
    /// type, e.g. for coordinates near its maximum.
    #[error("super-triangle for extent {extent} overflows the coordinate type")]
    SuperTriangleOverflow {
        /// Bounding box extent the super-triangle was scaled from.
        extent: f64,
    },

    /// The triangle's vertices are collinear and it has no finite circumcircle.
    #[error("circumcircle undefined: points are coincident")]
    DegenerateTriangle,

    /// An input point has a NaN or infinite coordinate.
    #[error("point {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Index of the offending point in the input slice.
        index: usize,
    },
}
