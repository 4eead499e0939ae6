//! bowyer-watson - Planar Delaunay triangulation
//!
//! Computes the Delaunay triangulation of a point set by incremental
//! Bowyer-Watson insertion: no input point lies strictly inside the
//! circumcircle of any output triangle, and the triangles cover the convex
//! hull of the input.
//!
//! Arithmetic is plain floating point. Near-degenerate input is handled by
//! explicit tolerances in [`TriangulationConfig`], not by exact predicates.
//!
//! # Example
//!
//! ```
//! use bowyer_watson::{triangulate, Point};
//!
//! let points: Vec<Point<f64>> = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(0.0, 1.0),
//! ];
//!
//! let triangles = triangulate(&points).unwrap();
//! assert_eq!(triangles.len(), 2);
//! assert!(triangles[0].shares_edge(&triangles[1]));
//! ```

pub mod bounds;
pub mod error;
pub mod hull;
pub mod primitives;
pub mod triangulation;

pub use error::{Result, TriangulationError};
pub use primitives::{Circle, Point};
pub use triangulation::{
    triangulate, triangulate_with, IncrementalTriangulation, Triangle, TriangulationConfig,
};
