//! Planar Delaunay triangulation.
//!
//! The entry points are [`triangulate`] for the default configuration and
//! [`triangulate_with`] for explicit tolerances. Triangles refer to input
//! points by their index in the slice passed in.

mod bowyer_watson;
mod circumcircle;
mod config;
mod incremental;
mod triangle;

pub use bowyer_watson::{triangulate, triangulate_with, InsertionStats, Triangulation};
pub use circumcircle::{circumcircle, in_circumcircle, Circumcircle};
pub use config::{ExtentPolicy, TriangulationConfig};
pub use incremental::IncrementalTriangulation;
pub use triangle::{Edge, Triangle};
