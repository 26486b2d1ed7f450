//! Planar shapes with canonical vertex ordering.
//!
//! Triangles and quadrilaterals are built from unordered points. Construction
//! sorts the points clockwise around their centroid and rejects degenerate
//! input, so every live polygon is valid. Circles share the same metrics and
//! ordering interface through [`geometry::Shape`].

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{Result, ShapeError};
pub use geometry::{Circle, Quadrilateral, Shape, ShapeKind, Triangle};
