use thiserror::Error;

use crate::geometry::ShapeKind;

/// Error type for shape construction.
///
/// Every variant describes why a set of inputs does not form a valid shape.
/// A failed construction never yields a value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("invalid inputs for a {shape}: expected {expected} vertices, found {found}")]
    VertexCount {
        shape: ShapeKind,
        expected: usize,
        found: usize,
    },

    #[error("invalid inputs for a {shape}: expected at least {expected} coordinates, found {found}")]
    CoordinateCount {
        shape: ShapeKind,
        expected: usize,
        found: usize,
    },

    #[error("invalid inputs for a {shape}: all vertices lie on x = {x}")]
    SharedX { shape: ShapeKind, x: f64 },

    #[error("invalid inputs for a {shape}: vertices are collinear")]
    ZeroArea { shape: ShapeKind },

    #[error(
        "invalid inputs for a quadrilateral: triangle without vertex ({x}, {y}) is degenerate"
    )]
    DegenerateSubTriangle { x: f64, y: f64 },

    #[error("invalid inputs for a circle: radius {radius} must be positive")]
    NonPositiveRadius { radius: f64 },

    #[error("invalid inputs for a {shape}: coordinate {index} is not finite ({value})")]
    NonFiniteCoordinate {
        shape: ShapeKind,
        index: usize,
        value: f64,
    },

    #[error("coordinate list has odd length {found}; expected (x, y) pairs")]
    OddCoordinateCount { found: usize },
}

impl ShapeError {
    /// Returns the kind of shape whose construction failed, if the error names one.
    #[must_use]
    pub fn shape(&self) -> Option<ShapeKind> {
        match self {
            Self::VertexCount { shape, .. }
            | Self::CoordinateCount { shape, .. }
            | Self::SharedX { shape, .. }
            | Self::ZeroArea { shape }
            | Self::NonFiniteCoordinate { shape, .. } => Some(*shape),
            Self::DegenerateSubTriangle { .. } => Some(ShapeKind::Quadrilateral),
            Self::NonPositiveRadius { .. } => Some(ShapeKind::Circle),
            Self::OddCoordinateCount { .. } => None,
        }
    }
}

/// Convenience type alias for results using [`ShapeError`].
pub type Result<T> = std::result::Result<T, ShapeError>;
