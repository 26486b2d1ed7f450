use crate::error::{Result, ShapeError};
use crate::math::Point2;

/// Pairs a flat coordinate list `[x0, y0, x1, y1, ...]` into points.
pub struct PointsFromCoordinates<'a> {
    coordinates: &'a [f64],
}

impl<'a> PointsFromCoordinates<'a> {
    /// Creates a new `PointsFromCoordinates` operation.
    #[must_use]
    pub fn new(coordinates: &'a [f64]) -> Self {
        Self { coordinates }
    }

    /// Executes the operation, returning one point per `(x, y)` pair in input
    /// order.
    ///
    /// # Errors
    ///
    /// Returns `ShapeError::OddCoordinateCount` if the list has odd length.
    pub fn execute(&self) -> Result<Vec<Point2>> {
        if self.coordinates.len() % 2 != 0 {
            return Err(ShapeError::OddCoordinateCount {
                found: self.coordinates.len(),
            });
        }
        Ok(self
            .coordinates
            .chunks_exact(2)
            .map(|xy| Point2::new(xy[0], xy[1]))
            .collect())
    }
}
