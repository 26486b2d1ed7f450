use crate::error::{Result, ShapeError};
use crate::geometry::{Circle, Quadrilateral, Shape, ShapeKind, Triangle};
use crate::math::Point2;

use super::PointsFromCoordinates;

/// Builds a [`Shape`] of a given kind from a flat list of numbers.
///
/// Polygons take `(x, y)` pairs and use the first three or four of them. A
/// circle takes `[center_x, center_y, radius]`. Extra values are ignored.
pub struct MakeShape<'a> {
    kind: ShapeKind,
    coordinates: &'a [f64],
}

impl<'a> MakeShape<'a> {
    /// Creates a new `MakeShape` operation.
    #[must_use]
    pub fn new(kind: ShapeKind, coordinates: &'a [f64]) -> Self {
        Self { kind, coordinates }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the numbers do not describe a valid shape of the
    /// requested kind. No shape is produced in that case.
    pub fn execute(&self) -> Result<Shape> {
        match self.kind {
            ShapeKind::Circle => match *self.coordinates {
                [x, y, radius, ..] => Ok(Circle::new(Point2::new(x, y), radius)?.into()),
                _ => Err(ShapeError::CoordinateCount {
                    shape: ShapeKind::Circle,
                    expected: 3,
                    found: self.coordinates.len(),
                }),
            },
            ShapeKind::Triangle => {
                let points = PointsFromCoordinates::new(self.coordinates).execute()?;
                Ok(Triangle::new(&points)?.into())
            }
            ShapeKind::Quadrilateral => {
                let points = PointsFromCoordinates::new(self.coordinates).execute()?;
                Ok(Quadrilateral::new(&points)?.into())
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn circle_from_center_and_radius() {
        let s = MakeShape::new(ShapeKind::Circle, &[2.0, 3.0, 4.0]).execute().unwrap();
        assert_eq!(s.to_string(), "Circle[center: 2.00,3.00; radius: 4.00]");
    }

    #[test]
    fn circle_needs_three_numbers() {
        let err = MakeShape::new(ShapeKind::Circle, &[2.0, 3.0]).execute().unwrap_err();
        assert!(matches!(err, ShapeError::CoordinateCount { found: 2, .. }));
    }

    #[test]
    fn triangle_uses_first_three_pairs() {
        let coords = [-3.0, 8.0, 4.0, 10.0, 6.0, -4.0, -10.0, -10.0];
        let s = MakeShape::new(ShapeKind::Triangle, &coords).execute().unwrap();
        assert_eq!(s.kind(), ShapeKind::Triangle);
        assert_relative_eq!(s.leftmost_x(), -3.0);
    }

    #[test]
    fn quadrilateral_from_pairs() {
        let coords = [0.0, 0.0, 4.0, 0.0, 4.0, 4.0, 0.0, 4.0];
        let s = MakeShape::new(ShapeKind::Quadrilateral, &coords).execute().unwrap();
        assert_relative_eq!(s.area(), 16.0, epsilon = 1e-9);
    }

    #[test]
    fn collinear_triangle_fails() {
        let err = MakeShape::new(ShapeKind::Triangle, &[0.0, 0.0, 4.0, 0.0, 8.0, 0.0])
            .execute()
            .unwrap_err();
        assert_eq!(err.shape(), Some(ShapeKind::Triangle));
    }

    #[test]
    fn odd_coordinate_list_fails() {
        let err = MakeShape::new(ShapeKind::Quadrilateral, &[0.0; 7])
            .execute()
            .unwrap_err();
        assert_eq!(err, ShapeError::OddCoordinateCount { found: 7 });
    }
}
