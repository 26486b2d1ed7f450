use std::fmt;

use crate::geometry::Shape;

/// Writes every shape of a list, one per line, and reports the least shape by
/// area.
pub struct PrintAll<'a> {
    shapes: &'a [Shape],
}

impl<'a> PrintAll<'a> {
    /// Creates a new `PrintAll` operation.
    #[must_use]
    pub fn new(shapes: &'a [Shape]) -> Self {
        Self { shapes }
    }

    /// Writes each shape's text form to `out` in list order and returns the
    /// shape with the least area. The first of several equal-area shapes wins.
    /// Returns `Ok(None)` for an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn execute<W: fmt::Write>(&self, out: &mut W) -> Result<Option<&'a Shape>, fmt::Error> {
        let mut least: Option<&'a Shape> = None;
        for shape in self.shapes {
            let is_less = match least {
                Some(l) => l.cmp_area(shape).is_gt(),
                None => true,
            };
            if is_less {
                least = Some(shape);
            }
            writeln!(out, "{shape}")?;
        }
        Ok(least)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Circle, Quadrilateral, ShapeKind, Triangle};
    use crate::math::Point2;
    use crate::operations::creation::PointsFromCoordinates;

    #[test]
    fn prints_each_and_returns_least() {
        let pts = PointsFromCoordinates::new(&[2.2, 3.4, -10.2, 4.3, -10.2, 5.6, -6.2, -4.87])
            .execute()
            .unwrap();
        let shapes: Vec<Shape> = vec![
            Circle::new(Point2::new(2.0, 3.0), 4.0).unwrap().into(),
            Triangle::new(&pts).unwrap().into(),
            Quadrilateral::new(&pts).unwrap().into(),
        ];
        let mut out = String::new();
        let least = PrintAll::new(&shapes).execute(&mut out).unwrap().unwrap();

        assert_eq!(least.kind(), ShapeKind::Triangle);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Circle[center: 2.00,3.00; radius: 4.00]");
        assert_eq!(
            lines[1],
            "Triangle[(-10.20, 4.30), (-10.20, 5.60), (2.20, 3.40)]"
        );
        assert!(lines[2].starts_with("Quadrilateral[(-10.20, 4.30), "));
    }

    #[test]
    fn empty_list() {
        let mut out = String::new();
        assert!(PrintAll::new(&[]).execute(&mut out).unwrap().is_none());
        assert!(out.is_empty());
    }
}
