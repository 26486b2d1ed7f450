mod circle;
mod quadrilateral;
mod shape;
mod triangle;

pub use circle::Circle;
pub use quadrilateral::Quadrilateral;
pub use shape::{Shape, ShapeKind};
pub use triangle::Triangle;

use std::fmt;

use crate::math::Point2;

/// Writes `Name[(x1, y1), (x2, y2), ...]` with two decimals per coordinate.
fn write_vertices(f: &mut fmt::Formatter<'_>, name: &str, vertices: &[Point2]) -> fmt::Result {
    write!(f, "{name}[")?;
    for (i, v) in vertices.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "({:.2}, {:.2})", v.x, v.y)?;
    }
    write!(f, "]")
}
