use std::cmp::Ordering;

use crate::geometry::Shape;

use super::truncated;

/// Orders shapes by their least x: the anchor vertex of a polygon, or
/// `center.x - radius` for a circle.
#[must_use]
pub fn by_leftmost_x(a: &Shape, b: &Shape) -> Ordering {
    a.leftmost_x().total_cmp(&b.leftmost_x())
}

/// Like [`by_leftmost_x`], but shapes whose least x differ by less than one
/// compare equal.
#[must_use]
pub fn by_leftmost_x_truncated(a: &Shape, b: &Shape) -> Ordering {
    truncated(a.leftmost_x() - b.leftmost_x())
}

/// Natural order of shapes: ascending area.
#[must_use]
pub fn by_area(a: &Shape, b: &Shape) -> Ordering {
    a.cmp_area(b)
}
