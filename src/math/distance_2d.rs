use std::cmp::Ordering;

use super::Point2;

/// Returns the Euclidean length of the segment from `a` to `b`.
#[must_use]
pub fn segment_length(a: &Point2, b: &Point2) -> f64 {
    nalgebra::distance(a, b)
}

/// Returns the origin distance used to order points: `sqrt(x + y)`.
///
/// This is the square root of the coordinate sum, not of the sum of squares.
/// Points whose coordinates sum to a negative value have no real distance and
/// yield `None`.
#[must_use]
pub fn origin_distance(p: &Point2) -> Option<f64> {
    let sum = p.x + p.y;
    if sum >= 0.0 {
        Some(sum.sqrt())
    } else {
        None
    }
}

/// Compares two points by [`origin_distance`], ascending.
///
/// Points without a real distance sort after every point that has one and
/// compare equal to each other.
#[must_use]
pub fn cmp_origin_distance(a: &Point2, b: &Point2) -> Ordering {
    match (origin_distance(a), origin_distance(b)) {
        (Some(da), Some(db)) => da.total_cmp(&db),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
