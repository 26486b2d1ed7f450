use std::cmp::Ordering;

use crate::math::distance_2d::{cmp_origin_distance, origin_distance};
use crate::math::Point2;

use super::truncated;

/// Orders points by x.
#[must_use]
pub fn by_x(a: &Point2, b: &Point2) -> Ordering {
    a.x.total_cmp(&b.x)
}

/// Orders points by x; x values less than one apart compare equal.
#[must_use]
pub fn by_x_truncated(a: &Point2, b: &Point2) -> Ordering {
    truncated(a.x - b.x)
}

/// Natural order of points: ascending `sqrt(x + y)`.
///
/// Points with a negative coordinate sum sort last.
#[must_use]
pub fn by_origin_distance(a: &Point2, b: &Point2) -> Ordering {
    cmp_origin_distance(a, b)
}

/// Orders points by truncated difference of `sqrt(x + y)`. A point with a
/// negative coordinate sum compares equal to every point.
#[must_use]
pub fn by_origin_distance_truncated(a: &Point2, b: &Point2) -> Ordering {
    let da = origin_distance(a).unwrap_or(f64::NAN);
    let db = origin_distance(b).unwrap_or(f64::NAN);
    truncated(da - db)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver_points() -> Vec<Point2> {
        vec![
            Point2::new(-3.0, 8.0),
            Point2::new(4.0, 10.0),
            Point2::new(6.0, -4.0),
            Point2::new(-10.0, -10.0),
        ]
    }

    #[test]
    fn sort_by_x() {
        let mut pts = driver_points();
        pts.sort_by(by_x);
        let xs: Vec<f64> = pts.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![-10.0, -3.0, 4.0, 6.0]);
    }

    #[test]
    fn sort_by_origin_distance() {
        let mut pts = driver_points();
        pts.sort_by(by_origin_distance);
        // sqrt(2), sqrt(5), sqrt(14), then the undefined (-10, -10).
        assert_eq!(
            pts,
            vec![
                Point2::new(6.0, -4.0),
                Point2::new(-3.0, 8.0),
                Point2::new(4.0, 10.0),
                Point2::new(-10.0, -10.0),
            ]
        );
    }

    #[test]
    fn truncated_x() {
        let a = Point2::new(1.2, 0.0);
        let b = Point2::new(1.9, 5.0);
        assert_eq!(by_x_truncated(&a, &b), Ordering::Equal);
        assert_eq!(by_x(&a, &b), Ordering::Less);
    }

    #[test]
    fn truncated_distance() {
        let near = Point2::new(1.0, 0.0);
        let far = Point2::new(9.0, 0.0);
        let undefined = Point2::new(-5.0, 0.0);
        assert_eq!(by_origin_distance_truncated(&near, &far), Ordering::Less);
        assert_eq!(by_origin_distance_truncated(&undefined, &near), Ordering::Equal);
    }
}
