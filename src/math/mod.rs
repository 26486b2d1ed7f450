pub mod distance_2d;
pub mod polygon_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Rounds both coordinates of `p` to the nearest integer, halves away from zero.
///
/// Negative zero is normalized to `0.0`.
#[must_use]
pub fn round_to_grid(p: &Point2) -> Point2 {
    Point2::new(p.x.round() + 0.0, p.y.round() + 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_to_grid_nearest() {
        assert_eq!(round_to_grid(&Point2::new(0.8, -0.1)), Point2::new(1.0, 0.0));
        assert_eq!(round_to_grid(&Point2::new(2.5, -2.5)), Point2::new(3.0, -3.0));
    }

    #[test]
    fn round_to_grid_drops_negative_zero() {
        let p = round_to_grid(&Point2::new(-0.3, -0.0));
        assert!(p.x.is_sign_positive());
        assert!(p.y.is_sign_positive());
    }
}
