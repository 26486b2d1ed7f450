//! Comparators over shapes and points.
//!
//! The plain comparators compare the underlying real numbers with
//! `f64::total_cmp` and are total orders, safe for `sort_by`.
//!
//! The `*_truncated` variants reproduce integer-difference comparators that
//! truncate `a - b` toward zero, so values less than one apart compare equal.
//! That equality is not transitive: `0.0 == 0.6` and `0.6 == 1.2` but
//! `0.0 < 1.2`. They are not total orders. Use them for pairwise comparison
//! only; passing them to `sort_by` gives an unspecified order and may panic.

mod point_order;
mod print_all;
mod shape_order;

pub use point_order::{by_origin_distance, by_origin_distance_truncated, by_x, by_x_truncated};
pub use print_all::PrintAll;
pub use shape_order::{by_area, by_leftmost_x, by_leftmost_x_truncated};

use std::cmp::Ordering;

/// Orders by the sign of `difference` after truncating it to an integer.
/// `NaN` compares equal.
#[allow(clippy::cast_possible_truncation)]
fn truncated(difference: f64) -> Ordering {
    (difference as i64).cmp(&0)
}
