use std::f64::consts::{PI, TAU};
use std::fmt;

use crate::error::{Result, ShapeError};
use crate::math::{round_to_grid, Point2};

use super::ShapeKind;

/// A circle in the plane, defined by a center and a positive radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns `ShapeError::NonFiniteCoordinate` if the center is not finite,
    /// or `ShapeError::NonPositiveRadius` if the radius is not a positive,
    /// finite number.
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        Self::check(center, radius)
            .map(|()| Self { center, radius })
            .inspect_err(|err| {
                tracing::debug!(shape = %ShapeKind::Circle, %err, "rejected construction");
            })
    }

    fn check(center: Point2, radius: f64) -> Result<()> {
        for (index, value) in [center.x, center.y].into_iter().enumerate() {
            if !value.is_finite() {
                return Err(ShapeError::NonFiniteCoordinate {
                    shape: ShapeKind::Circle,
                    index,
                    value,
                });
            }
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(ShapeError::NonPositiveRadius { radius });
        }
        Ok(())
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns `center.x - radius`, the least x reached by the circle.
    #[must_use]
    pub fn leftmost_x(&self) -> f64 {
        self.center.x - self.radius
    }

    /// A circle has no straight sides.
    #[must_use]
    pub fn num_sides(&self) -> usize {
        ShapeKind::Circle.num_sides()
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    #[must_use]
    pub fn perimeter(&self) -> f64 {
        TAU * self.radius
    }

    /// Rounds the center and the radius to the nearest integers.
    ///
    /// Left unchanged if the radius would round to zero. Returns whether the
    /// snap was applied.
    pub fn snap(&mut self) -> bool {
        let center = round_to_grid(&self.center);
        let radius = self.radius.round();
        match Self::check(center, radius) {
            Ok(()) => {
                self.center = center;
                self.radius = radius;
                true
            }
            Err(err) => {
                tracing::debug!(shape = %ShapeKind::Circle, %err, "discarded snap");
                false
            }
        }
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Circle[center: {:.2},{:.2}; radius: {:.2}]",
            self.center.x, self.center.y, self.radius
        )
    }
}
