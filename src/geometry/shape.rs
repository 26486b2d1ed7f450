use std::cmp::Ordering;
use std::fmt;

use crate::math::Point2;

use super::{Circle, Quadrilateral, Triangle};

/// The kinds of shape the crate can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Triangle,
    Quadrilateral,
}

impl ShapeKind {
    /// Number of straight sides; zero for a circle.
    #[must_use]
    pub fn num_sides(self) -> usize {
        match self {
            Self::Circle => 0,
            Self::Triangle => 3,
            Self::Quadrilateral => 4,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Circle => "circle",
            Self::Triangle => "triangle",
            Self::Quadrilateral => "quadrilateral",
        })
    }
}

/// Any planar shape.
///
/// Operations dispatch to the concrete type of each variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Triangle(Triangle),
    Quadrilateral(Quadrilateral),
}

impl Shape {
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Circle(_) => ShapeKind::Circle,
            Self::Triangle(_) => ShapeKind::Triangle,
            Self::Quadrilateral(_) => ShapeKind::Quadrilateral,
        }
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        match self {
            Self::Circle(c) => c.area(),
            Self::Triangle(t) => t.area(),
            Self::Quadrilateral(q) => q.area(),
        }
    }

    #[must_use]
    pub fn perimeter(&self) -> f64 {
        match self {
            Self::Circle(c) => c.perimeter(),
            Self::Triangle(t) => t.perimeter(),
            Self::Quadrilateral(q) => q.perimeter(),
        }
    }

    /// The least x reached by the shape: the anchor vertex of a polygon, or
    /// `center.x - radius` for a circle.
    #[must_use]
    pub fn leftmost_x(&self) -> f64 {
        match self {
            Self::Circle(c) => c.leftmost_x(),
            Self::Triangle(t) => t.leftmost_x(),
            Self::Quadrilateral(q) => q.leftmost_x(),
        }
    }

    #[must_use]
    pub fn num_sides(&self) -> usize {
        self.kind().num_sides()
    }

    /// The anchored clockwise vertices of a polygon, or the center of a circle.
    #[must_use]
    pub fn position(&self) -> Vec<Point2> {
        match self {
            Self::Circle(c) => vec![*c.center()],
            Self::Triangle(t) => t.position().to_vec(),
            Self::Quadrilateral(q) => q.position().to_vec(),
        }
    }

    /// Snaps the shape to the integer grid; see the per-kind `snap` methods.
    /// Returns whether the snap was applied.
    pub fn snap(&mut self) -> bool {
        match self {
            Self::Circle(c) => c.snap(),
            Self::Triangle(t) => t.snap(),
            Self::Quadrilateral(q) => q.snap(),
        }
    }

    /// Natural order of shapes: ascending area.
    #[must_use]
    pub fn cmp_area(&self, other: &Self) -> Ordering {
        self.area().total_cmp(&other.area())
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Self::Circle(c)
    }
}

impl From<Triangle> for Shape {
    fn from(t: Triangle) -> Self {
        Self::Triangle(t)
    }
}

impl From<Quadrilateral> for Shape {
    fn from(q: Quadrilateral) -> Self {
        Self::Quadrilateral(q)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Circle(c) => fmt::Display::fmt(c, f),
            Self::Triangle(t) => fmt::Display::fmt(t, f),
            Self::Quadrilateral(q) => fmt::Display::fmt(q, f),
        }
    }
}
