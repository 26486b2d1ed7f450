use std::fmt;

use crate::error::Result;
use crate::math::polygon_2d::{
    anchor_index, canonicalize, perimeter, quadrilateral_area, rotate_to_canonical_start,
    take_vertices, validate_quadrilateral,
};
use crate::math::{round_to_grid, Point2};

use super::{write_vertices, ShapeKind};

/// A quadrilateral whose four 3-vertex sub-triangles are all non-degenerate.
///
/// Vertices are held in clockwise order around their centroid. Validation
/// rejects any three collinear vertices but does not reject every
/// self-intersecting configuration, and [`Quadrilateral::area`] is exact only
/// for convex input.
#[derive(Debug, Clone, PartialEq)]
pub struct Quadrilateral {
    vertices: [Point2; 4],
}

impl Quadrilateral {
    /// Creates a quadrilateral from the first four of `points`; further points
    /// are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than four points are given, a coordinate is
    /// not finite, or dropping any one vertex leaves a degenerate triangle.
    pub fn new(points: &[Point2]) -> Result<Self> {
        match Self::canonical_vertices(points) {
            Ok(vertices) => Ok(Self { vertices }),
            Err(err) => {
                tracing::debug!(shape = %ShapeKind::Quadrilateral, %err, "rejected construction");
                Err(err)
            }
        }
    }

    /// Returns whether the first four of `points` form a valid quadrilateral.
    #[must_use]
    pub fn is_valid(points: &[Point2]) -> bool {
        Self::canonical_vertices(points).is_ok()
    }

    fn canonical_vertices(points: &[Point2]) -> Result<[Point2; 4]> {
        let taken = take_vertices::<4>(points, ShapeKind::Quadrilateral)?;
        let vertices = canonicalize(&taken);
        validate_quadrilateral(&vertices)?;
        Ok(vertices)
    }

    /// Returns the vertices in clockwise order around the centroid.
    #[must_use]
    pub fn vertices(&self) -> &[Point2; 4] {
        &self.vertices
    }

    /// Returns the vertices clockwise, starting at the vertex with the least x
    /// (the lower one if several share it).
    #[must_use]
    pub fn position(&self) -> [Point2; 4] {
        rotate_to_canonical_start(&self.vertices)
    }

    /// Returns the x coordinate of the anchor vertex.
    #[must_use]
    pub fn leftmost_x(&self) -> f64 {
        self.vertices[anchor_index(&self.vertices)].x
    }

    /// Always 4.
    #[must_use]
    pub fn num_sides(&self) -> usize {
        ShapeKind::Quadrilateral.num_sides()
    }

    /// Sum of the Heron areas of the triangles `[0, 1, 2]` and `[0, 2, 3]`.
    #[must_use]
    pub fn area(&self) -> f64 {
        quadrilateral_area(&self.vertices)
    }

    #[must_use]
    pub fn perimeter(&self) -> f64 {
        perimeter(&self.vertices)
    }

    /// Moves every vertex to its nearest integer grid point, unless the result
    /// would be invalid. Returns whether the snap was applied.
    pub fn snap(&mut self) -> bool {
        let rounded = self.vertices.map(|v| round_to_grid(&v));
        match Self::canonical_vertices(&rounded) {
            Ok(vertices) => {
                self.vertices = vertices;
                true
            }
            Err(err) => {
                tracing::debug!(shape = %ShapeKind::Quadrilateral, %err, "discarded snap");
                false
            }
        }
    }
}

impl fmt::Display for Quadrilateral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_vertices(f, "Quadrilateral", &self.position())
    }
}
