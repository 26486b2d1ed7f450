use std::fmt;

use crate::error::Result;
use crate::math::polygon_2d::{
    anchor_index, canonicalize, perimeter, rotate_to_canonical_start, take_vertices,
    triangle_area, validate_triangle,
};
use crate::math::{round_to_grid, Point2};

use super::{write_vertices, ShapeKind};

/// A non-degenerate triangle.
///
/// The vertices are held in clockwise order around their centroid. A
/// `Triangle` can only be obtained from points that pass validation, so every
/// value encloses a positive area.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    vertices: [Point2; 3],
}

impl Triangle {
    /// Creates a triangle from the first three of `points`; further points are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than three points are given, a coordinate is
    /// not finite, all three vertices share the same x, or the vertices are
    /// collinear.
    pub fn new(points: &[Point2]) -> Result<Self> {
        match Self::canonical_vertices(points) {
            Ok(vertices) => Ok(Self { vertices }),
            Err(err) => {
                tracing::debug!(shape = %ShapeKind::Triangle, %err, "rejected construction");
                Err(err)
            }
        }
    }

    /// Returns whether the first three of `points` form a valid triangle.
    #[must_use]
    pub fn is_valid(points: &[Point2]) -> bool {
        Self::canonical_vertices(points).is_ok()
    }

    fn canonical_vertices(points: &[Point2]) -> Result<[Point2; 3]> {
        let taken = take_vertices::<3>(points, ShapeKind::Triangle)?;
        let vertices = canonicalize(&taken);
        validate_triangle(&vertices)?;
        Ok(vertices)
    }

    /// Returns the vertices in clockwise order around the centroid.
    #[must_use]
    pub fn vertices(&self) -> &[Point2; 3] {
        &self.vertices
    }

    /// Returns the vertices clockwise, starting at the vertex with the least x
    /// (the lower one if two share it).
    #[must_use]
    pub fn position(&self) -> [Point2; 3] {
        rotate_to_canonical_start(&self.vertices)
    }

    /// Returns the x coordinate of the anchor vertex.
    #[must_use]
    pub fn leftmost_x(&self) -> f64 {
        self.vertices[anchor_index(&self.vertices)].x
    }

    /// Always 3.
    #[must_use]
    pub fn num_sides(&self) -> usize {
        ShapeKind::Triangle.num_sides()
    }

    /// Area by Heron's formula, with an exact-orientation fallback for slivers.
    /// Always positive.
    #[must_use]
    pub fn area(&self) -> f64 {
        let [a, b, c] = &self.vertices;
        triangle_area(a, b, c)
    }

    #[must_use]
    pub fn perimeter(&self) -> f64 {
        perimeter(&self.vertices)
    }

    /// Moves every vertex to its nearest integer grid point.
    ///
    /// If the rounded vertices no longer form a valid triangle, the triangle is
    /// left unchanged. Returns whether the snap was applied.
    pub fn snap(&mut self) -> bool {
        let rounded = self.vertices.map(|v| round_to_grid(&v));
        match Self::canonical_vertices(&rounded) {
            Ok(vertices) => {
                self.vertices = vertices;
                true
            }
            Err(err) => {
                tracing::debug!(shape = %ShapeKind::Triangle, %err, "discarded snap");
                false
            }
        }
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_vertices(f, "Triangle", &self.position())
    }
}
