use super::distance_2d::segment_length;
use super::{Point2, Vector2};
use crate::error::{Result, ShapeError};
use crate::geometry::ShapeKind;

/// Returns the arithmetic mean of the given points.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn centroid<const N: usize>(points: &[Point2; N]) -> Point2 {
    let sum = points
        .iter()
        .fold(Vector2::zeros(), |acc, p| acc + p.coords);
    Point2::from(sum / N as f64)
}

/// Returns the sort key of `p` around `center`.
///
/// The arguments to `atan2` are `(dx, dy)` rather than `(dy, dx)`, so that
/// ascending keys walk the points clockwise in a y-up frame.
#[must_use]
pub fn clockwise_angle(center: &Point2, p: &Point2) -> f64 {
    (p.x - center.x).atan2(p.y - center.y)
}

/// Sorts `points` clockwise around their centroid.
///
/// The result is not anchored to any particular vertex; see
/// [`rotate_to_canonical_start`]. Points with identical keys keep their input
/// order.
#[must_use]
pub fn canonicalize<const N: usize>(points: &[Point2; N]) -> [Point2; N] {
    let center = centroid(points);
    let mut keyed = points.map(|p| (clockwise_angle(&center, &p), p));
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));
    let sorted = keyed.map(|(_, p)| p);
    tracing::trace!(?sorted, "canonical vertex order");
    sorted
}

/// Returns the index of the leftmost vertex, breaking ties by smallest y.
///
/// Only vertices that share the minimum x take part in the y comparison.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn anchor_index(vertices: &[Point2]) -> usize {
    let mut best = 0;
    for (i, pt) in vertices.iter().enumerate().skip(1) {
        let b = &vertices[best];
        if pt.x < b.x || (pt.x == b.x && pt.y < b.y) {
            best = i;
        }
    }
    best
}

/// Rotates a clockwise vertex sequence so it starts at its anchor vertex
/// (smallest x, then smallest y), keeping the cyclic order.
#[must_use]
pub fn rotate_to_canonical_start<const N: usize>(vertices: &[Point2; N]) -> [Point2; N] {
    let start = anchor_index(vertices);
    std::array::from_fn(|i| vertices[(start + i) % N])
}

/// Sum of the edge lengths of the closed polygon `vertices`.
#[must_use]
pub fn perimeter(vertices: &[Point2]) -> f64 {
    let n = vertices.len();
    (0..n)
        .map(|i| segment_length(&vertices[i], &vertices[(i + 1) % n]))
        .sum()
}

/// Area of the triangle `abc` by Heron's formula.
///
/// The radicand is clamped at zero, so flat triangles give `0.0` rather than `NaN`.
#[must_use]
pub fn heron_area(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    let ab = segment_length(a, b);
    let bc = segment_length(b, c);
    let ca = segment_length(c, a);
    let s = (ab + bc + ca) / 2.0;
    (s * (s - ab) * (s - bc) * (s - ca)).max(0.0).sqrt()
}

/// Area of the triangle `abc` for a triangle that passed validation.
///
/// Uses [`heron_area`]. For slivers where cancellation drives Heron's radicand
/// to zero, falls back to half the robust orientation determinant, which is
/// nonzero for every non-collinear triangle.
#[must_use]
pub fn triangle_area(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    let area = heron_area(a, b, c);
    if area > 0.0 {
        area
    } else {
        orientation(a, b, c).abs() * 0.5
    }
}

/// Area of a quadrilateral given in canonical order, as the sum of the
/// triangles `[0, 1, 2]` and `[0, 2, 3]`.
///
/// Exact only for convex, simple quadrilaterals.
#[must_use]
pub fn quadrilateral_area(v: &[Point2; 4]) -> f64 {
    triangle_area(&v[0], &v[1], &v[2]) + triangle_area(&v[0], &v[2], &v[3])
}

/// Twice the signed area of `abc`, with an exactly computed sign.
///
/// Positive for counter-clockwise, negative for clockwise, and `0.0` only when
/// the three points are exactly collinear.
#[must_use]
pub fn orientation(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    let coord = |p: &Point2| robust::Coord { x: p.x, y: p.y };
    robust::orient2d(coord(a), coord(b), coord(c))
}

/// Returns `true` if the three vertices of `v` lie exactly on one line.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn is_collinear(v: &[Point2; 3]) -> bool {
    orientation(&v[0], &v[1], &v[2]) == 0.0
}

/// Checks that `v` forms a non-degenerate triangle.
///
/// # Errors
///
/// Returns `ShapeError::SharedX` if all three vertices have the same x, or
/// `ShapeError::ZeroArea` if they are otherwise collinear.
#[allow(clippy::float_cmp)]
pub fn validate_triangle(v: &[Point2; 3]) -> Result<()> {
    if v[0].x == v[1].x && v[1].x == v[2].x {
        return Err(ShapeError::SharedX {
            shape: ShapeKind::Triangle,
            x: v[0].x,
        });
    }
    if is_collinear(v) {
        return Err(ShapeError::ZeroArea {
            shape: ShapeKind::Triangle,
        });
    }
    Ok(())
}

/// Vertex indices kept when dropping vertex 0, 1, 2 and 3 of a quadrilateral.
const SUB_TRIANGLES: [[usize; 3]; 4] = [[1, 2, 3], [0, 2, 3], [0, 1, 3], [0, 1, 2]];

/// Checks that each of the four triangles obtained by dropping one vertex of
/// `v` is non-degenerate.
///
/// This does not detect self-intersecting quadrilaterals whose sub-triangles
/// are all valid.
///
/// # Errors
///
/// Returns `ShapeError::DegenerateSubTriangle` naming the first dropped vertex
/// whose remaining triangle is degenerate.
pub fn validate_quadrilateral(v: &[Point2; 4]) -> Result<()> {
    for (omitted, keep) in SUB_TRIANGLES.into_iter().enumerate() {
        let tri = keep.map(|i| v[i]);
        if validate_triangle(&tri).is_err() {
            return Err(ShapeError::DegenerateSubTriangle {
                x: v[omitted].x,
                y: v[omitted].y,
            });
        }
    }
    Ok(())
}

/// Takes the first `N` points of `points` as a fixed-size array.
///
/// # Errors
///
/// Returns `ShapeError::VertexCount` if fewer than `N` points are given, or
/// `ShapeError::NonFiniteCoordinate` if one of the taken points has a NaN or
/// infinite coordinate.
pub fn take_vertices<const N: usize>(points: &[Point2], shape: ShapeKind) -> Result<[Point2; N]> {
    let taken: [Point2; N] = points
        .get(..N)
        .and_then(|s| s.try_into().ok())
        .ok_or(ShapeError::VertexCount {
            shape,
            expected: N,
            found: points.len(),
        })?;
    for (i, p) in taken.iter().enumerate() {
        for (axis, value) in [p.x, p.y].into_iter().enumerate() {
            if !value.is_finite() {
                return Err(ShapeError::NonFiniteCoordinate {
                    shape,
                    index: 2 * i + axis,
                    value,
                });
            }
        }
    }
    Ok(taken)
}
