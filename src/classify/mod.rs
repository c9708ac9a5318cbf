//! Shape classification for attachment point sets.
//!
//! Every predicate is a pure function of the input positions: no state,
//! no randomness, and all comparisons go through [`crate::math::tolerance`]
//! so rounding noise in authored data does not flip a classification.

use crate::math::tolerance::{extrema, lies_on_edge_midpoint, lies_on_extrema, point_eq, scalar_eq};
use crate::math::{Point3, Vector3, ABS_EPS};

/// The geometric arrangement formed by a set of attachment points.
///
/// Computed on demand; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeClassification {
    Point,
    Line,
    Triangle,
    Rectangle,
    /// Four bounding-box corners plus their shared center.
    Cross,
    /// Four corners plus two edge midpoints: a roof cross-section.
    Wedge3d,
    Cube,
    Unclassified,
}

/// Classifies a point set by count, then by geometric arrangement.
#[must_use]
pub fn classify(points: &[Point3]) -> ShapeClassification {
    match points.len() {
        1 => ShapeClassification::Point,
        2 if forms_line(points) => ShapeClassification::Line,
        3 if forms_triangle(points) => ShapeClassification::Triangle,
        4 if forms_rectangle(points) => ShapeClassification::Rectangle,
        5 if is_cross(points) => ShapeClassification::Cross,
        6 if is_wedge_3d(points) => ShapeClassification::Wedge3d,
        8 if is_cube(points) => ShapeClassification::Cube,
        _ => ShapeClassification::Unclassified,
    }
}

/// A single point.
#[must_use]
pub fn is_point(points: &[Point3]) -> bool {
    points.len() == 1
}

/// Two distinct points.
#[must_use]
pub fn forms_line(points: &[Point3]) -> bool {
    points.len() == 2 && !point_eq(&points[0], &points[1])
}

/// Three non-collinear points.
#[must_use]
pub fn forms_triangle(points: &[Point3]) -> bool {
    points.len() == 3 && !collinear(points)
}

/// Four coplanar points whose opposite-pair distances split into two
/// equal side pairs and one equal diagonal pair.
///
/// All three perfect matchings are checked, so the result does not
/// depend on input order. The diagonal must satisfy
/// `diagonal² = side_a² + side_b²` with non-degenerate sides.
#[must_use]
pub fn forms_rectangle(points: &[Point3]) -> bool {
    if points.len() != 4 {
        return false;
    }
    if !coplanar(&points[0], &points[1], &points[2], &points[3]) {
        return false;
    }

    // The three matchings: (01|23), (02|13), (03|12).
    let pairings = [
        ((0, 1), (2, 3)),
        ((0, 2), (1, 3)),
        ((0, 3), (1, 2)),
    ];
    let mut lengths = [0.0_f64; 3];
    for (i, ((a0, a1), (b0, b1))) in pairings.into_iter().enumerate() {
        let da = (points[a1] - points[a0]).norm();
        let db = (points[b1] - points[b0]).norm();
        if !scalar_eq(da, db) {
            return false;
        }
        lengths[i] = da;
    }

    // The longest matching is the diagonal pair.
    lengths.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let [side_a, side_b, diagonal] = lengths;
    if side_a <= ABS_EPS || side_b <= ABS_EPS {
        return false;
    }
    scalar_eq(diagonal * diagonal, side_a * side_a + side_b * side_b)
}

/// Five points: four bounding-box corners and one at the centroid.
#[must_use]
pub fn is_cross(points: &[Point3]) -> bool {
    if points.len() != 5 {
        return false;
    }
    let Some((min, max)) = extrema(points) else {
        return false;
    };
    let center = centroid(points);
    let on_corners = points
        .iter()
        .filter(|p| lies_on_extrema(p, &min, &max))
        .count();
    let on_center = points.iter().filter(|p| point_eq(p, &center)).count();
    on_corners == 4 && on_center == 1
}

/// Six points: four bounding-box corners and two edge midpoints.
#[must_use]
pub fn is_wedge_3d(points: &[Point3]) -> bool {
    if points.len() != 6 {
        return false;
    }
    let Some((min, max)) = extrema(points) else {
        return false;
    };
    let on_corners = points
        .iter()
        .filter(|p| lies_on_extrema(p, &min, &max))
        .count();
    let on_midpoints = points
        .iter()
        .filter(|p| lies_on_edge_midpoint(p, &min, &max))
        .count();
    on_corners == 4 && on_midpoints == 2
}

/// Eight points, all on bounding-box corners.
#[must_use]
pub fn is_cube(points: &[Point3]) -> bool {
    if points.len() != 8 {
        return false;
    }
    let Some((min, max)) = extrema(points) else {
        return false;
    };
    points.iter().all(|p| lies_on_extrema(p, &min, &max))
}

/// Returns `true` if all points lie on one line.
///
/// The first edge is the base direction; every further point's offset
/// must be parallel to it. Sets of fewer than 3 points are trivially
/// collinear.
#[must_use]
pub fn collinear(points: &[Point3]) -> bool {
    if points.len() < 3 {
        return true;
    }
    let base = points[1] - points[0];
    points[2..]
        .iter()
        .all(|p| base.cross(&(p - points[0])).norm() <= ABS_EPS)
}

/// Returns `true` if the four points lie in one plane (scalar triple
/// product of the three edge vectors from `p0` is within tolerance of
/// zero).
#[must_use]
pub fn coplanar(p0: &Point3, p1: &Point3, p2: &Point3, p3: &Point3) -> bool {
    let u = p1 - p0;
    let v = p2 - p0;
    let w = p3 - p0;
    scalar_eq(u.cross(&v).dot(&w), 0.0)
}

/// Arithmetic mean of a point set.
#[must_use]
pub fn centroid(points: &[Point3]) -> Point3 {
    let mut sum = Vector3::zeros();
    for p in points {
        sum += p.coords;
    }
    Point3::from(sum / points.len() as f64)
}
