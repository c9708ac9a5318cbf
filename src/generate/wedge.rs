use crate::error::{Result, SnapError};
use crate::math::tolerance::{extrema, scalar_eq};
use crate::math::{midpoint, Point3, ABS_EPS};
use crate::snap::{AttachmentPoint, NamedSnapPoint};

/// Computes the ridge and side midpoints of a wedge/roof piece.
///
/// The six input points are four bounding-box corners plus the two ends
/// of the ridge. Instead of hardcoding an orientation, the axes are
/// solved from the data: the "front" axis is the one on which the ridge
/// points sit at the bounding-box midpoint, the "ridge" axis is the one
/// along which the two ridge points differ, and the remaining axis is
/// vertical. This keeps the calculator correct for pieces rotated or
/// mirrored at authoring time.
///
/// Returns three points: the ridge midpoint (`"Top Center"`) and the two
/// base-side midpoints (`"Mid 1"`, `"Mid 2"`). Any inconsistency in the
/// solved axes is logged against `context_name` and yields an empty
/// result; the rebuild carries on with other pieces.
///
/// # Errors
///
/// Returns [`SnapError::PointCount`] unless exactly 6 points are given.
pub fn wedge_roof_extras(
    points: &[AttachmentPoint],
    context_name: &str,
) -> Result<Vec<NamedSnapPoint>> {
    if points.len() != 6 {
        return Err(SnapError::PointCount {
            calculator: "wedge_roof_extras",
            expected: 6,
            actual: points.len(),
        });
    }

    let positions: Vec<Point3> = points.iter().map(|p| p.position).collect();
    let Some((min, max)) = extrema(&positions) else {
        return Ok(Vec::new());
    };
    let mid = midpoint(&min, &max);

    // Every coordinate must sit on the bounding box lattice: at an
    // extremum, or at the midpoint of a single consistent "front" axis.
    let mut front_axis: Option<usize> = None;
    for p in &positions {
        for axis in 0..3 {
            let c = p[axis];
            if scalar_eq(c, min[axis]) || scalar_eq(c, max[axis]) {
                continue;
            }
            if !scalar_eq(c, mid[axis]) {
                tracing::warn!(
                    piece = context_name,
                    axis,
                    coordinate = c,
                    "wedge point is off the bounding-box lattice"
                );
                return Ok(Vec::new());
            }
            match front_axis {
                None => front_axis = Some(axis),
                Some(front) if front == axis => {}
                Some(front) => {
                    tracing::error!(
                        piece = context_name,
                        first = front,
                        second = axis,
                        "wedge has midpoints on two distinct axes"
                    );
                    return Ok(Vec::new());
                }
            }
        }
    }
    let Some(front) = front_axis else {
        tracing::warn!(piece = context_name, "wedge has no ridge points");
        return Ok(Vec::new());
    };

    // The ridge endpoints are the points sitting at mid on the front axis.
    let tops: Vec<&Point3> = positions
        .iter()
        .filter(|p| !scalar_eq(p[front], min[front]) && !scalar_eq(p[front], max[front]))
        .collect();
    if tops.len() != 2 {
        tracing::warn!(
            piece = context_name,
            found = tops.len(),
            "wedge should have exactly 2 ridge points"
        );
        return Ok(Vec::new());
    }

    // The ridge axis is the single axis along which the two ridge points
    // differ.
    let span = tops[1] - tops[0];
    if span.norm() <= ABS_EPS {
        tracing::warn!(piece = context_name, "wedge ridge points coincide");
        return Ok(Vec::new());
    }
    let dir = span.normalize();
    let mut ridge_axis: Option<usize> = None;
    for axis in 0..3 {
        if scalar_eq(dir[axis], 0.0) {
            continue;
        }
        match ridge_axis {
            None => ridge_axis = Some(axis),
            Some(ridge) => {
                tracing::error!(
                    piece = context_name,
                    first = ridge,
                    second = axis,
                    "wedge ridge is not axis-aligned"
                );
                return Ok(Vec::new());
            }
        }
    }
    let Some(ridge) = ridge_axis else {
        return Ok(Vec::new());
    };
    if ridge == front {
        tracing::error!(
            piece = context_name,
            axis = ridge,
            "wedge ridge collapsed onto the front axis"
        );
        return Ok(Vec::new());
    }
    let vertical = 3 - ridge - front;

    // The side midpoints sit on the base, i.e. at whichever vertical
    // extremum the ridge points do not occupy.
    let base = if scalar_eq(tops[0][vertical], max[vertical]) {
        min[vertical]
    } else {
        max[vertical]
    };

    let side = |front_value: f64| {
        let mut p = Point3::origin();
        p[front] = front_value;
        p[ridge] = mid[ridge];
        p[vertical] = base;
        p
    };

    Ok(vec![
        NamedSnapPoint::new(midpoint(tops[0], tops[1]), "Top Center"),
        NamedSnapPoint::new(side(min[front]), "Mid 1"),
        NamedSnapPoint::new(side(max[front]), "Mid 2"),
    ])
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::tolerance::point_eq;

    fn ap(x: f64, y: f64, z: f64) -> AttachmentPoint {
        AttachmentPoint::authored(Point3::new(x, y, z), "Snap Point")
    }

    /// Roof with the ridge along Z at x = 0, y = 1; base corners at y = 0.
    fn roof() -> Vec<AttachmentPoint> {
        vec![
            ap(-1.0, 0.0, -2.0),
            ap(1.0, 0.0, -2.0),
            ap(-1.0, 0.0, 2.0),
            ap(1.0, 0.0, 2.0),
            ap(0.0, 1.0, -2.0),
            ap(0.0, 1.0, 2.0),
        ]
    }

    #[test]
    fn roof_yields_ridge_and_side_midpoints() {
        let out = wedge_roof_extras(&roof(), "roof 26").unwrap();
        assert_eq!(out.len(), 3);

        assert_eq!(out[0].name, "Top Center");
        assert!(point_eq(&out[0].position, &Point3::new(0.0, 1.0, 0.0)));

        assert_eq!(out[1].name, "Mid 1");
        assert!(point_eq(&out[1].position, &Point3::new(-1.0, 0.0, 0.0)));

        assert_eq!(out[2].name, "Mid 2");
        assert!(point_eq(&out[2].position, &Point3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn axes_solved_for_rotated_roof() {
        // Same roof with the ridge along X and the front axis on Z.
        let pts = vec![
            ap(-2.0, 0.0, -1.0),
            ap(-2.0, 0.0, 1.0),
            ap(2.0, 0.0, -1.0),
            ap(2.0, 0.0, 1.0),
            ap(-2.0, 1.0, 0.0),
            ap(2.0, 1.0, 0.0),
        ];
        let out = wedge_roof_extras(&pts, "roof 26 rotated").unwrap();
        assert_eq!(out.len(), 3);
        assert!(point_eq(&out[0].position, &Point3::new(0.0, 1.0, 0.0)));
        assert!(point_eq(&out[1].position, &Point3::new(0.0, 0.0, -1.0)));
        assert!(point_eq(&out[2].position, &Point3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn inverted_roof_puts_sides_on_top() {
        // Ridge points at the bottom: side midpoints must use y = max.
        let pts = vec![
            ap(-1.0, 1.0, -2.0),
            ap(1.0, 1.0, -2.0),
            ap(-1.0, 1.0, 2.0),
            ap(1.0, 1.0, 2.0),
            ap(0.0, 0.0, -2.0),
            ap(0.0, 0.0, 2.0),
        ];
        let out = wedge_roof_extras(&pts, "inverted roof").unwrap();
        assert_eq!(out.len(), 3);
        assert!(point_eq(&out[1].position, &Point3::new(-1.0, 1.0, 0.0)));
        assert!(point_eq(&out[2].position, &Point3::new(1.0, 1.0, 0.0)));
    }

    #[test]
    fn off_lattice_point_yields_empty() {
        let mut pts = roof();
        pts[4] = ap(0.3, 1.0, -2.0);
        let out = wedge_roof_extras(&pts, "bent roof").unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn midpoints_on_two_axes_yield_empty() {
        // Second midpoint coordinate on a different axis.
        let mut pts = roof();
        pts[5] = ap(-1.0, 1.0, 0.0);
        let out = wedge_roof_extras(&pts, "twisted roof").unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn wrong_count_is_rejected() {
        let pts = [ap(0.0, 0.0, 0.0)];
        assert!(matches!(
            wedge_roof_extras(&pts, "stub"),
            Err(SnapError::PointCount { expected: 6, .. })
        ));
    }
}
