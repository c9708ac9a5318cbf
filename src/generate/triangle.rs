use crate::classify::centroid;
use crate::error::{Result, SnapError};
use crate::math::{midpoint, Point3};
use crate::snap::{AttachmentPoint, NamedSnapPoint};

/// Computes the three edge midpoints and the centroid of a triangle.
///
/// Edge midpoints embed the names of their two source points; the
/// centroid is named `"Center"`.
///
/// # Errors
///
/// Returns [`SnapError::PointCount`] unless exactly 3 points are given.
pub fn triangle_extras(points: &[AttachmentPoint]) -> Result<Vec<NamedSnapPoint>> {
    if points.len() != 3 {
        return Err(SnapError::PointCount {
            calculator: "triangle_extras",
            expected: 3,
            actual: points.len(),
        });
    }

    let mut out = Vec::with_capacity(4);
    for (a, b) in [(0, 1), (1, 2), (0, 2)] {
        out.push(NamedSnapPoint::new(
            midpoint(&points[a].position, &points[b].position),
            format!("Mid {} - {}", points[a].name, points[b].name),
        ));
    }

    let positions: Vec<Point3> = points.iter().map(|p| p.position).collect();
    out.push(NamedSnapPoint::new(centroid(&positions), "Center"));
    Ok(out)
}
