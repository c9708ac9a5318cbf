use crate::error::{Result, SnapError};
use crate::snap::{AttachmentPoint, NamedSnapPoint};

/// Inserts `subdivisions` evenly spaced points strictly between the two
/// endpoints of a line.
///
/// The step is `(end - start) / (subdivisions + 1)`, so one subdivision
/// yields the exact midpoint. Points are named `"Center Line i/n"` with
/// `n = subdivisions + 1`.
///
/// # Errors
///
/// Returns [`SnapError::PointCount`] unless exactly 2 points are given,
/// and [`SnapError::InvalidInput`] for zero subdivisions.
pub fn line_midpoints(
    points: &[AttachmentPoint],
    subdivisions: usize,
) -> Result<Vec<NamedSnapPoint>> {
    if points.len() != 2 {
        return Err(SnapError::PointCount {
            calculator: "line_midpoints",
            expected: 2,
            actual: points.len(),
        });
    }
    if subdivisions == 0 {
        return Err(SnapError::InvalidInput(
            "line subdivisions must be at least 1".into(),
        ));
    }

    let start = points[0].position;
    let step = (points[1].position - start) / (subdivisions as f64 + 1.0);

    let mut out = Vec::with_capacity(subdivisions);
    for i in 1..=subdivisions {
        out.push(NamedSnapPoint::new(
            start + step * i as f64,
            format!("Center Line {i}/{}", subdivisions + 1),
        ));
    }
    Ok(out)
}
