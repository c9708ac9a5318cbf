use crate::classify::centroid;
use crate::error::{Result, SnapError};
use crate::math::tolerance::point_eq;
use crate::math::{midpoint, Point3};
use crate::snap::{AttachmentPoint, NamedSnapPoint};

/// Computes the edge midpoints and center of a rectangle.
///
/// Midpoints of all six unordered pairs are considered; the two diagonal
/// midpoints coincide with the center and are dropped, leaving four edge
/// midpoints plus the centroid named `"Center"`.
///
/// Rectangular point sets frequently come from stacked top/bottom rings
/// on multi-segment pieces, so midpoint names are inferred from the
/// source point names to stay meaningful in the placement UI.
///
/// # Errors
///
/// Returns [`SnapError::PointCount`] unless exactly 4 points are given.
pub fn rectangle_extras(points: &[AttachmentPoint]) -> Result<Vec<NamedSnapPoint>> {
    if points.len() != 4 {
        return Err(SnapError::PointCount {
            calculator: "rectangle_extras",
            expected: 4,
            actual: points.len(),
        });
    }

    let positions: Vec<Point3> = points.iter().map(|p| p.position).collect();
    let center = centroid(&positions);

    let mut out = Vec::with_capacity(5);
    for a in 0..4 {
        for b in (a + 1)..4 {
            let mid = midpoint(&points[a].position, &points[b].position);
            if point_eq(&mid, &center) {
                continue;
            }
            out.push(NamedSnapPoint::new(
                mid,
                infer_midpoint_name(&points[a], &points[b]),
            ));
        }
    }

    out.push(NamedSnapPoint::new(center, "Center"));
    Ok(out)
}

/// Infers a label for the midpoint of two named source points.
fn infer_midpoint_name(a: &AttachmentPoint, b: &AttachmentPoint) -> String {
    if a.name.starts_with("Top") && b.name.starts_with("Top") {
        return "Top Center".into();
    }
    if a.name.starts_with("Bottom") && b.name.starts_with("Bottom") {
        return "Bottom Center".into();
    }

    // "Top N" paired with "Bottom N" marks a vertical edge of a stacked
    // ring pair.
    if let (Some(na), Some(nb)) = (
        ring_suffix(&a.name, "Top").or_else(|| ring_suffix(&a.name, "Bottom")),
        ring_suffix(&b.name, "Top").or_else(|| ring_suffix(&b.name, "Bottom")),
    ) {
        if na == nb {
            return format!("Edge {na} Center");
        }
    }

    if !a.is_anonymous() && !b.is_anonymous() {
        return format!("Mid {} - {}", a.name, b.name);
    }
    "Extra".into()
}

/// Parses the numeric suffix of a `"<prefix> N"` name.
///
/// Splitting happens at the first space only; names with no digits or
/// extra spaces simply fail the parse and fall through to the generic
/// labels.
fn ring_suffix(name: &str, prefix: &str) -> Option<u32> {
    let (head, tail) = name.split_once(' ')?;
    if head != prefix {
        return None;
    }
    tail.parse().ok()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn ap(x: f64, y: f64, z: f64, name: &str) -> AttachmentPoint {
        AttachmentPoint::authored(Point3::new(x, y, z), name)
    }

    fn names(points: &[NamedSnapPoint]) -> Vec<&str> {
        points.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn flat_rectangle_yields_four_midpoints_and_center() {
        let pts = [
            ap(1.0, 0.0, 0.0, "A"),
            ap(-1.0, 0.0, 0.0, "B"),
            ap(0.0, 0.0, 1.0, "C"),
            ap(0.0, 0.0, -1.0, "D"),
        ];
        let out = rectangle_extras(&pts).unwrap();
        assert_eq!(out.len(), 5);

        let expected = [
            Point3::new(0.5, 0.0, 0.5),
            Point3::new(0.5, 0.0, -0.5),
            Point3::new(-0.5, 0.0, 0.5),
            Point3::new(-0.5, 0.0, -0.5),
        ];
        for target in &expected {
            assert!(
                out.iter().any(|p| point_eq(&p.position, target)),
                "missing midpoint {target}"
            );
        }
        let center = out.last().unwrap();
        assert_eq!(center.name, "Center");
        assert!(point_eq(&center.position, &Point3::new(0.0, 0.0, 0.0)));
    }

    #[test]
    fn square_yields_five_points() {
        let pts = [
            ap(0.0, 0.0, 0.0, "A"),
            ap(1.0, 0.0, 0.0, "B"),
            ap(1.0, 1.0, 0.0, "C"),
            ap(0.0, 1.0, 0.0, "D"),
        ];
        let out = rectangle_extras(&pts).unwrap();
        assert_eq!(out.len(), 5);
        assert_eq!(out.last().unwrap().name, "Center");
    }

    #[test]
    fn stacked_ring_names() {
        // A vertical rectangle out of a two-ring log wall segment.
        let pts = [
            ap(0.0, 0.0, 0.0, "Bottom 1"),
            ap(2.0, 0.0, 0.0, "Bottom 2"),
            ap(0.0, 1.0, 0.0, "Top 1"),
            ap(2.0, 1.0, 0.0, "Top 2"),
        ];
        let out = rectangle_extras(&pts).unwrap();
        let labels = names(&out);
        assert!(labels.contains(&"Bottom Center"));
        assert!(labels.contains(&"Top Center"));
        assert!(labels.contains(&"Edge 1 Center"));
        assert!(labels.contains(&"Edge 2 Center"));
        assert!(labels.contains(&"Center"));
    }

    #[test]
    fn named_sources_compose_mid_label() {
        let pts = [
            ap(0.0, 0.0, 0.0, "West"),
            ap(2.0, 0.0, 0.0, "East"),
            ap(2.0, 1.0, 0.0, "North"),
            ap(0.0, 1.0, 0.0, "South"),
        ];
        let out = rectangle_extras(&pts).unwrap();
        assert!(names(&out).contains(&"Mid West - East"));
    }

    #[test]
    fn anonymous_sources_fall_back_to_extra() {
        let pts = [
            ap(0.0, 0.0, 0.0, "Snap Point"),
            ap(2.0, 0.0, 0.0, "Snap Point"),
            ap(2.0, 1.0, 0.0, "Snap Point"),
            ap(0.0, 1.0, 0.0, "Snap Point"),
        ];
        let out = rectangle_extras(&pts).unwrap();
        let labels = names(&out);
        assert_eq!(labels.iter().filter(|n| **n == "Extra").count(), 4);
    }

    #[test]
    fn malformed_suffix_falls_through() {
        // "Top one" has no numeric suffix; the pair cannot form an edge
        // label and composes the generic one instead.
        let a = ap(0.0, 0.0, 0.0, "Top one");
        let b = ap(0.0, 1.0, 0.0, "Bottom 1");
        assert_eq!(infer_midpoint_name(&a, &b), "Mid Top one - Bottom 1");
    }

    #[test]
    fn wrong_count_is_rejected() {
        let pts = [ap(0.0, 0.0, 0.0, "A")];
        assert!(matches!(
            rectangle_extras(&pts),
            Err(SnapError::PointCount { expected: 4, .. })
        ));
    }
}
