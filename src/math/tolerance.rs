use super::{Point3, ABS_EPS, REL_EPS};

/// Returns `true` if `a` and `b` are equal under the combined
/// absolute+relative epsilon.
///
/// Absolute comparison handles values near zero; relative comparison
/// scales with magnitude so large coordinates do not lose precision.
#[must_use]
pub fn scalar_eq(a: f64, b: f64) -> bool {
    let diff = (a - b).abs();
    diff <= ABS_EPS || diff <= a.abs().max(b.abs()) * REL_EPS
}

/// Returns `true` if `a` and `b` are equal on every axis.
#[must_use]
pub fn point_eq(a: &Point3, b: &Point3) -> bool {
    scalar_eq(a.x, b.x) && scalar_eq(a.y, b.y) && scalar_eq(a.z, b.z)
}

/// Computes the per-axis minimum and maximum over a point set.
///
/// Returns `None` for an empty slice.
#[must_use]
pub fn extrema(points: &[Point3]) -> Option<(Point3, Point3)> {
    let first = points.first()?;
    let mut min = *first;
    let mut max = *first;
    for p in &points[1..] {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        min.z = min.z.min(p.z);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
        max.z = max.z.max(p.z);
    }
    Some((min, max))
}

/// Returns `true` if every axis of `p` sits on the corresponding minimum
/// or maximum, i.e. `p` is a bounding-box corner.
#[must_use]
pub fn lies_on_extrema(p: &Point3, min: &Point3, max: &Point3) -> bool {
    (0..3).all(|axis| scalar_eq(p[axis], min[axis]) || scalar_eq(p[axis], max[axis]))
}

/// Returns `true` if exactly two axes of `p` sit on an extremum and the
/// remaining axis sits at the bounding-box midpoint, i.e. `p` is the
/// midpoint of a bounding-box edge.
#[must_use]
pub fn lies_on_edge_midpoint(p: &Point3, min: &Point3, max: &Point3) -> bool {
    let mut on_extremum = 0;
    let mut on_midpoint = 0;
    for axis in 0..3 {
        if scalar_eq(p[axis], min[axis]) || scalar_eq(p[axis], max[axis]) {
            on_extremum += 1;
        } else if scalar_eq(p[axis], (min[axis] + max[axis]) / 2.0) {
            on_midpoint += 1;
        }
    }
    on_extremum == 2 && on_midpoint == 1
}
