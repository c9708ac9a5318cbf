use crate::math::Point3;

/// Rounds `value` to the nearest multiple of `step`, with exact halves
/// rounding away from zero.
///
/// A non-positive step returns the value unchanged.
#[must_use]
pub fn round_to_nearest(value: f64, step: f64) -> f64 {
    if step <= 0.0 {
        return value;
    }
    (value / step).round() * step
}

/// Snaps a placement position to the ground lattice.
///
/// X and Z are rounded independently; the vertical coordinate is left to
/// the host's own placement rules.
#[must_use]
pub fn snap_to_grid(position: &Point3, step: f64) -> Point3 {
    Point3::new(
        round_to_nearest(position.x, step),
        position.y,
        round_to_nearest(position.z, step),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rounds_down_below_half() {
        assert_relative_eq!(round_to_nearest(1.24, 0.5), 1.0);
    }

    #[test]
    fn exact_half_rounds_away_from_zero() {
        assert_relative_eq!(round_to_nearest(1.25, 0.5), 1.5);
        assert_relative_eq!(round_to_nearest(-1.25, 0.5), -1.5);
    }

    #[test]
    fn whole_step_lattice() {
        assert_relative_eq!(round_to_nearest(3.4, 1.0), 3.0);
        assert_relative_eq!(round_to_nearest(3.5, 1.0), 4.0);
        assert_relative_eq!(round_to_nearest(-0.6, 1.0), -1.0);
    }

    #[test]
    fn zero_step_is_identity() {
        assert_relative_eq!(round_to_nearest(1.23, 0.0), 1.23);
    }

    #[test]
    fn grid_snap_leaves_height_alone() {
        let snapped = snap_to_grid(&Point3::new(1.24, 7.3, -1.25), 0.5);
        assert_eq!(snapped, Point3::new(1.0, 7.3, -1.5));
    }
}
