pub mod tolerance;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Absolute tolerance for scalar comparisons.
///
/// Authored point data carries import/export rounding noise, so every
/// geometric comparison in this crate goes through [`tolerance`] instead
/// of raw equality.
pub const ABS_EPS: f64 = 1e-6;

/// Relative tolerance for scalar comparisons, scaled by magnitude.
pub const REL_EPS: f64 = 1e-6;

/// Midpoint of two points.
#[must_use]
pub fn midpoint(a: &Point3, b: &Point3) -> Point3 {
    nalgebra::center(a, b)
}
