//! Derived-point calculators.
//!
//! Each calculator declares an exact point-count precondition and fails
//! with a [`SnapError`](crate::error::SnapError) when it is violated,
//! since callers are expected to have classified the shape first.
//! Geometric anomalies inside a recognized shape are logged and yield an
//! empty result instead.

mod line;
mod rectangle;
mod triangle;
mod wedge;

pub use line::line_midpoints;
pub use rectangle::rectangle_extras;
pub use triangle::triangle_extras;
pub use wedge::wedge_roof_extras;

use crate::classify::{classify, ShapeClassification};
use crate::config::GenerationConfig;
use crate::error::Result;
use crate::math::Point3;
use crate::snap::{AttachmentPoint, NamedSnapPoint};

/// Classifies the given attachment points and runs the matching enabled
/// calculator.
///
/// Shapes without a calculator (single points, crosses, cubes) and
/// disabled categories yield an empty list. `context_name` is used only
/// for diagnostics.
///
/// # Errors
///
/// Propagates calculator precondition failures; these cannot occur when
/// the point count matched the classification, so an error here indicates
/// an engine bug rather than bad content.
pub fn extras_for(
    points: &[AttachmentPoint],
    config: &GenerationConfig,
    context_name: &str,
) -> Result<Vec<NamedSnapPoint>> {
    let positions: Vec<Point3> = points.iter().map(|p| p.position).collect();
    match classify(&positions) {
        ShapeClassification::Line if config.line => {
            line_midpoints(points, config.line_subdivisions)
        }
        ShapeClassification::Triangle if config.triangle => triangle_extras(points),
        ShapeClassification::Rectangle if config.rectangle => rectangle_extras(points),
        ShapeClassification::Wedge3d if config.wedge => wedge_roof_extras(points, context_name),
        _ => Ok(Vec::new()),
    }
}
