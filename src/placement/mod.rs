//! Manual snap selection during interactive placement.
//!
//! The host's placement loop feeds one [`PlacementFrame`] per rendered
//! frame into the [`SnapCursor`]; the cursor answers with an optional
//! positional correction and the notifications the UI should show. All
//! key handling upstream is reduced to edge-triggered booleans, so
//! bindings never reach this crate.

mod cursor;
mod grid;

pub use cursor::{
    Correction, CursorUpdate, ModeKeys, PlacementFrame, SnapCursor, SnapList, WorldSnapPoint,
};
pub use grid::{round_to_nearest, snap_to_grid};

use std::fmt;

/// Active snapping mode. Exactly one is active at a time; `Auto` is the
/// initial state and applies no override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SnapMode {
    #[default]
    Auto,
    /// Cycle the source point; the target point is matched by proximity.
    Manual,
    /// Cycle explicit source and target points.
    Precise,
    /// Snap to a lattice, ignoring attachment points entirely.
    Grid,
}

impl fmt::Display for SnapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Auto => "Auto",
            Self::Manual => "Manual",
            Self::Precise => "Precise",
            Self::Grid => "Grid",
        };
        f.write_str(label)
    }
}

/// Grid lattice step selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridPrecision {
    #[default]
    Low,
    High,
}

impl GridPrecision {
    /// The other precision.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Low => Self::High,
            Self::High => Self::Low,
        }
    }
}

/// Notification for the UI collaborator. `Display` renders the exact
/// message text; no markup is attached.
#[derive(Debug, Clone, PartialEq)]
pub enum SnapEvent {
    ModeChanged(SnapMode),
    /// The point on the piece being placed changed.
    SourceSelected { name: String },
    /// The point on the piece being targeted changed.
    TargetSelected { name: String },
    GridPrecisionChanged { step: f64 },
}

impl fmt::Display for SnapEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModeChanged(mode) => write!(f, "Snap Mode: {mode}"),
            Self::SourceSelected { name } => write!(f, "Placing Snap Point: {name}"),
            Self::TargetSelected { name } => write!(f, "Snapping To: {name}"),
            Self::GridPrecisionChanged { step } => write!(f, "Grid Precision: {step}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_messages_are_plain_text() {
        assert_eq!(
            SnapEvent::ModeChanged(SnapMode::Manual).to_string(),
            "Snap Mode: Manual"
        );
        assert_eq!(
            SnapEvent::SourceSelected {
                name: "Top Center".into()
            }
            .to_string(),
            "Placing Snap Point: Top Center"
        );
        assert_eq!(
            SnapEvent::GridPrecisionChanged { step: 0.5 }.to_string(),
            "Grid Precision: 0.5"
        );
    }
}
