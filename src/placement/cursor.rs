use crate::config::CursorConfig;
use crate::math::{Point3, Vector3};
use crate::registry::PieceId;
use crate::snap::DEFAULT_POINT_NAME;

use super::{grid, GridPrecision, SnapEvent, SnapMode};

/// A snap point in world space, as the cursor sees it for one frame.
///
/// The host resolves local attachment points through each piece's
/// transform before handing them in; the cursor itself never applies
/// transforms.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldSnapPoint {
    pub position: Point3,
    pub name: String,
}

impl WorldSnapPoint {
    #[must_use]
    pub fn new(position: Point3, name: impl Into<String>) -> Self {
        Self {
            position,
            name: name.into(),
        }
    }

    /// UI label for this point, falling back to `"Point <n>"` for
    /// anonymous names.
    fn label(&self, index: usize) -> String {
        if self.name.is_empty() || self.name == DEFAULT_POINT_NAME {
            format!("Point {}", index + 1)
        } else {
            self.name.clone()
        }
    }
}

/// The live point list of one piece: authored and generated points
/// together, in world space.
#[derive(Debug, Clone, Copy)]
pub struct SnapList<'a> {
    pub owner: PieceId,
    pub points: &'a [WorldSnapPoint],
}

/// Edge-triggered mode toggles for one frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModeKeys {
    pub toggle_manual: bool,
    pub toggle_precise: bool,
    pub toggle_grid: bool,
}

/// Everything the cursor sees during one placement frame.
#[derive(Debug, Clone, Copy)]
pub struct PlacementFrame<'a> {
    /// Points of the piece being placed.
    pub source: Option<SnapList<'a>>,
    /// Points of the piece under the cursor.
    pub target: Option<SnapList<'a>>,
    /// World position of the placement marker.
    pub marker: Point3,
    /// Edge-triggered "cycle source point" key.
    pub cycle_source: bool,
    /// Edge-triggered "cycle target point" key; honored in `Precise`
    /// mode only.
    pub cycle_target: bool,
    /// Edge-triggered "cycle grid precision" key; honored in `Grid` mode
    /// only.
    pub cycle_precision: bool,
}

impl<'a> PlacementFrame<'a> {
    /// A quiet frame with no key edges.
    #[must_use]
    pub fn new(
        source: Option<SnapList<'a>>,
        target: Option<SnapList<'a>>,
        marker: Point3,
    ) -> Self {
        Self {
            source,
            target,
            marker,
            cycle_source: false,
            cycle_target: false,
            cycle_precision: false,
        }
    }
}

/// Positional correction for the placement ghost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Correction {
    /// Translate the ghost so the chosen source point coincides with the
    /// chosen target point.
    Offset(Vector3),
    /// Move the ghost onto the grid lattice.
    Position(Point3),
}

/// Outcome of one frame update.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CursorUpdate {
    pub correction: Option<Correction>,
    pub events: Vec<SnapEvent>,
}

/// Per-session cursor state for manual snap selection.
///
/// Indices are taken modulo the live point count of their owner before
/// every use, so they wrap around and never go out of bounds even when
/// the point lists change between frames.
#[derive(Debug, Default)]
pub struct SnapCursor {
    mode: SnapMode,
    precision: GridPrecision,
    source_owner: Option<PieceId>,
    target_owner: Option<PieceId>,
    source_index: usize,
    target_index: usize,
}

impl SnapCursor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn mode(&self) -> SnapMode {
        self.mode
    }

    #[must_use]
    pub fn grid_precision(&self) -> GridPrecision {
        self.precision
    }

    #[must_use]
    pub fn source_index(&self) -> usize {
        self.source_index
    }

    #[must_use]
    pub fn target_index(&self) -> usize {
        self.target_index
    }

    /// Applies the mode toggle keys for this frame.
    ///
    /// Each key flips between `Auto` and its mode; pressing the active
    /// mode's key returns to `Auto`. Every change is reported so the UI
    /// can announce it.
    pub fn handle_mode_keys(&mut self, keys: &ModeKeys) -> Vec<SnapEvent> {
        let mut events = Vec::new();
        for (pressed, mode) in [
            (keys.toggle_manual, SnapMode::Manual),
            (keys.toggle_precise, SnapMode::Precise),
            (keys.toggle_grid, SnapMode::Grid),
        ] {
            if !pressed {
                continue;
            }
            self.mode = if self.mode == mode { SnapMode::Auto } else { mode };
            events.push(SnapEvent::ModeChanged(self.mode));
        }
        events
    }

    /// Runs one per-frame update while a placement operation is active.
    ///
    /// In `Auto` mode this is a no-op. Degenerate state — a missing owner
    /// or an empty point list — skips the positional correction for the
    /// frame without an error.
    pub fn update(&mut self, frame: &PlacementFrame<'_>, config: &CursorConfig) -> CursorUpdate {
        match self.mode {
            SnapMode::Auto => CursorUpdate::default(),
            SnapMode::Grid => self.update_grid(frame, config),
            SnapMode::Manual | SnapMode::Precise => self.update_points(frame, config),
        }
    }

    fn update_grid(&mut self, frame: &PlacementFrame<'_>, config: &CursorConfig) -> CursorUpdate {
        let mut events = Vec::new();
        if frame.cycle_precision {
            self.precision = self.precision.toggled();
            events.push(SnapEvent::GridPrecisionChanged {
                step: self.grid_step(config),
            });
        }
        let snapped = grid::snap_to_grid(&frame.marker, self.grid_step(config));
        CursorUpdate {
            correction: Some(Correction::Position(snapped)),
            events,
        }
    }

    fn grid_step(&self, config: &CursorConfig) -> f64 {
        match self.precision {
            GridPrecision::Low => config.grid_step_low,
            GridPrecision::High => config.grid_step_high,
        }
    }

    fn update_points(&mut self, frame: &PlacementFrame<'_>, config: &CursorConfig) -> CursorUpdate {
        let mut events = Vec::new();
        let prev_source_index = self.source_index;
        let prev_target_index = self.target_index;

        // Owner changes reset the corresponding index unless the carry
        // policy keeps the previous selection.
        let target_owner = frame.target.map(|list| list.owner);
        if target_owner != self.target_owner {
            self.target_owner = target_owner;
            if config.reset_on_new_piece {
                self.target_index = 0;
            }
        }
        let source_owner = frame.source.map(|list| list.owner);
        if source_owner != self.source_owner {
            self.source_owner = source_owner;
            if config.reset_on_new_piece {
                self.source_index = 0;
            }
        }

        if frame.cycle_source {
            self.source_index = self.source_index.wrapping_add(1);
        }
        if self.mode == SnapMode::Precise && frame.cycle_target {
            self.target_index = self.target_index.wrapping_add(1);
        }

        let (Some(source), Some(target)) = (frame.source, frame.target) else {
            return CursorUpdate {
                correction: None,
                events,
            };
        };
        if source.points.is_empty() || target.points.is_empty() {
            return CursorUpdate {
                correction: None,
                events,
            };
        }

        self.source_index %= source.points.len();
        self.target_index %= target.points.len();

        let (target_index, target_point) = if self.mode == SnapMode::Precise {
            (self.target_index, &target.points[self.target_index])
        } else {
            closest_point(target.points, &frame.marker)
        };
        let source_point = &source.points[self.source_index];

        if self.source_index != prev_source_index {
            events.push(SnapEvent::SourceSelected {
                name: source_point.label(self.source_index),
            });
        }
        if self.mode == SnapMode::Precise && self.target_index != prev_target_index {
            events.push(SnapEvent::TargetSelected {
                name: target_point.label(target_index),
            });
        }

        CursorUpdate {
            correction: Some(Correction::Offset(
                target_point.position - source_point.position,
            )),
            events,
        }
    }
}

/// Linear scan for the point nearest to the marker; the first minimum
/// wins on ties.
fn closest_point<'a>(points: &'a [WorldSnapPoint], marker: &Point3) -> (usize, &'a WorldSnapPoint) {
    let mut best_index = 0;
    let mut best_dist = (points[0].position - marker).norm_squared();
    for (index, point) in points.iter().enumerate().skip(1) {
        let dist = (point.position - marker).norm_squared();
        if dist < best_dist {
            best_index = index;
            best_dist = dist;
        }
    }
    (best_index, &points[best_index])
}
