use std::collections::HashMap;

use crate::config::GenerationConfig;
use crate::generate::extras_for;
use crate::snap::{AttachmentPoint, NamedSnapPoint};

use super::{PieceId, PieceStore, SnapPointRegistry};

/// Hand-authored extra points keyed by piece name.
///
/// This is static content data supplied by the host; pieces with an entry
/// here bypass shape classification entirely.
#[derive(Debug, Default)]
pub struct SnapPointOverrides {
    by_name: HashMap<String, Vec<NamedSnapPoint>>,
}

impl SnapPointOverrides {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the extra points for a piece name, replacing any
    /// previous entry.
    pub fn insert(&mut self, name: impl Into<String>, points: Vec<NamedSnapPoint>) {
        self.by_name.insert(name.into(), points);
    }

    /// The extra points for a piece name, if any were authored.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[NamedSnapPoint]> {
        self.by_name.get(name).map(Vec::as_slice)
    }
}

/// Runs a full rebuild pass: clears every previously generated point,
/// then regenerates extras for every piece in the store.
///
/// Pieces named in `overrides` receive the authored table entry; all
/// others are classified and run through the matching enabled calculator.
/// A failure while generating for one piece is logged and that piece is
/// skipped — the pass continues for the rest, and the failed piece simply
/// keeps no generated points this time. Running the pass twice over the
/// same authored input produces identical output.
pub fn rebuild(
    store: &mut PieceStore,
    registry: &mut SnapPointRegistry,
    config: &GenerationConfig,
    overrides: &SnapPointOverrides,
) {
    registry.clear_all(store);
    if !config.enabled {
        return;
    }

    let ids: Vec<PieceId> = store.ids().collect();
    for id in ids {
        if let Err(err) = rebuild_piece(store, registry, config, overrides, id) {
            let name = store.piece(id).map_or_else(|_| String::new(), |p| p.name.clone());
            tracing::warn!(piece = %name, error = %err, "skipping snap point generation");
        }
    }
}

fn rebuild_piece(
    store: &mut PieceStore,
    registry: &mut SnapPointRegistry,
    config: &GenerationConfig,
    overrides: &SnapPointOverrides,
    id: PieceId,
) -> crate::error::Result<()> {
    let (name, authored) = {
        let piece = store.piece(id)?;
        let authored: Vec<AttachmentPoint> = piece.authored_points().cloned().collect();
        (piece.name.clone(), authored)
    };

    let extras = if let Some(points) = overrides.get(&name) {
        points.to_vec()
    } else {
        extras_for(&authored, config, &name)?
    };

    if extras.is_empty() {
        return Ok(());
    }
    registry.add_generated(store, id, &extras)
}
