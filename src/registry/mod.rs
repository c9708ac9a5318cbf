//! Ownership tracking for generated snap points.
//!
//! Pieces live in a [`PieceStore`] arena and reference each other via
//! generational IDs. The [`SnapPointRegistry`] is the single source of
//! truth for which attachment points this engine added to a piece: only
//! it creates points flagged `is_generated`, and only it removes them.

mod rebuild;

pub use rebuild::{rebuild, SnapPointOverrides};

use slotmap::{SecondaryMap, SlotMap};

use crate::error::{Result, SnapError};
use crate::snap::{AttachmentPoint, NamedSnapPoint};

slotmap::new_key_type! {
    /// Unique identifier for a placeable piece in the store.
    pub struct PieceId;
}

/// A placeable piece and its current attachment points.
///
/// Authored and generated points share one ordered list; generated points
/// carry the `is_generated` flag and always follow the authored ones.
#[derive(Debug, Clone)]
pub struct PieceData {
    /// Stable name, used for override lookups and diagnostics only.
    pub name: String,
    pub points: Vec<AttachmentPoint>,
}

impl PieceData {
    /// Creates a piece with its authored attachment points.
    #[must_use]
    pub fn new(name: impl Into<String>, points: Vec<AttachmentPoint>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    /// The points defined by content data, in authoring order.
    pub fn authored_points(&self) -> impl Iterator<Item = &AttachmentPoint> {
        self.points.iter().filter(|p| !p.is_generated)
    }
}

/// Arena that owns every piece eligible for snap-point generation.
#[derive(Debug, Default)]
pub struct PieceStore {
    pieces: SlotMap<PieceId, PieceData>,
}

impl PieceStore {
    /// Creates a new, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a piece and returns its ID.
    pub fn add_piece(&mut self, data: PieceData) -> PieceId {
        self.pieces.insert(data)
    }

    /// Returns a reference to the piece data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the piece is not in the store.
    pub fn piece(&self, id: PieceId) -> Result<&PieceData> {
        self.pieces
            .get(id)
            .ok_or_else(|| SnapError::PieceNotFound(format!("{id:?}")))
    }

    /// Returns a mutable reference to the piece data, or an error if not
    /// found.
    ///
    /// # Errors
    ///
    /// Returns an error if the piece is not in the store.
    pub fn piece_mut(&mut self, id: PieceId) -> Result<&mut PieceData> {
        self.pieces
            .get_mut(id)
            .ok_or_else(|| SnapError::PieceNotFound(format!("{id:?}")))
    }

    /// Iterates over all piece IDs.
    pub fn ids(&self) -> impl Iterator<Item = PieceId> + '_ {
        self.pieces.keys()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}

/// The generated points installed under one owner.
#[derive(Debug, Clone, Default)]
pub struct RegistryEntry {
    /// Installed points, in installation order.
    pub generated: Vec<AttachmentPoint>,
}

/// Tracks every synthetically generated point per owning piece.
///
/// Invariant: the set of flagged points physically present on a piece
/// always equals that owner's entry, which is what makes a full
/// clear-then-regenerate rebuild idempotent.
#[derive(Debug, Default)]
pub struct SnapPointRegistry {
    entries: SecondaryMap<PieceId, RegistryEntry>,
}

impl SnapPointRegistry {
    /// Creates a new, empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Instantiates the given points as generated attachment points under
    /// `owner` and records them.
    ///
    /// Points carrying `requested_index` hints are installed in hint
    /// order when every point has one; otherwise the given order is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if `owner` is not in the store.
    pub fn add_generated(
        &mut self,
        store: &mut PieceStore,
        owner: PieceId,
        points: &[NamedSnapPoint],
    ) -> Result<()> {
        let piece = store.piece_mut(owner)?;
        let entry = self
            .entries
            .entry(owner)
            .ok_or_else(|| SnapError::PieceNotFound(format!("{owner:?}")))?
            .or_insert_with(RegistryEntry::default);

        let mut ordered: Vec<&NamedSnapPoint> = points.iter().collect();
        if ordered.iter().all(|p| p.requested_index.is_some()) {
            ordered.sort_by_key(|p| p.requested_index);
        }

        for named in ordered {
            let attachment = AttachmentPoint {
                position: named.position,
                name: named.name.clone(),
                is_generated: true,
            };
            piece.points.push(attachment.clone());
            entry.generated.push(attachment);
        }
        Ok(())
    }

    /// Destroys every previously generated attachment point across all
    /// owners and empties every entry.
    ///
    /// Must run before regenerating during a rebuild pass so stale points
    /// never accumulate; duplicated points would corrupt the cycling
    /// cursor's index space.
    pub fn clear_all(&mut self, store: &mut PieceStore) {
        for (_, piece) in &mut store.pieces {
            piece.points.retain(|p| !p.is_generated);
        }
        self.entries.clear();
    }

    /// The generated points recorded for one owner, if any.
    #[must_use]
    pub fn entry(&self, owner: PieceId) -> Option<&RegistryEntry> {
        self.entries.get(owner)
    }

    /// Total number of generated points across all owners.
    #[must_use]
    pub fn generated_count(&self) -> usize {
        self.entries.values().map(|e| e.generated.len()).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;

    fn authored(x: f64, name: &str) -> AttachmentPoint {
        AttachmentPoint::authored(Point3::new(x, 0.0, 0.0), name)
    }

    fn named(x: f64, name: &str) -> NamedSnapPoint {
        NamedSnapPoint::new(Point3::new(x, 0.0, 0.0), name)
    }

    #[test]
    fn add_generated_flags_and_records() {
        let mut store = PieceStore::new();
        let id = store.add_piece(PieceData::new("beam", vec![authored(0.0, "A")]));
        let mut registry = SnapPointRegistry::new();

        registry
            .add_generated(&mut store, id, &[named(1.0, "Center")])
            .unwrap();

        let piece = store.piece(id).unwrap();
        assert_eq!(piece.points.len(), 2);
        assert!(piece.points[1].is_generated);
        assert_eq!(registry.entry(id).unwrap().generated.len(), 1);
        assert_eq!(registry.generated_count(), 1);
    }

    #[test]
    fn clear_all_removes_only_generated_points() {
        let mut store = PieceStore::new();
        let id = store.add_piece(PieceData::new(
            "beam",
            vec![authored(0.0, "A"), authored(2.0, "B")],
        ));
        let mut registry = SnapPointRegistry::new();
        registry
            .add_generated(&mut store, id, &[named(1.0, "Center")])
            .unwrap();

        registry.clear_all(&mut store);

        let piece = store.piece(id).unwrap();
        assert_eq!(piece.points.len(), 2);
        assert!(piece.points.iter().all(|p| !p.is_generated));
        assert!(registry.entry(id).is_none());
        assert_eq!(registry.generated_count(), 0);
    }

    #[test]
    fn requested_index_orders_installation() {
        let mut store = PieceStore::new();
        let id = store.add_piece(PieceData::new("tower", Vec::new()));
        let mut registry = SnapPointRegistry::new();

        let points = [
            NamedSnapPoint::with_index(Point3::new(2.0, 0.0, 0.0), "Second", 1),
            NamedSnapPoint::with_index(Point3::new(1.0, 0.0, 0.0), "First", 0),
        ];
        registry.add_generated(&mut store, id, &points).unwrap();

        let piece = store.piece(id).unwrap();
        assert_eq!(piece.points[0].name, "First");
        assert_eq!(piece.points[1].name, "Second");
    }

    #[test]
    fn missing_owner_is_an_error() {
        let mut store = PieceStore::new();
        let id = store.add_piece(PieceData::new("beam", Vec::new()));
        let mut registry = SnapPointRegistry::new();
        let mut other = PieceStore::new();

        assert!(matches!(
            registry.add_generated(&mut other, id, &[named(0.0, "X")]),
            Err(SnapError::PieceNotFound(_))
        ));
    }
}
