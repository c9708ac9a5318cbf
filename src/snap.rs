use crate::math::Point3;

/// Placeholder name the host assigns to authored points that were never
/// given a meaningful label. Name inference and UI fallbacks key off it.
pub const DEFAULT_POINT_NAME: &str = "Snap Point";

/// A newly computed attachment point, ready to be installed on a piece.
///
/// Value type with no identity; immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedSnapPoint {
    /// Position in the owning piece's local space.
    pub position: Point3,
    /// Human-readable label shown by the placement UI.
    pub name: String,
    /// Advisory ordering hint for callers that care about insertion
    /// order. Ignored by classification and equality of the point set.
    pub requested_index: Option<usize>,
}

impl NamedSnapPoint {
    /// Creates a named point with no ordering hint.
    #[must_use]
    pub fn new(position: Point3, name: impl Into<String>) -> Self {
        Self {
            position,
            name: name.into(),
            requested_index: None,
        }
    }

    /// Creates a named point carrying an ordering hint.
    #[must_use]
    pub fn with_index(position: Point3, name: impl Into<String>, index: usize) -> Self {
        Self {
            position,
            name: name.into(),
            requested_index: Some(index),
        }
    }
}

/// An attachment point owned by a placeable piece.
///
/// Authored points are created when the piece is defined and live for the
/// piece's lifetime. Generated points are installed by the registry during
/// a rebuild and removed in bulk at the start of the next one; nothing
/// else may create or destroy a point with `is_generated` set.
#[derive(Debug, Clone, PartialEq)]
pub struct AttachmentPoint {
    /// Position in the piece's local space.
    pub position: Point3,
    pub name: String,
    pub is_generated: bool,
}

impl AttachmentPoint {
    /// Creates an authored attachment point.
    #[must_use]
    pub fn authored(position: Point3, name: impl Into<String>) -> Self {
        Self {
            position,
            name: name.into(),
            is_generated: false,
        }
    }

    /// Returns `true` if the point carries only the anonymous placeholder
    /// name.
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.name == DEFAULT_POINT_NAME || self.name.is_empty()
    }
}
