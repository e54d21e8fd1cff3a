use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::settings::EditorSettings;

/// A stored copy of the entire document text at one point in editing history.
///
/// Snapshots are never mutated after creation; each one holds the full
/// document state rather than a diff against its predecessor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// 0-based position in the history (the initial empty snapshot is 0)
    pub position: usize,

    /// Full document text at this point
    pub text: String,

    /// When the snapshot was taken
    pub created_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn new(position: usize, text: impl Into<String>) -> Self {
        Self {
            position,
            text: text.into(),
            created_at: Utc::now(),
        }
    }
}

/// Ordered sequence of whole-document snapshots, oldest first.
///
/// Always holds at least the initial empty snapshot when built through
/// [`SnapshotHistory::new`] or `Default`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotHistory {
    /// Snapshots in creation order; the last one is the current document
    pub snapshots: Vec<Snapshot>,

    /// Maximum document length in bytes
    pub capacity: usize,
}

impl SnapshotHistory {
    pub fn new(settings: &EditorSettings) -> Self {
        Self {
            snapshots: vec![Snapshot::new(0, "")],
            capacity: settings.capacity,
        }
    }

    /// The latest snapshot, if any.
    pub fn latest(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl Default for SnapshotHistory {
    fn default() -> Self {
        Self::new(&EditorSettings::default())
    }
}
