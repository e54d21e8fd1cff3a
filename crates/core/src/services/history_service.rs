use tracing::debug;

use crate::errors::CoreError;
use crate::models::snapshot::{Snapshot, SnapshotHistory};

/// Applies and rolls back whole-document snapshots.
///
/// Pure business logic — no I/O. The history is a two-state machine:
/// with two or more snapshots undo is enabled, with exactly one it is not.
pub struct HistoryService;

impl HistoryService {
    pub fn new() -> Self {
        Self
    }

    /// Append `text` to the current document and store the result as the
    /// new latest snapshot.
    ///
    /// Fails with `CapacityExceeded` if the combined text would exceed the
    /// history's capacity; the history is left unchanged in that case.
    pub fn append<'a>(
        &self,
        history: &'a mut SnapshotHistory,
        text: &str,
    ) -> Result<&'a Snapshot, CoreError> {
        let current = self.current_text(history);
        let required = current.len() + text.len();
        if required > history.capacity {
            return Err(CoreError::CapacityExceeded {
                capacity: history.capacity,
                required,
            });
        }

        let mut next = String::with_capacity(required);
        next.push_str(current);
        next.push_str(text);

        let position = history.snapshots.len();
        history.snapshots.push(Snapshot::new(position, next));
        debug!(position, len = required, "snapshot appended");

        // Just pushed, so the history is non-empty.
        Ok(&history.snapshots[position])
    }

    /// Discard the latest snapshot and return the text reverted to.
    ///
    /// Returns `None` ("nothing to undo") when one or zero snapshots remain;
    /// the initial snapshot is never removed.
    pub fn undo_last<'a>(&self, history: &'a mut SnapshotHistory) -> Option<&'a str> {
        if !self.can_undo(history) {
            debug!(snapshots = history.len(), "nothing to undo");
            return None;
        }
        history.snapshots.pop();
        debug!(snapshots = history.len(), "snapshot discarded");
        history.latest().map(|s| s.text.as_str())
    }

    /// Content of the latest snapshot, or `""` if there is none.
    pub fn current_text<'a>(&self, history: &'a SnapshotHistory) -> &'a str {
        history.latest().map_or("", |s| s.text.as_str())
    }

    pub fn can_undo(&self, history: &SnapshotHistory) -> bool {
        history.len() > 1
    }
}

impl Default for HistoryService {
    fn default() -> Self {
        Self::new()
    }
}
