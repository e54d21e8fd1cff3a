pub mod errors;
pub mod models;
pub mod services;
pub mod storage;

use std::path::Path;

use models::{
    analytics::GainSummary,
    portfolio::Portfolio,
    settings::{EditorSettings, LoaderSettings},
    snapshot::{Snapshot, SnapshotHistory},
};
use services::{analytics_service::AnalyticsService, history_service::HistoryService};
use storage::manager::StorageManager;

use errors::CoreError;

/// Entry point for the snapshot editor.
/// Holds the snapshot history and the service that operates on it.
#[must_use]
pub struct MiniEditor {
    history: SnapshotHistory,
    history_service: HistoryService,
}

impl std::fmt::Debug for MiniEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MiniEditor")
            .field("snapshots", &self.history.len())
            .field("capacity", &self.history.capacity)
            .field("text_len", &self.current_text().len())
            .finish()
    }
}

impl MiniEditor {
    /// Editor with the initial empty snapshot and the given settings.
    pub fn new(settings: &EditorSettings) -> Self {
        Self {
            history: SnapshotHistory::new(settings),
            history_service: HistoryService::new(),
        }
    }

    // ── Editing ─────────────────────────────────────────────────────

    /// Append text to the document, recording a new snapshot.
    /// Returns the new full document text.
    pub fn insert_text(&mut self, text: &str) -> Result<&str, CoreError> {
        let snapshot = self.history_service.append(&mut self.history, text)?;
        Ok(&snapshot.text)
    }

    /// Revert to the previous snapshot. Returns the text reverted to,
    /// or `None` if there is nothing to undo.
    pub fn undo(&mut self) -> Option<&str> {
        self.history_service.undo_last(&mut self.history)
    }

    // ── Inspection ──────────────────────────────────────────────────

    #[must_use]
    pub fn current_text(&self) -> &str {
        self.history_service.current_text(&self.history)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history_service.can_undo(&self.history)
    }

    /// Number of stored snapshots, including the initial empty one.
    #[must_use]
    pub fn snapshot_count(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.history.snapshots
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.history.capacity
    }
}

impl Default for MiniEditor {
    fn default() -> Self {
        Self::new(&EditorSettings::default())
    }
}

/// Entry point for the percent-gain calculator.
/// Holds a loaded portfolio and the analytics over it.
#[must_use]
pub struct ProfitBook {
    portfolio: Portfolio,
    analytics_service: AnalyticsService,
}

impl std::fmt::Debug for ProfitBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfitBook")
            .field("records", &self.portfolio.len())
            .finish()
    }
}

impl ProfitBook {
    /// Wrap an already-built portfolio.
    pub fn from_portfolio(portfolio: Portfolio) -> Self {
        Self {
            portfolio,
            analytics_service: AnalyticsService::new(),
        }
    }

    /// Load a record file from disk.
    pub fn load_from_file(
        path: impl AsRef<Path>,
        settings: &LoaderSettings,
    ) -> Result<Self, CoreError> {
        let portfolio = StorageManager::load_from_file(path, settings)?;
        Ok(Self::from_portfolio(portfolio))
    }

    /// Load records from the text of a record file.
    pub fn load_from_str(contents: &str, settings: &LoaderSettings) -> Result<Self, CoreError> {
        let portfolio = StorageManager::load_from_str(contents, settings)?;
        Ok(Self::from_portfolio(portfolio))
    }

    // ── Analytics ───────────────────────────────────────────────────

    /// Mean percent gain over all records.
    pub fn average_percent_gain(&self) -> Result<f64, CoreError> {
        self.analytics_service.average_percent_gain(&self.portfolio)
    }

    /// Average plus per-record breakdown.
    pub fn summary(&self) -> Result<GainSummary, CoreError> {
        self.analytics_service.summarize(&self.portfolio)
    }

    /// The summary as pretty-printed JSON.
    pub fn summary_to_json(&self) -> Result<String, CoreError> {
        let summary = self.summary()?;
        serde_json::to_string_pretty(&summary)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize summary: {e}")))
    }

    #[must_use]
    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }
}
