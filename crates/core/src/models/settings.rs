use serde::{Deserialize, Serialize};

/// Default text capacity of the editor, in bytes.
pub const DEFAULT_TEXT_CAPACITY: usize = 999;

/// Settings for the snapshot editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorSettings {
    /// Maximum length of the document in bytes. Inserts that would grow
    /// the document past this are rejected.
    pub capacity: usize,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_TEXT_CAPACITY,
        }
    }
}

/// Settings for loading a stock record file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderSettings {
    /// Skip malformed lines (logging a warning) instead of failing the load.
    pub skip_invalid: bool,
}
