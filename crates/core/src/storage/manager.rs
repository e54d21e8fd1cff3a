use std::path::Path;

use tracing::{debug, warn};

use crate::errors::CoreError;
use crate::models::portfolio::Portfolio;
use crate::models::settings::LoaderSettings;

use super::records;

/// High-level storage operations: load a portfolio from a record file or string.
pub struct StorageManager;

impl StorageManager {
    /// Parse a portfolio from the full text of a record file.
    ///
    /// Flow: count record lines → allocate exactly that many slots → parse
    /// each record line. With `skip_invalid` set, malformed lines are logged
    /// and dropped; otherwise the first one fails the load.
    pub fn load_from_str(contents: &str, settings: &LoaderSettings) -> Result<Portfolio, CoreError> {
        // 1. Pre-count so the portfolio is allocated once
        let expected = records::count_records(contents);
        let mut portfolio = Portfolio::with_capacity(expected);

        // 2. Parse pass
        for (idx, line) in contents.lines().enumerate() {
            if !records::is_record_line(line) {
                continue;
            }
            match records::parse_line(idx + 1, line) {
                Ok(investment) => portfolio.push(investment),
                Err(e) if settings.skip_invalid => {
                    warn!(error = %e, "skipping malformed record");
                }
                Err(e) => return Err(e),
            }
        }

        debug!(
            expected,
            loaded = portfolio.len(),
            "portfolio parsed"
        );
        Ok(portfolio)
    }

    /// Read and parse a record file from disk.
    pub fn load_from_file(
        path: impl AsRef<Path>,
        settings: &LoaderSettings,
    ) -> Result<Portfolio, CoreError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            CoreError::FileIO(format!("Failed to read {}: {e}", path.display()))
        })?;
        debug!(path = %path.display(), bytes = contents.len(), "record file read");
        Self::load_from_str(&contents, settings)
    }
}
