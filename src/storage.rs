//! JSON document persistence for the budget state.
//!
//! The entire budget lives in one serialized record whose file name carries
//! the storage key for this schema generation. Loading is best-effort: a
//! missing file yields a freshly defaulted budget, a corrupt file is
//! reported as `StateCorrupt` and recovered by `load_or_default`, and both
//! paths re-establish the reserve invariant. Saving is synchronous; callers
//! persist after each mutating operation.

use crate::{
    entities::Budget,
    errors::{Error, Result},
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Storage key identifying this schema generation of the persisted record
pub const STORAGE_KEY: &str = "garden-budget.v2";

/// File-backed store for the single budget document.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Creates a store rooted at the given data directory. The document
    /// file name is derived from [`STORAGE_KEY`].
    #[must_use]
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            path: data_dir.as_ref().join(format!("{STORAGE_KEY}.json")),
        }
    }

    /// Path of the budget document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the budget document.
    ///
    /// A missing file is not an error: it yields a freshly defaulted budget
    /// for the current month, matching first-load behavior.
    ///
    /// # Errors
    /// * `StateCorrupt` - the file exists but fails to parse
    /// * `Io` - the file exists but cannot be read
    pub fn load(&self) -> Result<Budget> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "no budget document found, starting fresh");
            return Ok(Budget::for_current_month());
        }

        let raw = fs::read_to_string(&self.path)?;
        let mut budget: Budget =
            serde_json::from_str(&raw).map_err(|e| Error::StateCorrupt {
                message: e.to_string(),
            })?;
        budget.ensure_reserve();
        Ok(budget)
    }

    /// Loads the budget document, falling back to a freshly defaulted
    /// budget if the stored copy is unreadable or corrupt. The failure is
    /// logged, never surfaced.
    #[must_use]
    pub fn load_or_default(&self) -> Budget {
        match self.load() {
            Ok(budget) => budget,
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "failed to load budget document, falling back to defaults"
                );
                Budget::for_current_month()
            }
        }
    }

    /// Writes the budget document, creating the data directory if needed.
    pub fn save(&self, budget: &Budget) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(budget)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}
