//! Data directory resolution for the budget document store.
//!
//! The store lives in a single directory holding the serialized budget
//! document. The directory comes from an environment variable with a local
//! default, so the binary works out of the box and tests or deployments can
//! point it elsewhere.

use crate::storage::Store;
use std::path::PathBuf;

/// Environment variable naming the data directory
pub const DATA_DIR_ENV: &str = "GARDEN_BUDGET_DATA_DIR";

/// Resolves the data directory from the environment, falling back to a
/// local `data` directory when the variable is unset.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    std::env::var(DATA_DIR_ENV)
        .map_or_else(|_| PathBuf::from("data"), PathBuf::from)
}

/// Opens the budget document store in the resolved data directory.
#[must_use]
pub fn open_store() -> Store {
    Store::new(get_data_dir())
}
