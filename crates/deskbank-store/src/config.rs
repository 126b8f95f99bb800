//! Store configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where the account collection lives on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Backing file for the serialized collection.
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        // The desktop app keeps its data next to the executable.
        Self {
            path: PathBuf::from("accounts.json"),
        }
    }
}

impl StoreConfig {
    /// Config pointing at an explicit file, for tests and embedders.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}
