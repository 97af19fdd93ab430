use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for a FormEditor instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Path where the editor stores its schema database
    #[serde(default = "default_storage_path")]
    pub storage_path: PathBuf,
}

fn default_storage_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("data"))
        .join("formfold")
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            storage_path: default_storage_path(),
        }
    }
}

impl EditorConfig {
    /// Create a new configuration with the specified storage path
    pub fn new(storage_path: PathBuf) -> Self {
        Self { storage_path }
    }
}
