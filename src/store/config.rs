use std::path::PathBuf;

use derive_getters::Getters;

/// Where a file-backed store keeps its members files.
#[derive(Debug, Getters, Clone)]
pub struct StoreConfig {
    folder: PathBuf,
}

impl StoreConfig {
    pub fn new(folder: PathBuf) -> Self {
        Self { folder }
    }
}
