use std::path::PathBuf;

use tab_butler_palette::{InventoryError, TabCandidate, TabInventory, parse_tab_inventory};

/// Tab inventory backed by a JSON export of the browser window
///
/// The file is re-read on every fetch so edits show up on the next
/// activation.
#[derive(Debug, Clone)]
pub struct FileTabInventory {
    path: PathBuf,
}

impl FileTabInventory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TabInventory for FileTabInventory {
    async fn fetch_tabs(&self) -> Result<Vec<TabCandidate>, InventoryError> {
        log::debug!("Reading tabs from {}", self.path.display());
        let json = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(InventoryError::Read)?;
        parse_tab_inventory(&json)
    }
}
