use std::fs;
use std::path::{Path, PathBuf};

use formula_models::ItemRecord;
use formula_utils::{FormulaError, FormulaResult};
use tracing::debug;

use crate::ItemStore;

/// Item list kept as a pretty-printed JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonFileItemStore {
    path: PathBuf,
}

impl JsonFileItemStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ItemStore for JsonFileItemStore {
    /// A missing file is an empty list.
    fn load(&self) -> FormulaResult<Vec<ItemRecord>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "Data file missing, starting empty");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            FormulaError::storage(format!("Failed to read {}: {}", self.path.display(), e))
        })?;
        let items: Vec<ItemRecord> = serde_json::from_str(&content).map_err(|e| {
            FormulaError::storage(format!("Failed to parse {}: {}", self.path.display(), e))
        })?;

        debug!(path = %self.path.display(), items = items.len(), "Loaded items");
        Ok(items)
    }

    fn save(&self, items: &[ItemRecord]) -> FormulaResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(items)?;
        fs::write(&self.path, content).map_err(|e| {
            FormulaError::storage(format!("Failed to write {}: {}", self.path.display(), e))
        })?;

        debug!(path = %self.path.display(), items = items.len(), "Saved items");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> JsonFileItemStore {
        let dir = std::env::temp_dir().join(format!("formula-store-{}", uuid::Uuid::new_v4()));
        JsonFileItemStore::new(dir.join("items.json"))
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let store = temp_store();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load_keeps_order() {
        let store = temp_store();
        let items = vec![
            ItemRecord::child("Leg", "Table", 4, 10.0),
            ItemRecord::root("Table", 1, 50.0),
        ];

        store.save(&items).unwrap();
        assert_eq!(store.load().unwrap(), items);

        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\n  {"));
        assert!(raw.contains("\"parent_name\": null"));

        fs::remove_dir_all(store.path().parent().unwrap()).ok();
    }

    #[test]
    fn test_corrupt_file_is_storage_error() {
        let store = temp_store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "{ not json").unwrap();

        let err = store.load().unwrap_err();
        assert_eq!(err.error_code(), "STORAGE_ERROR");

        fs::remove_dir_all(store.path().parent().unwrap()).ok();
    }
}
