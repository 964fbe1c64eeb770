//! Flat-file persistence for formula item lists.
//!
//! The whole item list is read and written at once. Nothing serialises
//! concurrent load/save cycles, so two writers can overwrite each other.

pub mod json_file;
pub mod memory;
pub mod repositories;

pub use json_file::JsonFileItemStore;
pub use memory::InMemoryItemStore;
pub use repositories::*;

use std::sync::Arc;

use formula_models::ItemRecord;
use formula_utils::{FormulaResult, StorageConfig};

/// Source of the flat item list.
pub trait ItemStore: Send + Sync {
    /// Reads the full list in stored order
    fn load(&self) -> FormulaResult<Vec<ItemRecord>>;

    /// Replaces the full list
    fn save(&self, items: &[ItemRecord]) -> FormulaResult<()>;
}

pub fn initialize_store(config: &StorageConfig) -> FormulaResult<Arc<dyn ItemStore>> {
    let store = JsonFileItemStore::new(&config.data_file);
    // Fail at startup rather than on the first request when the file is unreadable
    let items = store.load()?;
    tracing::info!(path = %config.data_file, items = items.len(), "Item store ready");
    Ok(Arc::new(store))
}
