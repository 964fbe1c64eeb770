use std::sync::RwLock;

use formula_models::ItemRecord;
use formula_utils::{FormulaError, FormulaResult};

use crate::ItemStore;

/// Process-local store, mainly for tests.
#[derive(Debug, Default)]
pub struct InMemoryItemStore {
    items: RwLock<Vec<ItemRecord>>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<ItemRecord>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }
}

impl ItemStore for InMemoryItemStore {
    fn load(&self) -> FormulaResult<Vec<ItemRecord>> {
        let items = self
            .items
            .read()
            .map_err(|_| FormulaError::internal("item store lock poisoned"))?;
        Ok(items.clone())
    }

    fn save(&self, items: &[ItemRecord]) -> FormulaResult<()> {
        let mut stored = self
            .items
            .write()
            .map_err(|_| FormulaError::internal("item store lock poisoned"))?;
        *stored = items.to_vec();
        Ok(())
    }
}
