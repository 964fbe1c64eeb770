//! Item Repository
//!
//! CRUD operations over the flat item list.

use std::sync::Arc;

use formula_models::ItemRecord;
use formula_utils::FormulaResult;

use crate::ItemStore;

#[derive(Clone)]
pub struct ItemRepository {
    store: Arc<dyn ItemStore>,
}

impl ItemRepository {
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self { store }
    }

    /// All items, in stored order
    pub fn find_all(&self) -> FormulaResult<Vec<ItemRecord>> {
        self.store.load()
    }

    /// Replaces every stored item with `items`
    pub fn replace_all(&self, items: &[ItemRecord]) -> FormulaResult<usize> {
        self.store.save(items)?;
        Ok(items.len())
    }

    /// Sets `unit_cost` on every item whose name matches, ignoring case.
    ///
    /// Returns how many items changed; nothing is written when none match.
    pub fn update_unit_cost(&self, name: &str, unit_cost: f64) -> FormulaResult<usize> {
        let mut items = self.store.load()?;
        let target = name.to_lowercase();

        let mut updated = 0;
        for item in items.iter_mut().filter(|i| i.name.to_lowercase() == target) {
            item.unit_cost = unit_cost;
            updated += 1;
        }

        if updated > 0 {
            self.store.save(&items)?;
        }
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InMemoryItemStore;

    fn repository() -> ItemRepository {
        let store = InMemoryItemStore::with_items(vec![
            ItemRecord::root("Table", 1, 50.0),
            ItemRecord::child("Leg", "Table", 4, 10.0),
            ItemRecord::child("Top", "Table", 1, 30.0),
        ]);
        ItemRepository::new(Arc::new(store))
    }

    #[test]
    fn test_update_unit_cost_ignores_case() {
        let repo = repository();
        assert_eq!(repo.update_unit_cost("LEG", 12.5).unwrap(), 1);

        let items = repo.find_all().unwrap();
        assert_eq!(items[1].unit_cost, 12.5);
        assert_eq!(items[2].unit_cost, 30.0);
    }

    #[test]
    fn test_update_unit_cost_unknown_name() {
        let repo = repository();
        assert_eq!(repo.update_unit_cost("Drawer", 1.0).unwrap(), 0);
        assert_eq!(repo.find_all().unwrap()[1].unit_cost, 10.0);
    }

    #[test]
    fn test_replace_all() {
        let repo = repository();
        let count = repo.replace_all(&[ItemRecord::root("Stool", 1, 20.0)]).unwrap();
        assert_eq!(count, 1);
        assert_eq!(repo.find_all().unwrap(), vec![ItemRecord::root("Stool", 1, 20.0)]);
    }
}
