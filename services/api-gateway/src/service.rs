//! Formula Service
//!
//! Loads the item list fresh for every call and runs the tree core on it.

use formula_database::ItemRepository;
use formula_models::{ExplosionNode, ImplosionSummary, ItemRecord};
use formula_utils::{
    validate_item_batch, validate_price, ComponentExploder, FormulaError,
    FormulaResult, TreeBuilder, TreeSerializer,
};
use serde::Serialize;
use tracing::{info, instrument, warn};

/// Structural health of the stored item list
#[derive(Debug, Clone, Serialize)]
pub struct FormulaDiagnostics {
    pub item_count: usize,
    pub root: Option<String>,
    pub root_candidates: Vec<String>,
    pub orphans: Vec<String>,
    pub detached: Vec<String>,
    pub error: Option<String>,
}

#[derive(Clone)]
pub struct FormulaService {
    items: ItemRepository,
    builder: TreeBuilder,
}

impl FormulaService {
    pub fn new(items: ItemRepository) -> Self {
        Self {
            items,
            builder: TreeBuilder::new(),
        }
    }

    pub fn list_items(&self) -> FormulaResult<Vec<ItemRecord>> {
        self.items.find_all()
    }

    /// Validates and stores `items`, replacing the current list
    #[instrument(skip(self, items), fields(items = items.len()))]
    pub fn register_items(&self, items: &[ItemRecord]) -> FormulaResult<usize> {
        validate_item_batch(items)?;
        let count = self.items.replace_all(items)?;
        info!(count, "Item list replaced");
        Ok(count)
    }

    #[instrument(skip(self))]
    pub fn explosion(&self, product: &str) -> FormulaResult<ExplosionNode> {
        let records = self.items.find_all()?;
        let tree = self.builder.build_for(&records, product)?;
        Ok(TreeSerializer::serialize(&tree.root))
    }

    #[instrument(skip(self))]
    pub fn implosion(&self, product: &str, quantity: i64) -> FormulaResult<ImplosionSummary> {
        if quantity < 0 {
            warn!(quantity, "Negative implosion quantity, totals will be negative");
        }
        let records = self.items.find_all()?;
        let tree = self.builder.build_for(&records, product)?;
        Ok(ComponentExploder::implode(&tree.root, quantity))
    }

    #[instrument(skip(self))]
    pub fn update_price(&self, name: &str, new_price: f64) -> FormulaResult<usize> {
        validate_price(new_price)?;
        let updated = self.items.update_unit_cost(name, new_price)?;
        if updated == 0 {
            return Err(FormulaError::not_found(format!("component {}", name)));
        }
        info!(updated, "Unit cost updated");
        Ok(updated)
    }

    /// Reports root resolution and the items left out of the tree.
    ///
    /// Structural problems are described rather than returned as errors.
    /// Orphans are listed even when no root resolves; `detached` needs a
    /// root to walk from and stays empty in that case.
    pub fn diagnostics(&self) -> FormulaResult<FormulaDiagnostics> {
        let records = self.items.find_all()?;
        let mut diagnostics = FormulaDiagnostics {
            item_count: records.len(),
            root: None,
            root_candidates: records
                .iter()
                .filter(|r| r.is_root())
                .map(|r| r.name.clone())
                .collect(),
            orphans: Vec::new(),
            detached: Vec::new(),
            error: None,
        };

        match self.builder.build(&records) {
            Ok(tree) => {
                diagnostics.root = Some(tree.root.name);
                diagnostics.orphans = tree.report.orphans;
                diagnostics.detached = tree.report.detached;
            }
            Err(e) => {
                diagnostics.orphans = self.builder.find_orphans(&records);
                diagnostics.error = Some(e.to_string());
            }
        }

        Ok(diagnostics)
    }
}
