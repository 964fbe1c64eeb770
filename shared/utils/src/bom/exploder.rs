//! Component Exploder
//!
//! Required quantity of every component for a production run.

use std::collections::BTreeMap;

use formula_models::ImplosionSummary;

use super::cost::CostAggregator;
use super::tree::BomNode;

pub struct ComponentExploder;

impl ComponentExploder {
    /// Walks the tree pre-order, multiplying `qty` down each path.
    ///
    /// The root needs `root.qty * multiplier` units and each child needs
    /// `child.qty` per unit of its parent. Items appearing at several
    /// positions accumulate into one entry.
    pub fn explode(root: &BomNode, multiplier: i64) -> BTreeMap<String, i64> {
        let mut components = BTreeMap::new();
        accumulate(root, multiplier, &mut components);
        components
    }

    /// Component quantities plus the whole-tree cost scaled by `quantity`.
    ///
    /// The cost is the additive rollup times `quantity`, rounded to cents;
    /// it does not use the multiplied component counts.
    pub fn implode(root: &BomNode, quantity: i64) -> ImplosionSummary {
        ImplosionSummary {
            product: root.name.clone(),
            quantity,
            total: round_currency(CostAggregator::total(root) * quantity as f64),
            components: Self::explode(root, quantity),
        }
    }
}

fn accumulate(node: &BomNode, parent_qty: i64, components: &mut BTreeMap<String, i64>) {
    let effective = node.qty.saturating_mul(parent_qty);
    let entry = components.entry(node.name.clone()).or_insert(0);
    *entry = entry.saturating_add(effective);
    for child in &node.children {
        accumulate(child, effective, components);
    }
}

/// Rounds half away from zero to two decimal places
pub fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
