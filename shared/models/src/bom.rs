//! Response models for formula explosion and implosion.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::item::ItemRecord;

/// Nested cost breakdown of one item and everything below it.
///
/// `total` is the cost rollup of the subtree rooted at this node.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExplosionNode {
    pub name: String,
    pub qty: i64,
    pub unit_cost: f64,
    pub total: f64,
    pub children: Vec<ExplosionNode>,
}

impl ExplosionNode {
    /// Flattens the tree back into item records, in pre-order.
    ///
    /// The node this is called on becomes the root record.
    pub fn to_records(&self) -> Vec<ItemRecord> {
        let mut records = Vec::new();
        self.collect_records(None, &mut records);
        records
    }

    fn collect_records(&self, parent: Option<&str>, records: &mut Vec<ItemRecord>) {
        records.push(ItemRecord {
            name: self.name.clone(),
            parent_name: parent.map(str::to_string),
            qty: self.qty,
            unit_cost: self.unit_cost,
        });
        for child in &self.children {
            child.collect_records(Some(&self.name), records);
        }
    }

    /// Number of nodes in this subtree, including itself
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(ExplosionNode::node_count).sum::<usize>()
    }
}

/// Material requirements for producing `quantity` units of `product`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImplosionSummary {
    pub product: String,
    pub quantity: i64,
    pub total: f64,
    pub components: BTreeMap<String, i64>,
}
