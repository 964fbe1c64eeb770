//! Cost rollup over a formula subtree.

use super::tree::BomNode;

pub struct CostAggregator;

impl CostAggregator {
    /// `qty * unit_cost` of the node plus the totals of all its children.
    ///
    /// A child's cost is not scaled by its ancestors' `qty`.
    pub fn total(node: &BomNode) -> f64 {
        let mut total = node.line_cost();
        for child in &node.children {
            total += Self::total(child);
        }
        total
    }
}
