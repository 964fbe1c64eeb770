//! Nested explosion view of a formula tree.

use formula_models::ExplosionNode;

use super::tree::BomNode;

pub struct TreeSerializer;

impl TreeSerializer {
    /// Renders the subtree with each node's cost rollup as `total`.
    ///
    /// Totals are summed bottom-up in the same order as
    /// [`CostAggregator::total`](super::CostAggregator::total), so both agree exactly.
    pub fn serialize(node: &BomNode) -> ExplosionNode {
        let children: Vec<ExplosionNode> = node.children.iter().map(Self::serialize).collect();

        let mut total = node.line_cost();
        for child in &children {
            total += child.total;
        }

        ExplosionNode {
            name: node.name.clone(),
            qty: node.qty,
            unit_cost: node.unit_cost,
            total,
            children,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bom::CostAggregator;

    #[test]
    fn test_serialize_nested_totals() {
        let root = BomNode::new("Lamp", 1, 12.0)
            .with_child(BomNode::new("Shade", 1, 7.5))
            .with_child(BomNode::new("Base", 1, 4.0).with_child(BomNode::new("Screw", 3, 0.2)));

        let view = TreeSerializer::serialize(&root);
        assert_eq!(view.name, "Lamp");
        assert_eq!(view.total, CostAggregator::total(&root));
        assert_eq!(view.children.len(), 2);
        assert_eq!(view.children[0].total, 7.5);
        assert_eq!(view.children[1].total, CostAggregator::total(&root.children[1]));
        assert_eq!(view.children[1].children[0].name, "Screw");
        assert!(view.children[1].children[0].children.is_empty());
    }

    #[test]
    fn test_serialized_json_shape() {
        let view = TreeSerializer::serialize(&BomNode::new("Lamp", 2, 5.0));
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Lamp",
                "qty": 2,
                "unit_cost": 5.0,
                "total": 10.0,
                "children": []
            })
        );
    }
}
