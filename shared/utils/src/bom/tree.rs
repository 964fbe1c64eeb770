//! Tree Builder
//!
//! Turns the flat, parent-referencing item list into an owned tree.

use std::collections::{HashMap, HashSet};

use formula_models::ItemRecord;
use thiserror::Error;
use tracing::{debug, warn};

/// One item in the formula tree. Children are owned and keep input order.
#[derive(Debug, Clone, PartialEq)]
pub struct BomNode {
    pub name: String,
    pub qty: i64,
    pub unit_cost: f64,
    pub children: Vec<BomNode>,
}

impl BomNode {
    pub fn new(name: impl Into<String>, qty: i64, unit_cost: f64) -> Self {
        Self {
            name: name.into(),
            qty,
            unit_cost,
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: BomNode) -> Self {
        self.children.push(child);
        self
    }

    /// Cost of this node's own row, ignoring its children
    pub fn line_cost(&self) -> f64 {
        self.qty as f64 * self.unit_cost
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including itself
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(BomNode::node_count).sum::<usize>()
    }

    fn from_record(record: &ItemRecord) -> Self {
        Self::new(record.name.clone(), record.qty, record.unit_cost)
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TreeError {
    #[error("no item without a parent, the formula has no root")]
    MissingRoot,

    #[error("several items without a parent: {}", .candidates.join(", "))]
    AmbiguousRoot { candidates: Vec<String> },

    #[error("item name '{name}' appears more than once")]
    DuplicateName { name: String },

    #[error("product '{requested}' not found, the stored root is '{root}'")]
    ProductNotFound { requested: String, root: String },
}

/// Records that were read but did not end up in the tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildReport {
    pub item_count: usize,
    /// Items whose `parent_name` names no known item, in input order
    pub orphans: Vec<String>,
    /// Items with a known parent that still cannot be reached from the root,
    /// either below an orphan or inside a parent cycle
    pub detached: Vec<String>,
}

impl BuildReport {
    pub fn attached_count(&self) -> usize {
        self.item_count - self.orphans.len() - self.detached.len()
    }

    pub fn is_clean(&self) -> bool {
        self.orphans.is_empty() && self.detached.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BomTree {
    pub root: BomNode,
    pub report: BuildReport,
}

/// Builds [`BomTree`]s from item records.
///
/// Exactly one record may lack a parent and names must be unique; anything
/// else is rejected. Records whose parent cannot be resolved are left out
/// of the tree and listed in the [`BuildReport`].
#[derive(Debug, Default, Clone, Copy)]
pub struct TreeBuilder;

impl TreeBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn build(&self, records: &[ItemRecord]) -> Result<BomTree, TreeError> {
        let mut index: HashMap<&str, usize> = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            if index.insert(record.name.as_str(), position).is_some() {
                return Err(TreeError::DuplicateName {
                    name: record.name.clone(),
                });
            }
        }

        let mut children: Vec<Vec<usize>> = vec![Vec::new(); records.len()];
        let mut roots = Vec::new();
        let mut orphans = Vec::new();
        let mut is_orphan = vec![false; records.len()];

        for (position, record) in records.iter().enumerate() {
            match record.parent_name.as_deref() {
                None => roots.push(position),
                Some(parent) => match index.get(parent) {
                    Some(&parent_position) => children[parent_position].push(position),
                    None => {
                        orphans.push(position);
                        is_orphan[position] = true;
                    }
                },
            }
        }

        let root_position = match roots.as_slice() {
            [] => return Err(TreeError::MissingRoot),
            [single] => *single,
            several => {
                return Err(TreeError::AmbiguousRoot {
                    candidates: several.iter().map(|&p| records[p].name.clone()).collect(),
                })
            }
        };

        let mut attached = vec![false; records.len()];
        let root = assemble(records, &children, root_position, &mut attached);

        let orphan_names: Vec<String> = orphans.iter().map(|&p| records[p].name.clone()).collect();
        let detached: Vec<String> = records
            .iter()
            .enumerate()
            .filter(|(position, _)| !attached[*position] && !is_orphan[*position])
            .map(|(_, record)| record.name.clone())
            .collect();

        for (position, name) in orphans.iter().zip(&orphan_names) {
            warn!(
                item = %name,
                parent = ?records[*position].parent_name,
                "Item references an unknown parent and is excluded from the tree"
            );
        }
        if !detached.is_empty() {
            warn!(items = ?detached, "Items are unreachable from the root and excluded from the tree");
        }

        let report = BuildReport {
            item_count: records.len(),
            orphans: orphan_names,
            detached,
        };
        debug!(
            root = %root.name,
            items = report.item_count,
            attached = report.attached_count(),
            "Formula tree built"
        );

        Ok(BomTree { root, report })
    }

    /// Names of the records whose `parent_name` matches no record, in input
    /// order. Needs no root, so it also works on lists that fail to build.
    pub fn find_orphans(&self, records: &[ItemRecord]) -> Vec<String> {
        let names: HashSet<&str> = records.iter().map(|r| r.name.as_str()).collect();
        records
            .iter()
            .filter(|r| matches!(r.parent_name.as_deref(), Some(parent) if !names.contains(parent)))
            .map(|r| r.name.clone())
            .collect()
    }

    /// Builds the tree and checks that its root is `product`.
    pub fn build_for(&self, records: &[ItemRecord], product: &str) -> Result<BomTree, TreeError> {
        let tree = self.build(records)?;
        if tree.root.name != product {
            return Err(TreeError::ProductNotFound {
                requested: product.to_string(),
                root: tree.root.name,
            });
        }
        Ok(tree)
    }
}

// Each record has at most one parent, so the subgraph reachable from the
// root is a tree and this recursion visits every record at most once.
fn assemble(
    records: &[ItemRecord],
    children: &[Vec<usize>],
    position: usize,
    attached: &mut [bool],
) -> BomNode {
    attached[position] = true;
    let mut node = BomNode::from_record(&records[position]);
    node.children = children[position]
        .iter()
        .map(|&child| assemble(records, children, child, attached))
        .collect();
    node
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(nodes: &[BomNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.name.as_str()).collect()
    }

    #[test]
    fn test_build_preserves_sibling_order() {
        let records = vec![
            ItemRecord::child("Seat", "Chair", 1, 8.0),
            ItemRecord::root("Chair", 1, 5.0),
            ItemRecord::child("Leg", "Chair", 4, 2.0),
            ItemRecord::child("Screw", "Leg", 2, 0.1),
            ItemRecord::child("Back", "Chair", 1, 6.0),
        ];

        let tree = TreeBuilder::new().build(&records).unwrap();
        assert_eq!(tree.root.name, "Chair");
        assert_eq!(names(&tree.root.children), vec!["Seat", "Leg", "Back"]);
        assert_eq!(names(&tree.root.children[1].children), vec!["Screw"]);
        assert!(tree.root.children[0].is_leaf());
        assert!(tree.report.is_clean());
        assert_eq!(tree.report.attached_count(), 5);
    }

    #[test]
    fn test_orphans_are_reported_not_attached() {
        let records = vec![
            ItemRecord::root("Chair", 1, 5.0),
            ItemRecord::child("Cushion", "Sofa", 2, 3.0),
            ItemRecord::child("Zipper", "Cushion", 1, 0.5),
            ItemRecord::child("Leg", "Chair", 4, 2.0),
        ];

        let tree = TreeBuilder::new().build(&records).unwrap();
        assert_eq!(tree.root.node_count(), 2);
        assert_eq!(tree.report.orphans, vec!["Cushion".to_string()]);
        assert_eq!(tree.report.detached, vec!["Zipper".to_string()]);
        assert!(!tree.report.is_clean());
    }

    #[test]
    fn test_parent_cycle_is_detached() {
        let records = vec![
            ItemRecord::root("Chair", 1, 5.0),
            ItemRecord::child("A", "B", 1, 1.0),
            ItemRecord::child("B", "A", 1, 1.0),
            ItemRecord::child("Self", "Self", 1, 1.0),
        ];

        let tree = TreeBuilder::new().build(&records).unwrap();
        assert!(tree.root.is_leaf());
        assert!(tree.report.orphans.is_empty());
        assert_eq!(tree.report.detached, vec!["A", "B", "Self"]);
    }

    #[test]
    fn test_missing_root() {
        let records = vec![ItemRecord::child("Leg", "Chair", 4, 2.0)];
        assert_eq!(TreeBuilder::new().build(&records), Err(TreeError::MissingRoot));
        assert_eq!(TreeBuilder::new().build(&[]), Err(TreeError::MissingRoot));
    }

    #[test]
    fn test_ambiguous_root() {
        let records = vec![
            ItemRecord::root("Chair", 1, 5.0),
            ItemRecord::root("Table", 1, 9.0),
        ];
        let err = TreeBuilder::new().build(&records).unwrap_err();
        assert_eq!(
            err,
            TreeError::AmbiguousRoot {
                candidates: vec!["Chair".to_string(), "Table".to_string()]
            }
        );
        assert_eq!(err.to_string(), "several items without a parent: Chair, Table");
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let records = vec![
            ItemRecord::root("Chair", 1, 5.0),
            ItemRecord::child("Leg", "Chair", 4, 2.0),
            ItemRecord::child("Leg", "Chair", 2, 3.0),
        ];
        assert_eq!(
            TreeBuilder::new().build(&records),
            Err(TreeError::DuplicateName {
                name: "Leg".to_string()
            })
        );
    }

    #[test]
    fn test_build_for_checks_product_name() {
        let records = vec![ItemRecord::root("Chair", 1, 5.0)];
        let builder = TreeBuilder::new();

        assert!(builder.build_for(&records, "Chair").is_ok());
        assert_eq!(
            builder.build_for(&records, "chair"),
            Err(TreeError::ProductNotFound {
                requested: "chair".to_string(),
                root: "Chair".to_string()
            })
        );
    }

    #[test]
    fn test_empty_parent_name_is_orphan() {
        let records = vec![
            ItemRecord::root("Chair", 1, 5.0),
            ItemRecord::child("Leg", "", 4, 2.0),
        ];
        let tree = TreeBuilder::new().build(&records).unwrap();
        assert_eq!(tree.report.orphans, vec!["Leg".to_string()]);
    }

    #[test]
    fn test_many_orphans_keep_detached_separate() {
        let mut records = vec![ItemRecord::root("Chair", 1, 5.0)];
        for i in 0..500 {
            records.push(ItemRecord::child(format!("Loose{}", i), format!("Missing{}", i), 1, 1.0));
            records.push(ItemRecord::child(format!("Below{}", i), format!("Loose{}", i), 1, 1.0));
        }

        let tree = TreeBuilder::new().build(&records).unwrap();
        assert_eq!(tree.report.orphans.len(), 500);
        assert_eq!(tree.report.detached.len(), 500);
        assert!(tree.report.detached.iter().all(|name| name.starts_with("Below")));
        assert_eq!(tree.report.attached_count(), 1);
    }

    #[test]
    fn test_find_orphans_without_a_root() {
        let records = vec![
            ItemRecord::root("Chair", 1, 5.0),
            ItemRecord::root("Table", 1, 9.0),
            ItemRecord::child("Cushion", "Sofa", 2, 3.0),
            ItemRecord::child("Zipper", "Cushion", 1, 0.5),
            ItemRecord::child("Leg", "Table", 4, 2.0),
        ];
        let builder = TreeBuilder::new();

        assert!(builder.build(&records).is_err());
        assert_eq!(builder.find_orphans(&records), vec!["Cushion".to_string()]);
        assert!(builder.find_orphans(&[]).is_empty());
    }
}
