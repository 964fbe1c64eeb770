//! BOM (Bill of Materials) Module
//!
//! Builds a formula tree from the flat item list and computes cost
//! rollups, component quantities and the nested explosion view.
//!
//! Cost and quantity use different scaling rules: cost rollups treat every
//! `qty` as an absolute row quantity, while component explosion multiplies
//! `qty` down the tree.

pub mod tree;
pub mod cost;
pub mod exploder;
pub mod serializer;


pub use tree::{BomNode, BomTree, BuildReport, TreeBuilder, TreeError};
pub use cost::CostAggregator;
pub use exploder::{round_currency, ComponentExploder};
pub use serializer::TreeSerializer;
