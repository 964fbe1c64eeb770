//! Item record model.
//!
//! A formula is stored as a flat, ordered list of item records. Each record
//! points at its parent by name; the single record without a parent is the
//! product itself.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// One row of the flat item list.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct ItemRecord {
    #[validate(length(min = 1, max = 200, message = "Item name must be between 1 and 200 characters"))]
    pub name: String,
    #[serde(default)]
    pub parent_name: Option<String>,
    /// May be negative; totals then go negative as well
    pub qty: i64,
    #[validate(range(min = 0.0, message = "Unit cost must not be negative"))]
    pub unit_cost: f64,
}

impl ItemRecord {
    /// Creates a record with no parent
    pub fn root(name: impl Into<String>, qty: i64, unit_cost: f64) -> Self {
        Self {
            name: name.into(),
            parent_name: None,
            qty,
            unit_cost,
        }
    }

    /// Creates a record attached to `parent_name`
    pub fn child(
        name: impl Into<String>,
        parent_name: impl Into<String>,
        qty: i64,
        unit_cost: f64,
    ) -> Self {
        Self {
            name: name.into(),
            parent_name: Some(parent_name.into()),
            qty,
            unit_cost,
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent_name.is_none()
    }

    pub fn is_child_of(&self, parent: &str) -> bool {
        self.parent_name.as_deref() == Some(parent)
    }

    /// Cost of this row alone, without any descendants
    pub fn line_cost(&self) -> f64 {
        self.qty as f64 * self.unit_cost
    }
}
