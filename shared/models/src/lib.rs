//! # Formula Core Domain Models
//!
//! Data types shared by the formula (bill of materials) services.
//!
//! ## Key Models
//!
//! - **ItemRecord**: one row of the flat item list, referencing its parent by name
//! - **ExplosionNode**: nested cost breakdown of a product, one node per item
//! - **ImplosionSummary**: total cost and component quantities for a production run
//!
//! ## Validation
//!
//! `ItemRecord` derives `validator::Validate`: names must be non-empty and
//! unit costs non-negative. Quantities are not range-checked.

pub mod item;
pub mod bom;


pub use item::*;
pub use bom::*;
