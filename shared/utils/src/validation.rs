use std::collections::HashSet;

use formula_models::ItemRecord;
use validator::{Validate, ValidationErrors};

use crate::error::{FormulaError, FormulaResult};

pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = match (&error.message, error.code.as_ref()) {
                (Some(message), _) => format!("{}: {}", field, message),
                (None, "length") => format!("Length validation failed for field '{}'", field),
                (None, "range") => format!("Value out of range for field '{}'", field),
                (None, code) => format!("Validation failed for field '{}': {}", field, code),
            };
            messages.push(message);
        }
    }

    messages.sort();
    messages.join(", ")
}

/// Checks a full item list before it replaces the stored one.
///
/// Every record must validate on its own and names must be unique, since
/// the tree builder attaches children by name.
pub fn validate_item_batch(items: &[ItemRecord]) -> FormulaResult<()> {
    let mut seen = HashSet::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
        if let Err(errors) = item.validate() {
            return Err(FormulaError::validation(
                format!("items[{}]", index),
                format_validation_errors(&errors),
            ));
        }
        if !item.unit_cost.is_finite() {
            return Err(FormulaError::validation(
                format!("items[{}].unit_cost", index),
                "Unit cost must be a finite number",
            ));
        }
        if !seen.insert(item.name.as_str()) {
            return Err(FormulaError::validation(
                format!("items[{}].name", index),
                format!("Duplicate item name '{}'", item.name),
            ));
        }
    }

    Ok(())
}

pub fn validate_price(price: f64) -> FormulaResult<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(FormulaError::validation(
            "new_price",
            "Price must be a finite, non-negative number",
        ));
    }
    Ok(())
}
