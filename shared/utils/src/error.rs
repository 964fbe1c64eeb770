use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bom::TreeError;

#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum FormulaError {
    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Internal server error: {message}")]
    Internal { message: String },
}

impl FormulaError {
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Storage { .. } => "STORAGE_ERROR",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Configuration { .. } => "CONFIGURATION_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Conflict { .. } => "CONFLICT",
            Self::Internal { .. } => "INTERNAL_SERVER_ERROR",
        }
    }

    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::Storage { .. } => 500,
            Self::Validation { .. } => 400,
            Self::Configuration { .. } => 500,
            Self::NotFound { .. } => 404,
            Self::Conflict { .. } => 409,
            Self::Internal { .. } => 500,
        }
    }
}

pub type FormulaResult<T> = Result<T, FormulaError>;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

impl From<FormulaError> for ErrorResponse {
    fn from(error: FormulaError) -> Self {
        let details = match &error {
            FormulaError::Validation { field, .. } => Some(serde_json::json!({ "field": field })),
            _ => None,
        };
        Self {
            error: error.to_string(),
            code: error.error_code().to_string(),
            message: error.to_string(),
            details,
        }
    }
}

// A missing root and a root with a different name both mean the requested
// product does not exist; the structural problems surface as conflicts.
impl From<TreeError> for FormulaError {
    fn from(error: TreeError) -> Self {
        match error {
            TreeError::MissingRoot => Self::not_found("product (no root item stored)"),
            TreeError::ProductNotFound { requested, .. } => {
                Self::not_found(format!("product {}", requested))
            }
            TreeError::AmbiguousRoot { .. } | TreeError::DuplicateName { .. } => {
                Self::conflict(error.to_string())
            }
        }
    }
}

impl From<serde_json::Error> for FormulaError {
    fn from(error: serde_json::Error) -> Self {
        Self::storage(format!("JSON: {}", error))
    }
}

impl From<std::io::Error> for FormulaError {
    fn from(error: std::io::Error) -> Self {
        Self::storage(error.to_string())
    }
}
