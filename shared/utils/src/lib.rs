pub mod config;
pub mod logging;
pub mod error;
pub mod validation;
pub mod bom;

pub use self::config::*;
pub use self::logging::*;
pub use self::error::*;
pub use self::validation::*;
pub use self::bom::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.storage.data_file, "data/items.json");
        assert_eq!(config.cors.allowed_origins, vec!["*".to_string()]);
    }

    #[test]
    fn test_error_handling() {
        let error = FormulaError::validation("qty", "must not be negative");
        assert_eq!(error.error_code(), "VALIDATION_ERROR");
        assert_eq!(error.http_status_code(), 400);
    }

    #[test]
    fn test_tree_error_conversion() {
        let error: FormulaError = TreeError::MissingRoot.into();
        assert_eq!(error.http_status_code(), 404);

        let error: FormulaError = TreeError::AmbiguousRoot {
            candidates: vec!["A".to_string(), "B".to_string()],
        }
        .into();
        assert_eq!(error.error_code(), "CONFLICT");
        assert!(error.to_string().contains("A, B"));
    }
}
