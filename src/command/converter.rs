//! Command conversion - turns decoded intents into shell command strings

use crate::command::catalog::OperationsCatalog;
use crate::command::intent::ParsedIntent;
use crate::command::normalize::ParamNormalizer;
use crate::command::render;
use crate::core::config::EngineConfig;
use crate::core::error::{ConvertError, Result};

/// Converts intents into commands using an operations catalog
///
/// The catalog is loaded once at construction. A failed load leaves the
/// converter usable but every conversion reports [`ConvertError::ConfigNotLoaded`].
#[derive(Debug, Clone)]
pub struct CommandConverter {
    catalog: Option<OperationsCatalog>,
    normalizer: ParamNormalizer,
}

impl Default for CommandConverter {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl CommandConverter {
    /// Build a converter, loading the configured catalog (or the bundled one)
    pub fn new(config: &EngineConfig) -> Self {
        let loaded = match &config.catalog_path {
            Some(path) => OperationsCatalog::load_from_file(path),
            None => OperationsCatalog::bundled(),
        };

        let catalog = match loaded {
            Ok(catalog) => {
                tracing::info!(
                    categories = catalog.categories().count(),
                    templates = catalog.len(),
                    "Loaded operations catalog"
                );
                Some(catalog)
            }
            Err(e) => {
                tracing::warn!("Could not load operations catalog: {}", e);
                None
            }
        };

        Self {
            catalog,
            normalizer: ParamNormalizer::from_config(config),
        }
    }

    /// Build a converter around an already-loaded catalog
    pub fn with_catalog(catalog: OperationsCatalog, normalizer: ParamNormalizer) -> Self {
        Self {
            catalog: Some(catalog),
            normalizer,
        }
    }

    /// A converter whose catalog never loaded
    pub fn unloaded(normalizer: ParamNormalizer) -> Self {
        Self {
            catalog: None,
            normalizer,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.catalog.is_some()
    }

    pub fn catalog(&self) -> Option<&OperationsCatalog> {
        self.catalog.as_ref()
    }

    /// Convert a decoded intent into a command string
    pub fn convert(&self, intent: &ParsedIntent) -> Result<String> {
        let catalog = self.catalog.as_ref().ok_or(ConvertError::ConfigNotLoaded)?;
        let template = catalog.lookup(intent.category(), intent.operation())?;

        let missing = render::missing_params(template, intent.params());
        if !missing.is_empty() {
            tracing::debug!(
                category = intent.category(),
                operation = intent.operation(),
                "Missing parameters: {}",
                missing.join(", ")
            );
        }

        let command = render::render(template, intent.params(), &self.normalizer);
        tracing::debug!(
            category = intent.category(),
            operation = intent.operation(),
            %command,
            "Converted intent"
        );
        Ok(command)
    }

    /// Decode a JSON payload and convert it
    pub fn convert_json(&self, json: &str) -> Result<String> {
        let intent = ParsedIntent::from_json(json)?;
        self.convert(&intent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn converter() -> CommandConverter {
        CommandConverter::with_catalog(
            OperationsCatalog::bundled().unwrap(),
            ParamNormalizer::default(),
        )
    }

    #[test]
    fn test_convert_open_app() {
        let intent = ParsedIntent::new("apps", "open").with_param("app", "chrome");
        assert_eq!(
            converter().convert(&intent).unwrap(),
            "open -a \"Google Chrome\""
        );
    }

    #[test]
    fn test_convert_unloaded_catalog() {
        let converter = CommandConverter::unloaded(ParamNormalizer::default());
        assert!(!converter.is_loaded());
        let err = converter
            .convert(&ParsedIntent::new("apps", "open"))
            .unwrap_err();
        assert!(matches!(err, ConvertError::ConfigNotLoaded));
    }

    #[test]
    fn test_unloaded_catalog_wins_over_bad_payload_lookup() {
        let converter = CommandConverter::unloaded(ParamNormalizer::default());
        let err = converter.convert(&ParsedIntent::default()).unwrap_err();
        assert!(matches!(err, ConvertError::ConfigNotLoaded));
    }

    #[test]
    fn test_missing_category_is_unknown_empty_category() {
        let err = converter().convert_json(r#"{"operation": "open"}"#).unwrap_err();
        assert!(matches!(err, ConvertError::UnknownCategory(ref c) if c.is_empty()));
    }

    #[test]
    fn test_convert_json_invalid() {
        let err = converter().convert_json("open chrome please").unwrap_err();
        assert!(matches!(err, ConvertError::InvalidPayload(_)));
    }

    #[test]
    fn test_new_with_missing_catalog_file_is_unloaded() {
        let config = EngineConfig::default().with_catalog_path("/definitely/not/here.json");
        let converter = CommandConverter::new(&config);
        assert!(!converter.is_loaded());
        assert!(matches!(
            converter.convert_json(r#"{"category": "apps", "operation": "open"}"#),
            Err(ConvertError::ConfigNotLoaded)
        ));
    }

    #[test]
    fn test_default_uses_bundled_catalog() {
        let converter = CommandConverter::default();
        assert!(converter.is_loaded());
        assert_eq!(
            converter
                .convert_json(r#"{"category": "system", "operation": "sleep"}"#)
                .unwrap(),
            "pmset sleepnow"
        );
    }

    #[test]
    fn test_converter_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CommandConverter>();
    }
}
