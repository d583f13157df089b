use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by a single conversion request
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Operations config not loaded")]
    ConfigNotLoaded,

    #[error("Invalid JSON: {0}")]
    InvalidPayload(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown operation '{operation}' in category '{category}'")]
    UnknownOperation { operation: String, category: String },
}

/// Errors that can occur when loading the operations catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("could not read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors that can occur when loading the engine configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_error_messages() {
        assert_eq!(
            ConvertError::ConfigNotLoaded.to_string(),
            "Operations config not loaded"
        );
        assert_eq!(
            ConvertError::UnknownCategory("bogus".into()).to_string(),
            "Unknown category: bogus"
        );
        let err = ConvertError::UnknownOperation {
            operation: "fly".into(),
            category: "apps".into(),
        };
        assert_eq!(err.to_string(), "Unknown operation 'fly' in category 'apps'");
    }

    #[test]
    fn test_catalog_io_error_names_path() {
        let err = CatalogError::Io {
            path: PathBuf::from("/nowhere/ops.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("/nowhere/ops.json"));
    }
}
