//! Engine configuration with documented defaults
//!
//! The lookup tables the normalizer consults are plain data here rather than
//! constants inside the normalizer, so a host can extend or replace them
//! without touching conversion code.

use crate::core::error::ConfigError;
use ahash::AHashMap;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Application shorthands the launcher understands out of the box.
///
/// Keys are lowercase; values are the names `open -a` expects.
pub const DEFAULT_APP_NAMES: &[(&str, &str)] = &[
    ("chrome", "Google Chrome"),
    ("safari", "Safari"),
    ("firefox", "Firefox"),
    ("slack", "Slack"),
    ("discord", "Discord"),
    ("spotify", "Spotify"),
    ("terminal", "Terminal"),
    ("iterm", "iTerm"),
    ("vscode", "Visual Studio Code"),
    ("code", "Visual Studio Code"),
    ("xcode", "Xcode"),
    ("finder", "Finder"),
    ("notes", "Notes"),
    ("messages", "Messages"),
    ("mail", "Mail"),
    ("calendar", "Calendar"),
    ("photos", "Photos"),
    ("music", "Music"),
    ("podcasts", "Podcasts"),
    ("tv", "TV"),
    ("news", "News"),
    ("books", "Books"),
    ("maps", "Maps"),
    ("facetime", "FaceTime"),
    ("preview", "Preview"),
    ("textedit", "TextEdit"),
    ("calculator", "Calculator"),
    ("activity monitor", "Activity Monitor"),
    ("system preferences", "System Preferences"),
    ("system settings", "System Settings"),
    ("app store", "App Store"),
    ("notion", "Notion"),
    ("figma", "Figma"),
    ("postman", "Postman"),
    ("docker", "Docker"),
    ("zoom", "zoom.us"),
    ("teams", "Microsoft Teams"),
    ("outlook", "Microsoft Outlook"),
    ("word", "Microsoft Word"),
    ("excel", "Microsoft Excel"),
    ("powerpoint", "Microsoft PowerPoint"),
];

/// Folder shorthands resolved to home-relative paths
pub const DEFAULT_KNOWN_FOLDERS: &[(&str, &str)] = &[
    ("downloads", "~/Downloads"),
    ("documents", "~/Documents"),
    ("desktop", "~/Desktop"),
];

/// Configuration for a conversion engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Where to read the operations catalog from
    ///
    /// `None` uses the catalog bundled into the binary.
    pub catalog_path: Option<PathBuf>,

    /// Lowercase application shorthand -> launchable display name
    pub app_names: AHashMap<String, String>,

    /// Lowercase folder shorthand -> path expression
    pub known_folders: AHashMap<String, String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            app_names: table(DEFAULT_APP_NAMES),
            known_folders: table(DEFAULT_KNOWN_FOLDERS),
        }
    }
}

fn table(entries: &[(&str, &str)]) -> AHashMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// On-disk shape of the TOML configuration file
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    catalog_path: Option<PathBuf>,
    replace_default_apps: bool,
    apps: BTreeMap<String, String>,
    folders: BTreeMap<String, String>,
}

impl EngineConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a catalog file instead of the bundled one
    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    /// Load configuration from a TOML file
    ///
    /// A relative `catalog_path` is resolved against the directory holding the
    /// config file.
    pub fn load_from_toml(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::parse_toml(&content)?;

        if let (Some(catalog), Some(dir)) = (config.catalog_path.as_mut(), path.parent()) {
            if catalog.is_relative() {
                *catalog = dir.join(&*catalog);
            }
        }

        Ok(config)
    }

    /// Parse configuration from a TOML string
    pub fn parse_toml(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;

        let mut config = Self::default();
        if file.replace_default_apps {
            config.app_names.clear();
        }
        config.catalog_path = file.catalog_path;
        config
            .app_names
            .extend(file.apps.into_iter().map(|(k, v)| (k.to_lowercase(), v)));
        config
            .known_folders
            .extend(file.folders.into_iter().map(|(k, v)| (k.to_lowercase(), v)));

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.catalog_path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::Invalid("catalog_path is empty".into()));
            }
        }

        for (name, tbl) in [("apps", &self.app_names), ("folders", &self.known_folders)] {
            if let Some((key, _)) = tbl.iter().find(|(k, v)| k.trim().is_empty() || v.is_empty()) {
                return Err(ConfigError::Invalid(format!(
                    "[{}] has an empty key or value (key: {:?})",
                    name, key
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tables() {
        let config = EngineConfig::default();
        assert_eq!(config.app_names["chrome"], "Google Chrome");
        assert_eq!(config.app_names["zoom"], "zoom.us");
        assert_eq!(config.known_folders["downloads"], "~/Downloads");
        assert!(config.catalog_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_extends_defaults() {
        let config = EngineConfig::parse_toml(
            r#"
            [apps]
            Arc = "Arc"

            [folders]
            projects = "~/Projects"
            "#,
        )
        .unwrap();
        assert_eq!(config.app_names["arc"], "Arc");
        assert_eq!(config.app_names["chrome"], "Google Chrome");
        assert_eq!(config.known_folders["projects"], "~/Projects");
    }

    #[test]
    fn test_toml_replaces_default_apps() {
        let config = EngineConfig::parse_toml(
            r#"
            replace_default_apps = true
            [apps]
            browser = "Safari"
            "#,
        )
        .unwrap();
        assert_eq!(config.app_names.len(), 1);
        assert!(!config.app_names.contains_key("chrome"));
        // folder defaults are untouched
        assert_eq!(config.known_folders["desktop"], "~/Desktop");
    }

    #[test]
    fn test_toml_rejects_unknown_keys() {
        let result = EngineConfig::parse_toml("shell = \"zsh\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_validate_rejects_empty_values() {
        let result = EngineConfig::parse_toml("[apps]\nfoo = \"\"");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_load_resolves_relative_catalog_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shellwright.toml");
        std::fs::write(&path, "catalog_path = \"ops.json\"").unwrap();

        let config = EngineConfig::load_from_toml(&path).unwrap();
        assert_eq!(config.catalog_path, Some(dir.path().join("ops.json")));
    }

    #[test]
    fn test_load_missing_file() {
        let result = EngineConfig::load_from_toml(Path::new("/definitely/not/here.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
