//! Configuration management for docnav.
//!
//! Parses `docnav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Navigation
//!
//! The menu is taken from exactly one place: either inline under
//! `[navigation.menu]`, or from a standalone file named by
//! `navigation.source` (resolved relative to the config file). The loaded
//! mapping is available as [`Config::menu`]; see [`menu`] for its shape.
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.base_url`
//! - `docsearch.api_key`
//! - `docsearch.index_name`

mod expand;
pub mod menu;

use serde::Deserialize;
use std::path::{Path, PathBuf};

pub use menu::{MenuConfig, MenuEntryConfig, MenuItemConfig};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override site base URL.
    pub base_url: Option<String>,
    /// Override production flag.
    pub production: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "docnav.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site metadata.
    pub site: SiteConfig,
    /// Algolia `DocSearch` credentials (optional section).
    pub docsearch: Option<DocSearchConfig>,
    /// Navigation source as written in TOML.
    navigation: NavigationConfigRaw,

    /// Resolved navigation menu (set after loading).
    #[serde(skip)]
    pub menu: MenuConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Site metadata exposed to templates.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute URL the site is published under. Empty when unknown.
    pub base_url: String,
    /// Whether this is a production build.
    pub production: bool,
    /// Site name.
    pub name: String,
    /// One-line site description.
    pub description: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            production: false,
            name: "Documentation".to_owned(),
            description: String::new(),
        }
    }
}

/// Algolia `DocSearch` configuration.
#[derive(Debug, Deserialize)]
pub struct DocSearchConfig {
    /// Search-only API key.
    pub api_key: String,
    /// Index name.
    pub index_name: String,
}

impl DocSearchConfig {
    /// Validate that all required fields are set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any field is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.api_key, "docsearch.api_key")?;
        require_non_empty(&self.index_name, "docsearch.index_name")?;
        Ok(())
    }
}

/// Raw navigation configuration as parsed from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct NavigationConfigRaw {
    source: Option<String>,
    menu: Option<MenuConfig>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`docsearch.api_key`").
        field: String,
        /// Error message (e.g., "${`DOCSEARCH_API_KEY`} not set").
        message: String,
    },
    /// The standalone navigation file could not be loaded.
    #[error("Failed to load navigation from {}: {source}", path.display())]
    NavigationSource {
        /// Resolved path of the navigation file.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: Box<ConfigError>,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `docnav.toml` in current directory and parents,
    /// falling back to defaults (empty menu) when none exists.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the navigation source cannot be read.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            tracing::debug!("No {CONFIG_FILENAME} found, using defaults");
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Parse configuration from a TOML string.
    ///
    /// `config_dir` is the directory relative `navigation.source` paths are
    /// resolved against. Environment expansion and validation run as for
    /// [`Config::load`].
    ///
    /// # Errors
    ///
    /// Returns error if parsing, expansion, navigation loading or validation fails.
    pub fn parse(content: &str, config_dir: &Path) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;

        // Expand environment variables before anything reads the values
        config.expand_env_vars()?;
        config.resolve_navigation(config_dir)?;

        config.validate()?;

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(base_url) = &settings.base_url {
            self.site.base_url.clone_from(base_url);
        }
        if let Some(production) = settings.production {
            self.site.production = production;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config_dir = path.parent().unwrap_or(Path::new("."));

        let mut config = Self::parse(&content, config_dir)?;
        config.config_path = Some(path.to_path_buf());

        tracing::info!(
            path = %path.display(),
            menu_items = config.menu.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Checks that all required fields are properly set and contain valid values.
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_site()?;
        if let Some(docsearch) = &self.docsearch {
            docsearch.validate()?;
        }
        Ok(())
    }

    /// Validate site configuration.
    fn validate_site(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.name, "site.name")?;

        // base_url is optional, but when set it must be absolute
        if !self.site.base_url.is_empty() {
            require_http_url(&self.site.base_url, "site.base_url")?;
        }

        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.base_url = expand::expand_env(&self.site.base_url, "site.base_url")?;

        if let Some(ref mut docsearch) = self.docsearch {
            docsearch.api_key = expand::expand_env(&docsearch.api_key, "docsearch.api_key")?;
            docsearch.index_name =
                expand::expand_env(&docsearch.index_name, "docsearch.index_name")?;
        }

        Ok(())
    }

    /// Resolve the navigation menu from the inline table or the source file.
    fn resolve_navigation(&mut self, config_dir: &Path) -> Result<(), ConfigError> {
        let raw = std::mem::take(&mut self.navigation);

        self.menu = match (raw.source, raw.menu) {
            (Some(_), Some(_)) => {
                return Err(ConfigError::Validation(
                    "navigation.source and navigation.menu cannot both be set".to_owned(),
                ));
            }
            (Some(source), None) => {
                require_non_empty(&source, "navigation.source")?;
                menu::load_menu_file(&config_dir.join(source))?
            }
            (None, Some(menu)) => menu,
            (None, None) => MenuConfig::default(),
        };

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ORIGIN_CONFIG: &str = r#"
[site]
base_url = "https://www.originphp.com/"
production = false
name = "OriginPHP"
description = "OriginPHP is an open-source MVC framework."

[docsearch]
api_key = "85dd81c266dc348ab5b9203f8740bf14"
index_name = "originphp"

[navigation.menu."Getting Started"]
url = "docs/getting-started"

[navigation.menu.Controllers]
url = "docs/controllers"

[navigation.menu.Controllers.children]
"Request Object" = "docs/controller/request"
"Response Object" = "docs/controller/response"

[navigation.menu.Plugins]
url = "docs/plugins"
"#;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.site.name, "Documentation");
        assert_eq!(config.site.base_url, "");
        assert!(!config.site.production);
        assert!(config.docsearch.is_none());
        assert!(config.menu.is_empty());
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config = Config::parse("", Path::new("/project")).unwrap();
        assert_eq!(config.site.name, "Documentation");
        assert!(config.menu.is_empty());
    }

    #[test]
    fn test_parse_site_and_docsearch() {
        let config = Config::parse(ORIGIN_CONFIG, Path::new("/project")).unwrap();

        assert_eq!(config.site.base_url, "https://www.originphp.com/");
        assert_eq!(config.site.name, "OriginPHP");
        assert!(!config.site.production);
        let docsearch = config.docsearch.as_ref().unwrap();
        assert_eq!(docsearch.index_name, "originphp");
    }

    #[test]
    fn test_parse_inline_menu_keeps_order() {
        let config = Config::parse(ORIGIN_CONFIG, Path::new("/project")).unwrap();

        let labels: Vec<_> = config.menu.keys().map(String::as_str).collect();
        assert_eq!(labels, vec!["Getting Started", "Controllers", "Plugins"]);
        assert_eq!(config.menu["Controllers"].path(), Some("docs/controllers"));
        assert_eq!(config.menu["Controllers"].children().unwrap().len(), 2);
    }

    #[test]
    fn test_navigation_source_resolved_relative_to_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("navigation.toml"),
            r#"
[Models]
path = "docs/models"

[Models.children]
"Associations" = "docs/model/associations"
"#,
        )
        .unwrap();
        let toml = r#"
[navigation]
source = "navigation.toml"
"#;

        let config = Config::parse(toml, dir.path()).unwrap();

        assert_eq!(config.menu.len(), 1);
        assert_eq!(config.menu["Models"].path(), Some("docs/models"));
    }

    #[test]
    fn test_navigation_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let toml = r#"
[navigation]
source = "missing.toml"
"#;

        let err = Config::parse(toml, dir.path()).unwrap_err();

        assert!(matches!(err, ConfigError::NavigationSource { .. }));
        assert!(err.to_string().contains("missing.toml"));
    }

    #[test]
    fn test_navigation_source_and_menu_conflict() {
        let toml = r#"
[navigation]
source = "navigation.toml"

[navigation.menu.Plugins]
path = "docs/plugins"
"#;

        let err = Config::parse(toml, Path::new("/project")).unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("cannot both be set"));
    }

    #[test]
    fn test_navigation_unknown_key_rejected() {
        let toml = r#"
[navigation]
file = "navigation.toml"
"#;
        let result = Config::parse(toml, Path::new("/project"));
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docnav.toml");
        std::fs::write(&path, ORIGIN_CONFIG).unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.config_path, Some(path));
        assert_eq!(config.menu.len(), 3);
    }

    #[test]
    fn test_load_explicit_path_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docnav.toml");

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_apply_cli_settings_base_url() {
        let mut config = Config::default();
        let settings = CliSettings {
            base_url: Some("https://staging.originphp.com/".to_owned()),
            ..Default::default()
        };

        config.apply_cli_settings(&settings);

        assert_eq!(config.site.base_url, "https://staging.originphp.com/");
        assert!(!config.site.production);
    }

    #[test]
    fn test_apply_cli_settings_production() {
        let mut config = Config::default();
        let settings = CliSettings {
            production: Some(true),
            ..Default::default()
        };

        config.apply_cli_settings(&settings);

        assert!(config.site.production);
        assert_eq!(config.site.base_url, "");
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let mut config = Config::parse(ORIGIN_CONFIG, Path::new("/project")).unwrap();

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.site.base_url, "https://www.originphp.com/");
        assert!(!config.site.production);
    }

    #[test]
    fn test_load_rejects_invalid_cli_base_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docnav.toml");
        std::fs::write(&path, ORIGIN_CONFIG).unwrap();
        let settings = CliSettings {
            base_url: Some("ftp://example.com".to_owned()),
            ..Default::default()
        };

        let result = Config::load(Some(&path), Some(&settings));

        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_expand_env_vars_docsearch() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::set_var("DOCNAV_CFG_TEST_KEY", "from-env");
        }
        let toml = r#"
[docsearch]
api_key = "${DOCNAV_CFG_TEST_KEY}"
index_name = "${DOCNAV_CFG_TEST_INDEX_UNSET:-originphp}"
"#;

        let config = Config::parse(toml, Path::new("/project")).unwrap();

        let docsearch = config.docsearch.unwrap();
        assert_eq!(docsearch.api_key, "from-env");
        assert_eq!(docsearch.index_name, "originphp");
        unsafe {
            std::env::remove_var("DOCNAV_CFG_TEST_KEY");
        }
    }

    #[test]
    fn test_expand_env_vars_missing_required_var() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("DOCNAV_CFG_TEST_BASE_UNSET");
        }
        let toml = r#"
[site]
base_url = "${DOCNAV_CFG_TEST_BASE_UNSET}"
"#;

        let err = Config::parse(toml, Path::new("/project")).unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("site.base_url"));
    }

    #[test]
    fn test_validate_site_name_empty() {
        let toml = r#"
[site]
name = ""
"#;
        let err = Config::parse(toml, Path::new("/project")).unwrap_err();
        assert!(err.to_string().contains("site.name cannot be empty"));
    }

    #[test]
    fn test_validate_base_url_invalid_scheme() {
        let toml = r#"
[site]
base_url = "www.originphp.com"
"#;
        let err = Config::parse(toml, Path::new("/project")).unwrap_err();
        assert!(err.to_string().contains("site.base_url must start with"));
    }

    #[test]
    fn test_validate_docsearch_empty_key() {
        let toml = r#"
[docsearch]
api_key = ""
index_name = "originphp"
"#;
        let err = Config::parse(toml, Path::new("/project")).unwrap_err();
        assert!(err.to_string().contains("docsearch.api_key cannot be empty"));
    }
}
