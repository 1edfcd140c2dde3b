//! Raw menu mapping as written in configuration.
//!
//! A menu is an ordered mapping of label to item. An item is either a bare
//! path string or a table with its own `path` (legacy key: `url`) and an
//! optional `children` mapping of the same shape:
//!
//! ```toml
//! ["Getting Started"]
//! path = "docs/getting-started"
//!
//! [Models]
//! url = "docs/models"
//!
//! [Models.children]
//! "Associations" = "docs/model/associations"
//! "Entities" = "docs/model/entities"
//! ```
//!
//! Key order is preserved, it is the order entries are rendered in.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::ConfigError;

/// Ordered label to item mapping.
pub type MenuConfig = IndexMap<String, MenuItemConfig>;

/// One menu item as written in configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MenuItemConfig {
    /// Shorthand: `"Label" = "docs/page"`.
    Path(String),
    /// Full form with optional children.
    Entry(MenuEntryConfig),
}

/// Table form of a menu item.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuEntryConfig {
    /// Landing page of the item.
    #[serde(default, alias = "url")]
    pub path: Option<String>,
    /// Nested items, rendered below this one.
    #[serde(default)]
    pub children: Option<MenuConfig>,
}

impl MenuItemConfig {
    /// Path of the item, `None` when a table omits it.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Path(path) => Some(path),
            Self::Entry(entry) => entry.path.as_deref(),
        }
    }

    /// Nested items, `None` for shorthand items and tables without `children`.
    #[must_use]
    pub fn children(&self) -> Option<&MenuConfig> {
        match self {
            Self::Path(_) => None,
            Self::Entry(entry) => entry.children.as_ref(),
        }
    }
}

/// Read a standalone menu file (the menu mapping at the document root).
pub(crate) fn load_menu_file(path: &Path) -> Result<MenuConfig, ConfigError> {
    let wrap = |source: ConfigError| ConfigError::NavigationSource {
        path: path.to_path_buf(),
        source: Box::new(source),
    };

    if !path.exists() {
        return Err(wrap(ConfigError::NotFound(path.to_path_buf())));
    }
    let content = std::fs::read_to_string(path).map_err(|e| wrap(e.into()))?;
    let menu: MenuConfig = toml::from_str(&content).map_err(|e| wrap(e.into()))?;

    tracing::debug!(path = %path.display(), items = menu.len(), "Loaded navigation menu");
    Ok(menu)
}
