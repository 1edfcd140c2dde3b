//! Validated navigation tree.
//!
//! A [`NavigationTree`] is built once from configuration and never mutated
//! afterwards. Construction rejects configuration defects that would
//! otherwise only show up as wrong highlighting in rendered pages:
//!
//! - an entry without a path (every branch needs its own landing page)
//! - two entries resolving to the same normalized path anywhere in the tree
//! - two siblings sharing a label

use std::collections::{HashMap, HashSet};

use docnav_config::MenuConfig;
use serde::Serialize;

use crate::entry::{MenuEntry, Walk};
use crate::path::normalize;

/// Configuration defect found while building a [`NavigationTree`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    /// Entry path is missing or normalizes to nothing.
    #[error("Menu entry \"{label}\" has no path")]
    MissingPath {
        /// Label of the offending entry.
        label: String,
    },
    /// Two entries resolve to the same normalized path.
    #[error("Menu entries \"{first}\" and \"{second}\" both resolve to \"{path}\"")]
    DuplicatePath {
        /// Shared normalized path.
        path: String,
        /// Label of the entry seen first (pre-order).
        first: String,
        /// Label of the later entry.
        second: String,
    },
    /// Two siblings share a label.
    #[error("Duplicate menu label \"{label}\" in {parent}")]
    DuplicateLabel {
        /// Repeated label.
        label: String,
        /// Where the siblings live (e.g. "top level", "\"Models\"").
        parent: String,
    },
}

/// Ordered, validated menu.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NavigationTree {
    entries: Vec<MenuEntry>,
}

impl NavigationTree {
    /// Build a tree from top-level entries in display order.
    ///
    /// # Errors
    ///
    /// Returns the first [`NavigationError`] found in pre-order.
    pub fn new(entries: Vec<MenuEntry>) -> Result<Self, NavigationError> {
        validate(&entries)?;

        let tree = Self { entries };
        tracing::debug!(
            top_level = tree.entries.len(),
            total = tree.walk().count(),
            "Built navigation tree"
        );
        Ok(tree)
    }

    /// Build a tree from the menu mapping of a loaded configuration.
    ///
    /// Items with an empty `children` table become leaves. Items without a
    /// path are reported as [`NavigationError::MissingPath`].
    ///
    /// # Errors
    ///
    /// Returns the first [`NavigationError`] found in pre-order.
    pub fn from_config(menu: &MenuConfig) -> Result<Self, NavigationError> {
        Self::new(entries_from_config(menu))
    }

    /// Top-level entries in display order.
    #[must_use]
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Number of top-level entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the menu has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Depth-first, pre-order iterator over every entry.
    pub fn walk(&self) -> Walk<'_> {
        Walk::over(&self.entries)
    }

    /// Entry whose normalized path equals the normalized `path`.
    #[must_use]
    pub fn find(&self, path: &str) -> Option<&MenuEntry> {
        let wanted = normalize(path);
        if wanted.is_empty() {
            return None;
        }
        self.walk().find(|entry| normalize(entry.path()) == wanted)
    }

    /// Entries from the top level down to the one exactly matching `current_page_path`.
    ///
    /// Empty when no entry has that path.
    #[must_use]
    pub fn active_trail(&self, current_page_path: &str) -> Vec<&MenuEntry> {
        let wanted = normalize(current_page_path);
        let mut trail = Vec::new();
        if !wanted.is_empty() {
            collect_trail(&self.entries, wanted, &mut trail);
        }
        trail
    }
}

/// Push the path to the entry matching `wanted` onto `trail`.
fn collect_trail<'a>(
    entries: &'a [MenuEntry],
    wanted: &str,
    trail: &mut Vec<&'a MenuEntry>,
) -> bool {
    for entry in entries {
        trail.push(entry);
        if normalize(entry.path()) == wanted || collect_trail(entry.children(), wanted, trail) {
            return true;
        }
        trail.pop();
    }
    false
}

fn entries_from_config(menu: &MenuConfig) -> Vec<MenuEntry> {
    menu.iter()
        .map(|(label, item)| {
            let path = item.path().unwrap_or_default();
            match item.children() {
                Some(children) if !children.is_empty() => {
                    MenuEntry::branch(label.as_str(), path, entries_from_config(children))
                }
                Some(_) => {
                    tracing::warn!(label = %label, "Empty children table, treating entry as a leaf");
                    MenuEntry::leaf(label.as_str(), path)
                }
                None => MenuEntry::leaf(label.as_str(), path),
            }
        })
        .collect()
}

fn validate(entries: &[MenuEntry]) -> Result<(), NavigationError> {
    let mut seen_paths = HashMap::new();
    validate_level(entries, "top level", &mut seen_paths)
}

fn validate_level<'a>(
    entries: &'a [MenuEntry],
    parent: &str,
    seen_paths: &mut HashMap<&'a str, &'a str>,
) -> Result<(), NavigationError> {
    let mut labels = HashSet::new();

    for entry in entries {
        if !labels.insert(entry.label()) {
            return Err(NavigationError::DuplicateLabel {
                label: entry.label().to_owned(),
                parent: parent.to_owned(),
            });
        }

        let path = normalize(entry.path());
        if path.is_empty() {
            return Err(NavigationError::MissingPath {
                label: entry.label().to_owned(),
            });
        }
        if let Some(first) = seen_paths.insert(path, entry.label()) {
            return Err(NavigationError::DuplicatePath {
                path: path.to_owned(),
                first: first.to_owned(),
                second: entry.label().to_owned(),
            });
        }

        if let MenuEntry::Branch { label, children, .. } = entry {
            validate_level(children, &format!("\"{label}\""), seen_paths)?;
        }
    }

    Ok(())
}
