//! Menu entries.

use serde::Serialize;

use crate::path::resolve_href;

/// One node of the navigation menu.
///
/// Entries with children are always [`MenuEntry::Branch`]; the variant is
/// what decides parent behavior, never the length of a child list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MenuEntry {
    /// Entry linking to a single page.
    Leaf {
        /// Display label, unique among siblings.
        label: String,
        /// Raw path as configured.
        path: String,
    },
    /// Entry with its own landing page and ordered child entries.
    Branch {
        /// Display label, unique among siblings.
        label: String,
        /// Raw path of the landing page.
        path: String,
        /// Child entries in rendering order.
        children: Vec<MenuEntry>,
    },
}

impl MenuEntry {
    /// Create a leaf entry.
    pub fn leaf(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Leaf {
            label: label.into(),
            path: path.into(),
        }
    }

    /// Create a branch entry.
    pub fn branch(
        label: impl Into<String>,
        path: impl Into<String>,
        children: Vec<MenuEntry>,
    ) -> Self {
        Self::Branch {
            label: label.into(),
            path: path.into(),
            children,
        }
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Leaf { label, .. } | Self::Branch { label, .. } => label,
        }
    }

    /// Raw configured path.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Leaf { path, .. } | Self::Branch { path, .. } => path,
        }
    }

    /// Child entries, empty for leaves.
    #[must_use]
    pub fn children(&self) -> &[MenuEntry] {
        match self {
            Self::Leaf { .. } => &[],
            Self::Branch { children, .. } => children,
        }
    }

    /// Whether this is a [`MenuEntry::Branch`].
    #[must_use]
    pub fn is_branch(&self) -> bool {
        matches!(self, Self::Branch { .. })
    }

    /// Render-ready link target.
    #[must_use]
    pub fn href(&self) -> String {
        resolve_href(self.path())
    }

    /// Depth-first, pre-order iterator over this entry and its descendants.
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![self],
        }
    }
}

/// Pre-order traversal over menu entries.
///
/// Created by [`MenuEntry::walk`] and [`NavigationTree::walk`](crate::NavigationTree::walk).
pub struct Walk<'a> {
    stack: Vec<&'a MenuEntry>,
}

impl<'a> Walk<'a> {
    pub(crate) fn over(entries: &'a [MenuEntry]) -> Self {
        Self {
            stack: entries.iter().rev().collect(),
        }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a MenuEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.stack.pop()?;
        self.stack.extend(entry.children().iter().rev());
        Some(entry)
    }
}
