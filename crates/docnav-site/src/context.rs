//! Render context shared by every page of a build.
//!
//! [`SiteContext`] owns the site metadata and an `Arc` of the validated
//! [`NavigationTree`]. It is constructed once, then handed to each render;
//! nothing in it changes afterwards, so concurrent renders can share it
//! freely.

use std::sync::Arc;

use docnav_config::Config;
use docnav_navigation::{
    MenuEntry, NavigationError, NavigationTree, is_active, is_active_parent, is_external,
    resolve_href,
};
use serde::Serialize;

use crate::page::CurrentPage;

/// Site metadata exposed to templates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteMeta {
    /// Absolute URL the site is published under, empty when unknown.
    pub base_url: String,
    /// Whether this is a production build.
    pub production: bool,
    /// Site name.
    pub name: String,
    /// One-line description.
    pub description: String,
    /// `DocSearch` credentials, when search is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docsearch: Option<DocSearch>,
}

/// Algolia `DocSearch` credentials.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocSearch {
    /// Search-only API key.
    pub api_key: String,
    /// Index name.
    pub index_name: String,
}

/// Navigation item resolved against one page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    /// Display label.
    pub label: String,
    /// Render-ready link target.
    pub href: String,
    /// Link points outside the site.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub external: bool,
    /// The current page matches this item's own path.
    pub is_active: bool,
    /// The current page is one of this item's descendants.
    pub is_active_parent: bool,
    /// Child items.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

impl NavItem {
    /// Whether the item should be drawn highlighted.
    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.is_active || self.is_active_parent
    }
}

/// Whole menu resolved against one page.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Navigation {
    /// Path of the page the menu was resolved for.
    pub current_path: String,
    /// Top-level items in display order.
    pub items: Vec<NavItem>,
}

/// Breadcrumb navigation item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BreadcrumbItem {
    /// Display label.
    pub label: String,
    /// Link target.
    pub href: String,
}

/// Immutable per-build render context.
#[derive(Clone, Debug)]
pub struct SiteContext {
    site: SiteMeta,
    navigation: Arc<NavigationTree>,
}

impl SiteContext {
    /// Create a context from already built parts.
    #[must_use]
    pub fn new(site: SiteMeta, navigation: Arc<NavigationTree>) -> Self {
        Self { site, navigation }
    }

    /// Build the navigation tree from a loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`NavigationError`] if the configured menu has a defect.
    pub fn from_config(config: &Config) -> Result<Self, NavigationError> {
        let navigation = NavigationTree::from_config(&config.menu)?;

        let site = SiteMeta {
            base_url: config.site.base_url.clone(),
            production: config.site.production,
            name: config.site.name.clone(),
            description: config.site.description.clone(),
            docsearch: config.docsearch.as_ref().map(|docsearch| DocSearch {
                api_key: docsearch.api_key.clone(),
                index_name: docsearch.index_name.clone(),
            }),
        };

        tracing::info!(
            site = %site.name,
            entries = navigation.walk().count(),
            "Site context ready"
        );
        Ok(Self::new(site, Arc::new(navigation)))
    }

    /// Site metadata.
    #[must_use]
    pub fn site(&self) -> &SiteMeta {
        &self.site
    }

    /// Shared navigation tree.
    #[must_use]
    pub fn tree(&self) -> &Arc<NavigationTree> {
        &self.navigation
    }

    /// Whether the entry at `path` is the current page (suffix rule).
    #[must_use]
    pub fn is_active(&self, page: &CurrentPage, path: &str) -> bool {
        is_active(page.path(), path)
    }

    /// Whether `entry` contains the current page among its descendants.
    #[must_use]
    pub fn is_active_parent(&self, page: &CurrentPage, entry: &MenuEntry) -> bool {
        is_active_parent(page.path(), entry)
    }

    /// Render-ready link target for `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        resolve_href(path)
    }

    /// Absolute link for `path` under the configured base URL.
    ///
    /// External links and sites without a base URL fall back to [`Self::url`].
    #[must_use]
    pub fn canonical_url(&self, path: &str) -> String {
        let href = resolve_href(path);
        if is_external(path) || self.site.base_url.is_empty() {
            return href;
        }
        format!("{}{href}", self.site.base_url.trim_end_matches('/'))
    }

    /// Resolve the whole menu against `page`.
    #[must_use]
    pub fn navigation(&self, page: &CurrentPage) -> Navigation {
        Navigation {
            current_path: page.path().to_owned(),
            items: resolve_items(self.navigation.entries(), page.path()),
        }
    }

    /// Breadcrumbs from the top-level entry down to the current page.
    ///
    /// Empty when the page is not in the menu.
    #[must_use]
    pub fn breadcrumbs(&self, page: &CurrentPage) -> Vec<BreadcrumbItem> {
        self.navigation
            .active_trail(page.path())
            .into_iter()
            .map(|entry| BreadcrumbItem {
                label: entry.label().to_owned(),
                href: entry.href(),
            })
            .collect()
    }
}

fn resolve_items(entries: &[MenuEntry], current: &str) -> Vec<NavItem> {
    entries
        .iter()
        .map(|entry| NavItem {
            label: entry.label().to_owned(),
            href: entry.href(),
            external: is_external(entry.path()),
            is_active: is_active(current, entry.path()),
            is_active_parent: is_active_parent(current, entry),
            children: resolve_items(entry.children(), current),
        })
        .collect()
}
