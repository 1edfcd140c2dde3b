//! Render-time navigation context for docnav.
//!
//! This crate provides:
//! - [`SiteContext`]: site metadata plus the shared, validated navigation tree
//! - [`CurrentPage`]: the page being rendered
//! - [`Navigation`]: the menu resolved against one page, ready for templates
//! - [`render_sidebar`]: HTML markup for a resolved menu
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use docnav_config::Config;
//! use docnav_site::{CurrentPage, SiteContext, render_sidebar};
//!
//! let config = Config::load(None, None)?;
//! let ctx = SiteContext::from_config(&config)?;
//!
//! let page = CurrentPage::new("/docs/model/associations");
//! let html = render_sidebar(&ctx.navigation(&page));
//! # Ok(())
//! # }
//! ```

mod context;
mod page;
mod template;

pub use context::{BreadcrumbItem, DocSearch, NavItem, Navigation, SiteContext, SiteMeta};
pub use page::CurrentPage;
pub use template::render_sidebar;
