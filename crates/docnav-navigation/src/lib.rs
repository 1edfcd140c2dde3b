//! Navigation tree and active-state resolution for docnav.
//!
//! This crate provides:
//! - [`MenuEntry`]: a leaf or a branch with ordered children
//! - [`NavigationTree`]: the validated, immutable menu
//! - [`normalize`], [`resolve_href`]: path comparison and link targets
//! - [`is_active`], [`is_active_parent`]: per-entry highlighting rules
//!
//! # Quick Start
//!
//! ```
//! use docnav_navigation::{MenuEntry, NavigationTree, is_active, is_active_parent};
//!
//! let tree = NavigationTree::new(vec![
//!     MenuEntry::leaf("Getting Started", "docs/getting-started"),
//!     MenuEntry::branch(
//!         "Models",
//!         "docs/models",
//!         vec![MenuEntry::leaf("Associations", "docs/model/associations")],
//!     ),
//! ])?;
//!
//! let current = "/docs/model/associations/";
//! let models = &tree.entries()[1];
//! assert!(is_active_parent(current, models));
//! assert!(is_active(current, models.children()[0].path()));
//! assert_eq!(models.href(), "/docs/models");
//! # Ok::<(), docnav_navigation::NavigationError>(())
//! ```

mod entry;
mod path;
mod resolve;
mod tree;

pub use entry::{MenuEntry, Walk};
pub use path::{is_external, normalize, resolve_href};
pub use resolve::{is_active, is_active_parent};
pub use tree::{NavigationError, NavigationTree};
