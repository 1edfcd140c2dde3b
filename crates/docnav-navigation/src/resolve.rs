//! Active-state resolution.
//!
//! Both checks are pure and total: any string is accepted, and inputs that
//! cannot match (empty paths, leaves asked about children) simply yield
//! `false`.

use crate::entry::MenuEntry;
use crate::path::normalize;

/// Whether the entry at `entry_path` is the page at `current_page_path`.
///
/// True when the normalized current path ends with the normalized entry
/// path. The comparison is a plain string suffix, not segment-aware, so
/// `model` also matches the page `docs/xmodel`. An entry path that
/// normalizes to nothing never matches.
///
/// ```
/// use docnav_navigation::is_active;
///
/// assert!(is_active("/docs/model/associations/", "model/associations"));
/// assert!(!is_active("docs/model/associations", "docs/model/entities"));
/// ```
#[must_use]
pub fn is_active(current_page_path: &str, entry_path: &str) -> bool {
    let entry = normalize(entry_path);
    !entry.is_empty() && normalize(current_page_path).ends_with(entry)
}

/// Whether `entry` should be highlighted because it contains the current page.
///
/// Leaves are never active parents. A branch is one when any of its
/// descendants has a normalized path exactly equal to the normalized
/// current path; suffix matches do not count.
#[must_use]
pub fn is_active_parent(current_page_path: &str, entry: &MenuEntry) -> bool {
    match entry {
        MenuEntry::Leaf { .. } => false,
        MenuEntry::Branch { children, .. } => {
            let current = normalize(current_page_path);
            !current.is_empty()
                && children.iter().any(|child| {
                    normalize(child.path()) == current || is_active_parent(current, child)
                })
        }
    }
}
