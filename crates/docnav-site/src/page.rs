//! Per-render page data.

/// The page currently being rendered.
///
/// The path is kept exactly as the generator supplies it; comparisons
/// normalize it on the fly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentPage {
    path: String,
}

impl CurrentPage {
    /// Create a page from its raw path (e.g. `/docs/models/`).
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Raw path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}
