//! Path normalization and href resolution.

/// Strip leading and trailing slashes so two paths can be compared.
///
/// Internal slashes, case and percent-encoding are left alone. Runs of
/// slashes at either end are removed entirely, which keeps the function
/// idempotent: `normalize(normalize(p)) == normalize(p)`.
///
/// ```
/// use docnav_navigation::normalize;
///
/// assert_eq!(normalize("/docs/models/"), "docs/models");
/// assert_eq!(normalize("docs/models"), "docs/models");
/// assert_eq!(normalize("/"), "");
/// ```
#[must_use]
pub fn normalize(path: &str) -> &str {
    path.trim_matches('/')
}

/// Whether `path` is an external link rendered as-is.
///
/// Matches the literal, case-sensitive prefix `http`, so both `http://` and
/// `https://` qualify.
#[must_use]
pub fn is_external(path: &str) -> bool {
    path.starts_with("http")
}

/// Compute the render-ready link target for `path`.
///
/// External links are returned unchanged; anything else becomes a
/// site-absolute path with exactly one leading slash.
///
/// ```
/// use docnav_navigation::resolve_href;
///
/// assert_eq!(resolve_href("docs/models"), "/docs/models");
/// assert_eq!(resolve_href("/docs/view/intl-helper"), "/docs/view/intl-helper");
/// assert_eq!(resolve_href("https://github.com/originphp"), "https://github.com/originphp");
/// ```
#[must_use]
pub fn resolve_href(path: &str) -> String {
    if is_external(path) {
        path.to_owned()
    } else {
        format!("/{}", normalize(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_surrounding_slashes() {
        assert_eq!(normalize("/docs/models/"), "docs/models");
        assert_eq!(normalize("/docs/models"), "docs/models");
        assert_eq!(normalize("docs/models/"), "docs/models");
        assert_eq!(normalize("docs/models"), "docs/models");
    }

    #[test]
    fn test_normalize_keeps_internal_structure() {
        assert_eq!(normalize("/Docs/Model%20X//y/"), "Docs/Model%20X//y");
    }

    #[test]
    fn test_normalize_empty_and_root() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("/"), "");
        assert_eq!(normalize("//"), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = [
            "",
            "/",
            "//",
            "docs",
            "/docs/",
            "//docs//",
            "docs/model/associations",
            "/docs/view/intl-helper",
            "https://github.com/originphp/",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(once), once, "input: {input:?}");
        }
    }

    #[test]
    fn test_is_external() {
        assert!(is_external("http://example.com/x"));
        assert!(is_external("https://example.com/x"));
        assert!(!is_external("HTTP://example.com/x"));
        assert!(!is_external("/http/docs"));
        assert!(!is_external("docs/models"));
    }

    #[test]
    fn test_resolve_href_external_unchanged() {
        assert_eq!(resolve_href("http://example.com/x"), "http://example.com/x");
        assert_eq!(resolve_href("https://example.com/x/"), "https://example.com/x/");
    }

    #[test]
    fn test_resolve_href_relative_gets_single_leading_slash() {
        assert_eq!(resolve_href("docs/models"), "/docs/models");
        assert_eq!(resolve_href("/docs/models/"), "/docs/models");
        assert_eq!(resolve_href(""), "/");
    }
}
