//! HTML sidebar markup for a resolved [`Navigation`].
//!
//! Produces a nested `<ul>` tree styled with Tailwind utility classes.
//! Highlighted items (active page or active parent) get the accent classes,
//! external links open in a new tab.

use std::fmt::Write;

use crate::context::{NavItem, Navigation};

/// Render the navigation sidebar.
#[must_use]
pub fn render_sidebar(navigation: &Navigation) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str("<nav class=\"text-base lg:text-sm\">\n");
    html.push_str("<ul class=\"list-reset my-0\">\n");
    render_items(&mut html, &navigation.items, 0);
    html.push_str("</ul>\n</nav>\n");
    html
}

/// Render navigation items recursively.
fn render_items(html: &mut String, items: &[NavItem], depth: usize) {
    for item in items {
        let item_classes = if depth == 0 { "mb-4" } else { "pl-4" };
        let _ = writeln!(html, "<li class=\"{item_classes}\">");

        let link_classes = if item.is_highlighted() {
            "text-blue font-semibold"
        } else {
            "text-grey-darkest hover:text-blue"
        };
        let target = if item.external {
            " target=\"_blank\" rel=\"noopener\""
        } else {
            ""
        };
        let _ = writeln!(
            html,
            "<a href=\"{}\" class=\"{link_classes}\"{target}>{}</a>",
            escape(&item.href),
            escape(&item.label),
        );

        if !item.children.is_empty() {
            html.push_str("<ul class=\"list-reset\">\n");
            render_items(html, &item.children, depth + 1);
            html.push_str("</ul>\n");
        }

        html.push_str("</li>\n");
    }
}

/// Escape HTML special characters.
fn escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}
