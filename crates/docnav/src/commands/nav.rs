//! `docnav nav` command implementation.

use std::fmt::Write;
use std::path::PathBuf;

use clap::{Args, ValueEnum};
use docnav_config::Config;
use docnav_site::{CurrentPage, NavItem, Navigation, SiteContext, render_sidebar};

use crate::error::CliError;
use crate::output::Output;

/// Output format for the resolved navigation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    /// Indented tree with active markers.
    #[default]
    Text,
    /// JSON document.
    Json,
    /// HTML sidebar markup.
    Html,
}

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    /// Path of the page being rendered (e.g. /docs/models).
    #[arg(short, long)]
    page: String,

    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t)]
    format: Format,
}

impl NavArgs {
    /// Execute the nav command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded, the menu has
    /// a defect, or JSON serialization fails.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = Config::load(self.config.as_deref(), None)?;
        let ctx = SiteContext::from_config(&config)?;

        tracing::debug!(page = %self.page, format = ?self.format, "Resolving navigation");
        let navigation = ctx.navigation(&CurrentPage::new(self.page));
        let rendered = match self.format {
            Format::Text => render_text(&navigation),
            Format::Json => serde_json::to_string_pretty(&navigation)? + "\n",
            Format::Html => render_sidebar(&navigation),
        };

        output.result(&rendered);
        Ok(())
    }
}

/// Render navigation as an indented tree.
///
/// `*` marks the active page, `>` an active parent.
fn render_text(navigation: &Navigation) -> String {
    let mut text = String::new();
    render_text_items(&mut text, &navigation.items, 0);
    text
}

fn render_text_items(text: &mut String, items: &[NavItem], depth: usize) {
    for item in items {
        let marker = if item.is_active {
            '*'
        } else if item.is_active_parent {
            '>'
        } else {
            ' '
        };
        let indent = "  ".repeat(depth);
        let _ = writeln!(text, "{marker} {indent}{}  {}", item.label, item.href);
        render_text_items(text, &item.children, depth + 1);
    }
}
