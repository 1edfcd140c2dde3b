//! `docnav check` command implementation.

use std::path::PathBuf;

use clap::Args;
use docnav_config::{CliSettings, Config};
use docnav_site::SiteContext;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Site base URL (overrides config).
    #[arg(long)]
    base_url: Option<String>,

    /// Check as a production build (overrides config).
    #[arg(long)]
    production: bool,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or the menu
    /// has a defect.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            base_url: self.base_url,
            production: self.production.then_some(true),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        match &config.config_path {
            Some(path) => output.info(&format!("Configuration: {}", path.display())),
            None => output.info("Configuration: defaults (no docnav.toml found)"),
        }

        let ctx = SiteContext::from_config(&config)?;
        let site = ctx.site();
        output.info(&format!("Site: {}", site.name));
        if site.production {
            output.info("Build: production");
        }
        if !site.base_url.is_empty() {
            output.info(&format!("Base URL: {}", site.base_url));
        }
        if site.docsearch.is_some() {
            output.info("DocSearch: configured");
        } else {
            output.info("DocSearch: not configured");
        }

        let tree = ctx.tree();
        output.success(&format!(
            "Navigation OK: {} top-level entries, {} total",
            tree.len(),
            tree.walk().count()
        ));

        Ok(())
    }
}
