//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod locate;
pub(crate) mod tree;

use std::path::PathBuf;

use clap::Args;
use haft_config::SiteConfig;
use haft_nav::{Sidebars, Site};

pub(crate) use check::CheckArgs;
pub(crate) use locate::LocateArgs;
pub(crate) use tree::TreeArgs;

use crate::error::CliError;

/// Input files shared by every command.
#[derive(Args)]
pub(crate) struct SiteArgs {
    /// Path to configuration file (default: auto-discover haft-docs.toml).
    #[arg(short, long, env = "HAFT_DOCS_CONFIG")]
    config: Option<PathBuf>,

    /// Sidebars file (overrides docs.sidebar_path).
    #[arg(short, long)]
    sidebars: Option<PathBuf>,
}

impl SiteArgs {
    /// Load configuration, build sidebars and cross-check them.
    pub(crate) fn load(&self) -> Result<Site, CliError> {
        let config = SiteConfig::discover(self.config.as_deref())?;
        let sidebar_path = self
            .sidebars
            .clone()
            .unwrap_or_else(|| config.docs().sidebar_path.clone());

        tracing::info!(
            config = ?config.config_path(),
            sidebars = %sidebar_path.display(),
            "Loading site"
        );
        let sidebars = Sidebars::from_file(&sidebar_path, &config)?;
        Ok(Site::new(config, sidebars)?)
    }
}

/// Resolve the sidebar to use: the requested one, or the only one.
pub(crate) fn select_sidebar<'a>(
    site: &'a Site,
    requested: Option<&'a str>,
) -> Result<&'a str, CliError> {
    if let Some(id) = requested {
        return site
            .sidebars()
            .get(id)
            .map(|_| id)
            .ok_or_else(|| CliError::NotFound(format!("Sidebar {id:?} not found")));
    }

    let mut ids = site.sidebars().iter().map(|(id, _)| id);
    match (ids.next(), ids.next()) {
        (Some(id), None) => Ok(id),
        (None, _) => Err(CliError::NotFound("No sidebars defined".to_owned())),
        (Some(_), Some(_)) => Err(CliError::NotFound(
            "Several sidebars defined; pick one with --sidebar".to_owned(),
        )),
    }
}
