//! `haft-docs check` command implementation.

use clap::Args;
use haft_config::NavbarItem;

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    site: SiteArgs,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns the first configuration, sidebar or cross-reference error.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let site = self.site.load()?;
        let config = site.config();

        output.info(&format!(
            "Site: {} ({} locale(s), default {})",
            config.title(),
            config.locales().len(),
            config.default_locale()
        ));

        for (id, tree) in site.sidebars().iter() {
            output.info(&format!("Sidebar {id}: {} document(s)", tree.doc_count()));

            let linked = config.navbar().items.iter().any(|item| {
                matches!(item, NavbarItem::DocSidebar { sidebar_id, .. } if sidebar_id == id)
            });
            if !linked {
                output.warning(&format!("Sidebar {id} is not linked from the navbar"));
            }
        }

        output.success("Configuration and sidebars are valid");
        Ok(())
    }
}
