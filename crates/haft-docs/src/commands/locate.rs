//! `haft-docs locate` command implementation.

use clap::Args;

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the locate command.
#[derive(Args)]
pub(crate) struct LocateArgs {
    /// Document id, e.g. `commands/init`.
    doc_id: String,

    #[command(flatten)]
    site: SiteArgs,

    /// Sidebar to search (default: first sidebar containing the document).
    #[arg(long)]
    sidebar: Option<String>,

    /// Print the result as JSON.
    #[arg(long)]
    json: bool,
}

impl LocateArgs {
    /// Execute the locate command.
    ///
    /// # Errors
    ///
    /// Returns an error if the site fails to load or the document is not found.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let site = self.site.load()?;

        let page = site
            .page(&self.doc_id, self.sidebar.as_deref())
            .ok_or_else(|| CliError::NotFound(format!("Document {:?} not found", self.doc_id)))?;

        if self.json {
            output.line(&serde_json::to_string_pretty(&page)?);
            return Ok(());
        }

        let mut crumbs = vec![site.config().title()];
        crumbs.extend(page.breadcrumbs.iter().map(String::as_str));
        crumbs.push(&self.doc_id);

        output.highlight(&crumbs.join(" > "));
        output.line(&format!("Sidebar:  {}", page.sidebar));
        output.line(&format!("Route:    {}", page.route));
        if let Some(permalink) = &page.permalink {
            output.line(&format!("URL:      {permalink}"));
        }
        if let Some(edit_url) = &page.edit_url {
            output.detail(&format!("Edit:     {edit_url}"));
        }
        if let Some(previous) = &page.previous {
            output.line(&format!("Previous: {} ({})", previous.label, previous.route));
        }
        if let Some(next) = &page.next {
            output.line(&format!("Next:     {} ({})", next.label, next.route));
        }
        Ok(())
    }
}
