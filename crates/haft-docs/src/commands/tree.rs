//! `haft-docs tree` command implementation.

use clap::Args;
use haft_nav::{NavNode, NavTree};

use super::{SiteArgs, select_sidebar};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the tree command.
#[derive(Args)]
pub(crate) struct TreeArgs {
    #[command(flatten)]
    site: SiteArgs,

    /// Sidebar to print (required when several are defined).
    #[arg(long)]
    sidebar: Option<String>,

    /// Print the tree as JSON.
    #[arg(long)]
    json: bool,
}

impl TreeArgs {
    /// Execute the tree command.
    ///
    /// # Errors
    ///
    /// Returns an error if the site fails to load or the sidebar is unknown.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let site = self.site.load()?;
        let id = select_sidebar(&site, self.sidebar.as_deref())?;
        let Some(tree) = site.sidebars().get(id) else {
            return Err(CliError::NotFound(format!("Sidebar {id:?} not found")));
        };

        if self.json {
            output.line(&serde_json::to_string_pretty(tree)?);
            return Ok(());
        }

        output.highlight(id);
        for line in render_tree(tree) {
            output.line(&line);
        }
        Ok(())
    }
}

/// Render a tree as indented lines, one per node.
fn render_tree(tree: &NavTree) -> Vec<String> {
    tree.walk()
        .map(|(depth, node)| {
            let indent = "  ".repeat(depth + 1);
            match node {
                NavNode::Doc(doc) => match &doc.label {
                    Some(label) => format!("{indent}{label} ({})", doc.id),
                    None => format!("{indent}{}", doc.id),
                },
                NavNode::Category(category) => {
                    let marker = if category.collapsed { "+" } else { "-" };
                    match &category.landing_doc {
                        Some(landing) => {
                            format!("{indent}{marker} {} -> {}", category.label, landing.id)
                        }
                        None => format!("{indent}{marker} {}", category.label),
                    }
                }
                NavNode::Link(link) => format!("{indent}{} <{}>", link.label, link.href),
            }
        })
        .collect()
}
