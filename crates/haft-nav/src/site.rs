//! Site aggregate: configuration plus sidebars, cross-checked.
//!
//! [`Site::new`] checks everything that spans both inputs: navbar items must
//! point at existing, non-empty sidebars, and internal footer links must
//! resolve to a document route (subject to `on_broken_links`).

use haft_config::{FooterLink, LinkPolicy, NavbarItem, SiteConfig};
use serde::Serialize;

use crate::node::DocRef;
use crate::sidebars::Sidebars;

/// Error raised while cross-checking configuration and sidebars.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Navbar item names a sidebar that does not exist.
    #[error("Navbar item {label:?} references unknown sidebar {sidebar_id:?}")]
    UnknownSidebar { label: String, sidebar_id: String },
    /// Navbar item names a sidebar without any document to link to.
    #[error("Navbar item {label:?} references sidebar {sidebar_id:?}, which has no documents")]
    EmptySidebar { label: String, sidebar_id: String },
    /// Footer link points at no document route.
    #[error("Broken link {label:?}: no document is served at {to}")]
    BrokenLink { label: String, to: String },
}

/// Link to a neighbouring page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageLink {
    /// Document id.
    pub id: String,
    /// Display label (document label or id).
    pub label: String,
    /// Route, e.g. `/haft/docs/installation`.
    pub route: String,
}

/// Everything a renderer needs to place one document in the site.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageContext {
    /// Sidebar the document was found in.
    pub sidebar: String,
    /// Route of the document.
    pub route: String,
    /// Absolute URL, when the site origin is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,
    /// "Edit this page" URL, when configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_url: Option<String>,
    /// Enclosing category labels, outermost first.
    pub breadcrumbs: Vec<String>,
    /// Previous document in reading order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<PageLink>,
    /// Next document in reading order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<PageLink>,
}

/// Immutable documentation site structure.
#[derive(Debug)]
pub struct Site {
    config: SiteConfig,
    sidebars: Sidebars,
}

impl Site {
    /// Combine configuration and sidebars.
    ///
    /// # Errors
    ///
    /// Returns `SiteError::UnknownSidebar` or `SiteError::EmptySidebar` for
    /// bad navbar items, and `SiteError::BrokenLink` for an unresolvable footer
    /// link when `on_broken_links` is `throw`.
    pub fn new(config: SiteConfig, sidebars: Sidebars) -> Result<Self, SiteError> {
        let site = Self { config, sidebars };
        site.check_navbar()?;
        site.check_footer()?;
        Ok(site)
    }

    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    #[must_use]
    pub fn sidebars(&self) -> &Sidebars {
        &self.sidebars
    }

    /// Route a navbar item links to: the first document of its sidebar, or its href.
    #[must_use]
    pub fn navbar_target(&self, item: &NavbarItem) -> Option<String> {
        match item {
            NavbarItem::DocSidebar { sidebar_id, .. } => {
                let first = self.sidebars.get(sidebar_id)?.first_doc()?;
                Some(self.config.doc_route(&first.id))
            }
            NavbarItem::Link { href, .. } => Some(href.clone()),
        }
    }

    /// Category labels enclosing a document in a sidebar.
    #[must_use]
    pub fn breadcrumbs(&self, sidebar: &str, doc_id: &str) -> Option<Vec<&str>> {
        self.sidebars.get(sidebar)?.find_path(doc_id)
    }

    /// Placement of a document.
    ///
    /// Looks in `sidebar` when given, otherwise in the first sidebar that
    /// contains the document. Returns `None` when the document is not found.
    #[must_use]
    pub fn page(&self, doc_id: &str, sidebar: Option<&str>) -> Option<PageContext> {
        let (sidebar, tree) = match sidebar {
            Some(id) => (id, self.sidebars.get(id)?),
            None => self.sidebars.sidebar_of(doc_id)?,
        };
        let breadcrumbs = tree.find_path(doc_id)?;
        let pager = tree.pager(doc_id)?;
        let route = self.config.doc_route(doc_id);

        Some(PageContext {
            sidebar: sidebar.to_owned(),
            permalink: self.config.absolute_url(&route),
            edit_url: self.config.edit_url(doc_id),
            route,
            breadcrumbs: breadcrumbs.into_iter().map(str::to_owned).collect(),
            previous: pager.previous.map(|doc| self.page_link(doc)),
            next: pager.next.map(|doc| self.page_link(doc)),
        })
    }

    fn page_link(&self, doc: &DocRef) -> PageLink {
        PageLink {
            id: doc.id.clone(),
            label: doc.label.clone().unwrap_or_else(|| doc.id.clone()),
            route: self.config.doc_route(&doc.id),
        }
    }

    fn check_navbar(&self) -> Result<(), SiteError> {
        for item in &self.config.navbar().items {
            let NavbarItem::DocSidebar {
                sidebar_id, label, ..
            } = item
            else {
                continue;
            };
            let Some(tree) = self.sidebars.get(sidebar_id) else {
                return Err(SiteError::UnknownSidebar {
                    label: label.clone(),
                    sidebar_id: sidebar_id.clone(),
                });
            };
            if tree.first_doc().is_none() {
                return Err(SiteError::EmptySidebar {
                    label: label.clone(),
                    sidebar_id: sidebar_id.clone(),
                });
            }
        }
        Ok(())
    }

    fn check_footer(&self) -> Result<(), SiteError> {
        let policy = self.config.on_broken_links();
        if policy == LinkPolicy::Ignore {
            return Ok(());
        }

        for column in &self.config.footer().links {
            for link in &column.items {
                let FooterLink::Internal { label, to } = link else {
                    continue;
                };
                if self.resolves(to) {
                    continue;
                }
                if policy == LinkPolicy::Throw {
                    return Err(SiteError::BrokenLink {
                        label: label.clone(),
                        to: to.clone(),
                    });
                }
                tracing::warn!(label = %label, to = %to, "Broken footer link");
            }
        }
        Ok(())
    }

    /// Whether a site-relative route (`/docs/installation`) is served.
    ///
    /// Routes are relative to `base_url`; the site root always resolves.
    fn resolves(&self, to: &str) -> bool {
        let relative = to.trim_start_matches('/');
        if relative.is_empty() {
            return true;
        }
        let route = format!("{}{relative}", self.config.base_url());
        let route = route.trim_end_matches('/');
        self.sidebars.iter().any(|(_, tree)| {
            tree.flatten()
                .any(|doc| self.config.doc_route(&doc.id) == route)
        })
    }
}
