//! Navigation tree and sidebars for the Haft documentation site.
//!
//! This crate provides:
//! - [`NavTree`]: validated sidebar tree built from [`RawEntry`] lists
//! - [`Sidebars`]: named trees loaded from `sidebars.yaml`/`.json`
//! - [`Site`]: configuration and sidebars cross-checked for the renderer
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use haft_config::{RawSiteConfig, SiteConfig};
//! use haft_nav::{NavTree, RawEntry};
//!
//! let config = SiteConfig::load(RawSiteConfig {
//!     title: Some("Haft".to_owned()),
//!     base_url: Some("/haft/".to_owned()),
//!     ..RawSiteConfig::default()
//! })?;
//!
//! let tree = NavTree::build(
//!     &[
//!         RawEntry::doc("a"),
//!         RawEntry::category("Cmds", vec![RawEntry::doc("b"), RawEntry::doc("c")]),
//!     ],
//!     &config,
//! )?;
//!
//! let ids: Vec<_> = tree.flatten().map(|doc| doc.id.as_str()).collect();
//! assert_eq!(ids, ["a", "b", "c"]);
//! assert_eq!(tree.find_path("b"), Some(vec!["Cmds"]));
//! # Ok(())
//! # }
//! ```

mod entry;
mod error;
mod node;
mod sidebars;
mod site;
mod tree;

pub use entry::{RawCategoryLink, RawEntry, RawObject};
pub use error::{ValidationError, ValidationErrorKind};
pub use node::{Category, DocRef, ExternalLink, NavNode};
pub use sidebars::{Sidebars, SidebarsError};
pub use site::{PageContext, PageLink, Site, SiteError};
pub use tree::{Docs, NavTree, Pager, Walk};
