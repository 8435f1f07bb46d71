//! Raw configuration record as authored in `haft-docs.toml`.
//!
//! Every field is optional here; [`SiteConfig::load`](crate::SiteConfig::load)
//! decides what is required and reports the failing field.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::LinkPolicy;
use crate::footer::FooterStyle;
use crate::navbar::{NavbarItem, NavbarLogo};

/// Unvalidated site configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawSiteConfig {
    /// Site title.
    pub title: Option<String>,
    /// Short tagline shown under the title.
    pub tagline: Option<String>,
    /// Site origin, e.g. `https://example.github.io`.
    pub url: Option<String>,
    /// Path prefix the site is served under, e.g. `/haft/`.
    pub base_url: Option<String>,
    /// Favicon path relative to the static directory.
    pub favicon: Option<String>,
    /// Owner of the hosting repository.
    pub organization_name: Option<String>,
    /// Name of the hosting repository.
    pub project_name: Option<String>,
    /// Ordered list of locales.
    pub locales: Option<Vec<String>>,
    /// Locale used when none is requested.
    pub default_locale: Option<String>,
    /// Policy for links that point at no known route.
    pub on_broken_links: Option<LinkPolicy>,
    /// Policy for markdown links that point at no known document.
    pub on_broken_markdown_links: Option<LinkPolicy>,
    /// Documentation section settings.
    pub docs: RawDocsConfig,
    /// Top navigation bar.
    pub navbar: RawNavbarConfig,
    /// Page footer.
    pub footer: RawFooterConfig,
    /// Opaque theme options passed through to the renderer.
    pub theme_options: BTreeMap<String, serde_json::Value>,
}

/// Raw `[docs]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawDocsConfig {
    /// URL segment documents are served under (default `docs`).
    pub route_base_path: Option<String>,
    /// Base URL for "edit this page" links.
    pub edit_url: Option<String>,
    /// Sidebars file, relative to the config file (default `sidebars.yaml`).
    pub sidebar_path: Option<String>,
    /// Default collapse state for categories without an explicit `collapsed`.
    pub sidebar_collapsed: Option<bool>,
}

/// Raw `[navbar]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawNavbarConfig {
    /// Title shown next to the logo.
    pub title: Option<String>,
    /// Logo images.
    pub logo: Option<NavbarLogo>,
    /// Items in display order.
    pub items: Vec<NavbarItem>,
}

/// Raw `[footer]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawFooterConfig {
    /// Footer color style.
    pub style: FooterStyle,
    /// Link columns in display order.
    pub links: Vec<RawFooterColumn>,
    /// Copyright line.
    pub copyright: Option<String>,
}

/// Raw footer column.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawFooterColumn {
    /// Column heading.
    pub title: String,
    /// Links in display order.
    pub items: Vec<RawFooterLink>,
}

/// Raw footer link. Exactly one of `to` and `href` must be set.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawFooterLink {
    /// Link text.
    pub label: String,
    /// Site-internal route, e.g. `/docs/getting-started`.
    pub to: Option<String>,
    /// Absolute external URL.
    pub href: Option<String>,
}
