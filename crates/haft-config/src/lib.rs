//! Site configuration for the Haft documentation site.
//!
//! Parses `haft-docs.toml` with serde into a [`RawSiteConfig`] and validates it
//! once into an immutable [`SiteConfig`]. Config files are discovered in the
//! current directory and its parents when no explicit path is given.
//!
//! ## Environment Variable Expansion
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `url`
//! - `base_url`
//! - `docs.edit_url`

mod expand;
pub mod footer;
pub mod navbar;
mod raw;

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use footer::{FooterColumn, FooterConfig, FooterLink, FooterStyle};
pub use navbar::{NavbarConfig, NavbarItem, NavbarLogo, NavbarPosition};
pub use raw::{
    RawDocsConfig, RawFooterColumn, RawFooterConfig, RawFooterLink, RawNavbarConfig,
    RawSiteConfig,
};

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "haft-docs.toml";

/// Sidebars filename used when `docs.sidebar_path` is not set.
const DEFAULT_SIDEBAR_PATH: &str = "sidebars.yaml";

/// What to do when a link points at no known route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkPolicy {
    /// Fail the build.
    #[default]
    Throw,
    /// Log a warning and continue.
    Warn,
    /// Continue silently.
    Ignore,
}

/// Resolved documentation section settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocsConfig {
    /// URL segment documents are served under. Empty serves docs at the site root.
    pub route_base_path: String,
    /// Base URL for "edit this page" links.
    pub edit_url: Option<String>,
    /// Sidebars file (relative paths are resolved against the config directory).
    pub sidebar_path: PathBuf,
    /// Default collapse state for categories without an explicit `collapsed`.
    pub sidebar_collapsed: bool,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            route_base_path: "docs".to_owned(),
            edit_url: None,
            sidebar_path: PathBuf::from(DEFAULT_SIDEBAR_PATH),
            sidebar_collapsed: true,
        }
    }
}

/// Validated, immutable site configuration.
///
/// Built once with [`SiteConfig::load`] (or one of the file loaders) and passed
/// explicitly to everything that needs it.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    title: String,
    tagline: String,
    url: Option<String>,
    base_url: String,
    favicon: Option<String>,
    organization_name: Option<String>,
    project_name: Option<String>,
    locales: Vec<String>,
    default_locale: String,
    on_broken_links: LinkPolicy,
    on_broken_markdown_links: LinkPolicy,
    docs: DocsConfig,
    navbar: NavbarConfig,
    footer: FooterConfig,
    theme_options: BTreeMap<String, serde_json::Value>,
    config_path: Option<PathBuf>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// A field is missing or has an invalid value.
    #[error("Configuration error in {field}: {message}")]
    Validation {
        /// Config field path (e.g., "`base_url`").
        field: String,
        /// What is wrong with it.
        message: String,
    },
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`docs.edit_url`").
        field: String,
        /// Error message (e.g., "${`EDIT_URL`} not set").
        message: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the failing field, if the error is tied to one.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } | Self::EnvVar { field, .. } => Some(field.as_str()),
            _ => None,
        }
    }
}

/// Require a string field to be non-empty.
pub(crate) fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::invalid(field, "cannot be empty"));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
pub(crate) fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::invalid(
            field,
            "must start with http:// or https://",
        ));
    }
    Ok(())
}

/// Take a required, non-empty string field.
fn require_field(value: Option<String>, field: &str) -> Result<String, ConfigError> {
    let value = value.ok_or_else(|| ConfigError::invalid(field, "is required"))?;
    require_non_empty(&value, field)?;
    Ok(value)
}

impl SiteConfig {
    /// Validate a raw configuration record.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` naming the first failing field when:
    /// - `title` or `base_url` is missing or empty
    /// - `base_url` does not start and end with `/`
    /// - `locales` is empty or repeats a locale
    /// - `default_locale` is not one of `locales`
    /// - `url`, `docs.edit_url`, navbar or footer entries are malformed
    pub fn load(raw: RawSiteConfig) -> Result<Self, ConfigError> {
        let title = require_field(raw.title, "title")?;
        let base_url = require_field(raw.base_url, "base_url")?;
        if !base_url.starts_with('/') || !base_url.ends_with('/') {
            return Err(ConfigError::invalid(
                "base_url",
                format!("must start and end with / (got {base_url:?})"),
            ));
        }

        let url = match raw.url {
            Some(url) => {
                require_http_url(&url, "url")?;
                if url.ends_with('/') {
                    return Err(ConfigError::invalid("url", "must not end with /"));
                }
                Some(url)
            }
            None => None,
        };

        let (locales, default_locale) = resolve_locales(raw.locales, raw.default_locale)?;
        let docs = resolve_docs(raw.docs)?;

        let navbar = NavbarConfig {
            title: raw.navbar.title,
            logo: raw.navbar.logo,
            items: raw.navbar.items,
        };
        navbar.validate()?;
        let footer = FooterConfig::from_raw(raw.footer)?;

        Ok(Self {
            title,
            tagline: raw.tagline.unwrap_or_default(),
            url,
            base_url,
            favicon: raw.favicon,
            organization_name: raw.organization_name,
            project_name: raw.project_name,
            locales,
            default_locale,
            on_broken_links: raw.on_broken_links.unwrap_or(LinkPolicy::Throw),
            on_broken_markdown_links: raw.on_broken_markdown_links.unwrap_or(LinkPolicy::Warn),
            docs,
            navbar,
            footer,
            theme_options: raw.theme_options,
            config_path: None,
        })
    }

    /// Load configuration from an explicit file or by discovery.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `haft-docs.toml` in the current directory and its parents.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no file exists, or any error from
    /// [`SiteConfig::from_file`].
    pub fn discover(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        match config_path {
            Some(path) if !path.exists() => Err(ConfigError::NotFound(path.to_path_buf())),
            Some(path) => Self::from_file(path),
            None => {
                let found = discover_config()
                    .ok_or_else(|| ConfigError::NotFound(PathBuf::from(CONFIG_FILENAME)))?;
                Self::from_file(&found)
            }
        }
    }

    /// Load configuration from a specific TOML file.
    ///
    /// Environment variables are expanded before validation, and
    /// `docs.sidebar_path` is resolved against the file's directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, expanded or validated.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut raw: RawSiteConfig = toml::from_str(&content)?;
        expand_env_vars(&mut raw)?;

        let mut config = Self::load(raw)?;
        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.docs.sidebar_path = config_dir.join(&config.docs.sidebar_path);
        config.config_path = Some(path.to_path_buf());

        tracing::debug!(path = %path.display(), title = %config.title, "Loaded site configuration");
        Ok(config)
    }

    /// Read-only lookup into the theme options.
    ///
    /// Dotted keys (`colorMode.defaultMode`) descend into nested tables when no
    /// top-level key matches exactly. Unset keys return `None`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        if let Some(value) = self.theme_options.get(key) {
            return Some(value);
        }
        let mut parts = key.split('.');
        let first = self.theme_options.get(parts.next()?)?;
        parts.try_fold(first, |value, part| value.get(part))
    }

    /// Route of a document, e.g. `/haft/docs/commands/init`.
    #[must_use]
    pub fn doc_route(&self, doc_id: &str) -> String {
        if self.docs.route_base_path.is_empty() {
            format!("{}{doc_id}", self.base_url)
        } else {
            format!("{}{}/{doc_id}", self.base_url, self.docs.route_base_path)
        }
    }

    /// Absolute URL of a route, when the site origin is configured.
    #[must_use]
    pub fn absolute_url(&self, route: &str) -> Option<String> {
        self.url.as_ref().map(|origin| format!("{origin}{route}"))
    }

    /// "Edit this page" URL of a document, when `docs.edit_url` is configured.
    #[must_use]
    pub fn edit_url(&self, doc_id: &str) -> Option<String> {
        self.docs
            .edit_url
            .as_ref()
            .map(|base| format!("{}/{doc_id}.md", base.trim_end_matches('/')))
    }

    /// Site title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Site tagline (empty when unset).
    #[must_use]
    pub fn tagline(&self) -> &str {
        &self.tagline
    }

    /// Site origin.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Path prefix the site is served under.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Favicon path.
    #[must_use]
    pub fn favicon(&self) -> Option<&str> {
        self.favicon.as_deref()
    }

    /// Owner of the hosting repository.
    #[must_use]
    pub fn organization_name(&self) -> Option<&str> {
        self.organization_name.as_deref()
    }

    /// Name of the hosting repository.
    #[must_use]
    pub fn project_name(&self) -> Option<&str> {
        self.project_name.as_deref()
    }

    /// Locales in declared order.
    #[must_use]
    pub fn locales(&self) -> &[String] {
        &self.locales
    }

    /// Default locale, always one of [`SiteConfig::locales`].
    #[must_use]
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    #[must_use]
    pub fn on_broken_links(&self) -> LinkPolicy {
        self.on_broken_links
    }

    #[must_use]
    pub fn on_broken_markdown_links(&self) -> LinkPolicy {
        self.on_broken_markdown_links
    }

    /// Documentation section settings.
    #[must_use]
    pub fn docs(&self) -> &DocsConfig {
        &self.docs
    }

    #[must_use]
    pub fn navbar(&self) -> &NavbarConfig {
        &self.navbar
    }

    #[must_use]
    pub fn footer(&self) -> &FooterConfig {
        &self.footer
    }

    /// All theme options.
    #[must_use]
    pub fn theme_options(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.theme_options
    }

    /// Path to the config file, if loaded from one.
    #[must_use]
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}

/// Locales default to the default locale (or `en`), and the default locale to
/// the first declared locale.
fn resolve_locales(
    locales: Option<Vec<String>>,
    default_locale: Option<String>,
) -> Result<(Vec<String>, String), ConfigError> {
    let locales = match locales {
        Some(locales) => locales,
        None => vec![default_locale.clone().unwrap_or_else(|| "en".to_owned())],
    };
    if locales.is_empty() {
        return Err(ConfigError::invalid("locales", "cannot be empty"));
    }

    let mut seen = HashSet::new();
    for (i, locale) in locales.iter().enumerate() {
        require_non_empty(locale, &format!("locales[{i}]"))?;
        if !seen.insert(locale.as_str()) {
            return Err(ConfigError::invalid(
                "locales",
                format!("duplicate locale {locale:?}"),
            ));
        }
    }

    let default_locale = default_locale.unwrap_or_else(|| locales[0].clone());
    if !locales.contains(&default_locale) {
        return Err(ConfigError::invalid(
            "default_locale",
            format!("{default_locale:?} is not one of locales {locales:?}"),
        ));
    }

    Ok((locales, default_locale))
}

fn resolve_docs(raw: RawDocsConfig) -> Result<DocsConfig, ConfigError> {
    let defaults = DocsConfig::default();

    let route_base_path = raw.route_base_path.unwrap_or(defaults.route_base_path);
    if route_base_path.starts_with('/') || route_base_path.ends_with('/') {
        return Err(ConfigError::invalid(
            "docs.route_base_path",
            "must not start or end with /",
        ));
    }

    if let Some(edit_url) = &raw.edit_url {
        require_http_url(edit_url, "docs.edit_url")?;
    }

    Ok(DocsConfig {
        route_base_path,
        edit_url: raw.edit_url,
        sidebar_path: raw
            .sidebar_path
            .map_or(defaults.sidebar_path, PathBuf::from),
        sidebar_collapsed: raw.sidebar_collapsed.unwrap_or(defaults.sidebar_collapsed),
    })
}

/// Expand environment variable references in configuration strings.
fn expand_env_vars(raw: &mut RawSiteConfig) -> Result<(), ConfigError> {
    if let Some(url) = &raw.url {
        raw.url = Some(expand::expand_env(url, "url")?);
    }
    if let Some(base_url) = &raw.base_url {
        raw.base_url = Some(expand::expand_env(base_url, "base_url")?);
    }
    if let Some(edit_url) = &raw.docs.edit_url {
        raw.docs.edit_url = Some(expand::expand_env(edit_url, "docs.edit_url")?);
    }
    Ok(())
}

/// Search for config file in current directory and parents.
fn discover_config() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;
    loop {
        let candidate = current.join(CONFIG_FILENAME);
        if candidate.exists() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}
