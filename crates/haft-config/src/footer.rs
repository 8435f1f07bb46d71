//! Page footer configuration.

use serde::{Deserialize, Serialize};

use crate::raw::{RawFooterColumn, RawFooterConfig, RawFooterLink};
use crate::{ConfigError, require_http_url, require_non_empty};

/// Footer color style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterStyle {
    Dark,
    #[default]
    Light,
}

/// Footer link, classified by target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FooterLink {
    /// Route inside the site, checked against known document routes.
    Internal { label: String, to: String },
    /// Absolute external URL.
    External { label: String, href: String },
}

impl FooterLink {
    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Internal { label, .. } | Self::External { label, .. } => label,
        }
    }
}

/// Footer link column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FooterColumn {
    /// Column heading.
    pub title: String,
    /// Links in display order.
    pub items: Vec<FooterLink>,
}

/// Validated footer configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FooterConfig {
    /// Footer color style.
    pub style: FooterStyle,
    /// Link columns in display order.
    pub links: Vec<FooterColumn>,
    /// Copyright line.
    pub copyright: Option<String>,
}

impl FooterConfig {
    /// Internal routes referenced by the footer, in display order.
    pub fn internal_routes(&self) -> impl Iterator<Item = &str> {
        self.links
            .iter()
            .flat_map(|column| &column.items)
            .filter_map(|link| match link {
                FooterLink::Internal { to, .. } => Some(to.as_str()),
                FooterLink::External { .. } => None,
            })
    }

    pub(crate) fn from_raw(raw: RawFooterConfig) -> Result<Self, ConfigError> {
        let links = raw
            .links
            .into_iter()
            .enumerate()
            .map(|(i, column)| column_from_raw(column, i))
            .collect::<Result<_, _>>()?;

        Ok(Self {
            style: raw.style,
            links,
            copyright: raw.copyright,
        })
    }
}

fn column_from_raw(raw: RawFooterColumn, index: usize) -> Result<FooterColumn, ConfigError> {
    let field = format!("footer.links[{index}]");
    require_non_empty(&raw.title, &format!("{field}.title"))?;

    let items = raw
        .items
        .into_iter()
        .enumerate()
        .map(|(j, link)| link_from_raw(link, &format!("{field}.items[{j}]")))
        .collect::<Result<_, _>>()?;

    Ok(FooterColumn {
        title: raw.title,
        items,
    })
}

fn link_from_raw(raw: RawFooterLink, field: &str) -> Result<FooterLink, ConfigError> {
    require_non_empty(&raw.label, &format!("{field}.label"))?;

    match (raw.to, raw.href) {
        (Some(to), None) => {
            if !to.starts_with('/') {
                return Err(ConfigError::invalid(
                    format!("{field}.to"),
                    "must start with /",
                ));
            }
            Ok(FooterLink::Internal {
                label: raw.label,
                to,
            })
        }
        (None, Some(href)) => {
            require_http_url(&href, &format!("{field}.href"))?;
            Ok(FooterLink::External {
                label: raw.label,
                href,
            })
        }
        (Some(_), Some(_)) => Err(ConfigError::invalid(
            field,
            "set either `to` or `href`, not both",
        )),
        (None, None) => Err(ConfigError::invalid(field, "requires `to` or `href`")),
    }
}
