//! Top navigation bar configuration.

use serde::{Deserialize, Serialize};

use crate::{ConfigError, require_http_url, require_non_empty};

/// Horizontal placement of a navbar item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavbarPosition {
    #[default]
    Left,
    Right,
}

/// Navbar logo images.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavbarLogo {
    /// Alternative text.
    pub alt: String,
    /// Image for the light color mode.
    pub src: String,
    /// Image for the dark color mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src_dark: Option<String>,
}

/// Navbar item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NavbarItem {
    /// Link to the first document of a sidebar.
    DocSidebar {
        sidebar_id: String,
        label: String,
        #[serde(default)]
        position: NavbarPosition,
    },
    /// Link to an external URL.
    Link {
        href: String,
        label: String,
        #[serde(default)]
        position: NavbarPosition,
    },
}

impl NavbarItem {
    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::DocSidebar { label, .. } | Self::Link { label, .. } => label,
        }
    }

    /// Horizontal placement.
    #[must_use]
    pub fn position(&self) -> NavbarPosition {
        match self {
            Self::DocSidebar { position, .. } | Self::Link { position, .. } => *position,
        }
    }
}

/// Validated navbar configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavbarConfig {
    /// Title shown next to the logo.
    pub title: Option<String>,
    /// Logo images.
    pub logo: Option<NavbarLogo>,
    /// Items in display order.
    pub items: Vec<NavbarItem>,
}

impl NavbarConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for (i, item) in self.items.iter().enumerate() {
            let field = format!("navbar.items[{i}]");
            require_non_empty(item.label(), &format!("{field}.label"))?;
            match item {
                NavbarItem::DocSidebar { sidebar_id, .. } => {
                    require_non_empty(sidebar_id, &format!("{field}.sidebar_id"))?;
                }
                NavbarItem::Link { href, .. } => {
                    require_http_url(href, &format!("{field}.href"))?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        items: Vec<NavbarItem>,
    }

    #[test]
    fn test_parse_navbar_items() {
        let toml = r#"
[[items]]
type = "doc_sidebar"
sidebar_id = "docsSidebar"
label = "Docs"

[[items]]
type = "link"
href = "https://github.com/KashifKhn/haft"
label = "GitHub"
position = "right"
"#;
        let wrapper: Wrapper = toml::from_str(toml).unwrap();

        assert_eq!(wrapper.items.len(), 2);
        assert_eq!(wrapper.items[0].label(), "Docs");
        assert_eq!(wrapper.items[0].position(), NavbarPosition::Left);
        assert_eq!(wrapper.items[1].position(), NavbarPosition::Right);
    }

    #[test]
    fn test_validate_rejects_relative_href() {
        let navbar = NavbarConfig {
            items: vec![NavbarItem::Link {
                href: "/github".to_owned(),
                label: "GitHub".to_owned(),
                position: NavbarPosition::Right,
            }],
            ..NavbarConfig::default()
        };

        let err = navbar.validate().unwrap_err();

        assert!(err.to_string().contains("navbar.items[0].href"));
    }

    #[test]
    fn test_validate_rejects_empty_sidebar_id() {
        let navbar = NavbarConfig {
            items: vec![NavbarItem::DocSidebar {
                sidebar_id: String::new(),
                label: "Docs".to_owned(),
                position: NavbarPosition::Left,
            }],
            ..NavbarConfig::default()
        };

        let err = navbar.validate().unwrap_err();

        assert!(err.to_string().contains("sidebar_id"));
    }
}
