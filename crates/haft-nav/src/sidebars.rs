//! Named sidebars loaded from `sidebars.yaml` or `sidebars.json`.
//!
//! The file maps sidebar ids to entry lists:
//!
//! ```yaml
//! docsSidebar:
//!   - getting-started
//!   - type: category
//!     label: Commands
//!     items:
//!       - commands/init
//! ```
//!
//! Document ids are unique within one sidebar; the same document may appear
//! in two different sidebars.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use haft_config::SiteConfig;

use crate::entry::RawEntry;
use crate::error::ValidationError;
use crate::tree::NavTree;

/// Error loading sidebars.
#[derive(Debug, thiserror::Error)]
pub enum SidebarsError {
    /// I/O error reading the sidebars file.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// File extension is neither YAML nor JSON.
    #[error("Unsupported sidebars file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    /// A sidebar failed validation.
    #[error("Invalid sidebar {sidebar}: {source}")]
    Invalid {
        sidebar: String,
        #[source]
        source: ValidationError,
    },
}

/// Validated sidebars keyed by id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sidebars {
    trees: BTreeMap<String, NavTree>,
}

impl Sidebars {
    /// Build every sidebar, stopping at the first invalid one (in id order).
    ///
    /// # Errors
    ///
    /// Returns `SidebarsError::Invalid` naming the sidebar and the validation error.
    pub fn from_entries(
        entries: BTreeMap<String, Vec<RawEntry>>,
        config: &SiteConfig,
    ) -> Result<Self, SidebarsError> {
        let trees = entries
            .into_iter()
            .map(|(sidebar, entries)| match NavTree::build(&entries, config) {
                Ok(tree) => Ok((sidebar, tree)),
                Err(source) => Err(SidebarsError::Invalid { sidebar, source }),
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { trees })
    }

    /// Parse and build sidebars from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or a sidebar is invalid.
    pub fn from_yaml(content: &str, config: &SiteConfig) -> Result<Self, SidebarsError> {
        let entries = serde_yaml::from_str(content)?;
        Self::from_entries(entries, config)
    }

    /// Parse and build sidebars from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a sidebar is invalid.
    pub fn from_json(content: &str, config: &SiteConfig) -> Result<Self, SidebarsError> {
        let entries = serde_json::from_str(content)?;
        Self::from_entries(entries, config)
    }

    /// Load sidebars from a `.yaml`, `.yml` or `.json` file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, has an unknown
    /// extension, or a sidebar is invalid.
    pub fn from_file(path: &Path, config: &SiteConfig) -> Result<Self, SidebarsError> {
        let extension = path.extension().and_then(|ext| ext.to_str());
        let is_json = match extension {
            Some("yaml" | "yml") => false,
            Some("json") => true,
            _ => return Err(SidebarsError::UnsupportedFormat(path.to_path_buf())),
        };

        let content = std::fs::read_to_string(path).map_err(|source| SidebarsError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let sidebars = if is_json {
            Self::from_json(&content, config)?
        } else {
            Self::from_yaml(&content, config)?
        };
        tracing::debug!(path = %path.display(), sidebars = sidebars.len(), "Loaded sidebars");
        Ok(sidebars)
    }

    /// Sidebar by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&NavTree> {
        self.trees.get(id)
    }

    /// Sidebars in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &NavTree)> {
        self.trees.iter().map(|(id, tree)| (id.as_str(), tree))
    }

    /// First sidebar (in id order) that references the document.
    #[must_use]
    pub fn sidebar_of(&self, doc_id: &str) -> Option<(&str, &NavTree)> {
        self.iter().find(|(_, tree)| tree.contains(doc_id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }
}
