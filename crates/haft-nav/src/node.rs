//! Classified navigation nodes.

use serde::Serialize;

/// Reference to an externally resolved document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DocRef {
    /// Opaque document id, e.g. `commands/init`.
    pub id: String,
    /// Label override from a long-form `doc` entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl DocRef {
    /// Document reference without a label override.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
        }
    }
}

/// Category grouping ordered child nodes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Category {
    /// Display label.
    pub label: String,
    /// Whether the category starts collapsed.
    pub collapsed: bool,
    /// Children in display order, never empty.
    pub items: Vec<NavNode>,
    /// Document shown when the category itself is activated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub landing_doc: Option<DocRef>,
}

/// Link to an absolute external URL.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExternalLink {
    /// Display label.
    pub label: String,
    /// Absolute URL.
    pub href: String,
}

/// Navigation tree node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NavNode {
    Doc(DocRef),
    Category(Category),
    Link(ExternalLink),
}

impl NavNode {
    /// Display label, falling back to the document id for unlabeled documents.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Doc(doc) => doc.label.as_deref().unwrap_or(&doc.id),
            Self::Category(category) => &category.label,
            Self::Link(link) => &link.label,
        }
    }
}
