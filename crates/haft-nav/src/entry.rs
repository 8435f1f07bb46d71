//! Raw sidebar entries as authored in `sidebars.yaml`.
//!
//! An entry is either a bare document id or an object whose shape decides
//! what it becomes. Classification happens once, in
//! [`NavTree::build`](crate::NavTree::build).
//!
//! Deserialization never rejects an entry on shape alone: anything that is
//! neither a string nor a well-formed entry object is kept as
//! [`RawEntry::Other`] so the builder can report it with its breadcrumb path.

use serde::{Deserialize, Deserializer};

/// Unclassified sidebar entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RawEntry {
    /// Shorthand for a document reference.
    Doc(String),
    /// Category, long-form document or link.
    Object(RawObject),
    /// Any other value: a number, a list, or an object with unknown or
    /// mistyped fields.
    Other(serde_json::Value),
}

/// Object-shaped sidebar entry. Which fields matter depends on `type`/`href`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawObject {
    /// Entry type: `category`, `doc` or `link`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Document id (long-form `doc` entries).
    pub id: Option<String>,
    /// Display label.
    pub label: Option<String>,
    /// Category collapse state.
    pub collapsed: Option<bool>,
    /// Category children.
    pub items: Option<Vec<RawEntry>>,
    /// Category landing page.
    pub link: Option<RawCategoryLink>,
    /// External URL.
    pub href: Option<String>,
}

/// Raw category landing link, e.g. `{ type: doc, id: commands/index }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawCategoryLink {
    /// Link type; only `doc` is supported.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Landing document id.
    pub id: Option<String>,
}

impl RawEntry {
    /// Bare document reference.
    pub fn doc(id: impl Into<String>) -> Self {
        Self::Doc(id.into())
    }

    /// Category with the given children.
    pub fn category(label: impl Into<String>, items: Vec<RawEntry>) -> Self {
        Self::Object(RawObject {
            kind: Some("category".to_owned()),
            label: Some(label.into()),
            items: Some(items),
            ..RawObject::default()
        })
    }

    /// External link.
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self::Object(RawObject {
            label: Some(label.into()),
            href: Some(href.into()),
            ..RawObject::default()
        })
    }

    /// Sets the collapse state of a category entry. No-op for other shapes.
    #[must_use]
    pub fn collapsed(mut self, collapsed: bool) -> Self {
        if let Self::Object(obj) = &mut self {
            obj.collapsed = Some(collapsed);
        }
        self
    }

    /// Sets the landing document of a category entry. No-op for other shapes.
    #[must_use]
    pub fn with_landing_doc(mut self, id: impl Into<String>) -> Self {
        if let Self::Object(obj) = &mut self {
            obj.link = Some(RawCategoryLink {
                kind: Some("doc".to_owned()),
                id: Some(id.into()),
            });
        }
        self
    }

    /// Document id if this entry is a document reference in either form.
    pub(crate) fn doc_id(&self) -> Option<&str> {
        match self {
            Self::Doc(id) => Some(id),
            Self::Object(obj) if obj.kind.as_deref() == Some("doc") => obj.id.as_deref(),
            Self::Object(_) | Self::Other(_) => None,
        }
    }
}

impl<'de> Deserialize<'de> for RawEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::String(id) => Self::Doc(id),
            // Only maps are entry objects, never lists.
            serde_json::Value::Object(_) => match RawObject::deserialize(&value) {
                Ok(obj) => Self::Object(obj),
                Err(_) => Self::Other(value),
            },
            other => Self::Other(other),
        })
    }
}

impl From<&str> for RawEntry {
    fn from(id: &str) -> Self {
        Self::doc(id)
    }
}
