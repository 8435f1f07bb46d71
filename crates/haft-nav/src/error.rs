//! Navigation validation errors.

use std::fmt;

/// Malformed sidebar input, located by a breadcrumb path of labels.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub struct ValidationError {
    /// Labels from the top of the tree down to the offending node.
    pub path: Vec<String>,
    /// What is wrong.
    pub kind: ValidationErrorKind,
}

/// Kind of [`ValidationError`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationErrorKind {
    #[error("category has no items")]
    EmptyCategory,
    #[error("document {id:?} appears more than once")]
    DuplicateDoc { id: String },
    #[error("landing document {id:?} is also listed in the category items")]
    LandingDocInItems { id: String },
    #[error("category link must be {{type: doc, id}}")]
    InvalidCategoryLink,
    #[error("entry {index}: {reason}")]
    UnrecognizedEntry { index: usize, reason: String },
    #[error("label cannot be empty")]
    EmptyLabel,
    #[error("document id cannot be empty")]
    EmptyDocId,
    #[error("href {href:?} must be an absolute http:// or https:// URL")]
    InvalidHref { href: String },
}

impl ValidationError {
    /// Breadcrumb path joined with ` > `, e.g. `Commands > Generate`.
    #[must_use]
    pub fn path_display(&self) -> String {
        self.path.join(" > ")
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}: {}", self.path_display(), self.kind)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_path() {
        let err = ValidationError {
            path: vec!["Commands".to_owned(), "Generate".to_owned()],
            kind: ValidationErrorKind::EmptyCategory,
        };

        assert_eq!(err.to_string(), "Commands > Generate: category has no items");
    }

    #[test]
    fn test_display_at_top_level() {
        let err = ValidationError {
            path: Vec::new(),
            kind: ValidationErrorKind::DuplicateDoc {
                id: "installation".to_owned(),
            },
        };

        assert_eq!(
            err.to_string(),
            "document \"installation\" appears more than once"
        );
    }
}
