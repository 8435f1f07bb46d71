//! Validated navigation tree.
//!
//! [`NavTree::build`] classifies raw sidebar entries into [`NavNode`]s in a
//! single depth-first pass and stops at the first violation in document order.
//! The resulting tree is immutable; [`NavTree::flatten`] and [`NavTree::walk`]
//! traverse it in pre-order, which is both the rendered order and the linear
//! reading order used for previous/next links.

use std::collections::HashSet;
use std::slice;

use haft_config::SiteConfig;
use serde::{Deserialize, Serialize};

use crate::entry::{RawCategoryLink, RawEntry, RawObject};
use crate::error::{ValidationError, ValidationErrorKind};
use crate::node::{Category, DocRef, ExternalLink, NavNode};

/// Ordered, validated navigation tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NavTree {
    items: Vec<NavNode>,
}

/// Neighbours of a document in reading order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager<'a> {
    /// Document before the current one.
    pub previous: Option<&'a DocRef>,
    /// Document after the current one.
    pub next: Option<&'a DocRef>,
}

impl NavTree {
    /// Build a tree from raw entries.
    ///
    /// Categories without an explicit `collapsed` take
    /// `docs.sidebar_collapsed` from `config`.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] in document order: an empty
    /// category, a duplicate document id, a landing document repeated in its
    /// category items, an empty label or id, a non-absolute href, or an entry
    /// whose shape is not recognized.
    pub fn build(entries: &[RawEntry], config: &SiteConfig) -> Result<Self, ValidationError> {
        let mut builder = TreeBuilder {
            default_collapsed: config.docs().sidebar_collapsed,
            path: Vec::new(),
            seen: HashSet::new(),
        };
        let items = builder.build_items(entries)?;
        let tree = Self { items };

        tracing::debug!(
            entries = entries.len(),
            docs = builder.seen.len(),
            "Built navigation tree"
        );
        Ok(tree)
    }

    /// Top-level nodes in display order.
    #[must_use]
    pub fn items(&self) -> &[NavNode] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Every document reference, depth-first and left to right.
    ///
    /// A category's landing document comes before its items. The iterator is
    /// lazy; calling `flatten` again restarts from the beginning.
    #[must_use]
    pub fn flatten(&self) -> Docs<'_> {
        Docs {
            stack: vec![self.items.iter()],
        }
    }

    /// Every node with its depth (0 for top level), in pre-order.
    #[must_use]
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![self.items.iter()],
        }
    }

    /// Number of document references, landing documents included.
    #[must_use]
    pub fn doc_count(&self) -> usize {
        self.flatten().count()
    }

    /// Whether the tree references the given document.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.flatten().any(|doc| doc.id == id)
    }

    /// First document in reading order.
    #[must_use]
    pub fn first_doc(&self) -> Option<&DocRef> {
        self.flatten().next()
    }

    /// Labels of the categories enclosing a document, outermost first.
    ///
    /// For a category's landing document the path ends with that category.
    /// Returns `None` when the document is not in the tree.
    #[must_use]
    pub fn find_path(&self, id: &str) -> Option<Vec<&str>> {
        let mut path = Vec::new();
        find_in(&self.items, id, &mut path).then_some(path)
    }

    /// Previous and next documents around `id` in reading order.
    ///
    /// Returns `None` when the document is not in the tree.
    #[must_use]
    pub fn pager(&self, id: &str) -> Option<Pager<'_>> {
        let mut docs = self.flatten();
        let mut previous = None;
        while let Some(doc) = docs.next() {
            if doc.id == id {
                return Some(Pager {
                    previous,
                    next: docs.next(),
                });
            }
            previous = Some(doc);
        }
        None
    }
}

fn find_in<'a>(nodes: &'a [NavNode], id: &str, path: &mut Vec<&'a str>) -> bool {
    for node in nodes {
        match node {
            NavNode::Doc(doc) if doc.id == id => return true,
            NavNode::Category(category) => {
                path.push(&category.label);
                let is_landing = category.landing_doc.as_ref().is_some_and(|doc| doc.id == id);
                if is_landing || find_in(&category.items, id, path) {
                    return true;
                }
                path.pop();
            }
            NavNode::Doc(_) | NavNode::Link(_) => {}
        }
    }
    false
}

/// Lazy pre-order iterator over document references. See [`NavTree::flatten`].
#[derive(Clone, Debug)]
pub struct Docs<'a> {
    stack: Vec<slice::Iter<'a, NavNode>>,
}

impl<'a> Iterator for Docs<'a> {
    type Item = &'a DocRef;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let level = self.stack.last_mut()?;
            match level.next() {
                None => {
                    self.stack.pop();
                }
                Some(NavNode::Doc(doc)) => return Some(doc),
                Some(NavNode::Category(category)) => {
                    self.stack.push(category.items.iter());
                    if let Some(landing) = &category.landing_doc {
                        return Some(landing);
                    }
                }
                Some(NavNode::Link(_)) => {}
            }
        }
    }
}

/// Lazy pre-order iterator over `(depth, node)` pairs. See [`NavTree::walk`].
#[derive(Clone, Debug)]
pub struct Walk<'a> {
    stack: Vec<slice::Iter<'a, NavNode>>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a NavNode);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let depth = self.stack.len().checked_sub(1)?;
            let level = self.stack.last_mut()?;
            match level.next() {
                None => {
                    self.stack.pop();
                }
                Some(node) => {
                    if let NavNode::Category(category) = node {
                        self.stack.push(category.items.iter());
                    }
                    return Some((depth, node));
                }
            }
        }
    }
}

/// Single-pass classifier and validator.
struct TreeBuilder {
    default_collapsed: bool,
    /// Labels of the categories currently being built.
    path: Vec<String>,
    /// Document ids registered so far.
    seen: HashSet<String>,
}

impl TreeBuilder {
    fn error(&self, kind: ValidationErrorKind) -> ValidationError {
        ValidationError {
            path: self.path.clone(),
            kind,
        }
    }

    /// Error located at a child of the current path.
    fn error_at(&self, label: &str, kind: ValidationErrorKind) -> ValidationError {
        let mut path = self.path.clone();
        path.push(label.to_owned());
        ValidationError { path, kind }
    }

    fn build_items(&mut self, entries: &[RawEntry]) -> Result<Vec<NavNode>, ValidationError> {
        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| self.build_entry(index, entry))
            .collect()
    }

    fn build_entry(&mut self, index: usize, entry: &RawEntry) -> Result<NavNode, ValidationError> {
        let obj = match entry {
            RawEntry::Doc(id) => return self.register_doc(id, None).map(NavNode::Doc),
            RawEntry::Object(obj) => obj,
            RawEntry::Other(value) => return Err(self.malformed(index, value)),
        };

        match obj.kind.as_deref() {
            Some("category") => self.build_category(obj).map(NavNode::Category),
            Some("doc") => {
                let id = obj.id.as_deref().ok_or_else(|| {
                    self.error(ValidationErrorKind::UnrecognizedEntry {
                        index,
                        reason: "doc entry requires an id".to_owned(),
                    })
                })?;
                self.register_doc(id, obj.label.clone()).map(NavNode::Doc)
            }
            Some("link") => self.build_link(index, obj).map(NavNode::Link),
            None if obj.href.is_some() => self.build_link(index, obj).map(NavNode::Link),
            Some(other) => Err(self.error(ValidationErrorKind::UnrecognizedEntry {
                index,
                reason: format!("unknown entry type {other:?}"),
            })),
            None => Err(self.error(ValidationErrorKind::UnrecognizedEntry {
                index,
                reason: "expected a document id, a category or an object with href".to_owned(),
            })),
        }
    }

    /// Error for an entry that is neither a document id nor a valid entry object.
    ///
    /// Objects are located at their own label when they carry one, and report
    /// the field that failed to parse.
    fn malformed(&self, index: usize, value: &serde_json::Value) -> ValidationError {
        let serde_json::Value::Object(map) = value else {
            return self.error(ValidationErrorKind::UnrecognizedEntry {
                index,
                reason: format!("expected a document id or an entry object, got {value}"),
            });
        };

        let reason = match RawObject::deserialize(value) {
            Err(err) => err.to_string(),
            Ok(_) => "malformed entry object".to_owned(),
        };
        let kind = ValidationErrorKind::UnrecognizedEntry { index, reason };
        match map.get("label").and_then(serde_json::Value::as_str) {
            Some(label) if !label.is_empty() => self.error_at(label, kind),
            _ => self.error(kind),
        }
    }

    fn register_doc(&mut self, id: &str, label: Option<String>) -> Result<DocRef, ValidationError> {
        if id.is_empty() {
            return Err(self.error(ValidationErrorKind::EmptyDocId));
        }
        if !self.seen.insert(id.to_owned()) {
            return Err(self.error(ValidationErrorKind::DuplicateDoc { id: id.to_owned() }));
        }
        Ok(DocRef {
            id: id.to_owned(),
            label,
        })
    }

    fn build_category(&mut self, obj: &RawObject) -> Result<Category, ValidationError> {
        let label = obj.label.as_deref().unwrap_or_default();
        if label.is_empty() {
            return Err(self.error(ValidationErrorKind::EmptyLabel));
        }

        self.path.push(label.to_owned());
        let entries = obj.items.as_deref().unwrap_or_default();
        if entries.is_empty() {
            return Err(self.error(ValidationErrorKind::EmptyCategory));
        }

        let landing_doc = match &obj.link {
            Some(link) => Some(self.build_landing_doc(link, entries)?),
            None => None,
        };
        let items = self.build_items(entries)?;
        self.path.pop();

        Ok(Category {
            label: label.to_owned(),
            collapsed: obj.collapsed.unwrap_or(self.default_collapsed),
            items,
            landing_doc,
        })
    }

    fn build_landing_doc(
        &mut self,
        link: &RawCategoryLink,
        entries: &[RawEntry],
    ) -> Result<DocRef, ValidationError> {
        let id = match (link.kind.as_deref(), link.id.as_deref()) {
            (Some("doc"), Some(id)) => id,
            _ => {
                return Err(self.error(ValidationErrorKind::InvalidCategoryLink));
            }
        };
        if entries.iter().any(|entry| entry.doc_id() == Some(id)) {
            return Err(self.error(ValidationErrorKind::LandingDocInItems { id: id.to_owned() }));
        }
        self.register_doc(id, None)
    }

    fn build_link(&self, index: usize, obj: &RawObject) -> Result<ExternalLink, ValidationError> {
        let href = obj.href.as_deref().ok_or_else(|| {
            self.error(ValidationErrorKind::UnrecognizedEntry {
                index,
                reason: "link entry requires an href".to_owned(),
            })
        })?;
        let label = obj.label.as_deref().unwrap_or_default();
        if label.is_empty() {
            return Err(self.error(ValidationErrorKind::EmptyLabel));
        }
        if !href.starts_with("http://") && !href.starts_with("https://") {
            return Err(self.error_at(
                label,
                ValidationErrorKind::InvalidHref {
                    href: href.to_owned(),
                },
            ));
        }
        Ok(ExternalLink {
            label: label.to_owned(),
            href: href.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use haft_config::{RawDocsConfig, RawSiteConfig};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    static_assertions::assert_impl_all!(super::NavTree: Send, Sync);

    fn config() -> SiteConfig {
        SiteConfig::load(RawSiteConfig {
            title: Some("Haft".to_owned()),
            base_url: Some("/haft/".to_owned()),
            ..RawSiteConfig::default()
        })
        .unwrap()
    }

    fn build(entries: &[RawEntry]) -> Result<NavTree, ValidationError> {
        NavTree::build(entries, &config())
    }

    fn ids(tree: &NavTree) -> Vec<&str> {
        tree.flatten().map(|doc| doc.id.as_str()).collect()
    }

    /// The sidebar of the Haft documentation site.
    fn haft_sidebar() -> Vec<RawEntry> {
        vec![
            "getting-started".into(),
            "installation".into(),
            "why-haft".into(),
            RawEntry::category(
                "Commands",
                vec![
                    "commands/init".into(),
                    "commands/generate".into(),
                    "commands/add".into(),
                    "commands/remove".into(),
                ],
            )
            .collapsed(false),
            RawEntry::category(
                "Guides",
                vec![
                    "guides/wizard-navigation".into(),
                    "guides/dependencies".into(),
                    "guides/project-structure".into(),
                ],
            )
            .collapsed(false),
            RawEntry::category(
                "Reference",
                vec!["reference/configuration".into(), "reference/templates".into()],
            )
            .collapsed(true),
            "contributing".into(),
            "roadmap".into(),
        ]
    }

    #[test]
    fn test_flatten_doc_then_category() {
        let tree = build(&[
            "a".into(),
            RawEntry::category("Cmds", vec!["b".into(), "c".into()]),
        ])
        .unwrap();

        assert_eq!(ids(&tree), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_category_fails_with_path() {
        let err = build(&[RawEntry::category("Empty", Vec::new())]).unwrap_err();

        assert_eq!(err.kind, ValidationErrorKind::EmptyCategory);
        assert_eq!(err.path_display(), "Empty");
    }

    #[test]
    fn test_nested_empty_category_fails_with_full_path() {
        let err = build(&[
            "a".into(),
            RawEntry::category(
                "Commands",
                vec!["b".into(), RawEntry::category("Generate", Vec::new())],
            ),
        ])
        .unwrap_err();

        assert_eq!(err.kind, ValidationErrorKind::EmptyCategory);
        assert_eq!(err.path_display(), "Commands > Generate");
    }

    #[test]
    fn test_category_without_items_field_is_empty() {
        let entry = RawEntry::Object(RawObject {
            kind: Some("category".to_owned()),
            label: Some("Missing".to_owned()),
            ..RawObject::default()
        });

        let err = build(&[entry]).unwrap_err();

        assert_eq!(err.kind, ValidationErrorKind::EmptyCategory);
    }

    #[test]
    fn test_duplicate_doc_across_categories_fails() {
        let err = build(&["a".into(), RawEntry::category("X", vec!["a".into()])]).unwrap_err();

        assert_eq!(
            err.kind,
            ValidationErrorKind::DuplicateDoc { id: "a".to_owned() }
        );
        assert_eq!(err.path, vec!["X".to_owned()]);
        assert!(err.to_string().contains("\"a\""));
    }

    #[test]
    fn test_duplicate_doc_in_sibling_categories_fails() {
        let err = build(&[
            RawEntry::category("One", vec!["shared".into()]),
            RawEntry::category("Two", vec!["other".into(), "shared".into()]),
        ])
        .unwrap_err();

        assert_eq!(err.path_display(), "Two");
        assert!(matches!(err.kind, ValidationErrorKind::DuplicateDoc { .. }));
    }

    #[test]
    fn test_first_violation_in_document_order_wins() {
        let err = build(&[
            RawEntry::category("First", Vec::new()),
            "a".into(),
            "a".into(),
        ])
        .unwrap_err();

        assert_eq!(err.kind, ValidationErrorKind::EmptyCategory);
        assert_eq!(err.path_display(), "First");
    }

    #[test]
    fn test_build_is_idempotent() {
        let entries = haft_sidebar();

        let first = build(&entries).unwrap();
        let second = build(&entries).unwrap();

        assert_eq!(first, second);
        assert_eq!(ids(&first), ids(&second));
    }

    #[test]
    fn test_flatten_counts_every_doc_in_order() {
        let tree = build(&haft_sidebar()).unwrap();

        assert_eq!(tree.doc_count(), 14);
        assert_eq!(
            ids(&tree),
            vec![
                "getting-started",
                "installation",
                "why-haft",
                "commands/init",
                "commands/generate",
                "commands/add",
                "commands/remove",
                "guides/wizard-navigation",
                "guides/dependencies",
                "guides/project-structure",
                "reference/configuration",
                "reference/templates",
                "contributing",
                "roadmap",
            ]
        );
    }

    #[test]
    fn test_flatten_is_restartable() {
        let tree = build(&haft_sidebar()).unwrap();

        let mut first_pass = tree.flatten();
        first_pass.next();
        first_pass.next();

        assert_eq!(tree.flatten().next().unwrap().id, "getting-started");
        assert_eq!(first_pass.next().unwrap().id, "why-haft");
    }

    #[test]
    fn test_flatten_skips_links_and_includes_landing_docs() {
        let tree = build(&[
            RawEntry::category("Commands", vec!["commands/init".into()])
                .with_landing_doc("commands/index"),
            RawEntry::link("GitHub", "https://github.com/KashifKhn/haft"),
            "roadmap".into(),
        ])
        .unwrap();

        assert_eq!(ids(&tree), vec!["commands/index", "commands/init", "roadmap"]);
    }

    #[test]
    fn test_collapsed_uses_config_default() {
        let raw = RawSiteConfig {
            title: Some("Haft".to_owned()),
            base_url: Some("/".to_owned()),
            docs: RawDocsConfig {
                sidebar_collapsed: Some(false),
                ..RawDocsConfig::default()
            },
            ..RawSiteConfig::default()
        };
        let expanded = SiteConfig::load(raw).unwrap();
        let entries = vec![
            RawEntry::category("Implicit", vec!["a".into()]),
            RawEntry::category("Explicit", vec!["b".into()]).collapsed(true),
        ];

        let tree = NavTree::build(&entries, &expanded).unwrap();
        let default_tree = NavTree::build(&entries, &config()).unwrap();

        let collapsed = |tree: &NavTree| -> Vec<bool> {
            tree.items()
                .iter()
                .filter_map(|node| match node {
                    NavNode::Category(c) => Some(c.collapsed),
                    _ => None,
                })
                .collect()
        };
        assert_eq!(collapsed(&tree), vec![false, true]);
        assert_eq!(collapsed(&default_tree), vec![true, true]);
    }

    #[test]
    fn test_landing_doc_in_items_fails() {
        let err = build(&[RawEntry::category(
            "Commands",
            vec!["commands/init".into(), "commands/add".into()],
        )
        .with_landing_doc("commands/init")])
        .unwrap_err();

        assert_eq!(
            err.kind,
            ValidationErrorKind::LandingDocInItems {
                id: "commands/init".to_owned()
            }
        );
        assert_eq!(err.path_display(), "Commands");
    }

    #[test]
    fn test_landing_doc_duplicated_elsewhere_fails() {
        let err = build(&[
            "overview".into(),
            RawEntry::category("Guides", vec!["guides/a".into()]).with_landing_doc("overview"),
        ])
        .unwrap_err();

        assert_eq!(
            err.kind,
            ValidationErrorKind::DuplicateDoc {
                id: "overview".to_owned()
            }
        );
    }

    #[test]
    fn test_unsupported_category_link_fails() {
        let entry = RawEntry::Object(RawObject {
            kind: Some("category".to_owned()),
            label: Some("Guides".to_owned()),
            items: Some(vec!["guides/a".into()]),
            link: Some(RawCategoryLink {
                kind: Some("generated-index".to_owned()),
                id: None,
            }),
            ..RawObject::default()
        });

        let err = build(&[entry]).unwrap_err();

        assert_eq!(err.kind, ValidationErrorKind::InvalidCategoryLink);
        assert_eq!(err.path_display(), "Guides");
    }

    #[test]
    fn test_long_form_doc_and_link() {
        let tree = build(&[
            RawEntry::Object(RawObject {
                kind: Some("doc".to_owned()),
                id: Some("installation".to_owned()),
                label: Some("Install".to_owned()),
                ..RawObject::default()
            }),
            RawEntry::Object(RawObject {
                kind: Some("link".to_owned()),
                label: Some("Issues".to_owned()),
                href: Some("https://github.com/KashifKhn/haft/issues".to_owned()),
                ..RawObject::default()
            }),
        ])
        .unwrap();

        assert_eq!(
            tree.items(),
            [
                NavNode::Doc(DocRef {
                    id: "installation".to_owned(),
                    label: Some("Install".to_owned()),
                }),
                NavNode::Link(ExternalLink {
                    label: "Issues".to_owned(),
                    href: "https://github.com/KashifKhn/haft/issues".to_owned(),
                }),
            ]
        );
    }

    #[test]
    fn test_unrecognized_shapes_fail() {
        let unknown_type = RawEntry::Object(RawObject {
            kind: Some("html".to_owned()),
            ..RawObject::default()
        });
        let shapeless = RawEntry::Object(RawObject {
            label: Some("Orphan".to_owned()),
            ..RawObject::default()
        });
        let doc_without_id = RawEntry::Object(RawObject {
            kind: Some("doc".to_owned()),
            ..RawObject::default()
        });

        for (entry, reason) in [
            (unknown_type, "unknown entry type"),
            (shapeless, "expected a document id"),
            (doc_without_id, "requires an id"),
        ] {
            let err = build(&[
                RawEntry::category("Reference", vec!["reference/a".into(), entry]),
            ])
            .unwrap_err();

            assert_eq!(err.path_display(), "Reference");
            match err.kind {
                ValidationErrorKind::UnrecognizedEntry { index, reason: got } => {
                    assert_eq!(index, 1);
                    assert!(got.contains(reason), "{got}");
                }
                other => panic!("Expected UnrecognizedEntry, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_non_entry_values_fail_with_path() {
        for value in [json!(404), json!(["commands/init"]), json!(null)] {
            let err = build(&[RawEntry::category(
                "Commands",
                vec![RawEntry::category("Generate", vec![RawEntry::Other(value)])],
            )])
            .unwrap_err();

            assert_eq!(err.path_display(), "Commands > Generate");
            assert!(matches!(
                err.kind,
                ValidationErrorKind::UnrecognizedEntry { index: 0, .. }
            ));
        }
    }

    #[test]
    fn test_malformed_object_fails_at_its_label() {
        let yaml = r"
- intro
- type: category
  label: Commands
  items: commands/init
- type: category
  label: Reference
  itmes:
    - reference/templates
";
        let entries: Vec<RawEntry> = serde_yaml::from_str(yaml).unwrap();

        let err = build(&entries).unwrap_err();
        assert_eq!(err.path_display(), "Commands");
        let ValidationErrorKind::UnrecognizedEntry { index, reason } = &err.kind else {
            panic!("Expected UnrecognizedEntry, got {:?}", err.kind);
        };
        assert_eq!(*index, 1);
        assert!(reason.contains("expected a sequence"), "{reason}");

        let err = build(&entries[2..]).unwrap_err();
        assert_eq!(err.path_display(), "Reference");
        let ValidationErrorKind::UnrecognizedEntry { index, reason } = &err.kind else {
            panic!("Expected UnrecognizedEntry, got {:?}", err.kind);
        };
        assert_eq!(*index, 0);
        assert!(reason.contains("unknown field `itmes`"), "{reason}");
    }

    #[test]
    fn test_relative_href_fails_with_link_label() {
        let err = build(&[RawEntry::category(
            "More",
            vec![RawEntry::link("Contributing", "/contributing")],
        )])
        .unwrap_err();

        assert_eq!(err.path_display(), "More > Contributing");
        assert!(matches!(err.kind, ValidationErrorKind::InvalidHref { .. }));
    }

    #[test]
    fn test_empty_labels_and_ids_fail() {
        let err = build(&[RawEntry::category("", vec!["a".into()])]).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::EmptyLabel);

        let err = build(&[RawEntry::link("", "https://github.com")]).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::EmptyLabel);

        let err = build(&["".into()]).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::EmptyDocId);
    }

    #[test]
    fn test_deep_nesting_has_no_cap() {
        let mut entry = RawEntry::category("Level 0", vec!["leaf".into()]);
        for depth in 1..64 {
            entry = RawEntry::category(format!("Level {depth}"), vec![entry]);
        }

        let tree = build(&[entry]).unwrap();

        assert_eq!(ids(&tree), vec!["leaf"]);
        assert_eq!(tree.find_path("leaf").unwrap().len(), 64);
        assert_eq!(tree.walk().map(|(depth, _)| depth).max(), Some(64));
    }

    #[test]
    fn test_find_path() {
        let tree = build(&[
            "getting-started".into(),
            RawEntry::category(
                "Commands",
                vec![
                    "commands/init".into(),
                    RawEntry::category("Generate", vec!["commands/generate/resource".into()])
                        .with_landing_doc("commands/generate"),
                ],
            ),
        ])
        .unwrap();

        assert_eq!(tree.find_path("getting-started"), Some(Vec::new()));
        assert_eq!(tree.find_path("commands/init"), Some(vec!["Commands"]));
        assert_eq!(
            tree.find_path("commands/generate/resource"),
            Some(vec!["Commands", "Generate"])
        );
        assert_eq!(
            tree.find_path("commands/generate"),
            Some(vec!["Commands", "Generate"])
        );
        assert_eq!(tree.find_path("missing"), None);
    }

    #[test]
    fn test_walk_yields_depths_in_pre_order() {
        let tree = build(&[
            "a".into(),
            RawEntry::category("Cmds", vec!["b".into(), RawEntry::link("Site", "https://x.io")]),
            "c".into(),
        ])
        .unwrap();

        let walked: Vec<(usize, &str)> = tree.walk().map(|(d, node)| (d, node.label())).collect();

        assert_eq!(
            walked,
            vec![(0, "a"), (0, "Cmds"), (1, "b"), (1, "Site"), (0, "c")]
        );
    }

    #[test]
    fn test_pager() {
        let tree = build(&haft_sidebar()).unwrap();

        let first = tree.pager("getting-started").unwrap();
        assert_eq!(first.previous, None);
        assert_eq!(first.next.unwrap().id, "installation");

        let middle = tree.pager("commands/init").unwrap();
        assert_eq!(middle.previous.unwrap().id, "why-haft");
        assert_eq!(middle.next.unwrap().id, "commands/generate");

        let last = tree.pager("roadmap").unwrap();
        assert_eq!(last.previous.unwrap().id, "contributing");
        assert_eq!(last.next, None);

        assert!(tree.pager("missing").is_none());
    }

    #[test]
    fn test_contains_and_first_doc() {
        let tree = build(&haft_sidebar()).unwrap();

        assert!(tree.contains("reference/templates"));
        assert!(!tree.contains("reference"));
        assert_eq!(tree.first_doc().unwrap().id, "getting-started");
        assert!(NavTree::default().first_doc().is_none());
    }

    #[test]
    fn test_tree_serializes_as_node_list() {
        let tree = build(&["a".into(), RawEntry::category("Cmds", vec!["b".into()])]).unwrap();

        let json = serde_json::to_value(&tree).unwrap();

        assert!(json.is_array());
        assert_eq!(json[0]["type"], "doc");
        assert_eq!(json[1]["type"], "category");
        assert_eq!(json[1]["items"][0]["id"], "b");
    }
}
