//! Evaluation of validated expressions against an item's labels.

use crate::validator::{Expr, Term};

/// The labels of one item, prepared for rule evaluation.
///
/// `blob` is the categories followed by the tags, joined with a single space
/// and lower-cased. Keyword terms test substrings of it, so a keyword that
/// contains a space can match across two adjacent labels.
#[derive(Debug, Clone)]
pub struct LabelSet<'a> {
    blob: String,
    categories: &'a [String],
    tags: &'a [String],
}

impl<'a> LabelSet<'a> {
    pub fn new(categories: &'a [String], tags: &'a [String]) -> Self {
        let blob = categories
            .iter()
            .chain(tags)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        Self {
            blob,
            categories,
            tags,
        }
    }

    pub fn blob(&self) -> &str {
        &self.blob
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.tags.is_empty()
    }

    /// Exact, case-sensitive membership in the raw categories or tags
    pub fn has_label(&self, label: &str) -> bool {
        self.has_category(label) || self.has_tag(label)
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl Expr {
    pub fn matches(&self, labels: &LabelSet<'_>) -> bool {
        match self {
            Expr::Term(term) => term.matches(labels),
            Expr::And(items) => items.iter().all(|e| e.matches(labels)),
            Expr::Or(items) => items.iter().any(|e| e.matches(labels)),
            Expr::Not(inner) => !inner.matches(labels),
        }
    }
}

impl Term {
    pub fn matches(&self, labels: &LabelSet<'_>) -> bool {
        match self {
            Term::Keyword(keyword) => labels.blob.contains(keyword.as_str()),
            Term::Tag(tag) => labels.has_tag(tag),
            Term::Category(category) => labels.has_category(category),
            Term::Label(label) => labels.has_label(label),
        }
    }
}
