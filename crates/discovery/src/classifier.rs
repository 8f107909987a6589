// discovery/src/classifier.rs
//! Category membership driven by a configurable rule table.

use std::collections::HashMap;

use rules::{LabelSet, Rule};
use tracing::debug;

use crate::config::DiscoveryConfig;
use crate::error::{DiscoveryError, Result};
use crate::models::ContentItem;

/// What a filter returns when nothing in a non-empty collection matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyResultPolicy {
    /// Return the whole collection instead
    FallbackToAll,
    /// Return the empty result as is
    ShowEmpty,
}

impl EmptyResultPolicy {
    pub fn apply<'a>(
        self,
        filtered: Vec<&'a ContentItem>,
        collection: &'a [ContentItem],
    ) -> Vec<&'a ContentItem> {
        match self {
            EmptyResultPolicy::FallbackToAll if filtered.is_empty() => collection.iter().collect(),
            _ => filtered,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CategoryClassifier {
    wildcard: Option<String>,
    /// Configured labels in display order, wildcard excluded
    labels: Vec<String>,
    rules: HashMap<String, Rule>,
}

impl CategoryClassifier {
    pub const EMPTY_RESULT_POLICY: EmptyResultPolicy = EmptyResultPolicy::FallbackToAll;

    pub fn new(wildcard: Option<String>) -> Self {
        Self {
            wildcard,
            labels: Vec::new(),
            rules: HashMap::new(),
        }
    }

    pub fn from_config(config: &DiscoveryConfig) -> Self {
        config
            .categories
            .iter()
            .fold(Self::new(config.wildcard.clone()), |classifier, category| {
                match &category.rule {
                    Some(rule) => classifier.with_rule(&category.label, rule.clone()),
                    None => classifier.with_label(&category.label),
                }
            })
    }

    /// Register a label that is matched by exact tag or category membership
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        let label = label.into();
        if !self.labels.contains(&label) && !self.is_wildcard(&label) {
            self.labels.push(label);
        }
        self
    }

    pub fn with_rule(mut self, label: impl Into<String>, rule: Rule) -> Self {
        let label = label.into();
        self = self.with_label(label.clone());
        self.rules.insert(label, rule);
        self
    }

    pub fn with_rule_str(self, label: impl Into<String>, text: &str) -> Result<Self> {
        let label = label.into();
        let rule = Rule::compile(text).map_err(|source| DiscoveryError::Rule {
            label: label.clone(),
            source,
        })?;
        Ok(self.with_rule(label, rule))
    }

    pub fn wildcard(&self) -> Option<&str> {
        self.wildcard.as_deref()
    }

    pub fn is_wildcard(&self, label: &str) -> bool {
        self.wildcard.as_deref() == Some(label)
    }

    /// All selectable labels: the wildcard first, then the configured ones
    pub fn labels(&self) -> Vec<&str> {
        self.wildcard
            .iter()
            .chain(&self.labels)
            .map(String::as_str)
            .collect()
    }

    pub fn rule_for(&self, label: &str) -> Option<&Rule> {
        self.rules.get(label)
    }

    /// Configured labels that have no rule and rely on exact label matching
    pub fn unknown_labels(&self) -> Vec<&str> {
        self.labels
            .iter()
            .filter(|label| !self.rules.contains_key(label.as_str()))
            .map(String::as_str)
            .collect()
    }

    pub fn is_member(&self, label: &str, item: &ContentItem) -> bool {
        if self.is_wildcard(label) {
            return true;
        }

        let labels = LabelSet::new(&item.categories, &item.tags);
        match self.rules.get(label) {
            Some(rule) => rule.matches(&labels),
            None => labels.has_label(label),
        }
    }

    /// Items of `collection` in `label`, in collection order.
    ///
    /// Never empty for a non-empty collection: see [`Self::EMPTY_RESULT_POLICY`].
    pub fn filter<'a>(&self, collection: &'a [ContentItem], label: &str) -> Vec<&'a ContentItem> {
        if self.is_wildcard(label) {
            return collection.iter().collect();
        }

        if !self.rules.contains_key(label) {
            debug!(label, "no rule for category, matching the label exactly");
        }

        let filtered: Vec<_> = collection
            .iter()
            .filter(|item| self.is_member(label, item))
            .collect();

        if filtered.is_empty() && !collection.is_empty() {
            debug!(label, "category matched nothing, showing the whole collection");
        }
        Self::EMPTY_RESULT_POLICY.apply(filtered, collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn item(id: &str, tags: &[&str], categories: &[&str]) -> ContentItem {
        ContentItem::new(id, format!("Item {id}"), format!("item-{id}"))
            .with_tags(tags.iter().copied())
            .with_categories(categories.iter().copied())
    }

    fn ids(items: &[&ContentItem]) -> Vec<String> {
        items.iter().map(|i| i.id.clone()).collect()
    }

    fn default_classifier() -> CategoryClassifier {
        CategoryClassifier::from_config(&DiscoveryConfig::default())
    }

    fn fixture() -> Vec<ContentItem> {
        vec![
            item("tr1", &["türk", "rap"], &[]),
            item("us1", &["rap", "usa"], &[]),
            item("clip", &["video"], &["Haftanın Klipleri"]),
            item("talk", &["Röportaj"], &[]),
            item("none", &[], &[]),
            item("battle", &["battle"], &["Müsabaka"]),
        ]
    }

    #[test]
    fn test_wildcard_matches_everything_in_order() {
        let classifier = default_classifier();
        let items = fixture();
        let result = classifier.filter(&items, "Tümü");
        assert_eq!(result.len(), items.len());
        assert!(result.iter().zip(&items).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[rstest]
    #[case("Türk Rap", &["tr1"])]
    #[case("Yabancı Rap", &["us1"])]
    #[case("Rap Haberleri", &["tr1", "us1"])]
    #[case("Haftanın Klipleri", &["clip"])]
    #[case("Rap Sohbetleri", &["talk"])]
    #[case("Rap Müsabakaları", &["battle"])]
    fn test_default_rule_table(#[case] label: &str, #[case] expected: &[&str]) {
        let items = fixture();
        let result = default_classifier().filter(&items, label);
        assert_eq!(ids(&result), expected);
    }

    #[test]
    fn test_empty_category_falls_back_to_everything() {
        let items = vec![item("1", &["pop"], &[]), item("2", &["rock"], &[])];
        let result = default_classifier().filter(&items, "Türk Rap");
        assert_eq!(ids(&result), vec!["1", "2"]);
    }

    #[test]
    fn test_empty_collection_stays_empty() {
        let items: Vec<ContentItem> = Vec::new();
        assert!(default_classifier().filter(&items, "Türk Rap").is_empty());
        assert!(default_classifier().filter(&items, "Tümü").is_empty());
    }

    #[test]
    fn test_unknown_label_uses_exact_membership() {
        let items = vec![
            item("1", &["Videolar"], &[]),
            item("2", &["videolar"], &[]),
            item("3", &[], &["Videolar"]),
        ];
        let result = default_classifier().filter(&items, "Videolar");
        assert_eq!(ids(&result), vec!["1", "3"]);
    }

    #[test]
    fn test_unknown_label_without_match_falls_back() {
        let items = vec![item("1", &["rap"], &[])];
        let result = default_classifier().filter(&items, "Bilinmeyen");
        assert_eq!(ids(&result), vec!["1"]);
    }

    #[test]
    fn test_item_without_labels_is_not_member() {
        let classifier = default_classifier();
        let bare = item("x", &[], &[]);
        assert!(!classifier.is_member("Türk Rap", &bare));
        assert!(!classifier.is_member("Videolar", &bare));
        assert!(classifier.is_member("Tümü", &bare));
    }

    #[test]
    fn test_labels_start_with_wildcard() {
        let classifier = CategoryClassifier::new(Some("Tümü".into()))
            .with_rule_str("Türk Rap", "türk AND rap")
            .unwrap()
            .with_label("Videolar")
            .with_label("Tümü");
        assert_eq!(classifier.labels(), vec!["Tümü", "Türk Rap", "Videolar"]);
        assert_eq!(classifier.unknown_labels(), vec!["Videolar"]);
    }

    #[test]
    fn test_without_wildcard() {
        let classifier = CategoryClassifier::new(None).with_label("Müzik");
        assert_eq!(classifier.wildcard(), None);
        assert_eq!(classifier.labels(), vec!["Müzik"]);
        assert!(!classifier.is_wildcard("Tümü"));
    }

    #[test]
    fn test_invalid_rule_str() {
        let err = CategoryClassifier::new(None)
            .with_rule_str("Bozuk", "rap AND")
            .unwrap_err();
        assert!(matches!(err, DiscoveryError::Rule { label, .. } if label == "Bozuk"));
    }

    #[test]
    fn test_policy_constant() {
        assert_eq!(
            CategoryClassifier::EMPTY_RESULT_POLICY,
            EmptyResultPolicy::FallbackToAll
        );
    }
}
