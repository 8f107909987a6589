// discovery/src/matcher.rs
//! Free-text search over an item's display fields.

use crate::classifier::EmptyResultPolicy;
use crate::config::DiscoveryConfig;
use crate::models::ContentItem;

pub const DEFAULT_AUTHOR: &str = "Rapkology";

#[derive(Debug, Clone)]
pub struct SearchMatcher {
    /// Author shown, and searched, for items that list none
    default_author: String,
    /// Also search tags
    match_tags: bool,
}

impl Default for SearchMatcher {
    fn default() -> Self {
        Self {
            default_author: DEFAULT_AUTHOR.to_string(),
            match_tags: false,
        }
    }
}

/// Trim and lower-case a query; `None` when nothing is left
pub fn normalize_query(query: &str) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

impl SearchMatcher {
    pub const EMPTY_RESULT_POLICY: EmptyResultPolicy = EmptyResultPolicy::ShowEmpty;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &DiscoveryConfig) -> Self {
        Self {
            default_author: config.default_author.clone(),
            match_tags: config.match_tags,
        }
    }

    pub fn with_default_author(mut self, author: impl Into<String>) -> Self {
        self.default_author = author.into();
        self
    }

    pub fn with_tag_matching(mut self, enabled: bool) -> Self {
        self.match_tags = enabled;
        self
    }

    pub fn author_of<'a>(&'a self, item: &'a ContentItem) -> &'a str {
        item.primary_author().unwrap_or(&self.default_author)
    }

    /// Whether `item` matches `query`. A blank query matches everything.
    pub fn is_match(&self, query: &str, item: &ContentItem) -> bool {
        match normalize_query(query) {
            Some(needle) => self.matches_normalized(&needle, item),
            None => true,
        }
    }

    fn matches_normalized(&self, needle: &str, item: &ContentItem) -> bool {
        let contains = |text: &str| text.to_lowercase().contains(needle);

        contains(&item.title)
            || contains(self.author_of(item))
            || item.excerpt.as_deref().is_some_and(contains)
            || contains(&item.body)
            || (self.match_tags && item.tags.iter().any(|tag| contains(tag)))
    }

    /// Items of `collection` matching `query`, in collection order. May be empty.
    pub fn filter<'a>(&self, collection: &'a [ContentItem], query: &str) -> Vec<&'a ContentItem> {
        let Some(needle) = normalize_query(query) else {
            return collection.iter().collect();
        };

        let filtered = collection
            .iter()
            .filter(|item| self.matches_normalized(&needle, item))
            .collect();
        Self::EMPTY_RESULT_POLICY.apply(filtered, collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn fixture() -> Vec<ContentItem> {
        vec![
            ContentItem::new("1", "Ezhel yeni albümünü duyurdu", "ezhel")
                .with_authors(["Rapçı Dayı"])
                .with_excerpt("Türkçe rap sahnesinde büyük haber")
                .with_tags(["türk", "rap"]),
            ContentItem::new("2", "Kendrick Lamar Grammy", "kendrick")
                .with_authors(["Rapçı Abla"])
                .with_body("USA tour dates announced")
                .with_tags(["rap", "usa"]),
            ContentItem::new("3", "Haftanın klipleri", "klipler").with_tags(["video"]),
        ]
    }

    fn ids(items: &[&ContentItem]) -> Vec<String> {
        items.iter().map(|i| i.id.clone()).collect()
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn test_blank_query_is_inert(#[case] query: &str) {
        let items = fixture();
        assert_eq!(SearchMatcher::new().filter(&items, query).len(), items.len());
    }

    #[rstest]
    #[case::title("grammy", &["2"])]
    #[case::author("abla", &["2"])]
    #[case::excerpt("sahnesinde", &["1"])]
    #[case::body("tour dates", &["2"])]
    #[case::trimmed("  EZHEL  ", &["1"])]
    #[case::default_author("rapkology", &["3"])]
    fn test_fields_searched(#[case] query: &str, #[case] expected: &[&str]) {
        let items = fixture();
        assert_eq!(ids(&SearchMatcher::new().filter(&items, query)), expected);
    }

    #[test]
    fn test_case_insensitive() {
        let items = fixture();
        let matcher = SearchMatcher::new();
        assert_eq!(
            ids(&matcher.filter(&items, "RAP")),
            ids(&matcher.filter(&items, "rap"))
        );
    }

    #[test]
    fn test_no_match_is_empty() {
        let items = fixture();
        assert!(SearchMatcher::new().filter(&items, "caz festivali").is_empty());
    }

    #[test]
    fn test_tags_only_searched_when_enabled() {
        let items = fixture();
        assert!(SearchMatcher::new().filter(&items, "video").is_empty());

        let matcher = SearchMatcher::new().with_tag_matching(true);
        assert_eq!(ids(&matcher.filter(&items, "video")), vec!["3"]);
    }

    #[test]
    fn test_custom_default_author() {
        let items = fixture();
        let matcher = SearchMatcher::new().with_default_author("Editör");
        assert!(matcher.filter(&items, "rapkology").is_empty());
        assert_eq!(ids(&matcher.filter(&items, "editör")), vec!["3"]);
        assert_eq!(matcher.author_of(&items[2]), "Editör");
    }

    #[test]
    fn test_is_match() {
        let items = fixture();
        let matcher = SearchMatcher::new();
        assert!(matcher.is_match("", &items[0]));
        assert!(matcher.is_match("Ezhel", &items[0]));
        assert!(!matcher.is_match("Ezhel", &items[1]));
    }

    #[test]
    fn test_policy_constant() {
        assert_eq!(SearchMatcher::EMPTY_RESULT_POLICY, EmptyResultPolicy::ShowEmpty);
        assert_ne!(
            SearchMatcher::EMPTY_RESULT_POLICY,
            crate::CategoryClassifier::EMPTY_RESULT_POLICY
        );
    }
}
