// discovery/src/engine.rs
//! Category, search and window composed over one collection.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::classifier::CategoryClassifier;
use crate::collection::ContentCollection;
use crate::config::DiscoveryConfig;
use crate::error::Result;
use crate::matcher::SearchMatcher;
use crate::models::ContentItem;
use crate::paginator::{Window, apply_window};
use crate::sort::SortMode;
use crate::state::FilterState;

/// Items in both the category result and the search result, in collection
/// order. Both filters see the full collection, so a category that fell back
/// to everything still intersects with a search that matched nothing.
pub fn intersect<'a>(
    collection: &'a [ContentItem],
    classifier: &CategoryClassifier,
    matcher: &SearchMatcher,
    category: &str,
    query: &str,
) -> Vec<&'a ContentItem> {
    let by_search: HashSet<&str> = matcher
        .filter(collection, query)
        .into_iter()
        .map(|item| item.id.as_str())
        .collect();

    classifier
        .filter(collection, category)
        .into_iter()
        .filter(|item| by_search.contains(item.id.as_str()))
        .collect()
}

/// [`intersect`] cut down to the collapsed or expanded window
pub fn discover<'a>(
    collection: &'a [ContentItem],
    classifier: &CategoryClassifier,
    matcher: &SearchMatcher,
    category: &str,
    query: &str,
    window_size: usize,
    expanded: bool,
) -> Vec<&'a ContentItem> {
    let items = intersect(collection, classifier, matcher, category, query);
    apply_window(&items, window_size, expanded).to_vec()
}

/// A filtered result with its window state
#[derive(Debug, Clone, Serialize)]
pub struct Discovery<'a> {
    items: Vec<&'a ContentItem>,
    window_size: usize,
    expanded: bool,
}

impl<'a> Discovery<'a> {
    fn window(&self) -> Window<'_, &'a ContentItem> {
        Window::new(&self.items, self.window_size, self.expanded)
    }

    /// Items to render
    pub fn visible(&self) -> &[&'a ContentItem] {
        self.window().visible()
    }

    pub fn all(&self) -> &[&'a ContentItem] {
        &self.items
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// False when every result already fits the window
    pub fn is_expanded(&self) -> bool {
        self.window().is_expanded()
    }

    pub fn has_more(&self) -> bool {
        self.window().has_more()
    }

    pub fn sorted(mut self, mode: SortMode) -> Self {
        mode.apply(&mut self.items);
        self
    }
}

#[derive(Debug, Clone)]
pub struct DiscoveryEngine {
    collection: ContentCollection,
    classifier: CategoryClassifier,
    matcher: SearchMatcher,
    window_size: usize,
    default_category: Option<String>,
}

impl DiscoveryEngine {
    pub fn new(collection: ContentCollection, config: &DiscoveryConfig) -> Result<Self> {
        config.validate()?;
        debug!(
            items = collection.len(),
            categories = config.categories.len(),
            window_size = config.window_size,
            "discovery engine ready"
        );

        Ok(Self {
            classifier: CategoryClassifier::from_config(config),
            matcher: SearchMatcher::from_config(config),
            window_size: config.window_size,
            default_category: config.default_category().map(str::to_string),
            collection,
        })
    }

    pub fn collection(&self) -> &ContentCollection {
        &self.collection
    }

    pub fn classifier(&self) -> &CategoryClassifier {
        &self.classifier
    }

    pub fn matcher(&self) -> &SearchMatcher {
        &self.matcher
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn category_labels(&self) -> Vec<&str> {
        self.classifier.labels()
    }

    /// Fresh state for a new session, on the first configured category
    pub fn new_state(&self) -> FilterState {
        FilterState::new(self.default_category.clone().unwrap_or_default())
    }

    pub fn filter_by_category(&self, category: &str) -> Vec<&ContentItem> {
        self.classifier.filter(self.collection.items(), category)
    }

    pub fn filter_by_search(&self, query: &str) -> Vec<&ContentItem> {
        self.matcher.filter(self.collection.items(), query)
    }

    /// The unwindowed result for `category` and `query`
    pub fn filtered(&self, category: &str, query: &str) -> Vec<&ContentItem> {
        intersect(
            self.collection.items(),
            &self.classifier,
            &self.matcher,
            category,
            query,
        )
    }

    pub fn discover(&self, category: &str, query: &str, expanded: bool) -> Discovery<'_> {
        let items = self.filtered(category, query);
        debug!(category, query, total = items.len(), expanded, "discover");
        Discovery {
            items,
            window_size: self.window_size,
            expanded,
        }
    }

    pub fn discover_state(&self, state: &FilterState) -> Discovery<'_> {
        self.discover(
            state.active_category(),
            state.search_query(),
            state.is_expanded(),
        )
    }
}
