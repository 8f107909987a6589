// discovery/src/collection.rs
//! The static content collection, loaded once per session.

use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{DiscoveryError, Result};
use crate::models::{ContentItem, FixtureRecord};

/// Ordered, immutable set of content items with unique ids and slugs
#[derive(Debug, Clone, Default)]
pub struct ContentCollection {
    items: Vec<ContentItem>,
}

impl ContentCollection {
    /// Wrap items, rejecting duplicate ids or slugs
    pub fn new(items: Vec<ContentItem>) -> Result<Self> {
        let mut ids = HashSet::new();
        let mut slugs = HashSet::new();
        for item in &items {
            if !ids.insert(item.id.as_str()) {
                return Err(DiscoveryError::Duplicate {
                    field: "id",
                    value: item.id.clone(),
                });
            }
            if !slugs.insert(item.slug.as_str()) {
                return Err(DiscoveryError::Duplicate {
                    field: "slug",
                    value: item.slug.clone(),
                });
            }
        }
        Ok(Self { items })
    }

    /// Parse the JSON fixture format (an array of `{ _id, createdAt, attributes }`)
    pub fn from_fixture_str(json: &str) -> Result<Self> {
        let records: Vec<FixtureRecord> = serde_json::from_str(json)?;
        let items: Vec<ContentItem> = records.into_iter().map(ContentItem::from).collect();

        for item in items.iter().filter(|i| i.title.is_empty() || i.slug.is_empty()) {
            warn!(id = %item.id, "fixture record has no title or slug");
        }
        Self::new(items)
    }

    /// Load the JSON fixture from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let collection = Self::from_fixture_str(&content)?;
        debug!(path = %path.display(), items = collection.len(), "loaded content fixture");
        Ok(collection)
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&ContentItem> {
        self.items.iter().find(|item| item.slug == slug)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&ContentItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// The first `count` items in collection order, skipping the item at `slug`
    pub fn related(&self, slug: &str, count: usize) -> Vec<&ContentItem> {
        self.items
            .iter()
            .filter(|item| item.slug != slug)
            .take(count)
            .collect()
    }
}

impl AsRef<[ContentItem]> for ContentCollection {
    fn as_ref(&self) -> &[ContentItem] {
        &self.items
    }
}
