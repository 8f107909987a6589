// discovery/src/models.rs
//! Content records as consumed by the engine and as stored in the fixture.

use serde::{Deserialize, Serialize};

use crate::date::{self, DateStyle};

/// One blog or news record. Read-only for the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl ContentItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            slug: slug.into(),
            excerpt: None,
            body: String::new(),
            cover_image: None,
            authors: Vec::new(),
            tags: Vec::new(),
            categories: Vec::new(),
            created_at: None,
        }
    }

    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authors = authors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = Some(created_at.into());
        self
    }

    /// First listed author, if any
    pub fn primary_author(&self) -> Option<&str> {
        self.authors.first().map(String::as_str)
    }

    /// Publication date in the site's locale, `None` when missing or unparseable
    pub fn publish_date(&self, style: DateStyle) -> Option<String> {
        self.created_at
            .as_deref()
            .and_then(|raw| date::format_publish_date(raw, style))
    }
}

/// A record as it appears in the JSON fixture
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub attributes: FixtureAttributes,
}

/// Fields under `attributes`. Anything else in the record (SEO blocks and
/// the like) is ignored, and `null` is treated like a missing field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FixtureAttributes {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub img: Option<String>,
    pub desc: Option<String>,
    pub content: Option<String>,
    pub authors: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub category: Option<Vec<String>>,
}

impl From<FixtureRecord> for ContentItem {
    fn from(record: FixtureRecord) -> Self {
        let attrs = record.attributes;
        Self {
            id: record.id,
            title: attrs.title.unwrap_or_default(),
            slug: attrs.slug.unwrap_or_default(),
            // An empty description is the same as none
            excerpt: attrs.desc.filter(|d| !d.is_empty()),
            body: attrs.content.unwrap_or_default(),
            cover_image: attrs.img,
            authors: attrs.authors.unwrap_or_default(),
            tags: attrs.tags.unwrap_or_default(),
            categories: attrs.category.unwrap_or_default(),
            created_at: record.created_at,
        }
    }
}
