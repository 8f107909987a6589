//! Content discovery over a static blog / news collection.
//!
//! A session picks one category and optionally types a query. The
//! [`CategoryClassifier`] and [`SearchMatcher`] each filter the full
//! collection, [`intersect`] keeps the items both agree on, and [`discover`]
//! shows that result through a collapsed or expanded window.

pub mod classifier;
pub mod collection;
pub mod config;
pub mod date;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod models;
pub mod paginator;
pub mod sort;
pub mod state;

pub use classifier::{CategoryClassifier, EmptyResultPolicy};
pub use collection::ContentCollection;
pub use config::{CategoryConfig, DiscoveryConfig, Surface};
pub use date::{DateStyle, format_publish_date};
pub use engine::{Discovery, DiscoveryEngine, discover, intersect};
pub use error::{DiscoveryError, Result};
pub use matcher::{SearchMatcher, normalize_query};
pub use models::{ContentItem, FixtureRecord};
pub use paginator::{Window, apply_window, has_more};
pub use sort::SortMode;
pub use state::FilterState;
