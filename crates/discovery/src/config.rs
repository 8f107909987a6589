// discovery/src/config.rs
//! Engine configuration: the category table and view defaults.

use std::path::Path;

use rules::Rule;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};

use crate::date::DateStyle;
use crate::error::{DiscoveryError, Result};
use crate::matcher::DEFAULT_AUTHOR;

pub const DEFAULT_WILDCARD: &str = "Tümü";
pub const DEFAULT_WINDOW_SIZE: usize = 5;
pub const NEWS_WINDOW_SIZE: usize = 8;

/// Default category table, in display order
const DEFAULT_CATEGORIES: &[(&str, &str)] = &[
    ("Türk Rap", "türk AND rap"),
    ("Yabancı Rap", "(rap OR hip-hop) AND NOT türk"),
    ("Rap Haberleri", "rap OR hip-hop OR haber OR news"),
    ("Haftanın Klipleri", "hafta AND (video OR klip)"),
    ("Ayın Klipleri", "ay AND (video OR klip)"),
    (
        "Rap Sohbetleri",
        "sohbet OR röportaj OR konuşma OR interview OR podcast",
    ),
    (
        "Rap Müsabakaları",
        "müsabaka OR yarışma OR battle OR competition OR contest",
    ),
];

/// News page table. No wildcard, foreign rap first, narrower keyword lists.
const NEWS_CATEGORIES: &[(&str, &str)] = &[
    ("Yabancı Rap", "(rap OR hip-hop) AND NOT türk"),
    ("Türk Rap", "türk AND rap"),
    ("Rap Haberleri", "rap OR hip-hop"),
    ("Haftanın Klipleri", "hafta AND (video OR klip)"),
    ("Ayın Klipleri", "ay AND (video OR klip)"),
    ("Rap Sohbetleri", "sohbet OR röportaj OR konuşma OR interview"),
    ("Rap Müsabakaları", "müsabaka OR yarışma OR battle OR competition"),
];

/// Page a discovery list is rendered on
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Surface {
    #[default]
    Blog,
    News,
}

impl Surface {
    pub fn config(self) -> DiscoveryConfig {
        match self {
            Surface::Blog => DiscoveryConfig::default(),
            Surface::News => DiscoveryConfig::news(),
        }
    }

    pub fn date_style(self) -> DateStyle {
        match self {
            Surface::Blog => DateStyle::Long,
            Surface::News => DateStyle::Short,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct DiscoveryConfig {
    /// Label that selects the whole collection. `None` disables it.
    pub wildcard: Option<String>,
    pub categories: Vec<CategoryConfig>,
    /// Items shown while the result list is collapsed
    pub window_size: usize,
    pub default_author: String,
    pub match_tags: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct CategoryConfig {
    pub label: String,
    /// Without a rule the label is matched exactly against tags and categories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<Rule>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            wildcard: Some(DEFAULT_WILDCARD.to_string()),
            categories: compile_table(DEFAULT_CATEGORIES),
            window_size: DEFAULT_WINDOW_SIZE,
            default_author: DEFAULT_AUTHOR.to_string(),
            match_tags: false,
        }
    }
}

fn compile_table(table: &[(&str, &str)]) -> Vec<CategoryConfig> {
    table
        .iter()
        .filter_map(|(label, text)| {
            // The table is static and covered by tests
            Rule::compile(text).ok().map(|rule| CategoryConfig {
                label: label.to_string(),
                rule: Some(rule),
            })
        })
        .collect()
}

impl DiscoveryConfig {
    /// The news page: eight items per window and tags included in search
    pub fn news() -> Self {
        Self {
            wildcard: None,
            categories: compile_table(NEWS_CATEGORIES),
            window_size: NEWS_WINDOW_SIZE,
            default_author: DEFAULT_AUTHOR.to_string(),
            match_tags: true,
        }
    }

    pub fn category_labels(&self) -> Vec<&str> {
        self.wildcard
            .iter()
            .map(String::as_str)
            .chain(self.categories.iter().map(|c| c.label.as_str()))
            .collect()
    }

    /// Category selected when a session starts
    pub fn default_category(&self) -> Option<&str> {
        self.category_labels().first().copied()
    }

    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(DiscoveryError::Config(
                "window-size must be at least 1".to_string(),
            ));
        }
        if let Some(category) = self.categories.iter().find(|c| c.label.trim().is_empty()) {
            return Err(DiscoveryError::Config(format!(
                "category label must not be blank (rule: {:?})",
                category.rule.as_ref().map(Rule::text)
            )));
        }
        Ok(())
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: DiscoveryConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
