// discovery/src/state.rs
//! Per-session view state. Created fresh on every visit, never persisted.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct FilterState {
    active_category: String,
    search_query: String,
    search_open: bool,
    expanded: bool,
}

impl FilterState {
    pub fn new(default_category: impl Into<String>) -> Self {
        Self {
            active_category: default_category.into(),
            search_query: String::new(),
            search_open: false,
            expanded: false,
        }
    }

    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn is_search_open(&self) -> bool {
        self.search_open
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Switch category. Collapses the list and closes an open search box.
    pub fn select_category(&mut self, label: impl Into<String>) {
        self.active_category = label.into();
        self.expanded = false;
        if self.search_open {
            self.search_open = false;
            self.search_query.clear();
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.expanded = false;
    }

    /// Open or close the search box. Closing drops the query.
    pub fn toggle_search(&mut self) {
        self.search_open = !self.search_open;
        if !self.search_open {
            self.search_query.clear();
        }
    }

    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }
}
