use super::{Command, item_card, load_engine};
use crate::config::Config;
use crate::error::Result;
use discovery::{ContentItem, DateStyle, Discovery, DiscoveryEngine, FilterState, SortMode};
use serde::Serialize;
use std::fmt::Write;

pub struct ListCommand {
    config: Config,
    category: Option<String>,
    query: Option<String>,
    all: bool,
    sort: SortMode,
    json: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
struct ListOutput<'a> {
    category: &'a str,
    query: &'a str,
    total: usize,
    has_more: bool,
    expanded: bool,
    items: &'a [&'a ContentItem],
}

impl ListCommand {
    pub fn new(
        mut config: Config,
        category: Option<String>,
        query: Option<String>,
        all: bool,
        window: Option<usize>,
        sort: SortMode,
        json: bool,
    ) -> Self {
        if let Some(window) = window {
            config.discovery.window_size = window;
        }
        Self {
            config,
            category,
            query,
            all,
            sort,
            json,
        }
    }

    /// Replay the arguments as a user would click through the page
    fn state(&self, engine: &DiscoveryEngine) -> FilterState {
        let mut state = engine.new_state();
        if let Some(category) = &self.category {
            state.select_category(category.as_str());
        }
        if let Some(query) = &self.query {
            state.toggle_search();
            state.set_query(query.as_str());
        }
        if self.all {
            state.toggle_expanded();
        }
        state
    }

    fn render(&self, engine: &DiscoveryEngine) -> Result<String> {
        let state = self.state(engine);
        let discovery = engine.discover_state(&state).sorted(self.sort);

        if self.json {
            let output = ListOutput {
                category: state.active_category(),
                query: state.search_query(),
                total: discovery.total(),
                has_more: discovery.has_more(),
                expanded: discovery.is_expanded(),
                items: discovery.visible(),
            };
            return Ok(serde_json::to_string_pretty(&output)?);
        }

        render_text(
            engine,
            &state,
            &discovery,
            self.config.surface.date_style(),
        )
    }
}

fn render_text(
    engine: &DiscoveryEngine,
    state: &FilterState,
    discovery: &Discovery<'_>,
    style: DateStyle,
) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "[{}]", state.active_category())?;

    if discovery.is_empty() {
        writeln!(out, "No results for '{}'", state.search_query().trim())?;
        return Ok(out);
    }

    for item in discovery.visible() {
        writeln!(out, "{}", item_card(item, engine.matcher(), style))?;
    }

    write!(
        out,
        "\nShowing {} of {}",
        discovery.visible().len(),
        discovery.total()
    )?;
    if discovery.has_more() && !discovery.is_expanded() {
        out.push_str(" (use --all to show more)");
    }
    out.push('\n');
    Ok(out)
}

impl Command for ListCommand {
    fn execute(&self) -> Result<()> {
        let engine = load_engine(&self.config)?;
        print!("{}", self.render(&engine)?);
        Ok(())
    }
}
