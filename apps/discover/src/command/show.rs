use super::{Command, load_engine};
use crate::config::Config;
use crate::error::{OptionExt, Result};
use discovery::{DateStyle, DiscoveryEngine};
use std::fmt::Write;

pub struct ShowCommand {
    config: Config,
    slug: String,
    json: bool,
}

impl ShowCommand {
    pub fn new(config: Config, slug: String, json: bool) -> Self {
        Self { config, slug, json }
    }

    fn render(&self, engine: &DiscoveryEngine) -> Result<String> {
        let item = engine
            .collection()
            .find_by_slug(&self.slug)
            .ok_or_eyre(format!("No content with slug '{}'", self.slug))?;

        if self.json {
            return Ok(serde_json::to_string_pretty(item)?);
        }

        let mut out = String::new();
        writeln!(out, "{}", item.title)?;
        writeln!(out, "{}", engine.matcher().author_of(item))?;
        if let Some(date) = item.publish_date(DateStyle::Long) {
            writeln!(out, "{date}")?;
        }
        if !item.categories.is_empty() {
            writeln!(out, "Kategori: {}", item.categories.join(", "))?;
        }
        if !item.tags.is_empty() {
            writeln!(out, "Etiketler: {}", item.tags.join(", "))?;
        }
        if let Some(excerpt) = &item.excerpt {
            writeln!(out, "\n{excerpt}")?;
        }
        if !item.body.is_empty() {
            writeln!(out, "\n{}", item.body)?;
        }
        Ok(out)
    }
}

impl Command for ShowCommand {
    fn execute(&self) -> Result<()> {
        let engine = load_engine(&self.config)?;
        print!("{}", self.render(&engine)?);
        Ok(())
    }
}
