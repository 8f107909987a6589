use super::{Command, item_card, load_engine};
use crate::config::Config;
use crate::error::{OptionExt, Result};
use discovery::{DateStyle, DiscoveryEngine};

pub struct RelatedCommand {
    config: Config,
    slug: String,
    count: usize,
}

impl RelatedCommand {
    pub fn new(config: Config, slug: String, count: usize) -> Self {
        Self {
            config,
            slug,
            count,
        }
    }

    fn render(&self, engine: &DiscoveryEngine) -> Result<Vec<String>> {
        let collection = engine.collection();
        collection
            .find_by_slug(&self.slug)
            .ok_or_eyre(format!("No content with slug '{}'", self.slug))?;

        Ok(collection
            .related(&self.slug, self.count)
            .into_iter()
            .map(|item| item_card(item, engine.matcher(), DateStyle::Short))
            .collect())
    }
}

impl Command for RelatedCommand {
    fn execute(&self) -> Result<()> {
        let engine = load_engine(&self.config)?;
        for card in self.render(&engine)? {
            println!("{card}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::testing::config_in;

    fn related(slug: &str, count: usize) -> Result<Vec<String>> {
        let dir = tempfile::tempdir().unwrap();
        let command = RelatedCommand::new(config_in(dir.path()), slug.to_string(), count);
        let engine = load_engine(&command.config).unwrap();
        command.render(&engine)
    }

    #[test]
    fn test_related_skips_current() {
        let cards = related("ezhel", 3).unwrap();
        assert_eq!(cards.len(), 3);
        assert!(cards[0].ends_with("/kendrick"));
        assert!(cards[0].starts_with("1 Şub 2024"));
        assert!(cards.iter().all(|card| !card.ends_with("/ezhel")));
    }

    #[test]
    fn test_related_unknown_slug() {
        assert!(related("yok", 3).is_err());
    }
}
