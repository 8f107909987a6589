use super::{Command, load_engine};
use crate::config::Config;
use crate::error::Result;
use discovery::DiscoveryEngine;

pub struct CategoriesCommand {
    config: Config,
}

impl CategoriesCommand {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn render(engine: &DiscoveryEngine) -> Vec<String> {
        let classifier = engine.classifier();
        let items = engine.collection().items();

        classifier
            .labels()
            .into_iter()
            .map(|label| {
                let members = items
                    .iter()
                    .filter(|item| classifier.is_member(label, item))
                    .count();
                let rule = if classifier.is_wildcard(label) {
                    "*".to_string()
                } else {
                    classifier
                        .rule_for(label)
                        .map(|rule| rule.text().to_string())
                        .unwrap_or_else(|| "(exact label)".to_string())
                };
                format!("{label:<20} {members:>4}  {rule}")
            })
            .collect()
    }
}

impl Command for CategoriesCommand {
    fn execute(&self) -> Result<()> {
        let engine = load_engine(&self.config)?;
        for line in Self::render(&engine) {
            println!("{line}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::testing::config_in;

    #[test]
    fn test_categories() {
        let dir = tempfile::tempdir().unwrap();
        let engine = load_engine(&config_in(dir.path())).unwrap();
        let lines = CategoriesCommand::render(&engine);

        assert_eq!(lines.len(), 8);
        assert!(lines[0].starts_with("Tümü"));
        assert!(lines[0].ends_with("6  *"));
        assert!(lines[1].starts_with("Türk Rap"));
        assert!(lines[1].ends_with("2  türk AND rap"));
    }
}
