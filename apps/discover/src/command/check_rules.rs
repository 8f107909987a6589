use super::{Command, load_engine};
use crate::config::Config;
use crate::error::Result;
use discovery::DiscoveryEngine;
use tracing::{info, warn};

pub struct CheckRulesCommand {
    config: Config,
}

/// Something about the category table worth a look
#[derive(Debug, PartialEq, Eq)]
enum Finding {
    /// Matched by exact label only
    NoRule(String),
    /// Nothing in the collection belongs; the category falls back to everything
    NoMembers(String),
}

impl CheckRulesCommand {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn check(engine: &DiscoveryEngine) -> Vec<Finding> {
        let classifier = engine.classifier();
        let items = engine.collection().items();
        let mut findings = Vec::new();

        for label in classifier.labels() {
            if classifier.is_wildcard(label) {
                continue;
            }
            if classifier.rule_for(label).is_none() {
                findings.push(Finding::NoRule(label.to_string()));
            }
            if !items.iter().any(|item| classifier.is_member(label, item)) {
                findings.push(Finding::NoMembers(label.to_string()));
            }
        }
        findings
    }
}

impl Command for CheckRulesCommand {
    fn execute(&self) -> Result<()> {
        // Rules are compiled while the configuration loads, so reaching this
        // point means every rule parsed
        let engine = load_engine(&self.config)?;
        let findings = Self::check(&engine);

        for finding in &findings {
            match finding {
                Finding::NoRule(label) => {
                    warn!(label = %label, "category has no rule, matching the label exactly")
                }
                Finding::NoMembers(label) => {
                    warn!(label = %label, "category matches nothing and will show everything")
                }
            }
        }

        let count = engine.classifier().labels().len();
        info!(categories = count, warnings = findings.len(), "rules checked");
        println!("{count} categories, {} warnings", findings.len());
        Ok(())
    }
}
