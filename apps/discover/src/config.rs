use crate::error::{Result, WrapErr};
use config::{constants, create_strategy};
use discovery::{DiscoveryConfig, Surface};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default = "default_config", deny_unknown_fields)]
pub struct Config {
    /// JSON content fixture. When this is the platform default and nothing
    /// is there yet, the bundled sample collection is used instead.
    pub fixture: PathBuf,
    pub discovery: DiscoveryConfig,
    /// Set from `--surface`, not read from the file
    #[serde(skip)]
    pub surface: Surface,
}

fn default_config() -> Config {
    let fixture = match create_strategy() {
        Ok(strategy) => config::default_fixture(&strategy),
        // No home directory: look next to the working directory
        Err(_) => PathBuf::from("data").join(constants::FIXTURE_FILE_NAME),
    };

    Config {
        fixture,
        discovery: DiscoveryConfig::default(),
        surface: Surface::default(),
    }
}

impl Default for Config {
    fn default() -> Self {
        default_config()
    }
}

impl Config {
    /// Replace the `[discovery]` table with the preset for `surface`
    pub fn with_surface(mut self, surface: Surface) -> Self {
        self.discovery = surface.config();
        self.surface = surface;
        self
    }

    /// Whether `fixture` is the path a fresh install starts with
    pub fn uses_default_fixture(&self) -> bool {
        self.fixture == default_config().fixture
    }

    fn load_str(user_config_str: &str) -> Result<Config> {
        let user_config: Config = toml::from_str(user_config_str)?;
        user_config.discovery.validate()?;
        Ok(user_config)
    }

    /// Load from `path`, or from the platform config directory when `None`.
    /// A missing default file is created with commented examples.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        if let Some(path) = path {
            let user_config_str = std::fs::read_to_string(path)
                .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
            return Self::load_str(&user_config_str)
                .wrap_err_with(|| format!("Invalid configuration in {}", path.display()));
        }

        let strategy = create_strategy()?;
        let config_path = config::config_file(&strategy);

        match std::fs::read_to_string(&config_path) {
            Ok(user_config_str) => Self::load_str(&user_config_str)
                .wrap_err_with(|| format!("Invalid configuration in {}", config_path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Self::create_example_config(&config_path)?;
                Self::load_str("")
            }
            Err(e) => Err(e.into()),
        }
    }

    fn create_example_config(config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(config_path, EXAMPLE_CONFIG)?;

        info!(path = %config_path.display(), "created example configuration");
        eprintln!("Created configuration file: {}", config_path.display());

        Ok(())
    }
}

const EXAMPLE_CONFIG: &str = r#"# discover configuration
#
# Created on first run. Every key is optional.

# JSON content fixture. Defaults to content.json under the platform data
# directory, or under $DISCOVERY_DATA_DIR when set.
# fixture = "/path/to/content.json"

[discovery]
# Label that shows everything
# wildcard = "Tümü"

# Items shown before "show more"
# window-size = 5

# Author used for items that list none
# default-author = "Rapkology"

# Also search tags
# match-tags = false

# Replaces the built-in category table. Rules combine keywords with
# AND, OR, NOT and parentheses; keywords match inside the item's
# categories and tags. A category without a rule matches items that carry
# the label itself as a tag or category.
#
# [[discovery.categories]]
# label = "Türk Rap"
# rule = "türk AND rap"
#
# [[discovery.categories]]
# label = "Yabancı Rap"
# rule = "(rap OR hip-hop) AND NOT türk"
#
# [[discovery.categories]]
# label = "Videolar"
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::load_str("").unwrap();
        assert_eq!(config.discovery, DiscoveryConfig::default());
        assert!(config.fixture.ends_with(constants::FIXTURE_FILE_NAME));
    }

    #[test]
    fn test_example_config_parses_to_defaults() {
        let config = Config::load_str(EXAMPLE_CONFIG).unwrap();
        assert_eq!(config.discovery, DiscoveryConfig::default());
    }

    #[test]
    fn test_custom_values() {
        let config = Config::load_str(
            r#"
            fixture = "/tmp/content.json"

            [discovery]
            window-size = 8

            [[discovery.categories]]
            label = "Klipler"
            rule = "video OR klip"
            "#,
        )
        .unwrap();

        assert_eq!(config.fixture, PathBuf::from("/tmp/content.json"));
        assert_eq!(config.discovery.window_size, 8);
        assert_eq!(config.discovery.category_labels(), vec!["Tümü", "Klipler"]);
    }

    #[test]
    fn test_with_surface_replaces_discovery_table() {
        let config = Config::load_str("[discovery]\nwindow-size = 3\n")
            .unwrap()
            .with_surface(Surface::News);
        assert_eq!(config.surface, Surface::News);
        assert_eq!(config.discovery, DiscoveryConfig::news());
        assert!(config.uses_default_fixture());
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(Config::load_str("watch-paths = []").is_err());
    }

    #[test]
    fn test_bad_rule_rejected() {
        let err = Config::load_str(
            r#"
            [[discovery.categories]]
            label = "Bozuk"
            rule = "NOT"
            "#,
        )
        .unwrap_err();
        assert!(format!("{err:?}").contains("rule 'NOT'"));
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("discover.toml");
        std::fs::write(&path, "[discovery]\nmatch-tags = true\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert!(config.discovery.match_tags);
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load(Some(&dir.path().join("missing.toml"))).is_err());
    }

    #[test]
    fn test_create_example_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("discover.toml");
        Config::create_example_config(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), EXAMPLE_CONFIG);
    }
}
