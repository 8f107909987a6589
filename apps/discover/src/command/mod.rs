pub mod categories;
pub mod check_rules;
pub mod list;
pub mod related;
pub mod show;

use crate::config::Config;
use crate::error::{Result, WrapErr};
use discovery::{ContentCollection, ContentItem, DateStyle, DiscoveryEngine, SearchMatcher};
use tracing::info;

pub use categories::CategoriesCommand;
pub use check_rules::CheckRulesCommand;
pub use list::ListCommand;
pub use related::RelatedCommand;
pub use show::ShowCommand;

pub trait Command {
    fn execute(&self) -> Result<()>;
}

/// Sample collection shipped with the binary
const BUNDLED_FIXTURE: &str = include_str!("../../../../data/content.json");

fn load_collection(config: &Config) -> Result<ContentCollection> {
    if config.uses_default_fixture() && !config.fixture.exists() {
        info!(path = %config.fixture.display(), "no fixture installed, using the bundled one");
        return ContentCollection::from_fixture_str(BUNDLED_FIXTURE)
            .wrap_err("Failed to parse the bundled content");
    }

    ContentCollection::load(&config.fixture)
        .wrap_err_with(|| format!("Failed to load content from {}", config.fixture.display()))
}

/// Load the fixture named by `config` and build an engine over it
pub fn load_engine(config: &Config) -> Result<DiscoveryEngine> {
    let collection = load_collection(config)?;
    let engine = DiscoveryEngine::new(collection, &config.discovery)?;
    Ok(engine)
}

/// One card line: date, title and author, with the slug underneath
pub fn item_card(item: &ContentItem, matcher: &SearchMatcher, style: DateStyle) -> String {
    let date = item.publish_date(style).unwrap_or_else(|| "-".to_string());
    format!(
        "{date:<16} {}  ({})\n{:16} /{}",
        item.title,
        matcher.author_of(item),
        "",
        item.slug
    )
}
