pub const TOP_LEVEL_DOMAIN: &str = "com";
pub const AUTHOR: &str = "Rapkology";
pub const APP_NAME: &str = "discovery";

pub const CONFIG_FILE_NAME: &str = "discover.toml";
pub const FIXTURE_FILE_NAME: &str = "content.json";

/// Overrides the directory the content fixture is read from
pub const DATA_DIR_ENV: &str = "DISCOVERY_DATA_DIR";
