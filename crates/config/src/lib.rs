//! Platform directories shared by the discovery binaries.

pub mod constants;

pub use etcetera::AppStrategy;
use etcetera::{AppStrategyArgs, choose_app_strategy};

use std::env;
use std::path::PathBuf;

pub fn create_strategy() -> std::result::Result<impl AppStrategy, etcetera::HomeDirError> {
    choose_app_strategy(AppStrategyArgs {
        top_level_domain: constants::TOP_LEVEL_DOMAIN.to_string(),
        author: constants::AUTHOR.to_string(),
        app_name: constants::APP_NAME.to_string(),
    })
}

/// `env_key` if set, else what the strategy suggests, else a temp directory
pub fn resolve_dir<S, F>(env_key: &str, strategy: &S, strategy_fn: F) -> PathBuf
where
    S: AppStrategy,
    F: FnOnce(&S) -> Option<PathBuf>,
{
    env::var_os(env_key)
        .map(PathBuf::from)
        .or_else(|| strategy_fn(strategy))
        .unwrap_or_else(|| env::temp_dir().join(constants::APP_NAME))
}

/// Path of the TOML config file under the platform config directory
pub fn config_file<S: AppStrategy>(strategy: &S) -> PathBuf {
    strategy.config_dir().join(constants::CONFIG_FILE_NAME)
}

/// Default location of the content fixture
pub fn default_fixture<S: AppStrategy>(strategy: &S) -> PathBuf {
    resolve_dir(constants::DATA_DIR_ENV, strategy, |s| Some(s.data_dir()))
        .join(constants::FIXTURE_FILE_NAME)
}
