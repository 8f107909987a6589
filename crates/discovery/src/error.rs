use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid rule for category '{label}': {source}")]
    Rule {
        label: String,
        #[source]
        source: rules::RuleError,
    },

    #[error("Duplicate {field} '{value}' in content collection")]
    Duplicate { field: &'static str, value: String },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DiscoveryError>;
