use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "console".to_string()
}

/// LoggingConfig controls how we initialize tracing/logging.
#[derive(Deserialize, Serialize, Debug, JsonSchema)]
pub struct LoggingConfig {
    /// e.g. "info", "debug", "warn"
    #[serde(default = "default_level")]
    pub level: String,

    /// e.g. "json", "console"
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_level(),
            format: default_format(),
        }
    }
}
