use serde::{Deserialize, Serialize};

pub const DEFAULT_SUGGESTION_LIMIT: usize = 3;

/// Main configuration.
///
/// Example YAML:
/// ```yaml
/// strategy: deadline_driven
/// suggestion_limit: 5
/// today: 2025-01-15
/// server:
///   host: 0.0.0.0
///   port: 9000
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Strategy used when a request does not name one
    #[serde(default = "default_strategy")]
    pub strategy: String,

    /// How many entries `suggest` returns
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,

    /// Pin the current date ("YYYY-MM-DD") instead of reading the clock
    #[serde(default)]
    pub today: Option<String>,

    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: default_strategy(),
            suggestion_limit: DEFAULT_SUGGESTION_LIMIT,
            today: None,
            server: ServerConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_strategy() -> String {
    "smart_balance".to_string()
}

fn default_suggestion_limit() -> usize {
    DEFAULT_SUGGESTION_LIMIT
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}
