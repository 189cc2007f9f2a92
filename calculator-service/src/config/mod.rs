use serde::Deserialize;
use service_core::config::{HttpConfig, load_config};
use service_core::error::AppError;

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    #[serde(default = "default_server")]
    pub server: HttpConfig,
    #[serde(default = "default_service_name")]
    pub service_name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_server() -> HttpConfig {
    HttpConfig {
        host: "0.0.0.0".to_string(),
        port: 3001,
    }
}

fn default_service_name() -> String {
    "calculator-service".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Loads from `calculator-service.{toml,yaml,...}` if present, then
    /// `CALCULATOR__`-prefixed environment variables, e.g.
    /// `CALCULATOR__SERVER__PORT`.
    pub fn load() -> Result<Self, AppError> {
        load_config("CALCULATOR", "calculator-service")
    }
}
