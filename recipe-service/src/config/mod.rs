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
        port: 3000,
    }
}

fn default_service_name() -> String {
    "recipe-service".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Loads from `recipe-service.{toml,yaml,...}` if present, then
    /// `RECIPE__`-prefixed environment variables, e.g. `RECIPE__SERVER__PORT`.
    pub fn load() -> Result<Self, AppError> {
        load_config("RECIPE", "recipe-service")
    }
}
