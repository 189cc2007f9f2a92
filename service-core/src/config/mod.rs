use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Bind address for a service's HTTP listener. Port 0 asks the OS for a free
/// port, which the integration tests rely on.
#[derive(Deserialize, Clone, Debug)]
pub struct HttpConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Loads a service configuration from an optional file plus prefixed
/// environment variables, e.g. `RECIPE__SERVER__PORT=3000`.
pub fn load_config<T: DeserializeOwned>(env_prefix: &str, file_name: &str) -> Result<T, AppError> {
    dotenvy::dotenv().ok();

    let config = Cfg::builder()
        .add_source(File::with_name(file_name).required(false))
        .add_source(config::Environment::with_prefix(env_prefix).separator("__"))
        .build()?;

    Ok(config.try_deserialize()?)
}
