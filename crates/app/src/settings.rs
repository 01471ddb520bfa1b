//! Handles settings for the application. Configuration is read from
//! `settings.toml` in the working directory, then from `CASHCAST_*`
//! environment variables (`CASHCAST_SERVER__PORT=8080`).

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct App {
    pub level: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    Memory,
    Sqlite(String),
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub bind: Option<String>,
    pub port: u16,
    pub database: Database,
}

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub app: App,
    pub server: Option<Server>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("app.level", "info")?
            .add_source(File::with_name("settings").required(false))
            .add_source(Environment::with_prefix("CASHCAST").separator("__"))
            .build()?
            .try_deserialize()
    }
}
