//! Configuration management

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

use crate::constants::{DEFAULT_SESSION_COOKIE, DEFAULT_SESSION_TTL_SECONDS};
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseSettings,
    pub session: SessionSettings,
    pub photos: PhotoSettings,
    #[serde(default)]
    pub cors: CorsSettings,
    #[serde(default)]
    pub log: LogSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_seconds: u64,
    pub run_migrations: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionSettings {
    pub secret: String,
    pub ttl_seconds: i64,
    pub cookie_name: String,
    pub secure_cookie: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PhotoSettings {
    /// Directory holding member photos, addressed by `photo_filename`.
    pub dir: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CorsSettings {
    /// Single allowed origin. When unset every origin is allowed without credentials.
    pub allowed_origin: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct LogSettings {
    /// Directory for daily rolling JSON log files; stdout only when unset.
    pub dir: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let config = Self::layered(&env)?.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Sources for one environment. `app.env` always names the environment
    /// whose file was layered in.
    fn layered(env: &str) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .set_override("app.env", env)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.host", "0.0.0.0")?
            .set_default("app.port", 8080)?
            .set_default("app.name", "meridian-server")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("database.acquire_timeout_seconds", 3)?
            .set_default("database.run_migrations", true)?
            .set_default("session.ttl_seconds", DEFAULT_SESSION_TTL_SECONDS)?
            .set_default("session.cookie_name", DEFAULT_SESSION_COOKIE)?
            .set_default("session.secure_cookie", false)?
            .set_default("photos.dir", "photos")
    }

    pub fn is_production(&self) -> bool {
        self.app.env == "production"
    }
}
