use crate::constants::DEFAULT_METADATA_APP_NAME;
use dotenv::dotenv;
use once_cell::sync::Lazy;
use std::env;

pub struct Config {
    pub port: u16,
    pub log_level: String,
    pub jwt_secret: String,
    /// Ship that hosts the groups seeded at startup.
    pub host_ship: String,
    pub metadata_app_name: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("log_level", &self.log_level)
            .field("jwt_secret", &"<redacted>")
            .field("host_ship", &self.host_ship)
            .field("metadata_app_name", &self.metadata_app_name)
            .finish()
    }
}

impl Config {
    fn from_env() -> Self {
        dotenv().ok();

        Self {
            port: env::var("PORT").ok().and_then(|v| v.parse().ok()).unwrap_or(3000),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            jwt_secret: env::var("JWT_SECRET").unwrap_or_else(|_| "secret".to_string()),
            host_ship: env::var("HOST_SHIP").unwrap_or_else(|_| "~zod".to_string()),
            metadata_app_name: env::var("METADATA_APP_NAME")
                .unwrap_or_else(|_| DEFAULT_METADATA_APP_NAME.to_string()),
        }
    }
}

pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);
