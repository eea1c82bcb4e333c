use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 8000;

pub struct Config {
    pub port: u16,

    /// Connection string for a future database integration. Only its
    /// presence is ever reported; the demo build never dials it.
    pub database_url: Option<String>,
    /// Database name for a future database integration, presence-checked only.
    pub database_name: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                value: raw,
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            database_url: std::env::var("DATABASE_URL").ok(),
            database_name: std::env::var("DATABASE_NAME").ok(),
        })
    }
}
