use crate::utils::AppError;
use std::env;

const DEFAULT_DATABASE_URL: &str = "mongodb://localhost:27017/mongooseTutorial";
const DEFAULT_DATABASE_NAME: &str = "mongooseTutorial";

/// Which `UserStore` implementation backs the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    MongoDB,
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub database_name: String,
    pub storage: StorageBackend,
    /// Empty means any origin is allowed
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| AppError::ConfigError(format!("PORT '{}': {}", raw, e)))?,
            None => 3009,
        };

        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let database_name = lookup("DATABASE_NAME")
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| database_name_from_url(&database_url));

        let storage = match lookup("STORAGE_BACKEND").as_deref().map(str::trim) {
            None | Some("") | Some("mongodb") | Some("mongo") => StorageBackend::MongoDB,
            Some("memory") => StorageBackend::Memory,
            Some(other) => {
                return Err(AppError::ConfigError(format!(
                    "STORAGE_BACKEND must be 'mongodb' or 'memory', got '{}'",
                    other
                )))
            }
        };

        let cors_origins = lookup("CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Config {
            host,
            port,
            database_url,
            database_name,
            storage,
            cors_origins,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database name is the last path segment of the URI, query string stripped
fn database_name_from_url(url: &str) -> String {
    let without_scheme = url.split("://").nth(1).unwrap_or(url);

    without_scheme
        .split_once('/')
        .map(|(_, path)| path.split('?').next().unwrap_or(""))
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_DATABASE_NAME)
        .to_string()
}
