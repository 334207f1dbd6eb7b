use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub api_prefix: String,
    pub database_max_connections: u32,
    pub database_connect_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key/value source. `from_env` passes
    /// the process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            database_url: database_url(&lookup)?,
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            server_port: lookup("SERVER_PORT")
                .or_else(|| lookup("PORT"))
                .unwrap_or_else(|| "8000".to_string())
                .parse()
                .context("SERVER_PORT must be a valid port number")?,
            api_prefix: normalize_prefix(
                &lookup("API_PREFIX").unwrap_or_else(|| "/api".to_string()),
            ),
            database_max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|| "10".to_string())
                .parse()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
            database_connect_timeout_secs: lookup("DATABASE_CONNECT_TIMEOUT_SECS")
                .unwrap_or_else(|| "8".to_string())
                .parse()
                .context("DATABASE_CONNECT_TIMEOUT_SECS must be a number of seconds")?,
        })
    }
}

/// `DATABASE_URL` wins. Otherwise a MySQL URL is assembled from the
/// discrete `DB_*` variables.
fn database_url<F>(lookup: &F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup("DATABASE_URL") {
        return Ok(url);
    }

    let host = lookup("DB_HOST").unwrap_or_else(|| "localhost".to_string());
    let port: u16 = lookup("DB_PORT")
        .unwrap_or_else(|| "3306".to_string())
        .parse()
        .context("DB_PORT must be a valid port number")?;
    let user = lookup("DB_USER").context("DATABASE_URL or DB_USER must be set")?;
    let password = lookup("DB_PASSWORD").unwrap_or_default();
    let name = lookup("DB_NAME").context("DATABASE_URL or DB_NAME must be set")?;

    Ok(format!(
        "mysql://{}:{}@{}:{}/{}",
        urlencoding::encode(&user),
        urlencoding::encode(&password),
        host,
        port,
        name
    ))
}

/// Leading slash, no trailing slash. An empty result means "mount at root".
fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
