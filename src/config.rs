// src/config.rs

use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;
use rand::RngCore;

use crate::quiz::DEFAULT_OPTION_COUNT;

/// One week, matching the lifetime of tokens issued at registration.
const DEFAULT_JWT_EXPIRATION: u64 = 60 * 60 * 24 * 7;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} has an invalid value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres connection string. `None` runs the service on the in-memory store.
    pub database_url: Option<String>,
    pub jwt_secret: String,
    pub jwt_expiration: u64,
    pub rust_log: String,
    pub port: u16,
    pub destinations_path: PathBuf,
    /// Number of options offered per question, correct answer included.
    pub question_options: usize,
    /// Allowed CORS origins. Empty means any origin.
    pub cors_origins: Vec<String>,
    pub log_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from `lookup`, which returns the raw value for a key.
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let database_url = var("DATABASE_URL");

        let jwt_secret = var("JWT_SECRET").unwrap_or_else(random_secret);

        let jwt_expiration = parse_var(&var, "JWT_EXPIRATION", DEFAULT_JWT_EXPIRATION)?;

        let rust_log = var("RUST_LOG").unwrap_or_else(|| "info".to_string());

        let port = parse_var(&var, "PORT", 8000)?;

        let destinations_path = var("DESTINATIONS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("data/destinations.json"));

        let question_options: usize =
            parse_var(&var, "QUESTION_OPTIONS", DEFAULT_OPTION_COUNT)?;
        if question_options == 0 {
            return Err(ConfigError::Invalid {
                key: "QUESTION_OPTIONS",
                value: question_options.to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        let cors_origins = var("CORS_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .unwrap_or_default();

        let log_dir = var("LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("logs"));

        Ok(Self {
            database_url,
            jwt_secret,
            jwt_expiration,
            rust_log,
            port,
            destinations_path,
            question_options,
            cors_origins,
            log_dir,
        })
    }
}

fn parse_var<T, F>(var: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match var(key) {
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            value,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}

/// Splits a comma-separated origin list. `*` anywhere in the list allows every origin.
fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect();

    if origins.iter().any(|origin| origin == "*") {
        Vec::new()
    } else {
        origins
    }
}

fn random_secret() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
