use std::env;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Environment configuration
/// Loads and validates environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub token_ttl_hours: i64,
    pub rate_limit_per_second: u32,
    pub rate_limit_burst: u32,
    pub mail_webhook_url: Option<String>,
    pub mail_from: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let database_url = required("DATABASE_URL")?;
        let jwt_secret = required("JWT_SECRET")?;

        let mail_webhook_url = lookup("MAIL_WEBHOOK_URL").filter(|url| !url.trim().is_empty());
        let mail_from = lookup("MAIL_FROM")
            .unwrap_or_else(|| "RescueHub <no-reply@rescuehub.local>".to_string());

        Ok(Self {
            database_url,
            jwt_secret,
            port: parse_or(&lookup, "PORT", 8080)?,
            db_max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 10)?,
            token_ttl_hours: parse_or(&lookup, "TOKEN_TTL_HOURS", 3)?,
            rate_limit_per_second: parse_or(&lookup, "RATE_LIMIT_PER_SECOND", 50)?,
            rate_limit_burst: parse_or(&lookup, "RATE_LIMIT_BURST", 100)?,
            mail_webhook_url,
            mail_from,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}
