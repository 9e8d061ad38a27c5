use axum::http::HeaderValue;

/// Which origins the CORS layer admits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// `*`: any origin (no credentials).
    Any,
    /// An explicit allow-list.
    List(Vec<HeaderValue>),
}

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got '{value}'")]
    InvalidNumber {
        var: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("Invalid CORS origin '{0}'")]
    InvalidOrigin(String),
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// sqlx connection string.
    pub database_url: String,
    /// Pool size (default: `5`).
    pub db_max_connections: u32,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: CorsOrigins,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                           |
    /// |------------------------|-----------------------------------|
    /// | `HOST`                 | `0.0.0.0`                         |
    /// | `PORT`                 | `5000`                            |
    /// | `DATABASE_URL`         | `sqlite://volantines.db?mode=rwc` |
    /// | `DB_MAX_CONNECTIONS`   | `5`                               |
    /// | `CORS_ORIGINS`         | `*`                               |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                              |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.into());

        let host = var("HOST", "0.0.0.0");
        let port = parse_number("PORT", "u16", var("PORT", "5000"))?;
        let database_url = var("DATABASE_URL", "sqlite://volantines.db?mode=rwc");
        let db_max_connections =
            parse_number("DB_MAX_CONNECTIONS", "u32", var("DB_MAX_CONNECTIONS", "5"))?;
        let cors_origins = parse_origins(&var("CORS_ORIGINS", "*"))?;
        let request_timeout_secs = parse_number(
            "REQUEST_TIMEOUT_SECS",
            "u64",
            var("REQUEST_TIMEOUT_SECS", "30"),
        )?;

        Ok(Self {
            host,
            port,
            database_url,
            db_max_connections,
            cors_origins,
            request_timeout_secs,
        })
    }
}

fn parse_number<T: std::str::FromStr>(
    var: &'static str,
    expected: &'static str,
    value: String,
) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber {
            var,
            expected,
            value,
        })
}

fn parse_origins(raw: &str) -> Result<CorsOrigins, ConfigError> {
    let entries: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if entries.is_empty() || entries.contains(&"*") {
        return Ok(CorsOrigins::Any);
    }

    entries
        .into_iter()
        .map(|o| HeaderValue::from_str(o).map_err(|_| ConfigError::InvalidOrigin(o.to_string())))
        .collect::<Result<Vec<_>, _>>()
        .map(CorsOrigins::List)
}
