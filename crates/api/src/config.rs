use axum::http::HeaderValue;

/// Database used when `DATABASE_URL` is unset.
pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost:5432/starwars";

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got '{value}'")]
    InvalidNumber {
        var: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("ADMIN_ENABLED must be true or false, got '{0}'")]
    InvalidFlag(String),

    #[error("Invalid CORS origin '{0}'")]
    InvalidOrigin(String),
}

/// Which origins the CORS layer accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum CorsOrigins {
    /// `*`: any origin, without credentials.
    Any,
    /// An explicit allow-list, with credentials.
    List(Vec<HeaderValue>),
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Database connection string (default: [`DEFAULT_DATABASE_URL`]).
    pub database_url: String,
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: CorsOrigins,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Whether the read-only `/admin` browser is mounted (default: `true`).
    pub admin_enabled: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                               |
    /// |------------------------|---------------------------------------|
    /// | `DATABASE_URL`         | `postgres://localhost:5432/starwars`  |
    /// | `HOST`                 | `0.0.0.0`                             |
    /// | `PORT`                 | `3000`                                |
    /// | `CORS_ORIGINS`         | `*`                                   |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                  |
    /// | `ADMIN_ENABLED`        | `true`                                |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let database_url = var("DATABASE_URL", DEFAULT_DATABASE_URL);
        let host = var("HOST", "0.0.0.0");

        let raw_port = var("PORT", "3000");
        let port = raw_port
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidNumber {
                var: "PORT",
                expected: "u16",
                value: raw_port.clone(),
            })?;

        let raw_timeout = var("REQUEST_TIMEOUT_SECS", "30");
        let request_timeout_secs =
            raw_timeout
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidNumber {
                    var: "REQUEST_TIMEOUT_SECS",
                    expected: "u64",
                    value: raw_timeout.clone(),
                })?;

        let cors_origins = parse_cors_origins(&var("CORS_ORIGINS", "*"))?;
        let admin_enabled = parse_flag(&var("ADMIN_ENABLED", "true"))?;

        Ok(Self {
            database_url,
            host,
            port,
            cors_origins,
            request_timeout_secs,
            admin_enabled,
        })
    }
}

fn parse_cors_origins(raw: &str) -> Result<CorsOrigins, ConfigError> {
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
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidOrigin(origin.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(CorsOrigins::List)
}

fn parse_flag(raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag(raw.to_string())),
    }
}
