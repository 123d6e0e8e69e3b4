/// Database connection configuration loaded from environment variables.
///
/// Everything except the URL has a default suitable for local development.
#[derive(Debug, Clone, PartialEq)]
pub struct DbConfig {
    /// PostgreSQL connection URL (`DATABASE_URL`, required).
    pub database_url: String,
    /// Pool size (default: `20`).
    pub max_connections: u32,
    /// How long a caller waits for a pooled connection (default: `30`).
    pub acquire_timeout_secs: u64,
    /// Server-side `statement_timeout` in milliseconds. `None` leaves the
    /// server default in place.
    pub statement_timeout_ms: Option<u64>,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} must be a positive integer, got {value:?}")]
    Invalid { var: &'static str, value: String },
}

impl DbConfig {
    /// Configuration with defaults for everything but the URL.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: 20,
            acquire_timeout_secs: 30,
            statement_timeout_ms: None,
        }
    }

    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default |
    /// |---------------------------|---------|
    /// | `DATABASE_URL`            | required|
    /// | `DB_MAX_CONNECTIONS`      | `20`    |
    /// | `DB_ACQUIRE_TIMEOUT_SECS` | `30`    |
    /// | `DB_STATEMENT_TIMEOUT_MS` | unset   |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reading from `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let mut config = Self::new(database_url);
        if let Some(n) = parse_positive(&lookup, "DB_MAX_CONNECTIONS")? {
            config.max_connections = u32::try_from(n).map_err(|_| ConfigError::Invalid {
                var: "DB_MAX_CONNECTIONS",
                value: n.to_string(),
            })?;
        }
        if let Some(secs) = parse_positive(&lookup, "DB_ACQUIRE_TIMEOUT_SECS")? {
            config.acquire_timeout_secs = secs;
        }
        config.statement_timeout_ms = parse_positive(&lookup, "DB_STATEMENT_TIMEOUT_MS")?;

        Ok(config)
    }
}

fn parse_positive(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<u64>, ConfigError> {
    let Some(raw) = lookup(var) else {
        return Ok(None);
    };
    match raw.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(Some(n)),
        _ => Err(ConfigError::Invalid { var, value: raw }),
    }
}
