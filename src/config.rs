//! Service configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`).

use std::net::SocketAddr;
use std::time::Duration;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    Text,
    /// One JSON object per event.
    Json,
}

/// Top-level configuration.
///
/// Loaded once at startup via [`HotelConfig::from_env`].
#[derive(Debug, Clone)]
pub struct HotelConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3000`).
    pub listen_addr: SocketAddr,

    /// Store settings.
    pub database: DatabaseConfig,

    /// Upper bound on the time spent serving one HTTP request.
    pub request_timeout_secs: u64,

    /// Log output format.
    pub log_format: LogFormat,
}

/// Settings for the SQLite connection pool.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// SQLite connection string.
    pub url: String,

    /// Maximum number of connections in the pool.
    pub max_connections: u32,

    /// Minimum idle connections in the pool.
    pub min_connections: u32,

    /// Timeout in seconds for acquiring a connection.
    pub connect_timeout_secs: u64,

    /// Whether SQLite enforces foreign keys on write.
    pub foreign_keys: bool,
}

impl DatabaseConfig {
    /// Settings for a private in-memory database, mostly for tests.
    ///
    /// A single connection keeps every statement on the same database.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            connect_timeout_secs: 5,
            foreign_keys: false,
        }
    }

    /// Connection acquire timeout as a [`Duration`].
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl HotelConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to sensible defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> Result<Self, std::net::AddrParseError> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()?;

        let database = DatabaseConfig {
            url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://hotel.db?mode=rwc".to_string()),
            max_connections: parse_env("DATABASE_MAX_CONNECTIONS", 5),
            min_connections: parse_env("DATABASE_MIN_CONNECTIONS", 1),
            connect_timeout_secs: parse_env("DATABASE_CONNECT_TIMEOUT_SECS", 5),
            foreign_keys: parse_env_bool("DATABASE_FOREIGN_KEYS", false),
        };

        let request_timeout_secs = parse_env("REQUEST_TIMEOUT_SECS", 30);

        let log_format = match std::env::var("LOG_FORMAT").ok().as_deref() {
            Some("json") | Some("JSON") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Ok(Self {
            listen_addr,
            database,
            request_timeout_secs,
            log_format,
        })
    }

    /// Request timeout as a [`Duration`].
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Parses an environment variable as a boolean. Accepts `"true"`, `"1"`,
/// `"false"`, `"0"` (case-insensitive). Returns `default` otherwise.
fn parse_env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .and_then(|v| parse_bool(&v))
        .unwrap_or(default)
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bool_is_case_insensitive() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool("True"), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("yes"), None);
    }

    #[test]
    fn parse_env_falls_back_on_missing_key() {
        let value: u32 = parse_env("HOTEL_DESK_TEST_UNSET_KEY", 7);
        assert_eq!(value, 7);
    }

    #[test]
    fn in_memory_uses_single_connection() {
        let db = DatabaseConfig::in_memory();
        assert_eq!(db.max_connections, 1);
        assert!(!db.foreign_keys);
        assert_eq!(db.connect_timeout(), Duration::from_secs(5));
    }
}
