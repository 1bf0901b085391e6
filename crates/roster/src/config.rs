use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to SQLite database file (default: "employees.db")
    pub sqlite_path: String,
    /// How long a connection waits on a locked database, in milliseconds (default: 5,000)
    pub sqlite_busy_timeout_ms: u64,
    /// Request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
    /// Report 404 when update/delete match no row (default: false)
    pub strict_not_found: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SQLITE_PATH` - SQLite database path (default: "employees.db")
    /// - `SQLITE_BUSY_TIMEOUT_MS` - Busy timeout per connection (default: 5,000)
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout (default: 10)
    /// - `STRICT_NOT_FOUND` - `1`, `true` or `yes` to enable (default: false)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup, falling back to
    /// defaults for missing or unparsable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            sqlite_path: lookup("SQLITE_PATH").unwrap_or(defaults.sqlite_path),
            sqlite_busy_timeout_ms: lookup("SQLITE_BUSY_TIMEOUT_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.sqlite_busy_timeout_ms),
            request_timeout_seconds: lookup("REQUEST_TIMEOUT_SECONDS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_seconds),
            strict_not_found: lookup("STRICT_NOT_FOUND")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.strict_not_found),
        }
    }

    /// Get the SQLite busy timeout as a Duration.
    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.sqlite_busy_timeout_ms)
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sqlite_path: "employees.db".to_string(),
            sqlite_busy_timeout_ms: 5_000,
            request_timeout_seconds: 10,
            strict_not_found: false,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}
