//! Application configuration loaded from environment variables.

use course_store::DatabaseConfig;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `5000`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `LOG_FORMAT` — `"json"` for JSON lines, anything else for human-readable output
///
/// Database settings are described on [`DatabaseConfig`].
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub log_format: LogFormat,
    pub database: DatabaseConfig,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            log_level: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            log_format: lookup("LOG_FORMAT")
                .map(|f| LogFormat::parse(&f))
                .unwrap_or_default(),
            database: DatabaseConfig::from_lookup(&lookup),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            database: DatabaseConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.database.database, "coursesdb");
    }

    #[test]
    fn test_empty_environment_matches_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.addr(), Config::default().addr());
        assert_eq!(config.database.port, 5432);
    }

    #[test]
    fn test_lookup_overrides() {
        let config = Config::from_lookup(|key| match key {
            "PORT" => Some("8081".to_string()),
            "LOG_FORMAT" => Some("JSON".to_string()),
            "POSTGRES_HOST" => Some("localhost".to_string()),
            _ => None,
        });
        assert_eq!(config.port, 8081);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.database.host, "localhost");
    }

    #[test]
    fn test_invalid_port_falls_back() {
        let config = Config::from_lookup(|key| (key == "PORT").then(|| "http".to_string()));
        assert_eq!(config.port, 5000);
    }

    #[test]
    fn test_addr_formatting() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            ..Config::default()
        };
        assert_eq!(config.addr(), "127.0.0.1:8080");
    }
}
