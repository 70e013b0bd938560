//! Database connection settings.

use std::time::Duration;

use sqlx::postgres::PgConnectOptions;

/// PostgreSQL connection parameters, built once at startup.
///
/// Reads from environment variables:
/// - `POSTGRES_USER` (default: `"postgres"`)
/// - `POSTGRES_PASSWORD` (default: `"postgres"`)
/// - `POSTGRES_DB` (default: `"coursesdb"`)
/// - `POSTGRES_HOST` (default: `"postgres"`)
/// - `POSTGRES_PORT` (default: `5432`)
/// - `DATABASE_MAX_CONNECTIONS` (default: `5`)
/// - `DATABASE_ACQUIRE_TIMEOUT_SECS` (default: `5`)
#[derive(Clone)]
pub struct DatabaseConfig {
    pub user: String,
    pub password: String,
    pub database: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, falling back to defaults for
    /// missing or unparseable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            user: lookup("POSTGRES_USER").unwrap_or(defaults.user),
            password: lookup("POSTGRES_PASSWORD").unwrap_or(defaults.password),
            database: lookup("POSTGRES_DB").unwrap_or(defaults.database),
            host: lookup("POSTGRES_HOST").unwrap_or(defaults.host),
            port: lookup("POSTGRES_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .and_then(|n| n.parse().ok())
                .unwrap_or(defaults.max_connections),
            acquire_timeout: lookup("DATABASE_ACQUIRE_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.acquire_timeout),
        }
    }

    /// Connection options for sqlx. Values are passed as-is, so the
    /// password needs no URL escaping.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database)
    }

    /// Connection URL with the password masked, for logs.
    pub fn database_url(&self) -> String {
        format!(
            "postgresql://{}:***@{}:{}/{}",
            self.user, self.host, self.port, self.database
        )
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            user: "postgres".to_string(),
            password: "postgres".to_string(),
            database: "coursesdb".to_string(),
            host: "postgres".to_string(),
            port: 5432,
            max_connections: 5,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("user", &self.user)
            .field("password", &"***")
            .field("database", &self.database)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout", &self.acquire_timeout)
            .finish()
    }
}
