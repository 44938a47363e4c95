//! Auth service configuration.

use std::env;

use common::{DatabaseConfig, ServerConfig};

/// Auth service configuration.
#[derive(Debug, Clone, Default)]
pub struct AuthServiceConfig {
    /// User directory database
    pub database: DatabaseConfig,
    /// HTTP listener
    pub server: ServerConfig,
}

impl AuthServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup, falling back to
    /// defaults for missing or unparsable values.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_defaults = DatabaseConfig::default();
        let server_defaults = ServerConfig::default();

        Self {
            database: DatabaseConfig {
                url: lookup("AUTH_SERVICE_DATABASE_URL")
                    .or_else(|| lookup("DATABASE_URL"))
                    .or_else(|| lookup("POSTGRES_URL"))
                    .unwrap_or(database_defaults.url),
                max_connections: lookup("AUTH_SERVICE_DB_MAX_CONNECTIONS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(database_defaults.max_connections),
                min_connections: lookup("AUTH_SERVICE_DB_MIN_CONNECTIONS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(database_defaults.min_connections),
                connect_timeout_secs: lookup("AUTH_SERVICE_DB_CONNECT_TIMEOUT_SECS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(database_defaults.connect_timeout_secs),
            },
            server: ServerConfig {
                host: lookup("AUTH_SERVICE_HOST").unwrap_or(server_defaults.host),
                port: lookup("AUTH_SERVICE_PORT")
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(server_defaults.port),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AuthServiceConfig::from_lookup(lookup_from(&[]));

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.database.max_connections, 10);
        assert!(config.database.url.starts_with("postgres://"));
    }

    #[test]
    fn test_database_url_fallback_order() {
        let config = AuthServiceConfig::from_lookup(lookup_from(&[
            ("POSTGRES_URL", "postgres://pg/app"),
            ("DATABASE_URL", "postgres://db/app"),
        ]));
        assert_eq!(config.database.url, "postgres://db/app");

        let config =
            AuthServiceConfig::from_lookup(lookup_from(&[("POSTGRES_URL", "postgres://pg/app")]));
        assert_eq!(config.database.url, "postgres://pg/app");
    }

    #[test]
    fn test_unparsable_numbers_fall_back() {
        let config = AuthServiceConfig::from_lookup(lookup_from(&[
            ("AUTH_SERVICE_PORT", "not-a-port"),
            ("AUTH_SERVICE_DB_MAX_CONNECTIONS", "25"),
        ]));

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.database.max_connections, 25);
    }
}
