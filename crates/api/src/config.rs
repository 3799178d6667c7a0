//! Process configuration.

/// Connection settings for the balance store.
///
/// Read once at startup and passed down explicitly; nothing below `main`
/// looks at the environment, which keeps the ledger testable in isolation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub host: String,
    pub port: u16,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 6379,
        }
    }
}

impl StoreConfig {
    /// Build from `REDIS_HOST` / `REDIS_PORT`, defaulting to `localhost:6379`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let host = std::env::var("REDIS_HOST").unwrap_or(defaults.host);
        let port = std::env::var("REDIS_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);
        Self { host, port }
    }

    pub fn url(&self) -> String {
        format!("redis://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_url_points_at_local_redis() {
        assert_eq!(StoreConfig::default().url(), "redis://localhost:6379");
    }

    #[test]
    fn url_combines_host_and_port() {
        let config = StoreConfig {
            host: "cache.internal".to_string(),
            port: 6380,
        };
        assert_eq!(config.url(), "redis://cache.internal:6380");
    }
}
