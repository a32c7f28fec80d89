use std::net::SocketAddr;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub run_migrations: bool,
    /// Empty means same-origin only
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let bind_addr = lookup("TRACKER_BIND_ADDR")
            .and_then(|raw| match raw.parse() {
                Ok(addr) => Some(addr),
                Err(e) => {
                    tracing::warn!(%raw, "invalid TRACKER_BIND_ADDR, using {DEFAULT_BIND_ADDR}: {e}");
                    None
                }
            })
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 8080)));

        let run_migrations = lookup("TRACKER_RUN_MIGRATIONS")
            .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "false" | "0" | "no"))
            .unwrap_or(true);

        let cors_origins = lookup("CORS_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            bind_addr,
            run_migrations,
            cors_origins,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]);
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert!(config.run_migrations);
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn reads_overrides() {
        let config = config(&[
            ("TRACKER_BIND_ADDR", "127.0.0.1:3000"),
            ("TRACKER_RUN_MIGRATIONS", "false"),
            ("CORS_ORIGINS", "http://localhost:5173, https://tracker.example ,"),
        ]);
        assert_eq!(config.bind_addr.port(), 3000);
        assert!(!config.run_migrations);
        assert_eq!(
            config.cors_origins,
            ["http://localhost:5173", "https://tracker.example"]
        );
    }

    #[test]
    fn invalid_bind_addr_falls_back() {
        let config = config(&[("TRACKER_BIND_ADDR", "localhost")]);
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
    }
}
