use serde::{Deserialize, Serialize};
use std::{net::IpAddr, path::Path};

/// Routes served by the application itself
pub const RESERVED_ROUTES: &[&str] = &["/", "/api/pizza", "/health", "/ready"];

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub body_limit_bytes: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MetricsConfig {
    pub enabled: bool,
    pub endpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
                body_limit_bytes: 16 * 1024,
            },
            metrics: MetricsConfig {
                enabled: true,
                endpoint: "/metrics".to_string(),
            },
        }
    }
}

/// Load configuration from `path` (optional) and `PIZZA_PRICING__*` env vars
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let defaults = Config::default();

    let config = config::Config::builder()
        .set_default("server.host", defaults.server.host)?
        .set_default("server.port", i64::from(defaults.server.port))?
        .set_default("server.body_limit_bytes", defaults.server.body_limit_bytes as i64)?
        .set_default("metrics.enabled", defaults.metrics.enabled)?
        .set_default("metrics.endpoint", defaults.metrics.endpoint)?
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix("PIZZA_PRICING").separator("__"))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    if cfg.server.host.parse::<IpAddr>().is_err() {
        anyhow::bail!("Server host '{}' is not a valid IP address", cfg.server.host);
    }

    if cfg.server.port == 0 {
        anyhow::bail!("Server port cannot be 0");
    }

    if cfg.server.body_limit_bytes == 0 {
        anyhow::bail!("Request body limit must be greater than 0");
    }

    if cfg.metrics.enabled {
        let endpoint = cfg.metrics.endpoint.as_str();
        if !endpoint.starts_with('/') {
            anyhow::bail!("Metrics endpoint '{}' must start with '/'", endpoint);
        }
        if RESERVED_ROUTES.contains(&endpoint) {
            anyhow::bail!("Metrics endpoint '{}' collides with an application route", endpoint);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_config_rejects_bad_host() {
        let mut cfg = Config::default();
        cfg.server.host = "pizza.local".to_string();

        let result = validate_config(&cfg);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not a valid IP address"));
    }

    #[test]
    fn test_validate_config_rejects_zero_port() {
        let mut cfg = Config::default();
        cfg.server.port = 0;

        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn test_validate_config_rejects_metrics_collision() {
        let mut cfg = Config::default();
        cfg.metrics.endpoint = "/api/pizza".to_string();

        let result = validate_config(&cfg);
        assert!(result.unwrap_err().to_string().contains("collides"));

        // Disabled metrics endpoint is never mounted
        cfg.metrics.enabled = false;
        assert!(validate_config(&cfg).is_ok());
    }

    #[test]
    fn test_load_config_without_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config(&dir.path().join("missing.toml")).unwrap();

        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.server.body_limit_bytes, 16 * 1024);
        assert!(cfg.metrics.enabled);
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[server]\nhost = \"127.0.0.1\"\nport = 8081\n\n[metrics]\nenabled = false"
        )
        .unwrap();

        let cfg = load_config(file.path()).unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 8081);
        assert!(!cfg.metrics.enabled);
        assert_eq!(cfg.metrics.endpoint, "/metrics");
    }
}
