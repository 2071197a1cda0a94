//! seatgrid.toml configuration parser.

use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_BIND: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_LOG_FILTER: &str = "info,seatd=debug,seatgrid=debug";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeatgridConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Origins allowed to call the API from a browser. Empty means any origin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allow_origins: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default = "default_log_filter")]
    pub filter: String,
    #[serde(default)]
    pub json: bool,
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

impl SeatgridConfig {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: SeatgridConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load `path` if given, otherwise fall back to defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Override file values with command-line flags.
    pub fn with_overrides(mut self, bind: Option<String>, port: Option<u16>) -> Self {
        if let Some(bind) = bind {
            self.server.bind = bind;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
        self
    }

    /// `bind:port` in a form `TcpListener::bind` accepts.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.bind, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SeatgridConfig::default();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.listen_addr(), "0.0.0.0:5000");
        assert!(config.cors.allow_origins.is_empty());
        assert!(!config.log.json);
    }

    #[test]
    fn test_parse_empty() {
        let config: SeatgridConfig = toml::from_str("").unwrap();
        assert_eq!(config, SeatgridConfig::default());
    }

    #[test]
    fn test_parse_partial() {
        let toml_str = r#"
[server]
port = 8080

[cors]
allow_origins = ["http://localhost:3000"]
"#;
        let config: SeatgridConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.bind, "0.0.0.0");
        assert_eq!(config.cors.allow_origins, vec!["http://localhost:3000"]);
        assert_eq!(config.log.filter, "info,seatd=debug,seatgrid=debug");
    }

    #[test]
    fn test_overrides_win() {
        let config = SeatgridConfig::default().with_overrides(Some("127.0.0.1".to_string()), Some(9000));
        assert_eq!(config.listen_addr(), "127.0.0.1:9000");

        let untouched = SeatgridConfig::default().with_overrides(None, None);
        assert_eq!(untouched, SeatgridConfig::default());
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seatgrid.toml");

        let mut config = SeatgridConfig::default();
        config.log.json = true;
        std::fs::write(&path, config.to_toml_string().unwrap()).unwrap();

        let loaded = SeatgridConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(SeatgridConfig::load(Some(&dir.path().join("nope.toml"))).is_err());
    }
}
