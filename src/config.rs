//! Server configuration
//!
//! `ad_server_conf.json`:
//!
//! ```json
//! {
//!     "server_host": "0.0.0.0",
//!     "server_port": 8000,
//!     "privileged_ips": ["127.0.0.1"],
//!     "ads_dir": "./ads"
//! }
//! ```
//!
//! The file goes through the same schema validator as the catalog before it
//! is decoded, so every malformed field is reported at once.

use std::fs;
use std::io;
use std::net::{IpAddr, Ipv4Addr};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::info;

use crate::codec::ipv4_transformer;
use crate::schema::{SchemaError, SchemaNode, SchemaValidator};

/// Default configuration file location
pub const DEFAULT_CONFIG_PATH: &str = "./conf/ad_server_conf.json";

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to open configuration file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Configuration is not valid JSON: {0}")]
    Json(#[source] serde_json::Error),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("Invalid configuration value: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Ad server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdServerConfig {
    /// Host to bind to
    pub server_host: String,

    /// Port to bind to
    pub server_port: u16,

    /// Clients allowed to override the query time and read internal endpoints
    pub privileged_ips: Vec<Ipv4Addr>,

    /// Directory holding `banner_ads.json` and `banner_ads.md5` (default: "./ads")
    #[serde(default = "default_ads_dir")]
    pub ads_dir: PathBuf,
}

fn default_ads_dir() -> PathBuf {
    PathBuf::from("./ads")
}

/// Schema of the configuration file
pub fn config_schema() -> SchemaNode {
    SchemaNode::object([
        ("server_host", SchemaNode::string()),
        ("server_port", SchemaNode::int()),
        (
            "privileged_ips",
            SchemaNode::list_of(SchemaNode::transform("ipv4", ipv4_transformer)),
        ),
    ])
}

impl AdServerConfig {
    /// Loads configuration from file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        info!(path = %path.display(), "loading configuration");
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&content)?;
        info!(path = %path.display(), addr = %config.socket_addr(), "finished loading configuration");
        Ok(config)
    }

    /// Parses and validates configuration text
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        let raw: Value = serde_json::from_str(content).map_err(ConfigError::Json)?;

        let schema = config_schema();
        let validator = SchemaValidator::new(&schema)?;
        let validated = validator.validate_document("ad_server_conf", &raw)?;

        serde_json::from_value(validated).map_err(ConfigError::Decode)
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Returns whether `ip` is a privileged client.
    ///
    /// IPv4-mapped IPv6 peers are compared by their IPv4 address.
    pub fn is_privileged(&self, ip: IpAddr) -> bool {
        let v4 = match ip {
            IpAddr::V4(v4) => Some(v4),
            IpAddr::V6(v6) => v6.to_ipv4_mapped(),
        };
        v4.map_or(false, |v4| self.privileged_ips.contains(&v4))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv6Addr;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"{
        "server_host": "127.0.0.1",
        "server_port": 8000,
        "privileged_ips": ["127.0.0.1", "10.0.0.7"]
    }"#;

    #[test]
    fn test_parse_config() {
        let config = AdServerConfig::from_json_str(SAMPLE).unwrap();
        assert_eq!(config.server_host, "127.0.0.1");
        assert_eq!(config.server_port, 8000);
        assert_eq!(config.privileged_ips.len(), 2);
        assert_eq!(config.ads_dir, PathBuf::from("./ads"));
        assert_eq!(config.socket_addr(), "127.0.0.1:8000");
    }

    #[test]
    fn test_ads_dir_override() {
        let text = SAMPLE.replace("\"server_port\": 8000,", "\"server_port\": 8000, \"ads_dir\": \"/srv/ads\",");
        let config = AdServerConfig::from_json_str(&text).unwrap();
        assert_eq!(config.ads_dir, PathBuf::from("/srv/ads"));
    }

    #[test]
    fn test_invalid_ip_rejected() {
        let text = SAMPLE.replace("10.0.0.7", "10.0.0");
        let err = AdServerConfig::from_json_str(&text).unwrap_err();
        match err {
            ConfigError::Schema(e) => assert_eq!(e.details()[0].field, "privileged_ips[1]"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_all_failures_reported() {
        let err = AdServerConfig::from_json_str(r#"{"server_port": "8000", "privileged_ips": "127.0.0.1"}"#)
            .unwrap_err();
        match err {
            ConfigError::Schema(e) => assert_eq!(e.details().len(), 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_port_out_of_range() {
        let text = SAMPLE.replace("8000", "70000");
        assert!(matches!(AdServerConfig::from_json_str(&text), Err(ConfigError::Decode(_))));
    }

    #[test]
    fn test_privileged_check() {
        let config = AdServerConfig::from_json_str(SAMPLE).unwrap();
        assert!(config.is_privileged(IpAddr::V4(Ipv4Addr::LOCALHOST)));
        assert!(config.is_privileged(IpAddr::V6(Ipv4Addr::new(10, 0, 0, 7).to_ipv6_mapped())));
        assert!(!config.is_privileged(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 8))));
        assert!(!config.is_privileged(IpAddr::V6(Ipv6Addr::LOCALHOST)));
    }

    #[test]
    fn test_load_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("ad_server_conf.json");
        fs::write(&path, SAMPLE).unwrap();
        assert!(AdServerConfig::load(&path).is_ok());

        let missing = tmp.path().join("missing.json");
        assert!(matches!(AdServerConfig::load(&missing), Err(ConfigError::Read { .. })));
    }
}
