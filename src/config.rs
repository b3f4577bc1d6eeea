//! Configuration loading from `stat-criteria.toml`.
//!
//! The file is discovered by walking up from the current directory; every
//! field is optional and falls back to its default.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::generate::Sizes;

/// Name of the configuration file looked up by [`Config::discover`].
pub const CONFIG_FILE: &str = "stat-criteria.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Data generator defaults
    #[serde(default)]
    pub generator: GeneratorConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    /// Address to bind
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
    /// Maximum accepted request body in bytes
    #[serde(default = "default_body_limit")]
    pub body_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            body_limit: default_body_limit(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    5000
}
fn default_body_limit() -> usize {
    1024 * 1024
}

/// Defaults for generated data
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratorConfig {
    /// Sample size when none is requested
    #[serde(default = "default_n")]
    pub n: usize,
    /// Number of groups when none is requested
    #[serde(default = "default_k")]
    pub k: usize,
    /// Decimal places kept in generated values
    #[serde(default = "default_decimals")]
    pub decimals: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            n: default_n(),
            k: default_k(),
            decimals: default_decimals(),
        }
    }
}

fn default_n() -> usize {
    10
}
fn default_k() -> usize {
    3
}
fn default_decimals() -> u32 {
    3
}

impl GeneratorConfig {
    /// Fills unspecified sizes from the configured defaults.
    pub fn sizes(
        &self,
        n: Option<usize>,
        n1: Option<usize>,
        n2: Option<usize>,
        k: Option<usize>,
    ) -> Sizes {
        Sizes {
            n: n.unwrap_or(self.n),
            n1,
            n2,
            k: k.unwrap_or(self.k),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        debug!(path = %path.as_ref().display(), "loaded configuration");
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join(CONFIG_FILE);
            if config_path.exists() {
                return Self::load(&config_path).ok();
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// `host:port` the server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# stat-criteria configuration

[server]
# Address and port of the HTTP server
host = "127.0.0.1"
port = 5000
# Maximum request body in bytes
body_limit = 1048576

[generator]
# Sample size used when a request gives none
n = 10
# Number of groups for Cochran, Bartlett and ANOVA
k = 3
# Decimal places kept in generated values
decimals = 3
"#
        .to_string()
    }
}
