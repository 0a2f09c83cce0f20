//! Configuration loading and resolution
//!
//! Tiered resolution, highest priority first:
//! 1. Command-line arguments (applied by the binary)
//! 2. `LECTIO_*` environment variables
//! 3. TOML config file (`~/.config/lectio/config.toml`, then
//!    `/etc/lectio/config.toml` on Linux)
//! 4. Compiled defaults

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Default per-attempt upstream request timeout (milliseconds)
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 5000;

/// Default liturgical zone when the caller does not specify one
pub const DEFAULT_ZONE: &str = "france";

/// Service configuration
///
/// `mass_endpoints` are URL templates tried in order; `{date}` and `{zone}`
/// placeholders are substituted per request. Later entries are fallbacks for
/// when earlier ones are unreachable or return unusable payloads.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address the HTTP server binds to
    pub bind_host: String,
    /// Port the HTTP server binds to
    pub bind_port: u16,
    /// Zone used when a request omits the `zone` query parameter
    pub default_zone: String,
    /// Per-attempt upstream request timeout in milliseconds
    pub fetch_timeout_ms: u64,
    /// Ordered candidate endpoint templates for mass readings
    pub mass_endpoints: Vec<String>,
    /// Endpoint template for the liturgy of the hours
    pub office_endpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_host: "127.0.0.1".to_string(),
            bind_port: 5780,
            default_zone: DEFAULT_ZONE.to_string(),
            fetch_timeout_ms: DEFAULT_FETCH_TIMEOUT_MS,
            mass_endpoints: vec![
                "https://api.aelf.org/v1/messes/{date}/{zone}".to_string(),
                "https://api.aelf.org/v1/messes/{date}".to_string(),
                "https://www.aelf.org/api/v1/messes/{date}".to_string(),
            ],
            office_endpoint: "https://api.aelf.org/v1/{office}/{date}/{zone}".to_string(),
        }
    }
}

impl Config {
    /// Load configuration with tiered resolution (ENV over TOML over defaults)
    ///
    /// `explicit_path` comes from the command line and, when given, must
    /// exist; otherwise the platform config locations are probed and a
    /// missing file simply means compiled defaults.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = match Self::locate_file(explicit_path)? {
            Some(path) => {
                let content = std::fs::read_to_string(&path)?;
                let parsed: Config = toml::from_str(&content)
                    .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
                info!("Configuration loaded from {}", path.display());
                parsed
            }
            None => {
                info!("No config file found, using compiled defaults");
                Config::default()
            }
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Find the config file to use, if any
    fn locate_file(explicit_path: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit_path {
            if path.exists() {
                return Ok(Some(path.to_path_buf()));
            }
            return Err(Error::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        if let Some(path) = dirs::config_dir().map(|d| d.join("lectio").join("config.toml")) {
            if path.exists() {
                return Ok(Some(path));
            }
        }

        if cfg!(target_os = "linux") {
            let system_config = PathBuf::from("/etc/lectio/config.toml");
            if system_config.exists() {
                return Ok(Some(system_config));
            }
        }

        Ok(None)
    }

    /// Apply `LECTIO_*` environment variable overrides
    fn apply_env_overrides(&mut self) {
        if let Ok(host) = std::env::var("LECTIO_HOST") {
            info!("Bind host overridden from environment");
            self.bind_host = host;
        }
        if let Ok(port) = std::env::var("LECTIO_PORT") {
            match port.parse() {
                Ok(port) => {
                    info!("Bind port overridden from environment");
                    self.bind_port = port;
                }
                Err(_) => warn!("Ignoring non-numeric LECTIO_PORT: {}", port),
            }
        }
        if let Ok(zone) = std::env::var("LECTIO_ZONE") {
            info!("Default zone overridden from environment");
            self.default_zone = zone;
        }
        if let Ok(timeout) = std::env::var("LECTIO_FETCH_TIMEOUT_MS") {
            match timeout.parse() {
                Ok(ms) => {
                    info!("Fetch timeout overridden from environment");
                    self.fetch_timeout_ms = ms;
                }
                Err(_) => warn!("Ignoring non-numeric LECTIO_FETCH_TIMEOUT_MS: {}", timeout),
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if self.mass_endpoints.is_empty() {
            return Err(Error::Config(
                "mass_endpoints must list at least one candidate".to_string(),
            ));
        }
        if self.fetch_timeout_ms == 0 {
            return Err(Error::Config(
                "fetch_timeout_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
