//! Process configuration read from the environment.
//!
//! Built once at startup and handed to [`crate::api::App`].

use crate::models::MAX_LENGTH;
use std::error::Error;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_HTTP_PORT: u16 = 8000;
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// Runtime settings of the HTTP service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Address the listener binds to.
    pub bind_addr: IpAddr,
    /// Port the listener binds to.
    pub http_port: u16,
    /// Lowest `cidr` value accepted by the `/ipcalc` endpoint.
    pub min_prefix_len: u8,
    /// Path of the log4rs YAML file.
    pub log_config: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            http_port: DEFAULT_HTTP_PORT,
            min_prefix_len: 0,
            log_config: DEFAULT_LOG_CONFIG.to_string(),
        }
    }
}

impl Config {
    /// Read the configuration from process environment variables.
    ///
    /// Call `dotenv::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// # Arguments
    /// * `lookup` - returns the value of a variable, `None` (or empty) when unset
    ///
    /// # Returns
    /// * `Ok(Config)` - defaults overridden by whatever was set
    /// * `Err` - if a set value does not parse
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Config::default();

        if let Some(port) = get("HTTP_PORT") {
            config.http_port = port
                .trim()
                .parse()
                .map_err(|e| format!("Invalid HTTP_PORT {port}: {e}"))?;
        }
        if let Some(addr) = get("IPCALC_BIND_ADDR") {
            config.bind_addr = addr
                .trim()
                .parse()
                .map_err(|e| format!("Invalid IPCALC_BIND_ADDR {addr}: {e}"))?;
        }
        if let Some(min) = get("IPCALC_MIN_PREFIX") {
            let min: u8 = min
                .trim()
                .parse()
                .map_err(|e| format!("Invalid IPCALC_MIN_PREFIX {min}: {e}"))?;
            if min > MAX_LENGTH {
                return Err(format!("IPCALC_MIN_PREFIX {min} is above {MAX_LENGTH}").into());
            }
            config.min_prefix_len = min;
        }
        if let Some(path) = get("IPCALC_LOG_CONFIG") {
            config.log_config = path;
        }

        Ok(config)
    }

    /// Socket address the HTTP server listens on.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.http_port)
    }
}
