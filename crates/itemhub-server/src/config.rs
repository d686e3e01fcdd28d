//! Server configuration read from environment variables.
//!
//! - `ITEMHUB_HOST`: listen address (default: "0.0.0.0")
//! - `ITEMHUB_PORT`: listen port (default: "5000")
//! - `ITEMHUB_ID_POLICY`: "length" or "monotonic" (default: "length")

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use itemhub_store::{IdPolicy, ParseIdPolicyError};

pub const HOST_VAR: &str = "ITEMHUB_HOST";
pub const PORT_VAR: &str = "ITEMHUB_PORT";
pub const ID_POLICY_VAR: &str = "ITEMHUB_ID_POLICY";

/// Invalid configuration values.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("ITEMHUB_HOST: not an IP address: {0:?}")]
    InvalidHost(String),

    #[error("ITEMHUB_PORT: not a port number: {0:?}")]
    InvalidPort(String),

    #[error("ITEMHUB_ID_POLICY: {0}")]
    InvalidIdPolicy(#[from] ParseIdPolicyError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub id_policy: IdPolicy,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 5000,
            id_policy: IdPolicy::default(),
        }
    }
}

impl ServerConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`; unset keys keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ServerConfig::default();

        if let Some(host) = lookup(HOST_VAR) {
            config.host = host
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidHost(host))?;
        }
        if let Some(port) = lookup(PORT_VAR) {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port))?;
        }
        if let Some(policy) = lookup(ID_POLICY_VAR) {
            config.id_policy = policy.parse()?;
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
