use anyhow::{Context, Result};
use std::net::SocketAddr;

/// Runtime settings for the relay.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
        }
    }
}

impl ServerConfig {
    /// Read settings from the environment, keeping defaults for anything
    /// unset. `BEACON_ADDR` overrides the listen address.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("BEACON_ADDR") {
            config.addr = addr
                .parse()
                .with_context(|| format!("invalid BEACON_ADDR '{addr}'"))?;
        }

        Ok(config)
    }
}
