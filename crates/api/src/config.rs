use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use envelope_core::{CoreError, Messages, Responder};

/// Errors raised while reading [`ServerConfig`] from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("HOST must be an IP address, got {0:?}")]
    InvalidHost(String),

    #[error("PORT must be a valid u16, got {0:?}")]
    InvalidPort(String),

    #[error("Failed to load message catalog: {0}")]
    Messages(#[from] CoreError),
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// JSON file overriding the default envelope messages.
    pub messages_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var             | Default   |
    /// |---------------------|-----------|
    /// | `HOST`              | `0.0.0.0` |
    /// | `PORT`              | `3000`    |
    /// | `API_MESSAGES_PATH` | unset     |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] but reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = match lookup("HOST") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidHost(raw))?,
            None => IpAddr::from([0, 0, 0, 0]),
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 3000,
        };

        let messages_path = lookup("API_MESSAGES_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            host,
            port,
            messages_path,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Build the responder, reading the message catalog if one is configured.
    pub fn load_responder(&self) -> Result<Responder, ConfigError> {
        let messages = match &self.messages_path {
            Some(path) => Messages::from_path(path)?,
            None => Messages::default(),
        };

        Ok(Responder::new(messages))
    }
}
