//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the defaults run the demo out of the box.
//!
//! - `SHOPSPOT_HOST` - Bind address (default: 127.0.0.1)
//! - `SHOPSPOT_PORT` - Listen port (default: 3000)
//! - `SHOPSPOT_BASE_URL` - Public URL for the storefront
//!   (default: `http://localhost:3000`; an `https` scheme turns on the
//!   secure session cookie)
//! - `SHOPSPOT_CATALOG_PATH` - Path to a catalog JSON file; when unset the
//!   embedded catalog is used
//! - `SHOPSPOT_PROCESSING_DELAY_MS` - Simulated order-processing delay in
//!   milliseconds (default: 1500)

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_PROCESSING_DELAY_MS: u64 = 1500;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Optional path to a catalog JSON file
    pub catalog_path: Option<PathBuf>,
    /// Simulated order-processing delay
    pub processing_delay: Duration,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.parse().unwrap_or(IpAddr::from([127, 0, 0, 1])),
            port: DEFAULT_PORT,
            base_url: DEFAULT_BASE_URL.to_string(),
            catalog_path: None,
            processing_delay: Duration::from_millis(DEFAULT_PROCESSING_DELAY_MS),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a set variable fails to parse (bad IP, bad
    /// port, malformed base URL, non-numeric delay).
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env_or("SHOPSPOT_HOST", DEFAULT_HOST)
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("SHOPSPOT_HOST".into(), e.to_string()))?;

        let port = match env::var("SHOPSPOT_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|e| ConfigError::InvalidEnvVar("SHOPSPOT_PORT".into(), e.to_string()))?,
            Err(_) => DEFAULT_PORT,
        };

        let base_url = env_or("SHOPSPOT_BASE_URL", DEFAULT_BASE_URL);
        Url::parse(&base_url)
            .map_err(|e| ConfigError::InvalidEnvVar("SHOPSPOT_BASE_URL".into(), e.to_string()))?;

        let catalog_path = env::var("SHOPSPOT_CATALOG_PATH").ok().map(PathBuf::from);

        let processing_delay = match env::var("SHOPSPOT_PROCESSING_DELAY_MS") {
            Ok(raw) => Duration::from_millis(raw.parse::<u64>().map_err(|e| {
                ConfigError::InvalidEnvVar("SHOPSPOT_PROCESSING_DELAY_MS".into(), e.to_string())
            })?),
            Err(_) => Duration::from_millis(DEFAULT_PROCESSING_DELAY_MS),
        };

        Ok(Self {
            host,
            port,
            base_url,
            catalog_path,
            processing_delay,
        })
    }

    /// The socket address to bind the server to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Read an environment variable with a fallback default.
fn env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}
