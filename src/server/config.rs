//! Configuration loading for blindboxd.
//!
//! Everything comes from the process environment (the daemon loads a local
//! `.env` first). Credentials are mandatory; endpoints, model identifiers
//! and the listen address fall back to built-in defaults.

use crate::client::{
    DEFAULT_CHAT_ENDPOINT, DEFAULT_CHAT_MODEL, DEFAULT_IMAGE_ENDPOINT, DEFAULT_IMAGE_MODEL,
};
use crate::{BlindboxError, Result};

/// Environment variable names consumed by the daemon.
pub const ENV_TEXT_API_KEY: &str = "BLINDBOX_TEXT_API_KEY";
pub const ENV_TEXT_ENDPOINT: &str = "BLINDBOX_TEXT_ENDPOINT";
pub const ENV_TEXT_MODEL: &str = "BLINDBOX_TEXT_MODEL";
pub const ENV_IMAGE_API_KEY: &str = "BLINDBOX_IMAGE_API_KEY";
pub const ENV_IMAGE_ENDPOINT: &str = "BLINDBOX_IMAGE_ENDPOINT";
pub const ENV_IMAGE_MODEL: &str = "BLINDBOX_IMAGE_MODEL";
pub const ENV_ADDRESS: &str = "BLINDBOX_ADDRESS";

fn default_address() -> String {
    "127.0.0.1:8000".to_string()
}

/// Connection settings for one remote model service.
#[derive(Debug, Clone)]
pub struct RemoteModelConfig {
    pub api_key: String,
    pub endpoint: String,
    pub model: String,
}

/// Daemon configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub text: RemoteModelConfig,
    pub image: RemoteModelConfig,
    /// Address to bind to (default: 127.0.0.1:8000).
    pub address: String,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    ///
    /// Split out from [`Config::from_env`] so tests don't have to mutate
    /// process-global environment state.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            get(key).ok_or_else(|| {
                BlindboxError::Configuration(format!("missing environment variable {key}"))
            })
        };

        Ok(Self {
            text: RemoteModelConfig {
                api_key: required(ENV_TEXT_API_KEY)?,
                endpoint: get(ENV_TEXT_ENDPOINT)
                    .unwrap_or_else(|| DEFAULT_CHAT_ENDPOINT.to_string()),
                model: get(ENV_TEXT_MODEL).unwrap_or_else(|| DEFAULT_CHAT_MODEL.to_string()),
            },
            image: RemoteModelConfig {
                api_key: required(ENV_IMAGE_API_KEY)?,
                endpoint: get(ENV_IMAGE_ENDPOINT)
                    .unwrap_or_else(|| DEFAULT_IMAGE_ENDPOINT.to_string()),
                model: get(ENV_IMAGE_MODEL).unwrap_or_else(|| DEFAULT_IMAGE_MODEL.to_string()),
            },
            address: get(ENV_ADDRESS).unwrap_or_else(default_address),
        })
    }
}
