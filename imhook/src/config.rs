//! Configuration module for environment variable parsing.

use std::env;

use thiserror::Error;
use tracing::warn;

use crate::callback::{CallbackOptions, DEFAULT_MAX_BODY_BYTES};

/// Errors raised while loading [`Config`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("{name} is not a valid integer: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the web server to listen on
    pub port: u16,

    /// Path the platform posts callbacks to
    pub callback_path: String,

    /// IM application id (`SdkAppid`)
    pub sdk_app_id: u64,

    /// Callback token for signature verification.
    ///
    /// Unset or empty disables verification.
    pub callback_token: Option<String>,

    /// Maximum accepted callback body size in bytes
    pub max_body_bytes: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_app_id = lookup("IM_SDK_APP_ID").ok_or(ConfigError::Missing("IM_SDK_APP_ID"))?;
        let sdk_app_id = raw_app_id
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid {
                name: "IM_SDK_APP_ID",
                value: raw_app_id.clone(),
            })?;

        Ok(Config {
            port: parse_or(&lookup, "PORT", 8080),

            callback_path: lookup("CALLBACK_PATH")
                .filter(|p| p.starts_with('/'))
                .unwrap_or_else(|| "/im/callback".to_string()),

            sdk_app_id,

            callback_token: lookup("IM_CALLBACK_TOKEN"),

            max_body_bytes: parse_or(&lookup, "MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES),
        })
    }

    /// Options for the callback engine.
    pub fn callback_options(&self) -> CallbackOptions {
        CallbackOptions {
            sdk_app_id: self.sdk_app_id,
            token: self.callback_token.clone(),
            max_body_bytes: self.max_body_bytes,
        }
    }
}

/// Parse an optional numeric variable, falling back to `default`.
fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(env_var = name, value = %raw, "Invalid value, using default");
            default
        }),
    }
}
