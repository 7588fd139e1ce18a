//! # Configuration
//!
//! Loads `HelperConfig` from layered sources, lowest priority first:
//!
//! 1. Programmatic defaults (the public Google endpoints).
//! 2. A YAML file: the path passed to [`get_config`], or `gcloud-helpers.yml`
//!    in the working directory if it exists.
//! 3. `GCLOUD_HELPERS_*` environment variables (e.g. `GCLOUD_HELPERS_ACCESS_TOKEN`).
//!
//! `GOOGLE_ACCESS_TOKEN` is consulted last, only when no other layer set a token.

use crate::providers::sheets::google::DEFAULT_SHEETS_API_URL;
use crate::providers::storage::gcs::{DEFAULT_STORAGE_API_URL, DEFAULT_STORAGE_UPLOAD_URL};
use crate::types::ValueInputOption;
use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use serde::Deserialize;
use std::env;
use std::path::Path;
use thiserror::Error;
use tracing::info;

pub const DEFAULT_CONFIG_FILE: &str = "gcloud-helpers.yml";
pub const ENV_PREFIX: &str = "GCLOUD_HELPERS";
pub const FALLBACK_TOKEN_VAR: &str = "GOOGLE_ACCESS_TOKEN";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    General(String),
    #[error("{0}")]
    NotFound(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::General(err.to_string())
    }
}

/// Endpoints and credentials used to build the provider clients.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct HelperConfig {
    #[serde(default = "default_sheets_api_url")]
    pub sheets_api_url: String,
    #[serde(default = "default_storage_api_url")]
    pub storage_api_url: String,
    #[serde(default = "default_storage_upload_url")]
    pub storage_upload_url: String,
    /// OAuth2 bearer token sent with every call. Obtaining it is up to the caller.
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub value_input_option: ValueInputOption,
}

fn default_sheets_api_url() -> String {
    DEFAULT_SHEETS_API_URL.to_string()
}

fn default_storage_api_url() -> String {
    DEFAULT_STORAGE_API_URL.to_string()
}

fn default_storage_upload_url() -> String {
    DEFAULT_STORAGE_UPLOAD_URL.to_string()
}

impl Default for HelperConfig {
    fn default() -> Self {
        Self {
            sheets_api_url: default_sheets_api_url(),
            storage_api_url: default_storage_api_url(),
            storage_upload_url: default_storage_upload_url(),
            access_token: None,
            value_input_option: ValueInputOption::default(),
        }
    }
}

/// Loads the configuration from defaults, an optional YAML file and the environment.
///
/// An explicit `config_path_override` must exist; the default file is optional.
pub fn get_config(config_path_override: Option<&str>) -> Result<HelperConfig, ConfigError> {
    let mut builder = ConfigBuilder::builder()
        .set_default("sheets_api_url", DEFAULT_SHEETS_API_URL)?
        .set_default("storage_api_url", DEFAULT_STORAGE_API_URL)?
        .set_default("storage_upload_url", DEFAULT_STORAGE_UPLOAD_URL)?;

    match config_path_override {
        Some(path) => {
            if !Path::new(path).exists() {
                return Err(ConfigError::NotFound(format!(
                    "Config file not found at '{path}'."
                )));
            }
            info!("Loading configuration from '{path}'.");
            builder = builder.add_source(File::new(path, FileFormat::Yaml));
        }
        None => {
            if Path::new(DEFAULT_CONFIG_FILE).exists() {
                info!("Loading configuration from '{DEFAULT_CONFIG_FILE}'.");
            }
            builder =
                builder.add_source(File::new(DEFAULT_CONFIG_FILE, FileFormat::Yaml).required(false));
        }
    }

    let settings = builder
        .add_source(Environment::with_prefix(ENV_PREFIX).prefix_separator("_"))
        .build()?;

    let mut config: HelperConfig = settings.try_deserialize()?;

    config.access_token = config.access_token.filter(|token| !token.is_empty());
    if config.access_token.is_none() {
        if let Ok(token) = env::var(FALLBACK_TOKEN_VAR) {
            if !token.is_empty() {
                config.access_token = Some(token);
            }
        }
    }

    Ok(config)
}
