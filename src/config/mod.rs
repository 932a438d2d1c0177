mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

pub const API_KEY_ENV: &str = "HUGGINGFACE_API_KEY";
pub const VARIANT_ENV: &str = "LEGAL_QA_VARIANT";
pub const HOST_ENV: &str = "LEGAL_QA_HOST";
pub const PORT_ENV: &str = "LEGAL_QA_PORT";

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    let mut config = load_from_path(&config_path).await?;
    config.apply_overrides(|key| env::var(key).ok())?;

    Ok(config)
}

/// Reads a YAML config file. A missing file yields the defaults.
pub async fn load_from_path(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    debug!("Loading configuration from: {}", path.display());

    match tokio::fs::read_to_string(path).await {
        Ok(config_str) => Ok(serde_yaml::from_str(&config_str)?),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No configuration file at {}, using defaults", path.display());
            Ok(Config::default())
        }
        Err(e) => Err(e.into()),
    }
}

impl Config {
    /// Applies environment-style overrides on top of the file values.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_key) = lookup(API_KEY_ENV) {
            self.inference.api_key = Some(api_key);
        }

        if let Some(variant) = lookup(VARIANT_ENV) {
            self.inference.variant = variant.parse()?;
        }

        if let Some(host) = lookup(HOST_ENV) {
            self.server.host = host;
        }

        if let Some(port) = lookup(PORT_ENV) {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| Error::config(format!("Invalid port: '{}'", port)))?;
        }

        Ok(())
    }
}
