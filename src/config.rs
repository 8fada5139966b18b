//! Deployment metadata used for standard tag and label assembly.
//!
//! Loaded from `PF_*` environment variables (a `.env` file is honoured via
//! `dotenv` by the binary) or from a JSON file.

use crate::error::ConfigError;
use crate::models::OptionalValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;

pub const ENV_ENVIRONMENT: &str = "PF_ENVIRONMENT";
pub const ENV_REGION: &str = "PF_REGION";
pub const ENV_ROOT_MODULE: &str = "PF_ROOT_MODULE";
pub const ENV_STACK_VERSION: &str = "PF_STACK_VERSION";
pub const ENV_STACK_COMMIT: &str = "PF_STACK_COMMIT";
pub const ENV_IS_LOCAL: &str = "PF_IS_LOCAL";
pub const ENV_EXTRA_TAGS: &str = "PF_EXTRA_TAGS";

/// Deployment context applied to every resource's tags or labels.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ProviderConfig {
    /// Environment being deployed to.
    pub environment: OptionalValue,
    /// Region being deployed to.
    pub region: OptionalValue,
    /// Top-level module doing the deployment.
    pub root_module: OptionalValue,
    pub stack_version: OptionalValue,
    pub stack_commit: OptionalValue,
    /// Part of a local development deployment. Missing means false.
    pub is_local: bool,
    /// Extra tags applied to all resources, after the standard ones.
    pub extra_tags: BTreeMap<String, String>,
}

impl ProviderConfig {
    /// Read the config from `PF_*` environment variables.
    ///
    /// Unset or empty variables are [`OptionalValue::Absent`].
    pub fn from_env() -> Result<ProviderConfig, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Same as [`ProviderConfig::from_env`] but reading through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<ProviderConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| -> OptionalValue { lookup(var).filter(|v| !v.is_empty()).into() };

        let is_local = match lookup(ENV_IS_LOCAL).as_deref() {
            None | Some("") => false,
            Some(v) => v.parse::<bool>().map_err(|e| ConfigError::InvalidEnv {
                var: ENV_IS_LOCAL,
                message: format!("'{v}': {e}"),
            })?,
        };

        let extra_tags = match lookup(ENV_EXTRA_TAGS).filter(|v| !v.is_empty()) {
            None => BTreeMap::new(),
            Some(json) => {
                serde_json::from_str(&json).map_err(|e| ConfigError::InvalidEnv {
                    var: ENV_EXTRA_TAGS,
                    message: e.to_string(),
                })?
            }
        };

        let config = ProviderConfig {
            environment: get(ENV_ENVIRONMENT),
            region: get(ENV_REGION),
            root_module: get(ENV_ROOT_MODULE),
            stack_version: get(ENV_STACK_VERSION),
            stack_commit: get(ENV_STACK_COMMIT),
            is_local,
            extra_tags,
        };
        log::debug!("Loaded provider config from environment: {config:?}");
        Ok(config)
    }

    /// Parse the config from JSON text, reporting the path of a bad field.
    pub fn from_json_str(json: &str) -> Result<ProviderConfig, ConfigError> {
        let deserializer = &mut serde_json::Deserializer::from_str(json);
        serde_path_to_error::deserialize(deserializer).map_err(|e| ConfigError::Json {
            path: e.path().to_string(),
            message: e.inner().to_string(),
        })
    }

    /// Read the config from a JSON file.
    pub fn from_json_file(path: &str) -> Result<ProviderConfig, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        log::info!("Reading provider config from {path}");
        Self::from_json_str(&json)
    }
}
