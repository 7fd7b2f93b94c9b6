//! Configuration loading functionality.
//!
//! This module provides the [`PolicyLoader`] type for loading pay policies
//! from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::PayPolicy;

use super::types::PolicyConfig;

/// Loads and provides access to a pay policy file.
///
/// # Example
///
/// ```no_run
/// use paycheck_engine::config::PolicyLoader;
///
/// let loader = PolicyLoader::load("./config/policy.yaml").unwrap();
/// println!("Policy: {}", loader.name());
/// println!("Hourly rate: {}", loader.policy().hourly_rate);
/// ```
#[derive(Debug, Clone)]
pub struct PolicyLoader {
    config: PolicyConfig,
}

impl PolicyLoader {
    /// Loads a policy from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `PolicyLoader` on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file contains invalid YAML or misses a required field
    ///   (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content, &path_str)
    }

    /// Parses a policy from YAML text. `origin` names the source in errors.
    pub fn from_yaml_str(content: &str, origin: &str) -> EngineResult<Self> {
        let config: PolicyConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self { config })
    }

    /// Returns the underlying policy configuration.
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Returns the policy name.
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Returns the pay policy.
    pub fn policy(&self) -> &PayPolicy {
        &self.config.policy
    }

    /// Consumes the loader and returns the pay policy.
    pub fn into_policy(self) -> PayPolicy {
        self.config.policy
    }
}
