//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the access
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use axum::http::HeaderValue;
use tracing::info;

use crate::error::{AccessError, AccessResult};
use crate::routing::ExclusionTable;

use super::types::{AccessConfig, CookieSettings};

/// Loads and provides access to the access configuration.
///
/// # File Format
///
/// ```text
/// login_path: /auth/login
/// exclusions:
///   navbar: [/auth, /admin/login, /logout]
///   footer: [/auth, /logout]
/// cookies:
///   path: /
///   secure: true
/// ```
///
/// # Example
///
/// ```no_run
/// use portal_access::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/access.yaml")?;
/// println!("Login page: {}", loader.login_path());
/// # Ok::<(), portal_access::error::AccessError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AccessConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Errors
    ///
    /// - `ConfigNotFound` if the file cannot be read
    /// - `ConfigParseError` if the YAML is invalid or names an unknown zone
    /// - `InvalidConfig` if a path setting is not absolute or cannot be sent
    ///   in a header
    pub fn load<P: AsRef<Path>>(path: P) -> AccessResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| AccessError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: AccessConfig =
            serde_yaml::from_str(&content).map_err(|e| AccessError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        let loader = Self::from_config(config)?;
        info!(path = %path_str, login_path = %loader.login_path(), "Loaded access configuration");
        Ok(loader)
    }

    /// Wraps an already-built configuration after validating it.
    pub fn from_config(config: AccessConfig) -> AccessResult<Self> {
        validate_path("login_path", &config.login_path)?;
        validate_path("cookies.path", &config.cookies.path)?;
        if config.cookies.path.contains(';') {
            return Err(AccessError::InvalidConfig {
                message: format!("cookies.path must not contain ';': {}", config.cookies.path),
            });
        }
        Ok(Self { config })
    }

    /// The configuration used when no file is supplied.
    pub fn builtin() -> Self {
        Self {
            config: AccessConfig::default(),
        }
    }

    /// Returns the login page path.
    pub fn login_path(&self) -> &str {
        &self.config.login_path
    }

    /// Returns the exclusion table.
    pub fn exclusions(&self) -> &ExclusionTable {
        &self.config.exclusions
    }

    /// Returns the cookie settings.
    pub fn cookies(&self) -> &CookieSettings {
        &self.config.cookies
    }
}

/// Paths end up in `Location` and `Set-Cookie` headers, so they must be
/// absolute and valid header octets.
fn validate_path(field: &str, value: &str) -> AccessResult<()> {
    if !value.starts_with('/') {
        return Err(AccessError::InvalidConfig {
            message: format!("{} must start with '/': {:?}", field, value),
        });
    }
    HeaderValue::from_str(value).map_err(|_| AccessError::InvalidConfig {
        message: format!("{} is not a valid header value: {:?}", field, value),
    })?;
    Ok(())
}
