//! Configuration types for the portal access boundary.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file.

use serde::Deserialize;

use crate::routing::ExclusionTable;

/// Attributes applied to every session cookie the portal writes or expires.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CookieSettings {
    /// The `Path` attribute.
    #[serde(default = "default_cookie_path")]
    pub path: String,
    /// Whether to add the `Secure` attribute.
    #[serde(default)]
    pub secure: bool,
}

impl Default for CookieSettings {
    fn default() -> Self {
        Self {
            path: default_cookie_path(),
            secure: false,
        }
    }
}

fn default_cookie_path() -> String {
    "/".to_string()
}

fn default_login_path() -> String {
    "/auth/login".to_string()
}

/// The complete access configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessConfig {
    /// Where terminated sessions are sent.
    #[serde(default = "default_login_path")]
    pub login_path: String,
    /// Route prefixes that suppress each zone.
    #[serde(default)]
    pub exclusions: ExclusionTable,
    /// Session cookie attributes.
    #[serde(default)]
    pub cookies: CookieSettings,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            login_path: default_login_path(),
            exclusions: ExclusionTable::builtin(),
            cookies: CookieSettings::default(),
        }
    }
}
