//! Configuration loading and management for the portal access boundary.
//!
//! This module loads the login path, the chrome exclusion table and the
//! session cookie attributes from a YAML file, or falls back to built-in
//! defaults.
//!
//! # Example
//!
//! ```no_run
//! use portal_access::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/access.yaml").unwrap();
//! println!("Login page: {}", config.login_path());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AccessConfig, CookieSettings};
