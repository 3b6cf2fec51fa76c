//! Application state for the portal access API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::session::{InMemorySessionStore, SessionStore};

/// Shared application state.
///
/// Holds the loaded configuration and the injected session store.
#[derive(Clone)]
pub struct AppState {
    /// The loaded access configuration.
    config: Arc<ConfigLoader>,
    /// The session store cleared by forced logout.
    sessions: Arc<dyn SessionStore>,
}

impl AppState {
    /// Creates application state with a fresh in-memory session store.
    pub fn new(config: ConfigLoader) -> Self {
        Self::with_session_store(config, Arc::new(InMemorySessionStore::new()))
    }

    /// Creates application state around an existing session store.
    pub fn with_session_store(config: ConfigLoader, sessions: Arc<dyn SessionStore>) -> Self {
        Self {
            config: Arc::new(config),
            sessions,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the session store.
    pub fn sessions(&self) -> &dyn SessionStore {
        self.sessions.as_ref()
    }
}
