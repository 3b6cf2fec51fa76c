//! Session store.
//!
//! The store is the single owner of the client-side [`SessionState`]. It is
//! injected into handlers rather than reached through a global, so every
//! test can run against its own isolated store.

use std::sync::{PoisonError, RwLock};

use tracing::debug;

use crate::models::{SessionPhase, SessionState};

/// Owner of the process-wide session state.
pub trait SessionStore: Send + Sync {
    /// Returns a copy of the current state.
    fn snapshot(&self) -> SessionState;

    /// Replaces the current state with a freshly authenticated one.
    fn login(&self, state: SessionState);

    /// Clears every session field. Clearing an empty store is a no-op.
    fn logout(&self);

    /// Returns the current lifecycle phase.
    fn phase(&self) -> SessionPhase {
        self.snapshot().phase()
    }

    /// Route-guard check: true if the caller holds a session.
    fn is_authenticated(&self) -> bool {
        self.phase() == SessionPhase::Authenticated
    }
}

/// A [`SessionStore`] kept in process memory.
///
/// # Example
///
/// ```
/// use portal_access::models::{SessionPhase, SessionState, UserInfo};
/// use portal_access::session::{InMemorySessionStore, SessionStore};
///
/// let store = InMemorySessionStore::new();
/// store.login(SessionState::authenticated(
///     "tok_123",
///     UserInfo {
///         id: "usr_001".to_string(),
///         email: "ada@example.com".to_string(),
///         name: String::new(),
///     },
/// ));
/// assert!(store.is_authenticated());
///
/// store.logout();
/// assert_eq!(store.phase(), SessionPhase::Anonymous);
/// ```
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    state: RwLock<SessionState>,
}

impl InMemorySessionStore {
    /// Creates an anonymous store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `state`.
    pub fn with_state(state: SessionState) -> Self {
        Self {
            state: RwLock::new(state),
        }
    }
}

impl SessionStore for InMemorySessionStore {
    fn snapshot(&self) -> SessionState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn login(&self, state: SessionState) {
        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
        *guard = state;
        debug!("Session state replaced on login");
    }

    fn logout(&self) {
        // The whole clear happens under one write lock so no reader sees a
        // half-cleared state.
        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
        guard.clear();
        debug!("Session state cleared");
    }
}
