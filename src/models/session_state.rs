//! Session state model.
//!
//! This module defines [`SessionState`], the client-held record of who is
//! signed in and which company context they are working in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity details of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    /// Unique identifier for the user.
    pub id: String,
    /// The user's email address.
    pub email: String,
    /// The user's display name.
    #[serde(default)]
    pub name: String,
}

/// The externally observable lifecycle phase of a session.
///
/// Termination moves a session straight from `Authenticated` to `Anonymous`;
/// there is no intermediate phase a caller can see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// An auth token is held.
    Authenticated,
    /// No session artifacts are held.
    Anonymous,
}

/// Client-side session state.
///
/// # Example
///
/// ```
/// use portal_access::models::{SessionPhase, SessionState, UserInfo};
///
/// let mut state = SessionState::authenticated(
///     "tok_123",
///     UserInfo {
///         id: "usr_001".to_string(),
///         email: "ada@example.com".to_string(),
///         name: "Ada".to_string(),
///     },
/// )
/// .with_active_company("cmp_001");
/// assert_eq!(state.phase(), SessionPhase::Authenticated);
///
/// state.clear();
/// assert_eq!(state.phase(), SessionPhase::Anonymous);
/// assert!(state.active_company_id.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// The auth token, if signed in.
    pub token: Option<String>,
    /// The signed-in user.
    pub user: Option<UserInfo>,
    /// The company the user is currently acting for.
    pub active_company_id: Option<String>,
    /// The company picked in the company selector, if it differs.
    pub selected_company_id: Option<String>,
    /// When the session was established.
    pub authenticated_at: Option<DateTime<Utc>>,
}

impl SessionState {
    /// Creates an authenticated session stamped with the current time.
    pub fn authenticated(token: impl Into<String>, user: UserInfo) -> Self {
        Self {
            token: Some(token.into()),
            user: Some(user),
            active_company_id: None,
            selected_company_id: None,
            authenticated_at: Some(Utc::now()),
        }
    }

    /// Sets the active company.
    pub fn with_active_company(mut self, company_id: impl Into<String>) -> Self {
        self.active_company_id = Some(company_id.into());
        self
    }

    /// Sets the selected company.
    pub fn with_selected_company(mut self, company_id: impl Into<String>) -> Self {
        self.selected_company_id = Some(company_id.into());
        self
    }

    /// Returns true if an auth token is held.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Returns the lifecycle phase.
    pub fn phase(&self) -> SessionPhase {
        if self.is_authenticated() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Anonymous
        }
    }

    /// Drops every session-identifying field. Clearing an empty state is a no-op.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
