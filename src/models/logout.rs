//! Logout models.
//!
//! This module contains the [`SessionArtifact`] names removed on logout, the
//! [`LogoutReason`] carried to the login page, and the [`LogoutOutcome`]
//! returned by server-side termination.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named piece of request-scoped session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionArtifact {
    /// The bearer token.
    AuthToken,
    /// The serialized user profile.
    UserInfo,
    /// The company the user is acting for.
    ActiveCompany,
    /// The company picked in the selector.
    SelectedCompany,
}

impl SessionArtifact {
    /// Every artifact removed by a server-side logout.
    pub const ALL: [SessionArtifact; 4] = [
        SessionArtifact::AuthToken,
        SessionArtifact::UserInfo,
        SessionArtifact::ActiveCompany,
        SessionArtifact::SelectedCompany,
    ];

    /// Returns the storage key (cookie name) of the artifact.
    pub fn name(&self) -> &'static str {
        match self {
            SessionArtifact::AuthToken => "auth_token",
            SessionArtifact::UserInfo => "user_info",
            SessionArtifact::ActiveCompany => "active_company",
            SessionArtifact::SelectedCompany => "selected_company",
        }
    }
}

impl fmt::Display for SessionArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a session was terminated.
///
/// The reason travels to the login page as `error=<reason>`. Any
/// caller-supplied token is accepted and passed through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogoutReason {
    /// The session timed out. Used when no reason is given.
    #[default]
    SessionExpired,
    /// The token was rejected by the backend.
    InvalidToken,
    /// Any other caller-supplied reason.
    Custom(String),
}

impl LogoutReason {
    /// Resolves a reason from an optional query value.
    ///
    /// # Examples
    ///
    /// ```
    /// use portal_access::models::LogoutReason;
    ///
    /// assert_eq!(LogoutReason::from_query(None), LogoutReason::SessionExpired);
    /// assert_eq!(LogoutReason::from_query(Some("")), LogoutReason::SessionExpired);
    /// assert_eq!(LogoutReason::from_query(Some("invalid_token")), LogoutReason::InvalidToken);
    /// assert_eq!(LogoutReason::from_query(Some("kicked")).as_str(), "kicked");
    /// ```
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            None | Some("") | Some("session_expired") => LogoutReason::SessionExpired,
            Some("invalid_token") => LogoutReason::InvalidToken,
            Some(other) => LogoutReason::Custom(other.to_string()),
        }
    }

    /// Returns the wire form of the reason.
    pub fn as_str(&self) -> &str {
        match self {
            LogoutReason::SessionExpired => "session_expired",
            LogoutReason::InvalidToken => "invalid_token",
            LogoutReason::Custom(reason) => reason.as_str(),
        }
    }
}

impl fmt::Display for LogoutReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The structured result of a server-side logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoutOutcome {
    /// Whether every artifact was removed.
    pub success: bool,
    /// The failure message when `success` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LogoutOutcome {
    /// A successful outcome.
    pub fn succeeded() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    /// A failed outcome carrying the given message.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
        }
    }
}
