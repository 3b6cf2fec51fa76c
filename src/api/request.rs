//! Request types for the portal access API.

use serde::{Deserialize, Serialize};

use crate::models::{SessionState, UserInfo};

/// Query for the chrome and exclusion endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathQuery {
    /// The navigation path being rendered. A missing path is treated as empty.
    #[serde(default)]
    pub path: String,
}

/// Request body for `POST /session`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// The token issued by the identity backend.
    pub token: String,
    /// The signed-in user.
    pub user: UserInfo,
    /// The company the user acts for.
    #[serde(default)]
    pub active_company_id: Option<String>,
    /// The company picked in the selector.
    #[serde(default)]
    pub selected_company_id: Option<String>,
}

impl From<LoginRequest> for SessionState {
    fn from(req: LoginRequest) -> Self {
        let mut state = SessionState::authenticated(req.token, req.user);
        state.active_company_id = req.active_company_id;
        state.selected_company_id = req.selected_company_id;
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_into_session_state() {
        let json = r#"{
            "token": "tok_abc",
            "user": {"id": "usr_001", "email": "ada@example.com", "name": "Ada"},
            "active_company_id": "cmp_001"
        }"#;

        let request: LoginRequest = serde_json::from_str(json).unwrap();
        let state: SessionState = request.into();

        assert!(state.is_authenticated());
        assert_eq!(state.active_company_id.as_deref(), Some("cmp_001"));
        assert!(state.selected_company_id.is_none());
        assert!(state.authenticated_at.is_some());
    }

    #[test]
    fn test_login_request_requires_token() {
        let json = r#"{"user": {"id": "usr_001", "email": "ada@example.com"}}"#;
        let err = serde_json::from_str::<LoginRequest>(json).unwrap_err();
        assert!(err.to_string().contains("missing field `token`"));
    }

    #[test]
    fn test_path_query_defaults_to_empty() {
        let query: PathQuery = serde_json::from_str("{}").unwrap();
        assert!(query.path.is_empty());
    }
}
