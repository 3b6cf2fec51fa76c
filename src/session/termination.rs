//! Session termination.
//!
//! Two variants exist. Client-side termination clears the injected
//! [`SessionStore`] and computes where to send the user. Server-side
//! termination removes the named session artifacts from request-scoped
//! storage and reports a [`LogoutOutcome`]. Neither variant retries, and
//! neither ever returns an error to its caller.

use serde::Deserialize;
use tracing::{error, info};

use crate::models::{LogoutOutcome, LogoutReason, SessionArtifact};

use super::cookies::ArtifactStorage;
use super::store::SessionStore;

/// Query parameters accepted by the forced-logout surface.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogoutQuery {
    /// Why the session is being terminated.
    #[serde(default)]
    pub reason: Option<String>,
}

impl LogoutQuery {
    /// Resolves the reason, defaulting to `session_expired`.
    pub fn reason(&self) -> LogoutReason {
        LogoutReason::from_query(self.reason.as_deref())
    }
}

/// Computes the login redirect target for a logout reason.
///
/// The reason is form-urlencoded and attached as `error=<reason>`. If the
/// login path already has a query string the parameter is appended to it.
///
/// # Example
///
/// ```
/// use portal_access::models::LogoutReason;
/// use portal_access::session::redirect_target;
///
/// assert_eq!(
///     redirect_target("/auth/login", &LogoutReason::SessionExpired),
///     "/auth/login?error=session_expired"
/// );
/// assert_eq!(
///     redirect_target("/auth/login?lang=en", &LogoutReason::InvalidToken),
///     "/auth/login?lang=en&error=invalid_token"
/// );
/// ```
pub fn redirect_target(login_path: &str, reason: &LogoutReason) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("error", reason.as_str())
        .finish();
    let separator = if login_path.contains('?') { '&' } else { '?' };
    format!("{}{}{}", login_path, separator, query)
}

/// Terminates the client-held session and returns the redirect target.
///
/// The store is cleared before the target is computed, so by the time a
/// caller can act on the target the session is already anonymous.
pub fn terminate_client(store: &dyn SessionStore, query: &LogoutQuery, login_path: &str) -> String {
    let was_authenticated = store.is_authenticated();
    store.logout();

    let reason = query.reason();
    let target = redirect_target(login_path, &reason);
    info!(
        reason = %reason,
        was_authenticated,
        target = %target,
        "Client session terminated"
    );
    target
}

/// Removes every session artifact from request-scoped storage.
///
/// Removal of absent artifacts succeeds, so calling this twice yields
/// `success: true` both times. A failing removal is logged and reported in
/// the outcome; the remaining artifacts are still removed.
pub fn terminate_server(storage: &mut dyn ArtifactStorage) -> LogoutOutcome {
    let mut first_failure: Option<String> = None;

    for artifact in SessionArtifact::ALL {
        if let Err(err) = storage.delete(artifact.name()) {
            error!(artifact = %artifact, error = %err, "Failed to remove session artifact");
            first_failure.get_or_insert_with(|| err.to_string());
        }
    }

    match first_failure {
        None => {
            info!("Server session artifacts removed");
            LogoutOutcome::succeeded()
        }
        Some(message) => LogoutOutcome::failed(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AccessError, AccessResult};
    use crate::models::{SessionState, UserInfo};
    use crate::session::InMemorySessionStore;
    use std::collections::HashSet;

    /// Storage that records deletions and can be told to fail for one name.
    #[derive(Default)]
    struct RecordingStorage {
        present: HashSet<String>,
        deleted: Vec<String>,
        fail_on: Option<&'static str>,
    }

    impl RecordingStorage {
        fn holding_all() -> Self {
            Self {
                present: SessionArtifact::ALL
                    .iter()
                    .map(|a| a.name().to_string())
                    .collect(),
                ..Self::default()
            }
        }
    }

    impl ArtifactStorage for RecordingStorage {
        fn delete(&mut self, name: &str) -> AccessResult<()> {
            self.deleted.push(name.to_string());
            if self.fail_on == Some(name) {
                return Err(AccessError::StorageRemovalFailure {
                    artifact: name.to_string(),
                    message: "backend unavailable".to_string(),
                });
            }
            self.present.remove(name);
            Ok(())
        }
    }

    fn signed_in_store() -> InMemorySessionStore {
        InMemorySessionStore::with_state(
            SessionState::authenticated(
                "tok_abc",
                UserInfo {
                    id: "usr_001".to_string(),
                    email: "ada@example.com".to_string(),
                    name: "Ada".to_string(),
                },
            )
            .with_active_company("cmp_001"),
        )
    }

    #[test]
    fn test_client_termination_defaults_reason() {
        let store = signed_in_store();
        let target = terminate_client(&store, &LogoutQuery::default(), "/auth/login");
        assert!(target.ends_with("error=session_expired"));
    }

    #[test]
    fn test_client_termination_empty_reason_uses_default() {
        let store = signed_in_store();
        let query = LogoutQuery {
            reason: Some(String::new()),
        };
        let target = terminate_client(&store, &query, "/auth/login");
        assert_eq!(target, "/auth/login?error=session_expired");
    }

    #[test]
    fn test_client_termination_passes_reason_through() {
        let store = signed_in_store();
        let query = LogoutQuery {
            reason: Some("invalid_token".to_string()),
        };
        let target = terminate_client(&store, &query, "/auth/login");
        assert!(target.ends_with("error=invalid_token"));
    }

    #[test]
    fn test_client_termination_clears_store() {
        let store = signed_in_store();
        terminate_client(&store, &LogoutQuery::default(), "/auth/login");

        assert!(!store.is_authenticated());
        assert_eq!(store.snapshot(), SessionState::default());
    }

    #[test]
    fn test_client_termination_on_anonymous_store_still_redirects() {
        let store = InMemorySessionStore::new();
        let target = terminate_client(&store, &LogoutQuery::default(), "/auth/login");
        assert_eq!(target, "/auth/login?error=session_expired");
    }

    #[test]
    fn test_redirect_target_encodes_reason() {
        let reason = LogoutReason::Custom("a&b c".to_string());
        assert_eq!(
            redirect_target("/auth/login", &reason),
            "/auth/login?error=a%26b+c"
        );
    }

    #[test]
    fn test_query_deserializes_without_reason() {
        let query: LogoutQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.reason(), LogoutReason::SessionExpired);
    }

    #[test]
    fn test_server_termination_removes_all_artifacts() {
        let mut storage = RecordingStorage::holding_all();
        let outcome = terminate_server(&mut storage);

        assert_eq!(outcome, LogoutOutcome::succeeded());
        assert!(storage.present.is_empty());
        assert_eq!(
            storage.deleted,
            vec!["auth_token", "user_info", "active_company", "selected_company"]
        );
    }

    #[test]
    fn test_server_termination_is_idempotent() {
        let mut storage = RecordingStorage::holding_all();
        assert!(terminate_server(&mut storage).success);
        assert!(terminate_server(&mut storage).success);
    }

    #[test]
    fn test_server_termination_contains_failure() {
        let mut storage = RecordingStorage {
            fail_on: Some("user_info"),
            ..RecordingStorage::holding_all()
        };

        let outcome = terminate_server(&mut storage);

        assert!(!outcome.success);
        let message = outcome.error.unwrap();
        assert!(message.contains("user_info"));
        assert!(message.contains("backend unavailable"));
    }

    #[test]
    fn test_server_termination_continues_after_failure() {
        let mut storage = RecordingStorage {
            fail_on: Some("auth_token"),
            ..RecordingStorage::holding_all()
        };

        terminate_server(&mut storage);

        assert_eq!(storage.deleted.len(), 4);
        assert_eq!(
            storage.present.iter().collect::<Vec<_>>(),
            vec!["auth_token"]
        );
    }
}
