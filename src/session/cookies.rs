//! Request-scoped cookie storage.
//!
//! [`CookieJar`] reads the cookies a browser sent with a request and records
//! which ones the response must expire. It is the production
//! [`ArtifactStorage`] behind server-side logout.

use std::collections::BTreeMap;

use axum::http::{HeaderMap, HeaderValue, header};
use tracing::warn;

use crate::config::CookieSettings;
use crate::error::{AccessError, AccessResult};
use crate::models::{SessionArtifact, SessionState};

/// Storage that can delete named session artifacts.
///
/// Deleting a name that is not present must succeed.
pub trait ArtifactStorage {
    /// Removes the artifact stored under `name`.
    fn delete(&mut self, name: &str) -> AccessResult<()>;
}

/// The cookies of one request plus the removals queued for its response.
#[derive(Debug, Clone)]
pub struct CookieJar {
    settings: CookieSettings,
    cookies: BTreeMap<String, String>,
    removals: BTreeMap<String, HeaderValue>,
}

impl CookieJar {
    /// Creates an empty jar.
    pub fn new(settings: CookieSettings) -> Self {
        Self {
            settings,
            cookies: BTreeMap::new(),
            removals: BTreeMap::new(),
        }
    }

    /// Builds a jar from the `Cookie` headers of a request.
    ///
    /// Pairs without `=` and headers that are not valid UTF-8 are skipped.
    ///
    /// # Example
    ///
    /// ```
    /// use axum::http::{HeaderMap, HeaderValue, header};
    /// use portal_access::config::CookieSettings;
    /// use portal_access::session::CookieJar;
    ///
    /// let mut headers = HeaderMap::new();
    /// headers.insert(header::COOKIE, HeaderValue::from_static("auth_token=abc; theme=dark"));
    ///
    /// let jar = CookieJar::from_headers(&headers, CookieSettings::default());
    /// assert_eq!(jar.get("auth_token"), Some("abc"));
    /// assert_eq!(jar.get("theme"), Some("dark"));
    /// ```
    pub fn from_headers(headers: &HeaderMap, settings: CookieSettings) -> Self {
        let mut jar = Self::new(settings);
        for value in headers.get_all(header::COOKIE) {
            let Ok(value) = value.to_str() else {
                continue;
            };
            for pair in value.split(';') {
                if let Some((name, value)) = pair.trim().split_once('=') {
                    jar.cookies
                        .insert(name.trim().to_string(), value.trim().to_string());
                }
            }
        }
        jar
    }

    /// Returns the value of a cookie that is still present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(String::as_str)
    }

    /// Returns true if the `auth_token` cookie carries `token`.
    ///
    /// The cookie holds the form-urlencoded token written at login, so the
    /// comparison is made against that encoding.
    pub fn holds_token(&self, token: &str) -> bool {
        let encoded: String = url::form_urlencoded::byte_serialize(token.as_bytes()).collect();
        self.get(SessionArtifact::AuthToken.name()) == Some(encoded.as_str())
    }

    /// Returns true if any session artifact is still present.
    pub fn holds_session(&self) -> bool {
        SessionArtifact::ALL
            .iter()
            .any(|artifact| self.cookies.contains_key(artifact.name()))
    }

    /// The `Set-Cookie` values that expire every deleted cookie.
    pub fn removal_headers(&self) -> impl Iterator<Item = &HeaderValue> {
        self.removals.values()
    }

    /// Renders the `Set-Cookie` values that establish a session's artifacts.
    ///
    /// Values are form-urlencoded so they are always valid cookie octets.
    /// Absent fields produce no cookie.
    pub fn session_headers(state: &SessionState, settings: &CookieSettings) -> Vec<HeaderValue> {
        let artifacts = [
            (SessionArtifact::AuthToken, state.token.as_deref()),
            (
                SessionArtifact::UserInfo,
                state.user.as_ref().map(|user| user.id.as_str()),
            ),
            (
                SessionArtifact::ActiveCompany,
                state.active_company_id.as_deref(),
            ),
            (
                SessionArtifact::SelectedCompany,
                state.selected_company_id.as_deref(),
            ),
        ];

        artifacts
            .into_iter()
            .filter_map(|(artifact, value)| {
                let value: String = url::form_urlencoded::byte_serialize(value?.as_bytes()).collect();
                let cookie = format!(
                    "{}={}; Path={}; HttpOnly; SameSite=Lax{}",
                    artifact.name(),
                    value,
                    settings.path,
                    secure_suffix(settings)
                );
                match HeaderValue::from_str(&cookie) {
                    Ok(header) => Some(header),
                    Err(err) => {
                        warn!(artifact = %artifact, error = %err, "Skipping unrenderable session cookie");
                        None
                    }
                }
            })
            .collect()
    }
}

impl ArtifactStorage for CookieJar {
    fn delete(&mut self, name: &str) -> AccessResult<()> {
        if !is_cookie_token(name) {
            return Err(AccessError::StorageRemovalFailure {
                artifact: name.to_string(),
                message: "not a valid cookie name".to_string(),
            });
        }

        let expired = format!(
            "{}=; Path={}; Max-Age=0; HttpOnly; SameSite=Lax{}",
            name,
            self.settings.path,
            secure_suffix(&self.settings)
        );
        let header =
            HeaderValue::from_str(&expired).map_err(|e| AccessError::StorageRemovalFailure {
                artifact: name.to_string(),
                message: e.to_string(),
            })?;

        self.cookies.remove(name);
        self.removals.insert(name.to_string(), header);
        Ok(())
    }
}

fn secure_suffix(settings: &CookieSettings) -> &'static str {
    if settings.secure { "; Secure" } else { "" }
}

/// RFC 6265 `token`: visible ASCII without separators.
fn is_cookie_token(name: &str) -> bool {
    const SEPARATORS: &str = "()<>@,;:\\\"/[]?={} \t";
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_graphic() && !SEPARATORS.contains(c))
}
