//! HTTP request handlers for the portal access API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Redirect, Response},
    routing::get,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::compensation::{all_holiday_compensation, holiday_compensation};
use crate::error::AccessError;
use crate::models::{SessionState, Zone};
use crate::routing::ChromeVisibility;
use crate::session::{CookieJar, LogoutQuery, terminate_client, terminate_server};

use super::request::{LoginRequest, PathQuery};
use super::response::{
    ApiError, ApiErrorResponse, ExclusionResponse, HealthResponse, HolidayCompensationResponse,
    SessionSummary,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/chrome", get(chrome_handler))
        .route("/exclusions/:zone", get(exclusion_handler))
        .route("/session", get(session_handler).post(login_handler))
        .route("/logout", get(forced_logout_handler).post(logout_handler))
        .route("/holiday-compensation", get(list_holiday_compensation_handler))
        .route(
            "/holiday-compensation/:country",
            get(holiday_compensation_handler),
        )
        .with_state(state)
}

/// Handler for GET /health.
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
    })
}

/// Handler for GET /chrome.
///
/// Returns which shared chrome the layout should hide for `path`.
async fn chrome_handler(
    State(state): State<AppState>,
    Query(query): Query<PathQuery>,
) -> Json<ChromeVisibility> {
    Json(ChromeVisibility::for_path(
        state.config().exclusions(),
        &query.path,
    ))
}

/// Handler for GET /exclusions/:zone.
async fn exclusion_handler(
    State(state): State<AppState>,
    Path(zone): Path<String>,
    Query(query): Query<PathQuery>,
) -> Response {
    match zone.parse::<Zone>() {
        Ok(zone) => {
            let excluded = state.config().exclusions().is_excluded(&query.path, zone);
            Json(ExclusionResponse {
                zone,
                path: query.path,
                excluded,
            })
            .into_response()
        }
        Err(err) => {
            warn!(zone = %zone, "Exclusion check for unknown zone");
            error_response(err)
        }
    }
}

/// Handler for GET /session.
///
/// Answers only for the caller whose `auth_token` cookie matches the held
/// session; every other caller is reported as anonymous.
async fn session_handler(
    State(state): State<AppState>,
    request_headers: HeaderMap,
) -> Json<SessionSummary> {
    let jar = CookieJar::from_headers(&request_headers, state.config().cookies().clone());
    let snapshot = state.sessions().snapshot();
    let owns_session = snapshot
        .token
        .as_deref()
        .is_some_and(|token| jar.holds_token(token));

    if owns_session {
        Json(SessionSummary::from(&snapshot))
    } else {
        Json(SessionSummary::from(&SessionState::default()))
    }
}

/// Handler for POST /session.
///
/// Records the session in the store and sets the session artifact cookies.
async fn login_handler(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "Login payload data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "Login payload syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let session: SessionState = request.into();
    let mut headers = HeaderMap::new();
    for cookie in CookieJar::session_headers(&session, state.config().cookies()) {
        headers.append(header::SET_COOKIE, cookie);
    }
    let summary = SessionSummary::from(&session);
    state.sessions().login(session);

    info!(
        correlation_id = %correlation_id,
        user_id = summary.user_id.as_deref().unwrap_or_default(),
        "Session established"
    );
    (StatusCode::OK, headers, Json(summary)).into_response()
}

/// Handler for GET /logout.
///
/// Forced logout: clears the session store and redirects to the login page
/// with the reason attached. Always redirects.
async fn forced_logout_handler(
    State(state): State<AppState>,
    Query(query): Query<LogoutQuery>,
) -> Redirect {
    let correlation_id = Uuid::new_v4();
    let target = terminate_client(state.sessions(), &query, state.config().login_path());
    info!(correlation_id = %correlation_id, target = %target, "Forced logout redirect");
    Redirect::to(&target)
}

/// Handler for POST /logout.
///
/// Explicit logout: expires every session artifact cookie and clears the
/// session store. The outcome is always returned with 200; failures are
/// reported in the body.
async fn logout_handler(State(state): State<AppState>, request_headers: HeaderMap) -> Response {
    let correlation_id = Uuid::new_v4();
    let mut jar = CookieJar::from_headers(&request_headers, state.config().cookies().clone());
    let had_session = jar.holds_session();

    let outcome = terminate_server(&mut jar);
    state.sessions().logout();

    let mut headers = HeaderMap::new();
    for cookie in jar.removal_headers() {
        headers.append(header::SET_COOKIE, cookie.clone());
    }

    if outcome.success {
        info!(correlation_id = %correlation_id, had_session, "Logout completed");
    } else {
        warn!(
            correlation_id = %correlation_id,
            error = outcome.error.as_deref().unwrap_or_default(),
            "Logout completed with failure"
        );
    }
    (StatusCode::OK, headers, Json(outcome)).into_response()
}

/// Handler for GET /holiday-compensation.
async fn list_holiday_compensation_handler() -> Json<Vec<HolidayCompensationResponse>> {
    Json(
        all_holiday_compensation()
            .iter()
            .map(HolidayCompensationResponse::from)
            .collect(),
    )
}

/// Handler for GET /holiday-compensation/:country.
async fn holiday_compensation_handler(Path(country): Path<String>) -> Response {
    match holiday_compensation(&country) {
        Ok(entry) => Json(HolidayCompensationResponse::from(entry)).into_response(),
        Err(err) => {
            warn!(country = %country, "Holiday compensation lookup failed");
            error_response(err)
        }
    }
}

/// Converts an error into a JSON error response.
fn error_response(err: AccessError) -> Response {
    ApiErrorResponse::from(err).into_response()
}
