//! Response types for the portal access API.
//!
//! This module defines the error envelope, the mapping from [`AccessError`]
//! to HTTP status codes, and the JSON bodies returned by the endpoints.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::compensation::HolidayCompensation;
use crate::error::AccessError;
use crate::models::{SessionState, Zone};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<AccessError> for ApiErrorResponse {
    fn from(error: AccessError) -> Self {
        match error {
            AccessError::InvalidZone { zone } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_ZONE",
                    format!("Invalid zone: {}", zone),
                    format!(
                        "Known zones are '{}' and '{}'",
                        Zone::Navbar,
                        Zone::Footer
                    ),
                ),
            },
            AccessError::UnknownCountry { code } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "UNKNOWN_COUNTRY",
                    format!("Unknown country: {}", code),
                    "No holiday compensation rule is recorded for this country",
                ),
            },
            AccessError::StorageRemovalFailure { artifact, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "STORAGE_ERROR",
                    format!("Failed to remove session artifact '{}'", artifact),
                    message,
                ),
            },
            AccessError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            AccessError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            AccessError::InvalidConfig { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Invalid configuration", message),
            },
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `ok` while the process can serve requests.
    pub status: String,
    /// Name of the service.
    pub service: String,
}

/// Body of `GET /exclusions/:zone`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExclusionResponse {
    /// The zone that was evaluated.
    pub zone: Zone,
    /// The path that was evaluated.
    pub path: String,
    /// Whether the zone is suppressed on the path.
    pub excluded: bool,
}

/// Body of `GET /session` and `POST /session`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Whether a session is held.
    pub authenticated: bool,
    /// The signed-in user's id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// The active company.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_company: Option<String>,
    /// The selected company.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_company: Option<String>,
}

impl From<&SessionState> for SessionSummary {
    fn from(state: &SessionState) -> Self {
        Self {
            authenticated: state.is_authenticated(),
            user_id: state.user.as_ref().map(|user| user.id.clone()),
            active_company: state.active_company_id.clone(),
            selected_company: state.selected_company_id.clone(),
        }
    }
}

/// Body of `GET /holiday-compensation/:country`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayCompensationResponse {
    /// ISO 3166-1 alpha-2 country code.
    pub country_code: String,
    /// English country name.
    pub country_name: String,
    /// Multiple of the ordinary rate, as a decimal string.
    pub multiplier: String,
    /// The part of the multiplier above the ordinary rate.
    pub premium: String,
    /// The multiplier formatted for display, e.g. `2.5x`.
    pub label: String,
    /// A sentence describing the rule.
    pub description: String,
}

impl From<&HolidayCompensation> for HolidayCompensationResponse {
    fn from(entry: &HolidayCompensation) -> Self {
        Self {
            country_code: entry.country_code.to_string(),
            country_name: entry.country_name.to_string(),
            multiplier: entry.multiplier.normalize().to_string(),
            premium: entry.premium().normalize().to_string(),
            label: entry.multiplier_label(),
            description: entry.describe(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_zone_maps_to_bad_request() {
        let api_error: ApiErrorResponse = AccessError::InvalidZone {
            zone: "sidebar".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_ZONE");
        assert!(api_error.error.message.contains("sidebar"));
    }

    #[test]
    fn test_unknown_country_maps_to_not_found() {
        let api_error: ApiErrorResponse = AccessError::UnknownCountry {
            code: "ZZ".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::NOT_FOUND);
        assert_eq!(api_error.error.code, "UNKNOWN_COUNTRY");
    }

    #[test]
    fn test_holiday_response_includes_premium() {
        let au = crate::compensation::holiday_compensation("AU").unwrap();
        let response = HolidayCompensationResponse::from(au);
        assert_eq!(response.multiplier, "2.5");
        assert_eq!(response.premium, "1.5");
    }

    #[test]
    fn test_anonymous_session_summary_omits_fields() {
        let summary = SessionSummary::from(&SessionState::default());
        let json = serde_json::to_string(&summary).unwrap();
        assert_eq!(json, r#"{"authenticated":false}"#);
    }
}
