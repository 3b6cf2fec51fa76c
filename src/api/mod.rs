//! HTTP API module for the portal access boundary.
//!
//! This module exposes chrome visibility, session login and logout, and the
//! holiday compensation lookups as REST endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{LoginRequest, PathQuery};
pub use response::{
    ApiError, ExclusionResponse, HealthResponse, HolidayCompensationResponse, SessionSummary,
};
pub use state::AppState;
