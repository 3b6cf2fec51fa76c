//! Core data models for the portal access boundary.
//!
//! This module contains the domain models shared by the evaluator, the
//! session handlers and the API.

mod logout;
mod session_state;
mod zone;

pub use logout::{LogoutOutcome, LogoutReason, SessionArtifact};
pub use session_state::{SessionPhase, SessionState, UserInfo};
pub use zone::Zone;
