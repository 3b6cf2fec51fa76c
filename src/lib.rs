//! Access boundary for the workforce compliance portal.
//!
//! This crate decides which shared chrome is hidden on a route, terminates
//! sessions on the client and server side, and serves the small domain
//! lookups (such as holiday pay multipliers) the portal displays.

#![warn(missing_docs)]

pub mod api;
pub mod compensation;
pub mod config;
pub mod error;
pub mod models;
pub mod routing;
pub mod session;
