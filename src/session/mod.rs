//! Session lifecycle for the portal.
//!
//! This module contains the injectable session store, the request-scoped
//! cookie storage, and the client- and server-side termination handlers.

mod cookies;
mod store;
mod termination;

pub use cookies::{ArtifactStorage, CookieJar};
pub use store::{InMemorySessionStore, SessionStore};
pub use termination::{LogoutQuery, redirect_target, terminate_client, terminate_server};
