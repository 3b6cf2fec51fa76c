//! Route-dependent chrome decisions.
//!
//! This module decides, for a navigation path, whether the navigation bar
//! and footer should be suppressed.

mod exclusion;

pub use exclusion::{ChromeVisibility, ExclusionTable};
