//! Zone model.
//!
//! A zone is a region of shared chrome whose visibility depends on the
//! current route.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AccessError;

/// A shared UI region that can be suppressed per route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    /// The top navigation bar.
    Navbar,
    /// The page footer.
    Footer,
}

impl Zone {
    /// Every zone, in rendering order.
    pub const ALL: [Zone; 2] = [Zone::Navbar, Zone::Footer];

    /// Returns the wire name of the zone.
    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::Navbar => "navbar",
            Zone::Footer => "footer",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Zone {
    type Err = AccessError;

    /// Parses a zone name. Names are matched exactly.
    ///
    /// # Examples
    ///
    /// ```
    /// use portal_access::models::Zone;
    ///
    /// assert_eq!("footer".parse::<Zone>().unwrap(), Zone::Footer);
    /// assert!("Footer".parse::<Zone>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "navbar" => Ok(Zone::Navbar),
            "footer" => Ok(Zone::Footer),
            other => Err(AccessError::InvalidZone {
                zone: other.to_string(),
            }),
        }
    }
}
