//! Route exclusion evaluation.
//!
//! Shared chrome is hidden on routes such as the login pages. This module
//! holds the static prefix table that drives that decision and the pure
//! functions that consult it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::AccessResult;
use crate::models::Zone;

/// Static mapping from zone to the path prefixes that suppress it.
///
/// Matching is a literal, case-sensitive `starts_with` test. There is no
/// wildcard support, no trailing-slash normalization and no path-segment
/// awareness, so the prefix `/auth` also matches `/auth2`.
///
/// # Example
///
/// ```
/// use portal_access::models::Zone;
/// use portal_access::routing::ExclusionTable;
///
/// let table = ExclusionTable::new()
///     .with_prefixes(Zone::Navbar, ["/auth", "/admin/login"])
///     .with_prefixes(Zone::Footer, ["/auth"]);
///
/// assert!(table.is_excluded("/auth/login", Zone::Navbar));
/// assert!(!table.is_excluded("/profile", Zone::Footer));
/// assert!(!table.is_excluded("/administration", Zone::Navbar));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "HashMap<Zone, Vec<String>>", into = "HashMap<Zone, Vec<String>>")]
pub struct ExclusionTable {
    zones: HashMap<Zone, Vec<String>>,
}

impl ExclusionTable {
    /// Creates an empty table. Every path is visible for every zone.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends prefixes for a zone, keeping table order.
    ///
    /// Empty prefixes are dropped so that no path, including the empty one,
    /// is matched by accident.
    pub fn with_prefixes<I, S>(mut self, zone: Zone, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = self.zones.entry(zone).or_default();
        for prefix in prefixes {
            let prefix = prefix.into();
            if prefix.is_empty() {
                warn!(zone = %zone, "Ignoring empty exclusion prefix");
                continue;
            }
            entry.push(prefix);
        }
        self
    }

    /// Returns the prefixes registered for a zone, in table order.
    pub fn prefixes(&self, zone: Zone) -> &[String] {
        self.zones.get(&zone).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns true if the zone should be suppressed on `path`.
    ///
    /// A zone with no registered prefixes is never suppressed.
    pub fn is_excluded(&self, path: &str, zone: Zone) -> bool {
        self.prefixes(zone)
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
    }

    /// Evaluates an exclusion check for a zone given by name.
    ///
    /// # Errors
    ///
    /// Returns `InvalidZone` if `zone` is not a known zone name.
    ///
    /// # Example
    ///
    /// ```
    /// use portal_access::routing::ExclusionTable;
    ///
    /// let table = ExclusionTable::builtin();
    /// assert!(table.evaluate("/auth/login", "navbar").unwrap());
    /// assert!(table.evaluate("/auth/login", "sidebar").is_err());
    /// ```
    pub fn evaluate(&self, path: &str, zone: &str) -> AccessResult<bool> {
        let zone: Zone = zone.parse()?;
        Ok(self.is_excluded(path, zone))
    }

    /// The table used when no configuration file is supplied.
    pub fn builtin() -> Self {
        Self::new()
            .with_prefixes(Zone::Navbar, ["/auth", "/admin/login", "/logout"])
            .with_prefixes(Zone::Footer, ["/auth", "/logout"])
    }
}

impl From<HashMap<Zone, Vec<String>>> for ExclusionTable {
    fn from(zones: HashMap<Zone, Vec<String>>) -> Self {
        zones
            .into_iter()
            .fold(Self::new(), |table, (zone, prefixes)| {
                table.with_prefixes(zone, prefixes)
            })
    }
}

impl From<ExclusionTable> for HashMap<Zone, Vec<String>> {
    fn from(table: ExclusionTable) -> Self {
        table.zones
    }
}

/// Which shared chrome to hide on one route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChromeVisibility {
    /// True when the navigation bar should not be rendered.
    pub hide_navbar: bool,
    /// True when the footer should not be rendered.
    pub hide_footer: bool,
}

impl ChromeVisibility {
    /// Evaluates every zone for `path`.
    pub fn for_path(table: &ExclusionTable, path: &str) -> Self {
        Self {
            hide_navbar: table.is_excluded(path, Zone::Navbar),
            hide_footer: table.is_excluded(path, Zone::Footer),
        }
    }
}
