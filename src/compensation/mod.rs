//! Compensation lookups.
//!
//! Static domain tables used by the portal's informational pages, such as
//! public holiday pay multipliers by country.

mod holiday;

pub use holiday::{HolidayCompensation, all_holiday_compensation, holiday_compensation};
