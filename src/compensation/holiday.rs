//! Public holiday pay multipliers by country.
//!
//! The table is static and covers the countries the portal serves. Each
//! multiplier is the total rate for hours worked on a public holiday,
//! expressed as a multiple of the ordinary rate (so `1.5` is time and a half).

use std::sync::LazyLock;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{AccessError, AccessResult};

/// Holiday pay rule for one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HolidayCompensation {
    /// ISO 3166-1 alpha-2 country code.
    pub country_code: &'static str,
    /// English country name.
    pub country_name: &'static str,
    /// Multiple of the ordinary rate paid for public holiday work.
    pub multiplier: Decimal,
}

impl HolidayCompensation {
    /// Formats the multiplier as a label such as `2.5x`.
    ///
    /// # Example
    ///
    /// ```
    /// use portal_access::compensation::holiday_compensation;
    ///
    /// let au = holiday_compensation("au").unwrap();
    /// assert_eq!(au.multiplier_label(), "2.5x");
    /// ```
    pub fn multiplier_label(&self) -> String {
        format!("{}x", self.multiplier.normalize())
    }

    /// Describes the rule in a sentence suitable for display.
    pub fn describe(&self) -> String {
        if self.multiplier == Decimal::ONE {
            format!(
                "Public holiday work in {} is paid at the ordinary rate",
                self.country_name
            )
        } else {
            format!(
                "Public holiday work in {} is paid at {} the ordinary rate",
                self.country_name,
                self.multiplier_label()
            )
        }
    }

    /// Returns the premium over the ordinary rate (e.g. `1.5` for `2.5x`).
    pub fn premium(&self) -> Decimal {
        (self.multiplier - Decimal::ONE).max(Decimal::ZERO)
    }
}

/// Builds a table entry from a multiplier given in tenths.
fn entry(
    country_code: &'static str,
    country_name: &'static str,
    tenths: u32,
) -> HolidayCompensation {
    HolidayCompensation {
        country_code,
        country_name,
        multiplier: Decimal::new(i64::from(tenths), 1),
    }
}

static HOLIDAY_COMPENSATION: LazyLock<[HolidayCompensation; 10]> = LazyLock::new(|| {
    [
        entry("AU", "Australia", 25),
        entry("CA", "Canada", 15),
        entry("GB", "United Kingdom", 10),
        entry("IN", "India", 20),
        entry("MX", "Mexico", 30),
        entry("NZ", "New Zealand", 15),
        entry("PH", "Philippines", 20),
        entry("SG", "Singapore", 20),
        entry("US", "United States", 15),
        entry("ZA", "South Africa", 20),
    ]
});

/// Returns every entry in the table, ordered by country code.
pub fn all_holiday_compensation() -> &'static [HolidayCompensation] {
    HOLIDAY_COMPENSATION.as_slice()
}

/// Looks up the holiday pay rule for a country code (case-insensitive).
///
/// # Errors
///
/// Returns `UnknownCountry` if the code has no entry.
pub fn holiday_compensation(country_code: &str) -> AccessResult<&'static HolidayCompensation> {
    HOLIDAY_COMPENSATION
        .iter()
        .find(|entry| entry.country_code.eq_ignore_ascii_case(country_code))
        .ok_or_else(|| AccessError::UnknownCountry {
            code: country_code.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_lookup_australia() {
        let au = holiday_compensation("AU").unwrap();
        assert_eq!(au.country_name, "Australia");
        assert_eq!(au.multiplier, dec("2.5"));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(
            holiday_compensation("nz").unwrap(),
            holiday_compensation("NZ").unwrap()
        );
    }

    #[test]
    fn test_unknown_country_returns_error() {
        match holiday_compensation("ZZ") {
            Err(AccessError::UnknownCountry { code }) => assert_eq!(code, "ZZ"),
            other => panic!("Expected UnknownCountry error, got {:?}", other),
        }
    }

    #[test]
    fn test_whole_multiplier_label_has_no_decimal() {
        assert_eq!(holiday_compensation("MX").unwrap().multiplier_label(), "3x");
    }

    #[test]
    fn test_describe_premium_rate() {
        assert_eq!(
            holiday_compensation("US").unwrap().describe(),
            "Public holiday work in United States is paid at 1.5x the ordinary rate"
        );
    }

    #[test]
    fn test_describe_ordinary_rate() {
        assert_eq!(
            holiday_compensation("GB").unwrap().describe(),
            "Public holiday work in United Kingdom is paid at the ordinary rate"
        );
    }

    #[test]
    fn test_premium() {
        assert_eq!(holiday_compensation("AU").unwrap().premium(), dec("1.5"));
        assert_eq!(holiday_compensation("GB").unwrap().premium(), Decimal::ZERO);
    }

    #[test]
    fn test_table_sorted_and_unique() {
        let codes: Vec<&str> = all_holiday_compensation()
            .iter()
            .map(|e| e.country_code)
            .collect();
        let mut sorted = codes.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(codes, sorted);
    }

    #[test]
    fn test_serializes_multiplier_as_string() {
        let json = serde_json::to_value(holiday_compensation("AU").unwrap()).unwrap();
        assert_eq!(json["country_code"], "AU");
        assert_eq!(json["multiplier"], "2.5");
    }
}
