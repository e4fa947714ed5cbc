//! Value converters shared by every table and badge on the dashboard.
//!
//! The backend hands out plain JSON numbers and several date spellings
//! (ISO dates from hand-written fixtures, HTTP dates from the Flask
//! serializer). Everything here turns those into the fixed display strings
//! the views render.

use crate::error::ConvertError;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer};

/// Placeholder rendered where a value is not available.
pub const MISSING_VALUE: &str = "-";

const DATE_FORMATS: &[&str] = &["%Y-%m-%d"];

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Formats `value` with exactly `places` decimals.
///
/// Midpoints round away from zero on the decimal value, so `87.655`
/// becomes `87.66` and `-0.125` becomes `-0.13`.
pub fn format_fixed(value: Decimal, places: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(places);
    rounded.to_string()
}

/// Two-decimal rendering used for forecast values and percentages.
pub fn format_two_decimals(value: Decimal) -> String {
    format_fixed(value, 2)
}

/// Renders a period as `MM-YYYY`.
///
/// The calendar date is taken as written by the backend; no time zone
/// shift is applied.
pub fn format_month_year(date: NaiveDate) -> String {
    date.format("%m-%Y").to_string()
}

/// Parses the `ds` field of a series point.
///
/// Accepts `YYYY-MM-DD`, naive ISO date-times, RFC 3339 timestamps and
/// RFC 2822 / HTTP dates such as `Fri, 15 Mar 2024 00:00:00 GMT`.
pub fn parse_period_date(raw: &str) -> Result<NaiveDate, ConvertError> {
    let raw = raw.trim();

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Ok(date);
        }
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(date_time) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(date_time.date());
        }
    }

    if let Ok(date_time) = DateTime::parse_from_rfc3339(raw) {
        return Ok(date_time.date_naive());
    }

    if let Ok(date_time) = DateTime::parse_from_rfc2822(raw) {
        return Ok(date_time.date_naive());
    }

    tracing::debug!(raw, "Date did not match any known format");
    Err(ConvertError::Date(raw.to_string()))
}

/// Serde adapter for `ds` fields, see [`parse_period_date`].
pub fn deserialize_period_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_period_date(&raw).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(raw: &str) -> Decimal {
        Decimal::from_str(raw).unwrap()
    }

    #[test]
    fn test_format_two_decimals_rounds_half_away_from_zero() {
        assert_eq!(format_two_decimals(dec("87.655")), "87.66");
        assert_eq!(format_two_decimals(dec("1.005")), "1.01");
        assert_eq!(format_two_decimals(dec("87.654")), "87.65");
        assert_eq!(format_two_decimals(dec("-0.125")), "-0.13");
    }

    #[test]
    fn test_format_two_decimals_pads_short_values() {
        assert_eq!(format_two_decimals(dec("42.1")), "42.10");
        assert_eq!(format_two_decimals(dec("42")), "42.00");
        assert_eq!(format_two_decimals(dec("-50")), "-50.00");
    }

    #[test]
    fn test_format_fixed_four_places() {
        assert_eq!(format_fixed(dec("123.45678"), 4), "123.4568");
        assert_eq!(format_fixed(dec("0.5"), 4), "0.5000");
    }

    #[test]
    fn test_format_month_year() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(format_month_year(date), "03-2024");

        let date = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
        assert_eq!(format_month_year(date), "12-2025");
    }

    #[test]
    fn test_parse_period_date_accepts_known_spellings() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();

        for raw in [
            "2024-03-15",
            " 2024-03-15 ",
            "2024-03-15T00:00:00",
            "2024-03-15T13:45:10.250",
            "2024-03-15 00:00:00",
            "2024-03-15T00:00:00+07:00",
            "2024-03-15T00:00:00Z",
            "Fri, 15 Mar 2024 00:00:00 GMT",
        ] {
            assert_eq!(parse_period_date(raw), Ok(expected), "input {raw:?}");
        }
    }

    #[test]
    fn test_parse_period_date_rejects_garbage() {
        assert_eq!(
            parse_period_date("March 2024"),
            Err(ConvertError::Date("March 2024".to_string()))
        );
        assert!(parse_period_date("").is_err());
        assert!(parse_period_date("2024-13-01").is_err());
    }
}
