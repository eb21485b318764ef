//! Shared parsing helpers for raw request input.

use chrono::NaiveDate;

use crate::domain::StayInterval;
use crate::error::HotelError;

/// Parses an ISO-8601 calendar date supplied for `field`.
///
/// # Errors
///
/// Returns [`HotelError::Validation`] if the value is blank or not a
/// `YYYY-MM-DD` date.
pub fn parse_date(field: &str, raw: &str) -> Result<NaiveDate, HotelError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(HotelError::Validation(format!("{field} is required")));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|e| {
        HotelError::Validation(format!("{field} must be a YYYY-MM-DD date: {e}"))
    })
}

/// Parses and validates a raw start/end pair into a [`StayInterval`].
///
/// # Errors
///
/// Returns [`HotelError::Validation`] if either date is malformed or the
/// start is not strictly before the end.
pub fn parse_stay(
    (start_field, start): (&str, &str),
    (end_field, end): (&str, &str),
) -> Result<StayInterval, HotelError> {
    let start = parse_date(start_field, start)?;
    let end = parse_date(end_field, end)?;
    StayInterval::new(start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        let parsed = parse_date("start", " 2024-01-10 ").ok();
        assert_eq!(parsed, NaiveDate::from_ymd_opt(2024, 1, 10));
    }

    #[test]
    fn blank_date_names_the_field() {
        let err = parse_date("date_debut", "").err().map(|e| e.to_string());
        assert_eq!(
            err.as_deref(),
            Some("validation failed: date_debut is required")
        );
    }

    #[test]
    fn rejects_other_formats() {
        assert!(parse_date("start", "10/01/2024").is_err());
        assert!(parse_date("start", "2024-02-30").is_err());
    }

    #[test]
    fn inverted_stay_is_rejected() {
        let result = parse_stay(("start", "2024-01-20"), ("end", "2024-01-10"));
        assert!(matches!(result, Err(HotelError::Validation(_))));
    }
}
