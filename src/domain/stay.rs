//! Validated date ranges.

use std::fmt;

use chrono::NaiveDate;

use crate::error::HotelError;

/// A date range whose start is strictly before its end.
///
/// The only way to obtain a `StayInterval` is [`StayInterval::new`], which
/// rejects empty and inverted ranges. Operations that need a well-formed
/// range take this type instead of two loose dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayInterval {
    start: NaiveDate,
    end: NaiveDate,
}

impl StayInterval {
    /// Builds an interval from its two bounds.
    ///
    /// # Errors
    ///
    /// Returns [`HotelError::Validation`] if `start >= end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, HotelError> {
        if start >= end {
            return Err(HotelError::Validation(format!(
                "start date {start} must be before end date {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// First day of the interval.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last bound of the interval.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }
}

impl fmt::Display for StayInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        let Some(date) = NaiveDate::from_ymd_opt(y, m, d) else {
            panic!("invalid test date");
        };
        date
    }

    fn stay(from: (u32, u32), to: (u32, u32)) -> StayInterval {
        let Ok(stay) = StayInterval::new(date(2024, from.0, from.1), date(2024, to.0, to.1)) else {
            panic!("invalid test interval");
        };
        stay
    }

    #[test]
    fn rejects_inverted_range() {
        let result = StayInterval::new(date(2024, 1, 20), date(2024, 1, 10));
        assert!(matches!(result, Err(HotelError::Validation(_))));
    }

    #[test]
    fn rejects_empty_range() {
        let result = StayInterval::new(date(2024, 1, 10), date(2024, 1, 10));
        assert!(matches!(result, Err(HotelError::Validation(_))));
    }

    #[test]
    fn accepts_single_night() {
        let Ok(stay) = StayInterval::new(date(2024, 2, 28), date(2024, 2, 29)) else {
            panic!("one-night stay should be valid");
        };
        assert_eq!((stay.start(), stay.end()), (date(2024, 2, 28), date(2024, 2, 29)));
    }

    #[test]
    fn display_is_half_open() {
        assert_eq!(stay((1, 10), (1, 20)).to_string(), "[2024-01-10, 2024-01-20)");
    }
}
