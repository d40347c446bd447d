use chrono::{Datelike, NaiveDate};

use crate::utils::error::{CalcError, Result};

pub const BIRTH_DATE_FORMAT: &str = "%d/%m/%Y";

/// Parses a `DD/MM/YYYY` birth date.
pub fn parse_birth_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), BIRTH_DATE_FORMAT).map_err(|_| {
        CalcError::validation("birth_date", "Enter the full birth date as DD/MM/YYYY")
    })
}

/// Completed years between `birth` and `today`, or `None` if `birth` is in the
/// future.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> Option<u32> {
    if birth > today {
        return None;
    }
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    u32::try_from(years).ok()
}

pub fn age_from_birth_date(text: &str, today: NaiveDate) -> Option<u32> {
    parse_birth_date(text).ok().and_then(|birth| age_on(birth, today))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_counts_completed_years() {
        let today = date(2025, 6, 15);
        assert_eq!(age_on(date(2010, 6, 15), today), Some(15));
        assert_eq!(age_on(date(2010, 6, 16), today), Some(14));
        assert_eq!(age_on(date(2025, 6, 15), today), Some(0));
    }

    #[test]
    fn test_future_birth_date() {
        assert_eq!(age_on(date(2026, 1, 1), date(2025, 6, 15)), None);
    }

    #[test]
    fn test_birth_date_text() {
        let today = date(2025, 6, 15);
        assert_eq!(age_from_birth_date("01/02/2010", today), Some(15));
        assert_eq!(age_from_birth_date("31/02/2010", today), None);
        assert_eq!(age_from_birth_date("01/02", today), None);
        assert!(parse_birth_date("2010-02-01").is_err());
    }
}
