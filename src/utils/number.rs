//! Decimal parsing for values typed on a pt-BR keyboard, where `12,5` and
//! `12.5` mean the same thing.

use crate::utils::error::{CalcError, Result};

/// Parses a decimal that may use a comma as separator.
///
/// Only the first comma is replaced, so `1,234,5` is rejected rather than
/// guessed at. The whole string must be numeric and finite.
pub fn parse_decimal(field: &str, text: &str) -> Result<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CalcError::MissingField {
            field: field.to_string(),
        });
    }

    let normalized = trimmed.replacen(',', ".", 1);
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CalcError::parse(field, text)),
    }
}

/// Like [`parse_decimal`] but also rejects negative readings.
pub fn parse_measurement(field: &str, text: &str) -> Result<f64> {
    let value = parse_decimal(field, text)?;
    if value < 0.0 {
        return Err(CalcError::parse(field, text));
    }
    Ok(value)
}

/// Two-decimal rendering used wherever a score is shown to the user.
pub fn format_score(score: f64) -> String {
    format!("{:.2}", score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_comma_and_dot() {
        assert_eq!(parse_decimal("hb", "12,5").unwrap(), 12.5);
        assert_eq!(parse_decimal("hb", "12.5").unwrap(), 12.5);
        assert_eq!(parse_decimal("hb", " 80 ").unwrap(), 80.0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_decimal("hb", "abc"),
            Err(CalcError::Parse { .. })
        ));
        assert!(matches!(
            parse_decimal("hb", "12abc"),
            Err(CalcError::Parse { .. })
        ));
        assert!(matches!(
            parse_decimal("hb", "1,2,3"),
            Err(CalcError::Parse { .. })
        ));
        assert!(matches!(parse_decimal("hb", "inf"), Err(CalcError::Parse { .. })));
        assert!(matches!(parse_decimal("hb", "NaN"), Err(CalcError::Parse { .. })));
    }

    #[test]
    fn test_parse_empty_is_missing() {
        assert!(matches!(
            parse_decimal("hb", "  "),
            Err(CalcError::MissingField { .. })
        ));
    }

    #[test]
    fn test_measurement_rejects_negative() {
        assert!(parse_measurement("rbc", "-1").is_err());
        assert_eq!(parse_measurement("rbc", "0").unwrap(), 0.0);
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(716.8), "716.80");
        assert_eq!(format_score(-10.0), "-10.00");
    }
}
