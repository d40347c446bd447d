use crate::utils::error::{CalcError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CalcError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CalcError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a positive number".to_string(),
        });
    }
    Ok(())
}

/// Returns the trimmed value, or `MissingField` when nothing is left.
pub fn require_text<'a>(field_name: &str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CalcError::MissingField {
            field: field_name.to_string(),
        });
    }
    Ok(trimmed)
}

/// Half-open range check `(min, max]`, used for body measurements where zero
/// is never a real reading.
pub fn validate_open_closed_range(field_name: &str, value: f64, min: f64, max: f64) -> Result<()> {
    if !(value > min && value <= max) {
        return Err(CalcError::validation(
            field_name,
            format!("{} must be greater than {} and at most {}", field_name, min, max),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("records.output_path", "./records").is_ok());
        assert!(validate_path("records.output_path", "").is_err());
        assert!(validate_path("records.output_path", "a\0b").is_err());
    }

    #[test]
    fn test_require_text() {
        assert_eq!(require_text("name", "  Ana ").unwrap(), "Ana");
        assert!(matches!(
            require_text("name", "   "),
            Err(CalcError::MissingField { .. })
        ));
    }

    #[test]
    fn test_open_closed_range() {
        assert!(validate_open_closed_range("height", 2.5, 0.0, 2.5).is_ok());
        assert!(validate_open_closed_range("height", 0.0, 0.0, 2.5).is_err());
        assert!(validate_open_closed_range("height", 2.51, 0.0, 2.5).is_err());
        assert!(validate_open_closed_range("height", f64::NAN, 0.0, 2.5).is_err());
    }
}
