use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::registration::mask::format_phone;
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::require_text;

pub const MIN_PASSWORD_LEN: usize = 6;

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
    })
}

pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// Sign-up form for a health professional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfessionalForm {
    pub name: String,
    pub email: String,
    pub profession: String,
    pub specialty: Option<String>,
    pub workplace: Option<String>,
    pub phone: Option<String>,
    pub password: String,
    pub password_confirmation: String,
}

/// Profile data kept after sign-up. The password goes to the auth provider
/// and is never part of the profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Professional {
    pub name: String,
    pub email: String,
    pub profession: String,
    pub specialty: Option<String>,
    pub workplace: Option<String>,
    pub phone: Option<String>,
}

fn optional(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl ProfessionalForm {
    pub fn validate(&self) -> Result<Professional> {
        let name = require_text("name", &self.name)?;
        let email = require_text("email", &self.email)?;
        let profession = require_text("profession", &self.profession)?;
        if self.password.is_empty() {
            return Err(CalcError::MissingField {
                field: "password".to_string(),
            });
        }
        if self.password_confirmation.is_empty() {
            return Err(CalcError::MissingField {
                field: "password_confirmation".to_string(),
            });
        }

        if !is_valid_email(email) {
            return Err(CalcError::validation("email", "Invalid e-mail address."));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(CalcError::validation(
                "password",
                format!("Password must be at least {} characters.", MIN_PASSWORD_LEN),
            ));
        }
        if self.password != self.password_confirmation {
            return Err(CalcError::validation(
                "password_confirmation",
                "Passwords do not match.",
            ));
        }

        Ok(Professional {
            name: name.to_string(),
            email: email.to_string(),
            profession: profession.to_string(),
            specialty: optional(&self.specialty),
            workplace: optional(&self.workplace),
            phone: optional(&self.phone).map(|p| format_phone(&p)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ProfessionalForm {
        ProfessionalForm {
            name: "Dra. Ana Lima".into(),
            email: "ana@clinica.com.br".into(),
            profession: "Biomédica".into(),
            specialty: Some("  ".into()),
            workplace: None,
            phone: Some("11999998888".into()),
            password: "segredo".into(),
            password_confirmation: "segredo".into(),
        }
    }

    #[test]
    fn test_valid_professional() {
        let professional = valid_form().validate().unwrap();
        assert_eq!(professional.phone.as_deref(), Some("(11) 99999-8888"));
        assert_eq!(professional.specialty, None);
    }

    #[test]
    fn test_email_rules() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("@c.com"));
    }

    #[test]
    fn test_password_rules() {
        let short = ProfessionalForm {
            password: "abc".into(),
            password_confirmation: "abc".into(),
            ..valid_form()
        };
        assert!(matches!(short.validate(), Err(CalcError::Validation { .. })));

        let mismatch = ProfessionalForm {
            password_confirmation: "outra-senha".into(),
            ..valid_form()
        };
        assert!(matches!(
            mismatch.validate(),
            Err(CalcError::Validation { ref field, .. }) if field == "password_confirmation"
        ));
    }

    #[test]
    fn test_required_fields() {
        let form = ProfessionalForm {
            profession: " ".into(),
            ..valid_form()
        };
        assert!(matches!(form.validate(), Err(CalcError::MissingField { .. })));
    }
}
