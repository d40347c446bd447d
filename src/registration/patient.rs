use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::screening::screening_for_age;
use crate::domain::model::ScreeningCalculator;
use crate::domain::ports::SettingsProvider;
use crate::registration::age::{age_on, parse_birth_date};
use crate::registration::cpf::{format_cpf, is_valid_cpf, normalize_cpf};
use crate::utils::error::{CalcError, Result};
use crate::utils::number::parse_decimal;
use crate::utils::validation::{require_text, validate_open_closed_range};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Feminino,
    Masculino,
    Outro,
}

impl FromStr for Gender {
    type Err = CalcError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "feminino" | "female" | "f" => Ok(Gender::Feminino),
            "masculino" | "male" | "m" => Ok(Gender::Masculino),
            "outro" | "other" => Ok(Gender::Outro),
            _ => Err(CalcError::validation(
                "gender",
                "Gender must be feminino, masculino or outro",
            )),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Feminino => write!(f, "feminino"),
            Gender::Masculino => write!(f, "masculino"),
            Gender::Outro => write!(f, "outro"),
        }
    }
}

/// Patient registration form as typed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatientForm {
    pub name: String,
    pub cpf: String,
    pub birth_date: String,
    pub height: String,
    pub weight: String,
    pub gender: String,
}

/// A validated patient, shaped like the `pacientes` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub name: String,
    #[serde(rename = "name_lowercase")]
    pub name_lowercase: String,
    pub cpf: String,
    pub cpf_numbers_only: String,
    pub birth_date: NaiveDate,
    pub age: u32,
    pub height: f64,
    pub weight: f64,
    pub gender: Gender,
    pub screening: ScreeningCalculator,
}

impl PatientForm {
    /// Validates every field and computes the derived ones.
    ///
    /// Fields are checked in form order so the first problem reported is the
    /// one highest on the screen.
    pub fn validate<S: SettingsProvider>(&self, settings: &S, today: NaiveDate) -> Result<Patient> {
        let name = require_text("name", &self.name)?;
        let cpf = require_text("cpf", &self.cpf)?;
        let birth_text = require_text("birth_date", &self.birth_date)?;
        let height_text = require_text("height", &self.height)?;
        let weight_text = require_text("weight", &self.weight)?;
        let gender_text = require_text("gender", &self.gender)?;

        if !is_valid_cpf(cpf) {
            return Err(CalcError::validation(
                "cpf",
                "Invalid CPF. Check the number entered.",
            ));
        }

        let birth_date = parse_birth_date(birth_text)?;
        let age = age_on(birth_date, today).ok_or_else(|| {
            CalcError::validation("birth_date", "Birth date cannot be in the future")
        })?;

        let height = parse_decimal("height", height_text)
            .and_then(|h| validate_open_closed_range("height", h, 0.0, settings.max_height_m()).map(|_| h))
            .map_err(|_| CalcError::validation("height", "Enter a valid height (e.g. 1,70)"))?;
        let weight = parse_decimal("weight", weight_text)
            .and_then(|w| validate_open_closed_range("weight", w, 0.0, settings.max_weight_kg()).map(|_| w))
            .map_err(|_| CalcError::validation("weight", "Enter a valid weight (e.g. 65,50)"))?;

        let gender: Gender = gender_text.parse()?;
        let screening = screening_for_age(age, settings.pediatric_age_limit());

        tracing::debug!(age, ?screening, "patient form validated");

        Ok(Patient {
            name: name.to_string(),
            name_lowercase: name.to_lowercase(),
            cpf: format_cpf(cpf),
            cpf_numbers_only: normalize_cpf(cpf),
            birth_date,
            age,
            height,
            weight,
            gender,
            screening,
        })
    }
}
