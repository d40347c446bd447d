use crate::core::ehsani::DEFAULT_EHSANI_CUTOFF;
use crate::core::igk::{IMPEDANCE_CUTOFF, LASER_CUTOFF};
use crate::core::screening::DEFAULT_PEDIATRIC_AGE_LIMIT;
use crate::domain::model::CountingPrinciple;
use crate::domain::ports::SettingsProvider;
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{validate_path, validate_positive, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_MAX_HEIGHT_M: f64 = 2.5;
pub const DEFAULT_MAX_WEIGHT_KG: f64 = 300.0;
pub const DEFAULT_RECORDS_PATH: &str = "./records";

/// Calculator settings, loadable from TOML. Every section and key is optional;
/// omitted values fall back to the clinical defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub ehsani: EhsaniConfig,
    pub igk: IgkConfig,
    pub registration: RegistrationConfig,
    pub records: RecordsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EhsaniConfig {
    pub cutoff: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IgkConfig {
    pub impedance_cutoff: f64,
    pub laser_cutoff: f64,
    pub default_principle: CountingPrinciple,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationConfig {
    pub pediatric_age_limit: u32,
    pub max_height_m: f64,
    pub max_weight_kg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordsConfig {
    pub output_path: String,
    pub filename: String,
}

impl Default for EhsaniConfig {
    fn default() -> Self {
        Self {
            cutoff: DEFAULT_EHSANI_CUTOFF,
        }
    }
}

impl Default for IgkConfig {
    fn default() -> Self {
        Self {
            impedance_cutoff: IMPEDANCE_CUTOFF,
            laser_cutoff: LASER_CUTOFF,
            default_principle: CountingPrinciple::Impedance,
        }
    }
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            pediatric_age_limit: DEFAULT_PEDIATRIC_AGE_LIMIT,
            max_height_m: DEFAULT_MAX_HEIGHT_M,
            max_weight_kg: DEFAULT_MAX_WEIGHT_KG,
        }
    }
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self {
            output_path: DEFAULT_RECORDS_PATH.to_string(),
            filename: "resultados_pacientes.jsonl".to_string(),
        }
    }
}

impl CalculatorConfig {
    /// Loads the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CalcError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Parses the configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CalcError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left
    /// as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CalcError::Config {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if !self.ehsani.cutoff.is_finite() {
            return Err(CalcError::InvalidConfigValue {
                field: "ehsani.cutoff".to_string(),
                value: self.ehsani.cutoff.to_string(),
                reason: "Cutoff must be a finite number".to_string(),
            });
        }
        validate_positive("igk.impedance_cutoff", self.igk.impedance_cutoff)?;
        validate_positive("igk.laser_cutoff", self.igk.laser_cutoff)?;
        validate_positive("registration.max_height_m", self.registration.max_height_m)?;
        validate_positive("registration.max_weight_kg", self.registration.max_weight_kg)?;
        validate_path("records.output_path", &self.records.output_path)?;
        validate_path("records.filename", &self.records.filename)?;

        Ok(())
    }

    pub fn records_file(&self) -> std::path::PathBuf {
        Path::new(&self.records.output_path).join(&self.records.filename)
    }
}

impl SettingsProvider for CalculatorConfig {
    fn ehsani_cutoff(&self) -> f64 {
        self.ehsani.cutoff
    }

    fn igk_cutoff(&self, principle: CountingPrinciple) -> f64 {
        match principle {
            CountingPrinciple::Impedance => self.igk.impedance_cutoff,
            CountingPrinciple::Laser => self.igk.laser_cutoff,
        }
    }

    fn default_principle(&self) -> CountingPrinciple {
        self.igk.default_principle
    }

    fn pediatric_age_limit(&self) -> u32 {
        self.registration.pediatric_age_limit
    }

    fn max_height_m(&self) -> f64 {
        self.registration.max_height_m
    }

    fn max_weight_kg(&self) -> f64 {
        self.registration.max_weight_kg
    }
}

impl Validate for CalculatorConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = CalculatorConfig::from_toml_str("").unwrap();
        assert_eq!(config, CalculatorConfig::default());
        assert_eq!(config.ehsani_cutoff(), 15.0);
        assert_eq!(config.igk_cutoff(CountingPrinciple::Impedance), 65.0);
        assert_eq!(config.igk_cutoff(CountingPrinciple::Laser), 70.0);
        assert_eq!(config.pediatric_age_limit(), 14);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_override() {
        let toml_content = r#"
[ehsani]
cutoff = 13.5

[igk]
default_principle = "laser"
"#;

        let config = CalculatorConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.ehsani_cutoff(), 13.5);
        assert_eq!(config.default_principle(), CountingPrinciple::Laser);
        assert_eq!(config.igk_cutoff(CountingPrinciple::Laser), 70.0);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ANEMIA_CALC_TEST_RECORDS", "/tmp/anemia-records");

        let toml_content = r#"
[records]
output_path = "${ANEMIA_CALC_TEST_RECORDS}"
"#;

        let config = CalculatorConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.records.output_path, "/tmp/anemia-records");

        std::env::remove_var("ANEMIA_CALC_TEST_RECORDS");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[igk]
impedance_cutoff = 0
"#;

        let config = CalculatorConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let err = CalculatorConfig::from_toml_str("[ehsani\ncutoff = ").unwrap_err();
        assert!(matches!(err, CalcError::Config { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[registration]\npediatric_age_limit = 12\n")
            .unwrap();

        let config = CalculatorConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.pediatric_age_limit(), 12);
    }
}
