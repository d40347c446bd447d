use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Field '{field}' is required")]
    MissingField { field: String },

    #[error("Field '{field}' has invalid numeric value '{value}'")]
    Parse { field: String, value: String },

    #[error("Undefined result: {message}")]
    Domain { message: String },

    #[error("Validation error on '{field}': {message}")]
    Validation { field: String, message: String },

    #[error("Invalid config value for '{field}': '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CalcError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Arithmetic,
    Registration,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CalcError {
    pub fn parse(field: &str, value: &str) -> Self {
        CalcError::Parse {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        CalcError::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            CalcError::MissingField { .. } | CalcError::Parse { .. } => ErrorCategory::Input,
            CalcError::Domain { .. } => ErrorCategory::Arithmetic,
            CalcError::Validation { .. } => ErrorCategory::Registration,
            CalcError::InvalidConfigValue { .. } | CalcError::Config { .. } => {
                ErrorCategory::Configuration
            }
            CalcError::Io(_) | CalcError::Serialization(_) => ErrorCategory::System,
        }
    }

    /// Anything the user can fix by re-typing a value stays below `High`.
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Arithmetic => ErrorSeverity::Medium,
            ErrorCategory::Registration => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CalcError::MissingField { .. } => "Please fill in all required fields.".to_string(),
            CalcError::Parse { field, .. } => {
                format!("Please enter a valid numeric value for {}.", field)
            }
            CalcError::Domain { message } => format!("The result cannot be computed: {}.", message),
            CalcError::Validation { message, .. } => message.clone(),
            CalcError::InvalidConfigValue { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            CalcError::Config { message } => format!("Configuration problem: {}", message),
            CalcError::Io(e) => format!("Could not access the file system: {}", e),
            CalcError::Serialization(e) => format!("Could not encode the record: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CalcError::MissingField { .. } => "Provide every field marked as required",
            CalcError::Parse { .. } => "Use digits with a comma or dot as decimal separator (e.g. 12,5)",
            CalcError::Domain { .. } => {
                "Check the entered values; hemoglobin must be greater than zero"
            }
            CalcError::Validation { .. } => "Review the highlighted field and try again",
            CalcError::InvalidConfigValue { .. } | CalcError::Config { .. } => {
                "Check the TOML configuration file"
            }
            CalcError::Io(_) => "Check that the output directory exists and is writable",
            CalcError::Serialization(_) => "Report this problem; the record could not be encoded",
        }
    }
}
