use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    System,
    Data,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RegistryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RegistryError::IoError(_) => ErrorCategory::System,
            RegistryError::SerializationError(_)
            | RegistryError::CsvError(_)
            | RegistryError::ValidationError { .. } => ErrorCategory::Data,
            RegistryError::ConfigError { .. } | RegistryError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RegistryError::IoError(_) => ErrorSeverity::Critical,
            RegistryError::SerializationError(_) | RegistryError::CsvError(_) => {
                ErrorSeverity::High
            }
            RegistryError::ValidationError { .. }
            | RegistryError::ConfigError { .. }
            | RegistryError::InvalidConfigValueError { .. } => ErrorSeverity::Medium,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RegistryError::IoError(_) => "Check that the file exists and is readable",
            RegistryError::SerializationError(_) => {
                "Seed JSON must be an array of objects with name, age and optional email"
            }
            RegistryError::CsvError(_) => "Seed CSV needs a header row: name,age,email",
            RegistryError::ConfigError { .. } => "Check the TOML syntax of the config file",
            RegistryError::ValidationError { .. }
            | RegistryError::InvalidConfigValueError { .. } => {
                "Fix the reported value and run again"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RegistryError::IoError(e) => format!("Could not read file: {}", e),
            RegistryError::SerializationError(e) => format!("Invalid JSON seed data: {}", e),
            RegistryError::CsvError(e) => format!("Invalid CSV seed data: {}", e),
            RegistryError::ConfigError { message } => format!("Bad configuration: {}", message),
            RegistryError::ValidationError { message } => message.clone(),
            RegistryError::InvalidConfigValueError { field, reason, .. } => {
                format!("{}: {}", field, reason)
            }
        }
    }

    /// Process exit code for a failure of this severity.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
