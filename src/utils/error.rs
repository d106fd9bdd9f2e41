use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistrarError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Unknown student: {id}")]
    UnknownStudent { id: String },

    #[error("Unknown course: {code}")]
    UnknownCourse { code: String },

    #[error("Unknown lecturer: {id}")]
    UnknownLecturer { id: String },

    #[error("Unknown person: {id}")]
    UnknownPerson { id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Output,
    Configuration,
    Lookup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RegistrarError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::IoError(_) => ErrorCategory::Io,
            Self::SerializationError(_) | Self::CsvError(_) => ErrorCategory::Output,
            Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
            Self::UnknownStudent { .. }
            | Self::UnknownCourse { .. }
            | Self::UnknownLecturer { .. }
            | Self::UnknownPerson { .. } => ErrorCategory::Lookup,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Lookup => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::IoError(_) => {
                "Check that the file exists and that the output directory is writable"
            }
            Self::SerializationError(_) | Self::CsvError(_) => {
                "Try a different output format or report the problem"
            }
            Self::ConfigValidationError { .. } => "Make sure the scenario file is valid TOML",
            Self::InvalidConfigValueError { .. } => {
                "Fix the highlighted value in the scenario file"
            }
            Self::MissingConfigError { .. } => "Add the missing field to the scenario file",
            Self::UnknownStudent { .. } => "Register the student with the registrar first",
            Self::UnknownCourse { .. } => "Add the course to the catalog first",
            Self::UnknownLecturer { .. } => "Register the lecturer with the registrar first",
            Self::UnknownPerson { .. } => "Check the student or staff identifier",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("Could not read or write a file: {}", self),
            ErrorCategory::Output => format!("Could not render the report: {}", self),
            ErrorCategory::Configuration => format!("The scenario is invalid: {}", self),
            ErrorCategory::Lookup => format!("The registrar has no such record: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistrarError>;
