use thiserror::Error;

#[derive(Error, Debug)]
pub enum NumvalError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Report error: {message}")]
    ReportError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Io,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl NumvalError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            NumvalError::ConfigValidationError { .. }
            | NumvalError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            NumvalError::IoError(_) => ErrorCategory::Io,
            NumvalError::SerializationError(_)
            | NumvalError::CsvError(_)
            | NumvalError::ReportError { .. } => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for a failed run.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 2,
            ErrorCategory::Io | ErrorCategory::Output => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            NumvalError::IoError(_) => "Check that the input file exists and the output path is writable",
            NumvalError::SerializationError(_) | NumvalError::CsvError(_) => {
                "Try a different --format, or report the failing input"
            }
            NumvalError::ConfigValidationError { .. } => {
                "Check the config file is valid TOML with [validator], [output] and [logging] tables"
            }
            NumvalError::InvalidConfigValueError { .. } => {
                "Fix the offending value; run with --help to see accepted values"
            }
            NumvalError::ReportError { .. } => "Re-run with --verbose for details",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            NumvalError::IoError(e) => format!("Could not read or write a file: {}", e),
            NumvalError::InvalidConfigValueError { field, value, .. } => {
                format!("'{}' is not an accepted value for {}", value, field)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NumvalError>;
