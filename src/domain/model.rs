use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Why an input was rejected. Only the first failing rule is reported.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    #[error("Input cannot be empty")]
    EmptyInput,
    #[error("Invalid numeric format")]
    MalformedFormat,
    #[error("Invalid number")]
    NonFiniteValue,
}

/// Display copy used for a rejection.
///
/// Form contexts word `MalformedFormat` differently; the kind is the same.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageStyle {
    #[default]
    Standard,
    Form,
}

impl MessageStyle {
    pub const NAMES: [&'static str; 2] = ["standard", "form"];

    pub fn message(self, rejection: Rejection) -> &'static str {
        match (self, rejection) {
            (MessageStyle::Form, Rejection::MalformedFormat) => "Please enter a valid number",
            (_, Rejection::EmptyInput) => "Input cannot be empty",
            (_, Rejection::MalformedFormat) => "Invalid numeric format",
            (_, Rejection::NonFiniteValue) => "Invalid number",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "standard" => Some(MessageStyle::Standard),
            "form" => Some(MessageStyle::Form),
            _ => None,
        }
    }
}

/// Outcome of validating one input string.
///
/// `is_valid` holds exactly when `error_message` is empty and
/// `normalized_value` is present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    is_valid: bool,
    error_message: String,
    normalized_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rejection: Option<Rejection>,
}

impl ValidationResult {
    pub fn valid(value: f64) -> Self {
        Self {
            is_valid: true,
            error_message: String::new(),
            normalized_value: Some(value),
            rejection: None,
        }
    }

    pub fn rejected(rejection: Rejection, style: MessageStyle) -> Self {
        Self {
            is_valid: false,
            error_message: style.message(rejection).to_string(),
            normalized_value: None,
            rejection: Some(rejection),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn normalized_value(&self) -> Option<f64> {
        self.normalized_value
    }

    pub fn rejection(&self) -> Option<Rejection> {
        self.rejection
    }

    pub fn into_value(self) -> std::result::Result<f64, Rejection> {
        match (self.normalized_value, self.rejection) {
            (Some(value), _) => Ok(value),
            (None, Some(rejection)) => Err(rejection),
            // Unreachable through the constructors.
            (None, None) => Err(Rejection::MalformedFormat),
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.normalized_value {
            Some(value) => write!(f, "{}", value),
            None => f.write_str(&self.error_message),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldState {
    Unvalidated,
    Valid(f64),
    Invalid(Rejection),
}

impl FieldState {
    pub fn from_result(result: &ValidationResult) -> Self {
        match (result.normalized_value(), result.rejection()) {
            (Some(value), _) => FieldState::Valid(value),
            (None, Some(rejection)) => FieldState::Invalid(rejection),
            (None, None) => FieldState::Unvalidated,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatedEntry {
    pub line: usize,
    pub input: String,
    pub result: ValidationResult,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub generated_at: DateTime<Utc>,
    pub valid_count: usize,
    pub invalid_count: usize,
    pub entries: Vec<ValidatedEntry>,
}

impl BatchReport {
    pub fn new(entries: Vec<ValidatedEntry>) -> Self {
        let valid_count = entries.iter().filter(|e| e.result.is_valid()).count();
        Self {
            generated_at: Utc::now(),
            invalid_count: entries.len() - valid_count,
            valid_count,
            entries,
        }
    }

    pub fn all_valid(&self) -> bool {
        self.invalid_count == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub destination: String,
    pub valid_count: usize,
    pub invalid_count: usize,
}

impl RunSummary {
    /// 0 when every input was valid, 1 when any was rejected.
    pub fn exit_code(&self) -> i32 {
        if self.invalid_count == 0 {
            0
        } else {
            1
        }
    }
}
