//! Numeric string validation.
//!
//! Rules are checked in order and the first failure wins:
//! empty input, then the grammar, then finiteness of the parsed value.

use crate::core::grammar::matches_numeric_grammar;
use crate::domain::model::{MessageStyle, Rejection, ValidationResult};

/// Validates `input` with the standard messages.
pub fn validate(input: &str) -> ValidationResult {
    NumericValidator::default().validate(input)
}

/// Like [`validate`], but yields the parsed value or the rejection kind.
pub fn validate_value(input: &str) -> Result<f64, Rejection> {
    check(input)
}

fn check(input: &str) -> Result<f64, Rejection> {
    if input.is_empty() {
        return Err(Rejection::EmptyInput);
    }
    if !matches_numeric_grammar(input) {
        return Err(Rejection::MalformedFormat);
    }
    // The grammar admits only forms `f64::from_str` understands.
    let value: f64 = input.parse().map_err(|_| Rejection::MalformedFormat)?;
    if !value.is_finite() {
        return Err(Rejection::NonFiniteValue);
    }
    Ok(value)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumericValidator {
    style: MessageStyle,
}

impl NumericValidator {
    pub fn new(style: MessageStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> MessageStyle {
        self.style
    }

    pub fn validate(&self, input: &str) -> ValidationResult {
        match check(input) {
            Ok(value) => ValidationResult::valid(value),
            Err(rejection) => {
                tracing::trace!(?rejection, len = input.len(), "input rejected");
                ValidationResult::rejected(rejection, self.style)
            }
        }
    }

    pub fn is_numeric(&self, input: &str) -> bool {
        check(input).is_ok()
    }
}
