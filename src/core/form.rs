use crate::core::live_field::LiveField;
use crate::core::validator::NumericValidator;
use crate::domain::model::{FieldState, MessageStyle, Rejection};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("This field is required")]
    Required,
    #[error("{message}")]
    Invalid { kind: Rejection, message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormSubmission {
    pub raw: String,
    pub value: f64,
}

/// Single-field numeric entry form. Submission is gated on a valid value.
#[derive(Debug)]
pub struct NumericForm {
    field: LiveField,
}

impl NumericForm {
    pub fn new() -> Self {
        Self {
            field: LiveField::new(NumericValidator::new(MessageStyle::Form)),
        }
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.field.on_input(text);
    }

    pub fn field(&self) -> &LiveField {
        &self.field
    }

    pub fn can_submit(&self) -> bool {
        self.field.is_valid()
    }

    pub fn submit(&self) -> Result<FormSubmission, FormError> {
        match self.field.state() {
            FieldState::Valid(value) => {
                tracing::debug!(value, "form submitted");
                Ok(FormSubmission {
                    raw: self.field.text().to_string(),
                    value,
                })
            }
            FieldState::Unvalidated | FieldState::Invalid(Rejection::EmptyInput) => {
                Err(FormError::Required)
            }
            FieldState::Invalid(kind) => Err(FormError::Invalid {
                kind,
                message: MessageStyle::Form.message(kind).to_string(),
            }),
        }
    }
}

impl Default for NumericForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untouched_form_requires_input() {
        let form = NumericForm::new();
        assert!(!form.can_submit());
        assert_eq!(form.submit(), Err(FormError::Required));
        assert_eq!(FormError::Required.to_string(), "This field is required");
    }

    #[test]
    fn test_invalid_input_blocks_submit_with_form_copy() {
        let mut form = NumericForm::new();
        form.set_input("12abc");
        assert!(!form.can_submit());
        let err = form.submit().unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid number");
        assert!(matches!(
            err,
            FormError::Invalid {
                kind: Rejection::MalformedFormat,
                ..
            }
        ));
    }

    #[test]
    fn test_cleared_input_is_required_again() {
        let mut form = NumericForm::new();
        form.set_input("4");
        form.set_input("");
        assert_eq!(form.submit(), Err(FormError::Required));
    }

    #[test]
    fn test_valid_input_submits_parsed_value() {
        let mut form = NumericForm::new();
        form.set_input("-0.75");
        assert!(form.can_submit());
        assert_eq!(
            form.submit(),
            Ok(FormSubmission {
                raw: "-0.75".to_string(),
                value: -0.75,
            })
        );
    }
}
