use crate::core::validator::NumericValidator;
use crate::domain::model::{FieldState, ValidationResult};

type Listener = Box<dyn FnMut(bool, Option<f64>) + Send>;

/// A text field that re-validates on every edit.
///
/// Each input is validated from scratch; nothing about earlier inputs is kept.
pub struct LiveField {
    validator: NumericValidator,
    text: String,
    state: FieldState,
    last: Option<ValidationResult>,
    listener: Option<Listener>,
}

impl LiveField {
    pub fn new(validator: NumericValidator) -> Self {
        Self {
            validator,
            text: String::new(),
            state: FieldState::Unvalidated,
            last: None,
            listener: None,
        }
    }

    /// Registers a callback invoked with `(is_valid, value)` after each input.
    pub fn with_listener<F>(mut self, listener: F) -> Self
    where
        F: FnMut(bool, Option<f64>) + Send + 'static,
    {
        self.listener = Some(Box::new(listener));
        self
    }

    pub fn on_input(&mut self, text: impl Into<String>) -> &ValidationResult {
        self.text = text.into();
        let result = self.validator.validate(&self.text);
        self.state = FieldState::from_result(&result);

        if let Some(listener) = self.listener.as_mut() {
            listener(result.is_valid(), result.normalized_value());
        }

        self.last.insert(result)
    }

    pub fn reset(&mut self) {
        self.text.clear();
        self.state = FieldState::Unvalidated;
        self.last = None;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn state(&self) -> FieldState {
        self.state
    }

    pub fn result(&self) -> Option<&ValidationResult> {
        self.last.as_ref()
    }

    pub fn is_valid(&self) -> bool {
        matches!(self.state, FieldState::Valid(_))
    }

    pub fn status_text(&self) -> Option<&str> {
        match (&self.state, &self.last) {
            (FieldState::Unvalidated, _) | (_, None) => None,
            (FieldState::Valid(_), _) => Some("Valid number"),
            (FieldState::Invalid(_), Some(result)) => Some(result.error_message()),
        }
    }
}

impl Default for LiveField {
    fn default() -> Self {
        Self::new(NumericValidator::default())
    }
}

impl std::fmt::Debug for LiveField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiveField")
            .field("validator", &self.validator)
            .field("text", &self.text)
            .field("state", &self.state)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}
