pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{toml_config::TomlConfig, Overrides, Settings};

pub use adapters::{AnySink, AnySource};
pub use core::{
    engine::ValidationEngine,
    form::{FormError, FormSubmission, NumericForm},
    live_field::LiveField,
    pipeline::ValidationPipeline,
    validator::{validate, validate_value, NumericValidator},
};
pub use domain::model::{FieldState, MessageStyle, Rejection, ValidationResult};
pub use domain::ports::OutputFormat;
pub use utils::error::{NumvalError, Result};
