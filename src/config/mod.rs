#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::MessageStyle;
use crate::domain::ports::OutputFormat;
use crate::utils::error::{NumvalError, Result};
use crate::utils::validation::{validate_path, Validate};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

/// Effective settings for a run: explicit flags, then the config file, then defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub message_style: MessageStyle,
    pub output_format: OutputFormat,
    pub output_path: Option<String>,
    pub log_level: Option<String>,
    pub json_logs: bool,
}

/// Flag values that override the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub format: Option<String>,
    pub style: Option<String>,
    pub output: Option<String>,
    pub log_json: bool,
}

impl Settings {
    pub fn resolve(overrides: &Overrides, file: Option<&TomlConfig>) -> Result<Self> {
        if let Some(file) = file {
            file.validate()?;
        }

        let message_style = match overrides.style.as_deref() {
            Some(name) => MessageStyle::parse(name).ok_or_else(|| invalid("style", name))?,
            None => file.and_then(TomlConfig::message_style).unwrap_or_default(),
        };

        let output_format = match overrides.format.as_deref() {
            Some(name) => OutputFormat::parse(name).ok_or_else(|| invalid("format", name))?,
            None => file.and_then(TomlConfig::output_format).unwrap_or_default(),
        };

        let output_path = overrides
            .output
            .clone()
            .or_else(|| file.and_then(|f| f.output_path().map(str::to_string)));

        let settings = Self {
            message_style,
            output_format,
            output_path,
            log_level: file.and_then(|f| f.log_level().map(str::to_string)),
            json_logs: overrides.log_json || file.is_some_and(TomlConfig::json_logs),
        };
        settings.validate()?;
        Ok(settings)
    }
}

fn invalid(field: &str, value: &str) -> NumvalError {
    NumvalError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: "Unsupported value".to_string(),
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.output_path {
            validate_path("output", path)?;
        }
        Ok(())
    }
}

impl ConfigProvider for Settings {
    fn message_style(&self) -> MessageStyle {
        self.message_style
    }

    fn output_format(&self) -> OutputFormat {
        self.output_format
    }
}

#[cfg(feature = "cli")]
impl From<&CliConfig> for Overrides {
    fn from(cli: &CliConfig) -> Self {
        Self {
            format: cli.format.clone(),
            style: cli.style.clone(),
            output: cli.output.clone(),
            log_json: cli.log_json,
        }
    }
}
