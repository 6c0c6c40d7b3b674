use crate::domain::model::MessageStyle;
use crate::domain::ports::OutputFormat;
use crate::utils::error::{NumvalError, Result};
use crate::utils::validation::{validate_log_level, validate_one_of, validate_path, Validate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

static ENV_VAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env placeholder pattern is a valid regex"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub validator: Option<ValidatorConfig>,
    pub output: Option<OutputConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidatorConfig {
    pub message_style: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub format: Option<String>,
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| NumvalError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Expands `${VAR}` from the environment; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures<'_>| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(style) = self.validator.as_ref().and_then(|v| v.message_style.as_deref()) {
            validate_one_of("validator.message_style", style, &MessageStyle::NAMES)?;
        }

        if let Some(output) = &self.output {
            if let Some(format) = output.format.as_deref() {
                validate_one_of("output.format", format, &OutputFormat::NAMES)?;
            }
            if let Some(path) = output.path.as_deref() {
                validate_path("output.path", path)?;
            }
        }

        if let Some(level) = self.logging.as_ref().and_then(|l| l.level.as_deref()) {
            validate_log_level("logging.level", level)?;
        }

        Ok(())
    }

    pub fn message_style(&self) -> Option<MessageStyle> {
        self.validator
            .as_ref()
            .and_then(|v| v.message_style.as_deref())
            .and_then(MessageStyle::parse)
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .and_then(OutputFormat::parse)
    }

    pub fn output_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.path.as_deref())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[validator]
message_style = "form"

[output]
format = "csv"
path = "./report.csv"

[logging]
level = "debug"
json = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.message_style(), Some(MessageStyle::Form));
        assert_eq!(config.output_format(), Some(OutputFormat::Csv));
        assert_eq!(config.output_path(), Some("./report.csv"));
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.json_logs());
    }

    #[test]
    fn test_empty_config_uses_nothing() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.message_style(), None);
        assert_eq!(config.output_format(), None);
        assert!(!config.json_logs());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("NUMVAL_TEST_REPORT_DIR", "/tmp/numval-reports");

        let toml_content = r#"
[output]
path = "${NUMVAL_TEST_REPORT_DIR}/out.json"
other = "${NUMVAL_TEST_UNSET_VARIABLE}"
"#;
        // Unknown keys are rejected, so check substitution on its own first.
        let substituted = TomlConfig::substitute_env_vars(toml_content);
        assert!(substituted.contains("/tmp/numval-reports/out.json"));
        assert!(substituted.contains("${NUMVAL_TEST_UNSET_VARIABLE}"));

        let config =
            TomlConfig::from_toml_str("[output]\npath = \"${NUMVAL_TEST_REPORT_DIR}/out.json\"\n")
                .unwrap();
        assert_eq!(config.output_path(), Some("/tmp/numval-reports/out.json"));

        std::env::remove_var("NUMVAL_TEST_REPORT_DIR");
    }

    #[test]
    fn test_config_validation_rejects_unknown_values() {
        let config = TomlConfig::from_toml_str("[output]\nformat = \"xml\"\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, NumvalError::InvalidConfigValueError { ref field, .. } if field == "output.format"));

        let config = TomlConfig::from_toml_str("[validator]\nmessage_style = \"loud\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_tables_are_parse_errors() {
        let err = TomlConfig::from_toml_str("[pipeline]\nname = \"x\"\n").unwrap_err();
        assert!(matches!(err, NumvalError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[output]\nformat = \"json\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.output_format(), Some(OutputFormat::Json));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TomlConfig::from_file("/definitely/not/here/numval.toml").unwrap_err();
        assert!(matches!(err, NumvalError::IoError(_)));
    }
}
