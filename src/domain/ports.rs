use crate::domain::model::{BatchReport, MessageStyle};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait InputSource: Send + Sync {
    fn read_inputs(&self) -> impl std::future::Future<Output = Result<Vec<String>>> + Send;
    fn describe(&self) -> String;
}

pub trait ReportSink: Send + Sync {
    /// Writes a rendered report and returns where it went.
    fn write_report(
        &self,
        rendered: &str,
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn message_style(&self) -> MessageStyle;
    fn output_format(&self) -> OutputFormat;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<String>>;
    async fn transform(&self, inputs: Vec<String>) -> Result<BatchReport>;
    async fn load(&self, report: &BatchReport) -> Result<String>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 3] = ["text", "json", "csv"];

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            "csv" => Some(OutputFormat::Csv),
            _ => None,
        }
    }
}
