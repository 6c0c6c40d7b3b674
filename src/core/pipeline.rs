use crate::core::report::render;
use crate::core::validator::NumericValidator;
use crate::core::{BatchReport, ConfigProvider, InputSource, Pipeline, ReportSink, ValidatedEntry};
use crate::utils::error::Result;

pub struct ValidationPipeline<S: InputSource, K: ReportSink, C: ConfigProvider> {
    source: S,
    sink: K,
    config: C,
}

impl<S: InputSource, K: ReportSink, C: ConfigProvider> ValidationPipeline<S, K, C> {
    pub fn new(source: S, sink: K, config: C) -> Self {
        Self {
            source,
            sink,
            config,
        }
    }
}

#[async_trait::async_trait]
impl<S: InputSource, K: ReportSink, C: ConfigProvider> Pipeline for ValidationPipeline<S, K, C> {
    async fn extract(&self) -> Result<Vec<String>> {
        tracing::debug!("Reading inputs from {}", self.source.describe());
        self.source.read_inputs().await
    }

    async fn transform(&self, inputs: Vec<String>) -> Result<BatchReport> {
        let validator = NumericValidator::new(self.config.message_style());

        let entries = inputs
            .into_iter()
            .enumerate()
            .map(|(index, input)| {
                let result = validator.validate(&input);
                ValidatedEntry {
                    line: index + 1,
                    input,
                    result,
                }
            })
            .collect();

        Ok(BatchReport::new(entries))
    }

    async fn load(&self, report: &BatchReport) -> Result<String> {
        let format = self.config.output_format();
        tracing::debug!("Rendering {} entries as {:?}", report.entries.len(), format);
        let rendered = render(report, format)?;
        self.sink.write_report(&rendered).await
    }
}
