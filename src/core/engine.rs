use crate::core::{Pipeline, RunSummary};
use crate::utils::error::Result;

pub struct ValidationEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ValidationEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!("Starting validation run");

        let inputs = self.pipeline.extract().await?;
        tracing::info!("Read {} inputs", inputs.len());

        let report = self.pipeline.transform(inputs).await?;
        tracing::info!(
            "Validated {} inputs: {} valid, {} invalid",
            report.entries.len(),
            report.valid_count,
            report.invalid_count
        );

        let destination = self.pipeline.load(&report).await?;
        tracing::info!("Report written to {}", destination);

        Ok(RunSummary {
            destination,
            valid_count: report.valid_count,
            invalid_count: report.invalid_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BatchReport, ValidatedEntry};
    use crate::core::validator::validate;
    use crate::utils::error::NumvalError;

    struct FixedPipeline {
        fail_load: bool,
    }

    #[async_trait::async_trait]
    impl Pipeline for FixedPipeline {
        async fn extract(&self) -> Result<Vec<String>> {
            Ok(vec!["8".to_string(), "8.".to_string(), "".to_string()])
        }

        async fn transform(&self, inputs: Vec<String>) -> Result<BatchReport> {
            Ok(BatchReport::new(
                inputs
                    .into_iter()
                    .enumerate()
                    .map(|(i, input)| ValidatedEntry {
                        line: i + 1,
                        result: validate(&input),
                        input,
                    })
                    .collect(),
            ))
        }

        async fn load(&self, _report: &BatchReport) -> Result<String> {
            if self.fail_load {
                return Err(NumvalError::ReportError {
                    message: "sink closed".to_string(),
                });
            }
            Ok("stdout".to_string())
        }
    }

    #[tokio::test]
    async fn test_run_summarises_counts() {
        let engine = ValidationEngine::new(FixedPipeline { fail_load: false });
        let summary = engine.run().await.unwrap();
        assert_eq!(
            summary,
            RunSummary {
                destination: "stdout".to_string(),
                valid_count: 1,
                invalid_count: 2,
            }
        );
    }

    #[tokio::test]
    async fn test_run_propagates_load_errors() {
        let engine = ValidationEngine::new(FixedPipeline { fail_load: true });
        let err = engine.run().await.unwrap_err();
        assert!(matches!(err, NumvalError::ReportError { .. }));
    }
}
