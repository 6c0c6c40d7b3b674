use crate::domain::model::BatchReport;
use crate::domain::ports::OutputFormat;
use crate::utils::error::{NumvalError, Result};
use serde::Serialize;

#[derive(Serialize)]
struct CsvRow<'a> {
    line: usize,
    input: &'a str,
    is_valid: bool,
    value: Option<String>,
    error: &'a str,
}

pub fn render(report: &BatchReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Csv => render_csv(report),
    }
}

/// Inputs are shown `Debug`-escaped so control characters cannot split a line.
fn render_text(report: &BatchReport) -> String {
    let mut lines: Vec<String> = report
        .entries
        .iter()
        .map(|entry| match entry.result.normalized_value() {
            Some(value) => format!("✓ {:?} => {}", entry.input, value),
            None => format!("✗ {:?}: {}", entry.input, entry.result.error_message()),
        })
        .collect();

    lines.push(format!(
        "{} valid, {} invalid",
        report.valid_count, report.invalid_count
    ));
    lines.join("\n") + "\n"
}

fn render_csv(report: &BatchReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    // An empty report still gets its header row.
    if report.entries.is_empty() {
        writer.write_record(["line", "input", "is_valid", "value", "error"])?;
    }
    for entry in &report.entries {
        writer.serialize(CsvRow {
            line: entry.line,
            input: &entry.input,
            is_valid: entry.result.is_valid(),
            // Same number formatting as the text report.
            value: entry.result.normalized_value().map(|v| v.to_string()),
            error: entry.result.error_message(),
        })?;
    }

    let bytes = writer.into_inner().map_err(|e| NumvalError::ReportError {
        message: format!("Failed to flush CSV output: {}", e),
    })?;
    String::from_utf8(bytes).map_err(|e| NumvalError::ReportError {
        message: format!("CSV output is not UTF-8: {}", e),
    })
}
