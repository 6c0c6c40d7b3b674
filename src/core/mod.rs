pub mod engine;
pub mod form;
pub mod grammar;
pub mod live_field;
pub mod pipeline;
pub mod report;
pub mod validator;

pub use crate::domain::model::{BatchReport, RunSummary, ValidatedEntry};
pub use crate::domain::ports::{ConfigProvider, InputSource, Pipeline, ReportSink};
pub use crate::utils::error::Result;
