use crate::core::ReportSink;
use crate::utils::error::Result;
use std::path::PathBuf;
use tokio::io::AsyncWriteExt;

#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl ReportSink for StdoutSink {
    async fn write_report(&self, rendered: &str) -> Result<String> {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(rendered.as_bytes()).await?;
        stdout.flush().await?;
        Ok("stdout".to_string())
    }
}

#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReportSink for FileSink {
    async fn write_report(&self, rendered: &str) -> Result<String> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, rendered).await?;
        Ok(self.path.display().to_string())
    }
}

#[derive(Debug, Clone)]
pub enum AnySink {
    Stdout(StdoutSink),
    File(FileSink),
}

impl AnySink {
    pub fn select(path: Option<&str>) -> Self {
        match path {
            Some(path) => AnySink::File(FileSink::new(path)),
            None => AnySink::Stdout(StdoutSink),
        }
    }
}

impl ReportSink for AnySink {
    async fn write_report(&self, rendered: &str) -> Result<String> {
        match self {
            AnySink::Stdout(sink) => sink.write_report(rendered).await,
            AnySink::File(sink) => sink.write_report(rendered).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_file_sink_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/reports/out.txt");

        let destination = FileSink::new(&path).write_report("1 valid, 0 invalid\n").await.unwrap();

        assert_eq!(destination, path.display().to_string());
        let written = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(written, "1 valid, 0 invalid\n");
    }

    #[test]
    fn test_select() {
        assert!(matches!(AnySink::select(None), AnySink::Stdout(_)));
        assert!(matches!(AnySink::select(Some("r.json")), AnySink::File(_)));
    }
}
