use crate::core::InputSource;
use crate::utils::error::Result;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;

/// Splits text into one input per line.
///
/// A trailing `\r` is stripped from each line, and the empty line after a
/// final newline is not an input. Other whitespace is kept as typed.
pub fn split_lines(content: &str) -> Vec<String> {
    if content.is_empty() {
        return Vec::new();
    }
    let body = content.strip_suffix('\n').unwrap_or(content);
    body.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    inputs: Vec<String>,
}

impl MemorySource {
    pub fn new(inputs: Vec<String>) -> Self {
        Self { inputs }
    }
}

impl InputSource for MemorySource {
    async fn read_inputs(&self) -> Result<Vec<String>> {
        Ok(self.inputs.clone())
    }

    fn describe(&self) -> String {
        format!("{} command-line argument(s)", self.inputs.len())
    }
}

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl InputSource for FileSource {
    async fn read_inputs(&self) -> Result<Vec<String>> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        Ok(split_lines(&content))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StdinSource;

impl InputSource for StdinSource {
    async fn read_inputs(&self) -> Result<Vec<String>> {
        let mut content = String::new();
        tokio::io::stdin().read_to_string(&mut content).await?;
        Ok(split_lines(&content))
    }

    fn describe(&self) -> String {
        "stdin".to_string()
    }
}

/// Picks where inputs come from: explicit arguments, then a file, then stdin.
#[derive(Debug, Clone)]
pub enum AnySource {
    Memory(MemorySource),
    File(FileSource),
    Stdin(StdinSource),
}

impl AnySource {
    pub fn select(inputs: Vec<String>, file: Option<&str>) -> Self {
        match (inputs.is_empty(), file) {
            (false, _) => AnySource::Memory(MemorySource::new(inputs)),
            (true, Some(path)) => AnySource::File(FileSource::new(path)),
            (true, None) => AnySource::Stdin(StdinSource),
        }
    }
}

impl InputSource for AnySource {
    async fn read_inputs(&self) -> Result<Vec<String>> {
        match self {
            AnySource::Memory(source) => source.read_inputs().await,
            AnySource::File(source) => source.read_inputs().await,
            AnySource::Stdin(source) => source.read_inputs().await,
        }
    }

    fn describe(&self) -> String {
        match self {
            AnySource::Memory(source) => source.describe(),
            AnySource::File(source) => source.describe(),
            AnySource::Stdin(source) => source.describe(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_split_lines() {
        assert!(split_lines("").is_empty());
        assert_eq!(split_lines("\n"), vec![""]);
        assert_eq!(split_lines("1\n2"), vec!["1", "2"]);
        assert_eq!(split_lines("1\r\n 2\n"), vec!["1", " 2"]);
        assert_eq!(split_lines("1\n\n3\n"), vec!["1", "", "3"]);
    }

    #[test]
    fn test_select_prefers_arguments() {
        let source = AnySource::select(vec!["1".to_string()], Some("inputs.txt"));
        assert!(matches!(source, AnySource::Memory(_)));
        assert!(matches!(
            AnySource::select(vec![], Some("inputs.txt")),
            AnySource::File(_)
        ));
        assert!(matches!(AnySource::select(vec![], None), AnySource::Stdin(_)));
    }

    #[tokio::test]
    async fn test_file_source_reads_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("inputs.txt");
        tokio::fs::write(&path, "12\n.5\r\nabc\n").await.unwrap();

        let inputs = FileSource::new(&path).read_inputs().await.unwrap();
        assert_eq!(inputs, vec!["12", ".5", "abc"]);
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let source = FileSource::new(dir.path().join("absent.txt"));
        assert!(source.read_inputs().await.is_err());
    }
}
