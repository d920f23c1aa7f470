use std::path::{Path, PathBuf};

use async_trait::async_trait;
use berita_core::{ArticleSource, Document, Error, Result};
use serde_json::Value;

/// A collection exported to disk, either as a JSON array of objects or as
/// one object per line. The file is re-read on every fetch.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ArticleSource for JsonFileSource {
    async fn fetch_documents(&self) -> Result<Vec<Document>> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            Error::Connection(format!("cannot read {}: {}", self.path.display(), e))
        })?;
        parse_documents(&content)
    }

    async fn ping(&self) -> Result<()> {
        tokio::fs::metadata(&self.path)
            .await
            .map(|_| ())
            .map_err(|e| Error::Connection(format!("cannot open {}: {}", self.path.display(), e)))
    }

    fn describe(&self) -> String {
        format!("file://{}", self.path.display())
    }
}

fn parse_documents(content: &str) -> Result<Vec<Document>> {
    let trimmed = content.trim_start();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    let values: Vec<Value> = if trimmed.starts_with('[') {
        serde_json::from_str(trimmed)?
    } else {
        trimmed
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(serde_json::from_str::<Value>)
            .collect::<std::result::Result<Vec<_>, _>>()?
    };

    values
        .into_iter()
        .enumerate()
        .map(|(i, value)| match value {
            Value::Object(map) => Ok(map),
            other => Err(Error::Storage(format!(
                "document {} is not an object: {}",
                i, other
            ))),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_reads_json_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"judul": "Kanker payudara meningkat", "source": "detik"}}, {{"source": "kompas"}}]"#
        )
        .unwrap();

        let source = JsonFileSource::new(file.path());
        let documents = source.fetch_documents().await.unwrap();
        assert_eq!(documents.len(), 2);
        assert_eq!(documents[1]["source"], "kompas");
    }

    #[tokio::test]
    async fn test_reads_ndjson() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"judul": "A", "source": "detik"}}"#).unwrap();
        writeln!(file).unwrap();
        writeln!(file, r#"{{"judul": "B", "source": "kompas", "category": "gizi"}}"#).unwrap();

        let source = JsonFileSource::new(file.path());
        let documents = source.fetch_documents().await.unwrap();
        assert_eq!(documents.len(), 2);
        assert_eq!(documents[1]["category"], "gizi");
    }

    #[tokio::test]
    async fn test_missing_file_is_connection_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileSource::new(dir.path().join("missing.json"));
        assert!(source.fetch_documents().await.unwrap_err().is_connection());
        assert!(source.ping().await.unwrap_err().is_connection());
    }

    #[test]
    fn test_rejects_non_object_documents() {
        let err = parse_documents("[1, 2]").unwrap_err();
        assert!(matches!(err, Error::Storage(_)));
    }

    #[test]
    fn test_empty_file_is_empty_collection() {
        assert!(parse_documents("  \n").unwrap().is_empty());
    }
}
