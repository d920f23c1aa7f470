use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::table::ArticleTable;
use crate::Result;

/// A raw record as returned by a document store.
pub type Document = Map<String, Value>;

#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Fetch every document of the configured collection, in store order
    async fn fetch_documents(&self) -> Result<Vec<Document>>;

    /// Verify the store is reachable
    async fn ping(&self) -> Result<()> {
        self.fetch_documents().await.map(|_| ())
    }

    /// Human readable description used in logs
    fn describe(&self) -> String;
}

/// Read the whole collection into a fresh table.
pub async fn load_table(source: &dyn ArticleSource) -> Result<ArticleTable> {
    let documents = source.fetch_documents().await?;
    tracing::debug!(count = documents.len(), source = %source.describe(), "loaded documents");
    Ok(ArticleTable::from_documents(documents))
}
