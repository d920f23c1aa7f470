use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use berita_core::{ArticleSource, Document, Error, Result};
use serde_json::Value;
use tokio::sync::RwLock;

/// Documents kept in process memory. Used for demos and tests.
#[derive(Clone, Default)]
pub struct InMemorySource {
    documents: Arc<RwLock<Vec<Document>>>,
    offline: Arc<AtomicBool>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_documents(documents: Vec<Document>) -> Self {
        Self {
            documents: Arc::new(RwLock::new(documents)),
            offline: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Build from JSON values, skipping anything that is not an object.
    pub fn from_values(values: impl IntoIterator<Item = Value>) -> Self {
        let documents = values
            .into_iter()
            .filter_map(|value| match value {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .collect();
        Self::with_documents(documents)
    }

    pub async fn insert(&self, document: Document) {
        self.documents.write().await.push(document);
    }

    /// Simulate an unreachable store.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }
}

#[async_trait]
impl ArticleSource for InMemorySource {
    async fn fetch_documents(&self) -> Result<Vec<Document>> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(Error::Connection("memory store is offline".to_string()));
        }
        Ok(self.documents.read().await.clone())
    }

    fn describe(&self) -> String {
        "memory://".to_string()
    }
}
