use std::time::Duration;

use async_trait::async_trait;
use berita_core::config::StoreConfig;
use berita_core::{ArticleSource, Document, Error, Result};
use futures_util::TryStreamExt;
use mongodb::bson::{doc, Bson, Document as BsonDocument};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};
use serde_json::Value;

const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Reads one collection of one MongoDB database.
pub struct MongoSource {
    client: Client,
    database: String,
    collection: String,
}

impl MongoSource {
    pub async fn connect(config: &StoreConfig) -> Result<Self> {
        let mut options = ClientOptions::parse(&config.url)
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;
        options.app_name = Some("berita-dashboard".to_string());
        options.server_selection_timeout = Some(SERVER_SELECTION_TIMEOUT);

        let client = Client::with_options(options).map_err(|e| Error::Connection(e.to_string()))?;
        Ok(Self {
            client,
            database: config.database.clone(),
            collection: config.collection.clone(),
        })
    }

    fn collection(&self) -> Collection<BsonDocument> {
        self.client.database(&self.database).collection(&self.collection)
    }
}

/// Relaxed extended JSON view of a stored document.
fn to_document(document: BsonDocument) -> Option<Document> {
    match Bson::Document(document).into_relaxed_extjson() {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

#[async_trait]
impl ArticleSource for MongoSource {
    async fn fetch_documents(&self) -> Result<Vec<Document>> {
        let mut cursor = self
            .collection()
            .find(doc! {}, None)
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;

        let mut documents = Vec::new();
        while let Some(document) = cursor
            .try_next()
            .await
            .map_err(|e| Error::Connection(e.to_string()))?
        {
            documents.extend(to_document(document));
        }
        Ok(documents)
    }

    async fn ping(&self) -> Result<()> {
        self.client
            .database(&self.database)
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map(|_| ())
            .map_err(|e| Error::Connection(e.to_string()))
    }

    fn describe(&self) -> String {
        format!("mongodb/{}/{}", self.database, self.collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use berita_core::{Article, ArticleTable};
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_to_document_keeps_fields_and_object_id() {
        let id = ObjectId::new();
        let document = to_document(doc! {
            "_id": id,
            "judul": "Kanker payudara meningkat",
            "source": "detik",
            "link": "https://health.detik.com/1",
        })
        .unwrap();

        assert_eq!(document["_id"], serde_json::json!({ "$oid": id.to_hex() }));
        assert_eq!(document["judul"], "Kanker payudara meningkat");
        assert!(!document.contains_key("category"));

        let article = Article::from_document(&document);
        assert_eq!(article.title.as_deref(), Some("Kanker payudara meningkat"));
        assert_eq!(article.category, None);
    }

    #[test]
    fn test_missing_category_column_is_synthesized() {
        let stored = doc! { "_id": ObjectId::new(), "judul": "Gizi anak", "views": 12_i32 };
        let table = ArticleTable::from_documents(to_document(stored));
        assert!(table.has_column("_id"));
        assert!(table.has_column("category"));
        assert_eq!(table.unique_categories(), Vec::<String>::new());
    }
}
