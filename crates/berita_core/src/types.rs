use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field holding the headline in scraped documents.
pub const TITLE_FIELD: &str = "judul";
/// Older documents carry the headline under this name instead.
pub const TITLE_FALLBACK_FIELD: &str = "title";
pub const DESCRIPTION_FIELD: &str = "description";
pub const LINK_FIELD: &str = "link";
pub const SOURCE_FIELD: &str = "source";
pub const CATEGORY_FIELD: &str = "category";

/// One scraped news record. Every field may be missing from the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub source: Option<String>,
    pub category: Option<String>,
}

impl Article {
    /// Build an article from a loosely-shaped document.
    pub fn from_document(doc: &Map<String, Value>) -> Self {
        let title = text_field(doc, TITLE_FIELD).or_else(|| text_field(doc, TITLE_FALLBACK_FIELD));
        Self {
            title,
            description: text_field(doc, DESCRIPTION_FIELD),
            link: text_field(doc, LINK_FIELD),
            source: text_field(doc, SOURCE_FIELD),
            category: text_field(doc, CATEGORY_FIELD),
        }
    }

    pub fn title_or_empty(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }
}

fn text_field(doc: &Map<String, Value>, key: &str) -> Option<String> {
    match doc.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_prefers_judul_over_title() {
        let article = Article::from_document(&doc(json!({
            "judul": "Kanker payudara meningkat",
            "title": "ignored",
            "source": "detik",
        })));
        assert_eq!(article.title.as_deref(), Some("Kanker payudara meningkat"));
        assert_eq!(article.source.as_deref(), Some("detik"));
        assert!(article.category.is_none());
    }

    #[test]
    fn test_falls_back_to_title() {
        let article = Article::from_document(&doc(json!({ "title": "Vaksin baru" })));
        assert_eq!(article.title.as_deref(), Some("Vaksin baru"));
    }

    #[test]
    fn test_null_and_nested_values_are_absent() {
        let article = Article::from_document(&doc(json!({
            "judul": null,
            "description": ["a", "b"],
            "link": { "href": "x" },
            "category": 7,
        })));
        assert!(article.title.is_none());
        assert!(article.description.is_none());
        assert!(article.link.is_none());
        assert_eq!(article.category.as_deref(), Some("7"));
    }
}
