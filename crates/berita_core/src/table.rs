use indexmap::IndexSet;

use crate::source::Document;
use crate::types::{
    Article, CATEGORY_FIELD, DESCRIPTION_FIELD, LINK_FIELD, SOURCE_FIELD, TITLE_FIELD,
};

/// All articles of one render pass plus the set of fields seen in the store.
#[derive(Debug, Clone, Default)]
pub struct ArticleTable {
    rows: Vec<Article>,
    columns: IndexSet<String>,
}

impl ArticleTable {
    /// Normalize raw documents into rows, keeping store order.
    ///
    /// `columns` is the union of every field name observed, in first-seen
    /// order. A `category` column is synthesized when no document has one so
    /// that category filtering always has a column to look at.
    pub fn from_documents<I>(documents: I) -> Self
    where
        I: IntoIterator<Item = Document>,
    {
        let mut columns = IndexSet::new();
        let mut rows = Vec::new();
        for doc in documents {
            for key in doc.keys() {
                if !columns.contains(key) {
                    columns.insert(key.clone());
                }
            }
            rows.push(Article::from_document(&doc));
        }
        if !columns.contains(CATEGORY_FIELD) {
            columns.insert(CATEGORY_FIELD.to_string());
        }
        Self { rows, columns }
    }

    /// Table over already-typed rows, with the standard columns.
    pub fn from_articles(rows: Vec<Article>) -> Self {
        let columns = [TITLE_FIELD, DESCRIPTION_FIELD, LINK_FIELD, SOURCE_FIELD, CATEGORY_FIELD]
            .into_iter()
            .map(String::from)
            .collect();
        Self { rows, columns }
    }

    pub fn rows(&self) -> &[Article] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains(name)
    }

    /// Distinct non-absent sources in first-seen order.
    pub fn unique_sources(&self) -> Vec<String> {
        unique(self.rows.iter().filter_map(|a| a.source.as_deref()))
    }

    /// Distinct non-absent categories in first-seen order.
    pub fn unique_categories(&self) -> Vec<String> {
        unique(self.rows.iter().filter_map(|a| a.category.as_deref()))
    }
}

fn unique<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let set: IndexSet<&str> = values.collect();
    set.into_iter().map(String::from).collect()
}
