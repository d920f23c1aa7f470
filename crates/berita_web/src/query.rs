use berita_analytics::FilterCriteria;
use berita_core::ArticleTable;
use url::form_urlencoded;

/// Marks a submitted sidebar form. Without it the default selection applies.
pub const APPLIED_KEY: &str = "applied";
pub const SOURCE_KEY: &str = "source";
pub const SEARCH_KEY: &str = "q";
pub const CATEGORY_KEY: &str = "category";

/// Sidebar state as carried in the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterForm {
    pub applied: bool,
    pub sources: Vec<String>,
    pub search: String,
    pub categories: Vec<String>,
}

impl FilterForm {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut form = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                APPLIED_KEY => form.applied = true,
                SOURCE_KEY => form.sources.push(value),
                SEARCH_KEY => form.search = value,
                CATEGORY_KEY => form.categories.push(value),
                _ => {}
            }
        }
        form
    }

    /// Resolve the form against the loaded table.
    pub fn criteria(&self, table: &ArticleTable) -> FilterCriteria {
        let search = Some(self.search.clone()).filter(|q| !q.is_empty());
        if self.applied {
            FilterCriteria {
                sources: self.sources.iter().cloned().collect(),
                search,
                categories: self.categories.iter().cloned().collect(),
            }
        } else {
            FilterCriteria {
                search,
                ..FilterCriteria::defaults_for(table)
            }
        }
    }

    /// The form encoded back into a query string, without the leading `?`.
    pub fn to_query(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if self.applied {
            serializer.append_pair(APPLIED_KEY, "1");
            for source in &self.sources {
                serializer.append_pair(SOURCE_KEY, source);
            }
        }
        if !self.search.is_empty() {
            serializer.append_pair(SEARCH_KEY, &self.search);
        }
        if self.applied {
            for category in &self.categories {
                serializer.append_pair(CATEGORY_KEY, category);
            }
        }
        serializer.finish()
    }

    /// Path of the dashboard showing this selection.
    pub fn dashboard_path(&self) -> String {
        let query = self.to_query();
        if query.is_empty() {
            "/".to_string()
        } else {
            format!("/?{}", query)
        }
    }
}
