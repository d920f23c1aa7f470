use berita_core::{Article, ArticleTable};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// The sidebar selections of one render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Rows must come from one of these sources. Empty keeps nothing.
    pub sources: IndexSet<String>,
    /// Case-insensitive substring searched in titles. Ignored when empty.
    pub search: Option<String>,
    /// Rows must carry one of these categories. Empty keeps everything.
    pub categories: IndexSet<String>,
}

impl FilterCriteria {
    /// Initial selection: every source, every category, no search.
    pub fn defaults_for(table: &ArticleTable) -> Self {
        Self {
            sources: table.unique_sources().into_iter().collect(),
            search: None,
            categories: table.unique_categories().into_iter().collect(),
        }
    }

    /// Lower-cased search string, if there is one to apply.
    pub fn search_needle(&self) -> Option<String> {
        self.search
            .as_deref()
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }

    /// Narrow `table` by source, then search, then category.
    pub fn apply<'a>(&self, table: &'a ArticleTable) -> FilteredView<'a> {
        let mut rows: Vec<&'a Article> = table
            .rows()
            .iter()
            .filter(|article| member(&self.sources, article.source.as_deref()))
            .collect();

        if let Some(needle) = self.search_needle() {
            rows.retain(|article| {
                article
                    .title
                    .as_deref()
                    .is_some_and(|title| title.to_lowercase().contains(&needle))
            });
        }

        if !self.categories.is_empty() {
            rows.retain(|article| member(&self.categories, article.category.as_deref()));
        }

        FilteredView { rows }
    }
}

fn member(set: &IndexSet<String>, value: Option<&str>) -> bool {
    value.is_some_and(|v| set.contains(v))
}

/// Rows of a table that passed the current filters, in load order.
#[derive(Debug, Clone, Default)]
pub struct FilteredView<'a> {
    rows: Vec<&'a Article>,
}

impl<'a> FilteredView<'a> {
    pub fn rows(&self) -> &[&'a Article] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Article> + '_ {
        self.rows.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
