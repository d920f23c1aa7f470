//! Filtering, aggregation, text analytics and pagination for the health-news
//! dashboard. Everything here is synchronous and recomputed on every render.

pub mod aggregate;
pub mod card;
pub mod charts;
pub mod dashboard;
pub mod filter;
pub mod pagination;
pub mod stopwords;
pub mod text;
pub mod wordcloud;

pub use aggregate::{source_counts, SourceCount};
pub use card::ArticleCard;
pub use dashboard::{render_pass, Charts, DashboardView, RenderOptions};
pub use filter::{FilterCriteria, FilteredView};
pub use pagination::{total_pages, PageCursor, GRID_COLUMNS, PAGE_SIZE};
pub use text::{build_corpus, trending_words, Trending, WordCount};

pub mod prelude {
    pub use super::{
        render_pass, DashboardView, FilterCriteria, PageCursor, RenderOptions, Trending,
    };
    pub use berita_core::{Article, ArticleTable, Error, Result};
}
