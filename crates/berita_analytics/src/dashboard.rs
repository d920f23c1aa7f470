use berita_core::{ArticleTable, Result};
use serde::{Deserialize, Serialize};

use crate::aggregate::{source_counts, SourceCount};
use crate::card::ArticleCard;
use crate::charts::{source_chart, trending_chart};
use crate::filter::FilterCriteria;
use crate::pagination::{grid_columns, page_label, page_slice, total_pages, PageCursor, GRID_COLUMNS};
use crate::text::{build_corpus, trending_words, Trending, TRENDING_LIMIT};
use crate::wordcloud::word_cloud;

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Produce the SVG charts. The JSON API skips them.
    pub with_charts: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { with_charts: true }
    }
}

/// SVG documents for the three pictures.
#[derive(Debug, Clone, Default)]
pub struct Charts {
    pub sources: String,
    pub word_cloud: String,
    /// Absent when there are no trending words to plot.
    pub trending: Option<String>,
}

/// Everything one render pass produces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardView {
    pub total_articles: usize,
    pub filtered_count: usize,
    pub source_counts: Vec<SourceCount>,
    pub trending: Trending,
    pub page: usize,
    pub total_pages: usize,
    pub page_label: String,
    pub columns: [Vec<ArticleCard>; GRID_COLUMNS],
    #[serde(skip)]
    pub charts: Option<Charts>,
}

impl DashboardView {
    pub fn cards(&self) -> impl Iterator<Item = &ArticleCard> {
        self.columns.iter().flatten()
    }
}

/// Filter, aggregate and paginate `table`.
///
/// `cursor` is clamped to the page range of the filtered set and the clamped
/// value is left in place for the caller to store.
pub fn render_pass(
    table: &ArticleTable,
    criteria: &FilterCriteria,
    cursor: &mut PageCursor,
    options: RenderOptions,
) -> Result<DashboardView> {
    let view = criteria.apply(table);
    let counts = source_counts(&view);
    let corpus = build_corpus(&view);
    let trending = trending_words(&corpus, TRENDING_LIMIT);

    let pages = total_pages(view.len());
    cursor.clamp(pages);
    let cards: Vec<ArticleCard> = page_slice(view.rows(), cursor.page())
        .iter()
        .map(|article| ArticleCard::from(*article))
        .collect();

    let charts = if options.with_charts {
        Some(Charts {
            sources: source_chart(&counts)?,
            word_cloud: word_cloud(&corpus)?,
            trending: match &trending {
                Trending::Words(words) => Some(trending_chart(words)?),
                Trending::Empty => None,
            },
        })
    } else {
        None
    };

    tracing::debug!(
        total = table.len(),
        filtered = view.len(),
        page = cursor.page(),
        pages,
        "render pass"
    );

    Ok(DashboardView {
        total_articles: table.len(),
        filtered_count: view.len(),
        source_counts: counts,
        trending,
        page: cursor.page(),
        total_pages: pages,
        page_label: page_label(cursor.page(), pages),
        columns: grid_columns(&cards),
        charts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{article, table};
    use berita_core::Article;

    fn numbered(n: usize) -> ArticleTable {
        table(
            (0..n)
                .map(|i| Article {
                    title: Some(format!("Berita kesehatan nomor {i}")),
                    source: Some("detik".to_string()),
                    ..Default::default()
                })
                .collect(),
        )
    }

    #[test]
    fn test_distinct_sources_without_filters() {
        let table = table(
            (0..10)
                .map(|i| article(Some("Vaksin"), Some(format!("sumber{i}").as_str()), None))
                .collect(),
        );
        let criteria = FilterCriteria::defaults_for(&table);
        let view = render_pass(&table, &criteria, &mut PageCursor::default(), RenderOptions::default())
            .unwrap();
        assert_eq!(view.source_counts.len(), 10);
        assert!(view.source_counts.iter().all(|c| c.count == 1));
    }

    #[test]
    fn test_unknown_source_degrades_gracefully() {
        let table = numbered(12);
        let criteria = FilterCriteria {
            sources: ["SourceX".to_string()].into_iter().collect(),
            ..Default::default()
        };
        let mut cursor = PageCursor::default();
        let view = render_pass(&table, &criteria, &mut cursor, RenderOptions::default()).unwrap();

        assert_eq!(view.total_articles, 12);
        assert_eq!(view.filtered_count, 0);
        assert!(view.source_counts.is_empty());
        assert_eq!(view.trending, Trending::Empty);
        assert_eq!(view.page_label, "Halaman 1 dari 1");
        assert_eq!(view.cards().count(), 0);

        let charts = view.charts.unwrap();
        assert!(!charts.word_cloud.contains("<text"));
        assert!(charts.trending.is_none());
    }

    #[test]
    fn test_third_page_of_twenty() {
        let table = numbered(20);
        let criteria = FilterCriteria::defaults_for(&table);
        let mut cursor = PageCursor::new(3);
        let view = render_pass(&table, &criteria, &mut cursor, RenderOptions { with_charts: false })
            .unwrap();

        assert_eq!(view.total_pages, 3);
        assert_eq!(view.columns[0].len(), 1);
        assert_eq!(view.columns[1].len(), 1);
        assert!(view.columns[2].is_empty());
        assert_eq!(view.columns[0][0].title, "Berita kesehatan nomor 18");
        assert_eq!(view.columns[1][0].title, "Berita kesehatan nomor 19");
        assert!(view.charts.is_none());
    }

    #[test]
    fn test_cursor_is_clamped_and_written_back() {
        let table = numbered(20);
        let criteria = FilterCriteria {
            sources: ["detik".to_string()].into_iter().collect(),
            search: Some("nomor 1".to_string()),
            ..Default::default()
        };
        let mut cursor = PageCursor::new(3);
        let view = render_pass(&table, &criteria, &mut cursor, RenderOptions { with_charts: false })
            .unwrap();
        // "nomor 1" and "nomor 10".."nomor 19"
        assert_eq!(view.filtered_count, 11);
        assert_eq!(view.total_pages, 2);
        assert_eq!(cursor.page(), 2);
        assert_eq!(view.page_label, "Halaman 2 dari 2");
    }

    #[test]
    fn test_search_reaches_every_view() {
        let table = table(vec![
            article(Some("Kanker payudara meningkat"), Some("detik"), None),
            article(Some("Gizi seimbang untuk lansia"), Some("kompas"), None),
        ]);
        let criteria = FilterCriteria {
            search: Some("KANKER".to_string()),
            ..FilterCriteria::defaults_for(&table)
        };
        let view = render_pass(&table, &criteria, &mut PageCursor::default(), RenderOptions::default())
            .unwrap();
        assert_eq!(view.filtered_count, 1);
        assert_eq!(view.source_counts[0].source, "detik");
        let words: Vec<&str> = view.trending.words().iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words, vec!["kanker", "payudara", "meningkat"]);
        assert!(view.charts.unwrap().trending.is_some());
    }

    #[test]
    fn test_stopword_titles_have_no_trending() {
        let table = table(vec![article(Some("Ini di sana yang ke"), Some("detik"), None)]);
        let criteria = FilterCriteria::defaults_for(&table);
        let view = render_pass(&table, &criteria, &mut PageCursor::default(), RenderOptions::default())
            .unwrap();
        // "sana" survives the stopword list
        assert_eq!(view.trending.words().len(), 1);

        let table = table_of("Ini di yang ke ab");
        let criteria = FilterCriteria::defaults_for(&table);
        let view = render_pass(&table, &criteria, &mut PageCursor::default(), RenderOptions::default())
            .unwrap();
        assert!(view.trending.is_empty());
    }

    fn table_of(title: &str) -> ArticleTable {
        table(vec![article(Some(title), Some("detik"), None)])
    }

    #[test]
    fn test_json_shape() {
        let table = table_of("Kanker");
        let criteria = FilterCriteria::defaults_for(&table);
        let view = render_pass(&table, &criteria, &mut PageCursor::default(), RenderOptions::default())
            .unwrap();
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["trending"]["state"], "words");
        assert_eq!(json["trending"]["words"][0]["word"], "kanker");
        assert_eq!(json["page_label"], "Halaman 1 dari 1");
        assert!(json.get("charts").is_none());
    }
}
