use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::filter::FilteredView;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCount {
    pub source: String,
    pub count: usize,
}

/// Articles per source, most frequent first. Equal counts keep the order in
/// which the sources were first met.
pub fn source_counts(view: &FilteredView<'_>) -> Vec<SourceCount> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for source in view.iter().filter_map(|a| a.source.as_deref()) {
        *counts.entry(source).or_insert(0) += 1;
    }

    let mut counts: Vec<SourceCount> = counts
        .into_iter()
        .map(|(source, count)| SourceCount {
            source: source.to_string(),
            count,
        })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterCriteria;
    use crate::test_support::{article, table};

    #[test]
    fn test_distinct_sources_each_count_once() {
        let rows = (0..10)
            .map(|i| article(Some("judul"), Some(format!("sumber-{i}").as_str()), None))
            .collect();
        let table = table(rows);
        let view = FilterCriteria::defaults_for(&table).apply(&table);

        let counts = source_counts(&view);
        assert_eq!(counts.len(), 10);
        assert!(counts.iter().all(|c| c.count == 1));
        assert_eq!(counts[0].source, "sumber-0");
        assert_eq!(counts[9].source, "sumber-9");
    }

    #[test]
    fn test_descending_with_stable_ties() {
        let table = table(vec![
            article(None, Some("kompas"), None),
            article(None, Some("detik"), None),
            article(None, Some("halodoc"), None),
            article(None, Some("detik"), None),
            article(None, Some("halodoc"), None),
            article(None, Some("alodokter"), None),
        ]);
        let view = FilterCriteria::defaults_for(&table).apply(&table);

        let counts: Vec<(String, usize)> = source_counts(&view)
            .into_iter()
            .map(|c| (c.source, c.count))
            .collect();
        assert_eq!(
            counts,
            vec![
                ("detik".to_string(), 2),
                ("halodoc".to_string(), 2),
                ("kompas".to_string(), 1),
                ("alodokter".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_empty_view_has_no_bars() {
        let table = table(vec![article(None, Some("detik"), None)]);
        let view = FilterCriteria::default().apply(&table);
        assert!(source_counts(&view).is_empty());
    }
}
