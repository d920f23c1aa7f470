use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::filter::FilteredView;
use crate::stopwords::is_stopword;

/// Number of words shown in the trending chart.
pub const TRENDING_LIMIT: usize = 5;

pub const NO_TRENDING_MESSAGE: &str = "Tidak ada kata trending yang bisa ditampilkan.";

lazy_static! {
    static ref TRENDING_TOKEN: Regex = Regex::new(r"\b[a-zA-Z]{3,}\b").unwrap();
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "words", rename_all = "snake_case")]
pub enum Trending {
    Words(Vec<WordCount>),
    Empty,
}

impl Trending {
    pub fn words(&self) -> &[WordCount] {
        match self {
            Trending::Words(words) => words,
            Trending::Empty => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Trending::Empty)
    }
}

/// All titles of the view, lower-cased and joined by single spaces.
/// Missing titles contribute an empty string.
pub fn build_corpus(view: &FilteredView<'_>) -> String {
    view.iter()
        .map(|a| a.title_or_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Counts of alphabetic tokens of three or more letters that are not
/// stopwords, in first-seen order.
pub fn word_frequencies(corpus: &str) -> IndexMap<String, usize> {
    let mut counts = IndexMap::new();
    for token in TRENDING_TOKEN.find_iter(corpus).map(|m| m.as_str()) {
        if is_stopword(token) {
            continue;
        }
        *counts.entry(token.to_string()).or_insert(0) += 1;
    }
    counts
}

/// Sort counts descending, keeping insertion order among ties, and keep `n`.
pub fn most_common(counts: IndexMap<String, usize>, n: usize) -> Vec<WordCount> {
    let mut words: Vec<WordCount> = counts
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect();
    words.sort_by(|a, b| b.count.cmp(&a.count));
    words.truncate(n);
    words
}

/// Top words of a lower-cased corpus, or `Trending::Empty` when nothing
/// survives tokenizing and stopword removal.
pub fn trending_words(corpus: &str, n: usize) -> Trending {
    let top = most_common(word_frequencies(corpus), n);
    if top.is_empty() {
        Trending::Empty
    } else {
        Trending::Words(top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterCriteria;
    use crate::test_support::{article, table};

    #[test]
    fn test_corpus_joins_lower_cased_titles() {
        let table = table(vec![
            article(Some("Kanker Payudara"), Some("detik"), None),
            article(None, Some("detik"), None),
            article(Some("Vaksin HPV"), Some("detik"), None),
        ]);
        let view = FilterCriteria::defaults_for(&table).apply(&table);
        assert_eq!(build_corpus(&view), "kanker payudara  vaksin hpv");
    }

    #[test]
    fn test_top_five_descending_without_stopwords() {
        let corpus = "kanker vaksin kanker yang gizi kanker vaksin diabetes stunting gizi \
                      demam yang yang yang dan";
        let trending = trending_words(corpus, TRENDING_LIMIT);
        let words: Vec<(&str, usize)> = trending
            .words()
            .iter()
            .map(|w| (w.word.as_str(), w.count))
            .collect();
        assert_eq!(
            words,
            vec![
                ("kanker", 3),
                ("vaksin", 2),
                ("gizi", 2),
                ("diabetes", 1),
                ("stunting", 1),
            ]
        );
        assert!(trending.words().iter().all(|w| !is_stopword(&w.word)));
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let trending = trending_words("tbc flu covid flu tbc covid", 5);
        let words: Vec<&str> = trending.words().iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words, vec!["tbc", "flu", "covid"]);
    }

    #[test]
    fn test_short_tokens_and_digits_are_ignored() {
        let counts = word_frequencies("dbd 12 ab covid19 x-ray kanker's");
        let words: Vec<&str> = counts.keys().map(String::as_str).collect();
        assert_eq!(words, vec!["dbd", "ray", "kanker"]);
    }

    #[test]
    fn test_only_stopwords_is_empty() {
        let trending = trending_words("yang di ke dan ini itu untuk ab cd", TRENDING_LIMIT);
        assert_eq!(trending, Trending::Empty);
        assert!(trending.words().is_empty());
    }

    #[test]
    fn test_empty_corpus_is_empty() {
        assert!(trending_words("", TRENDING_LIMIT).is_empty());
    }
}
