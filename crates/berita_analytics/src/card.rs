use berita_core::Article;
use serde::{Deserialize, Serialize};
use url::Url;

pub const DESCRIPTION_LIMIT: usize = 100;
pub const PLACEHOLDER: &str = "-";
pub const FALLBACK_LINK: &str = "#";
pub const ELLIPSIS: &str = "...";

/// What one article card shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleCard {
    pub title: String,
    pub description: String,
    pub link: String,
}

impl From<&Article> for ArticleCard {
    fn from(article: &Article) -> Self {
        let description = article.description.as_deref().unwrap_or(PLACEHOLDER);
        Self {
            title: article.title.clone().unwrap_or_else(|| PLACEHOLDER.to_string()),
            description: format!("{}{}", truncate_chars(description, DESCRIPTION_LIMIT), ELLIPSIS),
            link: card_link(article.link.as_deref()),
        }
    }
}

/// First `limit` characters of `text`, cut mid-word if need be.
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// The stored link as is. Links with a scheme other than http(s) point
/// nowhere; relative links are kept.
fn card_link(link: Option<&str>) -> String {
    match link {
        Some(raw) if !has_foreign_scheme(raw) => raw.to_string(),
        _ => FALLBACK_LINK.to_string(),
    }
}

fn has_foreign_scheme(raw: &str) -> bool {
    Url::parse(raw)
        .map(|url| !matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders_for_missing_fields() {
        let card = ArticleCard::from(&Article::default());
        assert_eq!(card.title, "-");
        assert_eq!(card.description, "-...");
        assert_eq!(card.link, "#");
    }

    #[test]
    fn test_description_is_cut_at_hundred_chars() {
        let long = "a".repeat(99) + "bcdef";
        let article = Article {
            description: Some(long),
            ..Default::default()
        };
        let card = ArticleCard::from(&article);
        assert_eq!(card.description, format!("{}b...", "a".repeat(99)));
    }

    #[test]
    fn test_short_description_still_gets_ellipsis() {
        let article = Article {
            description: Some("Singkat".to_string()),
            ..Default::default()
        };
        assert_eq!(ArticleCard::from(&article).description, "Singkat...");
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let text = "é".repeat(150);
        let cut = truncate_chars(&text, DESCRIPTION_LIMIT);
        assert_eq!(cut.chars().count(), 100);
    }

    #[test]
    fn test_links() {
        let with = |link: &str| {
            ArticleCard::from(&Article {
                link: Some(link.to_string()),
                ..Default::default()
            })
            .link
        };
        assert_eq!(with("https://health.detik.com/berita/1"), "https://health.detik.com/berita/1");
        assert_eq!(with("https://health.detik.com"), "https://health.detik.com");
        assert_eq!(with("/berita/123"), "/berita/123");
        assert_eq!(with("javascript:alert(1)"), "#");
        assert_eq!(with(" JavaScript:alert(1)"), "#");
        assert_eq!(with("data:text/html,hai"), "#");
    }
}
