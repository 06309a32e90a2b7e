//! Article search.
//!
//! A case-insensitive substring scan over the whole store. There is no
//! index; thirteen-odd articles do not need one. The empty query matches
//! every article, which the search overlay relies on to show the full
//! catalogue before the user types anything.

use crate::store::{Article, ArticleStore};

/// Queries longer than this are truncated before matching.
pub const MAX_QUERY_LENGTH: usize = 256;

/// True if the article matches the query.
///
/// The query is trimmed and lowercased once, then checked against title,
/// content, excerpt, category name, and every tag. An empty query matches
/// unconditionally.
pub fn matches(article: &Article, query: &str) -> bool {
    let needle = normalize(query);
    matches_normalized(article, &needle)
}

/// Filter the store, preserving store order.
pub fn filter<'a>(store: &'a ArticleStore, query: &str) -> Vec<&'a Article> {
    let needle = normalize(query);
    store
        .all()
        .iter()
        .filter(|a| matches_normalized(a, &needle))
        .collect()
}

fn normalize(query: &str) -> String {
    let query = query.trim();
    let query = if query.len() > MAX_QUERY_LENGTH {
        let mut end = MAX_QUERY_LENGTH;
        while !query.is_char_boundary(end) {
            end -= 1;
        }
        &query[..end]
    } else {
        query
    };
    query.to_lowercase()
}

fn matches_normalized(article: &Article, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    article.title.to_lowercase().contains(needle)
        || article.content.to_lowercase().contains(needle)
        || article.excerpt.to_lowercase().contains(needle)
        || article.category.name().to_lowercase().contains(needle)
        || article
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ArticleStore;

    #[test]
    fn test_empty_query_matches_everything() {
        let store = ArticleStore::seeded();
        assert_eq!(filter(&store, "").len(), store.all().len());
    }

    #[test]
    fn test_case_insensitive_title_match() {
        let store = ArticleStore::seeded();
        let lower = filter(&store, "climate summit");
        let upper = filter(&store, "CLIMATE SUMMIT");
        assert!(!lower.is_empty());
        assert_eq!(
            lower.iter().map(|a| &a.id).collect::<Vec<_>>(),
            upper.iter().map(|a| &a.id).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_category_name_matches() {
        let store = ArticleStore::seeded();
        let results = filter(&store, "economy");
        assert!(results.iter().all(|a| {
            a.category.name().to_lowercase().contains("economy")
                || a.title.to_lowercase().contains("economy")
                || a.content.to_lowercase().contains("economy")
                || a.excerpt.to_lowercase().contains("economy")
                || a.tags.iter().any(|t| t.to_lowercase().contains("economy"))
        }));
        assert!(results
            .iter()
            .any(|a| a.category == crate::store::Section::Economy));
    }

    #[test]
    fn test_tag_matches() {
        let store = ArticleStore::seeded();
        let tagged: Vec<_> = store
            .all()
            .iter()
            .filter(|a| a.tags.iter().any(|t| t.eq_ignore_ascii_case("climate")))
            .collect();
        assert!(!tagged.is_empty());
        let results = filter(&store, "climate");
        for article in tagged {
            assert!(results.iter().any(|a| a.id == article.id));
        }
    }

    #[test]
    fn test_no_match_returns_empty() {
        let store = ArticleStore::seeded();
        assert!(filter(&store, "zzzxqjw-nothing").is_empty());
    }

    #[test]
    fn test_results_preserve_store_order() {
        let store = ArticleStore::seeded();
        let results = filter(&store, "the");
        let order: Vec<usize> = results
            .iter()
            .map(|r| store.all().iter().position(|a| a.id == r.id).unwrap())
            .collect();
        assert!(order.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_overlong_query_is_truncated_not_panicking() {
        let store = ArticleStore::seeded();
        let long = "é".repeat(MAX_QUERY_LENGTH);
        assert!(filter(&store, &long).is_empty());
    }
}
