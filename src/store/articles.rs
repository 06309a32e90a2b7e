//! In-memory article store with derived views and admin mutations.
//!
//! The store is seeded at startup and mutated only through the admin panel's
//! `save`/`delete`. Derived views (featured, latest, trending, breaking) are
//! computed on demand from the natural store order.

use chrono::{Local, NaiveDate};
use rand::Rng;

use super::seed;
use super::types::{Article, Section};
use crate::util::slugify;

/// Featured carousel size on the home page.
const FEATURED_LIMIT: usize = 5;
/// Latest-news sidebar size.
const LATEST_LIMIT: usize = 8;
/// Trending strip size.
const TRENDING_LIMIT: usize = 4;
/// Breaking-news ticker size (head of the latest list).
const BREAKING_LIMIT: usize = 5;
/// Maximum related articles shown under a detail page.
const RELATED_LIMIT: usize = 3;
/// Articles shown per section block on the home page.
const SECTION_LIMIT: usize = 3;

// ============================================================================
// Drafts
// ============================================================================

/// An article draft edited in the admin form.
///
/// Carries the identifier of the article being edited; `save` decides
/// replace-vs-append by that id. The slug is never edited directly — it is
/// regenerated from the title on every save.
#[derive(Debug, Clone, Default)]
pub struct ArticleDraft {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub image_url: String,
    pub category: Option<Section>,
    pub tags: Vec<String>,
    pub date: Option<NaiveDate>,
}

impl ArticleDraft {
    /// Start a draft for a brand-new article with a fabricated id and
    /// today's date.
    pub fn new_article() -> Self {
        Self {
            id: fabricate_id(),
            date: Some(Local::now().date_naive()),
            ..Self::default()
        }
    }

    /// Start a draft pre-filled from an existing article.
    pub fn edit(article: &Article) -> Self {
        Self {
            id: article.id.clone(),
            title: article.title.clone(),
            excerpt: article.excerpt.clone(),
            content: article.content.clone(),
            author: article.author.clone(),
            image_url: article.image_url.clone(),
            category: Some(article.category),
            tags: article.tags.clone(),
            date: Some(article.date),
        }
    }

    /// A draft is saveable once it has a title and content.
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty() && !self.content.trim().is_empty()
    }
}

/// Fabricate a 7-char base-36 identifier, like the ids in the seed fixture.
pub fn fabricate_id() -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut rng = rand::thread_rng();
    (0..7)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

// ============================================================================
// Article Store
// ============================================================================

/// The in-memory ordered article collection.
pub struct ArticleStore {
    articles: Vec<Article>,
}

impl Default for ArticleStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl ArticleStore {
    /// Store seeded with the fixture articles.
    pub fn seeded() -> Self {
        Self {
            articles: seed::articles(),
        }
    }

    /// Empty store, used by tests.
    pub fn empty() -> Self {
        Self {
            articles: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// All articles in natural store order.
    pub fn all(&self) -> &[Article] {
        &self.articles
    }

    pub fn by_id(&self, id: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }

    pub fn by_slug(&self, slug: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.slug == slug)
    }

    // ------------------------------------------------------------------------
    // Derived views
    // ------------------------------------------------------------------------

    /// Featured subset: first 5 flagged articles in store order.
    pub fn featured(&self) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|a| a.featured)
            .take(FEATURED_LIMIT)
            .collect()
    }

    /// Latest subset: all articles sorted by date descending, first 8.
    /// Sort is stable, so same-date articles keep store order.
    pub fn latest(&self) -> Vec<&Article> {
        let mut sorted: Vec<&Article> = self.articles.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted.truncate(LATEST_LIMIT);
        sorted
    }

    /// Trending subset: first 4 flagged articles in store order.
    pub fn trending(&self) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|a| a.trending)
            .take(TRENDING_LIMIT)
            .collect()
    }

    /// Breaking ticker: head of the latest list.
    pub fn breaking(&self) -> Vec<&Article> {
        let mut latest = self.latest();
        latest.truncate(BREAKING_LIMIT);
        latest
    }

    /// First 3 articles of a section, for the home-page section blocks.
    pub fn section_block(&self, section: Section) -> Vec<&Article> {
        self.by_category(section, Some(SECTION_LIMIT))
    }

    /// Articles of a section in store order, optionally limited.
    pub fn by_category(&self, section: Section, limit: Option<usize>) -> Vec<&Article> {
        let iter = self.articles.iter().filter(|a| a.category == section);
        match limit {
            Some(n) => iter.take(n).collect(),
            None => iter.collect(),
        }
    }

    /// Up to 3 other articles sharing the category or at least one tag,
    /// in store order. Never includes the subject article itself.
    pub fn related(&self, subject: &Article) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|a| {
                a.id != subject.id
                    && (a.category == subject.category
                        || a.tags.iter().any(|t| subject.tags.contains(t)))
            })
            .take(RELATED_LIMIT)
            .collect()
    }

    /// Resolve a list of bookmark ids to articles, in store order.
    /// Ids that no longer resolve (article deleted) are skipped.
    pub fn bookmarked<'a>(&'a self, bookmark_ids: &[String]) -> Vec<&'a Article> {
        self.articles
            .iter()
            .filter(|a| bookmark_ids.contains(&a.id))
            .collect()
    }

    // ------------------------------------------------------------------------
    // Admin mutations
    // ------------------------------------------------------------------------

    /// Save a draft: replace the article with the same id, or append.
    ///
    /// The slug is always regenerated from the title, so the derived-slug
    /// invariant holds after every save. Returns the saved article's id.
    pub fn save(&mut self, draft: ArticleDraft) -> String {
        let slug = slugify(&draft.title);
        let id = draft.id.clone();

        let existing = self.articles.iter().position(|a| a.id == draft.id);
        let previous = existing.map(|idx| self.articles[idx].clone());

        let article = Article {
            id: draft.id,
            title: draft.title,
            slug,
            excerpt: draft.excerpt,
            content: draft.content,
            author: draft.author,
            author_image: previous.as_ref().and_then(|p| p.author_image.clone()),
            date: draft
                .date
                .or(previous.as_ref().map(|p| p.date))
                .unwrap_or_else(|| Local::now().date_naive()),
            image_url: draft.image_url,
            category: draft
                .category
                .or(previous.as_ref().map(|p| p.category))
                .unwrap_or(Section::Politics),
            tags: draft.tags,
            read_time: previous.as_ref().and_then(|p| p.read_time),
            featured: previous.as_ref().map(|p| p.featured).unwrap_or(false),
            trending: previous.as_ref().map(|p| p.trending).unwrap_or(false),
            views: previous.as_ref().and_then(|p| p.views),
        };

        match existing {
            Some(idx) => {
                tracing::info!(id = %article.id, slug = %article.slug, "Updated article");
                self.articles[idx] = article;
            }
            None => {
                tracing::info!(id = %article.id, slug = %article.slug, "Created article");
                self.articles.push(article);
            }
        }

        id
    }

    /// Delete an article by id. No-op if the id is absent.
    pub fn delete(&mut self, id: &str) {
        let before = self.articles.len();
        self.articles.retain(|a| a.id != id);
        if self.articles.len() < before {
            tracing::info!(id = %id, "Deleted article");
        } else {
            tracing::debug!(id = %id, "Delete requested for unknown article");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn store() -> ArticleStore {
        ArticleStore::seeded()
    }

    fn draft(id: &str, title: &str, content: &str) -> ArticleDraft {
        ArticleDraft {
            id: id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            ..ArticleDraft::default()
        }
    }

    #[test]
    fn test_lookup_by_slug() {
        let s = store();
        let a = s
            .by_slug("government-announces-new-economic-reform-package")
            .unwrap();
        assert_eq!(a.category, Section::Economy);
        assert!(s.by_slug("no-such-article").is_none());
    }

    #[test]
    fn test_featured_limit_and_flags() {
        let s = store();
        let featured = s.featured();
        assert!(featured.len() <= 5);
        assert!(featured.iter().all(|a| a.featured));
    }

    #[test]
    fn test_latest_sorted_descending() {
        let s = store();
        let latest = s.latest();
        assert_eq!(latest.len(), 8);
        for pair in latest.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
    }

    #[test]
    fn test_breaking_is_head_of_latest() {
        let s = store();
        let latest = s.latest();
        let breaking = s.breaking();
        assert_eq!(breaking.len(), 5);
        for (b, l) in breaking.iter().zip(latest.iter()) {
            assert_eq!(b.id, l.id);
        }
    }

    #[test]
    fn test_trending_limit() {
        let s = store();
        let trending = s.trending();
        assert!(trending.len() <= 4);
        assert!(trending.iter().all(|a| a.trending));
    }

    #[test]
    fn test_section_block_limit() {
        let s = store();
        for section in Section::ALL {
            let block = s.section_block(section);
            assert!(block.len() <= 3);
            assert!(block.iter().all(|a| a.category == section));
        }
    }

    #[test]
    fn test_related_excludes_subject_and_caps_at_three() {
        let s = store();
        for subject in s.all() {
            let related = s.related(subject);
            assert!(related.len() <= 3);
            assert!(related.iter().all(|a| a.id != subject.id));
            assert!(related.iter().all(|a| {
                a.category == subject.category
                    || a.tags.iter().any(|t| subject.tags.contains(t))
            }));
        }
    }

    #[test]
    fn test_related_by_shared_tag_across_categories() {
        let s = store();
        // The opinion piece shares the "technology" tag with the AI article
        let subject = s.by_id("d3y7m5g").unwrap().clone();
        let related = s.related(&subject);
        assert!(related.iter().any(|a| a.id == "z1h6j4e"));
    }

    #[test]
    fn test_save_appends_new_article_with_derived_slug() {
        let mut s = store();
        let before = s.len();
        s.save(draft("zz00zz0", "A Brand New Story!", "Body text."));

        assert_eq!(s.len(), before + 1);
        let saved = s.by_id("zz00zz0").unwrap();
        assert_eq!(saved.slug, "a-brand-new-story");
        assert_eq!(saved.content, "Body text.");
    }

    #[test]
    fn test_save_replaces_existing_and_regenerates_slug() {
        let mut s = store();
        let before = s.len();
        let mut d = ArticleDraft::edit(s.by_id("k2f9x1a").unwrap());
        d.title = "Reform Package Withdrawn".to_string();
        s.save(d);

        assert_eq!(s.len(), before);
        let saved = s.by_id("k2f9x1a").unwrap();
        assert_eq!(saved.title, "Reform Package Withdrawn");
        assert_eq!(saved.slug, "reform-package-withdrawn");
        // Flags survive an edit
        assert!(saved.featured);
    }

    #[test]
    fn test_save_round_trip_by_id() {
        let mut s = store();
        let d = draft("qq11qq1", "Round Trip", "Round trip content.");
        let id = s.save(d);
        let found = s.by_id(&id).unwrap();
        assert_eq!(found.title, "Round Trip");
        assert_eq!(found.slug, slugify(&found.title));
    }

    #[test]
    fn test_delete_removes_article() {
        let mut s = store();
        let before = s.len();
        s.delete("k2f9x1a");
        assert_eq!(s.len(), before - 1);
        assert!(s.by_id("k2f9x1a").is_none());
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut s = store();
        let before: Vec<String> = s.all().iter().map(|a| a.id.clone()).collect();
        s.delete("nonexistent");
        let after: Vec<String> = s.all().iter().map(|a| a.id.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_bookmarked_resolves_in_store_order_skipping_missing() {
        let s = store();
        let ids = vec![
            "w5e9t3j".to_string(),
            "deleted".to_string(),
            "k2f9x1a".to_string(),
        ];
        let resolved = s.bookmarked(&ids);
        let resolved_ids: Vec<_> = resolved.iter().map(|a| a.id.as_str()).collect();
        // Store order, not bookmark order
        assert_eq!(resolved_ids, vec!["k2f9x1a", "w5e9t3j"]);
    }

    #[test]
    fn test_fabricate_id_shape() {
        for _ in 0..50 {
            let id = fabricate_id();
            assert_eq!(id.len(), 7);
            assert!(id
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_draft_validation() {
        assert!(!ArticleDraft::new_article().is_valid());
        assert!(draft("x", "Title", "Content").is_valid());
        assert!(!draft("x", "  ", "Content").is_valid());
        assert!(!draft("x", "Title", "").is_valid());
    }
}
