//! Path classification and navigation history.
//!
//! The router maps location paths onto the four mutually exclusive views
//! (home, article, category, admin), derives the document title as a side
//! effect of resolution, and owns a navigable history stack that mirrors
//! browser push-state/back/forward semantics. In-app links are intercepted
//! by path prefix; anything unrecognized falls through to the external
//! opener.

use crate::store::{Article, ArticleStore};
use crate::util::title_from_slug;

/// Site name used in derived document titles.
pub const SITE_NAME: &str = "NewsDesk";
/// Home page document title.
pub const HOME_TITLE: &str = "NewsDesk | Independent Journalism";

// ============================================================================
// Route Classification
// ============================================================================

/// A classified location path. Exactly one variant is active at any time;
/// the mutual exclusion of the four views is enforced by the type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Article { slug: String },
    Category { slug: String },
    Admin,
}

impl Route {
    /// Classify a location path, stripping the deployment base path first.
    ///
    /// - `/admin` → Admin
    /// - `/category/<slug>` → Category
    /// - `/article/<slug>` → Article
    /// - anything else → Home
    pub fn classify(path: &str, base_path: &str) -> Route {
        let clean = if base_path.is_empty() {
            path
        } else {
            path.strip_prefix(base_path).unwrap_or(path)
        };
        let clean = if clean.is_empty() { "/" } else { clean };

        if clean == "/admin" {
            Route::Admin
        } else if let Some(rest) = clean.strip_prefix("/category/") {
            Route::Category {
                slug: last_segment(rest).to_string(),
            }
        } else if let Some(rest) = clean.strip_prefix("/article/") {
            Route::Article {
                slug: last_segment(rest).to_string(),
            }
        } else {
            Route::Home
        }
    }

    /// The canonical in-app path for this route (without base path).
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Article { slug } => format!("/article/{}", slug),
            Route::Category { slug } => format!("/category/{}", slug),
            Route::Admin => "/admin".to_string(),
        }
    }
}

fn last_segment(rest: &str) -> &str {
    rest.rsplit('/').next().unwrap_or(rest)
}

// ============================================================================
// Resolved Pages
// ============================================================================

/// A route resolved against the article store.
///
/// `NotFound` is distinct from `Article`: a recognized article path whose
/// slug resolves to nothing gets its own page with its own title rather
/// than an error.
///
/// The article is cloned out of the store so the detail page keeps stable
/// data even if an admin save replaces the store entry mid-view.
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Home,
    Article(Article),
    NotFound,
    Category { slug: String },
    Admin,
}

impl Page {
    /// Document title for this page.
    pub fn title(&self) -> String {
        match self {
            Page::Home => HOME_TITLE.to_string(),
            Page::Article(article) => format!("{} | {}", article.title, SITE_NAME),
            Page::NotFound => format!("Not Found | {}", SITE_NAME),
            Page::Category { slug } => format!("{} | {}", title_from_slug(slug), SITE_NAME),
            Page::Admin => format!("Admin Panel | {}", SITE_NAME),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

/// Location state: history stack, cursor, and the derived document title.
pub struct Router {
    base_path: String,
    history: Vec<String>,
    cursor: usize,
    document_title: String,
}

impl Router {
    /// Create a router at the given initial path.
    ///
    /// `initial_path` is normally the configured start location, but a
    /// one-shot stashed redirect (static-hosting 404 fallback) may override
    /// it — the caller consumes the stash and passes the result here.
    pub fn new(base_path: impl Into<String>, initial_path: impl Into<String>) -> Self {
        Self {
            base_path: base_path.into(),
            history: vec![initial_path.into()],
            cursor: 0,
            document_title: HOME_TITLE.to_string(),
        }
    }

    /// The current location path.
    pub fn current_path(&self) -> &str {
        &self.history[self.cursor]
    }

    /// The document title derived by the last resolution.
    pub fn document_title(&self) -> &str {
        &self.document_title
    }

    /// Inspect an href from an in-app link. Recognized paths (`/article/…`,
    /// `/category/…`, `/admin`, `/`) are returned for history push;
    /// anything else is `None` and falls through to default handling.
    pub fn intercept(href: &str) -> Option<&str> {
        if href.starts_with("/article/")
            || href.starts_with("/category/")
            || href == "/admin"
            || href == "/"
        {
            Some(href)
        } else {
            None
        }
    }

    /// Push a new path onto the history, discarding any forward entries.
    pub fn navigate(&mut self, path: impl Into<String>) {
        self.history.truncate(self.cursor + 1);
        self.history.push(path.into());
        self.cursor = self.history.len() - 1;
    }

    /// Move back one history entry. Returns false at the oldest entry.
    pub fn back(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Move forward one history entry. Returns false at the newest entry.
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 < self.history.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Classify the current path and resolve it against the store,
    /// updating the document title as a side effect.
    ///
    /// Runs on initial load, after history navigation, and after every
    /// programmatic `navigate`.
    pub fn resolve(&mut self, store: &ArticleStore) -> Page {
        let route = Route::classify(self.current_path(), &self.base_path);
        let page = match route {
            Route::Home => Page::Home,
            Route::Admin => Page::Admin,
            Route::Category { slug } => Page::Category { slug },
            Route::Article { slug } => match store.by_slug(&slug) {
                Some(article) => Page::Article(article.clone()),
                None => {
                    tracing::debug!(slug = %slug, "No article for requested slug");
                    Page::NotFound
                }
            },
        };
        self.document_title = page.title();
        tracing::debug!(path = %self.current_path(), title = %self.document_title, "Resolved route");
        page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ArticleStore;

    #[test]
    fn test_classify_home() {
        assert_eq!(Route::classify("/", ""), Route::Home);
        assert_eq!(Route::classify("", ""), Route::Home);
        assert_eq!(Route::classify("/about", ""), Route::Home);
    }

    #[test]
    fn test_classify_admin() {
        assert_eq!(Route::classify("/admin", ""), Route::Admin);
    }

    #[test]
    fn test_classify_category() {
        assert_eq!(
            Route::classify("/category/world", ""),
            Route::Category {
                slug: "world".to_string()
            }
        );
    }

    #[test]
    fn test_classify_article() {
        assert_eq!(
            Route::classify("/article/some-slug", ""),
            Route::Article {
                slug: "some-slug".to_string()
            }
        );
    }

    #[test]
    fn test_classify_strips_base_path() {
        assert_eq!(Route::classify("/newsdesk/admin", "/newsdesk"), Route::Admin);
        assert_eq!(Route::classify("/newsdesk/", "/newsdesk"), Route::Home);
        assert_eq!(
            Route::classify("/newsdesk/article/x", "/newsdesk"),
            Route::Article {
                slug: "x".to_string()
            }
        );
        // Paths without the base still classify
        assert_eq!(Route::classify("/admin", "/newsdesk"), Route::Admin);
    }

    #[test]
    fn test_classify_empty_article_slug() {
        assert_eq!(
            Route::classify("/article/", ""),
            Route::Article {
                slug: String::new()
            }
        );
    }

    #[test]
    fn test_route_path_round_trip() {
        for route in [
            Route::Home,
            Route::Admin,
            Route::Article {
                slug: "a-b".to_string(),
            },
            Route::Category {
                slug: "world".to_string(),
            },
        ] {
            assert_eq!(Route::classify(&route.path(), ""), route);
        }
    }

    #[test]
    fn test_resolve_existing_article_sets_title() {
        let store = ArticleStore::seeded();
        let mut router = Router::new("", "/article/climate-summit-ends-with-new-global-emissions-agreement");
        let page = router.resolve(&store);
        match page {
            Page::Article(a) => assert_eq!(
                a.slug,
                "climate-summit-ends-with-new-global-emissions-agreement"
            ),
            other => panic!("expected article page, got {:?}", other),
        }
        assert_eq!(
            router.document_title(),
            "Climate Summit Ends with New Global Emissions Agreement | NewsDesk"
        );
    }

    #[test]
    fn test_resolve_missing_article_is_not_found() {
        let store = ArticleStore::seeded();
        let mut router = Router::new("", "/article/never-published");
        assert_eq!(router.resolve(&store), Page::NotFound);
        assert_eq!(router.document_title(), "Not Found | NewsDesk");
    }

    #[test]
    fn test_resolve_empty_slug_is_not_found() {
        let store = ArticleStore::seeded();
        let mut router = Router::new("", "/article/");
        assert_eq!(router.resolve(&store), Page::NotFound);
    }

    #[test]
    fn test_resolve_category_title_capitalizes_slug() {
        let store = ArticleStore::seeded();
        let mut router = Router::new("", "/category/world-affairs");
        router.resolve(&store);
        assert_eq!(router.document_title(), "World Affairs | NewsDesk");
    }

    #[test]
    fn test_resolve_home_title() {
        let store = ArticleStore::seeded();
        let mut router = Router::new("", "/");
        assert_eq!(router.resolve(&store), Page::Home);
        assert_eq!(router.document_title(), HOME_TITLE);
    }

    #[test]
    fn test_intercept_recognized_paths() {
        assert_eq!(Router::intercept("/article/x"), Some("/article/x"));
        assert_eq!(Router::intercept("/category/world"), Some("/category/world"));
        assert_eq!(Router::intercept("/admin"), Some("/admin"));
        assert_eq!(Router::intercept("/"), Some("/"));
    }

    #[test]
    fn test_intercept_falls_through_for_external() {
        assert_eq!(Router::intercept("https://example.com"), None);
        assert_eq!(Router::intercept("/newsletter"), None);
        assert_eq!(Router::intercept("/administrator"), None);
    }

    #[test]
    fn test_history_back_and_forward() {
        let mut router = Router::new("", "/");
        router.navigate("/article/a");
        router.navigate("/category/world");

        assert_eq!(router.current_path(), "/category/world");
        assert!(router.back());
        assert_eq!(router.current_path(), "/article/a");
        assert!(router.back());
        assert_eq!(router.current_path(), "/");
        assert!(!router.back());

        assert!(router.forward());
        assert_eq!(router.current_path(), "/article/a");
    }

    #[test]
    fn test_navigate_discards_forward_entries() {
        let mut router = Router::new("", "/");
        router.navigate("/article/a");
        router.back();
        router.navigate("/admin");

        assert_eq!(router.current_path(), "/admin");
        assert!(!router.forward());
    }
}
