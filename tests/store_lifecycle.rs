//! Integration tests for the article lifecycle: create, route, search,
//! edit, delete.
//!
//! These tests exercise the store, router, and search filter together,
//! verifying that an admin mutation is immediately visible to every
//! derived surface.

use newsdesk::route::{Page, Route, Router};
use newsdesk::search;
use newsdesk::store::{ArticleDraft, ArticleStore, Section};
use newsdesk::util::slugify;
use pretty_assertions::assert_eq;

fn draft(title: &str, content: &str, category: Section) -> ArticleDraft {
    ArticleDraft {
        title: title.to_string(),
        content: content.to_string(),
        category: Some(category),
        ..ArticleDraft::new_article()
    }
}

// ============================================================================
// Seed Fixture
// ============================================================================

#[test]
fn test_seed_fixture_shape() {
    let store = ArticleStore::seeded();
    assert_eq!(store.len(), 13);

    // Every slug is derived from its title
    for article in store.all() {
        assert_eq!(article.slug, slugify(&article.title));
    }

    // Ids are unique
    let mut ids: Vec<&str> = store.all().iter().map(|a| a.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), store.len());
}

#[test]
fn test_every_section_routes_to_its_articles() {
    let store = ArticleStore::seeded();
    for section in Section::ALL {
        let route = Route::classify(&format!("/category/{}", section.slug()), "");
        assert_eq!(
            route,
            Route::Category {
                slug: section.slug().to_string()
            }
        );
        let articles = store.by_category(section, None);
        assert!(articles.iter().all(|a| a.category == section));
    }
}

// ============================================================================
// Create → Route → Search
// ============================================================================

#[test]
fn test_created_article_is_routable_and_searchable() {
    let mut store = ArticleStore::seeded();
    let id = store.save(draft(
        "Xylophone Factory Reopens After Strike",
        "The factory floor hummed again on Monday.",
        Section::Economy,
    ));

    // Routable by its derived slug
    let mut router = Router::new("", "/article/xylophone-factory-reopens-after-strike");
    match router.resolve(&store) {
        Page::Article(article) => assert_eq!(article.id, id),
        other => panic!("expected article page, got {:?}", other),
    }
    assert_eq!(
        router.document_title(),
        "Xylophone Factory Reopens After Strike | NewsDesk"
    );

    // Searchable by a title fragment, case-insensitively
    let hits = search::filter(&store, "XYLOPHONE");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, id);

    // And by a body fragment
    let hits = search::filter(&store, "hummed again");
    assert_eq!(hits.len(), 1);

    // Visible in its category listing
    assert!(store
        .by_category(Section::Economy, None)
        .iter()
        .any(|a| a.id == id));
}

#[test]
fn test_empty_query_returns_whole_catalogue() {
    let store = ArticleStore::seeded();
    assert_eq!(search::filter(&store, "").len(), store.len());
    assert_eq!(search::filter(&store, "   ").len(), store.len());
}

// ============================================================================
// Edit
// ============================================================================

#[test]
fn test_edit_regenerates_slug_and_orphans_old_path() {
    let mut store = ArticleStore::seeded();
    let original = store.all()[0].clone();
    let old_path = format!("/article/{}", original.slug);

    let mut edit = ArticleDraft::edit(&original);
    edit.title = "Completely Retitled Story".to_string();
    store.save(edit);

    // New slug resolves
    let mut router = Router::new("", "/article/completely-retitled-story");
    match router.resolve(&store) {
        Page::Article(article) => assert_eq!(article.id, original.id),
        other => panic!("expected article page, got {:?}", other),
    }

    // The previous slug now 404s
    let mut router = Router::new("", old_path);
    assert_eq!(router.resolve(&store), Page::NotFound);
}

#[test]
fn test_edit_does_not_change_store_position() {
    let mut store = ArticleStore::seeded();
    let target = store.all()[3].clone();
    let order_before: Vec<String> = store.all().iter().map(|a| a.id.clone()).collect();

    let mut edit = ArticleDraft::edit(&target);
    edit.excerpt = "A fresh excerpt.".to_string();
    store.save(edit);

    let order_after: Vec<String> = store.all().iter().map(|a| a.id.clone()).collect();
    assert_eq!(order_before, order_after);
}

// ============================================================================
// Delete
// ============================================================================

#[test]
fn test_deleted_article_disappears_everywhere() {
    let mut store = ArticleStore::seeded();
    let doomed = store.all()[0].clone();

    store.delete(&doomed.id);

    // Gone from routing
    let mut router = Router::new("", format!("/article/{}", doomed.slug));
    assert_eq!(router.resolve(&store), Page::NotFound);

    // Gone from search
    assert!(search::filter(&store, &doomed.title).is_empty());

    // Gone from its category listing
    assert!(store
        .by_category(doomed.category, None)
        .iter()
        .all(|a| a.id != doomed.id));

    // Gone from related lists of the survivors
    for survivor in store.all() {
        assert!(store.related(survivor).iter().all(|a| a.id != doomed.id));
    }
}

// ============================================================================
// Full Lifecycle
// ============================================================================

#[test]
fn test_full_lifecycle_create_edit_delete() {
    let mut store = ArticleStore::seeded();
    let seeded = store.len();

    // Step 1: Create
    let id = store.save(draft(
        "Harbor Bridge Closed for Repairs",
        "Engineers found cracks during a routine inspection.\n\nRepairs run through Friday.",
        Section::Politics,
    ));
    assert_eq!(store.len(), seeded + 1);

    // Step 2: The new article relates to others in its category
    let created = store.by_id(&id).unwrap().clone();
    let related = store.related(&created);
    assert!(!related.is_empty());
    assert!(related.len() <= 3);

    // Step 3: Edit, moving it to another section
    let mut edit = ArticleDraft::edit(&created);
    edit.title = "Harbor Bridge Reopens Early".to_string();
    edit.category = Some(Section::Economy);
    store.save(edit);
    assert_eq!(store.len(), seeded + 1);

    let updated = store.by_id(&id).unwrap();
    assert_eq!(updated.slug, "harbor-bridge-reopens-early");
    assert_eq!(updated.category, Section::Economy);

    // Step 4: Search finds it under the new title only
    assert!(search::filter(&store, "reopens early")
        .iter()
        .any(|a| a.id == id));

    // Step 5: Delete restores the seeded count
    store.delete(&id);
    assert_eq!(store.len(), seeded);
    assert!(store.by_id(&id).is_none());
}
