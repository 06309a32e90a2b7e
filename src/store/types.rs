use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Sections
// ============================================================================

/// The fixed set of editorial sections. Seeded at startup, never mutated.
///
/// Every article belongs to exactly one section; the category pages and the
/// home-page section blocks are derived from this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    Politics,
    Economy,
    Rights,
    World,
    Technology,
    Health,
    Opinion,
    Entertainment,
}

impl Section {
    /// All sections in catalogue order.
    pub const ALL: [Section; 8] = [
        Section::Politics,
        Section::Economy,
        Section::Rights,
        Section::World,
        Section::Technology,
        Section::Health,
        Section::Opinion,
        Section::Entertainment,
    ];

    /// Display name shown in headings and article bylines.
    pub fn name(self) -> &'static str {
        match self {
            Section::Politics => "Politics",
            Section::Economy => "Economy",
            Section::Rights => "Rights",
            Section::World => "World",
            Section::Technology => "Technology",
            Section::Health => "Health",
            Section::Opinion => "Opinion",
            Section::Entertainment => "Entertainment",
        }
    }

    /// URL slug used in `/category/<slug>` paths.
    pub fn slug(self) -> &'static str {
        match self {
            Section::Politics => "politics",
            Section::Economy => "economy",
            Section::Rights => "rights",
            Section::World => "world",
            Section::Technology => "technology",
            Section::Health => "health",
            Section::Opinion => "opinion",
            Section::Entertainment => "entertainment",
        }
    }

    /// Look up a section by its URL slug.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.slug() == slug)
    }
}

/// Category catalogue record: a section plus its editorial description.
///
/// Fixed, seeded at startup; the runtime never creates or mutates these.
#[derive(Debug, Clone)]
pub struct Category {
    pub id: &'static str,
    pub section: Section,
    pub description: &'static str,
}

impl Category {
    pub fn name(&self) -> &'static str {
        self.section.name()
    }

    pub fn slug(&self) -> &'static str {
        self.section.slug()
    }
}

// ============================================================================
// Articles
// ============================================================================

/// An article record in the in-memory store.
///
/// `slug` is derived deterministically from `title` and unique within the
/// store; the admin save path regenerates it on every write. Outside the
/// admin panel an article is immutable for the session.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    /// Stable identifier (7-char base-36), never derived from content.
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    /// Plain text with blank-line paragraph breaks.
    pub content: String,
    pub author: String,
    pub author_image: Option<String>,
    pub date: NaiveDate,
    pub image_url: String,
    pub category: Section,
    pub tags: Vec<String>,
    /// Estimated reading time in minutes.
    pub read_time: Option<u32>,
    pub featured: bool,
    pub trending: bool,
    pub views: Option<u64>,
}

impl Article {
    /// Split content into paragraphs on blank lines, for detail rendering.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.content
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}

// ============================================================================
// Users
// ============================================================================

/// Per-user settings carried inside the persisted session record.
///
/// `categories` holds followed category slugs; nothing reads it yet but it
/// round-trips through the session slot so existing records keep it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub dark_mode: bool,
    pub categories: Vec<String>,
}

/// The session user, fabricated by the mock login and persisted as JSON in
/// the single session slot.
///
/// `bookmarks` is an ordered list of article ids; set semantics are enforced
/// by the toggle logic, not by the container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub bookmarks: Vec<String>,
    #[serde(default)]
    pub preferences: Preferences,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_slug_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_slug(section.slug()), Some(section));
        }
    }

    #[test]
    fn test_section_from_unknown_slug() {
        assert_eq!(Section::from_slug("sports"), None);
        assert_eq!(Section::from_slug(""), None);
    }

    #[test]
    fn test_paragraphs_split_on_blank_lines() {
        let article = Article {
            id: "abc1234".into(),
            title: "T".into(),
            slug: "t".into(),
            excerpt: String::new(),
            content: "First paragraph.\n\nSecond paragraph.\n\n".into(),
            author: "A".into(),
            author_image: None,
            date: NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(),
            image_url: String::new(),
            category: Section::World,
            tags: vec![],
            read_time: None,
            featured: false,
            trending: false,
            views: None,
        };
        let paras: Vec<_> = article.paragraphs().collect();
        assert_eq!(paras, vec!["First paragraph.", "Second paragraph."]);
    }

    #[test]
    fn test_user_json_defaults_for_missing_fields() {
        // Old records without preferences/avatar still deserialize
        let json = r#"{"id":"x","name":"Demo","email":"d@e.com","bookmarks":["a"]}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.bookmarks, vec!["a"]);
        assert!(!user.preferences.dark_mode);
        assert!(user.avatar.is_none());
    }
}
