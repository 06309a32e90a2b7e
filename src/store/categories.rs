//! The fixed category catalogue.
//!
//! Categories are seeded once and never mutated at runtime; the admin panel
//! edits articles, not categories.

use super::types::{Category, Section};

/// The seeded catalogue, in display order.
pub const CATALOGUE: [Category; 8] = [
    Category {
        id: "1",
        section: Section::Politics,
        description: "Latest political news and developments",
    },
    Category {
        id: "2",
        section: Section::Economy,
        description: "Financial news, market updates and economic analysis",
    },
    Category {
        id: "3",
        section: Section::Rights,
        description: "Human rights, social justice and advocacy news",
    },
    Category {
        id: "4",
        section: Section::World,
        description: "International news and global affairs",
    },
    Category {
        id: "5",
        section: Section::Technology,
        description: "Tech innovations, digital trends and industry updates",
    },
    Category {
        id: "6",
        section: Section::Health,
        description: "Healthcare news, medical research and wellness information",
    },
    Category {
        id: "7",
        section: Section::Opinion,
        description: "Editorials, columns and opinion pieces",
    },
    Category {
        id: "8",
        section: Section::Entertainment,
        description: "Arts, culture, celebrities and lifestyle",
    },
];

/// Look up a catalogue entry by its URL slug.
pub fn by_slug(slug: &str) -> Option<&'static Category> {
    CATALOGUE.iter().find(|c| c.slug() == slug)
}
