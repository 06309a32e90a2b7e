mod articles;
pub mod categories;
mod seed;
mod types;

pub use articles::{fabricate_id, ArticleDraft, ArticleStore};
pub use types::{Article, Category, Preferences, Section, User};
