//! Utility functions for common operations.
//!
//! - **Slugs**: deterministic URL-safe identifiers derived from titles
//! - **Text processing**: Unicode-aware string width calculation and truncation
//!
//! # Examples
//!
//! ```
//! use newsdesk::util::{slugify, truncate_to_width};
//!
//! assert_eq!(slugify("Breaking: Markets Rally!"), "breaking-markets-rally");
//! let truncated = truncate_to_width("Long article title", 15);
//! ```

mod text;

pub use text::{display_width, slugify, title_from_slug, truncate_to_width};
