use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Derive a URL slug from an article title.
///
/// Lowercases the title, collapses every run of non-alphanumeric characters
/// into a single hyphen, and trims leading/trailing hyphens. The result is
/// deterministic: the same title always yields the same slug.
///
/// # Examples
///
/// ```
/// use newsdesk::util::slugify;
///
/// assert_eq!(slugify("Government Announces New Reforms"), "government-announces-new-reforms");
/// assert_eq!(slugify("  Markets -- Rally!  "), "markets-rally");
/// assert_eq!(slugify("!!!"), "");
/// ```
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            // Any non-alphanumeric run collapses to at most one hyphen
            pending_hyphen = true;
        }
    }

    slug
}

/// Turn a slug back into a display title: hyphens become spaces and each
/// word is capitalized. Used for category page titles.
///
/// ```
/// use newsdesk::util::title_from_slug;
///
/// assert_eq!(title_from_slug("politics"), "Politics");
/// assert_eq!(title_from_slug("world-affairs"), "World Affairs");
/// ```
pub fn title_from_slug(slug: &str) -> String {
    slug.split('-')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Display width of a string in terminal columns (Unicode-aware).
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

const ELLIPSIS: &str = "...";
const ELLIPSIS_WIDTH: usize = 3;

/// Truncate a string to fit within a maximum display width, appending "..."
/// when text was cut off. Width calculation is Unicode-aware so CJK and
/// emoji content never overflows list rows.
///
/// Returns `Cow::Borrowed` when the string already fits (no allocation).
/// For widths of 3 columns or less there is no room for a character plus
/// the ellipsis, so as many characters as fit are returned without one.
pub fn truncate_to_width(s: &str, max_width: usize) -> Cow<'_, str> {
    if max_width == 0 {
        return Cow::Borrowed("");
    }

    if max_width <= ELLIPSIS_WIDTH {
        let mut byte_end = 0;
        let mut used = 0;
        for (idx, c) in s.char_indices() {
            let w = UnicodeWidthChar::width(c).unwrap_or(0);
            if used + w > max_width {
                break;
            }
            used += w;
            byte_end = idx + c.len_utf8();
        }
        if byte_end == s.len() {
            return Cow::Borrowed(s);
        }
        return Cow::Owned(s[..byte_end].to_string());
    }

    let target_width = max_width - ELLIPSIS_WIDTH;
    let mut used = 0;
    let mut cut_point = None;

    for (idx, c) in s.char_indices() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if cut_point.is_none() && used + w > target_width {
            cut_point = Some(idx);
        }
        if used + w > max_width {
            let cut = cut_point.unwrap_or(s.len());
            return Cow::Owned(format!("{}{}", &s[..cut], ELLIPSIS));
        }
        used += w;
    }

    Cow::Borrowed(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(
            slugify("Government Announces New Economic Reform Package"),
            "government-announces-new-economic-reform-package"
        );
    }

    #[test]
    fn test_slugify_collapses_runs() {
        assert_eq!(slugify("Markets -- Rally, Again!"), "markets-rally-again");
        assert_eq!(slugify("a   b"), "a-b");
    }

    #[test]
    fn test_slugify_trims_edges() {
        assert_eq!(slugify("  Hello  "), "hello");
        assert_eq!(slugify("-leading-and-trailing-"), "leading-and-trailing");
    }

    #[test]
    fn test_slugify_non_ascii_dropped() {
        // Non-ASCII characters are treated as separators, matching the
        // [^a-z0-9]+ collapse rule
        assert_eq!(slugify("café crème"), "caf-cr-me");
    }

    #[test]
    fn test_slugify_empty_and_symbols() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_title_from_slug() {
        assert_eq!(title_from_slug("politics"), "Politics");
        assert_eq!(title_from_slug("world-affairs"), "World Affairs");
        assert_eq!(title_from_slug(""), "");
    }

    #[test]
    fn test_truncate_fits() {
        assert_eq!(truncate_to_width("Short", 10), "Short");
        assert!(matches!(truncate_to_width("Short", 10), Cow::Borrowed(_)));
    }

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate_to_width("Hello World", 8), "Hello...");
    }

    #[test]
    fn test_truncate_narrow_widths() {
        assert_eq!(truncate_to_width("Test", 0), "");
        assert_eq!(truncate_to_width("Test", 1), "T");
        assert_eq!(truncate_to_width("Test", 3), "Tes");
        assert_eq!(truncate_to_width("Hi", 3), "Hi");
    }

    #[test]
    fn test_truncate_cjk() {
        assert_eq!(truncate_to_width("你好世界", 7), "你好...");
        assert_eq!(truncate_to_width("你好", 10), "你好");
    }

    proptest! {
        // Slug derivation is deterministic and produces only [a-z0-9-]
        // with no leading/trailing or doubled hyphens.
        #[test]
        fn prop_slug_shape(title in ".{0,80}") {
            let slug = slugify(&title);
            prop_assert_eq!(slugify(&title), slug.clone());
            prop_assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
            prop_assert!(!slug.starts_with('-'));
            prop_assert!(!slug.ends_with('-'));
            prop_assert!(!slug.contains("--"));
        }

        #[test]
        fn prop_truncate_never_exceeds_width(s in ".{0,60}", width in 0usize..40) {
            let out = truncate_to_width(&s, width);
            prop_assert!(display_width(&out) <= width);
        }
    }
}
