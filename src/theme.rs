//! Theme system for the TUI.
//!
//! Provides semantic color roles that map to ratatui `Style` values.
//! The `ThemeVariant` enum selects between Light and Dark palettes.
//! Light is the default; a signed-in user's saved preference or a config
//! override flips it, and the toggle cycles at runtime.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Theme Variant
// ============================================================================

/// Available theme variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    Light,
    Dark,
}

impl ThemeVariant {
    /// Parse a variant name from a string (case-insensitive).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Build the `ColorPalette` for this variant.
    pub fn palette(self) -> ColorPalette {
        match self {
            Self::Light => ColorPalette::light(),
            Self::Dark => ColorPalette::dark(),
        }
    }

    /// Cycle to the next variant: Light → Dark → Light.
    pub fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Human-readable name for status display.
    pub fn name(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }
}

// ============================================================================
// Color Palette — semantic roles to Style
// ============================================================================

/// A complete color palette mapping every semantic UI role to a `Style`.
///
/// Each field corresponds to a specific visual element in the TUI.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    // -- Masthead and navigation --
    pub masthead: Style,
    pub nav_item: Style,
    pub nav_item_active: Style,
    pub breaking_ticker: Style,

    // -- Article cards --
    pub card_title: Style,
    pub card_selected: Style,
    pub card_excerpt: Style,
    pub card_meta: Style,
    pub card_category: Style,
    pub card_featured_badge: Style,
    pub card_trending_badge: Style,

    // -- Article detail --
    pub detail_heading: Style,
    pub detail_body: Style,
    pub detail_byline: Style,
    pub detail_tag: Style,
    pub bookmark_active: Style,

    // -- Admin panel --
    pub admin_row: Style,
    pub admin_row_selected: Style,
    pub admin_field_label: Style,
    pub admin_field_active: Style,
    pub admin_danger: Style,

    // -- Modals and forms --
    pub modal_border: Style,
    pub modal_title: Style,
    pub form_error: Style,
    pub form_success: Style,

    // -- Chrome --
    pub status_bar: Style,
    pub panel_border: Style,
    pub panel_border_focused: Style,
}

impl ColorPalette {
    /// Light palette, the default for a news-site reading surface.
    fn light() -> Self {
        Self {
            // Masthead and navigation
            masthead: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            nav_item: Style::default().fg(Color::DarkGray),
            nav_item_active: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            breaking_ticker: Style::default().bg(Color::Red).fg(Color::White),

            // Article cards
            card_title: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            card_selected: Style::default().bg(Color::Blue).fg(Color::White),
            card_excerpt: Style::default().fg(Color::Black),
            card_meta: Style::default().fg(Color::DarkGray),
            card_category: Style::default().fg(Color::Red),
            card_featured_badge: Style::default().fg(Color::Magenta),
            card_trending_badge: Style::default().fg(Color::Yellow),

            // Article detail
            detail_heading: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            detail_body: Style::default().fg(Color::Black),
            detail_byline: Style::default().fg(Color::DarkGray),
            detail_tag: Style::default().fg(Color::Blue),
            bookmark_active: Style::default().fg(Color::Red),

            // Admin panel
            admin_row: Style::default().fg(Color::Black),
            admin_row_selected: Style::default().bg(Color::Blue).fg(Color::White),
            admin_field_label: Style::default().fg(Color::DarkGray),
            admin_field_active: Style::default().fg(Color::Blue),
            admin_danger: Style::default().fg(Color::Red),

            // Modals and forms
            modal_border: Style::default().fg(Color::Blue),
            modal_title: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            form_error: Style::default().fg(Color::Red),
            form_success: Style::default().fg(Color::Green),

            // Chrome
            status_bar: Style::default().bg(Color::White).fg(Color::Black),
            panel_border: Style::default().fg(Color::DarkGray),
            panel_border_focused: Style::default().fg(Color::Blue),
        }
    }

    /// Dark palette for low-light reading.
    fn dark() -> Self {
        Self {
            // Masthead and navigation
            masthead: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            nav_item: Style::default().fg(Color::Gray),
            nav_item_active: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            breaking_ticker: Style::default().bg(Color::Red).fg(Color::White),

            // Article cards
            card_title: Style::default().add_modifier(Modifier::BOLD),
            card_selected: Style::default().bg(Color::DarkGray).fg(Color::White),
            card_excerpt: Style::default(),
            card_meta: Style::default().fg(Color::DarkGray),
            card_category: Style::default().fg(Color::Red),
            card_featured_badge: Style::default().fg(Color::Magenta),
            card_trending_badge: Style::default().fg(Color::Yellow),

            // Article detail
            detail_heading: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            detail_body: Style::default(),
            detail_byline: Style::default().fg(Color::DarkGray),
            detail_tag: Style::default().fg(Color::Cyan),
            bookmark_active: Style::default().fg(Color::Red),

            // Admin panel
            admin_row: Style::default(),
            admin_row_selected: Style::default().bg(Color::DarkGray).fg(Color::White),
            admin_field_label: Style::default().fg(Color::DarkGray),
            admin_field_active: Style::default().fg(Color::Cyan),
            admin_danger: Style::default().fg(Color::Red),

            // Modals and forms
            modal_border: Style::default().fg(Color::Cyan),
            modal_title: Style::default().add_modifier(Modifier::BOLD),
            form_error: Style::default().fg(Color::Red),
            form_success: Style::default().fg(Color::Green),

            // Chrome
            status_bar: Style::default().bg(Color::DarkGray).fg(Color::White),
            panel_border: Style::default(),
            panel_border_focused: Style::default().fg(Color::Cyan),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_from_str_name() {
        assert_eq!(
            ThemeVariant::from_str_name("dark"),
            Some(ThemeVariant::Dark)
        );
        assert_eq!(
            ThemeVariant::from_str_name("Light"),
            Some(ThemeVariant::Light)
        );
        assert_eq!(
            ThemeVariant::from_str_name("DARK"),
            Some(ThemeVariant::Dark)
        );
        assert_eq!(ThemeVariant::from_str_name("neon"), None);
    }

    #[test]
    fn toggle_cycles_between_two_variants() {
        assert_eq!(ThemeVariant::Light.next(), ThemeVariant::Dark);
        assert_eq!(ThemeVariant::Dark.next(), ThemeVariant::Light);
        assert_eq!(ThemeVariant::Light.next().next(), ThemeVariant::Light);
    }

    #[test]
    fn light_palette_differs_from_dark() {
        let light = ThemeVariant::Light.palette();
        let dark = ThemeVariant::Dark.palette();
        assert_ne!(light.card_selected, dark.card_selected);
        assert_ne!(light.status_bar, dark.status_bar);
    }

    #[test]
    fn breaking_ticker_stays_red_in_both_palettes() {
        for variant in [ThemeVariant::Light, ThemeVariant::Dark] {
            let palette = variant.palette();
            assert_eq!(
                palette.breaking_ticker,
                Style::default().bg(Color::Red).fg(Color::White)
            );
        }
    }

    #[test]
    fn is_dark() {
        assert!(ThemeVariant::Dark.is_dark());
        assert!(!ThemeVariant::Light.is_dark());
    }
}
