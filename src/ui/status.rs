use crate::app::App;
use crate::route::Page;
use ratatui::{layout::Rect, widgets::Paragraph, Frame};
use std::borrow::Cow;

/// Render the status bar
pub(super) fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    // Use Cow to avoid allocations for static strings and borrowed messages
    let text: Cow<'_, str> = if let Some((msg, _)) = &app.status_message {
        Cow::Borrowed(msg.as_ref())
    } else if app.search_mode {
        Cow::Borrowed("Type to search | Up/Down select | ENTER open | ESC close")
    } else if app.auth_modal.is_some() {
        Cow::Borrowed("Tab field | ENTER submit | Ctrl+T switch mode | ESC cancel")
    } else {
        match &app.page {
            Page::Home => Cow::Borrowed(
                "[j/k]select [Enter]open [/]search [1-8]sections [a]dmin [B]ookmarks [u]ser [t]heme [q]uit",
            ),
            Page::Article(_) => Cow::Borrowed(
                "[j/k]scroll [b]ookmark [s]hare [Tab/Enter]related [Backspace]back [q]uit",
            ),
            Page::Category { .. } => {
                Cow::Borrowed("[j/k]select [Enter]open [g]home [Backspace]back [q]uit")
            }
            Page::Admin => {
                if app.admin.form.is_some() {
                    Cow::Borrowed("[Tab]field [Ctrl+S]save [Esc]cancel")
                } else {
                    Cow::Borrowed("[n]ew [e]dit [d]elete [j/k]select [g]home [q]uit")
                }
            }
            Page::NotFound => Cow::Borrowed("[Backspace]back [g]home [q]uit"),
        }
    };

    let paragraph = Paragraph::new(text).style(app.palette.status_bar);
    f.render_widget(paragraph, area);
}
