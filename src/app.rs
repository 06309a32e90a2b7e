use crate::auth::{AuthError, AuthMode};
use crate::config::Config;
use crate::route::{Page, Router};
use crate::search;
use crate::session::Session;
use crate::store::{Article, ArticleDraft, ArticleStore, Section, User};
use crate::theme::{ColorPalette, ThemeVariant};
use std::borrow::Cow;
use std::time::Duration;
use tokio::time::Instant;

/// Public site URL used when sharing an article.
pub const SITE_URL: &str = "https://www.newsdesk.news";

// ============================================================================
// Auth Modal State
// ============================================================================

/// Which field of the auth modal has input focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    Name,
    Email,
    Password,
}

impl AuthField {
    /// Cycle focus to the next field. The name field only exists in
    /// register mode.
    pub fn next(self, mode: AuthMode) -> Self {
        match (self, mode) {
            (Self::Name, _) => Self::Email,
            (Self::Email, _) => Self::Password,
            (Self::Password, AuthMode::Register) => Self::Name,
            (Self::Password, AuthMode::Login) => Self::Email,
        }
    }
}

/// State of the sign-in / registration modal.
pub struct AuthModalState {
    pub mode: AuthMode,
    pub name: String,
    pub email: String,
    pub password: String,
    pub field: AuthField,
    pub error: Option<String>,
    /// True while the mock sign-in delay is running.
    pub submitting: bool,
}

impl AuthModalState {
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            name: String::new(),
            email: String::new(),
            password: String::new(),
            field: match mode {
                AuthMode::Login => AuthField::Email,
                AuthMode::Register => AuthField::Name,
            },
            error: None,
            submitting: false,
        }
    }

    /// Switch between login and register, keeping typed values.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggle();
        self.error = None;
        if self.mode == AuthMode::Login && self.field == AuthField::Name {
            self.field = AuthField::Email;
        }
    }

    pub fn active_input(&mut self) -> &mut String {
        match self.field {
            AuthField::Name => &mut self.name,
            AuthField::Email => &mut self.email,
            AuthField::Password => &mut self.password,
        }
    }

    pub fn credentials(&self) -> crate::auth::Credentials {
        crate::auth::Credentials {
            mode: self.mode,
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

// ============================================================================
// Newsletter Form State
// ============================================================================

pub const NEWSLETTER_EMPTY: &str = "Please enter your email address";
pub const NEWSLETTER_INVALID: &str = "Please enter a valid email address";
pub const NEWSLETTER_THANKS: &str = "Thank you for subscribing!";

/// Lifecycle of the newsletter signup form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewsletterStatus {
    Idle,
    Submitting,
    Subscribed,
    Error(&'static str),
}

/// The newsletter footer form: an email field plus a validation / success
/// message.
pub struct NewsletterState {
    pub active: bool,
    pub input: String,
    pub status: NewsletterStatus,
}

impl NewsletterState {
    fn new() -> Self {
        Self {
            active: false,
            input: String::new(),
            status: NewsletterStatus::Idle,
        }
    }
}

/// Minimal `local@domain.tld` shape check for the newsletter form.
pub(crate) fn email_is_valid(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

// ============================================================================
// Admin Panel State
// ============================================================================

/// Which field of the admin edit form has input focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminField {
    Title,
    Excerpt,
    Content,
    Author,
    ImageUrl,
    Category,
    Tags,
}

impl AdminField {
    pub fn next(self) -> Self {
        match self {
            Self::Title => Self::Excerpt,
            Self::Excerpt => Self::Content,
            Self::Content => Self::Author,
            Self::Author => Self::ImageUrl,
            Self::ImageUrl => Self::Category,
            Self::Category => Self::Tags,
            Self::Tags => Self::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Title => Self::Tags,
            Self::Excerpt => Self::Title,
            Self::Content => Self::Excerpt,
            Self::Author => Self::Content,
            Self::ImageUrl => Self::Author,
            Self::Category => Self::ImageUrl,
            Self::Tags => Self::Category,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Excerpt => "Excerpt",
            Self::Content => "Content",
            Self::Author => "Author",
            Self::ImageUrl => "Image URL",
            Self::Category => "Category",
            Self::Tags => "Tags",
        }
    }
}

/// The admin edit form: a draft under construction plus the focused field.
/// Tags are edited as one comma-separated line and split on save.
pub struct AdminForm {
    pub draft: ArticleDraft,
    pub tags_input: String,
    pub field: AdminField,
}

impl AdminForm {
    pub fn create() -> Self {
        Self {
            draft: ArticleDraft::new_article(),
            tags_input: String::new(),
            field: AdminField::Title,
        }
    }

    pub fn edit(article: &Article) -> Self {
        Self {
            draft: ArticleDraft::edit(article),
            tags_input: article.tags.join(", "),
            field: AdminField::Title,
        }
    }

    /// Fold the tags line back into the draft and hand it over for saving.
    pub fn into_draft(mut self) -> ArticleDraft {
        self.draft.tags = self
            .tags_input
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        self.draft
    }

    pub fn active_input(&mut self) -> Option<&mut String> {
        match self.field {
            AdminField::Title => Some(&mut self.draft.title),
            AdminField::Excerpt => Some(&mut self.draft.excerpt),
            AdminField::Content => Some(&mut self.draft.content),
            AdminField::Author => Some(&mut self.draft.author),
            AdminField::ImageUrl => Some(&mut self.draft.image_url),
            AdminField::Tags => Some(&mut self.tags_input),
            AdminField::Category => None,
        }
    }

    /// Cycle the category field through the section enum.
    pub fn cycle_category(&mut self) {
        let current = self.draft.category.unwrap_or(Section::Politics);
        let idx = Section::ALL.iter().position(|s| *s == current).unwrap_or(0);
        self.draft.category = Some(Section::ALL[(idx + 1) % Section::ALL.len()]);
    }
}

/// The admin panel: the article table plus an optional open edit form.
pub struct AdminPanelState {
    pub selected: usize,
    pub form: Option<AdminForm>,
}

impl AdminPanelState {
    fn new() -> Self {
        Self {
            selected: 0,
            form: None,
        }
    }
}

// ============================================================================
// Events from background tasks
// ============================================================================

/// Events sent back from spawned tasks over the mpsc channel.
///
/// Every variant carries the generation counter captured when its task was
/// spawned; the handler discards results whose generation no longer matches,
/// so a superseded search or a dismissed login can never land.
pub enum AppEvent {
    /// Search finished after its simulated latency.
    SearchCompleted {
        query: String,
        generation: u64,
        results: Vec<Article>,
    },
    /// Mock sign-in finished.
    LoginCompleted {
        generation: u64,
        result: Result<User, AuthError>,
    },
    /// Newsletter signup finished.
    NewsletterSubscribed { generation: u64, email: String },
}

// ============================================================================
// Application State
// ============================================================================

/// Central application state.
pub struct App {
    pub store: ArticleStore,
    pub session: Session,
    pub router: Router,
    /// The resolved page for the router's current location.
    pub page: Page,

    // Theme
    pub theme_variant: ThemeVariant,
    pub palette: ColorPalette,

    /// Simulated search latency from config.
    pub search_delay: Duration,

    // List selection and detail scrolling for the current page
    pub selected: usize,
    pub scroll_offset: usize,

    // Search overlay
    pub search_mode: bool,
    pub search_input: String,
    /// None until the first search completes for the current overlay session.
    pub search_results: Option<Vec<Article>>,
    pub search_selected: usize,
    /// True while a spawned search is in flight.
    pub searching: bool,
    /// Debounce timer: last keystroke in the search input.
    pub search_debounce: Option<Instant>,
    /// Query waiting for the debounce window to elapse.
    pub pending_search: Option<String>,
    /// Incremented per spawned search; stale completions are discarded.
    pub search_generation: u64,
    /// Handle to the in-flight search task for cancellation.
    pub search_handle: Option<tokio::task::JoinHandle<()>>,

    // Auth modal
    pub auth_modal: Option<AuthModalState>,
    pub auth_generation: u64,
    pub auth_handle: Option<tokio::task::JoinHandle<()>>,

    // Bookmarks overlay
    pub show_bookmarks: bool,
    pub bookmarks_selected: usize,

    // Newsletter footer form
    pub newsletter: NewsletterState,
    pub newsletter_generation: u64,
    pub newsletter_handle: Option<tokio::task::JoinHandle<()>>,

    /// Status message with expiry (3 seconds). Cow avoids allocation for
    /// static literals.
    pub status_message: Option<(Cow<'static, str>, Instant)>,

    // Admin panel
    pub admin: AdminPanelState,

    /// Dirty flag to skip unnecessary frame renders.
    pub needs_redraw: bool,

    /// Current frame of the loading spinner animation.
    pub spinner_frame: usize,
}

impl App {
    /// Assemble the app from its loaded parts and resolve the initial page.
    ///
    /// A signed-in user's saved dark-mode preference wins over the config
    /// theme; the config theme wins over the default.
    pub fn new(store: ArticleStore, session: Session, mut router: Router, config: &Config) -> Self {
        let theme_variant = match session.user() {
            Some(user) if user.preferences.dark_mode => ThemeVariant::Dark,
            Some(_) => ThemeVariant::Light,
            None => ThemeVariant::from_str_name(&config.theme).unwrap_or(ThemeVariant::Light),
        };

        let page = router.resolve(&store);

        Self {
            store,
            session,
            router,
            page,
            theme_variant,
            palette: theme_variant.palette(),
            search_delay: Duration::from_millis(config.search_delay_ms),
            selected: 0,
            scroll_offset: 0,
            search_mode: false,
            search_input: String::new(),
            search_results: None,
            search_selected: 0,
            searching: false,
            search_debounce: None,
            pending_search: None,
            search_generation: 0,
            search_handle: None,
            auth_modal: None,
            auth_generation: 0,
            auth_handle: None,
            show_bookmarks: false,
            bookmarks_selected: 0,
            newsletter: NewsletterState::new(),
            newsletter_generation: 0,
            newsletter_handle: None,
            status_message: None,
            admin: AdminPanelState::new(),
            needs_redraw: true,
            spinner_frame: 0,
        }
    }

    // ========================================================================
    // Theme
    // ========================================================================

    /// Switch to a theme variant at runtime, mirroring the choice into the
    /// signed-in user's persisted preferences.
    pub fn set_theme(&mut self, variant: ThemeVariant) {
        self.theme_variant = variant;
        self.palette = variant.palette();
        self.needs_redraw = true;
        if let Err(e) = self.session.set_dark_mode(variant.is_dark()) {
            tracing::warn!(error = %e, "Failed to persist theme preference");
        }
    }

    /// Cycle to the next theme variant. Returns the new name for status
    /// display.
    pub fn cycle_theme(&mut self) -> &'static str {
        let next = self.theme_variant.next();
        self.set_theme(next);
        next.name()
    }

    // ========================================================================
    // Status line
    // ========================================================================

    /// Set status message (auto-expires after 3 seconds).
    pub fn set_status(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.status_message = Some((msg.into(), Instant::now()));
    }

    /// Clear status message if expired. Returns true if one was cleared.
    pub fn clear_expired_status(&mut self) -> bool {
        if let Some((_, time)) = &self.status_message {
            if time.elapsed().as_secs() >= 3 {
                self.status_message = None;
                return true;
            }
        }
        false
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Re-resolve the router's current location and reset page-local state.
    pub fn resolve_current(&mut self) {
        self.page = self.router.resolve(&self.store);
        self.selected = 0;
        self.scroll_offset = 0;
        self.needs_redraw = true;
    }

    /// Push a path and resolve it.
    pub fn navigate(&mut self, path: impl Into<String>) {
        self.router.navigate(path);
        self.resolve_current();
    }

    pub fn go_back(&mut self) {
        if self.router.back() {
            self.resolve_current();
        }
    }

    pub fn go_forward(&mut self) {
        if self.router.forward() {
            self.resolve_current();
        }
    }

    /// Follow an href: recognized in-app paths go through the router,
    /// web URLs go to the system opener, anything else is reported.
    pub fn open_href(&mut self, href: &str) {
        if let Some(path) = Router::intercept(href) {
            let path = path.to_string();
            self.navigate(path);
        } else if href.starts_with("http://") || href.starts_with("https://") {
            if let Err(e) = open::that(href) {
                tracing::warn!(href = %href, error = %e, "Failed to open external link");
                self.set_status(format!("Could not open {}", href));
            }
        } else {
            tracing::debug!(href = %href, "Ignoring unrecognized href");
        }
    }

    // ========================================================================
    // Bookmarks
    // ========================================================================

    /// Toggle a bookmark for the signed-in user, persisting immediately.
    /// Logged out, this only nudges toward the sign-in modal.
    pub fn toggle_bookmark(&mut self, article_id: &str) {
        match self.session.toggle_bookmark(article_id) {
            Ok(Some(true)) => self.set_status("Bookmarked"),
            Ok(Some(false)) => self.set_status("Bookmark removed"),
            Ok(None) => self.set_status("Sign in to bookmark articles"),
            Err(e) => {
                tracing::error!(error = %e, "Failed to persist bookmark");
                self.set_status("Could not save bookmark");
            }
        }
        self.needs_redraw = true;
    }

    /// The signed-in user's bookmarked articles, in store order.
    pub fn bookmarked_articles(&self) -> Vec<&Article> {
        self.store.bookmarked(self.session.bookmarks())
    }

    // ========================================================================
    // Share
    // ========================================================================

    /// Share an article: open its public URL, falling back to showing the
    /// URL in the status line when no opener is available.
    pub fn share_article(&mut self, article: &Article) {
        let url = format!("{}/article/{}", SITE_URL, article.slug);
        match open::that(&url) {
            Ok(()) => self.set_status("Opened share link"),
            Err(e) => {
                tracing::debug!(url = %url, error = %e, "Share opener unavailable");
                self.set_status(url);
            }
        }
    }

    // ========================================================================
    // Search overlay
    // ========================================================================

    pub fn open_search(&mut self) {
        self.search_mode = true;
        self.search_input.clear();
        self.search_results = None;
        self.search_selected = 0;
        self.needs_redraw = true;
    }

    /// Dismiss the overlay and cancel any in-flight search.
    pub fn close_search(&mut self) {
        if let Some(handle) = self.search_handle.take() {
            handle.abort();
            tracing::debug!("Aborted search task on overlay close");
        }
        self.search_mode = false;
        self.search_input.clear();
        self.search_results = None;
        self.searching = false;
        self.search_debounce = None;
        self.pending_search = None;
        self.needs_redraw = true;
    }

    /// Record a keystroke in the search input and arm the debounce timer.
    pub fn queue_search(&mut self) {
        self.pending_search = Some(self.search_input.clone());
        self.search_debounce = Some(Instant::now());
    }

    // ========================================================================
    // Auth
    // ========================================================================

    pub fn open_auth(&mut self, mode: AuthMode) {
        self.auth_modal = Some(AuthModalState::new(mode));
        self.needs_redraw = true;
    }

    /// Dismiss the modal, cancelling a pending sign-in if one is running.
    pub fn close_auth(&mut self) {
        if let Some(handle) = self.auth_handle.take() {
            handle.abort();
            tracing::debug!("Aborted pending sign-in on modal dismiss");
        }
        self.auth_modal = None;
        self.needs_redraw = true;
    }

    /// Complete a successful sign-in: adopt the user, persist the session,
    /// and close the modal. The active theme is mirrored into the fresh
    /// user's preferences.
    pub fn apply_login(&mut self, mut user: User) {
        user.preferences.dark_mode = self.theme_variant.is_dark();
        let name = user.name.clone();
        match self.session.login(user) {
            Ok(()) => self.set_status(format!("Welcome, {}", name)),
            Err(e) => {
                tracing::error!(error = %e, "Failed to persist session");
                self.set_status("Signed in, but the session could not be saved");
            }
        }
        self.auth_modal = None;
        self.needs_redraw = true;
    }

    pub fn logout(&mut self) {
        if let Err(e) = self.session.logout() {
            tracing::warn!(error = %e, "Failed to clear session slot");
        }
        self.show_bookmarks = false;
        self.set_status("Signed out");
        self.needs_redraw = true;
    }

    // ========================================================================
    // Newsletter
    // ========================================================================

    /// Validate the newsletter email before the fake subscribe is spawned.
    /// Returns the trimmed address when it passes.
    pub fn newsletter_validate(&mut self) -> Option<String> {
        let email = self.newsletter.input.trim().to_string();
        if email.is_empty() {
            self.newsletter.status = NewsletterStatus::Error(NEWSLETTER_EMPTY);
            None
        } else if !email_is_valid(&email) {
            self.newsletter.status = NewsletterStatus::Error(NEWSLETTER_INVALID);
            None
        } else {
            Some(email)
        }
    }

    /// Close the newsletter field, cancelling a pending subscribe.
    pub fn close_newsletter(&mut self) {
        if let Some(handle) = self.newsletter_handle.take() {
            handle.abort();
            tracing::debug!("Aborted newsletter subscribe on dismiss");
        }
        self.newsletter.active = false;
        if self.newsletter.status == NewsletterStatus::Submitting {
            self.newsletter.status = NewsletterStatus::Idle;
        }
        self.needs_redraw = true;
    }

    // ========================================================================
    // Admin panel
    // ========================================================================

    /// Commit the open edit form. Requires non-empty title and content.
    pub fn admin_save(&mut self) {
        let Some(form) = self.admin.form.take() else {
            return;
        };
        let draft = form.into_draft();
        if !draft.is_valid() {
            self.set_status("Title and content are required");
            self.admin.form = Some(AdminForm {
                tags_input: draft.tags.join(", "),
                draft,
                field: AdminField::Title,
            });
            return;
        }
        let slug = self.store.save(draft);
        self.set_status(format!("Saved /article/{}", slug));
        // An open article page may now be stale
        self.page = self.router.resolve(&self.store);
        self.needs_redraw = true;
    }

    /// Delete by id. A missing id is a no-op.
    pub fn admin_delete(&mut self, article_id: &str) {
        self.store.delete(article_id);
        if self.admin.selected >= self.store.all().len() {
            self.admin.selected = self.store.all().len().saturating_sub(1);
        }
        self.page = self.router.resolve(&self.store);
        self.set_status("Article deleted");
        self.needs_redraw = true;
    }
}

// ============================================================================
// Resource Cleanup
// ============================================================================

/// Abort all in-flight fake-async tasks on App drop so nothing outlives the
/// event loop.
impl Drop for App {
    fn drop(&mut self) {
        if let Some(handle) = self.search_handle.take() {
            handle.abort();
            tracing::debug!("Aborted search task on App drop");
        }
        if let Some(handle) = self.auth_handle.take() {
            handle.abort();
            tracing::debug!("Aborted sign-in task on App drop");
        }
        if let Some(handle) = self.newsletter_handle.take() {
            handle.abort();
            tracing::debug!("Aborted newsletter task on App drop");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::Router;
    use crate::session::Session;
    use crate::store::ArticleStore;
    use tempfile::TempDir;
    use tokio::time::{self, Duration};

    fn test_app(dir: &TempDir) -> App {
        let store = ArticleStore::seeded();
        let session = Session::restore(dir.path());
        let router = Router::new("", "/");
        App::new(store, session, router, &Config::default())
    }

    fn signed_in_app(dir: &TempDir) -> App {
        let mut app = test_app(dir);
        app.apply_login(User {
            id: "a1b2c3d".to_string(),
            name: "Demo User".to_string(),
            email: "demo@example.com".to_string(),
            avatar: None,
            bookmarks: Vec::new(),
            preferences: Default::default(),
        });
        app
    }

    #[tokio::test]
    async fn test_initial_page_is_home() {
        let dir = TempDir::new().unwrap();
        let app = test_app(&dir);
        assert_eq!(app.page, Page::Home);
        assert_eq!(
            app.router.document_title(),
            "NewsDesk | Independent Journalism"
        );
    }

    #[tokio::test]
    async fn test_navigate_resets_selection() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        app.selected = 4;
        app.scroll_offset = 12;

        app.navigate("/category/economy");
        assert_eq!(app.selected, 0);
        assert_eq!(app.scroll_offset, 0);
        assert_eq!(
            app.page,
            Page::Category {
                slug: "economy".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_back_and_forward_re_resolve() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        app.navigate("/admin");
        assert_eq!(app.page, Page::Admin);

        app.go_back();
        assert_eq!(app.page, Page::Home);

        app.go_forward();
        assert_eq!(app.page, Page::Admin);
    }

    #[tokio::test]
    async fn test_open_href_intercepts_in_app_paths() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        app.open_href("/admin");
        assert_eq!(app.page, Page::Admin);

        // Unrecognized relative hrefs do not navigate
        app.open_href("/newsletter");
        assert_eq!(app.page, Page::Admin);
    }

    #[tokio::test(start_paused = true)]
    async fn test_status_expires_after_three_seconds() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        app.set_status("hello");
        assert!(!app.clear_expired_status());
        assert!(app.status_message.is_some());

        time::advance(Duration::from_secs(4)).await;
        assert!(app.clear_expired_status());
        assert!(app.status_message.is_none());
    }

    #[tokio::test]
    async fn test_bookmark_toggle_logged_out_prompts_sign_in() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        app.toggle_bookmark("k2f9x1a");
        assert!(!app.session.is_bookmarked("k2f9x1a"));
        let (msg, _) = app.status_message.as_ref().unwrap();
        assert_eq!(msg, "Sign in to bookmark articles");
    }

    #[tokio::test]
    async fn test_bookmark_toggle_signed_in() {
        let dir = TempDir::new().unwrap();
        let mut app = signed_in_app(&dir);
        app.toggle_bookmark("k2f9x1a");
        assert!(app.session.is_bookmarked("k2f9x1a"));
        app.toggle_bookmark("k2f9x1a");
        assert!(!app.session.is_bookmarked("k2f9x1a"));
    }

    #[tokio::test]
    async fn test_cycle_theme_mirrors_preference() {
        let dir = TempDir::new().unwrap();
        let mut app = signed_in_app(&dir);
        assert_eq!(app.theme_variant, ThemeVariant::Light);

        assert_eq!(app.cycle_theme(), "Dark");
        assert!(app.session.user().unwrap().preferences.dark_mode);

        // Preference survives a session restore
        drop(app);
        let restored = Session::restore(dir.path());
        assert!(restored.user().unwrap().preferences.dark_mode);
    }

    #[tokio::test]
    async fn test_saved_dark_preference_wins_at_startup() {
        let dir = TempDir::new().unwrap();
        let mut app = signed_in_app(&dir);
        app.set_theme(ThemeVariant::Dark);
        drop(app);

        let store = ArticleStore::seeded();
        let session = Session::restore(dir.path());
        let router = Router::new("", "/");
        let app = App::new(store, session, router, &Config::default());
        assert_eq!(app.theme_variant, ThemeVariant::Dark);
    }

    #[tokio::test]
    async fn test_logout_clears_user() {
        let dir = TempDir::new().unwrap();
        let mut app = signed_in_app(&dir);
        app.logout();
        assert!(!app.session.is_authenticated());
        assert!(!Session::restore(dir.path()).is_authenticated());
    }

    #[tokio::test]
    async fn test_close_search_clears_overlay_state() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        app.open_search();
        app.search_input.push_str("economy");
        app.queue_search();
        assert!(app.pending_search.is_some());

        app.close_search();
        assert!(!app.search_mode);
        assert!(app.pending_search.is_none());
        assert!(app.search_results.is_none());
        assert!(app.search_handle.is_none());
    }

    #[tokio::test]
    async fn test_newsletter_validation_messages() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);

        app.newsletter.input.clear();
        assert_eq!(app.newsletter_validate(), None);
        assert_eq!(
            app.newsletter.status,
            NewsletterStatus::Error(NEWSLETTER_EMPTY)
        );

        app.newsletter.input = "not-an-email".to_string();
        assert_eq!(app.newsletter_validate(), None);
        assert_eq!(
            app.newsletter.status,
            NewsletterStatus::Error(NEWSLETTER_INVALID)
        );

        app.newsletter.input = "  reader@example.com ".to_string();
        assert_eq!(
            app.newsletter_validate(),
            Some("reader@example.com".to_string())
        );
    }

    #[test]
    fn test_email_shape_check() {
        assert!(email_is_valid("a@b.co"));
        assert!(email_is_valid("first.last@news.example.org"));
        assert!(!email_is_valid("plain"));
        assert!(!email_is_valid("@domain.com"));
        assert!(!email_is_valid("user@"));
        assert!(!email_is_valid("user@domain"));
        assert!(!email_is_valid("user@.com"));
        assert!(!email_is_valid("user@domain."));
    }

    #[tokio::test]
    async fn test_admin_save_requires_title_and_content() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        let before = app.store.all().len();

        app.admin.form = Some(AdminForm::create());
        app.admin_save();

        assert_eq!(app.store.all().len(), before);
        // The form stays open for correction
        assert!(app.admin.form.is_some());
    }

    #[tokio::test]
    async fn test_admin_save_appends_and_regenerates_slug() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        let before = app.store.all().len();

        let mut form = AdminForm::create();
        form.draft.title = "Hydropower Exports Hit New Peak!".to_string();
        form.draft.content = "Body text.".to_string();
        form.tags_input = "energy, trade,, ".to_string();
        app.admin.form = Some(form);
        app.admin_save();

        assert_eq!(app.store.all().len(), before + 1);
        let saved = app
            .store
            .by_slug("hydropower-exports-hit-new-peak")
            .unwrap();
        assert_eq!(saved.tags, ["energy", "trade"]);
        assert!(app.admin.form.is_none());
    }

    #[tokio::test]
    async fn test_admin_delete_missing_is_noop() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        let before: Vec<String> = app.store.all().iter().map(|a| a.id.clone()).collect();

        app.admin_delete("zzzzzzz");
        let after: Vec<String> = app.store.all().iter().map(|a| a.id.clone()).collect();
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_admin_delete_refreshes_open_article_page() {
        let dir = TempDir::new().unwrap();
        let mut app = test_app(&dir);
        let slug = app.store.all()[0].slug.clone();
        let id = app.store.all()[0].id.clone();
        app.navigate(format!("/article/{}", slug));
        assert!(matches!(app.page, Page::Article(_)));

        app.admin_delete(&id);
        assert_eq!(app.page, Page::NotFound);
    }

    #[tokio::test]
    async fn test_auth_field_cycle_respects_mode() {
        assert_eq!(
            AuthField::Password.next(AuthMode::Login),
            AuthField::Email
        );
        assert_eq!(
            AuthField::Password.next(AuthMode::Register),
            AuthField::Name
        );
    }

    #[tokio::test]
    async fn test_auth_modal_toggle_mode_moves_focus_off_name() {
        let mut modal = AuthModalState::new(AuthMode::Register);
        assert_eq!(modal.field, AuthField::Name);
        modal.toggle_mode();
        assert_eq!(modal.mode, AuthMode::Login);
        assert_eq!(modal.field, AuthField::Email);
    }
}
