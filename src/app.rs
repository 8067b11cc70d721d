//! Application state.
//!
//! `App` owns everything the renderer reads: one [`FetchState`] per
//! networked widget, the news category and page, the search box, the theme
//! flag, and the status line. Workers never touch this struct — their
//! results arrive as [`PollMsg`] values and are applied on the UI thread.

use chrono::{DateTime, Utc};

use crate::poll::PollMsg;
use crate::source::{Article, Category, CurrentWeather, FetchState, Quote};

/// Articles shown per news page.
pub const PAGE_SIZE: usize = 10;

pub struct App {
    /// Instant used by the clock pane, refreshed every tick.
    pub now: DateTime<Utc>,
    pub quote: FetchState<Quote>,
    pub weather: FetchState<CurrentWeather>,
    pub news: FetchState<Vec<Article>>,
    /// Selected news tab. Results for any other category are stale.
    pub category: Category,
    /// Current news page, 1-based, clamped to `[1, total_pages]`.
    pub page: usize,
    /// Search box contents.
    pub search_query: String,
    /// True while keystrokes go to the search box.
    pub search_focused: bool,
    pub dark_mode: bool,
    /// Last event message, shown in the status bar.
    pub status: String,
    /// Whether the user has requested to quit.
    pub quit: bool,
}

impl App {
    pub fn new(dark_mode: bool) -> Self {
        Self {
            now: Utc::now(),
            quote: FetchState::loading(),
            weather: FetchState::loading(),
            news: FetchState::loading(),
            category: Category::All,
            page: 1,
            search_query: String::new(),
            search_focused: false,
            dark_mode,
            status: "Starting…".into(),
            quit: false,
        }
    }

    // -- poll events ---------------------------------------------------------

    /// Apply a settled worker result.
    ///
    /// News results are tagged with the category they were fetched for; a
    /// result for a category the user has already left is discarded so it
    /// cannot overwrite newer state.
    pub fn apply(&mut self, msg: PollMsg) {
        match msg {
            PollMsg::Quote(state) => {
                self.status = match state.error_note {
                    Some(note) => note.to_string(),
                    None => "Quote refreshed".to_string(),
                };
                self.quote = state;
            }
            PollMsg::Weather(state) => {
                self.status = match state.error_note {
                    Some(note) => note.to_string(),
                    None => "Weather updated".to_string(),
                };
                self.weather = state;
            }
            PollMsg::News { category, state } => {
                if category != self.category {
                    tracing::debug!(
                        fetched = category.label(),
                        selected = self.category.label(),
                        "discarding stale news result"
                    );
                    return;
                }
                self.status = match state.error_note {
                    Some(note) => note.to_string(),
                    None => {
                        let count = state.data.as_ref().map_or(0, Vec::len);
                        format!("Fetched {count} {} headlines", category.label())
                    }
                };
                self.news = state;
                self.page = self.page.min(self.total_pages());
            }
        }
    }

    // -- news pagination -----------------------------------------------------

    /// Number of pages for the current article list, never below 1.
    pub fn total_pages(&self) -> usize {
        let len = self.news.data.as_ref().map_or(0, Vec::len);
        len.div_ceil(PAGE_SIZE).max(1)
    }

    /// The slice of articles on the current page.
    pub fn current_articles(&self) -> &[Article] {
        let Some(articles) = self.news.data.as_deref() else {
            return &[];
        };
        let start = (self.page - 1) * PAGE_SIZE;
        let end = (start + PAGE_SIZE).min(articles.len());
        articles.get(start..end).unwrap_or(&[])
    }

    pub fn next_page(&mut self) {
        self.page = (self.page + 1).min(self.total_pages());
    }

    pub fn previous_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    // -- news category -------------------------------------------------------

    /// Switch tabs: resets to page 1 and marks the list as loading. The
    /// caller is responsible for issuing the fetch request.
    pub fn select_category(&mut self, category: Category) {
        self.category = category;
        self.page = 1;
        self.news.begin();
    }

    // -- quote ---------------------------------------------------------------

    /// Mark the quote as reloading. The caller issues the request.
    pub fn begin_quote_refresh(&mut self) {
        self.quote.begin();
        self.status = "Fetching a new quote…".to_string();
    }

    // -- search box ----------------------------------------------------------

    pub fn focus_search(&mut self) {
        self.search_focused = true;
    }

    pub fn blur_search(&mut self) {
        self.search_focused = false;
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search_query.push(c);
    }

    pub fn pop_search_char(&mut self) {
        self.search_query.pop();
    }

    // -- theme ---------------------------------------------------------------

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
