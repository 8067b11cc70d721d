//! Keyboard input handling.
//!
//! Maps terminal key events to [`App`] mutations and worker requests. The
//! search box owns the keyboard while focused; everything else is a single
//! match arm per binding.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::app::App;
use crate::poll::Requests;
use crate::search;

/// Process a single key event.
///
/// Only reacts to key-press events (ignoring release / repeat) so that each
/// physical keypress triggers exactly one action.
pub fn handle_key_event(app: &mut App, requests: &impl Requests, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if app.search_focused {
        handle_search_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Char('r') => {
            app.begin_quote_refresh();
            requests.refresh_quote();
        }
        KeyCode::Tab => {
            app.select_category(app.category.next());
            requests.fetch_news(app.category);
        }
        KeyCode::BackTab => {
            app.select_category(app.category.previous());
            requests.fetch_news(app.category);
        }
        KeyCode::Right | KeyCode::Char('l') => app.next_page(),
        KeyCode::Left | KeyCode::Char('h') => app.previous_page(),
        KeyCode::Char('/') => app.focus_search(),
        KeyCode::Char('d') => app.toggle_dark_mode(),
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.blur_search(),
        KeyCode::Enter => {
            // Blank queries are not submitted; the box just loses focus.
            if let Some(url) = search::search_url(&app.search_query) {
                app.status = if search::open_in_browser(&url) {
                    format!("Opened {url}")
                } else {
                    format!("Search URL: {url}")
                };
            }
            app.blur_search();
        }
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Char(c) => app.push_search_char(c),
        _ => {}
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
