//! Web search shortcut.
//!
//! Turns the search box's query into a search-engine URL and hands it to the
//! platform opener. The URL construction is the testable part; the launch is
//! a best-effort shell-out that never fails the application.

use std::process::Command;

use reqwest::Url;

const SEARCH_ENDPOINT: &str = "https://www.google.com/search";

/// Build the search URL for `query`, percent-encoded.
///
/// Returns `None` for empty or whitespace-only queries, which are not
/// submitted.
pub fn search_url(query: &str) -> Option<String> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    Url::parse_with_params(SEARCH_ENDPOINT, [("q", query)])
        .ok()
        .map(String::from)
}

/// Launch `url` in the default browser, best-effort.
///
/// Returns false when the opener could not be spawned; the caller reports
/// that on the status line. Nothing here is ever fatal.
pub fn open_in_browser(url: &str) -> bool {
    #[cfg(target_os = "macos")]
    let mut command = {
        let mut c = Command::new("open");
        c.arg(url);
        c
    };
    #[cfg(target_os = "windows")]
    let mut command = {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", "", url]);
        c
    };
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let mut command = {
        let mut c = Command::new("xdg-open");
        c.arg(url);
        c
    };

    match command.spawn() {
        Ok(_) => true,
        Err(err) => {
            tracing::warn!(error = %err, url, "could not launch browser");
            false
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
