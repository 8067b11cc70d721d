//! Quote-of-the-moment source.
//!
//! The provider returns a one-element JSON array: `[{"q": "…", "a": "…"}]`.
//! When the provider is unreachable (rate limits are common on the free
//! tier) the widget silently substitutes one of five bundled quotes, tagged
//! with a degraded-mode note.

use anyhow::{bail, Context, Result};
use rand::Rng;
use serde::Deserialize;

use super::{Fallback, RemoteSource};

/// Note shown under the quote when the bundled set is in use.
const OFFLINE_NOTE: &str = "Using offline quotes";

/// Bundled quotes, substituted verbatim when the fetch fails.
const FALLBACK_QUOTES: [(&str, &str); 5] = [
    (
        "The only way to do great work is to love what you do.",
        "Steve Jobs",
    ),
    (
        "Life is what happens when you're busy making other plans.",
        "John Lennon",
    ),
    (
        "The future belongs to those who believe in the beauty of their dreams.",
        "Eleanor Roosevelt",
    ),
    (
        "Success is not final, failure is not fatal: It is the courage to continue that counts.",
        "Winston Churchill",
    ),
    (
        "The best time to plant a tree was 20 years ago. The second best time is now.",
        "Chinese Proverb",
    ),
];

/// A normalized quote. Both fields are always populated (empty string at
/// worst; `author` defaults to "Unknown").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub content: String,
    pub author: String,
}

/// Wire shape of one provider record.
#[derive(Debug, Deserialize)]
struct RawQuote {
    q: Option<String>,
    a: Option<String>,
}

/// A random-quote data source.
pub struct QuoteSource {
    /// Endpoint returning a one-element array with a random quote.
    pub url: String,
}

impl QuoteSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Parse a provider payload into a [`Quote`].
    ///
    /// Pure (no I/O) so tests can exercise normalization without a network.
    /// An empty array or a non-array payload is a shape failure.
    pub fn parse_payload(body: &str) -> Result<Quote> {
        let records: Vec<RawQuote> =
            serde_json::from_str(body).context("quote payload is not an array of records")?;
        let Some(first) = records.into_iter().next() else {
            bail!("quote payload is an empty array");
        };
        Ok(Quote {
            content: first.q.unwrap_or_default(),
            author: first.a.unwrap_or_else(|| "Unknown".to_string()),
        })
    }

    /// Pick one of the bundled quotes uniformly at random.
    pub fn offline_quote() -> Quote {
        let i = rand::thread_rng().gen_range(0..FALLBACK_QUOTES.len());
        let (content, author) = FALLBACK_QUOTES[i];
        Quote {
            content: content.to_string(),
            author: author.to_string(),
        }
    }
}

impl RemoteSource for QuoteSource {
    type Output = Quote;

    fn name(&self) -> &str {
        "quote"
    }

    fn fetch(&self) -> Result<Quote> {
        let body = reqwest::blocking::get(&self.url)?.error_for_status()?.text()?;
        Self::parse_payload(&body)
    }

    fn fallback(&self) -> Fallback<Quote> {
        Fallback::Substitute(Self::offline_quote(), OFFLINE_NOTE)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::load;

    #[test]
    fn parse_payload_normalizes_fields() {
        let quote = QuoteSource::parse_payload(r#"[{"q": "X", "a": "Y"}]"#).unwrap();
        assert_eq!(quote.content, "X");
        assert_eq!(quote.author, "Y");
    }

    #[test]
    fn parse_payload_is_idempotent_across_calls() {
        // Same payload, same normalization, regardless of prior state.
        for _ in 0..3 {
            let quote = QuoteSource::parse_payload(r#"[{"q": "X", "a": "Y"}]"#).unwrap();
            assert_eq!(quote, Quote {
                content: "X".to_string(),
                author: "Y".to_string(),
            });
        }
    }

    #[test]
    fn missing_author_defaults_to_unknown() {
        let quote = QuoteSource::parse_payload(r#"[{"q": "only text"}]"#).unwrap();
        assert_eq!(quote.author, "Unknown");
    }

    #[test]
    fn missing_text_defaults_to_empty() {
        let quote = QuoteSource::parse_payload(r#"[{"a": "Someone"}]"#).unwrap();
        assert_eq!(quote.content, "");
        assert_eq!(quote.author, "Someone");
    }

    #[test]
    fn empty_array_is_a_shape_failure() {
        assert!(QuoteSource::parse_payload("[]").is_err());
    }

    #[test]
    fn non_array_payload_is_a_shape_failure() {
        assert!(QuoteSource::parse_payload(r#"{"q": "X", "a": "Y"}"#).is_err());
    }

    #[test]
    fn offline_quote_is_drawn_from_the_bundled_set() {
        for _ in 0..20 {
            let quote = QuoteSource::offline_quote();
            assert!(FALLBACK_QUOTES
                .iter()
                .any(|(c, a)| quote.content == *c && quote.author == *a));
        }
    }

    #[test]
    fn transport_failure_substitutes_offline_quote_with_note() {
        // Nothing listens on this port; the fetch fails immediately.
        let src = QuoteSource::new("http://127.0.0.1:9/api/random");
        let state = load(&src);
        let quote = state.data.expect("fallback quote substituted");
        assert!(FALLBACK_QUOTES
            .iter()
            .any(|(c, a)| quote.content == *c && quote.author == *a));
        assert_eq!(state.error_note, Some(OFFLINE_NOTE));
        assert!(!state.loading);
    }
}
