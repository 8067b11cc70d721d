//! Remote data sources and the fallback-aware load cycle.
//!
//! Every networked widget goes through the same lifecycle: fetch a remote
//! JSON resource, normalize it into an internal shape, and — on *any*
//! failure — degrade to a locally stored fallback. This module defines that
//! contract ([`RemoteSource`] + [`load`]) and the [`FetchState`] value the
//! rest of the application consumes. Concrete sources live in sub-modules.
//!
//! ## For contributors — adding a new source
//!
//! 1. Create a new file in this directory (e.g. `stocks.rs`).
//! 2. Define a struct holding the endpoint config, a serde payload type, and
//!    a pure `parse_payload` function so tests never touch the network.
//! 3. Implement [`RemoteSource`] for the struct and pick a [`Fallback`]
//!    policy: substitute plausible local data, or declare the widget
//!    unavailable.
//! 4. Add `mod stocks;` below, re-export, and wire a worker in `poll.rs`.

mod news;
mod quote;
mod weather;

pub use news::{Article, Category, NewsSource};
pub use quote::{Quote, QuoteSource};
pub use weather::{CurrentWeather, WeatherSource};

use anyhow::Result;

/// Lifecycle state of one remote load, as seen by the UI.
///
/// `data` is never partially populated: it is either absent or a fully
/// normalized value. The whole struct is replaced on every settlement.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    /// The normalized value, from the remote source or from fallback.
    pub data: Option<T>,
    /// True while a load is in flight for this widget.
    pub loading: bool,
    /// Short human-readable note when `data` is degraded (or absent).
    pub error_note: Option<&'static str>,
}

impl<T> FetchState<T> {
    /// Initial state: a load has been issued but nothing has settled yet.
    pub fn loading() -> Self {
        Self {
            data: None,
            loading: true,
            error_note: None,
        }
    }

    /// Mark this state as having a new load in flight, keeping current data.
    pub fn begin(&mut self) {
        self.loading = true;
    }
}

/// What a source supplies when its fetch fails.
#[derive(Debug, Clone, PartialEq)]
pub enum Fallback<T> {
    /// Substitute locally stored data and tag it with a degraded-mode note.
    Substitute(T, &'static str),
    /// No plausible substitute exists; the widget shows the note instead of
    /// a body.
    Unavailable(&'static str),
}

/// A remote JSON resource that can be fetched, normalized, and degraded.
///
/// Workers call [`load`] on a background thread, so implementations must be
/// [`Send`]. `fetch` performs the HTTP round-trip *and* the normalization:
/// a response that arrives but does not match the expected shape is an error
/// exactly like a transport failure. The caller never learns which it was.
pub trait RemoteSource: Send {
    /// The normalized value this source produces.
    type Output;

    /// Label used in log events and status messages.
    fn name(&self) -> &str;

    /// Fetch the resource and normalize it.
    fn fetch(&self) -> Result<Self::Output>;

    /// Local stand-in used when [`fetch`](RemoteSource::fetch) fails.
    fn fallback(&self) -> Fallback<Self::Output>;
}

/// Run one load cycle for `source`.
///
/// Exactly one network call per invocation: no retry, no backoff, no
/// deduplication. On failure the source's fallback policy decides whether
/// the widget gets substituted data or an unavailable notice. The returned
/// state always has `loading == false`.
pub fn load<S: RemoteSource>(source: &S) -> FetchState<S::Output> {
    match source.fetch() {
        Ok(value) => FetchState {
            data: Some(value),
            loading: false,
            error_note: None,
        },
        Err(err) => {
            tracing::warn!(source = source.name(), error = %err, "fetch failed, using fallback");
            match source.fallback() {
                Fallback::Substitute(value, note) => FetchState {
                    data: Some(value),
                    loading: false,
                    error_note: Some(note),
                },
                Fallback::Unavailable(note) => FetchState {
                    data: None,
                    loading: false,
                    error_note: Some(note),
                },
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    /// A source whose outcome is scripted by the test.
    struct StubSource {
        result: Option<u32>,
        fallback: Fallback<u32>,
    }

    impl RemoteSource for StubSource {
        type Output = u32;

        fn name(&self) -> &str {
            "stub"
        }

        fn fetch(&self) -> Result<u32> {
            self.result.ok_or_else(|| anyhow!("scripted failure"))
        }

        fn fallback(&self) -> Fallback<u32> {
            self.fallback.clone()
        }
    }

    #[test]
    fn success_carries_normalized_value_and_no_note() {
        let src = StubSource {
            result: Some(7),
            fallback: Fallback::Substitute(0, "degraded"),
        };
        let state = load(&src);
        assert_eq!(state.data, Some(7));
        assert!(!state.loading);
        assert!(state.error_note.is_none());
    }

    #[test]
    fn failure_substitutes_fallback_and_sets_note() {
        let src = StubSource {
            result: None,
            fallback: Fallback::Substitute(42, "degraded"),
        };
        let state = load(&src);
        assert_eq!(state.data, Some(42));
        assert!(!state.loading);
        assert_eq!(state.error_note, Some("degraded"));
    }

    #[test]
    fn failure_without_substitute_leaves_data_empty() {
        let src = StubSource {
            result: None,
            fallback: Fallback::Unavailable("unavailable"),
        };
        let state = load(&src);
        assert_eq!(state.data, None);
        assert!(!state.loading);
        assert_eq!(state.error_note, Some("unavailable"));
    }

    #[test]
    fn load_always_clears_loading() {
        let ok = StubSource {
            result: Some(1),
            fallback: Fallback::Unavailable("n/a"),
        };
        let err = StubSource {
            result: None,
            fallback: Fallback::Unavailable("n/a"),
        };
        assert!(!load(&ok).loading);
        assert!(!load(&err).loading);
    }

    #[test]
    fn begin_keeps_existing_data() {
        let mut state = FetchState {
            data: Some(5),
            loading: false,
            error_note: Some("old note"),
        };
        state.begin();
        assert!(state.loading);
        assert_eq!(state.data, Some(5));
    }
}
