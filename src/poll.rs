//! Background widget workers.
//!
//! Each networked widget gets its own thread with its own schedule: the
//! quote worker reloads on manual refresh requests, the weather worker on a
//! fixed timer, the news worker on category requests. All three report back
//! to the UI thread over one [`mpsc`] channel.
//!
//! Serializing a widget's fetches on its own thread means results settle in
//! the order they were requested — rapid category switching cannot leave a
//! stale response as the final state.
//!
//! Shutdown is by channel disconnection: dropping the [`PollHandle`] closes
//! every request channel, and each worker exits at its next receive. The
//! weather timer is a `recv_timeout`, so disconnection also cancels it.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

use crate::source::{
    load, Article, Category, CurrentWeather, FetchState, NewsSource, Quote, RemoteSource,
};

/// How often the weather worker re-fetches on its own.
pub const WEATHER_REFRESH: Duration = Duration::from_secs(30 * 60);

/// Messages sent from the workers to the UI thread.
pub enum PollMsg {
    Quote(FetchState<Quote>),
    Weather(FetchState<CurrentWeather>),
    /// News results carry the category they were fetched for so the UI can
    /// discard results for a category the user has already left.
    News {
        category: Category,
        state: FetchState<Vec<Article>>,
    },
}

/// A news-like source whose category can be switched between fetches.
pub trait CategorySource: RemoteSource<Output = Vec<Article>> {
    fn set_category(&mut self, category: Category);
}

impl CategorySource for NewsSource {
    fn set_category(&mut self, category: Category) {
        self.category = category;
    }
}

/// Requests the input layer can make of the workers.
///
/// A trait so input handling can be tested with a recording stub instead of
/// live worker threads.
pub trait Requests {
    /// Request a fresh quote. The result arrives as a [`PollMsg::Quote`]
    /// event.
    fn refresh_quote(&self);

    /// Request headlines for `category`. The result arrives as a
    /// [`PollMsg::News`] event tagged with this category.
    fn fetch_news(&self, category: Category);
}

/// Owner of the worker threads.
///
/// The main loop drains [`events`](PollHandle::events) every tick and calls
/// the [`Requests`] methods from input handling. Dropping the handle stops
/// all workers.
pub struct PollHandle {
    pub events: Receiver<PollMsg>,
    quote_tx: Sender<()>,
    news_tx: Sender<Category>,
    // Never sent on; dropping it wakes the weather worker out of its timer.
    _weather_tx: Sender<()>,
}

impl Requests for PollHandle {
    // Send failures mean the worker is gone, which only happens during
    // shutdown; the request is dropped on the floor.
    fn refresh_quote(&self) {
        let _ = self.quote_tx.send(());
    }

    fn fetch_news(&self, category: Category) {
        let _ = self.news_tx.send(category);
    }
}

/// Spawn all three workers. Each performs its mount-triggered load
/// immediately, so the UI sees data (or fallbacks) without any request.
pub fn spawn<Q, W, N>(quote: Q, weather: W, news: N, initial_category: Category) -> PollHandle
where
    Q: RemoteSource<Output = Quote> + 'static,
    W: RemoteSource<Output = CurrentWeather> + 'static,
    N: CategorySource + 'static,
{
    let (events_tx, events_rx) = mpsc::channel();
    let (quote_tx, quote_rx) = mpsc::channel();
    let (weather_tx, weather_rx) = mpsc::channel();
    let (news_tx, news_rx) = mpsc::channel();

    {
        let events = events_tx.clone();
        thread::spawn(move || run_quote_worker(quote, quote_rx, events));
    }
    {
        let events = events_tx.clone();
        thread::spawn(move || run_weather_worker(weather, weather_rx, events, WEATHER_REFRESH));
    }
    thread::spawn(move || run_news_worker(news, news_rx, events_tx, initial_category));

    PollHandle {
        events: events_rx,
        quote_tx,
        news_tx,
        _weather_tx: weather_tx,
    }
}

fn run_quote_worker<Q>(source: Q, requests: Receiver<()>, events: Sender<PollMsg>)
where
    Q: RemoteSource<Output = Quote>,
{
    if events.send(PollMsg::Quote(load(&source))).is_err() {
        return;
    }
    // One load per manual refresh; exits when the handle is dropped.
    while requests.recv().is_ok() {
        if events.send(PollMsg::Quote(load(&source))).is_err() {
            return;
        }
    }
}

fn run_weather_worker<W>(
    source: W,
    shutdown: Receiver<()>,
    events: Sender<PollMsg>,
    interval: Duration,
) where
    W: RemoteSource<Output = CurrentWeather>,
{
    loop {
        if events.send(PollMsg::Weather(load(&source))).is_err() {
            return;
        }
        match shutdown.recv_timeout(interval) {
            Err(RecvTimeoutError::Timeout) => continue,
            Ok(()) | Err(RecvTimeoutError::Disconnected) => return,
        }
    }
}

fn run_news_worker<N>(
    mut source: N,
    requests: Receiver<Category>,
    events: Sender<PollMsg>,
    initial: Category,
) where
    N: CategorySource,
{
    source.set_category(initial);
    let state = load(&source);
    if events.send(PollMsg::News { category: initial, state }).is_err() {
        return;
    }
    while let Ok(category) = requests.recv() {
        source.set_category(category);
        let state = load(&source);
        if events.send(PollMsg::News { category, state }).is_err() {
            return;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
