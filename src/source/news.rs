//! Category-parameterized headlines source.
//!
//! The provider is an inshorts-style endpoint: `GET /news?category=…`
//! returning `{"data": [ … ]}`. The "All" tab is an alias for the provider's
//! `national` feed — there is no merged all-categories feed upstream.
//!
//! On failure the widget substitutes a fixed five-article sample list. The
//! sample is used verbatim for every category; it is not category-filtered.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{Fallback, RemoteSource};

/// Note shown in the header when the sample list is in use.
const SAMPLE_NOTE: &str = "Using sample news due to API limitations";

/// Image shown when an article has none.
const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/80?text=News";

/// Source name used when an article does not carry an author.
const DEFAULT_SOURCE: &str = "Inshorts";

/// News category tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    All,
    National,
    Business,
    Sports,
    World,
    Politics,
    Technology,
    Startup,
    Entertainment,
    Science,
    Automobile,
}

impl Category {
    /// All categories in tab order.
    pub const ALL: [Category; 11] = [
        Category::All,
        Category::National,
        Category::Business,
        Category::Sports,
        Category::World,
        Category::Politics,
        Category::Technology,
        Category::Startup,
        Category::Entertainment,
        Category::Science,
        Category::Automobile,
    ];

    /// Tab label shown in the UI.
    pub fn label(self) -> &'static str {
        match self {
            Category::All => "All",
            Category::National => "National",
            Category::Business => "Business",
            Category::Sports => "Sports",
            Category::World => "World",
            Category::Politics => "Politics",
            Category::Technology => "Technology",
            Category::Startup => "Startup",
            Category::Entertainment => "Entertainment",
            Category::Science => "Science",
            Category::Automobile => "Automobile",
        }
    }

    /// Query value sent to the provider. "All" is a fixed alias for the
    /// national feed, translated here at the fetch boundary.
    pub fn query_value(self) -> &'static str {
        match self {
            Category::All | Category::National => "national",
            Category::Business => "business",
            Category::Sports => "sports",
            Category::World => "world",
            Category::Politics => "politics",
            Category::Technology => "technology",
            Category::Startup => "startup",
            Category::Entertainment => "entertainment",
            Category::Science => "science",
            Category::Automobile => "automobile",
        }
    }

    /// The next tab to the right, wrapping around.
    pub fn next(self) -> Category {
        let i = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// The previous tab to the left, wrapping around.
    pub fn previous(self) -> Category {
        let i = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// A normalized headline. List order preserves provider/fallback order.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub title: String,
    pub description: String,
    /// Thumbnail reference; not rendered in the terminal UI.
    #[allow(dead_code)]
    pub image: String,
    pub source_name: String,
    pub published: DateTime<Utc>,
}

/// Wire shape of the provider payload.
#[derive(Debug, Deserialize)]
struct NewsPayload {
    data: Vec<RawArticle>,
}

#[derive(Debug, Deserialize)]
struct RawArticle {
    title: Option<String>,
    content: Option<String>,
    #[serde(rename = "imageUrl")]
    image_url: Option<String>,
    author: Option<String>,
    date: Option<String>,
}

/// A headlines data source for one selected category.
pub struct NewsSource {
    /// Base endpoint, without the query string.
    pub base_url: String,
    /// Category used for the next fetch.
    pub category: Category,
}

impl NewsSource {
    pub fn new(base_url: impl Into<String>, category: Category) -> Self {
        Self {
            base_url: base_url.into(),
            category,
        }
    }

    /// Full request URL for the current category.
    pub fn request_url(&self) -> String {
        format!("{}?category={}", self.base_url, self.category.query_value())
    }

    /// Parse a provider payload into normalized articles. Pure, for tests;
    /// `now` stamps articles whose date is missing or unparseable.
    pub fn parse_payload(body: &str, now: DateTime<Utc>) -> Result<Vec<Article>> {
        let payload: NewsPayload =
            serde_json::from_str(body).context("news payload missing data list")?;
        Ok(payload
            .data
            .into_iter()
            .map(|raw| Article {
                title: raw.title.unwrap_or_default(),
                description: raw.content.unwrap_or_default(),
                image: raw.image_url.unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
                source_name: raw.author.unwrap_or_else(|| DEFAULT_SOURCE.to_string()),
                published: raw
                    .date
                    .as_deref()
                    .and_then(parse_article_date)
                    .unwrap_or(now),
            })
            .collect())
    }

    /// The fixed sample list, stamped with `now`.
    pub fn sample_articles(now: DateTime<Utc>) -> Vec<Article> {
        const SAMPLES: [(&str, &str, &str, &str); 5] = [
            (
                "Scientists Make Breakthrough in Renewable Energy Storage",
                "A team of researchers has developed a new type of battery that could revolutionize how we store renewable energy, making it more efficient and affordable.",
                "https://images.unsplash.com/photo-1497435334941-8c899ee9e8e9?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=60",
                "Science Daily",
            ),
            (
                "Global Tech Conference Announces Virtual Format for 2025",
                "One of the world's largest technology conferences has announced it will maintain a virtual component in 2025, citing increased accessibility and environmental benefits.",
                "https://images.unsplash.com/photo-1540575467063-178a50c2df87?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=60",
                "Tech Insider",
            ),
            (
                "New Study Shows Benefits of Four-Day Work Week",
                "Companies that switched to a four-day work week reported higher productivity, improved employee satisfaction, and reduced burnout according to a new comprehensive study.",
                "https://images.unsplash.com/photo-1454165804606-c3d57bc86b40?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=60",
                "Business Report",
            ),
            (
                "Major Streaming Services Announce Price Increases",
                "Several major streaming platforms have announced price increases for their subscription services, citing rising production costs and expanded content libraries.",
                "https://images.unsplash.com/photo-1522869635100-9f4c5e86aa37?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=60",
                "Entertainment Weekly",
            ),
            (
                "New AI Tool Helps Detect Early Signs of Climate Change",
                "Researchers have developed an AI system that can analyze satellite imagery to detect early warning signs of environmental changes related to climate change.",
                "https://images.unsplash.com/photo-1593697972672-b1c1902219e4?ixlib=rb-1.2.1&auto=format&fit=crop&w=500&q=60",
                "Environmental Science",
            ),
        ];

        SAMPLES
            .iter()
            .map(|(title, description, image, source)| Article {
                title: title.to_string(),
                description: description.to_string(),
                image: image.to_string(),
                source_name: source.to_string(),
                published: now,
            })
            .collect()
    }
}

/// Parse the provider's article date. The format has drifted over time, so
/// both RFC 3339 and RFC 2822 are accepted; anything else is a miss.
fn parse_article_date(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_rfc2822(raw))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

impl RemoteSource for NewsSource {
    type Output = Vec<Article>;

    fn name(&self) -> &str {
        "news"
    }

    fn fetch(&self) -> Result<Vec<Article>> {
        let body = reqwest::blocking::get(self.request_url())?
            .error_for_status()?
            .text()?;
        Self::parse_payload(&body, Utc::now())
    }

    fn fallback(&self) -> Fallback<Vec<Article>> {
        Fallback::Substitute(Self::sample_articles(Utc::now()), SAMPLE_NOTE)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
