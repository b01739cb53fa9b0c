//! Runtime configuration, read once at startup and passed down explicitly.

use std::time::Duration;

/// Symbol shown when the user has not typed one.
pub const DEFAULT_TICKER: &str = "AAPL";
/// Default price lookback in days.
pub const DEFAULT_DAYS: u32 = 365;
/// Shortest lookback the dashboard accepts.
pub const MIN_DAYS: u32 = 30;
/// Longest lookback the dashboard accepts.
pub const MAX_DAYS: u32 = 730;
/// Pretrained sentiment model used when `PULSE_SENTIMENT_MODEL` is unset.
pub const DEFAULT_SENTIMENT_MODEL: &str = "finiteautomata/bertweet-base-sentiment-analysis";

const MAX_ARTICLES_CONSTRAINED: u32 = 10;
const MAX_ARTICLES_DEFAULT: u32 = 20;

/// Immutable configuration for one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// NewsAPI key (`NEWS_API_KEY`). Its absence surfaces as a news fetch error.
    pub news_api_key: Option<String>,
    /// Bearer token for the inference endpoint (`HF_TOKEN`).
    pub hf_token: Option<String>,
    /// Running in a resource-constrained deployment (`RENDER`).
    pub constrained: bool,
    /// Upper bound on fetched headlines (`PULSE_MAX_ARTICLES`).
    pub max_articles: u32,
    /// Hub id of the sentiment model (`PULSE_SENTIMENT_MODEL`).
    pub model_id: String,
    /// Overall HTTP timeout (`PULSE_HTTP_TIMEOUT_SECS`).
    pub http_timeout: Option<Duration>,
    /// Whether news analysis runs at all (`PULSE_NEWS`).
    pub news_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    /// Reads the configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Unparseable numeric values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let constrained = get("RENDER").is_some_and(|v| is_truthy(&v));
        let max_articles = get("PULSE_MAX_ARTICLES")
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(if constrained {
                MAX_ARTICLES_CONSTRAINED
            } else {
                MAX_ARTICLES_DEFAULT
            });

        Self {
            news_api_key: get("NEWS_API_KEY"),
            hf_token: get("HF_TOKEN"),
            constrained,
            max_articles,
            model_id: get("PULSE_SENTIMENT_MODEL")
                .unwrap_or_else(|| DEFAULT_SENTIMENT_MODEL.to_string()),
            http_timeout: get("PULSE_HTTP_TIMEOUT_SECS")
                .and_then(|v| v.parse::<u64>().ok())
                .map(Duration::from_secs),
            news_enabled: get("PULSE_NEWS").is_none_or(|v| is_truthy(&v)),
        }
    }
}

fn is_truthy(value: &str) -> bool {
    !matches!(
        value.to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

/// Clamps a requested lookback into `[MIN_DAYS, MAX_DAYS]`.
#[must_use]
pub fn clamp_lookback(days: u32) -> u32 {
    days.clamp(MIN_DAYS, MAX_DAYS)
}
