//! esg-pulse: ESG scores, price history and news-headline sentiment for a ticker.
//!
//! The crate gathers three independent signals about a listed company into one
//! [`DashboardSnapshot`]:
//!
//! - ESG sub-scores from Yahoo Finance ([`EsgScore`], absent when Yahoo has none),
//! - daily closes over a lookback window ([`PriceSeries`]),
//! - a news sentiment table built by classifying recent headlines with a pretrained
//!   model ([`SentimentAggregator`]).
//!
//! External failures never abort a render: each one degrades to an empty or absent
//! value and a [`Diagnostic`].
//!
//! ```no_run
//! # use esg_pulse::{Config, Dashboard, PulseClient};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env();
//! let client = PulseClient::builder().build()?;
//! let snapshot = Dashboard::new(&client, config).render("aapl", 365).await;
//! println!("{}: avg headline confidence {:.2}", snapshot.company_name, snapshot.average_sentiment());
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
pub mod core;
pub mod dashboard;
pub mod esg;
pub mod history;
pub mod news;
pub mod profile;
pub mod sentiment;
pub mod ticker;

pub use aggregate::{NewsSentiment, NewsSentimentRow, NewsSentimentTable, SentimentAggregator};
pub use crate::core::{
    ClassifyError, CompanyDirectory, Config, DataProviderError, Diagnostic, DiagnosticKind,
    EsgProvider, ModelLoadError, NewsFetchError, NewsSource, PriceProvider, PulseClient,
    PulseClientBuilder, PulseError, SentimentClassifier, ServiceFuture,
};
pub use dashboard::{Dashboard, DashboardSnapshot};
pub use esg::{EsgBuilder, EsgScore};
pub use history::{HistoryBuilder, PricePoint, PriceSeries, PriceWindow};
pub use news::{Article, NewsApiSource};
pub use sentiment::{HfSentimentModel, LabelMap, ModelCache, SentimentLabel, SentimentResult};
pub use ticker::Ticker;
