//! One dashboard render: ESG scores, price series and news sentiment for a ticker.
//!
//! Provider calls run one after the other. Every failure is converted into the matching
//! empty or absent value plus a [`Diagnostic`], so a render always produces a snapshot.

mod model;

pub use model::DashboardSnapshot;

use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use crate::aggregate::SentimentAggregator;
use crate::core::config::clamp_lookback;
use crate::core::{
    CompanyDirectory, Config, Diagnostic, DiagnosticKind, EsgProvider, NewsSource,
    PriceProvider, PulseClient, SentimentClassifier,
};
use crate::history::PriceWindow;
use crate::news::NewsApiSource;
use crate::sentiment::ModelCache;
use crate::ticker::normalize_symbol;

enum ClassifierSource {
    /// Load through a model cache on first use.
    Hub {
        client: PulseClient,
        cache: &'static ModelCache,
    },
    /// A classifier supplied by the caller.
    Provided(Arc<dyn SentimentClassifier>),
}

/// Assembles a [`DashboardSnapshot`] from the configured providers.
pub struct Dashboard {
    config: Config,
    esg: Arc<dyn EsgProvider>,
    prices: Arc<dyn PriceProvider>,
    companies: Arc<dyn CompanyDirectory>,
    news: Arc<dyn NewsSource>,
    classifier: ClassifierSource,
}

impl Dashboard {
    /// A dashboard backed by Yahoo (ESG, prices, names), NewsAPI and the process-wide
    /// sentiment model cache.
    #[must_use]
    pub fn new(client: &PulseClient, config: Config) -> Self {
        let yahoo = Arc::new(client.clone());
        Self {
            news: Arc::new(NewsApiSource::from_config(client, &config)),
            config,
            esg: yahoo.clone(),
            prices: yahoo.clone(),
            companies: yahoo,
            classifier: ClassifierSource::Hub {
                client: client.clone(),
                cache: ModelCache::global(),
            },
        }
    }

    /// Replaces the ESG provider.
    #[must_use]
    pub fn with_esg_provider(mut self, provider: Arc<dyn EsgProvider>) -> Self {
        self.esg = provider;
        self
    }

    /// Replaces the price provider.
    #[must_use]
    pub fn with_price_provider(mut self, provider: Arc<dyn PriceProvider>) -> Self {
        self.prices = provider;
        self
    }

    /// Replaces the company-name lookup.
    #[must_use]
    pub fn with_company_directory(mut self, directory: Arc<dyn CompanyDirectory>) -> Self {
        self.companies = directory;
        self
    }

    /// Replaces the news source.
    #[must_use]
    pub fn with_news_source(mut self, news: Arc<dyn NewsSource>) -> Self {
        self.news = news;
        self
    }

    /// Uses `classifier` instead of loading a model from the hub.
    #[must_use]
    pub fn with_classifier(mut self, classifier: Arc<dyn SentimentClassifier>) -> Self {
        self.classifier = ClassifierSource::Provided(classifier);
        self
    }

    /// Loads the hub model through `cache` instead of the process-wide one.
    #[must_use]
    pub fn with_model_cache(mut self, client: &PulseClient, cache: &'static ModelCache) -> Self {
        self.classifier = ClassifierSource::Hub {
            client: client.clone(),
            cache,
        };
        self
    }

    /// The configuration this dashboard runs with.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Renders the dashboard for `ticker_input` over the trailing `lookback_days`,
    /// ending today (UTC).
    pub async fn render(&self, ticker_input: &str, lookback_days: u32) -> DashboardSnapshot {
        self.render_on(ticker_input, lookback_days, Utc::now().date_naive())
            .await
    }

    /// Renders the dashboard with `today` as the last day of the price window.
    ///
    /// The lookback is clamped to `[30, 730]` days.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub async fn render_on(
        &self,
        ticker_input: &str,
        lookback_days: u32,
        today: NaiveDate,
    ) -> DashboardSnapshot {
        let ticker = normalize_symbol(ticker_input);
        let window = PriceWindow::trailing(clamp_lookback(lookback_days), today);
        let mut diagnostics = Vec::new();

        let classifier = if self.config.news_enabled {
            self.classifier(&mut diagnostics).await
        } else {
            None
        };

        let esg = self
            .esg
            .esg(&ticker)
            .await
            .unwrap_or_else(|e| degrade(&mut diagnostics, DiagnosticKind::Esg, &e, None));

        let prices = self
            .prices
            .closes(&ticker, window)
            .await
            .unwrap_or_else(|e| degrade(&mut diagnostics, DiagnosticKind::Prices, &e, Vec::new()));

        let company_name = self
            .companies
            .company_name(&ticker)
            .await
            .unwrap_or_else(|e| {
                degrade(&mut diagnostics, DiagnosticKind::Company, &e, ticker.clone())
            });

        let news = if self.config.news_enabled {
            let result = SentimentAggregator::new(self.news.as_ref())
                .aggregate(
                    &ticker,
                    &company_name,
                    classifier.as_deref(),
                    self.config.max_articles,
                )
                .await;
            // A model failure was already reported when loading.
            if let Some(w) = result.warning.as_ref()
                && w.kind != DiagnosticKind::Model
            {
                diagnostics.push(w.clone());
            }
            Some(result)
        } else {
            None
        };

        DashboardSnapshot {
            ticker,
            company_name,
            window,
            esg,
            prices,
            news,
            diagnostics,
        }
    }

    async fn classifier(
        &self,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Option<Arc<dyn SentimentClassifier>> {
        match &self.classifier {
            ClassifierSource::Provided(c) => Some(c.clone()),
            ClassifierSource::Hub { client, cache } => {
                match cache.get_or_load(client, &self.config).await {
                    Ok(model) => Some(model as Arc<dyn SentimentClassifier>),
                    Err(e) => degrade(diagnostics, DiagnosticKind::Model, &e, None),
                }
            }
        }
    }
}

fn degrade<T>(
    diagnostics: &mut Vec<Diagnostic>,
    kind: DiagnosticKind,
    error: &dyn std::error::Error,
    fallback: T,
) -> T {
    #[cfg(feature = "tracing")]
    tracing::warn!(kind = kind.as_str(), error = %error, "provider failure degraded");
    diagnostics.push(Diagnostic::new(kind, error));
    fallback
}
