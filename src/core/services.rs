use crate::core::{ClassifyError, DataProviderError, NewsFetchError};
use crate::esg::EsgScore;
use crate::history::{PriceSeries, PriceWindow};
use crate::news::Article;
use crate::sentiment::SentimentResult;

/// Boxed future returned by the provider traits.
pub type ServiceFuture<'a, T> =
    std::pin::Pin<Box<dyn std::future::Future<Output = T> + Send + 'a>>;

/// Source of static ESG sub-scores.
///
/// Implemented by [`PulseClient`](crate::PulseClient) over Yahoo's `esgScores` module.
pub trait EsgProvider: Send + Sync {
    /// Fetches the ESG scores for `symbol`.
    ///
    /// `Ok(None)` means the provider has no sustainability data for the symbol; it is
    /// never represented as an all-zero record.
    fn esg<'a>(
        &'a self,
        symbol: &'a str,
    ) -> ServiceFuture<'a, Result<Option<EsgScore>, DataProviderError>>;
}

/// Source of daily close prices.
pub trait PriceProvider: Send + Sync {
    /// Fetches the daily closes for `symbol` inside `window` (both ends inclusive),
    /// ordered by date. An unknown symbol may yield an empty series.
    fn closes<'a>(
        &'a self,
        symbol: &'a str,
        window: PriceWindow,
    ) -> ServiceFuture<'a, Result<PriceSeries, DataProviderError>>;
}

/// Resolves a symbol to the company's display name.
pub trait CompanyDirectory: Send + Sync {
    /// Returns the display name for `symbol`.
    fn company_name<'a>(
        &'a self,
        symbol: &'a str,
    ) -> ServiceFuture<'a, Result<String, DataProviderError>>;
}

/// Source of recent news articles.
pub trait NewsSource: Send + Sync {
    /// Returns at most `max_results` articles matching `query`, in provider order.
    fn fetch<'a>(
        &'a self,
        query: &'a str,
        max_results: u32,
    ) -> ServiceFuture<'a, Result<Vec<Article>, NewsFetchError>>;
}

/// A loaded text-classification model.
pub trait SentimentClassifier: Send + Sync {
    /// Classifies `texts` in one batch.
    ///
    /// Returns exactly one result per input, in input order. An empty batch returns an
    /// empty vector without touching the model.
    fn classify<'a>(
        &'a self,
        texts: &'a [String],
    ) -> ServiceFuture<'a, Result<Vec<SentimentResult>, ClassifyError>>;
}
