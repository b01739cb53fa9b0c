//! The news sentiment pipeline: fetch headlines, classify them in one batch, join and average.

mod model;

pub use model::{NewsSentiment, NewsSentimentRow, NewsSentimentTable, mean_score};

use crate::core::{
    ClassifyError, Diagnostic, DiagnosticKind, NewsFetchError, NewsSource, SentimentClassifier,
};
use crate::news::company_query;
use thiserror::Error;

#[derive(Debug, Error)]
enum PipelineError {
    #[error("news fetch failed: {0}")]
    Fetch(#[from] NewsFetchError),
    #[error("sentiment classification failed: {0}")]
    Classify(#[from] ClassifyError),
}

/// Turns a ticker and company name into a [`NewsSentiment`].
pub struct SentimentAggregator<'a> {
    news: &'a dyn NewsSource,
}

impl<'a> SentimentAggregator<'a> {
    /// Creates an aggregator pulling articles from `news`.
    pub fn new(news: &'a dyn NewsSource) -> Self {
        Self { news }
    }

    /// Fetches up to `max_articles` headlines about the company, classifies them with
    /// one `classify` call and averages the scores.
    ///
    /// Never fails: a missing classifier, a news failure, or a classifier failure all
    /// yield an empty table with a zero average and a [`Diagnostic`] in
    /// [`NewsSentiment::warning`]. Finding no articles is a normal empty result.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, classifier)))]
    pub async fn aggregate(
        &self,
        ticker: &str,
        company_name: &str,
        classifier: Option<&dyn SentimentClassifier>,
        max_articles: u32,
    ) -> NewsSentiment {
        let Some(classifier) = classifier else {
            #[cfg(feature = "tracing")]
            tracing::warn!(ticker = %ticker, "sentiment model unavailable; skipping news analysis");
            return NewsSentiment::degraded(Diagnostic::new(
                DiagnosticKind::Model,
                "sentiment model unavailable; news analysis skipped",
            ));
        };

        match self.run(ticker, company_name, classifier, max_articles).await {
            Ok(result) => result,
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(ticker = %ticker, error = %e, "news sentiment degraded to empty");
                NewsSentiment::degraded(Diagnostic::new(DiagnosticKind::News, e))
            }
        }
    }

    async fn run(
        &self,
        ticker: &str,
        company_name: &str,
        classifier: &dyn SentimentClassifier,
        max_articles: u32,
    ) -> Result<NewsSentiment, PipelineError> {
        let query = company_query(company_name, ticker);
        let articles = self.news.fetch(&query, max_articles).await?;
        if articles.is_empty() {
            return Ok(NewsSentiment::empty());
        }

        let headlines: Vec<String> = articles.iter().map(|a| a.title.clone()).collect();
        let results = classifier.classify(&headlines).await?;
        if results.len() != articles.len() {
            return Err(ClassifyError::LengthMismatch {
                expected: articles.len(),
                got: results.len(),
            }
            .into());
        }

        let table: NewsSentimentTable = articles
            .into_iter()
            .zip(results)
            .map(|(article, result)| NewsSentimentRow::new(article, result))
            .collect();

        Ok(NewsSentiment::from_table(table))
    }
}
