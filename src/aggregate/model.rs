use serde::Serialize;

use crate::core::Diagnostic;
use crate::news::Article;
use crate::sentiment::{SentimentLabel, SentimentResult};

/// One classified headline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsSentimentRow {
    /// Publish timestamp as sent by the news provider.
    pub date: String,
    /// Publishing outlet.
    pub source: String,
    /// The headline that was classified.
    pub headline: String,
    /// Normalized sentiment label.
    pub label: SentimentLabel,
    /// Confidence of `label`.
    pub score: f64,
}

impl NewsSentimentRow {
    /// Joins an article with its classification.
    #[must_use]
    pub fn new(article: Article, result: SentimentResult) -> Self {
        Self {
            date: article.published_at,
            source: article.source,
            headline: article.title,
            label: result.label,
            score: result.score,
        }
    }
}

/// Classified headlines in the order the news source returned them.
pub type NewsSentimentTable = Vec<NewsSentimentRow>;

/// Output of [`SentimentAggregator::aggregate`](crate::SentimentAggregator::aggregate).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsSentiment {
    /// One row per fetched article.
    pub table: NewsSentimentTable,
    /// Arithmetic mean of the row scores; `0.0` when the table is empty.
    ///
    /// The scores are top-label confidences, so this is the average confidence of the
    /// classifier across headlines, not a signed bullish/bearish polarity.
    pub average: f64,
    /// Set when the result was degraded to empty because something failed.
    pub warning: Option<Diagnostic>,
}

impl NewsSentiment {
    /// An empty table with a zero average and no warning.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            table: Vec::new(),
            average: 0.0,
            warning: None,
        }
    }

    /// An empty table with a zero average, carrying `warning`.
    #[must_use]
    pub const fn degraded(warning: Diagnostic) -> Self {
        Self {
            table: Vec::new(),
            average: 0.0,
            warning: Some(warning),
        }
    }

    /// Builds the result for a table, computing its average.
    #[must_use]
    pub fn from_table(table: NewsSentimentTable) -> Self {
        let average = mean_score(&table);
        Self {
            table,
            average,
            warning: None,
        }
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// Mean of the row scores, `0.0` for an empty table.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mean_score(table: &[NewsSentimentRow]) -> f64 {
    if table.is_empty() {
        return 0.0;
    }
    table.iter().map(|r| r.score).sum::<f64>() / table.len() as f64
}
