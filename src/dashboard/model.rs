use serde::Serialize;

use crate::aggregate::NewsSentiment;
use crate::core::Diagnostic;
use crate::esg::EsgScore;
use crate::history::{PriceSeries, PriceWindow};

/// Everything one dashboard render hands to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    /// Normalized ticker symbol.
    pub ticker: String,
    /// Display name, or the ticker when the lookup failed.
    pub company_name: String,
    /// The price window that was requested.
    pub window: PriceWindow,
    /// ESG sub-scores; `None` means "no ESG data", distinct from any scores.
    pub esg: Option<EsgScore>,
    /// Daily closes inside `window`.
    pub prices: PriceSeries,
    /// News sentiment; `None` when news analysis is switched off.
    pub news: Option<NewsSentiment>,
    /// Warnings for every part that was degraded.
    pub diagnostics: Vec<Diagnostic>,
}

impl DashboardSnapshot {
    /// The average headline confidence, `0.0` when news is off or empty.
    #[must_use]
    pub fn average_sentiment(&self) -> f64 {
        self.news.as_ref().map_or(0.0, |n| n.average)
    }
}
