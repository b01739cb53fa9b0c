mod api;
mod model;
mod wire;

pub use model::EsgScore;

use crate::core::{DataProviderError, EsgProvider, PulseClient, PulseError, ServiceFuture};

/// A builder for fetching ESG (Environmental, Social, and Governance) scores for a specific symbol.
pub struct EsgBuilder<'a> {
    client: &'a PulseClient,
    symbol: String,
}

impl<'a> EsgBuilder<'a> {
    /// Creates a new `EsgBuilder` for a given symbol.
    pub fn new(client: &'a PulseClient, symbol: impl Into<String>) -> Self {
        Self {
            client,
            symbol: symbol.into(),
        }
    }

    /// Fetches the ESG scores for the symbol.
    ///
    /// `Ok(None)` means Yahoo has no sustainability data for the symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if authentication, the request, or decoding fails, or if Yahoo
    /// reports an error for the symbol.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn fetch(self) -> Result<Option<EsgScore>, PulseError> {
        api::fetch_esg_score(self.client, &self.symbol).await
    }
}

impl EsgProvider for PulseClient {
    fn esg<'a>(
        &'a self,
        symbol: &'a str,
    ) -> ServiceFuture<'a, Result<Option<EsgScore>, DataProviderError>> {
        Box::pin(async move {
            EsgBuilder::new(self, symbol)
                .fetch()
                .await
                .map_err(|e| DataProviderError::new("esg", symbol, e))
        })
    }
}
