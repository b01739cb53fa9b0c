mod api;
mod model;
mod wire;

pub use model::{PricePoint, PriceSeries, PriceWindow};

use crate::core::{DataProviderError, PriceProvider, PulseClient, PulseError, ServiceFuture};

/// A builder for fetching daily close prices over a [`PriceWindow`].
pub struct HistoryBuilder<'a> {
    client: &'a PulseClient,
    symbol: String,
    window: PriceWindow,
}

impl<'a> HistoryBuilder<'a> {
    /// Creates a builder for `symbol` covering the trailing year.
    pub fn new(client: &'a PulseClient, symbol: impl Into<String>) -> Self {
        Self {
            client,
            symbol: symbol.into(),
            window: PriceWindow::trailing_from_today(crate::core::config::DEFAULT_DAYS),
        }
    }

    /// Sets an explicit window.
    #[must_use]
    pub const fn window(mut self, window: PriceWindow) -> Self {
        self.window = window;
        self
    }

    /// Sets the window to the trailing `days` days ending today.
    #[must_use]
    pub fn lookback_days(mut self, days: u32) -> Self {
        self.window = PriceWindow::trailing_from_today(days);
        self
    }

    /// Fetches the daily closes, ordered by date.
    ///
    /// # Errors
    ///
    /// Returns an error for an inverted window, a failed request, an unexpected HTTP
    /// status, or a malformed response. A symbol Yahoo does not know yields an empty
    /// series, not an error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn fetch(self) -> Result<PriceSeries, PulseError> {
        api::fetch_closes(self.client, &self.symbol, self.window).await
    }
}

impl PriceProvider for PulseClient {
    fn closes<'a>(
        &'a self,
        symbol: &'a str,
        window: PriceWindow,
    ) -> ServiceFuture<'a, Result<PriceSeries, DataProviderError>> {
        Box::pin(async move {
            HistoryBuilder::new(self, symbol)
                .window(window)
                .fetch()
                .await
                .map_err(|e| DataProviderError::new("prices", symbol, e))
        })
    }
}
