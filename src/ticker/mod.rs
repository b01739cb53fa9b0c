use crate::core::{PulseClient, PulseError};
use crate::esg::{EsgBuilder, EsgScore};
use crate::history::{HistoryBuilder, PriceSeries, PriceWindow};

/// Normalizes free-text ticker input: surrounding whitespace is trimmed and the
/// symbol is uppercased. No further validation happens; providers reject unknown
/// symbols on their own.
#[must_use]
pub fn normalize_symbol(input: &str) -> String {
    input.trim().to_uppercase()
}

/// A high-level interface for a single ticker symbol.
///
/// A `Ticker` is created with a [`PulseClient`] and a symbol, which is normalized on
/// construction.
///
/// # Example
///
/// ```no_run
/// # use esg_pulse::{PulseClient, Ticker};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = PulseClient::builder().build()?;
/// let ticker = Ticker::new(&client, "msft");
///
/// if let Some(esg) = ticker.esg().await? {
///     println!("governance: {:?}", esg.governance);
/// }
/// let closes = ticker.closes(90).await?;
/// println!("{} closes for {}", closes.len(), ticker.symbol());
/// # Ok(())
/// # }
/// ```
pub struct Ticker {
    client: PulseClient,
    symbol: String,
}

impl Ticker {
    /// Creates a new `Ticker` for a given symbol.
    pub fn new(client: &PulseClient, symbol: impl AsRef<str>) -> Self {
        Self {
            client: client.clone(),
            symbol: normalize_symbol(symbol.as_ref()),
        }
    }

    /// The normalized symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Fetches the ESG scores; `Ok(None)` when the provider has none for this symbol.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn esg(&self) -> Result<Option<EsgScore>, PulseError> {
        EsgBuilder::new(&self.client, &self.symbol).fetch().await
    }

    /// Fetches daily closes for the trailing `days` days ending today.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn closes(&self, days: u32) -> Result<PriceSeries, PulseError> {
        self.history_builder().lookback_days(days).fetch().await
    }

    /// Fetches daily closes for an explicit window.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be parsed.
    pub async fn closes_in(&self, window: PriceWindow) -> Result<PriceSeries, PulseError> {
        self.history_builder().window(window).fetch().await
    }

    /// Returns a builder for price history requests on this symbol.
    #[must_use]
    pub fn history_builder(&self) -> HistoryBuilder<'_> {
        HistoryBuilder::new(&self.client, &self.symbol)
    }

    /// Looks up the company's display name.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or Yahoo reports no name.
    pub async fn company_name(&self) -> Result<String, PulseError> {
        crate::profile::company_name(&self.client, &self.symbol).await
    }
}
