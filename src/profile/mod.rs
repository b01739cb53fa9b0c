//! Company display names.

mod api;

use crate::core::{CompanyDirectory, DataProviderError, PulseClient, PulseError, ServiceFuture};

/// Looks up the display name (`longName`, else `shortName`) for `symbol`.
///
/// # Errors
///
/// Returns an error if the request fails or Yahoo reports no name for the symbol.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn company_name(client: &PulseClient, symbol: &str) -> Result<String, PulseError> {
    api::load_company_name(client, symbol).await
}

impl CompanyDirectory for PulseClient {
    fn company_name<'a>(
        &'a self,
        symbol: &'a str,
    ) -> ServiceFuture<'a, Result<String, DataProviderError>> {
        Box::pin(async move {
            company_name(self, symbol)
                .await
                .map_err(|e| DataProviderError::new("company", symbol, e))
        })
    }
}
