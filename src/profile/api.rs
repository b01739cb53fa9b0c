//! quoteSummary v10 `quoteType` path for company display names.

use crate::core::{PulseClient, PulseError, quotesummary};
use serde::Deserialize;

pub(super) async fn load_company_name(
    client: &PulseClient,
    symbol: &str,
) -> Result<String, PulseError> {
    let first: V10Result =
        quotesummary::fetch_module_result(client, symbol, "quoteType", "profile").await?;

    first
        .quote_type
        .and_then(|q| non_blank(q.long_name).or_else(|| non_blank(q.short_name)))
        .ok_or_else(|| PulseError::Data(format!("no display name for {symbol}")))
}

fn non_blank(s: Option<String>) -> Option<String> {
    s.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/* --------- Minimal serde mapping for the API JSON --------- */

#[derive(Deserialize)]
struct V10Result {
    #[serde(rename = "quoteType")]
    quote_type: Option<QuoteTypeNode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuoteTypeNode {
    long_name: Option<String>,
    short_name: Option<String>,
}
