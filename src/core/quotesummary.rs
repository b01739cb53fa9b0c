use crate::core::{PulseClient, PulseError, net};
use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct V10Envelope {
    #[serde(rename = "quoteSummary")]
    pub(crate) quote_summary: Option<V10QuoteSummary>,
}

#[derive(Deserialize)]
pub(crate) struct V10QuoteSummary {
    pub(crate) result: Option<Vec<serde_json::Value>>,
    pub(crate) error: Option<V10Error>,
}

#[derive(Deserialize)]
pub(crate) struct V10Error {
    pub(crate) description: String,
}

async fn attempt_fetch(
    client: &PulseClient,
    symbol: &str,
    modules: &str,
    caller: &str,
) -> Result<V10Envelope, PulseError> {
    client.ensure_credentials().await?;

    let crumb = client
        .crumb()
        .await
        .ok_or_else(|| PulseError::Data("Crumb is not set".into()))?;

    let mut url = net::symbol_url(client.base_quote_api(), symbol)?;
    url.query_pairs_mut()
        .append_pair("modules", modules)
        .append_pair("crumb", &crumb);

    let resp = client.http().get(url).send().await?;
    let status = resp.status();
    let resp_url = resp.url().to_string();

    let fixture_endpoint = format!("{caller}_api_{modules}");
    let text = net::get_text(resp, &fixture_endpoint, symbol, "json").await?;
    let parsed = serde_json::from_str::<V10Envelope>(&text);

    if !status.is_success() {
        // Unknown symbols and rejected crumbs arrive as 4xx with an error envelope.
        return match parsed {
            Ok(env) if env.quote_summary.as_ref().is_some_and(|qs| qs.error.is_some()) => Ok(env),
            _ => Err(PulseError::Status {
                status: status.as_u16(),
                url: resp_url,
            }),
        };
    }

    parsed.map_err(|e| PulseError::Data(format!("quoteSummary json parse: {e}")))
}

/// Fetches a quoteSummary envelope, refreshing the crumb once if Yahoo rejects it.
pub(crate) async fn fetch(
    client: &PulseClient,
    symbol: &str,
    modules: &str,
    caller: &str,
) -> Result<V10Envelope, PulseError> {
    for attempt in 0..=1 {
        let env = attempt_fetch(client, symbol, modules, caller).await?;

        if let Some(error) = env.quote_summary.as_ref().and_then(|qs| qs.error.as_ref()) {
            let desc = error.description.to_ascii_lowercase();
            if desc.contains("invalid crumb") && attempt == 0 {
                #[cfg(feature = "tracing")]
                tracing::debug!(caller = %caller, "invalid crumb; refreshing and retrying");
                client.clear_crumb().await;
                continue;
            }
            return Err(PulseError::Data(format!("yahoo error: {}", error.description)));
        }

        return Ok(env);
    }

    Err(PulseError::Data(format!("{caller} API call failed after crumb refresh")))
}

/// Fetches one quoteSummary module and decodes the first result into `T`.
pub(crate) async fn fetch_module_result<T>(
    client: &PulseClient,
    symbol: &str,
    modules: &str,
    caller: &str,
) -> Result<T, PulseError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let env = fetch(client, symbol, modules, caller).await?;

    let result_val = env
        .quote_summary
        .and_then(|qs| qs.result)
        .and_then(|mut v| v.pop())
        .ok_or_else(|| PulseError::Data("empty quoteSummary result".into()))?;

    serde_json::from_value(result_val)
        .map_err(|e| PulseError::Data(format!("quoteSummary result parse: {e}")))
}
