#[cfg(feature = "test-mode")]
use std::env;

use crate::core::PulseError;

/// Read the response body as text.
/// In `test-mode`, if `PULSE_RECORD=1`, the body is saved as a fixture via `core::fixtures`.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    _endpoint: &str,
    _symbol: &str,
    _ext: &str,
) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;

    #[cfg(feature = "test-mode")]
    {
        if env::var("PULSE_RECORD").ok().as_deref() == Some("1")
            && let Err(e) = crate::core::fixtures::record_fixture(_endpoint, _symbol, _ext, &text)
        {
            eprintln!("PULSE_RECORD: failed to write fixture for {_symbol}: {e}");
        }
    }

    Ok(text)
}

/// Turns a non-2xx response into [`PulseError::Status`].
pub(crate) fn ensure_success(resp: reqwest::Response) -> Result<reqwest::Response, PulseError> {
    if resp.status().is_success() {
        Ok(resp)
    } else {
        Err(PulseError::Status {
            status: resp.status().as_u16(),
            url: resp.url().to_string(),
        })
    }
}

/// Appends `symbol` to `base` as a single escaped path segment.
///
/// Tickers are free text, so `/`, `?`, `#` and absolute-URL input must never
/// change the host, path or query of the request.
pub(crate) fn symbol_url(base: &url::Url, symbol: &str) -> Result<url::Url, PulseError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| PulseError::Data(format!("base url cannot be a base: {base}")))?
        .pop_if_empty()
        .push(symbol);
    Ok(url)
}
