use crate::core::{PulseClient, PulseError, net};
use crate::history::{
    model::{PricePoint, PriceSeries, PriceWindow, local_date},
    wire::ChartEnvelope,
};

pub(super) async fn fetch_closes(
    client: &PulseClient,
    symbol: &str,
    window: PriceWindow,
) -> Result<PriceSeries, PulseError> {
    let (period1, period2) = window.unix_period()?;

    let mut url = net::symbol_url(client.base_chart(), symbol)?;
    url.query_pairs_mut()
        .append_pair("period1", &period1.to_string())
        .append_pair("period2", &period2.to_string())
        .append_pair("interval", "1d")
        .append_pair("includePrePost", "false");

    let resp = client.http().get(url.clone()).send().await?;
    let status = resp.status();
    // Unknown symbols come back as 404 with a regular error envelope.
    if !status.is_success() && status.as_u16() != 404 {
        return Err(PulseError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let body = net::get_text(resp, "history_chart", symbol, "json").await?;
    let parsed: ChartEnvelope = match serde_json::from_str(&body) {
        Ok(p) => p,
        Err(_) if !status.is_success() => {
            return Err(PulseError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Err(e) => return Err(PulseError::Data(format!("json parse error: {e}"))),
    };

    decode_closes(parsed, window)
}

fn decode_closes(parsed: ChartEnvelope, window: PriceWindow) -> Result<PriceSeries, PulseError> {
    let chart = parsed
        .chart
        .ok_or_else(|| PulseError::Data("missing chart".into()))?;

    if let Some(err) = chart.error {
        if err.code.eq_ignore_ascii_case("not found") {
            return Ok(Vec::new());
        }
        return Err(PulseError::Data(format!(
            "yahoo error: {} - {}",
            err.code, err.description
        )));
    }

    let Some(r0) = chart.result.and_then(|mut r| r.pop()) else {
        return Ok(Vec::new());
    };

    let gmtoffset = r0.meta.and_then(|m| m.gmtoffset).unwrap_or(0);
    let ts = r0.timestamp.unwrap_or_default();
    let closes = r0
        .indicators
        .quote
        .into_iter()
        .next()
        .map(|q| q.close)
        .unwrap_or_default();

    let mut points: PriceSeries = ts
        .iter()
        .zip(closes)
        .filter_map(|(&t, close)| {
            let close = close.filter(|c| c.is_finite())?;
            let date = local_date(t, gmtoffset)?;
            window.contains(date).then_some(PricePoint { date, close })
        })
        .collect();

    points.sort_by_key(|p| p.date);
    Ok(points)
}
