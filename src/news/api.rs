use crate::{
    core::{NewsFetchError, PulseClient, PulseError, net},
    news::{model::Article, wire},
};

/// NewsAPI's upper bound on `pageSize`.
const MAX_PAGE_SIZE: u32 = 100;

pub(super) async fn fetch_everything(
    client: &PulseClient,
    api_key: Option<&str>,
    query: &str,
    language: &str,
    max_results: u32,
) -> Result<Vec<Article>, NewsFetchError> {
    let api_key = api_key.ok_or(NewsFetchError::MissingApiKey)?;
    if max_results == 0 {
        return Ok(Vec::new());
    }

    let mut url = client.base_news().join("v2/everything").map_err(PulseError::from)?;
    url.query_pairs_mut()
        .append_pair("q", query)
        .append_pair("pageSize", &max_results.min(MAX_PAGE_SIZE).to_string())
        .append_pair("language", language);

    let resp = client
        .http()
        .get(url)
        .header("X-Api-Key", api_key)
        .send()
        .await
        .map_err(PulseError::from)?;

    let status = resp.status().as_u16();
    let body = net::get_text(resp, "news_everything", query, "json")
        .await
        .map_err(PulseError::from)?;

    let envelope: wire::EverythingEnvelope = match serde_json::from_str(&body) {
        Ok(env) => env,
        Err(_) if !(200..300).contains(&status) => {
            return Err(NewsFetchError::Rejected {
                status,
                code: "http".into(),
                message: body.chars().take(200).collect(),
            });
        }
        Err(e) => return Err(PulseError::from(e).into()),
    };

    if envelope.status.as_deref() == Some("error") || !(200..300).contains(&status) {
        return Err(NewsFetchError::Rejected {
            status,
            code: envelope.code.unwrap_or_else(|| "unknown".into()),
            message: envelope.message.unwrap_or_default(),
        });
    }

    let limit = usize::try_from(max_results).unwrap_or(usize::MAX);
    let articles = envelope
        .articles
        .into_iter()
        .filter_map(|raw| {
            // Entries without a headline or timestamp cannot become a table row.
            let title = raw.title.filter(|t| !t.trim().is_empty())?;
            let published_at = raw.published_at?;
            Some(Article {
                published_at,
                source: raw.source.and_then(|s| s.name).unwrap_or_default(),
                title,
            })
        })
        .take(limit)
        .collect();

    Ok(articles)
}
