use crate::{
    core::{ClassifyError, PulseClient, PulseError, net},
    sentiment::{
        model::{LabelMap, SentimentLabel, SentimentResult},
        wire::{InferenceRequest, InferenceResponse, LabelScore},
    },
};
use url::Url;

pub(super) async fn classify_batch(
    client: &PulseClient,
    inference_url: &Url,
    token: Option<&str>,
    labels: &LabelMap,
    texts: &[String],
) -> Result<Vec<SentimentResult>, ClassifyError> {
    if texts.is_empty() {
        return Ok(Vec::new());
    }

    let mut req = client
        .http()
        .post(inference_url.clone())
        .json(&InferenceRequest { inputs: texts });
    if let Some(token) = token {
        req = req.bearer_auth(token);
    }

    let resp = req.send().await.map_err(PulseError::from)?;
    let status = resp.status();
    let url = resp.url().to_string();
    let body = net::get_text(resp, "inference", "batch", "json")
        .await
        .map_err(PulseError::from)?;

    let parsed: InferenceResponse = match serde_json::from_str(&body) {
        Ok(p) => p,
        Err(_) if !status.is_success() => {
            return Err(PulseError::Status {
                status: status.as_u16(),
                url,
            }
            .into());
        }
        Err(e) => return Err(PulseError::from(e).into()),
    };

    let candidates = per_input(parsed, texts.len())?;
    if !status.is_success() {
        return Err(PulseError::Status {
            status: status.as_u16(),
            url,
        }
        .into());
    }

    candidates
        .iter()
        .enumerate()
        .map(|(index, cands)| pick_top(index, cands, labels))
        .collect()
}

/// Reshapes any accepted response into one candidate list per input.
pub(super) fn per_input(
    parsed: InferenceResponse,
    expected: usize,
) -> Result<Vec<Vec<LabelScore>>, ClassifyError> {
    let lists = match parsed {
        InferenceResponse::Nested(lists) => lists,
        InferenceResponse::Flat(cands) if expected == 1 => vec![cands],
        InferenceResponse::Flat(cands) => cands.into_iter().map(|c| vec![c]).collect(),
        InferenceResponse::Failure {
            error,
            estimated_time,
        } => {
            let message = match error {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            };
            return Err(ClassifyError::Endpoint {
                message,
                estimated_time,
            });
        }
    };

    if lists.len() != expected {
        return Err(ClassifyError::LengthMismatch {
            expected,
            got: lists.len(),
        });
    }
    Ok(lists)
}

fn pick_top(
    index: usize,
    candidates: &[LabelScore],
    labels: &LabelMap,
) -> Result<SentimentResult, ClassifyError> {
    let top = candidates
        .iter()
        .max_by(|a, b| a.score.total_cmp(&b.score))
        .ok_or(ClassifyError::NoCandidates { index })?;

    if !(0.0..=1.0).contains(&top.score) {
        return Err(ClassifyError::InvalidScore(top.score));
    }
    let label = SentimentLabel::normalize(&top.label, labels)
        .ok_or_else(|| ClassifyError::UnknownLabel(top.label.clone()))?;

    Ok(SentimentResult {
        label,
        score: top.score,
    })
}
