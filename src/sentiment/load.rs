use crate::{
    core::{ModelLoadError, PulseClient, PulseError, net},
    sentiment::{model::LabelMap, wire::ModelConfigNode},
};

const CLASSIFICATION_SUFFIX: &str = "ForSequenceClassification";

pub(super) struct LoadedModel {
    pub(super) labels: LabelMap,
    pub(super) inference_url: url::Url,
}

pub(super) async fn load_model(
    client: &PulseClient,
    model_id: &str,
    token: Option<&str>,
) -> Result<LoadedModel, ModelLoadError> {
    fetch_and_validate(client, model_id, token)
        .await
        .map_err(|source| ModelLoadError {
            model: model_id.to_string(),
            source,
        })
}

async fn fetch_and_validate(
    client: &PulseClient,
    model_id: &str,
    token: Option<&str>,
) -> Result<LoadedModel, PulseError> {
    let model_id = model_id.trim_matches('/');
    if model_id.is_empty() {
        return Err(PulseError::Data("empty model id".into()));
    }

    let config_url = client
        .base_model_hub()
        .join(&format!("{model_id}/resolve/main/config.json"))?;
    let mut req = client.http().get(config_url);
    if let Some(token) = token {
        req = req.bearer_auth(token);
    }
    let resp = net::ensure_success(req.send().await?)?;
    let body = net::get_text(resp, "model_config", model_id, "json").await?;
    let config: ModelConfigNode = serde_json::from_str(&body)?;

    if let Some(archs) = &config.architectures
        && !archs.iter().any(|a| a.ends_with(CLASSIFICATION_SUFFIX))
    {
        return Err(PulseError::Data(format!(
            "{model_id} is not a sequence-classification model (architectures: {})",
            archs.join(", ")
        )));
    }

    let entries = config
        .id2label
        .into_iter()
        .map(|(k, v)| {
            k.parse::<usize>()
                .map(|i| (i, v))
                .map_err(|_| PulseError::Data(format!("non-numeric id2label key `{k}`")))
        })
        .collect::<Result<Vec<_>, _>>()?;
    if entries.is_empty() {
        return Err(PulseError::Data(format!("{model_id} config has no id2label")));
    }

    Ok(LoadedModel {
        labels: LabelMap::new(entries),
        inference_url: client.base_inference().join(model_id)?,
    })
}
