use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The subset of a model's `config.json` needed to use it for classification.
#[derive(Deserialize)]
pub(crate) struct ModelConfigNode {
    #[serde(default)]
    pub(crate) id2label: BTreeMap<String, String>,
    #[serde(default)]
    pub(crate) architectures: Option<Vec<String>>,
}

#[derive(Serialize)]
pub(crate) struct InferenceRequest<'a> {
    pub(crate) inputs: &'a [String],
}

#[derive(Deserialize, Clone)]
pub(crate) struct LabelScore {
    pub(crate) label: String,
    pub(crate) score: f64,
}

/// The endpoint answers in one of several shapes depending on batch size and
/// server version.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum InferenceResponse {
    /// One candidate list per input.
    Nested(Vec<Vec<LabelScore>>),
    /// Either the candidates of a single input or the top candidate of each input.
    Flat(Vec<LabelScore>),
    Failure {
        error: serde_json::Value,
        #[serde(default)]
        estimated_time: Option<f64>,
    },
}
