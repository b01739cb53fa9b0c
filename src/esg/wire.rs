use crate::core::wire::RawNum;
use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct V10Result {
    #[serde(rename = "esgScores")]
    pub(crate) esg_scores: Option<EsgScoresNode>,
}

// Sub-scores are objects: { "raw": ... }
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EsgScoresNode {
    pub(crate) environment_score: Option<RawNum<f64>>,
    pub(crate) social_score: Option<RawNum<f64>>,
    pub(crate) governance_score: Option<RawNum<f64>>,
}
