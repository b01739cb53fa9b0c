use crate::{
    core::{PulseClient, PulseError, quotesummary, wire::from_raw},
    esg::{model::EsgScore, wire::V10Result},
};

pub(super) async fn fetch_esg_score(
    client: &PulseClient,
    symbol: &str,
) -> Result<Option<EsgScore>, PulseError> {
    let root: V10Result =
        quotesummary::fetch_module_result(client, symbol, "esgScores", "esg").await?;

    // A result without the module is "no sustainability data", not an error.
    let Some(esg) = root.esg_scores else {
        return Ok(None);
    };

    Ok(EsgScore::from_raw_percent(
        from_raw(esg.environment_score),
        from_raw(esg.social_score),
        from_raw(esg.governance_score),
    ))
}
