use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct ChartEnvelope {
    pub(crate) chart: Option<ChartNode>,
}

#[derive(Deserialize)]
pub(crate) struct ChartNode {
    pub(crate) result: Option<Vec<ChartResult>>,
    pub(crate) error: Option<ChartError>,
}

#[derive(Deserialize)]
pub(crate) struct ChartError {
    pub(crate) code: String,
    pub(crate) description: String,
}

#[derive(Deserialize)]
pub(crate) struct ChartResult {
    #[serde(default)]
    pub(crate) meta: Option<MetaNode>,
    #[serde(default)]
    pub(crate) timestamp: Option<Vec<i64>>,
    pub(crate) indicators: Indicators,
}

#[derive(Deserialize)]
pub(crate) struct MetaNode {
    #[serde(default)]
    pub(crate) gmtoffset: Option<i64>,
}

#[derive(Deserialize)]
pub(crate) struct Indicators {
    #[serde(default)]
    pub(crate) quote: Vec<QuoteBlock>,
}

#[derive(Deserialize)]
pub(crate) struct QuoteBlock {
    #[serde(default)]
    pub(crate) close: Vec<Option<f64>>,
}
