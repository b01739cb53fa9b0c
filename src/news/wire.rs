use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EverythingEnvelope {
    pub(crate) status: Option<String>,
    pub(crate) code: Option<String>,
    pub(crate) message: Option<String>,
    #[serde(default)]
    pub(crate) articles: Vec<ArticleNode>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ArticleNode {
    pub(crate) source: Option<SourceNode>,
    pub(crate) title: Option<String>,
    pub(crate) published_at: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct SourceNode {
    pub(crate) name: Option<String>,
}
