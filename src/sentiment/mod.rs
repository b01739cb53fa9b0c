//! Headline sentiment classification.
//!
//! A [`HfSentimentModel`] is a pretrained text-classification model served by a hosted
//! inference endpoint. Loading reads the model's `config.json` from the hub, checks that
//! it is a sequence classifier and keeps its `id2label` vocabulary; tokenization and
//! the forward pass happen behind the endpoint. Outputs are normalized into the fixed
//! [`SentimentLabel`] vocabulary regardless of the model's native naming.

mod cache;
mod classify;
mod load;
mod model;
mod wire;

pub use cache::ModelCache;
pub use model::{LabelMap, SentimentLabel, SentimentResult};

use crate::core::{
    ClassifyError, ModelLoadError, PulseClient, SentimentClassifier, ServiceFuture,
};
use url::Url;

/// A loaded sentiment model. Immutable once built; share it through an `Arc`.
#[derive(Clone)]
pub struct HfSentimentModel {
    client: PulseClient,
    model_id: String,
    inference_url: Url,
    token: Option<String>,
    labels: LabelMap,
}

impl std::fmt::Debug for HfSentimentModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HfSentimentModel")
            .field("model_id", &self.model_id)
            .field("inference_url", &self.inference_url.as_str())
            .field("labels", &self.labels)
            .finish_non_exhaustive()
    }
}

impl HfSentimentModel {
    /// Loads the model `model_id` from the hub.
    ///
    /// Prefer [`ModelCache::get_or_load`], which performs this once per process.
    ///
    /// # Errors
    ///
    /// Returns [`ModelLoadError`] if the config cannot be fetched or decoded, or if it
    /// does not describe a sequence-classification model with a label vocabulary.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(client, token), err))]
    pub async fn load(
        client: &PulseClient,
        model_id: &str,
        token: Option<String>,
    ) -> Result<Self, ModelLoadError> {
        let loaded = load::load_model(client, model_id, token.as_deref()).await?;
        Ok(Self {
            client: client.clone(),
            model_id: model_id.to_string(),
            inference_url: loaded.inference_url,
            token,
            labels: loaded.labels,
        })
    }

    /// Hub identifier of the model.
    #[must_use]
    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// The model's native class vocabulary.
    #[must_use]
    pub const fn labels(&self) -> &LabelMap {
        &self.labels
    }

    /// Classifies `texts` with a single request, preserving input order.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError`] if the request fails, the endpoint reports an error,
    /// the result count differs from the input count, or a label falls outside the
    /// negative/neutral/positive vocabulary.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self, texts), err, fields(model = %self.model_id, batch = texts.len()))
    )]
    pub async fn classify_batch(
        &self,
        texts: &[String],
    ) -> Result<Vec<SentimentResult>, ClassifyError> {
        classify::classify_batch(
            &self.client,
            &self.inference_url,
            self.token.as_deref(),
            &self.labels,
            texts,
        )
        .await
    }
}

impl SentimentClassifier for HfSentimentModel {
    fn classify<'a>(
        &'a self,
        texts: &'a [String],
    ) -> ServiceFuture<'a, Result<Vec<SentimentResult>, ClassifyError>> {
        Box::pin(self.classify_batch(texts))
    }
}
