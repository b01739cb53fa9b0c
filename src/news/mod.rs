mod api;
mod model;
mod wire;

pub use model::{Article, company_query};

use crate::core::{Config, NewsFetchError, NewsSource, PulseClient, ServiceFuture};

/// [`NewsSource`] backed by NewsAPI's `/v2/everything` search.
#[derive(Debug, Clone)]
pub struct NewsApiSource {
    client: PulseClient,
    api_key: Option<String>,
    language: String,
}

impl NewsApiSource {
    /// Creates a source with an optional API key; English results only.
    pub fn new(client: &PulseClient, api_key: Option<String>) -> Self {
        Self {
            client: client.clone(),
            api_key,
            language: "en".into(),
        }
    }

    /// Creates a source using the key from `config`.
    #[must_use]
    pub fn from_config(client: &PulseClient, config: &Config) -> Self {
        Self::new(client, config.news_api_key.clone())
    }

    /// Sets the ISO 639-1 language filter applied at the source.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Searches for articles matching `query`, returning at most `max_results`.
    ///
    /// # Errors
    ///
    /// Returns [`NewsFetchError::MissingApiKey`] without a request when no key is
    /// configured, [`NewsFetchError::Rejected`] when NewsAPI refuses the request
    /// (invalid key, quota), and [`NewsFetchError::Transport`] for network or decoding
    /// failures.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn search(&self, query: &str, max_results: u32) -> Result<Vec<Article>, NewsFetchError> {
        api::fetch_everything(
            &self.client,
            self.api_key.as_deref(),
            query,
            &self.language,
            max_results,
        )
        .await
    }
}

impl NewsSource for NewsApiSource {
    fn fetch<'a>(
        &'a self,
        query: &'a str,
        max_results: u32,
    ) -> ServiceFuture<'a, Result<Vec<Article>, NewsFetchError>> {
        Box::pin(self.search(query, max_results))
    }
}
