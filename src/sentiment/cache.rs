use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::core::{Config, ModelLoadError, PulseClient};
use crate::sentiment::HfSentimentModel;

/// Once-initialized holder for a loaded sentiment model.
///
/// Concurrent first callers share a single load; every caller afterwards gets the same
/// `Arc` without touching the network. A failed load leaves the cache empty, so the
/// next call tries again.
#[derive(Debug, Default)]
pub struct ModelCache {
    cell: OnceCell<Arc<HfSentimentModel>>,
}

static GLOBAL: ModelCache = ModelCache::new();

impl ModelCache {
    /// Creates an empty cache.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::const_new(),
        }
    }

    /// The process-wide cache.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Returns the cached model, loading it with `config` on first use.
    ///
    /// # Errors
    ///
    /// Returns [`ModelLoadError`] when the model cannot be loaded. The failure is not
    /// cached.
    pub async fn get_or_load(
        &self,
        client: &PulseClient,
        config: &Config,
    ) -> Result<Arc<HfSentimentModel>, ModelLoadError> {
        self.cell
            .get_or_try_init(|| async {
                HfSentimentModel::load(client, &config.model_id, config.hf_token.clone())
                    .await
                    .map(Arc::new)
            })
            .await
            .cloned()
    }

    /// The cached model, if one has been loaded.
    #[must_use]
    pub fn get(&self) -> Option<Arc<HfSentimentModel>> {
        self.cell.get().cloned()
    }
}
