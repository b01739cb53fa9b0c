//! Public client surface + builder.
//! Internals are split into `auth` (cookie/crumb) and `constants` (UA + defaults).

mod auth;
mod constants;

use crate::core::PulseError;
use constants::{
    DEFAULT_BASE_CHART, DEFAULT_BASE_INFERENCE, DEFAULT_BASE_MODEL_HUB, DEFAULT_BASE_NEWS,
    DEFAULT_BASE_QUOTE_API, DEFAULT_COOKIE_URL, DEFAULT_CRUMB_URL, USER_AGENT,
};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use url::Url;

#[derive(Debug, Default)]
struct ClientState {
    cookie: Option<String>,
    crumb: Option<String>,
}

/// Shared HTTP client for every upstream this crate talks to.
///
/// Cloning is cheap: the connection pool and the Yahoo credential state are shared
/// between clones.
#[derive(Debug, Clone)]
pub struct PulseClient {
    http: Client,
    base_chart: Url,
    base_quote_api: Url,
    cookie_url: Url,
    crumb_url: Url,
    base_news: Url,
    base_model_hub: Url,
    base_inference: Url,

    state: Arc<RwLock<ClientState>>,
    credential_fetch_lock: Arc<Mutex<()>>,
}

impl PulseClient {
    /// Create a new builder.
    #[must_use]
    pub fn builder() -> PulseClientBuilder {
        PulseClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) const fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) const fn base_chart(&self) -> &Url {
        &self.base_chart
    }
    pub(crate) const fn base_quote_api(&self) -> &Url {
        &self.base_quote_api
    }
    pub(crate) const fn base_news(&self) -> &Url {
        &self.base_news
    }
    pub(crate) const fn base_model_hub(&self) -> &Url {
        &self.base_model_hub
    }
    pub(crate) const fn base_inference(&self) -> &Url {
        &self.base_inference
    }
}

/* ----------------------- Builder ----------------------- */

/// Builder for [`PulseClient`]. Every endpoint base can be overridden, which is how
/// the integration tests point the client at local mock servers.
#[derive(Default)]
pub struct PulseClientBuilder {
    user_agent: Option<String>,
    base_chart: Option<Url>,
    base_quote_api: Option<Url>,
    cookie_url: Option<Url>,
    crumb_url: Option<Url>,
    base_news: Option<Url>,
    base_model_hub: Option<Url>,
    base_inference: Option<Url>,

    preauth_cookie: Option<String>,
    preauth_crumb: Option<String>,

    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl PulseClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the chart API base (e.g., `https://query1.finance.yahoo.com/v8/finance/chart/`).
    #[must_use]
    pub fn base_chart(mut self, url: Url) -> Self {
        self.base_chart = Some(url);
        self
    }

    /// Override the quoteSummary API base (e.g., `https://query1.finance.yahoo.com/v10/finance/quoteSummary/`).
    #[must_use]
    pub fn base_quote_api(mut self, url: Url) -> Self {
        self.base_quote_api = Some(url);
        self
    }

    /// Override the cookie bootstrap URL.
    #[must_use]
    pub fn cookie_url(mut self, url: Url) -> Self {
        self.cookie_url = Some(url);
        self
    }

    /// Override the crumb URL.
    #[must_use]
    pub fn crumb_url(mut self, url: Url) -> Self {
        self.crumb_url = Some(url);
        self
    }

    /// Override the NewsAPI root (e.g., `https://newsapi.org/`).
    #[must_use]
    pub fn base_news(mut self, url: Url) -> Self {
        self.base_news = Some(url);
        self
    }

    /// Override the model hub root (e.g., `https://huggingface.co/`).
    #[must_use]
    pub fn base_model_hub(mut self, url: Url) -> Self {
        self.base_model_hub = Some(url);
        self
    }

    /// Override the hosted inference root; the model id is appended to it.
    #[must_use]
    pub fn base_inference(mut self, url: Url) -> Self {
        self.base_inference = Some(url);
        self
    }

    #[doc(hidden)]
    /// Provide pre-auth credentials (bypass cookie/crumb fetch) in tests.
    #[must_use]
    pub fn _preauth(mut self, cookie: impl Into<String>, crumb: impl Into<String>) -> Self {
        self.preauth_cookie = Some(cookie.into());
        self.preauth_crumb = Some(crumb.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns an error if a default endpoint fails to parse or the HTTP client
    /// cannot be constructed.
    pub fn build(self) -> Result<PulseClient, PulseError> {
        let base_chart = match self.base_chart {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_CHART)?,
        };
        let base_quote_api = match self.base_quote_api {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_QUOTE_API)?,
        };
        let cookie_url = match self.cookie_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_COOKIE_URL)?,
        };
        let crumb_url = match self.crumb_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_CRUMB_URL)?,
        };
        let base_news = match self.base_news {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_NEWS)?,
        };
        let base_model_hub = match self.base_model_hub {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_MODEL_HUB)?,
        };
        let base_inference = match self.base_inference {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_INFERENCE)?,
        };

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .cookie_store(true);

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(PulseClient {
            http,
            base_chart,
            base_quote_api,
            cookie_url,
            crumb_url,
            base_news,
            base_model_hub,
            base_inference,
            state: Arc::new(RwLock::new(ClientState {
                cookie: self.preauth_cookie,
                crumb: self.preauth_crumb,
            })),
            credential_fetch_lock: Arc::new(Mutex::new(())),
        })
    }
}
