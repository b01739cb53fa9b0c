use thiserror::Error;

/// The transport-level error type shared by every provider in this crate.
#[derive(Debug, Error)]
pub enum PulseError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The response body was not valid JSON for the expected schema.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The data received from the API was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// Cookie or crumb acquisition for Yahoo endpoints failed.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// An invalid date range was provided for a price request (start must not be after end).
    #[error("invalid date range: start must not be after end")]
    InvalidDates,
}

/// The sentiment model could not be fetched or instantiated.
///
/// Fatal to sentiment features only: the dashboard renders without news analysis.
#[derive(Debug, Error)]
#[error("failed to load sentiment model `{model}`: {source}")]
pub struct ModelLoadError {
    /// Hub identifier of the model that failed to load.
    pub model: String,
    /// What went wrong.
    #[source]
    pub source: PulseError,
}

/// A news fetch failed. Always degraded to "no news data" by the core.
#[derive(Debug, Error)]
pub enum NewsFetchError {
    /// No API key was configured (`NEWS_API_KEY`).
    #[error("news API key is not configured")]
    MissingApiKey,

    /// The provider answered but refused the request (bad key, quota, bad query).
    #[error("news provider rejected the request ({status}, {code}): {message}")]
    Rejected {
        /// HTTP status code of the response.
        status: u16,
        /// Provider error code such as `apiKeyInvalid` or `rateLimited`.
        code: String,
        /// Human-readable message from the provider.
        message: String,
    },

    /// The request could not be completed or the response could not be decoded.
    #[error(transparent)]
    Transport(#[from] PulseError),
}

/// An ESG, price or company-name lookup failed for a symbol.
#[derive(Debug, Error)]
#[error("{provider} lookup for {symbol} failed: {source}")]
pub struct DataProviderError {
    /// Which provider failed (`esg`, `prices`, `company`).
    pub provider: &'static str,
    /// The symbol that was requested.
    pub symbol: String,
    /// Underlying cause.
    #[source]
    pub source: PulseError,
}

impl DataProviderError {
    pub(crate) fn new(provider: &'static str, symbol: &str, source: PulseError) -> Self {
        Self {
            provider,
            symbol: symbol.to_string(),
            source,
        }
    }
}

/// A batch classification failed.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// The inference request failed or returned an undecodable body.
    #[error(transparent)]
    Transport(#[from] PulseError),

    /// The inference endpoint reported an error (e.g. the model is still loading).
    #[error("inference endpoint error: {message}")]
    Endpoint {
        /// Error message returned by the endpoint.
        message: String,
        /// Seconds until the model is expected to be ready, when reported.
        estimated_time: Option<f64>,
    },

    /// The number of results does not match the number of inputs.
    #[error("classifier returned {got} results for {expected} inputs")]
    LengthMismatch {
        /// Number of texts sent.
        expected: usize,
        /// Number of results received.
        got: usize,
    },

    /// An input received no candidate labels at all.
    #[error("classifier returned no candidates for input {index}")]
    NoCandidates {
        /// Position of the input in the batch.
        index: usize,
    },

    /// The model produced a label outside negative/neutral/positive.
    #[error("unrecognized sentiment label: {0}")]
    UnknownLabel(String),

    /// The model produced a score that is not a probability.
    #[error("score {0} is not a probability")]
    InvalidScore(f64),
}
