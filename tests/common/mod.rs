#![allow(dead_code)]

use std::path::Path;
use std::sync::Mutex;

use esg_pulse::{
    Article, ClassifyError, CompanyDirectory, DataProviderError, EsgProvider, EsgScore,
    NewsFetchError, NewsSource, PriceProvider, PricePoint, PriceSeries, PriceWindow, PulseClient,
    PulseClientBuilder, PulseError, SentimentClassifier, SentimentLabel, SentimentResult,
    ServiceFuture,
};
use httpmock::{Method::GET, Mock, MockServer};
use url::Url;

pub const MODEL_ID: &str = "finiteautomata/bertweet-base-sentiment-analysis";

pub fn fixture(endpoint: &str, symbol: &str, ext: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let path = dir.join(format!("{endpoint}_{symbol}.{ext}"));
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

/// A builder with every endpoint pointed at `server`.
pub fn builder_for(server: &MockServer) -> PulseClientBuilder {
    let base = server.base_url();
    let url = |path: &str| Url::parse(&format!("{base}{path}")).unwrap();
    PulseClient::builder()
        .base_chart(url("/v8/finance/chart/"))
        .base_quote_api(url("/v10/finance/quoteSummary/"))
        .cookie_url(url("/consent"))
        .crumb_url(url("/v1/test/getcrumb"))
        .base_news(url("/"))
        .base_model_hub(url("/hub/"))
        .base_inference(url("/models/"))
}

/// A client pointed at `server` that skips the cookie/crumb handshake.
pub fn client_for(server: &MockServer) -> PulseClient {
    builder_for(server)._preauth("cookie", "crumb").build().unwrap()
}

pub fn mock_cookie_crumb(server: &MockServer) -> (Mock<'_>, Mock<'_>) {
    let cookie_mock = server.mock(|when, then| {
        when.method(GET).path("/consent");
        then.status(200).header(
            "set-cookie",
            "A=B; Max-Age=315360000; Domain=.yahoo.com; Path=/; Secure; SameSite=None",
        );
    });
    let crumb_mock = server.mock(|when, then| {
        when.method(GET).path("/v1/test/getcrumb");
        then.status(200).body("crumb-value");
    });
    (cookie_mock, crumb_mock)
}

pub fn hub_config_body() -> serde_json::Value {
    serde_json::json!({
        "architectures": ["RobertaForSequenceClassification"],
        "id2label": { "0": "NEG", "1": "NEU", "2": "POS" },
        "model_type": "roberta"
    })
}

pub fn mock_hub_config(server: &MockServer) -> Mock<'_> {
    server.mock(|when, then| {
        when.method(GET)
            .path(format!("/hub/{MODEL_ID}/resolve/main/config.json"));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(hub_config_body());
    })
}

pub fn article(date: &str, source: &str, title: &str) -> Article {
    Article {
        published_at: date.to_string(),
        source: source.to_string(),
        title: title.to_string(),
    }
}

/* ----------------------- fakes ----------------------- */

/// News source returning a fixed list and recording every query.
#[derive(Default)]
pub struct FakeNews {
    pub articles: Vec<Article>,
    pub queries: Mutex<Vec<(String, u32)>>,
}

impl FakeNews {
    pub fn with(articles: Vec<Article>) -> Self {
        Self {
            articles,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<(String, u32)> {
        self.queries.lock().unwrap().clone()
    }
}

impl NewsSource for FakeNews {
    fn fetch<'a>(
        &'a self,
        query: &'a str,
        max_results: u32,
    ) -> ServiceFuture<'a, Result<Vec<Article>, NewsFetchError>> {
        Box::pin(async move {
            self.queries
                .lock()
                .unwrap()
                .push((query.to_string(), max_results));
            let limit = max_results as usize;
            Ok(self.articles.iter().take(limit).cloned().collect())
        })
    }
}

/// News source that always fails the way a missing API key does.
#[derive(Default)]
pub struct UnauthorizedNews {
    pub calls: Mutex<usize>,
}

impl NewsSource for UnauthorizedNews {
    fn fetch<'a>(
        &'a self,
        _query: &'a str,
        _max_results: u32,
    ) -> ServiceFuture<'a, Result<Vec<Article>, NewsFetchError>> {
        Box::pin(async move {
            *self.calls.lock().unwrap() += 1;
            Err(NewsFetchError::MissingApiKey)
        })
    }
}

/// Classifier with canned answers keyed by headline; records every batch.
pub struct ScriptedClassifier {
    pub answers: Vec<(&'static str, SentimentLabel, f64)>,
    pub batches: Mutex<Vec<Vec<String>>>,
    pub drop_last: bool,
}

impl ScriptedClassifier {
    pub fn new(answers: Vec<(&'static str, SentimentLabel, f64)>) -> Self {
        Self {
            answers,
            batches: Mutex::new(Vec::new()),
            drop_last: false,
        }
    }

    pub fn batches(&self) -> Vec<Vec<String>> {
        self.batches.lock().unwrap().clone()
    }
}

impl SentimentClassifier for ScriptedClassifier {
    fn classify<'a>(
        &'a self,
        texts: &'a [String],
    ) -> ServiceFuture<'a, Result<Vec<SentimentResult>, ClassifyError>> {
        Box::pin(async move {
            self.batches.lock().unwrap().push(texts.to_vec());
            let mut out = texts
                .iter()
                .map(|t| {
                    self.answers
                        .iter()
                        .find(|(h, _, _)| h == t)
                        .map(|&(_, label, score)| SentimentResult { label, score })
                        .ok_or_else(|| ClassifyError::UnknownLabel(t.clone()))
                })
                .collect::<Result<Vec<_>, _>>()?;
            if self.drop_last {
                out.pop();
            }
            Ok(out)
        })
    }
}

/// Yahoo-like providers with fixed answers that record the symbols they see.
pub struct FakeMarket {
    pub esg: Result<Option<EsgScore>, &'static str>,
    pub closes: Result<PriceSeries, &'static str>,
    pub name: Result<String, &'static str>,
    pub seen: Mutex<Vec<String>>,
    pub windows: Mutex<Vec<PriceWindow>>,
}

impl FakeMarket {
    pub fn healthy(name: &str) -> Self {
        Self {
            esg: Ok(Some(EsgScore {
                environment: Some(0.45),
                social: Some(0.62),
                governance: Some(0.385),
            })),
            closes: Ok(vec![PricePoint {
                date: chrono::NaiveDate::from_ymd_opt(2024, 6, 3).unwrap(),
                close: 194.03,
            }]),
            name: Ok(name.to_string()),
            seen: Mutex::new(Vec::new()),
            windows: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            esg: Err("esg down"),
            closes: Err("chart down"),
            name: Err("profile down"),
            seen: Mutex::new(Vec::new()),
            windows: Mutex::new(Vec::new()),
        }
    }

    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }

    pub fn windows(&self) -> Vec<PriceWindow> {
        self.windows.lock().unwrap().clone()
    }
}

fn provider_error(provider: &'static str, symbol: &str, msg: &str) -> DataProviderError {
    DataProviderError {
        provider,
        symbol: symbol.to_string(),
        source: PulseError::Data(msg.to_string()),
    }
}

impl EsgProvider for FakeMarket {
    fn esg<'a>(
        &'a self,
        symbol: &'a str,
    ) -> ServiceFuture<'a, Result<Option<EsgScore>, DataProviderError>> {
        Box::pin(async move {
            self.seen.lock().unwrap().push(symbol.to_string());
            self.esg.map_err(|m| provider_error("esg", symbol, m))
        })
    }
}

impl PriceProvider for FakeMarket {
    fn closes<'a>(
        &'a self,
        symbol: &'a str,
        window: PriceWindow,
    ) -> ServiceFuture<'a, Result<PriceSeries, DataProviderError>> {
        Box::pin(async move {
            self.seen.lock().unwrap().push(symbol.to_string());
            self.windows.lock().unwrap().push(window);
            self.closes
                .clone()
                .map_err(|m| provider_error("prices", symbol, m))
        })
    }
}

impl CompanyDirectory for FakeMarket {
    fn company_name<'a>(
        &'a self,
        symbol: &'a str,
    ) -> ServiceFuture<'a, Result<String, DataProviderError>> {
        Box::pin(async move {
            self.seen.lock().unwrap().push(symbol.to_string());
            self.name
                .clone()
                .map_err(|m| provider_error("company", symbol, m))
        })
    }
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
