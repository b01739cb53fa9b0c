use std::sync::Arc;

use chrono::NaiveDate;
use esg_pulse::{
    Config, Dashboard, DiagnosticKind, ModelCache, PulseClient, SentimentLabel,
};
use httpmock::{Method::GET, Method::POST, MockServer};
use serde_json::json;

use crate::common::{
    FakeMarket, FakeNews, MODEL_ID, ScriptedClassifier, UnauthorizedNews, approx_eq, article,
    client_for, mock_hub_config,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 8, 5).unwrap()
}

fn config() -> Config {
    Config {
        max_articles: 5,
        ..Config::default()
    }
}

fn apple_news() -> Arc<FakeNews> {
    Arc::new(FakeNews::with(vec![
        article("2024-08-01T20:31:00Z", "Reuters", "Apple beats earnings"),
        article("2024-08-02T09:00:00Z", "Bloomberg", "Apple faces lawsuit"),
        article("2024-08-03T14:15:00Z", "CNBC", "Apple stock flat"),
    ]))
}

fn apple_classifier() -> Arc<ScriptedClassifier> {
    Arc::new(ScriptedClassifier::new(vec![
        ("Apple beats earnings", SentimentLabel::Positive, 0.9),
        ("Apple faces lawsuit", SentimentLabel::Negative, 0.8),
        ("Apple stock flat", SentimentLabel::Neutral, 0.7),
    ]))
}

fn offline_client() -> PulseClient {
    PulseClient::builder().build().unwrap()
}

fn dashboard_with(
    config: Config,
    market: &Arc<FakeMarket>,
    news: Arc<dyn esg_pulse::NewsSource>,
    classifier: Arc<ScriptedClassifier>,
) -> Dashboard {
    Dashboard::new(&offline_client(), config)
        .with_esg_provider(market.clone())
        .with_price_provider(market.clone())
        .with_company_directory(market.clone())
        .with_news_source(news)
        .with_classifier(classifier)
}

#[tokio::test]
async fn healthy_render_fills_every_section() {
    let market = Arc::new(FakeMarket::healthy("Apple Inc."));
    let news = apple_news();
    let classifier = apple_classifier();
    let dashboard = dashboard_with(config(), &market, news.clone(), classifier.clone());

    let snap = dashboard.render_on(" aapl ", 365, today()).await;

    assert_eq!(snap.ticker, "AAPL");
    assert_eq!(snap.company_name, "Apple Inc.");
    assert!(market.seen().iter().all(|s| s == "AAPL"));
    assert_eq!(snap.esg.as_ref().and_then(|e| e.governance), Some(0.385));
    assert_eq!(snap.prices.len(), 1);
    assert_eq!(news.queries(), vec![("Apple Inc. OR AAPL".to_string(), 5)]);
    assert_eq!(classifier.batches().len(), 1);

    let news = snap.news.as_ref().expect("news enabled");
    assert_eq!(news.table.len(), 3);
    assert!(approx_eq(snap.average_sentiment(), 0.8));
    assert!(snap.diagnostics.is_empty());
}

#[tokio::test]
async fn thirty_day_window_ends_today() {
    let market = Arc::new(FakeMarket::healthy("Apple Inc."));
    let dashboard = dashboard_with(config(), &market, apple_news(), apple_classifier());

    let snap = dashboard.render_on("AAPL", 30, today()).await;

    assert_eq!(snap.window.start, NaiveDate::from_ymd_opt(2024, 7, 6).unwrap());
    assert_eq!(snap.window.end, today());
    assert_eq!(market.windows(), vec![snap.window]);
}

#[tokio::test]
async fn lookback_is_clamped() {
    let market = Arc::new(FakeMarket::healthy("Apple Inc."));
    let dashboard = dashboard_with(config(), &market, apple_news(), apple_classifier());

    let short = dashboard.render_on("AAPL", 5, today()).await;
    assert_eq!((short.window.end - short.window.start).num_days(), 30);

    let long = dashboard.render_on("AAPL", 1000, today()).await;
    assert_eq!((long.window.end - long.window.start).num_days(), 730);
}

#[tokio::test]
async fn missing_esg_is_not_a_failure() {
    let market = Arc::new(FakeMarket {
        esg: Ok(None),
        ..FakeMarket::healthy("XYZ Corp")
    });
    let dashboard = dashboard_with(config(), &market, apple_news(), apple_classifier());

    let snap = dashboard.render_on("XYZ", 365, today()).await;

    assert!(snap.esg.is_none());
    assert!(snap.diagnostics.is_empty());
}

#[tokio::test]
async fn esg_failure_is_reported() {
    let market = Arc::new(FakeMarket {
        esg: Err("esg down"),
        ..FakeMarket::healthy("Apple Inc.")
    });
    let dashboard = dashboard_with(config(), &market, apple_news(), apple_classifier());

    let snap = dashboard.render_on("AAPL", 365, today()).await;

    assert!(snap.esg.is_none());
    assert_eq!(snap.diagnostics.len(), 1);
    assert_eq!(snap.diagnostics[0].kind, DiagnosticKind::Esg);
    assert!(snap.diagnostics[0].message.contains("esg down"));
    assert_eq!(snap.prices.len(), 1);
}

#[tokio::test]
async fn company_failure_falls_back_to_ticker() {
    let market = Arc::new(FakeMarket {
        name: Err("profile down"),
        ..FakeMarket::healthy("")
    });
    let news = Arc::new(FakeNews::default());
    let dashboard = dashboard_with(config(), &market, news.clone(), apple_classifier());

    let snap = dashboard.render_on("msft", 365, today()).await;

    assert_eq!(snap.company_name, "MSFT");
    assert_eq!(news.queries(), vec![("MSFT".to_string(), 5)]);
    let kinds: Vec<DiagnosticKind> = snap.diagnostics.iter().map(|d| d.kind).collect();
    assert_eq!(kinds, vec![DiagnosticKind::Company]);
}

#[tokio::test]
async fn total_failure_still_renders() {
    let market = Arc::new(FakeMarket::failing());
    let dashboard = dashboard_with(
        config(),
        &market,
        Arc::new(UnauthorizedNews::default()),
        apple_classifier(),
    );

    let snap = dashboard.render_on("AAPL", 365, today()).await;

    assert_eq!(snap.company_name, "AAPL");
    assert!(snap.esg.is_none());
    assert!(snap.prices.is_empty());
    let news = snap.news.as_ref().expect("news enabled");
    assert!(news.is_empty());
    assert_eq!(snap.average_sentiment(), 0.0);

    let kinds: Vec<DiagnosticKind> = snap.diagnostics.iter().map(|d| d.kind).collect();
    assert_eq!(
        kinds,
        vec![
            DiagnosticKind::Esg,
            DiagnosticKind::Prices,
            DiagnosticKind::Company,
            DiagnosticKind::News
        ]
    );
}

#[tokio::test]
async fn disabled_news_skips_pipeline() {
    let market = Arc::new(FakeMarket::healthy("Apple Inc."));
    let news = apple_news();
    let classifier = apple_classifier();
    let config = Config {
        news_enabled: false,
        ..config()
    };
    let dashboard = dashboard_with(config, &market, news.clone(), classifier.clone());

    let snap = dashboard.render_on("AAPL", 365, today()).await;

    assert!(snap.news.is_none());
    assert!(news.queries().is_empty());
    assert!(classifier.batches().is_empty());
    assert!(snap.diagnostics.is_empty());
    assert_eq!(snap.average_sentiment(), 0.0);
}

#[tokio::test]
async fn model_load_failure_is_reported_once() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path(format!("/hub/{MODEL_ID}/resolve/main/config.json"));
        then.status(404).body("Repository not found");
    });
    let client = client_for(&server);
    let cache: &'static ModelCache = Box::leak(Box::new(ModelCache::new()));
    let market = Arc::new(FakeMarket::healthy("Apple Inc."));
    let news = apple_news();

    let dashboard = Dashboard::new(&client, config())
        .with_esg_provider(market.clone())
        .with_price_provider(market.clone())
        .with_company_directory(market.clone())
        .with_news_source(news.clone())
        .with_model_cache(&client, cache);

    let snap = dashboard.render_on("AAPL", 365, today()).await;

    assert!(news.queries().is_empty());
    assert_eq!(snap.diagnostics.len(), 1);
    assert_eq!(snap.diagnostics[0].kind, DiagnosticKind::Model);
    assert!(snap.diagnostics[0].message.contains(MODEL_ID));

    let news = snap.news.as_ref().expect("news enabled");
    assert!(news.is_empty());
    assert_eq!(news.warning.as_ref().map(|w| w.kind), Some(DiagnosticKind::Model));
    assert!(snap.esg.is_some());
}

#[tokio::test]
async fn hub_model_is_loaded_and_used() {
    let server = MockServer::start();
    let hub = mock_hub_config(&server);
    let infer = server.mock(|when, then| {
        when.method(POST).path(format!("/models/{MODEL_ID}"));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!([
                [{"label": "POS", "score": 0.6}],
                [{"label": "NEG", "score": 0.6}],
                [{"label": "NEU", "score": 0.9}]
            ]));
    });
    let client = client_for(&server);
    let cache: &'static ModelCache = Box::leak(Box::new(ModelCache::new()));
    let market = Arc::new(FakeMarket::healthy("Apple Inc."));

    let dashboard = Dashboard::new(&client, config())
        .with_esg_provider(market.clone())
        .with_price_provider(market.clone())
        .with_company_directory(market.clone())
        .with_news_source(apple_news())
        .with_model_cache(&client, cache);

    let first = dashboard.render_on("AAPL", 365, today()).await;
    let second = dashboard.render_on("AAPL", 365, today()).await;

    hub.assert_hits(1);
    infer.assert_hits(2);
    assert!(cache.get().is_some());
    assert!(first.diagnostics.is_empty());
    assert!(approx_eq(first.average_sentiment(), 0.7));
    assert_eq!(first, second);
}
