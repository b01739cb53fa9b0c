//! Classify a few headlines with the configured sentiment model.

use esg_pulse::{Config, ModelCache, PulseClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env();
    let client = PulseClient::builder().build()?;

    println!("Loading {} (first time may take a while)...", config.model_id);
    let model = ModelCache::global().get_or_load(&client, &config).await?;
    println!("labels: {:?}", model.labels().names().collect::<Vec<_>>());

    let headlines = vec![
        "Apple beats earnings".to_string(),
        "Apple faces lawsuit".to_string(),
        "Apple stock flat".to_string(),
    ];
    let results = model.classify_batch(&headlines).await?;

    for (h, r) in headlines.iter().zip(&results) {
        println!("{:<8} {:.3}  {h}", r.label, r.score);
    }

    // Second lookup is served from the cache.
    let again = ModelCache::global().get_or_load(&client, &config).await?;
    assert!(std::sync::Arc::ptr_eq(&model, &again));
    Ok(())
}
